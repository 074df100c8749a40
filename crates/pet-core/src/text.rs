//! Small string helpers shared by status and report rendering.

/// Upper-cases the first character, leaving the rest untouched.
pub fn capitalise(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Joins items as "a", "a and b" or "a, b, and c".
pub fn join_with_and<S: AsRef<str>>(items: &[S]) -> String {
    match items {
        [] => String::new(),
        [one] => one.as_ref().to_string(),
        [a, b] => format!("{} and {}", a.as_ref(), b.as_ref()),
        [init @ .., last] => {
            let head: Vec<&str> = init.iter().map(AsRef::as_ref).collect();
            format!("{}, and {}", head.join(", "), last.as_ref())
        }
    }
}

/// Possessive form: "Ryan" -> "Ryan's", "Jess" -> "Jess'".
pub fn possessive(s: &str) -> String {
    match s.chars().last() {
        None => String::new(),
        Some(c) if c.eq_ignore_ascii_case(&'s') => format!("{s}'"),
        Some(_) => format!("{s}'s"),
    }
}
