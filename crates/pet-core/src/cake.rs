//! Feed items and the built-in catalog.

use serde::{Deserialize, Serialize};

use crate::text::capitalise;

/// An immutable feed item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cake {
    /// Cake name, e.g. "banana".
    #[serde(rename = "type")]
    pub kind: String,
    /// Hunger removed when eaten.
    #[serde(alias = "hunger")]
    pub hunger_restore: i32,
    /// Health added when eaten.
    #[serde(alias = "health")]
    pub health_restore: i32,
    /// Price charged against the wallet.
    pub cost: i64,
}

impl Cake {
    pub fn new(kind: impl Into<String>, hunger_restore: i32, health_restore: i32, cost: i64) -> Self {
        Self {
            kind: kind.into(),
            hunger_restore,
            health_restore,
            cost,
        }
    }

    /// Cake name with its first letter upper-cased.
    pub fn capital_type(&self) -> String {
        capitalise(&self.kind)
    }
}

/// The stock menu used when no catalog file is supplied.
pub fn default_catalog() -> Vec<Cake> {
    vec![
        Cake::new("cake", 2, 0, 0),
        Cake::new("berry", 10, 5, 5),
        Cake::new("banana", 15, 2, 10),
        Cake::new("peach", 20, 0, 20),
        Cake::new("pea", 5, 10, 10),
        Cake::new("bean", 2, 15, 25),
        Cake::new("pod", 0, 20, 40),
        Cake::new("ambrosia", 10_000, 10_000, 200),
    ]
}
