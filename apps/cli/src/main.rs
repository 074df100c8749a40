#![deny(warnings)]

//! Headless driver: builds a game, lets a simple caretaker play it and prints
//! the cemetery.

use anyhow::{Context, Result};
use pet_core::{BoredomStatus, Cake, HealthStatus, HungerStatus, Pet};
use pet_sim::{PetId, Simulator};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

const SOUNDS: [&str; 6] = ["woof", "meow", "squeak", "honk", "purr", "chirp"];

#[derive(Debug, Default)]
struct Args {
    seed: Option<u64>,
    ticks: Option<u32>,
    cakes: Option<PathBuf>,
    config: Option<PathBuf>,
    names: Option<Vec<String>>,
    neglect: bool,
}

fn parse_args() -> Args {
    let mut args = Args::default();
    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--seed" => args.seed = it.next().and_then(|s| s.parse().ok()),
            "--ticks" => args.ticks = it.next().and_then(|s| s.parse().ok()),
            "--cakes" => args.cakes = it.next().map(PathBuf::from),
            "--config" => args.config = it.next().map(PathBuf::from),
            "--names" => {
                args.names = it
                    .next()
                    .map(|s| s.split(',').map(|n| n.trim().to_string()).collect())
            }
            "--neglect" => args.neglect = true,
            _ => {}
        }
    }
    args
}

/// Affordable cake with the largest `gain`, cheaper first on ties.
fn best_cake<'a>(sim: &'a Simulator, gain: impl Fn(&Cake) -> i32) -> Option<&'a Cake> {
    sim.cakes()
        .iter()
        .filter(|c| gain(*c) > 0 && sim.can_execute_feed(c))
        .max_by_key(|c| (gain(*c), -c.cost))
}

/// Takes at most one action for the selected pet. Returns whether it acted.
fn care_for(sim: &mut Simulator, pet: &Pet) -> bool {
    let cake = if pet.hunger_message() != HungerStatus::Full {
        best_cake(sim, |c| c.hunger_restore).cloned()
    } else if pet.health_message() == HealthStatus::Sick {
        best_cake(sim, |c| c.health_restore).cloned()
    } else {
        None
    };
    if let Some(cake) = cake {
        sim.execute_feed(&cake);
        return true;
    }
    if pet.boredom_message() != BoredomStatus::Happy && sim.teaching_available() {
        if let Some(sound) = SOUNDS.iter().find(|s| sim.can_execute_teach(s)) {
            sim.execute_teach(sound);
            return true;
        }
    }
    false
}

fn play(sim: &mut Simulator, max_ticks: u32, neglect: bool) {
    while sim.can_execute_tick() && sim.ticks_survived() < max_ticks {
        let mut acted = false;
        if !neglect {
            for id in sim.living_pets() {
                sim.select_pet(id);
                let Some(pet) = sim.pet(id).cloned() else {
                    continue;
                };
                if care_for(sim, &pet) {
                    // Every action costs the player a tick.
                    sim.execute_tick();
                    acted = true;
                }
                if sim.ticks_survived() >= max_ticks {
                    break;
                }
            }
        }
        if !acted {
            sim.execute_tick();
        }
    }
    sim.clear_selection();
}

fn print_status(sim: &Simulator) {
    for id in sim.pet_ids() {
        let Some(p) = sim.pet(id) else { continue };
        let PetId(i) = id;
        println!(
            "#{i} {:<10} {:<6} {:<13} health {:>3}% ({}) | hunger {:>3}% ({}) | boredom {:>3}% ({}) | {}",
            p.name(),
            p.strength(),
            p.appearance(),
            p.health_percentage(),
            p.health_message(),
            p.hunger_percentage(),
            p.hunger_message(),
            p.boredom_percentage(),
            p.boredom_message(),
            p.display_sounds()
        );
    }
}

fn main() -> Result<()> {
    // Logging setup
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .init();

    let args = parse_args();
    info!(?args, "starting CLI");

    let mut config = pet_catalog::load_config_or_default(args.config.as_deref());
    if let Some(seed) = args.seed {
        config.rng_seed = seed;
    }
    let cakes = pet_catalog::load_cakes_or_default(args.cakes.as_deref());

    let mut sim = match &args.names {
        Some(names) => Simulator::with_names(&config, cakes, names.as_slice()),
        None => Simulator::new(&config, cakes).map(|mut s| {
            let defaults: Vec<String> =
                (1..=config.roster_size).map(|i| format!("Pet{i}")).collect();
            s.set_pet_names(&defaults);
            s
        }),
    }
    .context("invalid game setup")?;

    play(&mut sim, args.ticks.unwrap_or(200), args.neglect);

    print_status(&sim);
    println!("Wallet: {} coins", sim.wallet());
    for line in sim.cemetery().summary() {
        println!("{line}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pet_core::{default_catalog, GameConfig};

    fn sim() -> Simulator {
        let mut s = Simulator::new(&GameConfig::default(), default_catalog()).unwrap();
        s.set_pet_names(&["A", "B", "C"]);
        s
    }

    #[test]
    fn best_cake_within_budget() {
        let mut s = sim();
        assert!(best_cake(&s, |c| c.hunger_restore).is_none());
        s.select_pet(PetId(0));
        let cake = best_cake(&s, |c| c.hunger_restore).unwrap();
        assert_eq!(cake.kind, "peach");
        let cake = best_cake(&s, |c| c.health_restore).unwrap();
        assert_eq!(cake.kind, "pod");
    }

    #[test]
    fn caretaker_outlives_neglect() {
        let mut cared = sim();
        play(&mut cared, 150, false);
        let mut neglected = sim();
        play(&mut neglected, 150, true);
        assert!(neglected.all_pets_dead());
        assert!(cared.living_pets().len() >= neglected.living_pets().len());
        assert!(cared.ticks_survived() <= 150);
    }
}
