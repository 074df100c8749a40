#![deny(warnings)]

//! Core domain models and invariants for the virtual pet game.
//!
//! This crate defines the pet, its bounded stats and the cakes it eats,
//! together with validation helpers for the inputs a game is built from.
//! Gameplay itself never fails: invalid intents degrade to no-ops and stat
//! writes clamp. Only construction-time data (catalogs, configs, names) is
//! rejected with a [`ValidationError`].

pub mod cake;
pub mod gauge;
pub mod pet;
pub mod text;

pub use cake::{default_catalog, Cake};
pub use gauge::StatGauge;
pub use pet::{
    Appearance, BoredomStatus, Boundary, HealthStatus, HungerStatus, Pet, Portrait, Strength,
};

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::ops::Range;
use thiserror::Error;

/// Boredom ceiling for every pet.
pub const MAX_BOREDOM: i32 = 100;
/// Hunger ceiling for every pet.
pub const MAX_HUNGER: i32 = 100;
/// Health ceiling of a normal pet; weak and strong pets scale from it.
pub const STANDARD_MAX_HEALTH: i32 = 100;
/// Boredom above which a pet turns angry.
pub const ANGER_LIMIT: i32 = 90;
/// Hunger above which a pet is starving.
pub const HUNGER_LIMIT: i32 = 80;
/// Boredom limits drawn for normal and strong pets.
pub const BOREDOM_LIMIT_RANGE: Range<i32> = 50..90;
/// Weak pets tolerate almost any boredom.
pub const WEAK_BOREDOM_LIMIT: i32 = MAX_BOREDOM - 1;
/// How a pet's boredom compares against its limit when deciding "happy".
pub const HAPPY_BOUNDARY: Boundary = Boundary::Inclusive;
pub const MAX_SOUNDS: usize = 5;
pub const BASE_BOREDOM_RATE: i32 = 4;
pub const TRAIN_BOREDOM_RELIEF: i32 = 50;
pub const TRAIN_HUNGER_COST: i32 = 25;
/// Least hunger a living pet restores when eaten.
pub const MIN_HUNGER_REPLENISHED: i32 = 20;

/// Game setup parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seed for the random source pets are drawn from.
    pub rng_seed: u64,
    /// Number of pets created for an unnamed roster.
    pub roster_size: usize,
    /// Coins in the wallet at the start of a game.
    pub starting_wallet: i64,
    /// Whether one pet may be fed to another.
    #[serde(alias = "hannah_extension")]
    pub allow_eating: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rng_seed: 42,
            roster_size: 3,
            starting_wallet: 100,
            allow_eating: true,
        }
    }
}

/// Validation errors for game inputs.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// Cake type must not be blank.
    #[error("cake type must not be blank")]
    BlankCakeType,
    /// Costs are never negative.
    #[error("cake {0:?} has a negative cost")]
    NegativeCost(String),
    /// Restore amounts are never negative.
    #[error("cake {0:?} has a negative restore value")]
    NegativeRestore(String),
    /// Two cakes share a type name.
    #[error("duplicate cake type: {0}")]
    DuplicateCake(String),
    /// A game needs at least one cake on the menu.
    #[error("cake catalog is empty")]
    EmptyCatalog,
    /// A game needs at least one pet.
    #[error("roster size must be > 0")]
    EmptyRoster,
    /// The wallet cannot start in debt.
    #[error("starting wallet {0} is negative")]
    NegativeWallet(i64),
    /// Pet names must not be blank.
    #[error("pet name must not be blank")]
    BlankName,
    /// Pet names must be distinct.
    #[error("duplicate pet name: {0}")]
    DuplicateName(String),
}

/// Validate a single cake.
pub fn validate_cake(cake: &Cake) -> Result<(), ValidationError> {
    if cake.kind.trim().is_empty() {
        return Err(ValidationError::BlankCakeType);
    }
    if cake.cost < 0 {
        return Err(ValidationError::NegativeCost(cake.kind.clone()));
    }
    if cake.hunger_restore < 0 || cake.health_restore < 0 {
        return Err(ValidationError::NegativeRestore(cake.kind.clone()));
    }
    Ok(())
}

/// Validate a catalog, including uniqueness of cake types.
pub fn validate_catalog(cakes: &[Cake]) -> Result<(), ValidationError> {
    if cakes.is_empty() {
        return Err(ValidationError::EmptyCatalog);
    }
    let mut seen: BTreeSet<&str> = BTreeSet::new();
    for c in cakes {
        validate_cake(c)?;
        if !seen.insert(c.kind.as_str()) {
            return Err(ValidationError::DuplicateCake(c.kind.clone()));
        }
    }
    Ok(())
}

pub fn validate_config(config: &GameConfig) -> Result<(), ValidationError> {
    if config.roster_size == 0 {
        return Err(ValidationError::EmptyRoster);
    }
    if config.starting_wallet < 0 {
        return Err(ValidationError::NegativeWallet(config.starting_wallet));
    }
    Ok(())
}

/// Validate names for a user-named roster: non-blank and distinct once trimmed.
pub fn validate_names<S: AsRef<str>>(names: &[S]) -> Result<(), ValidationError> {
    if names.is_empty() {
        return Err(ValidationError::EmptyRoster);
    }
    let mut seen: BTreeSet<&str> = BTreeSet::new();
    for n in names {
        let n = n.as_ref().trim();
        if n.is_empty() {
            return Err(ValidationError::BlankName);
        }
        if !seen.insert(n) {
            return Err(ValidationError::DuplicateName(n.to_string()));
        }
    }
    Ok(())
}
