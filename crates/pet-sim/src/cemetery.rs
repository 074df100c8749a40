//! End-of-game summary over the pets that have died.

use pet_core::text::{join_with_and, possessive};
use serde::{Deserialize, Serialize};

use crate::Simulator;

/// One dead pet as shown in the cemetery.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grave {
    /// Name the pet had when it died.
    pub name: String,
    /// Empty only if the pet's health was zeroed without a recorded cause.
    pub reason: String,
    /// Ticks the pet lived through.
    pub ticks_survived: u32,
    /// Tombstone variant in `1..=3`.
    pub tombstone: u8,
}

/// Snapshot of the game taken when the player visits the cemetery.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CemeteryReport {
    /// Dead pets in roster order.
    pub graves: Vec<Grave>,
    /// Ticks the game has run.
    pub ticks_survived: u32,
    pub all_pets_dead: bool,
}

impl CemeteryReport {
    pub fn from_simulator(sim: &Simulator) -> Self {
        let graves = sim
            .pets()
            .iter()
            .filter(|p| p.is_dead())
            .map(|p| Grave {
                name: p.name().to_string(),
                reason: p.reason_for_death().unwrap_or_default().to_string(),
                ticks_survived: p.ticks_survived(),
                tombstone: p.tombstone(),
            })
            .collect();
        Self {
            graves,
            ticks_survived: sim.ticks_survived(),
            all_pets_dead: sim.all_pets_dead(),
        }
    }

    pub fn game_ongoing(&self) -> bool {
        !self.all_pets_dead
    }

    /// The player may leave the cemetery while any pet still lives.
    pub fn can_return_to_game(&self) -> bool {
        self.game_ongoing()
    }

    /// Printable lines: a headline, then one line per grave.
    pub fn summary(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.graves.len() + 2);
        lines.push(format!(
            "Your pets have survived {}",
            ticks(self.ticks_survived)
        ));
        if self.graves.is_empty() {
            lines.push("The cemetery is empty".to_string());
            return lines;
        }
        let names: Vec<&str> = self.graves.iter().map(|g| g.name.as_str()).collect();
        lines.push(format!("Here lie {}", join_with_and(&names)));
        for g in &self.graves {
            let reason = if g.reason.is_empty() {
                "unknown causes"
            } else {
                g.reason.as_str()
            };
            lines.push(format!(
                "{} life: {}. {}",
                possessive(&g.name),
                ticks(g.ticks_survived),
                reason
            ));
        }
        lines
    }
}

fn ticks(n: u32) -> String {
    match n {
        1 => "1 tick".to_string(),
        n => format!("{n} ticks"),
    }
}
