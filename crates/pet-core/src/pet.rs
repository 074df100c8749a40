//! The pet itself: stats, derived moods and rates, and the actions that
//! mutate them.
//!
//! Every action is a no-op on a dead pet. Stat writes clamp rather than fail,
//! so no sequence of calls can push a gauge outside its range.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::text::capitalise;
use crate::{
    Cake, StatGauge, ANGER_LIMIT, BASE_BOREDOM_RATE, BOREDOM_LIMIT_RANGE, HAPPY_BOUNDARY,
    HUNGER_LIMIT, MAX_BOREDOM, MAX_HUNGER, MAX_SOUNDS, MIN_HUNGER_REPLENISHED,
    STANDARD_MAX_HEALTH, TRAIN_BOREDOM_RELIEF, TRAIN_HUNGER_COST, WEAK_BOREDOM_LIMIT,
};

/// Strength class, fixed at creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strength {
    Weak,
    Normal,
    Strong,
}

impl Strength {
    pub const ALL: [Strength; 3] = [Strength::Weak, Strength::Normal, Strength::Strong];

    /// Uniform draw over the three classes.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    /// Health ceiling: half the standard for weak pets, double for strong.
    pub fn max_health(self) -> i32 {
        match self {
            Strength::Weak => STANDARD_MAX_HEALTH / 2,
            Strength::Normal => STANDARD_MAX_HEALTH,
            Strength::Strong => STANDARD_MAX_HEALTH * 2,
        }
    }

    /// Hunger gained per tick before health and boredom modifiers.
    pub fn base_hunger_rate(self) -> i32 {
        match self {
            Strength::Strong => 8,
            Strength::Weak | Strength::Normal => 4,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Strength::Weak => "weak",
            Strength::Normal => "normal",
            Strength::Strong => "strong",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Cosmetic species, drawn at creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Appearance {
    Dinosaur,
    Dog,
    PixelDogIsh,
    Squid,
}

impl Appearance {
    pub const ALL: [Appearance; 4] = [
        Appearance::Dinosaur,
        Appearance::Dog,
        Appearance::PixelDogIsh,
        Appearance::Squid,
    ];

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Appearance::Dinosaur => "dinosaur",
            Appearance::Dog => "dog",
            Appearance::PixelDogIsh => "pixel_dog-ish",
            Appearance::Squid => "squid",
        }
    }
}

/// How a value is compared against a limit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Boundary {
    /// `value <= limit`
    Inclusive,
    /// `value < limit`
    Exclusive,
}

impl Boundary {
    /// True when `value` is still on the "under the limit" side.
    pub fn admits(self, value: i32, limit: i32) -> bool {
        match self {
            Boundary::Inclusive => value <= limit,
            Boundary::Exclusive => value < limit,
        }
    }
}

/// Mood derived from health as a share of the pet's maximum.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HealthStatus {
    /// At least 80% of max health.
    FightingFit,
    /// Above 20% of max health.
    Ok,
    /// At least 1 health left.
    Sick,
    /// Health is zero.
    Dead,
}

impl HealthStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            HealthStatus::FightingFit => "fighting fit",
            HealthStatus::Ok => "ok",
            HealthStatus::Sick => "sick",
            HealthStatus::Dead => "dead",
        }
    }
}

/// Mood derived from hunger.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HungerStatus {
    /// Below half of max hunger.
    Full,
    /// Up to and including the hunger limit.
    Hungry,
    /// Past the hunger limit; health drains each tick.
    Starving,
}

impl HungerStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            HungerStatus::Full => "full",
            HungerStatus::Hungry => "hungry",
            HungerStatus::Starving => "starving",
        }
    }
}

/// Mood derived from boredom against the pet's own limit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoredomStatus {
    /// Within the boredom limit. Happy pets earn a coin per tick.
    Happy,
    /// Past the limit but below the anger limit.
    Bored,
    /// At or past the anger limit.
    Angry,
}

impl BoredomStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            BoredomStatus::Happy => "happy",
            BoredomStatus::Bored => "bored",
            BoredomStatus::Angry => "angry",
        }
    }
}

macro_rules! display_as_str {
    ($($t:ty),*) => {
        $(impl fmt::Display for $t {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad(self.as_str())
            }
        })*
    };
}

display_as_str!(HealthStatus, HungerStatus, BoredomStatus, Appearance);

/// Which picture a front-end should show for the pet's current state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Portrait {
    /// Neither sick nor unhappy. Dinosaurs always look healthy.
    Healthy,
    /// Not happy, not sick.
    Angry,
    /// Sick but happy.
    Sick,
    /// Sick and not happy.
    SickAngry,
    /// Shown on the tombstone.
    Dead,
}

/// One creature in the roster.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Pet {
    name: String,
    strength: Strength,
    appearance: Appearance,
    tombstone: u8,
    boredom: StatGauge,
    hunger: StatGauge,
    health: StatGauge,
    boredom_limit: i32,
    sounds: Vec<String>,
    ticks_survived: u32,
    reason_for_death: Option<String>,
}

impl Pet {
    /// Creates an unnamed pet of the given strength at full health.
    ///
    /// Weak pets ignore `boredom_limit` and use [`WEAK_BOREDOM_LIMIT`].
    pub fn new(strength: Strength, boredom_limit: i32) -> Self {
        let boredom_limit = match strength {
            Strength::Weak => WEAK_BOREDOM_LIMIT,
            Strength::Normal | Strength::Strong => boredom_limit,
        };
        Self {
            name: String::new(),
            strength,
            appearance: Appearance::Dog,
            tombstone: 1,
            boredom: StatGauge::empty(MAX_BOREDOM),
            hunger: StatGauge::empty(MAX_HUNGER),
            health: StatGauge::full(strength.max_health()),
            boredom_limit,
            sounds: Vec::new(),
            ticks_survived: 0,
            reason_for_death: None,
        }
    }

    /// Draws strength, appearance, tombstone and boredom limit from `rng`,
    /// in that order.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let strength = Strength::random(rng);
        let appearance = Appearance::random(rng);
        let tombstone = rng.gen_range(1..=3u8);
        let boredom_limit = rng.gen_range(BOREDOM_LIMIT_RANGE);
        Self::new(strength, boredom_limit).with_appearance(appearance, tombstone)
    }

    pub fn with_appearance(mut self, appearance: Appearance, tombstone: u8) -> Self {
        self.appearance = appearance;
        self.tombstone = tombstone;
        self
    }

    pub fn named(mut self, name: &str) -> Self {
        self.set_name(name);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renames the pet. Blank input is ignored; otherwise stored trimmed.
    pub fn set_name(&mut self, name: &str) {
        let trimmed = name.trim();
        if !trimmed.is_empty() {
            self.name = trimmed.to_string();
        }
    }

    pub fn strength(&self) -> Strength {
        self.strength
    }

    pub fn appearance(&self) -> Appearance {
        self.appearance
    }

    /// Tombstone variant in `1..=3`.
    pub fn tombstone(&self) -> u8 {
        self.tombstone
    }

    pub fn boredom(&self) -> i32 {
        self.boredom.value()
    }

    pub fn hunger(&self) -> i32 {
        self.hunger.value()
    }

    pub fn health(&self) -> i32 {
        self.health.value()
    }

    pub fn max_boredom(&self) -> i32 {
        self.boredom.max()
    }

    pub fn max_hunger(&self) -> i32 {
        self.hunger.max()
    }

    pub fn max_health(&self) -> i32 {
        self.health.max()
    }

    pub fn boredom_percentage(&self) -> i32 {
        self.boredom.percentage()
    }

    pub fn hunger_percentage(&self) -> i32 {
        self.hunger.percentage()
    }

    pub fn health_percentage(&self) -> i32 {
        self.health.percentage()
    }

    /// Direct clamped write, for scenario setup and front-end cheats.
    pub fn set_boredom(&mut self, value: i32) {
        self.boredom.set(value);
    }

    pub fn set_hunger(&mut self, value: i32) {
        self.hunger.set(value);
    }

    pub fn set_health(&mut self, value: i32) {
        self.health.set(value);
    }

    pub fn boredom_limit(&self) -> i32 {
        self.boredom_limit
    }

    pub fn anger_limit(&self) -> i32 {
        ANGER_LIMIT
    }

    pub fn hunger_limit(&self) -> i32 {
        HUNGER_LIMIT
    }

    pub fn sounds(&self) -> &[String] {
        &self.sounds
    }

    pub fn ticks_survived(&self) -> u32 {
        self.ticks_survived
    }

    pub fn reason_for_death(&self) -> Option<&str> {
        self.reason_for_death.as_deref()
    }

    /// Records why the pet died. Only the first reason sticks.
    pub fn set_reason_for_death(&mut self, reason: impl Into<String>) {
        if self.reason_for_death.is_none() {
            self.reason_for_death = Some(reason.into());
        }
    }

    pub fn is_dead(&self) -> bool {
        self.health.is_empty()
    }

    pub fn health_message(&self) -> HealthStatus {
        // Compared as reals so e.g. 39 vs 0.8 * 50 = 40 does not round up.
        let health = f64::from(self.health());
        let max = f64::from(self.max_health());
        if health >= 0.8 * max {
            HealthStatus::FightingFit
        } else if health > 0.2 * max {
            HealthStatus::Ok
        } else if self.health() >= 1 {
            HealthStatus::Sick
        } else {
            HealthStatus::Dead
        }
    }

    pub fn hunger_message(&self) -> HungerStatus {
        if self.hunger() < self.max_hunger() / 2 {
            HungerStatus::Full
        } else if self.hunger() <= HUNGER_LIMIT {
            HungerStatus::Hungry
        } else {
            HungerStatus::Starving
        }
    }

    pub fn boredom_message(&self) -> BoredomStatus {
        if HAPPY_BOUNDARY.admits(self.boredom(), self.boredom_limit) {
            BoredomStatus::Happy
        } else if self.boredom() < ANGER_LIMIT {
            BoredomStatus::Bored
        } else {
            BoredomStatus::Angry
        }
    }

    /// Boredom gained per tick; doubles past the boredom limit.
    pub fn boredom_rate(&self) -> i32 {
        if self.boredom() > self.boredom_limit {
            BASE_BOREDOM_RATE * 2
        } else {
            BASE_BOREDOM_RATE
        }
    }

    /// Hunger gained per tick.
    ///
    /// Halved at or below a quarter of max health, then doubled once past the
    /// boredom limit and doubled again past the anger limit.
    pub fn hunger_rate(&self) -> i32 {
        let mut rate = self.strength.base_hunger_rate();
        if self.health() <= self.max_health() / 4 {
            rate /= 2;
        }
        if self.boredom() > self.boredom_limit {
            rate *= 2;
            if self.boredom() > ANGER_LIMIT {
                rate *= 2;
            }
        }
        rate
    }

    /// Hunger this pet would take off whoever eats it. Never below
    /// [`MIN_HUNGER_REPLENISHED`] while alive.
    pub fn hunger_replenished(&self) -> i32 {
        if self.is_dead() {
            return 0;
        }
        (HUNGER_LIMIT - self.hunger()).max(MIN_HUNGER_REPLENISHED)
    }

    pub fn portrait(&self) -> Portrait {
        let health = self.health_message();
        if health == HealthStatus::Dead {
            return Portrait::Dead;
        }
        if self.appearance == Appearance::Dinosaur {
            return Portrait::Healthy;
        }
        let sick = health == HealthStatus::Sick;
        let cross = self.boredom_message() != BoredomStatus::Happy;
        match (sick, cross) {
            (false, false) => Portrait::Healthy,
            (false, true) => Portrait::Angry,
            (true, false) => Portrait::Sick,
            (true, true) => Portrait::SickAngry,
        }
    }

    /// Human-readable list of known sounds.
    pub fn display_sounds(&self) -> String {
        if self.is_dead() {
            return format!("{} is dead. RIP", self.name);
        }
        if self.sounds.is_empty() {
            return format!("{} hasn't learnt any sounds yet :(", self.name);
        }
        capitalise(&self.sounds.join(", "))
    }

    pub fn feed(&mut self, cake: &Cake) {
        if self.is_dead() {
            return;
        }
        self.hunger.adjust(-cake.hunger_restore);
        self.health.adjust(cake.health_restore);
    }

    /// Whether `sound` can be taught right now. Duplicates are matched on the
    /// trimmed text, case-sensitively.
    pub fn can_train(&self, sound: &str) -> bool {
        let sound = sound.trim();
        !self.is_dead()
            && !sound.is_empty()
            && self.sounds.len() < MAX_SOUNDS
            && !self.sounds.iter().any(|s| s == sound)
    }

    /// Teaches `sound` if allowed. Returns whether anything changed.
    pub fn train(&mut self, sound: &str) -> bool {
        if !self.can_train(sound) {
            return false;
        }
        self.sounds.push(sound.trim().to_string());
        self.boredom.adjust(-TRAIN_BOREDOM_RELIEF);
        self.hunger.adjust(TRAIN_HUNGER_COST);
        true
    }

    /// Eats `prey`. Only this pet changes; the caller kills the prey with
    /// [`Pet::get_eaten`].
    pub fn eat(&mut self, prey: &Pet) {
        if self.is_dead() {
            return;
        }
        self.hunger.adjust(-prey.hunger_replenished());
        self.boredom.set(0);
    }

    pub fn get_eaten(&mut self, consumer: &str) {
        if self.is_dead() {
            return;
        }
        self.health.set(0);
        self.hunger.set(0);
        self.boredom.set(0);
        self.set_reason_for_death(format!("Eaten by {consumer}"));
        debug!(pet = %self.name, consumer, "eaten");
    }

    /// Advances the pet by one tick. Returns true if it died during this tick.
    pub fn tick(&mut self) -> bool {
        if self.is_dead() {
            return false;
        }
        // Each rate is read after the previous stat moved.
        let boredom_rate = self.boredom_rate();
        self.boredom.adjust(boredom_rate);
        let hunger_rate = self.hunger_rate();
        self.hunger.adjust(hunger_rate);
        if self.hunger_message() == HungerStatus::Starving {
            self.health.adjust(-(self.hunger_rate() / 2));
        }
        self.ticks_survived += 1;

        if self.is_dead() {
            self.set_reason_for_death("Died of starvation");
            self.hunger.set(0);
            self.boredom.set(0);
            debug!(pet = %self.name, ticks = self.ticks_survived, "starved");
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn normal(limit: i32) -> Pet {
        Pet::new(Strength::Normal, limit).named("Fred")
    }

    #[test]
    fn strength_sets_ceilings_and_rates() {
        let weak = Pet::new(Strength::Weak, 60);
        assert_eq!(weak.max_health(), 50);
        assert_eq!(weak.health(), 50);
        assert_eq!(weak.boredom_limit(), WEAK_BOREDOM_LIMIT);
        assert_eq!(weak.hunger_rate(), 4);

        let strong = Pet::new(Strength::Strong, 60);
        assert_eq!(strong.max_health(), 200);
        assert_eq!(strong.boredom_limit(), 60);
        assert_eq!(strong.hunger_rate(), 8);
    }

    #[test]
    fn random_pets_are_reproducible() {
        let mut a = ChaCha8Rng::seed_from_u64(7);
        let mut b = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..20 {
            let p = Pet::random(&mut a);
            let q = Pet::random(&mut b);
            assert_eq!(p.strength(), q.strength());
            assert_eq!(p.appearance(), q.appearance());
            assert_eq!(p.boredom_limit(), q.boredom_limit());
            assert!((1..=3).contains(&p.tombstone()));
            if p.strength() != Strength::Weak {
                assert!(BOREDOM_LIMIT_RANGE.contains(&p.boredom_limit()));
            }
        }
    }

    #[test]
    fn blank_name_is_ignored() {
        let mut p = normal(60);
        p.set_name("   ");
        assert_eq!(p.name(), "Fred");
        p.set_name("  Mabel ");
        assert_eq!(p.name(), "Mabel");
    }

    #[test]
    fn health_message_thresholds_use_real_comparison() {
        let mut p = Pet::new(Strength::Weak, 0);
        p.set_health(40);
        assert_eq!(p.health_message(), HealthStatus::FightingFit);
        p.set_health(39);
        assert_eq!(p.health_message(), HealthStatus::Ok);
        p.set_health(11);
        assert_eq!(p.health_message(), HealthStatus::Ok);
        p.set_health(10);
        assert_eq!(p.health_message(), HealthStatus::Sick);
        p.set_health(1);
        assert_eq!(p.health_message(), HealthStatus::Sick);
        p.set_health(0);
        assert_eq!(p.health_message(), HealthStatus::Dead);
        assert!(p.is_dead());
    }

    #[test]
    fn hunger_message_thresholds() {
        let mut p = normal(60);
        p.set_hunger(49);
        assert_eq!(p.hunger_message(), HungerStatus::Full);
        p.set_hunger(50);
        assert_eq!(p.hunger_message(), HungerStatus::Hungry);
        p.set_hunger(80);
        assert_eq!(p.hunger_message(), HungerStatus::Hungry);
        p.set_hunger(81);
        assert_eq!(p.hunger_message(), HungerStatus::Starving);
    }

    #[test]
    fn boredom_message_is_happy_at_the_limit() {
        let mut p = normal(60);
        p.set_boredom(60);
        assert_eq!(p.boredom_message(), BoredomStatus::Happy);
        p.set_boredom(61);
        assert_eq!(p.boredom_message(), BoredomStatus::Bored);
        p.set_boredom(89);
        assert_eq!(p.boredom_message(), BoredomStatus::Bored);
        p.set_boredom(90);
        assert_eq!(p.boredom_message(), BoredomStatus::Angry);
    }

    #[test]
    fn boredom_rate_doubles_past_limit() {
        let mut p = normal(60);
        p.set_boredom(60);
        assert_eq!(p.boredom_rate(), 4);
        p.set_boredom(61);
        assert_eq!(p.boredom_rate(), 8);
    }

    #[test]
    fn hunger_rate_composes_modifiers() {
        let mut p = normal(60);
        p.set_boredom(91);
        assert_eq!(p.hunger_rate(), 16);
        p.set_boredom(70);
        assert_eq!(p.hunger_rate(), 8);
        p.set_health(25);
        assert_eq!(p.hunger_rate(), 4);
        p.set_boredom(91);
        assert_eq!(p.hunger_rate(), 8);
        p.set_boredom(0);
        assert_eq!(p.hunger_rate(), 2);

        let mut s = Pet::new(Strength::Strong, 60);
        s.set_boredom(95);
        assert_eq!(s.hunger_rate(), 32);
    }

    #[test]
    fn feed_adjusts_hunger_and_health() {
        let mut p = normal(60);
        p.set_hunger(50);
        p.set_health(25);
        p.feed(&Cake::new("berry", 10, 10, 10));
        assert_eq!(p.hunger(), 40);
        assert_eq!(p.health(), 35);

        p.feed(&Cake::new("ambrosia", 10_000, 10_000, 200));
        assert_eq!(p.hunger(), 0);
        assert_eq!(p.health(), 100);
    }

    #[test]
    fn train_rules() {
        let mut p = normal(60);
        p.set_boredom(60);
        assert!(!p.can_train(""));
        assert!(!p.can_train("   "));
        assert!(p.train(" woof "));
        assert_eq!(p.sounds(), ["woof".to_string()]);
        assert_eq!(p.boredom(), 10);
        assert_eq!(p.hunger(), 25);
        assert!(!p.can_train("woof"));
        assert!(!p.can_train(" woof"));
        assert!(p.can_train("Woof"));

        for s in ["meow", "moo", "baa", "oink"] {
            assert!(p.train(s));
        }
        assert_eq!(p.sounds().len(), MAX_SOUNDS);
        assert!(!p.can_train("quack"));
        assert!(!p.train("quack"));
        assert_eq!(p.sounds().len(), MAX_SOUNDS);
    }

    #[test]
    fn display_sounds_variants() {
        let mut p = normal(60);
        assert_eq!(p.display_sounds(), "Fred hasn't learnt any sounds yet :(");
        p.train("woof");
        p.train("meow");
        assert_eq!(p.display_sounds(), "Woof, meow");
        p.set_health(0);
        assert_eq!(p.display_sounds(), "Fred is dead. RIP");
    }

    #[test]
    fn hunger_replenished_floor() {
        let mut p = normal(60);
        assert_eq!(p.hunger_replenished(), HUNGER_LIMIT);
        p.set_hunger(70);
        assert_eq!(p.hunger_replenished(), 20);
        p.set_hunger(55);
        assert_eq!(p.hunger_replenished(), 25);
        p.set_health(0);
        assert_eq!(p.hunger_replenished(), 0);
    }

    #[test]
    fn eat_and_get_eaten() {
        let mut predator = normal(60);
        predator.set_hunger(90);
        predator.set_boredom(90);
        let mut prey = Pet::new(Strength::Strong, 70).named("Arthur");

        predator.eat(&prey);
        prey.get_eaten(predator.name());

        assert_eq!(predator.hunger(), 10);
        assert_eq!(predator.boredom(), 0);
        assert!(prey.is_dead());
        assert_eq!(prey.hunger(), 0);
        assert_eq!(prey.boredom(), 0);
        assert_eq!(prey.reason_for_death(), Some("Eaten by Fred"));

        prey.get_eaten("Mabel");
        assert_eq!(prey.reason_for_death(), Some("Eaten by Fred"));
    }

    #[test]
    fn tick_from_rest() {
        let mut p = normal(60);
        assert!(!p.tick());
        assert_eq!(p.boredom(), 4);
        assert_eq!(p.hunger(), 4);
        assert_eq!(p.health(), 100);
        assert_eq!(p.ticks_survived(), 1);
    }

    #[test]
    fn tick_reads_hunger_rate_after_boredom_moves() {
        let mut p = normal(60);
        p.set_boredom(58);
        p.tick();
        // 58 + 4 = 62 is past the limit, so hunger grows at the doubled rate.
        assert_eq!(p.boredom(), 62);
        assert_eq!(p.hunger(), 8);
    }

    #[test]
    fn starving_pet_loses_health_and_dies() {
        let mut p = normal(60);
        p.set_health(4);
        p.set_hunger(85);
        assert!(!p.tick());
        // Halved rate 2: hunger 87, health loses 1.
        assert_eq!(p.hunger(), 87);
        assert_eq!(p.health(), 3);

        let mut died = false;
        for _ in 0..10 {
            if p.tick() {
                died = true;
                break;
            }
        }
        assert!(died);
        assert!(p.is_dead());
        assert_eq!(p.reason_for_death(), Some("Died of starvation"));
        assert_eq!(p.hunger(), 0);
        assert_eq!(p.boredom(), 0);
        assert_eq!(p.ticks_survived(), 4);
    }

    #[test]
    fn reason_for_death_first_write_wins() {
        let mut p = normal(60);
        p.set_reason_for_death("first");
        p.set_reason_for_death("second");
        assert_eq!(p.reason_for_death(), Some("first"));
    }

    #[test]
    fn portrait_follows_moods() {
        let mut p = normal(60);
        assert_eq!(p.portrait(), Portrait::Healthy);
        p.set_boredom(70);
        assert_eq!(p.portrait(), Portrait::Angry);
        p.set_health(10);
        assert_eq!(p.portrait(), Portrait::SickAngry);
        p.set_boredom(0);
        assert_eq!(p.portrait(), Portrait::Sick);
        p.set_health(0);
        assert_eq!(p.portrait(), Portrait::Dead);

        let mut dino = normal(60).with_appearance(Appearance::Dinosaur, 2);
        dino.set_health(10);
        dino.set_boredom(95);
        assert_eq!(dino.portrait(), Portrait::Healthy);
    }

    #[derive(Clone, Debug)]
    enum Op {
        Feed(i32, i32),
        Train(u8),
        Eat(i32),
        Tick,
        SetBoredom(i32),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (-50i32..200, -50i32..200).prop_map(|(h, hp)| Op::Feed(h, hp)),
            (0u8..8).prop_map(Op::Train),
            (0i32..100).prop_map(Op::Eat),
            Just(Op::Tick),
            (-20i32..150).prop_map(Op::SetBoredom),
        ]
    }

    fn apply(p: &mut Pet, op: &Op) {
        match op {
            Op::Feed(h, hp) => p.feed(&Cake::new("x", *h, *hp, 0)),
            Op::Train(i) => {
                p.train(&format!("s{i}"));
            }
            Op::Eat(hunger) => {
                let mut prey = Pet::new(Strength::Normal, 60);
                prey.set_hunger(*hunger);
                p.eat(&prey);
            }
            Op::Tick => {
                p.tick();
            }
            Op::SetBoredom(b) => p.set_boredom(*b),
        }
    }

    fn strength() -> impl Strategy<Value = Strength> {
        prop_oneof![
            Just(Strength::Weak),
            Just(Strength::Normal),
            Just(Strength::Strong)
        ]
    }

    proptest! {
        #[test]
        fn stats_stay_clamped(s in strength(), limit in 50i32..90,
                              ops in proptest::collection::vec(op(), 0..64)) {
            let mut p = Pet::new(s, limit);
            for o in &ops {
                apply(&mut p, o);
                prop_assert!((0..=MAX_BOREDOM).contains(&p.boredom()));
                prop_assert!((0..=MAX_HUNGER).contains(&p.hunger()));
                prop_assert!((0..=p.max_health()).contains(&p.health()));
                prop_assert!(p.sounds().len() <= MAX_SOUNDS);
            }
        }

        #[test]
        fn dead_pets_do_not_change(s in strength(), boredom in 0i32..100, hunger in 0i32..100,
                                   ops in proptest::collection::vec(op().prop_filter("no direct writes", |o| !matches!(o, Op::SetBoredom(_))), 1..32)) {
            let mut p = Pet::new(s, 60);
            p.set_boredom(boredom);
            p.set_hunger(hunger);
            p.get_eaten("Mabel");
            let before = (p.boredom(), p.hunger(), p.health(), p.ticks_survived(), p.sounds().to_vec());
            for o in &ops {
                apply(&mut p, o);
            }
            let after = (p.boredom(), p.hunger(), p.health(), p.ticks_survived(), p.sounds().to_vec());
            prop_assert_eq!(before, after);
            prop_assert_eq!(p.reason_for_death(), Some("Eaten by Mabel"));
        }

        #[test]
        fn replenish_floor_above_hunger_limit(hunger in HUNGER_LIMIT..=MAX_HUNGER) {
            let mut p = Pet::new(Strength::Normal, 60);
            p.set_hunger(hunger);
            prop_assert_eq!(p.hunger_replenished(), MIN_HUNGER_REPLENISHED);
        }

        #[test]
        fn both_thresholds_quadruple_hunger_rate(s in strength(), limit in 50i32..90) {
            let mut p = Pet::new(s, limit);
            p.set_boredom(ANGER_LIMIT.max(p.boredom_limit()) + 1);
            prop_assert_eq!(p.hunger_rate(), s.base_hunger_rate() * 4);
        }
    }
}
