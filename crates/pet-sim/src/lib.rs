#![deny(warnings)]

//! Gameplay engine: the roster, the wallet and the tick counter.
//!
//! Callers check a `can_execute_*` predicate before the matching
//! `execute_*`. The engine only re-checks what the pets themselves guard
//! (dead pets ignore everything), so nothing here returns an error once the
//! simulator has been built.

pub mod cemetery;

pub use cemetery::{CemeteryReport, Grave};

use pet_core::{
    validate_catalog, validate_config, validate_names, BoredomStatus, Cake, GameConfig, Pet,
    ValidationError, MAX_SOUNDS,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Index of a pet in the roster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PetId(pub usize);

/// What a single tick changed, for front-ends that react to events.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Coins added to the wallet.
    pub coins_earned: i64,
    /// Pets that starved during this tick.
    pub deaths: Vec<PetId>,
    /// Tick counter after the tick.
    pub tick: u32,
}

/// The gameplay engine.
#[derive(Clone, Debug)]
pub struct Simulator {
    pets: Vec<Pet>,
    cakes: Vec<Cake>,
    selected: Option<PetId>,
    wallet: i64,
    ticks_survived: u32,
    allow_eating: bool,
    rng: ChaCha8Rng,
}

impl Simulator {
    /// Builds a game with `config.roster_size` unnamed, randomly drawn pets.
    pub fn new(config: &GameConfig, cakes: Vec<Cake>) -> Result<Self, ValidationError> {
        validate_config(config)?;
        validate_catalog(&cakes)?;
        let mut rng = ChaCha8Rng::seed_from_u64(config.rng_seed);
        let pets = (0..config.roster_size).map(|_| Pet::random(&mut rng)).collect();
        info!(
            pets = config.roster_size,
            cakes = cakes.len(),
            seed = config.rng_seed,
            "new game"
        );
        Ok(Self {
            pets,
            cakes,
            selected: None,
            wallet: config.starting_wallet,
            ticks_survived: 0,
            allow_eating: config.allow_eating,
            rng,
        })
    }

    /// Builds a game with one pet per name, ignoring `config.roster_size`.
    pub fn with_names<S: AsRef<str>>(
        config: &GameConfig,
        cakes: Vec<Cake>,
        names: &[S],
    ) -> Result<Self, ValidationError> {
        validate_names(names)?;
        let config = GameConfig {
            roster_size: names.len(),
            ..config.clone()
        };
        let mut sim = Self::new(&config, cakes)?;
        for (pet, name) in sim.pets.iter_mut().zip(names) {
            pet.set_name(name.as_ref());
        }
        Ok(sim)
    }

    /// Builds a game around an already assembled roster.
    pub fn from_pets(
        pets: Vec<Pet>,
        cakes: Vec<Cake>,
        starting_wallet: i64,
    ) -> Result<Self, ValidationError> {
        validate_config(&GameConfig {
            roster_size: pets.len(),
            starting_wallet,
            ..GameConfig::default()
        })?;
        validate_catalog(&cakes)?;
        Ok(Self {
            pets,
            cakes,
            selected: None,
            wallet: starting_wallet,
            ticks_survived: 0,
            allow_eating: true,
            rng: ChaCha8Rng::seed_from_u64(GameConfig::default().rng_seed),
        })
    }

    /// Draws a fresh pet from the game's random source, e.g. for a restart.
    pub fn spawn_pet(&mut self) -> Pet {
        Pet::random(&mut self.rng)
    }

    /// The whole roster in creation order.
    pub fn pets(&self) -> &[Pet] {
        &self.pets
    }

    /// `None` for an id outside the roster.
    pub fn pet(&self, id: PetId) -> Option<&Pet> {
        self.pets.get(id.0)
    }

    /// Mutable access for scenario setup; actions should go through `execute_*`.
    pub fn pet_mut(&mut self, id: PetId) -> Option<&mut Pet> {
        self.pets.get_mut(id.0)
    }

    /// Ids of every pet, dead or alive.
    pub fn pet_ids(&self) -> impl Iterator<Item = PetId> + '_ {
        (0..self.pets.len()).map(PetId)
    }

    /// The menu, in catalog order.
    pub fn cakes(&self) -> &[Cake] {
        &self.cakes
    }

    /// Looks a cake up by its type name.
    pub fn cake(&self, kind: &str) -> Option<&Cake> {
        self.cakes.iter().find(|c| c.kind == kind)
    }

    /// Coins available for cakes.
    pub fn wallet(&self) -> i64 {
        self.wallet
    }

    /// Ticks played so far.
    pub fn ticks_survived(&self) -> u32 {
        self.ticks_survived
    }

    /// Headline with the tick count, singular for one tick.
    pub fn ticks_survived_message(&self) -> String {
        match self.ticks_survived {
            1 => "Your pets have survived 1 tick".to_string(),
            n => format!("Your pets have survived {n} ticks"),
        }
    }

    /// Renames every pet at once. Ignored unless there is exactly one name per
    /// pet; blank names leave that pet's name as it was.
    pub fn set_pet_names<S: AsRef<str>>(&mut self, names: &[S]) -> bool {
        if names.len() != self.pets.len() {
            debug!(given = names.len(), roster = self.pets.len(), "name count mismatch");
            return false;
        }
        for (pet, name) in self.pets.iter_mut().zip(names) {
            pet.set_name(name.as_ref());
        }
        true
    }

    /// Selects a pet. Unknown ids are ignored and return false.
    pub fn select_pet(&mut self, id: PetId) -> bool {
        if id.0 >= self.pets.len() {
            return false;
        }
        self.selected = Some(id);
        true
    }

    /// Deselects whatever pet was selected.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Id of the selected pet, if any.
    pub fn selected_id(&self) -> Option<PetId> {
        self.selected
    }

    /// The selected pet, if any.
    pub fn selected_pet(&self) -> Option<&Pet> {
        self.selected.and_then(|id| self.pet(id))
    }

    /// False when nothing is selected.
    pub fn selected_pet_is_dead(&self) -> bool {
        self.selected_pet().is_some_and(Pet::is_dead)
    }

    /// Every pet except the selected one, i.e. the candidates for eating.
    pub fn non_selected_pets(&self) -> Vec<PetId> {
        self.pet_ids().filter(|id| Some(*id) != self.selected).collect()
    }

    /// Ids of dead pets, in roster order.
    pub fn dead_pets(&self) -> Vec<PetId> {
        self.pet_ids().filter(|id| self.pets[id.0].is_dead()).collect()
    }

    /// Ids of living pets, in roster order.
    pub fn living_pets(&self) -> Vec<PetId> {
        self.pet_ids().filter(|id| !self.pets[id.0].is_dead()).collect()
    }

    /// The game is over once this holds.
    pub fn all_pets_dead(&self) -> bool {
        self.pets.iter().all(Pet::is_dead)
    }

    fn living_selection(&self) -> Option<PetId> {
        self.selected.filter(|id| !self.pets[id.0].is_dead())
    }

    /// A living pet is selected and the wallet covers the cost.
    pub fn can_execute_feed(&self, cake: &Cake) -> bool {
        self.living_selection().is_some() && cake.cost <= self.wallet
    }

    /// Feeds the selected pet and charges the wallet.
    pub fn execute_feed(&mut self, cake: &Cake) {
        let Some(id) = self.selected else {
            return;
        };
        let pet = &mut self.pets[id.0];
        pet.feed(cake);
        self.wallet = self.wallet.saturating_sub(cake.cost);
        debug!(pet = %pet.name(), cake = %cake.kind, wallet = self.wallet, "fed");
    }

    /// Whether pets may eat each other in this game.
    pub fn allow_eating(&self) -> bool {
        self.allow_eating
    }

    /// Eating is enabled and the target is a different, living pet.
    pub fn can_execute_eat(&self, target: PetId) -> bool {
        if !self.allow_eating {
            return false;
        }
        match (self.living_selection(), self.pet(target)) {
            (Some(selected), Some(prey)) => selected != target && !prey.is_dead(),
            _ => false,
        }
    }

    /// Feeds `target` to the selected pet.
    pub fn execute_eat(&mut self, target: PetId) {
        let Some(id) = self.selected else {
            return;
        };
        if id == target || target.0 >= self.pets.len() {
            return;
        }
        let (predator, prey) = pair_mut(&mut self.pets, id.0, target.0);
        let was_alive = !prey.is_dead();
        predator.eat(prey);
        prey.get_eaten(predator.name());
        if was_alive && prey.is_dead() {
            info!(
                pet = %prey.name(),
                reason = prey.reason_for_death().unwrap_or_default(),
                ticks = prey.ticks_survived(),
                "pet died"
            );
        }
        self.log_if_game_over();
    }

    /// A living pet is selected and still has room for another sound.
    pub fn teaching_available(&self) -> bool {
        self.living_selection()
            .is_some_and(|id| self.pets[id.0].sounds().len() < MAX_SOUNDS)
    }

    /// The selected pet can learn this particular sound.
    pub fn can_execute_teach(&self, sound: &str) -> bool {
        self.selected_pet().is_some_and(|p| p.can_train(sound))
    }

    /// Teaches the selected pet a sound.
    pub fn execute_teach(&mut self, sound: &str) {
        let Some(id) = self.selected else {
            return;
        };
        let pet = &mut self.pets[id.0];
        if pet.train(sound) {
            debug!(pet = %pet.name(), sound = sound.trim(), "taught");
        }
    }

    /// Time only moves while some pet is alive.
    pub fn can_execute_tick(&self) -> bool {
        !self.all_pets_dead()
    }

    /// Advances every living pet by one tick and pays one coin per pet that is
    /// happy afterwards, including a pet that starved this tick. Does nothing
    /// once every pet is dead.
    pub fn execute_tick(&mut self) -> TickReport {
        let mut report = TickReport {
            tick: self.ticks_survived,
            ..TickReport::default()
        };
        if !self.can_execute_tick() {
            return report;
        }
        for (i, pet) in self.pets.iter_mut().enumerate() {
            if pet.is_dead() {
                continue;
            }
            if pet.tick() {
                info!(
                    pet = %pet.name(),
                    reason = pet.reason_for_death().unwrap_or_default(),
                    ticks = pet.ticks_survived(),
                    "pet died"
                );
                report.deaths.push(PetId(i));
            }
            if pet.boredom_message() == BoredomStatus::Happy {
                report.coins_earned += 1;
            }
        }
        self.wallet = self.wallet.saturating_add(report.coins_earned);
        self.ticks_survived += 1;
        report.tick = self.ticks_survived;
        debug!(
            tick = self.ticks_survived,
            coins = report.coins_earned,
            wallet = self.wallet,
            "tick"
        );
        if !report.deaths.is_empty() {
            self.log_if_game_over();
        }
        report
    }

    /// Snapshot for the end-of-game screen.
    pub fn cemetery(&self) -> CemeteryReport {
        CemeteryReport::from_simulator(self)
    }

    fn log_if_game_over(&self) {
        if self.all_pets_dead() {
            info!(ticks = self.ticks_survived, wallet = self.wallet, "all pets dead");
        }
    }
}

/// Two distinct mutable elements of one slice.
fn pair_mut<T>(items: &mut [T], a: usize, b: usize) -> (&mut T, &mut T) {
    debug_assert_ne!(a, b);
    if a < b {
        let (left, right) = items.split_at_mut(b);
        (&mut left[a], &mut right[0])
    } else {
        let (left, right) = items.split_at_mut(a);
        (&mut right[0], &mut left[b])
    }
}
