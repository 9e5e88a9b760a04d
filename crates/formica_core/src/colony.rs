//! The colony and its fixed-order daily update.
//!
//! Every day runs the same five phases against the one shared [`Food`] store:
//!
//! 1. food production from worker labour
//! 2. ant phase: the queen first (possibly leaving a successor egg), then every ant
//! 3. egg phase: hatching, culling and queen succession
//! 4. laying phase, every `queen_laying_rate` days
//! 5. day counter increment
//!
//! All randomness comes from the colony's own [`ChaCha8Rng`], seeded once at
//! construction, so two colonies built from the same seeded [`Settings`]
//! evolve identically.

use crate::ant::Ant;
use crate::config::Settings;
use crate::egg::{Egg, Hatchling};
use crate::food::Food;
use crate::lifecycle::Lifecycle;
use crate::queen::Queen;
use formica_data::{ColonyRecord, ColonySnapshot, DayReport, DeathCause, EggFate};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub struct Colony {
    day: u64,
    queen: Queen,
    ants: Vec<Ant>,
    eggs: Vec<Egg>,
    food: Food,
    /// Every individual that ever joined the colony, queens included.
    born_ants: u64,
    settings: Settings,
    rng: ChaCha8Rng,
}

impl Colony {
    /// Builds the initial population. Seeds the random stream from
    /// `settings.seed`, or from OS entropy when no seed is set.
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        let rng = match settings.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self::with_rng(settings, rng)
    }

    #[must_use]
    pub fn with_rng(settings: Settings, mut rng: ChaCha8Rng) -> Self {
        let ants: Vec<Ant> = (0..settings.initial_ant_quantity)
            .map(|_| Ant::new(&settings, &mut rng))
            .collect();
        let queen = Queen::new(&settings, &mut rng);
        let food = Food::new(settings.initial_food_quantity);
        tracing::debug!(
            ants = ants.len(),
            queen_max_age = queen.max_age(),
            food = food.quantity(),
            "Colony founded"
        );
        Self {
            day: 0,
            born_ants: ants.len() as u64 + 1,
            queen,
            ants,
            eggs: Vec::new(),
            food,
            settings,
            rng,
        }
    }

    /// Builds a colony around an explicit population instead of drawing one.
    ///
    /// Every living ant passed in counts as born, and so does the queen if she
    /// is alive. Dead ants and eggs are dropped.
    #[must_use]
    pub fn with_population(
        settings: Settings,
        rng: ChaCha8Rng,
        queen: Queen,
        ants: Vec<Ant>,
        eggs: Vec<Egg>,
    ) -> Self {
        let ants: Vec<Ant> = ants.into_iter().filter(Ant::is_alive).collect();
        let eggs: Vec<Egg> = eggs.into_iter().filter(Egg::is_alive).collect();
        Self {
            day: 0,
            born_ants: ants.len() as u64 + u64::from(queen.is_alive()),
            food: Food::new(settings.initial_food_quantity),
            queen,
            ants,
            eggs,
            settings,
            rng,
        }
    }

    /// Advances the colony by one day.
    pub fn evolve(&mut self) -> DayReport {
        let mut report = DayReport {
            day: self.day,
            ..Default::default()
        };

        self.produce_food(&mut report);
        self.update_ants(&mut report);
        self.update_eggs(&mut report);
        self.lay_eggs(&mut report);
        self.day += 1;

        tracing::debug!(
            day = report.day,
            ants = self.ant_count(),
            eggs = self.eggs.len(),
            food = self.food.quantity(),
            produced = report.food_produced,
            ant_deaths = report.ant_deaths(),
            hatched = report.ants_hatched,
            laid = report.eggs_laid,
            "Colony day"
        );
        if self.is_extinct() {
            tracing::info!(day = self.day, born = self.born_ants, "Colony extinct");
        }
        report
    }

    fn produce_food(&mut self, report: &mut DayReport) {
        let workers = self.worker_count() as f64;
        let low = (workers * self.settings.min_food_multiplier).round_ties_even() as u64;
        let high = (workers * self.settings.max_food_multiplier).round_ties_even() as u64;
        let amount = self.rng.gen_range(low..=high);
        self.food.add(amount as f64);
        report.food_produced = amount;
    }

    fn update_ants(&mut self, report: &mut DayReport) {
        let queen_was_alive = self.queen.is_alive();
        if let Some(egg) = self
            .queen
            .evolve(&mut self.food, &self.settings, &mut self.rng)
        {
            report.successor_egg_laid = true;
            self.eggs.push(egg);
        }
        if queen_was_alive && !self.queen.is_alive() {
            report.queen_died = true;
            tracing::info!(
                day = self.day,
                age = self.queen.age(),
                cause = ?self.queen.death_cause(),
                "Queen died"
            );
        }

        for ant in &mut self.ants {
            match ant.evolve(&mut self.food, &self.settings, &mut self.rng) {
                Some(DeathCause::Starvation) => report.ants_starved += 1,
                Some(DeathCause::OldAge) => report.ants_died_of_age += 1,
                Some(DeathCause::Misfortune) => report.ants_died_randomly += 1,
                None => {}
            }
        }
        self.ants.retain(Ant::is_alive);
    }

    fn update_eggs(&mut self, report: &mut DayReport) {
        let mut successor = None;
        for egg in &mut self.eggs {
            match egg.evolve(&mut self.food, &self.settings, &mut self.rng) {
                Some(Hatchling::Ant(ant)) => {
                    report.ants_hatched += 1;
                    self.born_ants += 1;
                    self.ants.push(ant);
                }
                Some(Hatchling::Queen(queen)) => {
                    report.queens_hatched += 1;
                    // Later hatchlings of the same day replace earlier ones.
                    if successor.replace(queen).is_some() {
                        report.queens_discarded += 1;
                    }
                }
                None => match egg.fate() {
                    Some(EggFate::Starved) => report.eggs_starved += 1,
                    Some(EggFate::FailedToHatch) => report.failed_hatches += 1,
                    Some(EggFate::Hatched) | None => {}
                },
            }
        }
        self.eggs.retain(Egg::is_alive);

        if let Some(queen) = successor {
            if self.queen.is_alive() {
                report.queens_discarded += 1;
                tracing::warn!(day = self.day, "Hatched queen discarded, colony already has a queen");
            } else {
                self.queen = queen;
                self.born_ants += 1;
                report.queen_succeeded = true;
                tracing::info!(
                    day = self.day,
                    max_age = self.queen.max_age(),
                    "New queen took over"
                );
            }
        }
    }

    fn lay_eggs(&mut self, report: &mut DayReport) {
        if self.day % u64::from(self.settings.queen_laying_rate) != 0 {
            return;
        }
        let batch = self
            .queen
            .lay_eggs(&mut self.food, &self.settings, &mut self.rng);
        report.eggs_laid = batch.len();
        self.eggs.extend(batch);
    }

    #[must_use]
    pub fn day(&self) -> u64 {
        self.day
    }

    #[must_use]
    pub fn queen(&self) -> &Queen {
        &self.queen
    }

    #[must_use]
    pub fn ants(&self) -> &[Ant] {
        &self.ants
    }

    #[must_use]
    pub fn eggs(&self) -> &[Egg] {
        &self.eggs
    }

    #[must_use]
    pub fn food(&self) -> &Food {
        &self.food
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub fn born_ants(&self) -> u64 {
        self.born_ants
    }

    /// Living ants, the queen included.
    #[must_use]
    pub fn ant_count(&self) -> usize {
        self.ants.len() + usize::from(self.queen.is_alive())
    }

    #[must_use]
    pub fn dead_ant_count(&self) -> u64 {
        self.born_ants.saturating_sub(self.ant_count() as u64)
    }

    #[must_use]
    pub fn worker_count(&self) -> usize {
        self.ants.iter().filter(|ant| ant.is_worker()).count()
    }

    #[must_use]
    pub fn egg_count(&self) -> usize {
        self.eggs.len()
    }

    /// No ants, no living queen and no eggs: nothing can ever change again.
    #[must_use]
    pub fn is_extinct(&self) -> bool {
        self.ants.is_empty() && !self.queen.is_alive() && self.eggs.is_empty()
    }

    #[must_use]
    pub fn snapshot(&self) -> ColonySnapshot {
        ColonySnapshot {
            day: self.day,
            ant_count: self.ant_count(),
            dead_ant_count: self.dead_ant_count(),
            worker_count: self.worker_count(),
            egg_count: self.egg_count(),
            food: self.food.quantity(),
            queen_alive: self.queen.is_alive(),
            born_ants: self.born_ants,
        }
    }

    #[must_use]
    pub fn to_record(&self) -> ColonyRecord {
        ColonyRecord {
            snapshot: self.snapshot(),
            queen: self.queen.to_record(),
            ants: self.ants.iter().map(Ant::to_record).collect(),
            eggs: self.eggs.iter().map(Egg::to_record).collect(),
        }
    }
}
