use crate::ant::Ant;
use crate::config::Settings;
use crate::egg::Egg;
use crate::food::Food;
use crate::lifecycle::{draw_around, Lifecycle};
use formica_data::{AntRecord, DeathCause, Job, LifeState};
use rand::Rng;

/// The colony's egg-laying queen.
///
/// A queen is an ant with her own lifespan distribution, no worker duty and no
/// random death. When she dies she leaves exactly one successor egg behind.
#[derive(Debug, Clone, PartialEq)]
pub struct Queen {
    body: Ant,
}

impl Queen {
    pub fn new<R: Rng + ?Sized>(settings: &Settings, rng: &mut R) -> Self {
        let max_age = draw_around(
            rng,
            settings.queen_avg_age,
            settings.queen_avg_age_variation,
        );
        Self::with_max_age(max_age)
    }

    #[must_use]
    pub fn with_max_age(max_age: u32) -> Self {
        Self {
            body: Ant::with_traits(max_age, Job::NotWorker),
        }
    }

    /// Living queen that is already `age` days old.
    #[must_use]
    pub fn aged(age: u32, max_age: u32) -> Self {
        Self {
            body: Ant::aged(age, max_age, Job::NotWorker),
        }
    }

    #[must_use]
    pub fn state(&self) -> LifeState {
        self.body.state()
    }

    #[must_use]
    pub fn death_cause(&self) -> Option<DeathCause> {
        self.body.death_cause()
    }

    /// Lays a batch of regular eggs.
    ///
    /// Costs `queen_hunger` once. A dead queen, or one the store cannot feed,
    /// lays nothing and consumes nothing.
    pub fn lay_eggs<R: Rng + ?Sized>(
        &self,
        food: &mut Food,
        settings: &Settings,
        rng: &mut R,
    ) -> Vec<Egg> {
        if !self.is_alive() || !food.can_afford(settings.queen_hunger) {
            return Vec::new();
        }
        food.remove(settings.queen_hunger);
        let count = draw_around(
            rng,
            settings.queen_avg_eggs,
            settings.queen_avg_egg_variation,
        );
        (0..count).map(|_| Egg::new(settings, rng, false)).collect()
    }

    #[must_use]
    pub fn to_record(&self) -> AntRecord {
        self.body.to_record()
    }
}

impl Lifecycle for Queen {
    /// Successor egg, laid on the day the queen dies.
    type Outcome = Option<Egg>;

    fn evolve<R: Rng + ?Sized>(
        &mut self,
        food: &mut Food,
        settings: &Settings,
        rng: &mut R,
    ) -> Option<Egg> {
        if !self.is_alive() {
            return None;
        }
        if !self.body.feed_and_age(food, settings.queen_hunger) {
            return Some(Egg::new(settings, rng, true));
        }
        // Within one day of her natural maximum.
        if self.age() + 1 >= self.max_age() {
            self.body.die(DeathCause::OldAge);
            return Some(Egg::new(settings, rng, true));
        }
        None
    }

    fn is_alive(&self) -> bool {
        self.body.is_alive()
    }

    fn age(&self) -> u32 {
        self.body.age()
    }

    fn max_age(&self) -> u32 {
        self.body.max_age()
    }
}
