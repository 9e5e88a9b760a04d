use crate::config::Settings;
use crate::food::Food;
use crate::lifecycle::{draw_around, roll, Lifecycle};
use formica_data::{AntRecord, DeathCause, Job, LifeState};
use rand::Rng;

/// A regular (non-queen) ant.
#[derive(Debug, Clone, PartialEq)]
pub struct Ant {
    age: u32,
    max_age: u32,
    state: LifeState,
    job: Job,
    death_cause: Option<DeathCause>,
}

impl Ant {
    /// Newborn ant with a maximum age and role drawn from `settings`.
    pub fn new<R: Rng + ?Sized>(settings: &Settings, rng: &mut R) -> Self {
        let max_age = draw_around(rng, settings.ant_avg_age, settings.ant_avg_age_variation);
        let job = if roll(rng, settings.ant_worker_chance) {
            Job::Worker
        } else {
            Job::NotWorker
        };
        Self::with_traits(max_age, job)
    }

    /// Newborn ant with explicit traits.
    #[must_use]
    pub fn with_traits(max_age: u32, job: Job) -> Self {
        Self {
            age: 0,
            max_age,
            state: LifeState::Alive,
            job,
            death_cause: None,
        }
    }

    /// Living ant that is already `age` days old.
    #[must_use]
    pub fn aged(age: u32, max_age: u32, job: Job) -> Self {
        Self {
            age,
            ..Self::with_traits(max_age, job)
        }
    }

    #[must_use]
    pub fn state(&self) -> LifeState {
        self.state
    }

    #[must_use]
    pub fn job(&self) -> Job {
        self.job
    }

    #[must_use]
    pub fn is_worker(&self) -> bool {
        self.job.is_worker()
    }

    #[must_use]
    pub fn death_cause(&self) -> Option<DeathCause> {
        self.death_cause
    }

    pub(crate) fn die(&mut self, cause: DeathCause) {
        self.state = LifeState::Dead;
        self.death_cause = Some(cause);
    }

    /// Pays `hunger` for the day and grows one day older.
    ///
    /// Returns `false` without aging when the store cannot cover the cost, in
    /// which case the ant has starved.
    pub(crate) fn feed_and_age(&mut self, food: &mut Food, hunger: f64) -> bool {
        if !food.can_afford(hunger) {
            self.die(DeathCause::Starvation);
            return false;
        }
        self.age += 1;
        food.remove(hunger);
        true
    }

    #[must_use]
    pub fn to_record(&self) -> AntRecord {
        AntRecord {
            age: self.age,
            max_age: self.max_age,
            state: self.state,
            is_worker: self.is_worker(),
            death_cause: self.death_cause,
        }
    }
}

impl Lifecycle for Ant {
    /// Cause of death when the ant died during this call.
    type Outcome = Option<DeathCause>;

    fn evolve<R: Rng + ?Sized>(
        &mut self,
        food: &mut Food,
        settings: &Settings,
        rng: &mut R,
    ) -> Option<DeathCause> {
        if !self.is_alive() {
            return None;
        }
        if !self.feed_and_age(food, settings.ant_hunger) {
            return self.death_cause;
        }
        if self.age > self.max_age {
            self.die(DeathCause::OldAge);
        } else if roll(rng, settings.ant_random_death_chance) {
            self.die(DeathCause::Misfortune);
        }
        self.death_cause
    }

    fn is_alive(&self) -> bool {
        self.state.is_alive()
    }

    fn age(&self) -> u32 {
        self.age
    }

    fn max_age(&self) -> u32 {
        self.max_age
    }
}
