use super::entity::{AntRecord, EggRecord};
use serde::{Deserialize, Serialize};

/// Aggregate counters of a colony at the end of a day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ColonySnapshot {
    pub day: u64,
    pub ant_count: usize,
    pub dead_ant_count: u64,
    pub worker_count: usize,
    pub egg_count: usize,
    pub food: f64,
    pub queen_alive: bool,
    pub born_ants: u64,
}

/// Full colony dump as written to save files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColonyRecord {
    #[serde(flatten)]
    pub snapshot: ColonySnapshot,
    pub queen: AntRecord,
    pub ants: Vec<AntRecord>,
    pub eggs: Vec<EggRecord>,
}

/// What happened during a single call to the daily update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DayReport {
    /// Day index the update ran for (before the increment).
    pub day: u64,
    pub food_produced: u64,
    pub ants_starved: usize,
    pub ants_died_of_age: usize,
    pub ants_died_randomly: usize,
    pub eggs_starved: usize,
    pub ants_hatched: usize,
    pub queens_hatched: usize,
    pub failed_hatches: usize,
    pub eggs_laid: usize,
    pub successor_egg_laid: bool,
    pub queen_died: bool,
    pub queen_succeeded: bool,
    pub queens_discarded: usize,
}

impl DayReport {
    #[must_use]
    pub fn ant_deaths(&self) -> usize {
        self.ants_starved + self.ants_died_of_age + self.ants_died_randomly
    }
}
