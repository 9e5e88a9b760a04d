use serde::{Deserialize, Serialize};

/// Whether an individual or egg is still part of the colony.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum LifeState {
    #[default]
    Alive,
    Dead,
}

impl LifeState {
    #[must_use]
    pub fn is_alive(self) -> bool {
        matches!(self, LifeState::Alive)
    }
}

/// Role of an individual. Queens are always `NotWorker`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Job {
    Worker,
    NotWorker,
}

impl Job {
    #[must_use]
    pub fn is_worker(self) -> bool {
        matches!(self, Job::Worker)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeathCause {
    /// Not enough food left to pay the daily hunger cost.
    Starvation,
    /// Exceeded the maximum age drawn at birth.
    OldAge,
    /// Lost the daily random-death draw.
    Misfortune,
}

/// How an egg's life ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EggFate {
    Starved,
    Hatched,
    FailedToHatch,
}

/// Serializable view of an ant or queen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AntRecord {
    pub age: u32,
    pub max_age: u32,
    pub state: LifeState,
    pub is_worker: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub death_cause: Option<DeathCause>,
}

/// Serializable view of an egg.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EggRecord {
    pub age: u32,
    pub max_age: u32,
    pub state: LifeState,
    pub is_queen_egg: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fate: Option<EggFate>,
}
