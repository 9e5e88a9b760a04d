//! Plain data records shared by the Formica crates.

pub mod data;

pub use data::colony::{ColonyRecord, ColonySnapshot, DayReport};
pub use data::entity::{AntRecord, DeathCause, EggFate, EggRecord, Job, LifeState};
