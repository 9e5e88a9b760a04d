//! # Formica
//!
//! Day-by-day ant colony simulation: a headless runner around
//! [`formica_core::Colony`] and text rendering for its state.

pub mod report;
pub mod runner;

pub use runner::{RunSummary, Simulation};
