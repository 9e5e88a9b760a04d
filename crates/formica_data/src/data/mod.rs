//! Core data structures for the Formica simulation.

pub mod colony;
pub mod entity;
