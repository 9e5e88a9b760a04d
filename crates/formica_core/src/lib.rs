//! # Formica Core
//!
//! The life-cycle engine of the Formica ant colony simulation.
//!
//! A [`Colony`] owns a population of eggs, ants and one queen that all feed
//! from a single depletable [`Food`] store. Each call to [`Colony::evolve`]
//! advances the colony by one day in a fixed phase order:
//! food production, queen and ant aging, egg hatching, egg laying.
//!
//! ## Architecture
//!
//! - **Validated configuration**: [`Settings`] can only be built through validation
//! - **Entity state machines**: [`Ant`], [`Queen`] and [`Egg`] implement [`Lifecycle`]
//! - **Explicit sharing**: the colony lends its food store to each entity in turn
//! - **Deterministic simulation**: one seeded ChaCha stream per colony
//!
//! ## Example
//!
//! ```
//! use formica_core::{Colony, ColonyConfig, Settings};
//!
//! let settings = Settings::new(ColonyConfig {
//!     seed: Some(42),
//!     ..Default::default()
//! })
//! .unwrap();
//! let mut colony = Colony::new(settings);
//! while !colony.is_extinct() && colony.day() < 30 {
//!     colony.evolve();
//! }
//! assert_eq!(colony.day(), 30);
//! ```

/// Regular ants (workers and non-workers)
pub mod ant;
/// The colony aggregate and its daily update
pub mod colony;
/// Configuration management for simulation parameters
pub mod config;
/// Eggs and hatching
pub mod egg;
/// Configuration error types
pub mod error;
/// The shared food store
pub mod food;
/// Lifecycle trait and random draws shared by all colony members
pub mod lifecycle;
/// Run metrics collection and logging setup
pub mod metrics;
/// The egg-laying queen
pub mod queen;

pub use ant::Ant;
pub use colony::Colony;
pub use config::{ColonyConfig, Settings, MONTH, WEEK, YEAR};
pub use egg::{Egg, Hatchling};
pub use error::ConfigError;
pub use food::Food;
pub use lifecycle::Lifecycle;
pub use metrics::{init_logging, Metrics};
pub use queen::Queen;
