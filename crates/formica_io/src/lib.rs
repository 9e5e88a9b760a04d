//! # Formica IO
//!
//! Persistence layer for the Formica simulation.
//!
//! This crate provides:
//! - Structured error handling with custom error types
//! - JSON serialization helpers
//! - Save directory management and save file listing/loading

/// Error types and result aliases for I/O operations
pub mod error;
/// Save files: one JSON document per finished simulation
pub mod persistence;
/// Validated serialization helpers for JSON
pub mod serialization;

pub use error::{IoError, Result};
pub use persistence::{SaveFile, SaveStore, DEFAULT_SAVE_DIRECTORY};
pub use serialization::{from_json, read_json_file, to_json, to_json_pretty, write_json_file};
