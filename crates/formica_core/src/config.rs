//! Configuration management for colony simulation parameters.
//!
//! [`ColonyConfig`] is the raw, freely editable parameter set that maps to a
//! `config.toml` file or to the flat key/value table stored in save files.
//! [`Settings`] is the validated, read-only bundle the engine consumes; it can
//! only be obtained through validation, so a running colony never sees an
//! out-of-range parameter.
//!
//! ## Example `config.toml`
//!
//! ```toml
//! initial_food_quantity = 30000.0
//! initial_ant_quantity = 100
//! ant_random_death_chance = 0.01
//! queen_laying_rate = 5
//! seed = 42
//! ```
//!
//! Keys that are left out keep their default value.

use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::Deref;

/// Days in a simulated year.
pub const YEAR: u32 = 365;
/// Days in a simulated month.
pub const MONTH: u32 = YEAR / 12;
/// Days in a simulated week.
pub const WEEK: u32 = MONTH / 4;

/// Raw colony parameters.
///
/// Ages and counts are whole days or individuals; hunger costs and food
/// quantities are fractional food units; `*_chance` fields are probabilities.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ColonyConfig {
    /// Wall-clock seconds between two days when a driver paces the run.
    pub simulation_speed: f64,
    pub initial_food_quantity: f64,
    pub initial_ant_quantity: u32,
    pub ant_avg_age: u32,
    pub ant_avg_age_variation: u32,
    pub ant_worker_chance: f64,
    pub min_food_multiplier: f64,
    pub max_food_multiplier: f64,
    pub ant_hunger: f64,
    pub ant_random_death_chance: f64,
    pub queen_avg_age: u32,
    pub queen_avg_age_variation: u32,
    pub queen_hunger: f64,
    /// The queen lays a batch every `queen_laying_rate` days.
    pub queen_laying_rate: u32,
    pub queen_avg_eggs: u32,
    pub queen_avg_egg_variation: u32,
    pub egg_avg_age: u32,
    pub egg_avg_age_variation: u32,
    pub egg_hunger: f64,
    pub egg_evolve_chance: f64,
    pub queen_avg_egg_age: u32,
    pub queen_avg_egg_age_variation: u32,
    pub queen_egg_hunger: f64,
    pub queen_egg_evolve_chance: f64,
    /// Seed of the colony's random stream. `None` seeds from OS entropy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for ColonyConfig {
    fn default() -> Self {
        Self {
            simulation_speed: 1.0,
            initial_food_quantity: 30_000.0,
            initial_ant_quantity: 100,
            ant_avg_age: 90,
            ant_avg_age_variation: 20,
            ant_worker_chance: 0.95,
            min_food_multiplier: 0.5,
            max_food_multiplier: 1.5,
            ant_hunger: 0.3,
            ant_random_death_chance: 0.01,
            queen_avg_age: 5 * YEAR,
            queen_avg_age_variation: YEAR,
            queen_hunger: 10.0,
            queen_laying_rate: 5,
            queen_avg_eggs: 500,
            queen_avg_egg_variation: 150,
            egg_avg_age: 2 * WEEK,
            egg_avg_age_variation: WEEK,
            egg_hunger: 0.1,
            egg_evolve_chance: 0.9,
            queen_avg_egg_age: 2 * MONTH,
            queen_avg_egg_age_variation: 2 * WEEK,
            queen_egg_hunger: 1.0,
            queen_egg_evolve_chance: 0.5,
            seed: None,
        }
    }
}

fn ensure_non_negative(field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(ConfigError::NotFinite { field });
    }
    if value < 0.0 {
        return Err(ConfigError::Negative { field, value });
    }
    Ok(())
}

fn ensure_probability(field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(ConfigError::NotFinite { field });
    }
    if !(0.0..=1.0).contains(&value) {
        return Err(ConfigError::OutOfRange {
            field,
            value,
            min: 0.0,
            max: 1.0,
        });
    }
    Ok(())
}

impl ColonyConfig {
    /// Validates all configuration parameters.
    ///
    /// Returns `Ok(())` if all parameters are valid, or the first failing
    /// parameter otherwise.
    ///
    /// # Validation Rules
    /// - Quantities, multipliers and hunger costs must be finite and non-negative
    /// - Chances must be in `[0.0, 1.0]`
    /// - `min_food_multiplier <= max_food_multiplier`
    /// - `queen_laying_rate >= 1`
    ///
    /// Integer parameters are unsigned and cannot be negative by construction.
    pub fn validate(&self) -> Result<()> {
        ensure_non_negative("simulation_speed", self.simulation_speed)?;
        ensure_non_negative("initial_food_quantity", self.initial_food_quantity)?;
        ensure_probability("ant_worker_chance", self.ant_worker_chance)?;
        ensure_non_negative("min_food_multiplier", self.min_food_multiplier)?;
        ensure_non_negative("max_food_multiplier", self.max_food_multiplier)?;
        if self.min_food_multiplier > self.max_food_multiplier {
            return Err(ConfigError::InvertedFoodMultipliers {
                min: self.min_food_multiplier,
                max: self.max_food_multiplier,
            });
        }
        ensure_non_negative("ant_hunger", self.ant_hunger)?;
        ensure_probability("ant_random_death_chance", self.ant_random_death_chance)?;
        ensure_non_negative("queen_hunger", self.queen_hunger)?;
        if self.queen_laying_rate == 0 {
            return Err(ConfigError::ZeroLayingRate);
        }
        ensure_non_negative("egg_hunger", self.egg_hunger)?;
        ensure_probability("egg_evolve_chance", self.egg_evolve_chance)?;
        ensure_non_negative("queen_egg_hunger", self.queen_egg_hunger)?;
        ensure_probability("queen_egg_evolve_chance", self.queen_egg_evolve_chance)?;
        Ok(())
    }
}

/// Validated, immutable colony parameters.
///
/// Dereferences to [`ColonyConfig`] for read access. There is no way to
/// mutate a `Settings` in place; build a new `ColonyConfig` and validate it
/// again instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ColonyConfig", into = "ColonyConfig")]
pub struct Settings(ColonyConfig);

impl Settings {
    /// Validates `config` and freezes it.
    pub fn new(config: ColonyConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self(config))
    }

    /// Parses and validates a TOML document. Missing keys take their default.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config = toml::from_str::<ColonyConfig>(content)?;
        Self::new(config)
    }

    /// Rebuilds settings from the flat key/value table produced by [`Settings::to_map`].
    pub fn from_map(map: BTreeMap<String, serde_json::Value>) -> Result<Self> {
        let object: serde_json::Map<String, serde_json::Value> = map.into_iter().collect();
        let config = serde_json::from_value::<ColonyConfig>(serde_json::Value::Object(object))?;
        Self::new(config)
    }

    /// Flat key/value view of every parameter, keyed by field name.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<String, serde_json::Value> {
        match serde_json::to_value(&self.0) {
            Ok(serde_json::Value::Object(object)) => object.into_iter().collect(),
            _ => BTreeMap::new(),
        }
    }

    /// Same parameters with a different seed. Seeds carry no bound, so this
    /// cannot fail.
    #[must_use]
    pub fn with_seed(&self, seed: Option<u64>) -> Self {
        Self(ColonyConfig {
            seed,
            ..self.0.clone()
        })
    }

    #[must_use]
    pub fn into_inner(self) -> ColonyConfig {
        self.0
    }

    /// SHA-256 digest of the biological parameters.
    ///
    /// Pacing and seed are left out so that two runs of the same colony
    /// model share a fingerprint.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        for (key, value) in self.to_map() {
            if key == "simulation_speed" || key == "seed" {
                continue;
            }
            hasher.update(key.as_bytes());
            hasher.update(b"=");
            hasher.update(value.to_string().as_bytes());
            hasher.update(b";");
        }
        hex::encode(hasher.finalize())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self(ColonyConfig::default())
    }
}

impl Deref for Settings {
    type Target = ColonyConfig;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl TryFrom<ColonyConfig> for Settings {
    type Error = ConfigError;

    fn try_from(config: ColonyConfig) -> Result<Self> {
        Self::new(config)
    }
}

impl From<Settings> for ColonyConfig {
    fn from(settings: Settings) -> Self {
        settings.0
    }
}
