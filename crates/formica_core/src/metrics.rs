//! Run metrics for the colony simulation.
//!
//! Provides structured logging and counters for monitoring long runs.

use crate::config::YEAR;
use formica_data::{ColonySnapshot, DayReport};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Aggregated statistics over a simulation run.
pub struct Metrics {
    day_count: AtomicU64,
    population: AtomicU64,
    peak_population: AtomicU64,
    pub counters: Mutex<HashMap<&'static str, u64>>,
    start_time: Instant,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    #[must_use]
    pub fn new() -> Self {
        Self {
            day_count: AtomicU64::new(0),
            population: AtomicU64::new(0),
            peak_population: AtomicU64::new(0),
            counters: Mutex::new(HashMap::new()),
            start_time: Instant::now(),
        }
    }

    /// Records a completed day with its duration.
    pub fn record_day(&self, report: &DayReport, snapshot: &ColonySnapshot, duration: Duration) {
        let days = self.day_count.fetch_add(1, Ordering::Relaxed) + 1;
        let population = snapshot.ant_count as u64;
        self.population.store(population, Ordering::Relaxed);
        self.peak_population.fetch_max(population, Ordering::Relaxed);

        self.add_to_counter("starved", report.ants_starved as u64);
        self.add_to_counter("died_of_age", report.ants_died_of_age as u64);
        self.add_to_counter("died_randomly", report.ants_died_randomly as u64);
        self.add_to_counter("eggs_starved", report.eggs_starved as u64);
        self.add_to_counter("hatched", report.ants_hatched as u64);
        self.add_to_counter("failed_hatch", report.failed_hatches as u64);
        self.add_to_counter("eggs_laid", report.eggs_laid as u64);
        self.add_to_counter("queens_discarded", report.queens_discarded as u64);
        self.add_to_counter("successions", u64::from(report.queen_succeeded));

        // Log at info level once per simulated year
        if days % u64::from(YEAR) == 0 {
            tracing::info!(
                day = snapshot.day,
                ants = snapshot.ant_count,
                eggs = snapshot.egg_count,
                food = snapshot.food,
                duration_us = duration.as_micros() as u64,
                "Colony year"
            );
        }
    }

    /// Adds `amount` to a named counter.
    pub fn add_to_counter(&self, name: &'static str, amount: u64) {
        let mut counters = self.counters.lock().unwrap_or_else(|e| e.into_inner());
        *counters.entry(name).or_insert(0) += amount;
    }

    #[must_use]
    pub fn counter(&self, name: &str) -> u64 {
        let counters = self.counters.lock().unwrap_or_else(|e| e.into_inner());
        counters.get(name).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn day_count(&self) -> u64 {
        self.day_count.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn population(&self) -> u64 {
        self.population.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn peak_population(&self) -> u64 {
        self.peak_population.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

/// Initialize the tracing subscriber. `RUST_LOG` overrides the `info` default.
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_env_filter(filter)
            .finish(),
    )
    .ok();
}
