//! Headless simulation driver.
//!
//! Steps a [`Colony`] until it dies out or a day limit is reached, feeding
//! every day into [`Metrics`] and optionally pacing the run in wall-clock time.

use formica_core::{Colony, Metrics, Settings};
use formica_data::{ColonySnapshot, DayReport};
use serde::Serialize;
use std::time::{Duration, Instant};

/// Outcome of a finished run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub snapshot: ColonySnapshot,
    pub extinct: bool,
    pub peak_population: u64,
    pub total_hatched: u64,
    pub total_starved: u64,
    pub successions: u64,
    #[serde(skip)]
    pub elapsed: Duration,
}

pub struct Simulation {
    colony: Colony,
    metrics: Metrics,
    max_days: Option<u64>,
    pace: Option<Duration>,
}

impl Simulation {
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self::from_colony(Colony::new(settings))
    }

    #[must_use]
    pub fn from_colony(colony: Colony) -> Self {
        Self {
            colony,
            metrics: Metrics::new(),
            max_days: None,
            pace: None,
        }
    }

    /// Stops the run once the colony reaches `days`, even if it is still alive.
    #[must_use]
    pub fn with_max_days(mut self, days: u64) -> Self {
        self.max_days = Some(days);
        self
    }

    /// Sleeps `simulation_speed` seconds after every day.
    ///
    /// A speed too large for a [`Duration`] disables pacing.
    #[must_use]
    pub fn realtime(mut self, enabled: bool) -> Self {
        self.pace = None;
        if !enabled {
            return self;
        }
        let speed = self.colony.settings().simulation_speed;
        match Duration::try_from_secs_f64(speed) {
            Ok(pace) => self.pace = Some(pace),
            Err(e) => tracing::warn!(speed, error = %e, "Pacing disabled"),
        }
        self
    }

    #[must_use]
    pub fn colony(&self) -> &Colony {
        &self.colony
    }

    #[must_use]
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    #[must_use]
    pub fn into_colony(self) -> Colony {
        self.colony
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.colony.is_extinct() || self.max_days.is_some_and(|max| self.colony.day() >= max)
    }

    /// Runs a single day.
    pub fn step(&mut self) -> DayReport {
        let started = Instant::now();
        let report = self.colony.evolve();
        self.metrics
            .record_day(&report, &self.colony.snapshot(), started.elapsed());
        if let Some(pace) = self.pace {
            std::thread::sleep(pace);
        }
        report
    }

    pub fn run(&mut self) -> RunSummary {
        self.run_with(|_, _| {})
    }

    /// Runs to completion, calling `observer` after every day.
    pub fn run_with<F>(&mut self, mut observer: F) -> RunSummary
    where
        F: FnMut(&Colony, &DayReport),
    {
        tracing::info!(
            fingerprint = %self.colony.settings().fingerprint(),
            seed = ?self.colony.settings().seed,
            max_days = ?self.max_days,
            "Simulation started"
        );
        while !self.is_finished() {
            let report = self.step();
            observer(&self.colony, &report);
        }
        let summary = self.summary();
        tracing::info!(
            day = summary.snapshot.day,
            extinct = summary.extinct,
            peak = summary.peak_population,
            "Simulation finished"
        );
        summary
    }

    #[must_use]
    pub fn summary(&self) -> RunSummary {
        RunSummary {
            snapshot: self.colony.snapshot(),
            extinct: self.colony.is_extinct(),
            peak_population: self.metrics.peak_population(),
            total_hatched: self.metrics.counter("hatched"),
            total_starved: self.metrics.counter("starved"),
            successions: self.metrics.counter("successions"),
            elapsed: self.metrics.elapsed(),
        }
    }
}
