//! Scenario configuration.
//!
//! Immutable input for one replication, validated once before any event is
//! processed. Loadable from a JSON file; every field also has a CLI override.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("number of exam rooms must be at least 1, got {0}")]
    NoRooms(usize),
    #[error("operating window must be a positive number of hours, got {0}")]
    BadHoursOpen(f64),
    #[error("mean interarrival time must be a positive number of hours, got {0}")]
    BadInterarrival(f64),
    #[error("mean exam duration must be a positive number of hours, got {0}")]
    BadExamDuration(f64),
    #[error("horizon must be a positive number of hours, got {0}")]
    BadHorizon(f64),
    #[error("warm-up ({warm_up} h) must be non-negative and shorter than the horizon ({horizon} h)")]
    BadWarmUp { warm_up: f64, horizon: f64 },
}

/// Parameters of one urgent-care replication. Times are in hours.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Scenario {
    /// Hours the clinic admits new arrivals before closing.
    pub hours_open: f64,
    /// Number of exam rooms (servers).
    pub num_rooms: usize,
    /// Mean patient interarrival time.
    pub mean_interarrival_hours: f64,
    /// Mean exam (service) duration.
    pub mean_exam_hours: f64,
    /// Observations before this time are excluded from steady-state estimates.
    pub warm_up_hours: f64,
    /// Hard cap on simulated time; normally the run drains well before it.
    pub horizon_hours: f64,
    /// Seed for the replication's random stream.
    pub seed: u64,
    /// Collect a human-readable chronological trace.
    pub trace: bool,
}

impl Default for Scenario {
    fn default() -> Self {
        Scenario {
            hours_open: 20.0,
            num_rooms: 2,
            mean_interarrival_hours: 5.0 / 60.0,
            mean_exam_hours: 8.0 / 60.0,
            warm_up_hours: 0.0,
            horizon_hours: 100_000.0,
            seed: 1,
            trace: false,
        }
    }
}

impl Scenario {
    /// Fail-fast validation; runs before the calendar sees a single event.
    pub fn validate(&self) -> Result<(), ScenarioError> {
        if self.num_rooms < 1 {
            return Err(ScenarioError::NoRooms(self.num_rooms));
        }
        if !(self.hours_open.is_finite() && self.hours_open > 0.0) {
            return Err(ScenarioError::BadHoursOpen(self.hours_open));
        }
        if !(self.mean_interarrival_hours.is_finite() && self.mean_interarrival_hours > 0.0) {
            return Err(ScenarioError::BadInterarrival(self.mean_interarrival_hours));
        }
        if !(self.mean_exam_hours.is_finite() && self.mean_exam_hours > 0.0) {
            return Err(ScenarioError::BadExamDuration(self.mean_exam_hours));
        }
        if !(self.horizon_hours.is_finite() && self.horizon_hours > 0.0) {
            return Err(ScenarioError::BadHorizon(self.horizon_hours));
        }
        if !(self.warm_up_hours.is_finite()
            && self.warm_up_hours >= 0.0
            && self.warm_up_hours < self.horizon_hours)
        {
            return Err(ScenarioError::BadWarmUp {
                warm_up: self.warm_up_hours,
                horizon: self.horizon_hours,
            });
        }
        Ok(())
    }

    /// Offered load ρ = mean service / (mean interarrival × rooms).
    pub fn offered_load(&self) -> f64 {
        self.mean_exam_hours / (self.mean_interarrival_hours * self.num_rooms as f64)
    }
}
