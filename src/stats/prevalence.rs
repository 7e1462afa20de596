//! Time-weighted (prevalence) sample path.

use crate::sim::SimTime;

/// A step function over simulated time, updated by increments at discrete
/// instants. The time-weighted mean is taken over `[warm_up, end]`: area
/// before `warm_up` is excluded, but the value in effect at `warm_up` carries
/// into the window (leading-edge truncation, not restart-at-zero).
#[derive(Debug, Clone)]
pub struct PrevalenceSamplePath {
    name: String,
    warm_up: SimTime,
    value: i64,
    last_time: SimTime,
    area_hours: f64,
    max: i64,
    steps: Vec<(SimTime, i64)>,
    end_time: Option<SimTime>,
}

impl PrevalenceSamplePath {
    pub fn new(name: impl Into<String>, initial_value: i64, warm_up: SimTime) -> Self {
        PrevalenceSamplePath {
            name: name.into(),
            warm_up,
            value: initial_value,
            last_time: SimTime::ZERO,
            area_hours: 0.0,
            max: initial_value,
            steps: vec![(SimTime::ZERO, initial_value)],
            end_time: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append a new step at `time`. Times must be non-decreasing and the
    /// path must not have been closed; both are caller preconditions.
    pub fn record_increment(&mut self, time: SimTime, delta: i64) {
        assert!(self.end_time.is_none(), "{}: record after close", self.name);
        assert!(
            time >= self.last_time,
            "{}: time moved backwards ({:?} < {:?})",
            self.name,
            time,
            self.last_time
        );

        self.accumulate(time);
        self.value += delta;
        self.max = self.max.max(self.value);
        self.steps.push((time, self.value));
        self.last_time = time;
    }

    /// Finalize the last open interval at simulation end.
    pub fn close(&mut self, time: SimTime) {
        assert!(self.end_time.is_none(), "{}: closed twice", self.name);
        assert!(
            time >= self.last_time,
            "{}: close before last sample",
            self.name
        );

        self.accumulate(time);
        self.steps.push((time, self.value));
        self.last_time = time;
        self.end_time = Some(time);
    }

    // Adds value × overlap of [last_time, time) with [warm_up, ∞).
    fn accumulate(&mut self, time: SimTime) {
        let start = self.last_time.max(self.warm_up);
        if time > start {
            let dur = time.as_hours_f64() - start.as_hours_f64();
            self.area_hours += self.value as f64 * dur;
        }
    }

    /// Time-weighted mean over `[warm_up, end]`. Valid after `close`.
    pub fn time_weighted_mean(&self) -> f64 {
        let end = self
            .end_time
            .expect("mean requested before the path was closed");
        let window = end.as_hours_f64() - self.warm_up.as_hours_f64();
        if window <= 0.0 {
            return 0.0;
        }
        self.area_hours / window
    }

    /// Maximum value observed over the whole run (warm-up included).
    pub fn max(&self) -> i64 {
        self.max
    }

    pub fn current(&self) -> i64 {
        self.value
    }

    /// The recorded `(time, value)` step sequence.
    pub fn steps(&self) -> &[(SimTime, i64)] {
        &self.steps
    }
}
