//! Patient entity.

use std::fmt;

use crate::sim::SimTime;

/// Monotonically increasing patient identity, assigned at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PatientId(pub u64);

impl fmt::Display for PatientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Patient {}", self.0)
    }
}

/// A patient in the arena. Timestamps are set exactly once each and satisfy
/// `arrival <= joined <= left <= departure`; the `Option`s stay `None` for a
/// patient that walks straight into an idle exam room.
#[derive(Debug, Clone)]
pub struct Patient {
    pub id: PatientId,
    pub t_arrived: SimTime,
    pub t_joined_line: Option<SimTime>,
    pub t_left_line: Option<SimTime>,
}

impl Patient {
    pub fn new(id: PatientId) -> Self {
        Patient {
            id,
            t_arrived: SimTime::ZERO,
            t_joined_line: None,
            t_left_line: None,
        }
    }

    /// Hours spent in the waiting line; 0 if never queued.
    pub fn waited_hours(&self) -> f64 {
        match (self.t_joined_line, self.t_left_line) {
            (Some(joined), Some(left)) => left.as_hours_f64() - joined.as_hours_f64(),
            _ => 0.0,
        }
    }
}
