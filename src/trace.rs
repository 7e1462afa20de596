//! Chronological human-readable event trace.
//!
//! Disabled by default; when enabled, each message is stamped with the
//! current simulation time in hours, rounded to a fixed number of decimals.

use crate::sim::SimTime;

pub const DEFAULT_DECIMALS: usize = 5;

#[derive(Debug, Clone)]
pub struct Trace {
    enabled: bool,
    deci: usize,
    lines: Vec<String>,
}

impl Trace {
    pub fn new(enabled: bool, deci: usize) -> Self {
        Trace {
            enabled,
            deci,
            lines: Vec::new(),
        }
    }

    pub fn disabled() -> Self {
        Trace::new(false, DEFAULT_DECIMALS)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn add(&mut self, time: SimTime, message: impl AsRef<str>) {
        if !self.enabled {
            return;
        }
        self.lines.push(format!(
            "At {:.prec$}: {}",
            time.as_hours_f64(),
            message.as_ref(),
            prec = self.deci
        ));
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}
