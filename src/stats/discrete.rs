//! Per-entity (discrete) observations.

/// A collection of per-patient scalar observations, e.g. hours spent in the
/// waiting room.
#[derive(Debug, Clone)]
pub struct DiscreteSamples {
    name: String,
    obs: Vec<f64>,
}

impl DiscreteSamples {
    pub fn new(name: impl Into<String>) -> Self {
        DiscreteSamples {
            name: name.into(),
            obs: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn record(&mut self, x: f64) {
        self.obs.push(x);
    }

    pub fn len(&self) -> usize {
        self.obs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obs.is_empty()
    }

    /// Running mean; 0.0 when no observations were collected.
    pub fn mean(&self) -> f64 {
        if self.obs.is_empty() {
            return 0.0;
        }
        self.obs.iter().sum::<f64>() / self.obs.len() as f64
    }

    pub fn observations(&self) -> &[f64] {
        &self.obs
    }
}
