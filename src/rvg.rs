//! Random variate generation.
//!
//! One seeded `Pcg64` per replication; arrival and service draws interleave
//! on it in event order, so the whole stream is reproducible from the seed.

use rand_distr::{Distribution, Exp};
use rand_pcg::Pcg64;

/// Exponential distribution parameterized by its mean (hours).
#[derive(Debug, Clone, Copy)]
pub struct Exponential {
    dist: Exp<f64>,
}

impl Exponential {
    /// `mean` must be positive and finite; the caller validates scenario
    /// input before constructing distributions.
    pub fn new(mean: f64) -> Exponential {
        assert!(
            mean.is_finite() && mean > 0.0,
            "exponential mean must be positive, got {mean}"
        );
        Exponential {
            dist: Exp::new(1.0 / mean).expect("rate checked positive"),
        }
    }

    pub fn sample(&self, rng: &mut Pcg64) -> f64 {
        self.dist.sample(rng)
    }
}

/// Seeded generator for a single replication.
pub fn seeded_rng(seed: u64) -> Pcg64 {
    use rand::SeedableRng;
    Pcg64::seed_from_u64(seed)
}
