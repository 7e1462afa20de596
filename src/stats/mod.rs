//! Performance statistics for a single replication.
//!
//! Two measurement kinds: prevalence (time-weighted step functions, e.g. the
//! number of patients waiting over time) and discrete per-patient samples
//! (e.g. one patient's total hours in the clinic). Collectors are pure
//! record-keeping and never touch facility state.

mod discrete;
mod outputs;
mod prevalence;

pub use discrete::DiscreteSamples;
pub use outputs::{ReplicationReport, SimOutputs, StepPoint};
pub use prevalence::PrevalenceSamplePath;
