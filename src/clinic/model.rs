//! One replication of the urgent-care model.

use tracing::info;

use super::config::{Scenario, ScenarioError};
use super::world::ClinicWorld;
use crate::sim::{SimTime, Simulator};
use crate::stats::SimOutputs;
use crate::trace::Trace;

/// Ties a validated scenario to a fresh simulator + world per run.
/// Replications share nothing; an outer harness may run them in any order.
pub struct UrgentCareModel {
    scenario: Scenario,
}

/// Everything one finished run hands back to the caller.
pub struct Replication {
    pub outputs: SimOutputs,
    pub trace: Trace,
    /// Total patients admitted, warm-up included.
    pub n_admitted: u64,
    /// Total patients departed, warm-up included.
    pub n_departed: u64,
    /// Clock of the last processed event.
    pub end_time: SimTime,
}

impl UrgentCareModel {
    pub fn new(scenario: Scenario) -> Result<Self, ScenarioError> {
        scenario.validate()?;
        Ok(UrgentCareModel { scenario })
    }

    pub fn scenario(&self) -> &Scenario {
        &self.scenario
    }

    /// Runs until the calendar drains or the horizon is reached, whichever
    /// comes first, then closes out the statistics.
    pub fn simulate(&self) -> Replication {
        let mut sim = Simulator::default();
        let mut world = ClinicWorld::new(self.scenario.clone());

        world.bootstrap(&mut sim);
        sim.run_until(SimTime::from_hours_f64(self.scenario.horizon_hours), &mut world);

        let end = world.last_event_time();
        world.outputs.collect_end_of_simulation(end);

        info!(
            seed = self.scenario.seed,
            admitted = world.n_admitted(),
            departed = world.n_departed(),
            end_hours = end.as_hours_f64(),
            "replication finished"
        );

        let n_admitted = world.n_admitted();
        let n_departed = world.n_departed();
        let (outputs, trace) = world.into_outputs();

        Replication {
            outputs,
            trace,
            n_admitted,
            n_departed,
            end_time: end,
        }
    }
}
