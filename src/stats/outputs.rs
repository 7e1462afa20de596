//! Replication outputs: the collector the facility controller reports into,
//! and the flat report handed to the reporting side.

use serde::Serialize;

use super::discrete::DiscreteSamples;
use super::prevalence::PrevalenceSamplePath;
use crate::sim::SimTime;

/// Collects the outputs of one simulation run. All hooks are pure
/// record-keeping; facility state is never read or mutated here.
#[derive(Debug)]
pub struct SimOutputs {
    warm_up: SimTime,
    n_arrived: u64,
    n_served: u64,
    pub n_waiting: PrevalenceSamplePath,
    pub n_in_system: PrevalenceSamplePath,
    pub n_rooms_busy: PrevalenceSamplePath,
    pub time_in_system: DiscreteSamples,
    pub time_waiting: DiscreteSamples,
}

impl SimOutputs {
    pub fn new(warm_up: SimTime) -> Self {
        SimOutputs {
            warm_up,
            n_arrived: 0,
            n_served: 0,
            n_waiting: PrevalenceSamplePath::new("patients waiting", 0, warm_up),
            n_in_system: PrevalenceSamplePath::new("patients in system", 0, warm_up),
            n_rooms_busy: PrevalenceSamplePath::new("rooms busy", 0, warm_up),
            time_in_system: DiscreteSamples::new("hours in system"),
            time_waiting: DiscreteSamples::new("hours in waiting room"),
        }
    }

    pub fn collect_arrival(&mut self, time: SimTime) {
        if time > self.warm_up {
            self.n_arrived += 1;
        }
        self.n_in_system.record_increment(time, 1);
    }

    pub fn collect_join_line(&mut self, time: SimTime) {
        self.n_waiting.record_increment(time, 1);
    }

    pub fn collect_leave_line(&mut self, time: SimTime) {
        self.n_waiting.record_increment(time, -1);
    }

    pub fn collect_start_exam(&mut self, time: SimTime) {
        self.n_rooms_busy.record_increment(time, 1);
    }

    /// `waited_hours` is 0 for a patient that was never queued. Patients who
    /// arrived during the warm-up are excluded from the discrete samples.
    pub fn collect_departure(&mut self, time: SimTime, arrived: SimTime, waited_hours: f64) {
        self.n_in_system.record_increment(time, -1);
        self.n_rooms_busy.record_increment(time, -1);

        if arrived >= self.warm_up {
            self.n_served += 1;
            self.time_in_system
                .record(time.as_hours_f64() - arrived.as_hours_f64());
            self.time_waiting.record(waited_hours);
        }
    }

    /// Closes all sample paths at the end of the run.
    pub fn collect_end_of_simulation(&mut self, time: SimTime) {
        self.n_waiting.close(time);
        self.n_in_system.close(time);
        self.n_rooms_busy.close(time);
    }

    /// Patients arrived after the warm-up.
    pub fn n_arrived(&self) -> u64 {
        self.n_arrived
    }

    /// Patients served whose whole stay fell after the warm-up.
    pub fn n_served(&self) -> u64 {
        self.n_served
    }

    pub fn report(&self, num_rooms: usize) -> ReplicationReport {
        ReplicationReport {
            n_arrived: self.n_arrived,
            n_served: self.n_served,
            ave_time_in_system_hours: self.time_in_system.mean(),
            ave_time_waiting_hours: self.time_waiting.mean(),
            ave_patients_in_system: self.n_in_system.time_weighted_mean(),
            ave_patients_waiting: self.n_waiting.time_weighted_mean(),
            max_patients_waiting: self.n_waiting.max(),
            ave_rooms_busy: self.n_rooms_busy.time_weighted_mean(),
            room_utilization: self.n_rooms_busy.time_weighted_mean() / num_rooms as f64,
            patients_waiting_path: to_step_points(self.n_waiting.steps()),
            patients_in_system_path: to_step_points(self.n_in_system.steps()),
            rooms_busy_path: to_step_points(self.n_rooms_busy.steps()),
        }
    }
}

/// One point of a prevalence step sequence, in model hours.
#[derive(Debug, Clone, Serialize)]
pub struct StepPoint {
    pub t_hours: f64,
    pub value: i64,
}

fn to_step_points(steps: &[(SimTime, i64)]) -> Vec<StepPoint> {
    steps
        .iter()
        .map(|&(t, v)| StepPoint {
            t_hours: t.as_hours_f64(),
            value: v,
        })
        .collect()
}

/// Flat per-replication report for the reporting collaborator.
#[derive(Debug, Clone, Serialize)]
pub struct ReplicationReport {
    pub n_arrived: u64,
    pub n_served: u64,
    pub ave_time_in_system_hours: f64,
    pub ave_time_waiting_hours: f64,
    pub ave_patients_in_system: f64,
    pub ave_patients_waiting: f64,
    pub max_patients_waiting: i64,
    pub ave_rooms_busy: f64,
    pub room_utilization: f64,
    pub patients_waiting_path: Vec<StepPoint>,
    pub patients_in_system_path: Vec<StepPoint>,
    pub rooms_busy_path: Vec<StepPoint>,
}
