//! Facility controller and state.
//!
//! `ClinicWorld` owns every piece of mutable replication state: the patient
//! arena, the waiting line, the exam rooms, the open flag, the random
//! stream, the statistics collector and the trace. Events carry ids; all
//! state transitions funnel through [`ClinicWorld::apply`].

use std::any::Any;
use std::collections::HashMap;

use rand_pcg::Pcg64;
use tracing::debug;

use super::config::Scenario;
use super::events::ClinicEvent;
use super::exam_room::{ExamRoom, RoomId};
use super::patient::{Patient, PatientId};
use super::waiting_line::WaitingLine;
use crate::rvg::{Exponential, seeded_rng};
use crate::sim::{SimTime, Simulator, World};
use crate::stats::SimOutputs;
use crate::trace::{DEFAULT_DECIMALS, Trace};

pub struct ClinicWorld {
    scenario: Scenario,
    rng: Pcg64,
    interarrival_dist: Exponential,
    exam_dist: Exponential,

    is_open: bool,
    next_patient_id: u64,
    patients: HashMap<PatientId, Patient>,
    line: WaitingLine,
    rooms: Vec<ExamRoom>,

    n_admitted: u64,
    n_departed: u64,
    last_event_time: SimTime,

    pub outputs: SimOutputs,
    pub trace: Trace,
}

impl World for ClinicWorld {
    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn on_tick(&mut self, sim: &mut Simulator) {
        // Clock of the most recently processed event; the statistics close
        // here rather than at the horizon when the calendar drains early.
        self.last_event_time = sim.now();
    }
}

impl ClinicWorld {
    /// `scenario` must already be validated.
    pub fn new(scenario: Scenario) -> Self {
        let warm_up = SimTime::from_hours_f64(scenario.warm_up_hours);
        ClinicWorld {
            rng: seeded_rng(scenario.seed),
            interarrival_dist: Exponential::new(scenario.mean_interarrival_hours),
            exam_dist: Exponential::new(scenario.mean_exam_hours),
            is_open: true,
            next_patient_id: 0,
            patients: HashMap::new(),
            line: WaitingLine::default(),
            rooms: (0..scenario.num_rooms)
                .map(|i| ExamRoom::new(RoomId(i)))
                .collect(),
            n_admitted: 0,
            n_departed: 0,
            last_event_time: SimTime::ZERO,
            outputs: SimOutputs::new(warm_up),
            trace: Trace::new(scenario.trace, DEFAULT_DECIMALS),
            scenario,
        }
    }

    /// Schedules the closing event and the arrival of patient 0. The arrival
    /// self-scheduling chain keeps the calendar populated from there on.
    pub fn bootstrap(&mut self, sim: &mut Simulator) {
        let close = ClinicEvent::Close;
        sim.schedule_with_priority(
            SimTime::from_hours_f64(self.scenario.hours_open),
            close.priority(),
            close,
        );
        let first = sim.now().add_hours_f64(self.interarrival_dist.sample(&mut self.rng));
        self.schedule_arrival(sim, first);
    }

    /// The single dispatch point for all transition logic.
    pub fn apply(&mut self, event: ClinicEvent, sim: &mut Simulator) {
        match event {
            ClinicEvent::Arrival(patient) => self.process_arrival(patient, sim),
            ClinicEvent::EndOfExam(room) => self.process_end_of_exam(room, sim),
            ClinicEvent::Close => self.process_close(sim),
        }
    }

    fn process_arrival(&mut self, id: PatientId, sim: &mut Simulator) {
        let now = sim.now();

        if !self.is_open {
            // Rejected outright: no stats, no line, no room, and no next
            // arrival, which is what lets the calendar drain after closing.
            self.patients.remove(&id);
            self.trace
                .add(now, format!("The clinic is closed. {id} does not get admitted."));
            debug!(patient = id.0, "arrival rejected, clinic closed");
            return;
        }

        {
            let patient = self
                .patients
                .get_mut(&id)
                .expect("arriving patient must be in the arena");
            patient.t_arrived = now;
        }
        self.n_admitted += 1;
        self.outputs.collect_arrival(now);
        self.trace.add(now, format!("{id} arrives."));

        // Strict FIFO: a newcomer never bypasses a non-empty line, even if a
        // room happens to be idle at this instant.
        if !self.line.is_empty() {
            self.join_line(id, now);
        } else if let Some(idx) = self.first_idle_room() {
            self.start_exam(idx, id, sim);
        } else {
            self.join_line(id, now);
        }

        let next_at = now.add_hours_f64(self.interarrival_dist.sample(&mut self.rng));
        self.schedule_arrival(sim, next_at);
    }

    fn process_end_of_exam(&mut self, room_id: RoomId, sim: &mut Simulator) {
        let now = sim.now();
        let idx = room_id.0;

        let discharged = self.rooms[idx].release();
        self.trace.add(now, format!("{discharged} leaves {room_id}."));

        let patient = self
            .patients
            .remove(&discharged)
            .expect("discharged patient must be in the arena");
        self.n_departed += 1;
        self.outputs
            .collect_departure(now, patient.t_arrived, patient.waited_hours());
        debug!(patient = discharged.0, room = idx, "patient departs");

        if let Some(next) = self.line.next_patient() {
            self.leave_line(next, now);
            self.start_exam(idx, next, sim);
        }
    }

    fn process_close(&mut self, sim: &mut Simulator) {
        // Set exactly once; patients already admitted keep being served.
        self.is_open = false;
        self.trace.add(sim.now(), "The clinic closes.");
        debug!(now = ?sim.now(), "clinic closed to new arrivals");
    }

    pub(crate) fn schedule_arrival(&mut self, sim: &mut Simulator, at: SimTime) {
        let id = PatientId(self.next_patient_id);
        self.next_patient_id += 1;
        self.patients.insert(id, Patient::new(id));
        let ev = ClinicEvent::Arrival(id);
        sim.schedule_with_priority(at, ev.priority(), ev);
    }

    /// First idle room in fixed index order.
    fn first_idle_room(&self) -> Option<usize> {
        self.rooms.iter().position(|room| !room.is_busy())
    }

    fn start_exam(&mut self, idx: usize, id: PatientId, sim: &mut Simulator) {
        let now = sim.now();
        self.rooms[idx].begin_exam(id);
        self.outputs.collect_start_exam(now);
        self.trace
            .add(now, format!("{id} starts service in {}.", self.rooms[idx].id));

        let done = now.add_hours_f64(self.exam_dist.sample(&mut self.rng));
        let ev = ClinicEvent::EndOfExam(RoomId(idx));
        sim.schedule_with_priority(done, ev.priority(), ev);
    }

    fn join_line(&mut self, id: PatientId, now: SimTime) {
        let patient = self
            .patients
            .get_mut(&id)
            .expect("queueing patient must be in the arena");
        patient.t_joined_line = Some(now);
        self.line.join(id);
        self.outputs.collect_join_line(now);
        self.trace.add(
            now,
            format!("{id} joins the waiting room. Number waiting = {}.", self.line.len()),
        );
    }

    fn leave_line(&mut self, id: PatientId, now: SimTime) {
        let patient = self
            .patients
            .get_mut(&id)
            .expect("departing line head must be in the arena");
        patient.t_left_line = Some(now);
        self.outputs.collect_leave_line(now);
        self.trace.add(
            now,
            format!("{id} leaves the waiting room. Number waiting = {}.", self.line.len()),
        );
    }

    pub fn scenario(&self) -> &Scenario {
        &self.scenario
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn num_waiting(&self) -> usize {
        self.line.len()
    }

    pub fn num_busy_rooms(&self) -> usize {
        self.rooms.iter().filter(|room| room.is_busy()).count()
    }

    /// Total admitted, warm-up included.
    pub fn n_admitted(&self) -> u64 {
        self.n_admitted
    }

    /// Total departed, warm-up included.
    pub fn n_departed(&self) -> u64 {
        self.n_departed
    }

    pub fn last_event_time(&self) -> SimTime {
        self.last_event_time
    }

    /// Consumes the world, handing the collected outputs and trace to the
    /// caller once the run is over.
    pub fn into_outputs(self) -> (SimOutputs, Trace) {
        (self.outputs, self.trace)
    }
}
