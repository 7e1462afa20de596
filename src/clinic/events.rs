//! The urgent-care event set.
//!
//! One tagged union instead of a type per event kind; all transition logic
//! lives in `ClinicWorld::apply`. Events carry ids only, never references
//! into the mutable state.

use super::exam_room::RoomId;
use super::patient::PatientId;
use super::world::ClinicWorld;
use crate::sim::{Event, Simulator, World};

/// Tie-break priorities for events at the same instant (lower fires first):
/// finish an exam before admitting a simultaneous arrival, and close last.
pub const PRIO_END_OF_EXAM: u8 = 0;
pub const PRIO_ARRIVAL: u8 = 1;
pub const PRIO_CLOSE: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClinicEvent {
    /// A patient reaches the clinic door.
    Arrival(PatientId),
    /// The exam in the given room completes.
    EndOfExam(RoomId),
    /// The clinic stops admitting new arrivals.
    Close,
}

impl ClinicEvent {
    pub fn priority(&self) -> u8 {
        match self {
            ClinicEvent::Arrival(_) => PRIO_ARRIVAL,
            ClinicEvent::EndOfExam(_) => PRIO_END_OF_EXAM,
            ClinicEvent::Close => PRIO_CLOSE,
        }
    }
}

impl Event for ClinicEvent {
    fn execute(self: Box<Self>, sim: &mut Simulator, world: &mut dyn World) {
        let clinic = world
            .as_any_mut()
            .downcast_mut::<ClinicWorld>()
            .expect("world must be ClinicWorld");
        clinic.apply(*self, sim);
    }
}
