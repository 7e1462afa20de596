//! Exam room (server) entity.

use std::fmt;

use super::patient::PatientId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoomId(pub usize);

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Exam Room {}", self.0)
    }
}

/// Idle xor busy with exactly one patient. Acquired and released only by the
/// facility controller.
#[derive(Debug)]
pub struct ExamRoom {
    pub id: RoomId,
    occupant: Option<PatientId>,
}

impl ExamRoom {
    pub fn new(id: RoomId) -> Self {
        ExamRoom { id, occupant: None }
    }

    pub fn is_busy(&self) -> bool {
        self.occupant.is_some()
    }

    pub fn begin_exam(&mut self, patient: PatientId) {
        assert!(
            self.occupant.is_none(),
            "{} is already busy with {:?}",
            self.id,
            self.occupant
        );
        self.occupant = Some(patient);
    }

    /// Frees the room and returns its occupant. Releasing an idle room is a
    /// precondition violation.
    pub fn release(&mut self) -> PatientId {
        self.occupant
            .take()
            .unwrap_or_else(|| panic!("{} released while idle", self.id))
    }
}
