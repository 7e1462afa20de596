//! FIFO waiting line.

use std::collections::VecDeque;

use super::patient::PatientId;

/// Ordered ids of patients waiting for an exam room. A patient is here iff
/// it has been admitted and is not occupying a room.
#[derive(Debug, Default)]
pub struct WaitingLine {
    q: VecDeque<PatientId>,
}

impl WaitingLine {
    pub fn join(&mut self, id: PatientId) {
        self.q.push_back(id);
    }

    /// Head of the line, if any.
    pub fn next_patient(&mut self) -> Option<PatientId> {
        self.q.pop_front()
    }

    pub fn len(&self) -> usize {
        self.q.len()
    }

    pub fn is_empty(&self) -> bool {
        self.q.is_empty()
    }
}
