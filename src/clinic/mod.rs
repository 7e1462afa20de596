//! Urgent-care domain model: scenario configuration, entities (patients,
//! waiting line, exam rooms), the event set, and the facility controller.

mod config;
mod events;
mod exam_room;
mod model;
mod patient;
mod waiting_line;
mod world;

pub use config::{Scenario, ScenarioError};
pub use events::{ClinicEvent, PRIO_ARRIVAL, PRIO_CLOSE, PRIO_END_OF_EXAM};
pub use exam_room::{ExamRoom, RoomId};
pub use model::{Replication, UrgentCareModel};
pub use patient::{Patient, PatientId};
pub use waiting_line::WaitingLine;
pub use world::ClinicWorld;
