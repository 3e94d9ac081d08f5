//! Domain types and models

pub mod absence;
pub mod department;
pub mod person;

pub use absence::{Absence, AbsenceTimeConfiguration, DayLength, EventType, Period};
pub use department::Department;
pub use person::{MailNotification, Person, PersonId, Role};
