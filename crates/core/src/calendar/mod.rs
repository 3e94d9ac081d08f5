//! Calendar sync bridge: mirrors absences into an external calendar.

pub mod ports;
pub mod service;

pub use service::CalendarSyncService;
