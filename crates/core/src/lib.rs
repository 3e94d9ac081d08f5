//! # LeaveBridge Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port/adapter interfaces (traits) for calendars, settings, persons and
//!   departments
//! - [`CalendarSyncService`], a facade over a pluggable calendar provider
//! - [`MailRecipientService`], which resolves notification audiences
//!
//! ## Architecture Principles
//! - Only depends on `leavebridge-domain`
//! - No database, HTTP, or platform code
//! - All external dependencies via traits
//! - No state kept between calls apart from the calendar settings snapshot

pub mod calendar;
pub mod mail;

pub use calendar::ports::{CalendarProvider, SettingsService};
pub use calendar::CalendarSyncService;
pub use mail::ports::{DepartmentService, PersonService};
pub use mail::MailRecipientService;
