//! # LeaveBridge Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - Settings loading from environment variables and JSON/TOML files
//! - A settings store serving the loaded settings
//! - Tracing subscriber bootstrap
//! - In-memory person and department directories
//! - Calendar provider implementations and the provider factory
//!
//! ## Architecture
//! - Implements traits defined in `leavebridge-core`
//! - Contains all "impure" code (environment, files, global subscriber)

pub mod config;
pub mod directory;
pub mod integrations;
pub mod logging;
pub mod settings;

// Re-export commonly used items
pub use directory::{InMemoryDepartmentService, InMemoryPersonService};
pub use integrations::calendar::{create_provider, NoopCalendarProvider};
pub use settings::StaticSettingsService;
