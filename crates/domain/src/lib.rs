//! # LeaveBridge Domain
//!
//! Business domain types for absence calendar sync and mail recipient
//! resolution.
//!
//! This crate contains:
//! - Persons, roles, notification subscriptions and departments
//! - Absences as handed to calendar providers
//! - Settings structures
//! - Domain error type and Result definition
//!
//! ## Architecture
//! - No dependencies on other LeaveBridge crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
