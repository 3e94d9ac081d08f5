//! Shared test helpers for `leavebridge-core` integration tests.
//!
//! In-memory mocks for every port so tests can focus on behaviour instead of
//! boilerplate.

#![allow(dead_code)]

pub mod calendar;
pub mod directory;
