//! In-memory person and department directories
//!
//! Adapters for the directory ports, used for embedding and tests where no
//! persistent directory is wired in.

pub mod departments;
pub mod persons;

pub use departments::InMemoryDepartmentService;
pub use persons::InMemoryPersonService;
