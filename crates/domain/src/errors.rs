//! Error types used throughout the workspace

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for LeaveBridge
///
/// Services never invent errors of their own; whatever a collaborator reports
/// travels up unchanged as one of these variants.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum LeaveBridgeError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Calendar provider error: {0}")]
    Calendar(String),

    #[error("Directory error: {0}")]
    Directory(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl LeaveBridgeError {
    /// Stable label suitable for structured logging.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Config(_) => "config",
            Self::Calendar(_) => "calendar",
            Self::Directory(_) => "directory",
            Self::NotFound(_) => "not_found",
            Self::InvalidInput(_) => "invalid_input",
            Self::Internal(_) => "internal",
        }
    }
}

/// Result type alias for LeaveBridge operations
pub type Result<T> = std::result::Result<T, LeaveBridgeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_category_prefix() {
        let err = LeaveBridgeError::Calendar("exchange unreachable".to_string());
        assert_eq!(err.to_string(), "Calendar provider error: exchange unreachable");
    }

    #[test]
    fn test_serializes_as_tagged_enum() {
        let err = LeaveBridgeError::NotFound("person 42".to_string());
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["type"], "NotFound");
        assert_eq!(json["message"], "person 42");
    }

    #[test]
    fn test_labels_are_snake_case() {
        assert_eq!(LeaveBridgeError::InvalidInput(String::new()).label(), "invalid_input");
        assert_eq!(LeaveBridgeError::Directory(String::new()).label(), "directory");
    }
}
