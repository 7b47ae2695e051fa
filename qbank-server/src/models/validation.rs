//! Validation error types

use std::fmt;

/// Validation error for domain models
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is absent or null
    Missing { field: &'static str },

    /// Field is present but empty
    Empty { field: &'static str },

    /// Request body could not be read as the expected JSON object
    Malformed { reason: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "{} is missing", field),
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::Malformed { reason } => write!(f, "malformed request body: {}", reason),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::Empty { field: "answer" };
        assert_eq!(err.to_string(), "answer cannot be empty");

        let err = ValidationError::Missing { field: "question" };
        assert_eq!(err.to_string(), "question is missing");
    }
}
