//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty.
    EmptyName,

    /// The provided phone number is not exactly ten digits.
    InvalidPhone(String),

    /// The provided date does not match `DD-MM-YYYY`.
    InvalidDate(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Name cannot be empty"),
            Self::InvalidPhone(phone) => {
                write!(f, "Invalid phone number (expected 10 digits): {}", phone)
            }
            Self::InvalidDate(date) => {
                write!(f, "Invalid date format (expected DD-MM-YYYY): {}", date)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        assert_eq!(ValidationError::EmptyName.to_string(), "Name cannot be empty");
        assert!(ValidationError::InvalidPhone("123".to_string())
            .to_string()
            .contains("123"));
        assert!(ValidationError::InvalidDate("2024-01-01".to_string())
            .to_string()
            .contains("DD-MM-YYYY"));
    }
}
