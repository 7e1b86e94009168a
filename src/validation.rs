//! Validation - Name and Number Gatekeeping
//!
//! Failures are user-correctable values, never panics or `Err` across the core.
//! The compositor refuses to run while either message is set.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Characters kept from the name field; the rest is dropped silently.
pub const NAME_MAX_CHARS: usize = 35;

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationError {
    #[error("Name cannot be empty.")]
    EmptyName,

    #[error("Number cannot be empty.")]
    EmptyNumber,
}

/// Per-field messages. An empty string means the field is fine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub name_error: String,
    pub number_error: String,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.name_error.is_empty() && self.number_error.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        !self.is_valid()
    }

    pub fn errors(&self) -> Vec<ValidationError> {
        let mut errors = vec![];
        if !self.name_error.is_empty() {
            errors.push(ValidationError::EmptyName);
        }
        if !self.number_error.is_empty() {
            errors.push(ValidationError::EmptyNumber);
        }
        errors
    }
}

fn message_if_blank(value: &str, error: ValidationError) -> String {
    if value.trim().is_empty() {
        error.to_string()
    } else {
        String::new()
    }
}

pub fn validate(name: &str, number: &str) -> ValidationResult {
    ValidationResult {
        name_error: message_if_blank(name, ValidationError::EmptyName),
        number_error: message_if_blank(number, ValidationError::EmptyNumber),
    }
}

/// Keeps the first `max_chars` characters of `name`.
pub fn clamp_name(name: &str, max_chars: usize) -> String {
    name.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_present_is_valid() {
        let result = validate("John", "10");
        assert!(result.is_valid());
        assert!(result.errors().is_empty());
    }

    #[test]
    fn test_whitespace_only_is_empty() {
        let result = validate("   ", "\t");
        assert_eq!(result.name_error, "Name cannot be empty.");
        assert_eq!(result.number_error, "Number cannot be empty.");
        assert_eq!(
            result.errors(),
            vec![ValidationError::EmptyName, ValidationError::EmptyNumber]
        );
    }

    #[test]
    fn test_errors_are_independent() {
        let result = validate("Ana", "");
        assert!(result.name_error.is_empty());
        assert!(result.has_errors());
        assert_eq!(result.errors(), vec![ValidationError::EmptyNumber]);
    }

    #[test]
    fn test_clamp_drops_excess_silently() {
        let long = "A".repeat(50);
        let clamped = clamp_name(&long, NAME_MAX_CHARS);
        assert_eq!(clamped.chars().count(), 35);
        assert!(validate(&clamped, "1").is_valid());
    }

    #[test]
    fn test_clamp_counts_characters_not_bytes() {
        let name = "Zoë".repeat(20);
        let clamped = clamp_name(&name, NAME_MAX_CHARS);
        assert_eq!(clamped.chars().count(), 35);
        assert_eq!(clamp_name("Zoë", NAME_MAX_CHARS), "Zoë");
    }

    #[test]
    fn test_result_serializes_camel_case() {
        let json = serde_json::to_value(validate("", "7")).unwrap();
        assert_eq!(json["nameError"], "Name cannot be empty.");
        assert_eq!(json["numberError"], "");
    }
}
