//! Domain validation errors.

use super::field::ContactField;
use std::fmt;

/// A contact field failed its validation rule.
///
/// Carries the offending field and a human-readable reason. Validation stops
/// at the first failure, so a single error describes a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field that failed validation.
    pub field: ContactField,

    /// Why the value was rejected.
    pub reason: String,
}

impl ValidationError {
    /// Create a new validation error for `field`.
    pub fn new(field: ContactField, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid {}: {}", self.field, self.reason)
    }
}

impl std::error::Error for ValidationError {}
