//! PersonName value object.

use super::errors::ValidationError;
use super::field::ContactField;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;

static NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][a-zA-Z]{2,}$").expect("Failed to compile name regex"));

/// A first or last name.
///
/// Starts with an uppercase ASCII letter, continues with letters only, and is
/// at least three characters long. The same rule applies to both name fields,
/// so the constructor takes the field the value belongs to for error reporting.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PersonName(String);

impl PersonName {
    /// Validate `name` as the value of `field`.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` for `field` if the name does not match.
    pub fn new(field: ContactField, name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();

        if !NAME_REGEX.is_match(&name) {
            return Err(ValidationError::new(
                field,
                format!(
                    "'{}' must start with a capital letter, contain only letters and be at least 3 characters",
                    name
                ),
            ));
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Serialize for PersonName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
