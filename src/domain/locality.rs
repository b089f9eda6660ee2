//! Locality value object for the address, city and state fields.

use super::errors::ValidationError;
use super::field::ContactField;
use serde::{Serialize, Serializer};
use std::fmt;

/// Minimum number of characters in an address, city or state.
pub const MIN_LOCALITY_LEN: usize = 2;

/// Free-form location text: a street address, a city or a state.
///
/// The only rule is a minimum length of [`MIN_LOCALITY_LEN`] characters,
/// counted as Unicode scalar values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locality(String);

impl Locality {
    /// Validate `value` as the content of `field`.
    pub fn new(field: ContactField, value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();

        if value.chars().count() < MIN_LOCALITY_LEN {
            return Err(ValidationError::new(
                field,
                format!("must be at least {} characters", MIN_LOCALITY_LEN),
            ));
        }

        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Serialize for Locality {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl fmt::Display for Locality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
