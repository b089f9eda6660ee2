//! ZipCode value object.

use super::errors::ValidationError;
use super::field::ContactField;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

static ZIP_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[1-9][0-9]{5}$").expect("Failed to compile zip regex"));

/// A six-digit postal code whose first digit is not zero.
///
/// Because every code has the same width, ordering the text is the same as
/// ordering the numbers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ZipCode(String);

impl ZipCode {
    /// Create a new ZipCode, validating the format.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` for `ContactField::Zip` unless the value is
    /// exactly six digits with a leading digit in 1-9.
    pub fn new(zip: impl Into<String>) -> Result<Self, ValidationError> {
        let zip = zip.into();

        if !ZIP_REGEX.is_match(&zip) {
            return Err(ValidationError::new(
                ContactField::Zip,
                format!("'{}' must be 6 digits and cannot start with 0", zip),
            ));
        }

        Ok(Self(zip))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Serialize for ZipCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ZipCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ZipCode::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for ZipCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zip_valid() {
        assert_eq!(ZipCode::new("110001").unwrap().as_str(), "110001");
        assert!(ZipCode::new("284120").is_ok());
        assert!(ZipCode::new("999999").is_ok());
    }

    #[test]
    fn test_zip_rejects_malformed() {
        for zip in ["", "011001", "12345", "1234567", "12a456", " 110001", "110 01", "000000"] {
            let err = ZipCode::new(zip).unwrap_err();
            assert_eq!(err.field, ContactField::Zip, "{:?} should be rejected", zip);
        }
    }

    #[test]
    fn test_zip_ordering_matches_numeric() {
        let low = ZipCode::new("110001").unwrap();
        let high = ZipCode::new("284120").unwrap();
        assert!(low < high);
    }
}
