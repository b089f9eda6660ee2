//! PhoneNumber value object.

use super::errors::ValidationError;
use super::field::ContactField;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[6-9][0-9]{9}$").expect("Failed to compile phone regex"));

/// A type-safe wrapper for mobile phone numbers.
///
/// Exactly ten ASCII digits, the first of which is 6, 7, 8 or 9. No
/// formatting characters or country prefix are accepted.
///
/// # Example
///
/// ```
/// use address_book::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("9876543210").unwrap();
/// assert_eq!(phone.as_str(), "9876543210");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the format.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` for `ContactField::PhoneNumber` if the
    /// number is not ten digits starting with 6-9.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !PHONE_REGEX.is_match(&phone) {
            return Err(ValidationError::new(
                ContactField::PhoneNumber,
                format!("'{}' must be 10 digits starting with 6-9", phone),
            ));
        }

        Ok(Self(phone))
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Serde support - serialize as string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_valid() {
        for phone in ["6000000000", "7123456789", "8888888888", "9123456789"] {
            assert!(PhoneNumber::new(phone).is_ok(), "{} should be valid", phone);
        }
    }

    #[test]
    fn test_phone_validates_format() {
        assert!(PhoneNumber::new("").is_err());
        assert!(PhoneNumber::new("1234567890").is_err());
        assert!(PhoneNumber::new("5123456789").is_err());
        assert!(PhoneNumber::new("912345678").is_err());
        assert!(PhoneNumber::new("91234567890").is_err());
        assert!(PhoneNumber::new("98765-43210").is_err());
        assert!(PhoneNumber::new("+919876543210").is_err());
        assert!(PhoneNumber::new("98765o4321").is_err());
    }

    #[test]
    fn test_phone_rejects_non_ascii_digits() {
        // Devanagari digits are Unicode digits but not ASCII ones.
        assert!(PhoneNumber::new("९८७६५४३२१०").is_err());
    }

    #[test]
    fn test_phone_display() {
        let phone = PhoneNumber::new("9876543210").unwrap();
        assert_eq!(format!("{}", phone), "9876543210");
    }

    #[test]
    fn test_phone_deserialization_invalid_fails() {
        let result: Result<PhoneNumber, _> = serde_json::from_str("\"1234567890\"");
        assert!(result.is_err());
    }
}
