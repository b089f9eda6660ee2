//! Contact model representing a person in the address book.

use crate::domain::{
    ContactField, EmailAddress, Locality, PersonName, PhoneNumber, ValidationError, ZipCode,
};
use crate::models::update::ContactUpdate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw, unvalidated contact fields.
///
/// This is the input to [`Contact::new`] and the wire shape used when a
/// contact is deserialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDetails {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub phone_number: String,
    pub email: String,
}

/// A validated contact.
///
/// Every field satisfies its rule for the whole lifetime of the value:
/// construction validates all of them, and every mutation goes through
/// [`Contact::update_field`] or [`Contact::apply`], which re-validate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "ContactDetails")]
pub struct Contact {
    first_name: PersonName,
    last_name: PersonName,
    address: Locality,
    city: Locality,
    state: Locality,
    zip: ZipCode,
    phone_number: PhoneNumber,
    email: EmailAddress,
}

impl Contact {
    /// Create a contact, validating every field.
    ///
    /// Fields are checked in the order first name, last name, address, city,
    /// state, zip, phone number, email. The first failure is returned and no
    /// contact is produced.
    ///
    /// # Example
    ///
    /// ```
    /// use address_book::models::{Contact, ContactDetails};
    ///
    /// let contact = Contact::new(ContactDetails {
    ///     first_name: "Amit".into(),
    ///     last_name: "Sharma".into(),
    ///     address: "Civil Lines".into(),
    ///     city: "Delhi".into(),
    ///     state: "DL".into(),
    ///     zip: "110001".into(),
    ///     phone_number: "9876543210".into(),
    ///     email: "amit.sharma@gmail.com".into(),
    /// })
    /// .unwrap();
    /// assert_eq!(contact.full_name(), "Amit Sharma");
    /// ```
    pub fn new(details: ContactDetails) -> Result<Self, ValidationError> {
        Ok(Self {
            first_name: PersonName::new(ContactField::FirstName, details.first_name)?,
            last_name: PersonName::new(ContactField::LastName, details.last_name)?,
            address: Locality::new(ContactField::Address, details.address)?,
            city: Locality::new(ContactField::City, details.city)?,
            state: Locality::new(ContactField::State, details.state)?,
            zip: ZipCode::new(details.zip)?,
            phone_number: PhoneNumber::new(details.phone_number)?,
            email: EmailAddress::new(details.email)?,
        })
    }

    pub fn first_name(&self) -> &str {
        self.first_name.as_str()
    }

    pub fn last_name(&self) -> &str {
        self.last_name.as_str()
    }

    pub fn address(&self) -> &str {
        self.address.as_str()
    }

    pub fn city(&self) -> &str {
        self.city.as_str()
    }

    pub fn state(&self) -> &str {
        self.state.as_str()
    }

    pub fn zip(&self) -> &str {
        self.zip.as_str()
    }

    pub fn zip_code(&self) -> &ZipCode {
        &self.zip
    }

    pub fn phone_number(&self) -> &str {
        self.phone_number.as_str()
    }

    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Current value of `field` as text.
    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::FirstName => self.first_name(),
            ContactField::LastName => self.last_name(),
            ContactField::Address => self.address(),
            ContactField::City => self.city(),
            ContactField::State => self.state(),
            ContactField::Zip => self.zip(),
            ContactField::PhoneNumber => self.phone_number(),
            ContactField::Email => self.email(),
        }
    }

    /// "First Last".
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Lower-cased (first, last) pair identifying this contact within a book.
    pub fn identity_key(&self) -> (String, String) {
        (
            self.first_name.as_str().to_lowercase(),
            self.last_name.as_str().to_lowercase(),
        )
    }

    /// True if both contacts have the same name, ignoring case.
    pub fn same_identity(&self, other: &Contact) -> bool {
        self.identity_key() == other.identity_key()
    }

    /// Case-insensitive comparison of `full_name` against "first last".
    ///
    /// Surrounding whitespace and runs of whitespace between the two names
    /// are ignored.
    pub fn matches_name(&self, full_name: &str) -> bool {
        let mut parts = full_name.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some(first), Some(last), None) => {
                first.to_lowercase() == self.first_name.as_str().to_lowercase()
                    && last.to_lowercase() == self.last_name.as_str().to_lowercase()
            }
            _ => false,
        }
    }

    /// Replace a single field after validating the new value.
    ///
    /// On error the contact is left unchanged.
    pub fn update_field(
        &mut self,
        field: ContactField,
        value: impl Into<String>,
    ) -> Result<(), ValidationError> {
        let value = value.into();
        match field {
            ContactField::FirstName => self.first_name = PersonName::new(field, value)?,
            ContactField::LastName => self.last_name = PersonName::new(field, value)?,
            ContactField::Address => self.address = Locality::new(field, value)?,
            ContactField::City => self.city = Locality::new(field, value)?,
            ContactField::State => self.state = Locality::new(field, value)?,
            ContactField::Zip => self.zip = ZipCode::new(value)?,
            ContactField::PhoneNumber => self.phone_number = PhoneNumber::new(value)?,
            ContactField::Email => self.email = EmailAddress::new(value)?,
        }
        Ok(())
    }

    /// Apply every field of `update`, or none of them.
    ///
    /// Fields are validated in declaration order against a staged copy; the
    /// first failure is returned and `self` is not modified.
    pub fn apply(&mut self, update: &ContactUpdate) -> Result<(), ValidationError> {
        let staged = self.staged(update)?;
        *self = staged;
        Ok(())
    }

    /// A copy of this contact with `update` applied.
    pub fn staged(&self, update: &ContactUpdate) -> Result<Contact, ValidationError> {
        let mut staged = self.clone();
        for (field, value) in update.fields() {
            staged.update_field(field, value)?;
        }
        Ok(staged)
    }

    /// Multi-line text representation used by every listing.
    pub fn render(&self) -> String {
        format!(
            "Name: {} {}\nAddress: {}, {}, {} {}\nPhone: {}\nEmail: {}",
            self.first_name,
            self.last_name,
            self.address,
            self.city,
            self.state,
            self.zip,
            self.phone_number,
            self.email
        )
    }
}

impl TryFrom<ContactDetails> for Contact {
    type Error = ValidationError;

    fn try_from(details: ContactDetails) -> Result<Self, Self::Error> {
        Contact::new(details)
    }
}

impl From<&Contact> for ContactDetails {
    fn from(contact: &Contact) -> Self {
        Self {
            first_name: contact.first_name().to_string(),
            last_name: contact.last_name().to_string(),
            address: contact.address().to_string(),
            city: contact.city().to_string(),
            state: contact.state().to_string(),
            zip: contact.zip().to_string(),
            phone_number: contact.phone_number().to_string(),
            email: contact.email().to_string(),
        }
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amit() -> ContactDetails {
        ContactDetails {
            first_name: "Amit".to_string(),
            last_name: "Sharma".to_string(),
            address: "Delhi NCR".to_string(),
            city: "Delhi".to_string(),
            state: "DL".to_string(),
            zip: "110001".to_string(),
            phone_number: "9123456789".to_string(),
            email: "amit.sharma@gmail.com".to_string(),
        }
    }

    #[test]
    fn test_contact_new() {
        let contact = Contact::new(amit()).unwrap();
        assert_eq!(contact.first_name(), "Amit");
        assert_eq!(contact.city(), "Delhi");
        assert_eq!(contact.full_name(), "Amit Sharma");
    }

    #[test]
    fn test_contact_render() {
        let contact = Contact::new(amit()).unwrap();
        assert_eq!(
            contact.render(),
            "Name: Amit Sharma\nAddress: Delhi NCR, Delhi, DL 110001\nPhone: 9123456789\nEmail: amit.sharma@gmail.com"
        );
        assert_eq!(contact.to_string(), contact.render());
    }

    #[test]
    fn test_contact_validation_stops_at_first_failure() {
        // Both the city and the email are invalid; the city comes first.
        let details = ContactDetails {
            city: "D".to_string(),
            email: "broken".to_string(),
            ..amit()
        };
        let err = Contact::new(details).unwrap_err();
        assert_eq!(err.field, ContactField::City);
    }

    #[test]
    fn test_contact_validation_order() {
        let details = ContactDetails {
            last_name: "s".to_string(),
            zip: "0".to_string(),
            ..amit()
        };
        assert_eq!(Contact::new(details).unwrap_err().field, ContactField::LastName);

        let details = ContactDetails {
            phone_number: "123".to_string(),
            email: "x".to_string(),
            ..amit()
        };
        assert_eq!(
            Contact::new(details).unwrap_err().field,
            ContactField::PhoneNumber
        );
    }

    #[test]
    fn test_update_field_success() {
        let mut contact = Contact::new(amit()).unwrap();
        contact.update_field(ContactField::City, "Noida").unwrap();
        assert_eq!(contact.city(), "Noida");
        assert_eq!(contact.field(ContactField::City), "Noida");
    }

    #[test]
    fn test_update_field_failure_leaves_contact_unchanged() {
        let mut contact = Contact::new(amit()).unwrap();
        let before = contact.clone();

        let err = contact.update_field(ContactField::Zip, "012345").unwrap_err();
        assert_eq!(err.field, ContactField::Zip);
        assert_eq!(contact, before);
    }

    #[test]
    fn test_update_field_name_uses_construction_rule() {
        let mut contact = Contact::new(amit()).unwrap();
        let before = contact.clone();

        let err = contact.update_field(ContactField::FirstName, "amit").unwrap_err();
        assert_eq!(err.field, ContactField::FirstName);
        assert_eq!(
            err,
            PersonName::new(ContactField::FirstName, "amit").unwrap_err()
        );
        assert_eq!(contact, before);

        let err = contact.update_field(ContactField::LastName, "Sh").unwrap_err();
        assert_eq!(err.field, ContactField::LastName);
        assert_eq!(contact, before);

        contact.update_field(ContactField::LastName, "Verma").unwrap();
        assert_eq!(contact.full_name(), "Amit Verma");
    }

    #[test]
    fn test_apply_is_all_or_none() {
        let mut contact = Contact::new(amit()).unwrap();
        let before = contact.clone();

        let update = ContactUpdate::new()
            .with_city("Gurgaon")
            .with_state("HR")
            .with_phone_number("12345");
        let err = contact.apply(&update).unwrap_err();

        assert_eq!(err.field, ContactField::PhoneNumber);
        assert_eq!(contact, before);

        let update = ContactUpdate::new().with_city("Gurgaon").with_state("HR");
        contact.apply(&update).unwrap();
        assert_eq!(contact.city(), "Gurgaon");
        assert_eq!(contact.state(), "HR");
    }

    #[test]
    fn test_matches_name() {
        let contact = Contact::new(amit()).unwrap();
        assert!(contact.matches_name("Amit Sharma"));
        assert!(contact.matches_name("amit SHARMA"));
        assert!(contact.matches_name("  Amit   Sharma "));
        assert!(!contact.matches_name("Amit"));
        assert!(!contact.matches_name("Amit Sharma Jr"));
        assert!(!contact.matches_name("Sharma Amit"));
    }

    #[test]
    fn test_identity_is_case_insensitive() {
        let a = Contact::new(amit()).unwrap();
        let b = Contact::new(ContactDetails {
            first_name: "AMIT".to_string(),
            last_name: "SHARMA".to_string(),
            phone_number: "8000000000".to_string(),
            ..amit()
        })
        .unwrap();
        assert!(a.same_identity(&b));
        assert_eq!(a.identity_key(), ("amit".to_string(), "sharma".to_string()));
    }

    #[test]
    fn test_contact_serialization() {
        let contact = Contact::new(amit()).unwrap();
        let json = serde_json::to_string(&contact).unwrap();
        assert!(json.contains("\"firstName\":\"Amit\""));
        assert!(json.contains("\"phoneNumber\":\"9123456789\""));

        let back: Contact = serde_json::from_str(&json).unwrap();
        assert_eq!(back, contact);
    }

    #[test]
    fn test_contact_deserialization_revalidates() {
        let json = r#"{"firstName":"Amit","lastName":"Sharma","address":"Delhi NCR","city":"Delhi","state":"DL","zip":"011001","phoneNumber":"9123456789","email":"amit.sharma@gmail.com"}"#;
        let result: Result<Contact, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_details_from_contact() {
        let contact = Contact::new(amit()).unwrap();
        assert_eq!(ContactDetails::from(&contact), amit());
    }
}
