//! Partial updates for an existing contact.

use crate::domain::ContactField;

/// A set of optional field changes for a contact.
///
/// Only fields that are `Some` are touched. Fields are always visited in
/// declaration order (first name through email), which is also the order in
/// which they are validated.
///
/// # Example
///
/// ```
/// use address_book::models::ContactUpdate;
///
/// let update = ContactUpdate::new().with_city("Lucknow").with_zip("226001");
/// assert_eq!(update.fields().count(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
}

impl ContactUpdate {
    /// Create an empty update.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_first_name(mut self, value: impl Into<String>) -> Self {
        self.first_name = Some(value.into());
        self
    }

    pub fn with_last_name(mut self, value: impl Into<String>) -> Self {
        self.last_name = Some(value.into());
        self
    }

    pub fn with_address(mut self, value: impl Into<String>) -> Self {
        self.address = Some(value.into());
        self
    }

    pub fn with_city(mut self, value: impl Into<String>) -> Self {
        self.city = Some(value.into());
        self
    }

    pub fn with_state(mut self, value: impl Into<String>) -> Self {
        self.state = Some(value.into());
        self
    }

    pub fn with_zip(mut self, value: impl Into<String>) -> Self {
        self.zip = Some(value.into());
        self
    }

    pub fn with_phone_number(mut self, value: impl Into<String>) -> Self {
        self.phone_number = Some(value.into());
        self
    }

    pub fn with_email(mut self, value: impl Into<String>) -> Self {
        self.email = Some(value.into());
        self
    }

    /// Get the pending value for `field`, if any.
    pub fn get(&self, field: ContactField) -> Option<&str> {
        let value = match field {
            ContactField::FirstName => &self.first_name,
            ContactField::LastName => &self.last_name,
            ContactField::Address => &self.address,
            ContactField::City => &self.city,
            ContactField::State => &self.state,
            ContactField::Zip => &self.zip,
            ContactField::PhoneNumber => &self.phone_number,
            ContactField::Email => &self.email,
        };
        value.as_deref()
    }

    /// Iterate over the provided fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (ContactField, &str)> + '_ {
        ContactField::ALL
            .into_iter()
            .filter_map(move |field| self.get(field).map(|value| (field, value)))
    }

    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        self.fields().next().is_none()
    }

    /// True when the update changes the first or last name.
    pub fn renames(&self) -> bool {
        self.first_name.is_some() || self.last_name.is_some()
    }
}
