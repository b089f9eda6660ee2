//! Sorting, grouping, counting and searching over an address book.
//!
//! Sorts reorder the book in place and are stable. Groups and breakdowns
//! are keyed by the literal field value; lookups by value use exact,
//! case-sensitive matches.

use super::AddressBook;
use crate::domain::ContactField;
use crate::models::Contact;
use std::collections::BTreeMap;
use tracing::debug;

impl AddressBook {
    /// Sort by "first last", ignoring case.
    pub fn sort_by_name(&mut self) {
        self.contacts
            .sort_by_cached_key(|contact| contact.full_name().to_lowercase());
        debug!(count = self.contacts.len(), "Sorted contacts by name");
    }

    /// Sort by city using the book's [`SortCase`](super::SortCase).
    pub fn sort_by_city(&mut self) {
        self.sort_by_locality(ContactField::City);
    }

    /// Sort by state using the book's [`SortCase`](super::SortCase).
    pub fn sort_by_state(&mut self) {
        self.sort_by_locality(ContactField::State);
    }

    /// Sort by zip code. All codes have six digits, so this is numeric order.
    pub fn sort_by_zip(&mut self) {
        self.contacts.sort_by(|a, b| a.zip_code().cmp(b.zip_code()));
        debug!(count = self.contacts.len(), "Sorted contacts by zip");
    }

    fn sort_by_locality(&mut self, field: ContactField) {
        let sort_case = self.sort_case;
        self.contacts
            .sort_by(|a, b| sort_case.compare(a.field(field), b.field(field)));
        debug!(count = self.contacts.len(), %field, ?sort_case, "Sorted contacts");
    }

    /// City -> names of the contacts living there, in book order.
    pub fn group_by_city(&self) -> BTreeMap<String, Vec<String>> {
        self.group_by(ContactField::City)
    }

    /// State -> names of the contacts living there, in book order.
    pub fn group_by_state(&self) -> BTreeMap<String, Vec<String>> {
        self.group_by(ContactField::State)
    }

    fn group_by(&self, field: ContactField) -> BTreeMap<String, Vec<String>> {
        let mut groups: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for contact in &self.contacts {
            groups
                .entry(contact.field(field).to_string())
                .or_default()
                .push(contact.full_name());
        }
        groups
    }

    /// Number of contacts whose city is exactly `city`.
    pub fn count_by_city(&self, city: &str) -> usize {
        self.contacts_in_city(city).len()
    }

    /// Number of contacts whose state is exactly `state`.
    pub fn count_by_state(&self, state: &str) -> usize {
        self.contacts_in_state(state).len()
    }

    /// Count of contacts for every city in the book.
    pub fn city_breakdown(&self) -> BTreeMap<String, usize> {
        self.breakdown(ContactField::City)
    }

    /// Count of contacts for every state in the book.
    pub fn state_breakdown(&self) -> BTreeMap<String, usize> {
        self.breakdown(ContactField::State)
    }

    fn breakdown(&self, field: ContactField) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for contact in &self.contacts {
            *counts.entry(contact.field(field).to_string()).or_insert(0) += 1;
        }
        counts
    }

    /// Contacts whose city is exactly `city`, in book order.
    pub fn contacts_in_city(&self, city: &str) -> Vec<&Contact> {
        self.matching(ContactField::City, city)
    }

    /// Contacts whose state is exactly `state`, in book order.
    pub fn contacts_in_state(&self, state: &str) -> Vec<&Contact> {
        self.matching(ContactField::State, state)
    }

    fn matching(&self, field: ContactField, value: &str) -> Vec<&Contact> {
        let found: Vec<&Contact> = self
            .contacts
            .iter()
            .filter(|contact| contact.field(field) == value)
            .collect();
        debug!(%field, value, matches = found.len(), "Scanned contacts");
        found
    }

    /// Rendered text of every contact in `city`.
    pub fn search_by_city(&self, city: &str) -> Vec<String> {
        self.contacts_in_city(city)
            .into_iter()
            .map(Contact::render)
            .collect()
    }

    /// Rendered text of every contact in `state`.
    pub fn search_by_state(&self, state: &str) -> Vec<String> {
        self.contacts_in_state(state)
            .into_iter()
            .map(Contact::render)
            .collect()
    }
}
