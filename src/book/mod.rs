//! The address book aggregate.
//!
//! [`AddressBook`] owns an ordered list of contacts and enforces that no two
//! of them share a name (compared case-insensitively). Lookups are linear
//! scans; there is no index. Sorting, grouping, counting and searching live
//! in the `queries` submodule, and [`SharedAddressBook`] wraps a book for use
//! from several threads.

mod queries;
mod shared;

pub use shared::SharedAddressBook;

use crate::config::Config;
use crate::error::{AddressBookError, AddressBookResult};
use crate::models::{Contact, ContactUpdate};
use std::cmp::Ordering;
use tracing::{debug, info, warn};

/// Text returned by [`AddressBook::display_all`] when the book has no contacts.
pub const EMPTY_BOOK_MESSAGE: &str = "Address book is empty";

/// How city and state values are compared when sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortCase {
    /// Plain lexicographic order; "Zeta" sorts before "alpha".
    #[default]
    Sensitive,

    /// Compare lower-cased values.
    Insensitive,
}

impl SortCase {
    /// Compare two values under this policy.
    pub fn compare(self, a: &str, b: &str) -> Ordering {
        match self {
            Self::Sensitive => a.cmp(b),
            Self::Insensitive => a.to_lowercase().cmp(&b.to_lowercase()),
        }
    }
}

/// An in-memory, insertion-ordered collection of contacts.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    contacts: Vec<Contact>,
    sort_case: SortCase,
}

impl AddressBook {
    /// Create an empty address book with case-sensitive city/state sorting.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty address book using the settings in `config`.
    pub fn from_config(config: &Config) -> Self {
        Self::with_sort_case(config.sort_case)
    }

    /// Create an empty address book with the given city/state sort policy.
    pub fn with_sort_case(sort_case: SortCase) -> Self {
        Self {
            contacts: Vec::new(),
            sort_case,
        }
    }

    pub fn sort_case(&self) -> SortCase {
        self.sort_case
    }

    /// Add a contact to the end of the book.
    ///
    /// # Errors
    ///
    /// Returns `AddressBookError::DuplicateContact` if a contact with the same
    /// first and last name (ignoring case) already exists. The book is
    /// unchanged in that case.
    pub fn add_contact(&mut self, contact: Contact) -> AddressBookResult<()> {
        if let Some(existing) = self.contacts.iter().find(|c| c.same_identity(&contact)) {
            warn!(name = %existing.full_name(), "Rejected duplicate contact");
            return Err(AddressBookError::DuplicateContact {
                name: contact.full_name(),
            });
        }

        info!(name = %contact.full_name(), "Contact added");
        self.contacts.push(contact);
        Ok(())
    }

    /// Find the first contact whose "first last" name matches, ignoring case.
    pub fn find_contact(&self, full_name: &str) -> Option<&Contact> {
        let found = self.contacts.iter().find(|c| c.matches_name(full_name));
        debug!(query = %full_name, found = found.is_some(), "Contact lookup");
        found
    }

    fn position(&self, full_name: &str) -> Option<usize> {
        self.contacts.iter().position(|c| c.matches_name(full_name))
    }

    /// Apply `update` to the contact named `full_name`.
    ///
    /// Returns `Ok(None)` if no contact has that name; the book is unchanged
    /// and this is not an error. Otherwise returns the updated contact.
    ///
    /// The update is all-or-none: every provided field is validated before
    /// any is written.
    ///
    /// # Errors
    ///
    /// - `AddressBookError::Validation` if a provided field is invalid.
    /// - `AddressBookError::DuplicateContact` if the new name belongs to
    ///   another contact.
    pub fn edit_contact(
        &mut self,
        full_name: &str,
        update: &ContactUpdate,
    ) -> AddressBookResult<Option<&Contact>> {
        let Some(index) = self.position(full_name) else {
            info!(name = %full_name, "Contact not found, nothing to edit");
            return Ok(None);
        };

        if update.is_empty() {
            debug!(name = %full_name, "Empty update, contact unchanged");
            return Ok(Some(&self.contacts[index]));
        }

        let staged = self.contacts[index].staged(update).map_err(|e| {
            warn!(name = %full_name, error = %e, "Contact edit rejected");
            e
        })?;

        if update.renames() {
            let clash = self
                .contacts
                .iter()
                .enumerate()
                .any(|(i, other)| i != index && other.same_identity(&staged));
            if clash {
                warn!(name = %staged.full_name(), "Edit would duplicate an existing contact");
                return Err(AddressBookError::DuplicateContact {
                    name: staged.full_name(),
                });
            }
        }

        info!(name = %full_name, "Contact updated");
        self.contacts[index] = staged;
        Ok(Some(&self.contacts[index]))
    }

    /// Remove the first contact named `full_name`.
    ///
    /// Returns the removed contact, or `None` if there was no match. The
    /// remaining contacts keep their relative order.
    pub fn delete_contact(&mut self, full_name: &str) -> Option<Contact> {
        match self.position(full_name) {
            Some(index) => {
                info!(name = %full_name, "Contact deleted");
                Some(self.contacts.remove(index))
            }
            None => {
                info!(name = %full_name, "Contact not found, nothing to delete");
                None
            }
        }
    }

    /// Number of contacts in the book.
    pub fn get_contact_count(&self) -> usize {
        self.contacts.len()
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// All contacts in their current order.
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Contact> {
        self.contacts.iter()
    }

    /// Render every contact, separated by a blank line.
    ///
    /// Returns [`EMPTY_BOOK_MESSAGE`] when the book is empty.
    pub fn display_all(&self) -> String {
        if self.contacts.is_empty() {
            return EMPTY_BOOK_MESSAGE.to_string();
        }

        self.contacts
            .iter()
            .map(Contact::render)
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Contact;
    type IntoIter = std::slice::Iter<'a, Contact>;

    fn into_iter(self) -> Self::IntoIter {
        self.contacts.iter()
    }
}
