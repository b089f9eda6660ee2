//! Address Book - an in-memory collection of validated personal contacts.
//!
//! Contacts are validated when they are built and whenever a field changes.
//! The [`AddressBook`] keeps them in insertion order, rejects a second
//! contact with the same name, and offers lookup, editing, deletion and a set
//! of sorted, grouped and filtered views.
//!
//! # Architecture
//!
//! - **domain**: Value objects for each validated field kind
//! - **models**: The contact record and partial updates
//! - **book**: The address book aggregate, its queries and a shared handle
//! - **error**: Error types for book operations and configuration
//! - **config**: Configuration from environment variables
//!
//! # Example
//!
//! ```
//! use address_book::{AddressBook, Contact, ContactDetails};
//!
//! let mut book = AddressBook::new();
//! let contact = Contact::new(ContactDetails {
//!     first_name: "Sita".into(),
//!     last_name: "Gupta".into(),
//!     address: "Assi Ghat".into(),
//!     city: "Varanasi".into(),
//!     state: "UP".into(),
//!     zip: "221005".into(),
//!     phone_number: "7007007007".into(),
//!     email: "sita.gupta@example.com".into(),
//! })
//! .unwrap();
//!
//! book.add_contact(contact).unwrap();
//! assert_eq!(book.count_by_state("UP"), 1);
//! assert!(book.find_contact("sita gupta").is_some());
//! ```

pub mod book;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;

pub use book::{AddressBook, SharedAddressBook, SortCase, EMPTY_BOOK_MESSAGE};
pub use config::Config;
pub use domain::{ContactField, ValidationError};
pub use error::{AddressBookError, AddressBookResult, ConfigError};
pub use models::{Contact, ContactDetails, ContactUpdate};
