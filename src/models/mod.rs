//! Data models for the address book.
//!
//! This module contains the contact record and the partial-update type used
//! to edit one.

pub mod contact;
pub mod update;

pub use contact::{Contact, ContactDetails};
pub use update::ContactUpdate;
