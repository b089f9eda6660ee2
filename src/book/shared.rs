//! Thread-safe handle to a single address book.

use super::AddressBook;
use std::sync::{Arc, PoisonError, RwLock};

/// A cloneable handle sharing one [`AddressBook`] between threads.
///
/// Reads run concurrently; every mutation (add, edit, delete, sort) holds
/// the single write lock for its whole duration. A poisoned lock is
/// recovered, since each book operation either completes or returns before
/// touching the collection.
#[derive(Debug, Clone, Default)]
pub struct SharedAddressBook {
    inner: Arc<RwLock<AddressBook>>,
}

impl SharedAddressBook {
    pub fn new(book: AddressBook) -> Self {
        Self {
            inner: Arc::new(RwLock::new(book)),
        }
    }

    /// Run `f` with shared access to the book.
    pub fn read<R>(&self, f: impl FnOnce(&AddressBook) -> R) -> R {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    /// Run `f` with exclusive access to the book.
    pub fn write<R>(&self, f: impl FnOnce(&mut AddressBook) -> R) -> R {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    /// Take a copy of the book as it is right now.
    pub fn snapshot(&self) -> AddressBook {
        self.read(AddressBook::clone)
    }
}

impl From<AddressBook> for SharedAddressBook {
    fn from(book: AddressBook) -> Self {
        Self::new(book)
    }
}
