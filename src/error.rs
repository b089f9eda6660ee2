//! Error types for the address book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! A lookup miss is not an error: find, edit and delete report it through `Option`.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors returned by address book operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressBookError {
    /// A field failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Another contact already has this name
    #[error("Duplicate contact: {name} already exists")]
    DuplicateContact { name: String },
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with AddressBookError
pub type AddressBookResult<T> = Result<T, AddressBookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
