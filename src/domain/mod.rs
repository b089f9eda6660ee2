//! Domain value objects and types.
//!
//! Type-safe wrappers for the fields of a contact. Each value object validates
//! at construction time, so an invalid name, zip code, phone number or email
//! address cannot be represented in the system.

pub mod email;
pub mod errors;
pub mod field;
pub mod locality;
pub mod name;
pub mod phone;
pub mod zip;

pub use email::EmailAddress;
pub use errors::ValidationError;
pub use field::ContactField;
pub use locality::{Locality, MIN_LOCALITY_LEN};
pub use name::PersonName;
pub use phone::PhoneNumber;
pub use zip::ZipCode;
