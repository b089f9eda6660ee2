//! Test fixtures and sample data for integration tests.
//!
//! Provides valid contact details and a pre-filled address book matching the
//! five-person sample used throughout the tests.

use address_book::{AddressBook, Contact, ContactDetails};

/// Valid details for the given person; the remaining fields are derived.
#[allow(dead_code)]
pub fn sample_details(
    first_name: &str,
    last_name: &str,
    city: &str,
    state: &str,
) -> ContactDetails {
    ContactDetails {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        address: format!("12 {} Road", city),
        city: city.to_string(),
        state: state.to_string(),
        zip: "226001".to_string(),
        phone_number: "9876543210".to_string(),
        email: format!(
            "{}.{}@example.com",
            first_name.to_lowercase(),
            last_name.to_lowercase()
        ),
    }
}

/// Build a valid contact for the given person.
pub fn sample_contact(first_name: &str, last_name: &str, city: &str, state: &str) -> Contact {
    Contact::new(sample_details(first_name, last_name, city, state))
        .expect("sample details are valid")
}

/// Nikhil Kumar/Jhansi/UP, Amit Sharma/Delhi/DL, Rahul Verma/Delhi/DL,
/// Sita Gupta/Varanasi/UP, Mohan Yadav/Lucknow/UP, in that order.
pub fn sample_book() -> AddressBook {
    let mut book = AddressBook::new();
    for (first, last, city, state) in [
        ("Nikhil", "Kumar", "Jhansi", "UP"),
        ("Amit", "Sharma", "Delhi", "DL"),
        ("Rahul", "Verma", "Delhi", "DL"),
        ("Sita", "Gupta", "Varanasi", "UP"),
        ("Mohan", "Yadav", "Lucknow", "UP"),
    ] {
        book.add_contact(sample_contact(first, last, city, state))
            .expect("sample contacts are distinct");
    }
    book
}

/// "first last" of every contact in book order.
#[allow(dead_code)]
pub fn names(book: &AddressBook) -> Vec<String> {
    book.iter().map(Contact::full_name).collect()
}
