//! Address Book - demo entry point
//!
//! Seeds a handful of sample contacts and prints the listing, the state
//! groups and the per-state counts. Logging goes to stderr.

use address_book::{AddressBook, Config, Contact, ContactDetails};
use anyhow::{Context, Result};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// (first, last, address, city, state, zip, phone, email)
const SAMPLE_CONTACTS: [(&str, &str, &str, &str, &str, &str, &str, &str); 5] = [
    (
        "Nikhil",
        "Kumar",
        "BHEL Jhansi",
        "Jhansi",
        "UP",
        "284120",
        "9123456780",
        "nikhil.kumar@gmail.com",
    ),
    (
        "Amit",
        "Sharma",
        "Civil Lines",
        "Delhi",
        "DL",
        "110001",
        "9876543210",
        "amit.sharma@gmail.com",
    ),
    (
        "Rahul",
        "Verma",
        "Karol Bagh",
        "Delhi",
        "DL",
        "110005",
        "8765432109",
        "rahul.verma@gmail.com",
    ),
    (
        "Sita",
        "Gupta",
        "Assi Ghat",
        "Varanasi",
        "UP",
        "221005",
        "7654321098",
        "sita.gupta@gmail.com",
    ),
    (
        "Mohan",
        "Yadav",
        "Hazratganj",
        "Lucknow",
        "UP",
        "226001",
        "6543210987",
        "mohan.yadav@gmail.com",
    ),
];

fn main() -> Result<()> {
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // RUST_LOG wins over LOG_LEVEL
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(sort_case = ?config.sort_case, "Configuration loaded successfully");

    let mut book = AddressBook::from_config(&config);

    if config.seed_demo {
        for (first, last, address, city, state, zip, phone, email) in SAMPLE_CONTACTS {
            let contact = Contact::new(ContactDetails {
                first_name: first.to_string(),
                last_name: last.to_string(),
                address: address.to_string(),
                city: city.to_string(),
                state: state.to_string(),
                zip: zip.to_string(),
                phone_number: phone.to_string(),
                email: email.to_string(),
            })
            .with_context(|| format!("Invalid sample contact {} {}", first, last))?;

            if let Err(e) = book.add_contact(contact) {
                error!("Failed to add sample contact: {}", e);
            }
        }
    }

    book.sort_by_name();
    println!("{}\n", book.display_all());

    for (state, names) in book.group_by_state() {
        println!("{} ({}): {}", state, book.count_by_state(&state), names.join(", "));
    }

    info!(contacts = book.get_contact_count(), "Address book demo complete");
    Ok(())
}
