//! Address Book - demonstration entry point
//!
//! Builds a small address book, exercises every record and book operation
//! and prints the results to stdout. Logs go to stderr.

use address_book::{AddressBook, Config, OutputFormat, Record};
use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging (stderr only so stdout carries just the output)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(format = %config.output_format, "Configuration loaded");

    let mut book = AddressBook::new();

    let mut john = Record::new("John");
    for phone in ["1234567890", "5555555555"] {
        if let Err(e) = john.add_phone(phone).map(|_| ()) {
            println!("Error adding phone for John: {}", e);
        }
    }
    book.add_record(john);

    let mut jane = Record::new("Jane");
    match jane.add_phone("9876543210").map(|_| ()) {
        Ok(()) => book.add_record(jane),
        Err(e) => println!("Error adding phone for Jane: {}", e),
    }

    println!("--- All records ---");
    print_book(&book, config.output_format)?;

    if let Some(john) = book.find_mut("John") {
        match john.edit_phone("1234567890", "1112223333") {
            Ok(true) => println!("\nPhone for {} updated.", john.name()),
            Ok(false) => println!("\nPhone 1234567890 not found for {}.", john.name()),
            Err(e) => println!("\nEdit failed: {}", e),
        }

        println!("\n--- John after edit ---");
        println!("{}", john);

        println!("\n--- Looking up 5555555555 for John ---");
        match john.find_phone("5555555555") {
            Some(phone) => println!("{}: {}", john.name(), phone),
            None => println!("{}: not found", john.name()),
        }

        println!("\n--- Adding an invalid phone ---");
        if let Err(e) = john.add_phone("123").map(|_| ()) {
            info!(contact = %john.name(), error = %e, "Rejected phone");
            println!("Error! {}", e);
        }
    }

    println!("\n--- Deleting Jane ---");
    if book.delete("Jane") {
        println!("Record 'Jane' deleted.");
    } else {
        println!("Record 'Jane' not found.");
    }

    println!("\n--- All records after deleting Jane ---");
    print_book(&book, config.output_format)?;

    info!(records = book.len(), "Done");
    Ok(())
}

fn print_book(book: &AddressBook, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print!("{}", book),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(book)?),
    }
    Ok(())
}
