//! Data models for the address book.
//!
//! This module contains the contact record and the name-keyed book that owns
//! the records.

pub mod address_book;
pub mod record;

pub use address_book::AddressBook;
pub use record::Record;
