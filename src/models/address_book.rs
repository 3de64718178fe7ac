//! Address book: a name-keyed, insertion-ordered collection of records.

use crate::models::Record;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use tracing::debug;

/// A collection of contact records keyed by contact name.
///
/// Iteration follows insertion order. Adding a record under a name that is
/// already present replaces the stored record but keeps its position.
///
/// The book is a plain owned container; callers that share it across threads
/// must provide their own synchronization.
///
/// # Example
///
/// ```
/// use address_book::{AddressBook, Record};
///
/// let mut book = AddressBook::new();
/// book.add_record(Record::new("John"));
/// book.add_record(Record::new("Jane"));
///
/// assert!(book.delete("Jane"));
/// assert!(!book.delete("Jane"));
/// assert_eq!(book.iter().map(|(name, _)| name).collect::<Vec<_>>(), ["John"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: IndexMap<String, Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `record` under its name, replacing any record with the same name.
    pub fn add_record(&mut self, record: Record) {
        let key = record.name().as_str().to_string();
        if let Some(previous) = self.records.insert(key, record) {
            debug!(contact = %previous.name(), "Replaced existing record");
        }
    }

    /// Look up a record by exact name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Look up a record by exact name for modification.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Delete the record stored under `name`.
    ///
    /// Returns `false` if there is no such record.
    pub fn delete(&mut self, name: &str) -> bool {
        // shift_remove keeps the order of the remaining entries
        let removed = self.records.shift_remove(name).is_some();
        if !removed {
            debug!(contact = name, "Record to delete not found");
        }
        removed
    }

    /// Iterate over `(name, record)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Record)> {
        self.records.iter().map(|(name, record)| (name.as_str(), record))
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = (&'a String, &'a Record);
    type IntoIter = indexmap::map::Iter<'a, String, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut book = AddressBook::new();
        for record in iter {
            book.add_record(record);
        }
        book
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for record in self.records.values() {
            writeln!(f, "{}", record)?;
        }
        Ok(())
    }
}

// Serde support - serialize as a list of records
impl Serialize for AddressBook {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.records.values())
    }
}

// Serde support - rebuild through add_record so later duplicates win
impl<'de> Deserialize<'de> for AddressBook {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let records = Vec::<Record>::deserialize(deserializer)?;
        Ok(records.into_iter().collect())
    }
}
