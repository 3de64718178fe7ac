//! Record model representing a single named contact.

use crate::domain::{Name, Phone, ValidationResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// A contact: one name and an ordered list of phone numbers.
///
/// Phones keep their insertion order. Duplicates are allowed.
///
/// # Example
///
/// ```
/// use address_book::Record;
///
/// let mut record = Record::new("John");
/// record.add_phone("1234567890").unwrap();
/// record.add_phone("5555555555").unwrap();
///
/// assert!(record.add_phone("123").is_err());
/// assert_eq!(
///     record.to_string(),
///     "Contact name: John, phones: 1234567890; 5555555555"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,
    #[serde(default)]
    phones: Vec<Phone>,
}

impl Record {
    /// Create a record with the given name and no phones.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Name::new(name),
            phones: Vec::new(),
        }
    }

    /// The contact name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Phones in insertion order.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// Validate `phone` and append it to the end of the phone list.
    ///
    /// Returns the stored phone on success.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhoneFormat` if `phone` is not exactly
    /// ten digits. The record is left unchanged.
    pub fn add_phone(&mut self, phone: &str) -> ValidationResult<&Phone> {
        let phone = Phone::new(phone)?;
        debug!(contact = %self.name, phone = %phone, "Adding phone");

        self.phones.push(phone);
        let idx = self.phones.len() - 1;
        Ok(&self.phones[idx])
    }

    /// Find the first phone equal to `phone`.
    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Remove the first occurrence of `phone`.
    ///
    /// Returns `false` if no such phone exists.
    pub fn remove_phone(&mut self, phone: &str) -> bool {
        match self.position_of(phone) {
            Some(idx) => {
                self.phones.remove(idx);
                debug!(contact = %self.name, phone, "Removed phone");
                true
            }
            None => {
                debug!(contact = %self.name, phone, "Phone to remove not found");
                false
            }
        }
    }

    /// Replace the first occurrence of `old` with `new`, keeping its position.
    ///
    /// `new` is validated before the phone list is searched, so an invalid
    /// replacement never touches the record. Returns `Ok(false)` when `old`
    /// is not present.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhoneFormat` if `new` is not exactly
    /// ten digits.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> ValidationResult<bool> {
        let new_phone = Phone::new(new)?;

        let Some(idx) = self.position_of(old) else {
            debug!(contact = %self.name, phone = old, "Phone to edit not found");
            return Ok(false);
        };

        debug!(contact = %self.name, old, new, "Editing phone");
        self.phones[idx] = new_phone;
        Ok(true)
    }

    fn position_of(&self, phone: &str) -> Option<usize> {
        self.phones.iter().position(|p| p.as_str() == phone)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Contact name: {}, phones: ", self.name)?;
        for (i, phone) in self.phones.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", phone)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ValidationError;

    fn john() -> Record {
        let mut record = Record::new("John");
        record.add_phone("1234567890").unwrap();
        record.add_phone("5555555555").unwrap();
        record
    }

    fn values(record: &Record) -> Vec<&str> {
        record.phones().iter().map(Phone::as_str).collect()
    }

    #[test]
    fn test_new_record_is_empty() {
        let record = Record::new("Jane");
        assert_eq!(record.name().as_str(), "Jane");
        assert!(record.phones().is_empty());
        assert_eq!(record.to_string(), "Contact name: Jane, phones: ");
    }

    #[test]
    fn test_add_phone_appends_and_returns_phone() {
        let mut record = john();
        let added = record.add_phone("9876543210").unwrap().clone();

        assert_eq!(added, "9876543210");
        assert_eq!(record.phones().last(), Some(&added));
        assert_eq!(record.phones().len(), 3);
    }

    #[test]
    fn test_add_phone_allows_duplicates() {
        let mut record = john();
        record.add_phone("1234567890").unwrap();
        assert_eq!(values(&record), ["1234567890", "5555555555", "1234567890"]);
    }

    #[test]
    fn test_add_invalid_phone_leaves_record_unchanged() {
        let mut record = john();
        let err = record.add_phone("123").unwrap_err();

        assert_eq!(err, ValidationError::InvalidPhoneFormat("123".to_string()));
        assert_eq!(values(&record), ["1234567890", "5555555555"]);
    }

    #[test]
    fn test_find_phone() {
        let record = john();
        assert_eq!(record.find_phone("5555555555").unwrap(), "5555555555");
        assert!(record.find_phone("0000000000").is_none());
        assert!(record.find_phone("not a phone").is_none());
    }

    #[test]
    fn test_remove_phone_first_occurrence_only() {
        let mut record = john();
        record.add_phone("1234567890").unwrap();

        assert!(record.remove_phone("1234567890"));
        assert_eq!(values(&record), ["5555555555", "1234567890"]);
    }

    #[test]
    fn test_remove_missing_phone() {
        let mut record = john();
        assert!(!record.remove_phone("0000000000"));
        assert_eq!(values(&record), ["1234567890", "5555555555"]);
    }

    #[test]
    fn test_edit_phone_in_place() {
        let mut record = john();
        assert_eq!(record.edit_phone("1234567890", "1112223333"), Ok(true));
        assert_eq!(
            record.to_string(),
            "Contact name: John, phones: 1112223333; 5555555555"
        );
    }

    #[test]
    fn test_edit_phone_invalid_new_value() {
        let mut record = john();
        let result = record.edit_phone("1234567890", "111");

        assert!(matches!(result, Err(ValidationError::InvalidPhoneFormat(v)) if v == "111"));
        assert!(record.find_phone("1234567890").is_some());
        assert_eq!(values(&record), ["1234567890", "5555555555"]);
    }

    #[test]
    fn test_edit_phone_invalid_new_value_checked_before_lookup() {
        let mut record = john();
        assert!(record.edit_phone("0000000000", "bad").is_err());
    }

    #[test]
    fn test_edit_missing_phone() {
        let mut record = john();
        assert_eq!(record.edit_phone("0000000000", "1112223333"), Ok(false));
        assert_eq!(values(&record), ["1234567890", "5555555555"]);
    }

    #[test]
    fn test_record_serialization() {
        let json = serde_json::to_value(john()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "John", "phones": ["1234567890", "5555555555"]})
        );
    }

    #[test]
    fn test_record_deserialization_validates_phones() {
        let result: Result<Record, _> =
            serde_json::from_str(r#"{"name": "John", "phones": ["12345"]}"#);
        assert!(result.is_err());

        let record: Record = serde_json::from_str(r#"{"name": "Jane"}"#).unwrap();
        assert!(record.phones().is_empty());
    }
}
