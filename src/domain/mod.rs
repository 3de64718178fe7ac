//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the scalar values a contact is
//! built from: names and phone numbers. Phone numbers are validated at
//! construction time so an invalid number can never be represented.

pub mod errors;
pub mod field;
pub mod name;
pub mod phone;

pub use errors::{ValidationError, ValidationResult};
pub use field::Field;
pub use name::Name;
pub use phone::Phone;
