//! Address Book - an in-memory contact store with validated phone numbers.
//!
//! Contacts are kept as [`Record`]s, each owning a name and an ordered list of
//! phone numbers. An [`AddressBook`] indexes records by exact name.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (`Name`, `Phone`) and their errors
//! - **models**: `Record` and `AddressBook`
//! - **error**: Error types for the ambient layers
//! - **config**: Configuration management from environment variables
//!
//! Invalid phone input is reported to the caller as
//! [`ValidationError::InvalidPhoneFormat`]; lookups that find nothing are not
//! errors and return `None` or `false`.

pub mod config;
pub mod domain;
pub mod error;
pub mod models;

pub use config::{Config, OutputFormat};
pub use domain::{Field, Name, Phone, ValidationError, ValidationResult};
pub use error::{ConfigError, ConfigResult};
pub use models::{AddressBook, Record};
