//! Shared contract for scalar contact fields.

use std::fmt;

/// A scalar value holder with string rendering.
///
/// Implemented by [`Name`](super::Name) and [`Phone`](super::Phone). The
/// `Display` output of a field is always its raw value.
pub trait Field: fmt::Display {
    /// Get the held value as a string slice.
    fn value(&self) -> &str;
}
