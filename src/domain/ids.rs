//! Domain identifier types
//!
//! This module provides a newtype wrapper for the store-assigned applicant
//! identifier, keeping the rest of the codebase independent of the driver's
//! object-id representation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Applicant identifier newtype wrapper
///
/// Represents the store-assigned unique identifier of one applicant record.
/// The MongoDB adapter maps this to and from the collection's `_id` field;
/// other stores may use any non-empty string.
///
/// # Examples
///
/// ```
/// use cohort::domain::ids::ApplicantId;
/// use std::str::FromStr;
///
/// let id = ApplicantId::from_str("64a8f2c9e4b0d93f5a1c7e02").unwrap();
/// assert_eq!(id.as_str(), "64a8f2c9e4b0d93f5a1c7e02");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApplicantId(String);

impl ApplicantId {
    /// Creates a new ApplicantId from a string
    ///
    /// # Arguments
    ///
    /// * `id` - The applicant identifier string
    ///
    /// # Returns
    ///
    /// Returns `Ok(ApplicantId)` if the ID is non-empty, `Err` otherwise
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("Applicant ID cannot be empty".to_string());
        }
        Ok(Self(id))
    }

    /// Returns the applicant ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApplicantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ApplicantId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for ApplicantId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
