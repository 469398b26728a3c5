//! Store abstraction
//!
//! Defines the trait that applicant store adapters implement.

pub mod traits;

pub use traits::{ApplicantStore, UpdateCounts};
