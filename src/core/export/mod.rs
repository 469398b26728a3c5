//! Email export
//!
//! This module writes treatment-group contact emails to a dated CSV file
//! for the email campaign.

pub mod emails;

pub use emails::{EmailExporter, DEFAULT_TAG};
