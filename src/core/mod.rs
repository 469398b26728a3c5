//! Business logic
//!
//! This module contains the core pipeline: group assignment (find, shuffle,
//! split, persist) and treatment-email export.

pub mod assignment;
pub mod export;

pub use assignment::{AssignmentSummary, GroupAssigner};
pub use export::EmailExporter;
