//! Group assignment
//!
//! This module provides the assignment pipeline: date-scoped retrieval of
//! eligible applicants, deterministic seeded shuffle and split into control
//! and treatment groups, and sequential batch persistence with result
//! accounting.

pub mod assigner;
pub mod summary;

pub use assigner::{parse_assignment_date, GroupAssigner, DEFAULT_SEED};
pub use summary::AssignmentSummary;
