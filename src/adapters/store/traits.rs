//! Store abstraction traits
//!
//! This module defines the trait that store adapters must implement
//! to work with the assignment pipeline.

use crate::domain::applicant::Applicant;
use crate::domain::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::ops::AddAssign;

/// Result of a point update operation
///
/// `matched` counts documents found by identifier; `modified` counts
/// documents whose stored content actually changed. The tally is transient
/// and never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateCounts {
    /// Number of documents matched by identifier
    pub matched: u64,

    /// Number of documents whose stored content changed
    pub modified: u64,
}

impl UpdateCounts {
    /// Creates a new tally
    pub fn new(matched: u64, modified: u64) -> Self {
        Self { matched, modified }
    }

    /// Returns a zero tally
    pub fn zero() -> Self {
        Self::default()
    }
}

impl AddAssign for UpdateCounts {
    fn add_assign(&mut self, other: Self) {
        self.matched += other.matched;
        self.modified += other.modified;
    }
}

/// Applicant store trait
///
/// This trait defines the interface that all store adapters must implement
/// for reading eligible applicants and persisting group assignments.
#[async_trait]
pub trait ApplicantStore: Send + Sync {
    /// Find applicants created on the given calendar day whose quiz status
    /// is still incomplete
    ///
    /// The day is the half-open interval `[day 00:00, day+1 00:00)`. Results
    /// come back in the store's natural return order; no sort is applied, so
    /// the order is store-dependent and not guaranteed stable across calls.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    async fn find_incomplete_on(&self, day: NaiveDate) -> Result<Vec<Applicant>>;

    /// Persist one applicant's assignment fields by identifier
    ///
    /// Performs an idempotent point update that sets the enrollment flag and
    /// group label present on the in-memory record onto the stored document.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    async fn update_applicant(&self, applicant: &Applicant) -> Result<UpdateCounts>;

    /// Get the collection name this store operates on
    fn collection_name(&self) -> &str;
}
