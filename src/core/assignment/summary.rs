//! Assignment summary and reporting
//!
//! This module defines the structure for tracking and reporting the result
//! of one assignment run.

use crate::adapters::store::traits::UpdateCounts;
use crate::domain::applicant::Applicant;
use chrono::NaiveDate;
use std::time::Duration;

/// Summary of one assignment run
///
/// Carries the batch-update tally plus the tagged records so the email
/// exporter can be fed without a second query.
#[derive(Debug, Clone)]
pub struct AssignmentSummary {
    /// The calendar day the assignment covered
    pub day: NaiveDate,

    /// Accumulated matched/modified tally from the batch update
    pub counts: UpdateCounts,

    /// Number of applicants tagged control
    pub control_count: usize,

    /// Number of applicants tagged treatment
    pub treatment_count: usize,

    /// Duration of the run
    pub duration: Duration,

    /// The fully tagged batch, in post-shuffle order
    pub assigned: Vec<Applicant>,
}

impl AssignmentSummary {
    /// Create an empty summary for a day with no eligible applicants
    pub fn empty(day: NaiveDate) -> Self {
        Self {
            day,
            counts: UpdateCounts::zero(),
            control_count: 0,
            treatment_count: 0,
            duration: Duration::from_secs(0),
            assigned: Vec::new(),
        }
    }

    /// Total number of applicants in the batch
    pub fn total(&self) -> usize {
        self.control_count + self.treatment_count
    }

    /// True if the run found nothing to assign
    pub fn is_noop(&self) -> bool {
        self.assigned.is_empty()
    }

    /// Log the summary
    pub fn log_summary(&self) {
        tracing::info!(
            day = %self.day,
            total = self.total(),
            control = self.control_count,
            treatment = self.treatment_count,
            matched = self.counts.matched,
            modified = self.counts.modified,
            duration_ms = self.duration.as_millis() as u64,
            "Assignment completed"
        );
    }
}
