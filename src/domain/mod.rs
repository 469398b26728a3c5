//! Core domain types and models
//!
//! This module contains the applicant record model, group labels, identifier
//! newtypes, and the error hierarchy used throughout Cohort.

pub mod applicant;
pub mod errors;
pub mod ids;
pub mod result;

pub use applicant::{Applicant, ApplicantBuilder, Group, QuizStatus};
pub use errors::{CohortError, StoreError};
pub use ids::ApplicantId;
pub use result::Result;
