//! Applicant domain model
//!
//! This module defines the core Applicant type representing one quiz
//! applicant, together with the quiz-completion status and the two fixed
//! experiment group labels.

use super::ids::ApplicantId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Experiment group assignment
///
/// The two labels are fixed wire values: an assigned record's `group` field
/// holds exactly `"no email (control)"` or `"email (treatment)"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Group {
    /// Non-contacted partition
    #[serde(rename = "no email (control)")]
    Control,

    /// Contacted partition
    #[serde(rename = "email (treatment)")]
    Treatment,
}

impl Group {
    /// Returns the stored label for this group
    pub fn label(&self) -> &'static str {
        match self {
            Group::Control => "no email (control)",
            Group::Treatment => "email (treatment)",
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Group {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "no email (control)" => Ok(Group::Control),
            "email (treatment)" => Ok(Group::Treatment),
            other => Err(format!("Unknown group label: {other}")),
        }
    }
}

/// Admissions quiz completion status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuizStatus {
    /// Quiz not yet completed - the only status eligible for assignment
    Incomplete,

    /// Quiz completed
    Complete,
}

impl QuizStatus {
    /// Returns the stored value for this status
    pub fn as_str(&self) -> &'static str {
        match self {
            QuizStatus::Incomplete => "incomplete",
            QuizStatus::Complete => "complete",
        }
    }
}

impl fmt::Display for QuizStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for QuizStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "incomplete" => Ok(QuizStatus::Incomplete),
            "complete" => Ok(QuizStatus::Complete),
            other => Err(format!("Unknown quiz status: {other}")),
        }
    }
}

/// Represents one applicant record
///
/// Records are created upstream of this system; Cohort only ever reads them,
/// tags them with a group in memory, and persists the tagged fields back.
/// Invariant: once assigned, `in_experiment` is `Some(true)` and `group` holds
/// exactly one of the two fixed labels.
///
/// # Examples
///
/// ```
/// use cohort::domain::applicant::ApplicantBuilder;
/// use cohort::domain::ids::ApplicantId;
/// use chrono::Utc;
///
/// let applicant = ApplicantBuilder::new()
///     .id(ApplicantId::new("64a8f2c9e4b0d93f5a1c7e02").unwrap())
///     .created_at(Utc::now())
///     .email("applicant@example.com")
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Applicant {
    /// Store-assigned unique identifier
    pub id: ApplicantId,

    /// Timestamp when the record was created upstream
    pub created_at: DateTime<Utc>,

    /// Contact email address
    pub email: String,

    /// Admissions quiz completion status
    pub admissions_quiz: QuizStatus,

    /// Whether this applicant has been enrolled in the experiment
    ///
    /// Absent (`None`) until assignment runs.
    pub in_experiment: Option<bool>,

    /// Assigned experiment group, absent until assignment runs
    pub group: Option<Group>,
}

impl Applicant {
    /// Creates a new builder for constructing an Applicant
    pub fn builder() -> ApplicantBuilder {
        ApplicantBuilder::default()
    }

    /// Tags this applicant as enrolled in the given group
    pub fn assign_to(&mut self, group: Group) {
        self.in_experiment = Some(true);
        self.group = Some(group);
    }

    /// Returns true if this applicant is assigned to the treatment group
    pub fn is_treatment(&self) -> bool {
        self.group == Some(Group::Treatment)
    }
}

/// Builder for constructing Applicant instances
#[derive(Debug, Default)]
pub struct ApplicantBuilder {
    id: Option<ApplicantId>,
    created_at: Option<DateTime<Utc>>,
    email: Option<String>,
    admissions_quiz: Option<QuizStatus>,
    in_experiment: Option<bool>,
    group: Option<Group>,
}

impl ApplicantBuilder {
    /// Creates a new ApplicantBuilder
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the applicant ID
    pub fn id(mut self, id: ApplicantId) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the creation timestamp
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Sets the email address
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets the quiz completion status (defaults to incomplete)
    pub fn admissions_quiz(mut self, status: QuizStatus) -> Self {
        self.admissions_quiz = Some(status);
        self
    }

    /// Sets the enrollment flag
    pub fn in_experiment(mut self, in_experiment: bool) -> Self {
        self.in_experiment = Some(in_experiment);
        self
    }

    /// Sets the assigned group
    pub fn group(mut self, group: Group) -> Self {
        self.group = Some(group);
        self
    }

    /// Builds the Applicant
    ///
    /// # Errors
    ///
    /// Returns an error message if a required field (id, created_at, email)
    /// is missing.
    pub fn build(self) -> Result<Applicant, String> {
        Ok(Applicant {
            id: self.id.ok_or("Applicant ID is required")?,
            created_at: self.created_at.ok_or("Creation timestamp is required")?,
            email: self.email.ok_or("Email address is required")?,
            admissions_quiz: self.admissions_quiz.unwrap_or(QuizStatus::Incomplete),
            in_experiment: self.in_experiment,
            group: self.group,
        })
    }
}
