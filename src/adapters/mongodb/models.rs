//! MongoDB wire-format models
//!
//! This module defines the BSON document shape of an applicant record as it
//! lives in the collection, and the conversions to and from the domain model.
//! Field names here are the stored names (`createdAt`, `admissionsQuiz`,
//! `inExperiment`, `group`) and must not change.

use crate::domain::applicant::{Applicant, Group, QuizStatus};
use crate::domain::ids::ApplicantId;
use crate::domain::StoreError;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::DateTime as BsonDateTime;
use serde::{Deserialize, Serialize};

/// One applicant record as stored in MongoDB
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicantDocument {
    /// Store-assigned object id
    #[serde(rename = "_id")]
    pub id: ObjectId,

    /// Creation timestamp, written upstream
    #[serde(rename = "createdAt")]
    pub created_at: BsonDateTime,

    /// Contact email address
    pub email: String,

    /// Quiz completion status, stored as a plain string
    #[serde(rename = "admissionsQuiz")]
    pub admissions_quiz: String,

    /// Enrollment flag, absent until assignment runs
    #[serde(rename = "inExperiment", skip_serializing_if = "Option::is_none")]
    pub in_experiment: Option<bool>,

    /// Group label, absent until assignment runs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

impl ApplicantDocument {
    /// Convert the stored document into the domain model
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidDocument` if the quiz status or group
    /// label does not match a known value.
    pub fn into_domain(self) -> Result<Applicant, StoreError> {
        let admissions_quiz: QuizStatus = self
            .admissions_quiz
            .parse()
            .map_err(StoreError::InvalidDocument)?;

        let group = self
            .group
            .map(|label| label.parse::<Group>())
            .transpose()
            .map_err(StoreError::InvalidDocument)?;

        let id = ApplicantId::new(self.id.to_hex()).map_err(StoreError::InvalidDocument)?;

        Ok(Applicant {
            id,
            created_at: self.created_at.to_chrono(),
            email: self.email,
            admissions_quiz,
            in_experiment: self.in_experiment,
            group,
        })
    }
}

/// Parse the hex object id back out of a domain identifier
///
/// # Errors
///
/// Returns `StoreError::InvalidDocument` if the identifier is not a valid
/// object id.
pub fn object_id(id: &ApplicantId) -> Result<ObjectId, StoreError> {
    ObjectId::parse_str(id.as_str())
        .map_err(|e| StoreError::InvalidDocument(format!("Invalid object id {id}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_document() -> ApplicantDocument {
        ApplicantDocument {
            id: ObjectId::new(),
            created_at: BsonDateTime::now(),
            email: "a@example.com".to_string(),
            admissions_quiz: "incomplete".to_string(),
            in_experiment: None,
            group: None,
        }
    }

    #[test]
    fn test_into_domain_maps_fields() {
        let doc = sample_document();
        let hex = doc.id.to_hex();

        let applicant = doc.into_domain().unwrap();
        assert_eq!(applicant.id.as_str(), hex);
        assert_eq!(applicant.admissions_quiz, QuizStatus::Incomplete);
        assert!(applicant.in_experiment.is_none());
        assert!(applicant.group.is_none());
    }

    #[test]
    fn test_into_domain_parses_group_label() {
        let mut doc = sample_document();
        doc.in_experiment = Some(true);
        doc.group = Some("email (treatment)".to_string());

        let applicant = doc.into_domain().unwrap();
        assert_eq!(applicant.group, Some(Group::Treatment));
    }

    #[test]
    fn test_into_domain_rejects_unknown_status() {
        let mut doc = sample_document();
        doc.admissions_quiz = "pending".to_string();

        let result = doc.into_domain();
        assert!(matches!(result, Err(StoreError::InvalidDocument(_))));
    }

    #[test]
    fn test_object_id_round_trip() {
        let oid = ObjectId::new();
        let id = ApplicantId::new(oid.to_hex()).unwrap();
        assert_eq!(object_id(&id).unwrap(), oid);
    }

    #[test]
    fn test_object_id_rejects_garbage() {
        let id = ApplicantId::new("not-an-object-id").unwrap();
        assert!(object_id(&id).is_err());
    }

    #[test]
    fn test_document_serializes_stored_field_names() {
        let mut doc = sample_document();
        doc.in_experiment = Some(true);
        doc.group = Some("no email (control)".to_string());

        let bson = mongodb::bson::to_document(&doc).unwrap();
        assert!(bson.contains_key("_id"));
        assert!(bson.contains_key("createdAt"));
        assert!(bson.contains_key("admissionsQuiz"));
        assert!(bson.contains_key("inExperiment"));
        assert!(bson.contains_key("group"));
    }

    #[test]
    fn test_document_omits_absent_assignment_fields() {
        let doc = sample_document();
        let bson = mongodb::bson::to_document(&doc).unwrap();
        assert!(!bson.contains_key("inExperiment"));
        assert!(!bson.contains_key("group"));
    }
}
