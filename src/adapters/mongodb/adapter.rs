//! MongoDB adapter implementing the store trait
//!
//! This module provides the `ApplicantStore` implementation backed by one
//! MongoDB collection.

use crate::adapters::mongodb::client::MongoStoreClient;
use crate::adapters::mongodb::models::{object_id, ApplicantDocument};
use crate::adapters::store::traits::{ApplicantStore, UpdateCounts};
use crate::domain::applicant::{Applicant, QuizStatus};
use crate::domain::{Result, StoreError};
use async_trait::async_trait;
use chrono::{Duration, NaiveDate, NaiveTime};
use futures::TryStreamExt;
use mongodb::bson::{doc, Bson, DateTime as BsonDateTime, Document};

/// MongoDB implementation of the applicant store
pub struct MongoStore {
    client: MongoStoreClient,
}

impl MongoStore {
    /// Create a new MongoDB store adapter
    pub fn new(client: MongoStoreClient) -> Self {
        Self { client }
    }

    /// Build the `$set` document for one applicant's assignment fields
    ///
    /// Only the fields present on the in-memory record are written.
    fn set_fields(applicant: &Applicant) -> Document {
        let mut set = Document::new();
        if let Some(in_experiment) = applicant.in_experiment {
            set.insert("inExperiment", Bson::Boolean(in_experiment));
        }
        if let Some(group) = applicant.group {
            set.insert("group", Bson::String(group.label().to_string()));
        }
        set
    }
}

#[async_trait]
impl ApplicantStore for MongoStore {
    async fn find_incomplete_on(&self, day: NaiveDate) -> Result<Vec<Applicant>> {
        // Half-open interval covering exactly one calendar day.
        let start = day.and_time(NaiveTime::MIN).and_utc();
        let end = start + Duration::days(1);

        let filter = doc! {
            "createdAt": {
                "$gte": BsonDateTime::from_chrono(start),
                "$lt": BsonDateTime::from_chrono(end),
            },
            "admissionsQuiz": QuizStatus::Incomplete.as_str(),
        };

        tracing::debug!(
            collection = %self.client.collection_name(),
            day = %day,
            "Querying incomplete applicants"
        );

        let cursor = self
            .client
            .collection()
            .find(filter, None)
            .await
            .map_err(|e| StoreError::QueryFailed(e.to_string()))?;

        let documents: Vec<ApplicantDocument> = cursor
            .try_collect()
            .await
            .map_err(|e| StoreError::QueryFailed(e.to_string()))?;

        let applicants = documents
            .into_iter()
            .map(ApplicantDocument::into_domain)
            .collect::<std::result::Result<Vec<_>, _>>()?;

        tracing::debug!(
            day = %day,
            count = applicants.len(),
            "Found incomplete applicants"
        );

        Ok(applicants)
    }

    async fn update_applicant(&self, applicant: &Applicant) -> Result<UpdateCounts> {
        let oid = object_id(&applicant.id)?;
        let update = doc! { "$set": Self::set_fields(applicant) };

        let result = self
            .client
            .collection()
            .update_one(doc! { "_id": oid }, update, None)
            .await
            .map_err(|e| StoreError::UpdateFailed(e.to_string()))?;

        Ok(UpdateCounts::new(result.matched_count, result.modified_count))
    }

    fn collection_name(&self) -> &str {
        self.client.collection_name()
    }
}
