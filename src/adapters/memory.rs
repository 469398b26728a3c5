//! In-memory applicant store
//!
//! A `Vec`-backed implementation of the store trait. It mirrors the update
//! accounting of the MongoDB adapter (matched by identifier, modified only
//! when stored content changes) so assignment semantics can be tested
//! without a running database. Tests can also inject a failure at a chosen
//! update call to exercise partial-batch behavior.

use crate::adapters::store::traits::{ApplicantStore, UpdateCounts};
use crate::domain::applicant::{Applicant, QuizStatus};
use crate::domain::{Result, StoreError};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Mutex;

/// In-memory implementation of the applicant store
pub struct InMemoryStore {
    applicants: Mutex<Vec<Applicant>>,
    update_calls: Mutex<u64>,
    fail_on_update_call: Option<u64>,
    collection_name: String,
}

impl InMemoryStore {
    /// Create a store seeded with the given applicants
    pub fn new(applicants: Vec<Applicant>) -> Self {
        Self {
            applicants: Mutex::new(applicants),
            update_calls: Mutex::new(0),
            fail_on_update_call: None,
            collection_name: "ds-applicants".to_string(),
        }
    }

    /// Create an empty store
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Make the nth update call (1-based) fail before applying anything
    ///
    /// Earlier calls commit normally; nothing rolls them back.
    pub fn failing_on_update_call(mut self, call: u64) -> Self {
        self.fail_on_update_call = Some(call);
        self
    }

    /// Number of update calls issued so far
    pub fn update_calls(&self) -> u64 {
        *self.update_calls.lock().expect("update counter poisoned")
    }

    /// Snapshot of the stored applicants
    pub fn snapshot(&self) -> Vec<Applicant> {
        self.applicants.lock().expect("store poisoned").clone()
    }
}

#[async_trait]
impl ApplicantStore for InMemoryStore {
    async fn find_incomplete_on(&self, day: NaiveDate) -> Result<Vec<Applicant>> {
        let applicants = self.applicants.lock().expect("store poisoned");
        Ok(applicants
            .iter()
            .filter(|a| {
                a.created_at.date_naive() == day && a.admissions_quiz == QuizStatus::Incomplete
            })
            .cloned()
            .collect())
    }

    async fn update_applicant(&self, applicant: &Applicant) -> Result<UpdateCounts> {
        let call = {
            let mut calls = self.update_calls.lock().expect("update counter poisoned");
            *calls += 1;
            *calls
        };

        if self.fail_on_update_call == Some(call) {
            return Err(StoreError::UpdateFailed(format!(
                "injected failure on update call {call}"
            ))
            .into());
        }

        let mut applicants = self.applicants.lock().expect("store poisoned");
        let Some(stored) = applicants.iter_mut().find(|a| a.id == applicant.id) else {
            return Ok(UpdateCounts::zero());
        };

        let changed = stored.in_experiment != applicant.in_experiment
            || stored.group != applicant.group;
        stored.in_experiment = applicant.in_experiment;
        stored.group = applicant.group;

        Ok(UpdateCounts::new(1, u64::from(changed)))
    }

    fn collection_name(&self) -> &str {
        &self.collection_name
    }
}
