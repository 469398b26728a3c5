//! Integration tests for the treatment email export
//!
//! Runs the assignment pipeline against the in-memory store and verifies
//! the exported CSV against the persisted groups.

use chrono::{Local, TimeZone, Utc};
use cohort::adapters::memory::InMemoryStore;
use cohort::core::assignment::GroupAssigner;
use cohort::core::export::EmailExporter;
use cohort::domain::applicant::{Applicant, QuizStatus};
use cohort::domain::ids::ApplicantId;
use std::collections::BTreeSet;
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

fn seeded_applicants(n: usize) -> Vec<Applicant> {
    (0..n)
        .map(|i| Applicant {
            id: ApplicantId::new(format!("applicant-{i:03}")).unwrap(),
            created_at: Utc.with_ymd_and_hms(2022, 5, 4, 12, 0, 0).unwrap(),
            email: format!("applicant{i}@example.com"),
            admissions_quiz: QuizStatus::Incomplete,
            in_experiment: None,
            group: None,
        })
        .collect()
}

#[tokio::test]
async fn exported_file_contains_exactly_the_treatment_emails() {
    let store = Arc::new(InMemoryStore::new(seeded_applicants(9)));
    let summary = GroupAssigner::new(store)
        .assign_to_groups("2022-05-04")
        .await
        .unwrap();

    let dir = TempDir::new().unwrap();
    let path = EmailExporter::new(dir.path())
        .export_treatment_emails(&summary.assigned)
        .unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    let mut lines = contents.lines();
    assert_eq!(lines.next(), Some("email,tag"));

    let exported: BTreeSet<String> = lines
        .map(|line| {
            let (email, tag) = line.split_once(',').expect("two columns");
            assert_eq!(tag, "ab-test");
            email.to_string()
        })
        .collect();

    let treatment: BTreeSet<String> = summary
        .assigned
        .iter()
        .filter(|a| a.is_treatment())
        .map(|a| a.email.clone())
        .collect();

    assert_eq!(exported, treatment);
    assert_eq!(exported.len(), summary.treatment_count);
}

#[tokio::test]
async fn filename_uses_export_date_not_experiment_date() {
    let store = Arc::new(InMemoryStore::new(seeded_applicants(4)));
    let summary = GroupAssigner::new(store)
        .assign_to_groups("2022-05-04")
        .await
        .unwrap();

    let dir = TempDir::new().unwrap();
    let path = EmailExporter::new(dir.path())
        .export_treatment_emails(&summary.assigned)
        .unwrap();

    let name = path.file_name().unwrap().to_str().unwrap();
    let today = Local::now().date_naive().format("%Y-%m-%d").to_string();
    assert_eq!(name, format!("{today}_ab-test.csv"));
    assert!(!name.contains("2022-05-04"));
}

#[test]
fn custom_tag_flows_into_filename_and_rows() {
    let mut applicant = seeded_applicants(1).remove(0);
    applicant.assign_to(cohort::domain::applicant::Group::Treatment);

    let dir = TempDir::new().unwrap();
    let path = EmailExporter::new(dir.path())
        .with_tag("spring-campaign")
        .export_treatment_emails(&[applicant])
        .unwrap();

    let name = path.file_name().unwrap().to_str().unwrap();
    assert!(name.ends_with("_spring-campaign.csv"));

    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.contains("applicant0@example.com,spring-campaign"));
}

#[test]
fn export_overwrites_without_warning() {
    let dir = TempDir::new().unwrap();
    let exporter = EmailExporter::new(dir.path());

    let mut first = seeded_applicants(1).remove(0);
    first.assign_to(cohort::domain::applicant::Group::Treatment);
    let path = exporter.export_treatment_emails(&[first]).unwrap();
    let before = fs::read_to_string(&path).unwrap();

    let path = exporter.export_treatment_emails(&[]).unwrap();
    let after = fs::read_to_string(&path).unwrap();

    assert_ne!(before, after);
    assert_eq!(after, "email,tag\n");
}
