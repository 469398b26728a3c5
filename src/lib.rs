// Cohort - A/B Test Assignment Tool
// Copyright (c) 2025 Cohort Contributors
// Licensed under the MIT License

//! # Cohort - A/B test assignment and email export
//!
//! Cohort assigns quiz applicants stored in MongoDB to randomized
//! control/treatment groups for an A/B test, persists the assignment, and
//! exports the treatment-group contacts for an email campaign.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Finding** one calendar day's applicants whose admissions quiz is
//!   still incomplete
//! - **Assigning** them to groups with a deterministic seeded shuffle
//! - **Persisting** the assignment one point update at a time with
//!   matched/modified accounting
//! - **Exporting** treatment-group emails to a dated CSV file
//!
//! ## Architecture
//!
//! Cohort follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (assignment, export)
//! - [`adapters`] - External integrations (MongoDB, in-memory store)
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cohort::adapters::mongodb::{MongoStore, MongoStoreClient};
//! use cohort::config::CohortConfig;
//! use cohort::core::assignment::GroupAssigner;
//! use cohort::core::export::EmailExporter;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = CohortConfig::default();
//!
//!     let client = MongoStoreClient::connect(&config.store).await?;
//!     let assigner = GroupAssigner::new(Arc::new(MongoStore::new(client)));
//!
//!     let summary = assigner.assign_to_groups("2022-05-04").await?;
//!     println!(
//!         "Assigned {} applicants ({} control, {} treatment)",
//!         summary.total(),
//!         summary.control_count,
//!         summary.treatment_count
//!     );
//!
//!     EmailExporter::new(".").export_treatment_emails(&summary.assigned)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Determinism
//!
//! The shuffle uses a locally constructed generator seeded per call
//! (default seed 42), so the same input set always yields the same
//! partition. This makes a day's assignment reproducible for auditing.
//!
//! ## Error Handling
//!
//! Cohort uses the [`domain::CohortError`] type for all errors:
//!
//! ```rust,no_run
//! use cohort::domain::CohortError;
//!
//! fn example() -> Result<(), CohortError> {
//!     let config = cohort::config::load_config("cohort.toml")?;
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
