//! Assign command implementation
//!
//! This module implements the `assign` command: run group assignment for one
//! calendar day and optionally export the treatment emails.

use crate::adapters::mongodb::{MongoStore, MongoStoreClient};
use crate::config::load_config;
use crate::core::assignment::GroupAssigner;
use crate::core::export::EmailExporter;
use crate::domain::CohortError;
use clap::Args;
use std::sync::Arc;

/// Arguments for the assign command
#[derive(Args, Debug)]
pub struct AssignArgs {
    /// Target calendar day in YYYY-MM-DD form
    pub date: String,

    /// Also export the treatment-group emails to a dated CSV
    #[arg(long)]
    pub export: bool,

    /// Directory for the exported CSV (defaults to the configured directory)
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<String>,

    /// Dry run mode - run the full pipeline without writing to the store
    #[arg(long)]
    pub dry_run: bool,

    /// Override the shuffle seed
    #[arg(long)]
    pub seed: Option<u64>,
}

impl AssignArgs {
    /// Execute the assign command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(date = %self.date, "Starting assign command");

        // Load configuration and apply CLI overrides
        let mut config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Failed to load configuration: {e}");
                return Ok(2);
            }
        };

        if let Some(seed) = self.seed {
            tracing::info!(seed = seed, "Overriding shuffle seed from CLI");
            config.experiment.seed = seed;
        }
        if self.dry_run {
            tracing::info!("Enabling dry-run mode from CLI");
            config.application.dry_run = true;
        }

        // Connect and run the assignment
        let client = MongoStoreClient::connect(&config.store).await?;
        let store = Arc::new(MongoStore::new(client));

        let assigner = GroupAssigner::new(store)
            .with_seed(config.experiment.seed)
            .with_dry_run(config.application.dry_run);

        let summary = match assigner.assign_to_groups(&self.date).await {
            Ok(summary) => summary,
            Err(CohortError::InvalidDateFormat(msg)) => {
                eprintln!("Invalid date '{}': {msg} (expected YYYY-MM-DD)", self.date);
                return Ok(2);
            }
            Err(e) => return Err(e.into()),
        };

        println!("Assignment for {}:", summary.day);
        println!("  total:     {}", summary.total());
        println!("  control:   {}", summary.control_count);
        println!("  treatment: {}", summary.treatment_count);
        println!("  matched:   {}", summary.counts.matched);
        println!("  modified:  {}", summary.counts.modified);

        if self.export {
            let directory = self
                .output_dir
                .clone()
                .unwrap_or_else(|| config.export.directory.clone());
            let exporter = EmailExporter::new(&directory).with_tag(&config.export.tag);
            let path = exporter.export_treatment_emails(&summary.assigned)?;
            println!("  exported:  {}", path.display());
        }

        Ok(0)
    }
}
