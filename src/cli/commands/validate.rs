//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the Cohort configuration file.

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("Validating configuration file: {config_path}");

        // load_config validates on the way in
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("Configuration is invalid");
                println!("  Error: {e}");
                return Ok(2);
            }
        };

        println!("Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level:  {}", config.application.log_level);
        println!("  Store:      {}:{}", config.store.host, config.store.port);
        println!("  Database:   {}", config.store.database);
        println!("  Collection: {}", config.store.collection);
        println!("  Seed:       {}", config.experiment.seed);
        println!("  Export Dir: {}", config.export.directory);
        println!("  Export Tag: {}", config.export.tag);

        Ok(0)
    }
}
