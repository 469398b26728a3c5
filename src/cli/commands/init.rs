//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "cohort.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        if Path::new(&self.output).exists() && !self.force {
            println!("Configuration file already exists: {}", self.output);
            println!("  Use --force to overwrite");
            return Ok(2);
        }

        match fs::write(&self.output, Self::generate_config()) {
            Ok(_) => {
                println!("Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your store settings", self.output);
                println!("  2. Set COHORT_STORE_PASSWORD in a .env file if the store needs auth");
                println!("  3. Validate: cohort validate-config");
                println!("  4. Run an assignment: cohort assign 2022-05-04 --export");
                Ok(0)
            }
            Err(e) => {
                eprintln!("Failed to write configuration file: {e}");
                Ok(5)
            }
        }
    }

    /// Generate the starter configuration
    fn generate_config() -> String {
        r#"# Cohort Configuration File
# A/B test assignment for applicant records in MongoDB

[application]
# Log level: trace, debug, info, warn, error
log_level = "info"
# Dry run mode - run the pipeline without writing assignments back
dry_run = false

[store]
host = "localhost"
port = 27017
database = "wqu-abtest"
collection = "ds-applicants"
# Uncomment for an authenticated store; keep the password out of the file:
# username = "abtest"
# password = "${COHORT_STORE_PASSWORD}"

[experiment]
# Shuffle seed; fixed so the same input set always yields the same partition
seed = 42

[export]
# Directory the dated treatment-email CSV is written into
directory = "."
# Campaign tag written next to every exported address
tag = "ab-test"

[logging]
# Enable JSON file logging in addition to console output
local_enabled = false
local_path = "logs"
local_rotation = "daily"
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::CohortConfig;

    #[test]
    fn test_generated_config_parses_and_validates() {
        let config: CohortConfig = toml::from_str(&InitArgs::generate_config()).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.store.database, "wqu-abtest");
        assert_eq!(config.experiment.seed, 42);
    }
}
