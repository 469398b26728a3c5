//! Configuration management for Cohort.
//!
//! This module provides TOML-based configuration loading, parsing, and
//! validation.
//!
//! # Overview
//!
//! Cohort uses TOML configuration files with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `COHORT_*` environment variable overrides
//! - Default values for optional settings
//! - Validation on load
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [store]
//! host = "localhost"
//! port = 27017
//! database = "wqu-abtest"
//! collection = "ds-applicants"
//!
//! [experiment]
//! seed = 42
//!
//! [export]
//! directory = "."
//! tag = "ab-test"
//! ```
//!
//! Every section has defaults, so an empty file (or
//! [`CohortConfig::default()`] programmatically) points at a local MongoDB
//! with the stock database and collection names.

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::load_config;
pub use schema::{
    ApplicationConfig, CohortConfig, ExperimentConfig, ExportConfig, LoggingConfig, StoreConfig,
};
pub use secret::{secret_string, SecretString, SecretValue};
