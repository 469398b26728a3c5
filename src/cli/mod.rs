//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Cohort using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Cohort - A/B test assignment tool
#[derive(Parser, Debug)]
#[command(name = "cohort")]
#[command(version, about, long_about = None)]
#[command(author = "Cohort Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "cohort.toml", env = "COHORT_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "COHORT_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Assign one day's eligible applicants to control/treatment groups
    Assign(commands::assign::AssignArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
