//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::CohortConfig;
use crate::config::secret_string;
use crate::domain::errors::CohortError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into CohortConfig
/// 4. Applies environment variable overrides (COHORT_* prefix)
/// 5. Validates the configuration
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - Environment variable substitution fails
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use cohort::config::loader::load_config;
///
/// let config = load_config("cohort.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<CohortConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(CohortError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        CohortError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    // Perform environment variable substitution
    let contents = substitute_env_vars(&contents)?;

    // Parse TOML
    let mut config: CohortConfig = toml::from_str(&contents)
        .map_err(|e| CohortError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    // Apply environment variable overrides
    apply_env_overrides(&mut config);

    // Validate configuration
    config.validate().map_err(|e| {
        CohortError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").unwrap();
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    // Process line by line to skip comments
    for line in input.lines() {
        let trimmed = line.trim_start();

        // Skip comment lines - don't process env vars in comments
        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(CohortError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using the COHORT_* prefix
///
/// Environment variables follow the pattern: COHORT_<SECTION>_<KEY>
/// For example: COHORT_STORE_HOST, COHORT_EXPERIMENT_SEED
fn apply_env_overrides(config: &mut CohortConfig) {
    // Application overrides
    if let Ok(val) = std::env::var("COHORT_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }
    if let Ok(val) = std::env::var("COHORT_APPLICATION_DRY_RUN") {
        config.application.dry_run = val.parse().unwrap_or(false);
    }

    // Store overrides
    if let Ok(val) = std::env::var("COHORT_STORE_HOST") {
        config.store.host = val;
    }
    if let Ok(val) = std::env::var("COHORT_STORE_PORT") {
        if let Ok(port) = val.parse() {
            config.store.port = port;
        }
    }
    if let Ok(val) = std::env::var("COHORT_STORE_USERNAME") {
        config.store.username = Some(val);
    }
    if let Ok(val) = std::env::var("COHORT_STORE_PASSWORD") {
        config.store.password = Some(secret_string(val));
    }
    if let Ok(val) = std::env::var("COHORT_STORE_DATABASE") {
        config.store.database = val;
    }
    if let Ok(val) = std::env::var("COHORT_STORE_COLLECTION") {
        config.store.collection = val;
    }

    // Experiment overrides
    if let Ok(val) = std::env::var("COHORT_EXPERIMENT_SEED") {
        if let Ok(seed) = val.parse() {
            config.experiment.seed = seed;
        }
    }

    // Export overrides
    if let Ok(val) = std::env::var("COHORT_EXPORT_DIRECTORY") {
        config.export.directory = val;
    }
    if let Ok(val) = std::env::var("COHORT_EXPORT_TAG") {
        config.export.tag = val;
    }

    // Logging overrides
    if let Ok(val) = std::env::var("COHORT_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("COHORT_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
}
