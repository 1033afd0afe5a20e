//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::HarvestConfig;
use crate::domain::errors::HarvestError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into HarvestConfig
/// 4. Applies environment variable overrides (HARVEST_* prefix)
/// 5. Validates the configuration
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
/// use harvest::config::loader::load_config;
///
/// let config = load_config("harvest.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<HarvestConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(HarvestError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        HarvestError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    // Perform environment variable substitution
    let contents = substitute_env_vars(&contents)?;

    // Parse TOML
    let mut config: HarvestConfig = toml::from_str(&contents)
        .map_err(|e| HarvestError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    // Apply environment variable overrides
    apply_env_overrides(&mut config);

    // Validate configuration
    config.validate().map_err(|e| {
        HarvestError::Configuration(format!("Configuration validation failed: {}", e))
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

        // Don't process env vars in comment lines
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
        return Err(HarvestError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using the HARVEST_* prefix
///
/// Environment variables follow the pattern: HARVEST_<SECTION>_<KEY>
/// For example: HARVEST_FIRESTORE_COLLECTION, HARVEST_EXPORT_OUTPUT_DIR
fn apply_env_overrides(config: &mut HarvestConfig) {
    // Application overrides
    if let Ok(val) = std::env::var("HARVEST_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }
    if let Ok(val) = std::env::var("HARVEST_APPLICATION_DRY_RUN") {
        config.application.dry_run = val.parse().unwrap_or(false);
    }

    // Firestore overrides
    if let Ok(val) = std::env::var("HARVEST_FIRESTORE_CREDENTIAL_PATH") {
        config.firestore.credential_path = val;
    }
    if let Ok(val) = std::env::var("HARVEST_FIRESTORE_COLLECTION") {
        config.firestore.collection = val;
    }
    if let Ok(val) = std::env::var("HARVEST_FIRESTORE_BASE_URL") {
        config.firestore.base_url = val;
    }
    if let Ok(val) = std::env::var("HARVEST_FIRESTORE_TIMEOUT_SECONDS") {
        if let Ok(parsed) = val.parse() {
            config.firestore.timeout_seconds = parsed;
        }
    }
    if let Ok(val) = std::env::var("HARVEST_FIRESTORE_PAGE_SIZE") {
        if let Ok(parsed) = val.parse() {
            config.firestore.page_size = parsed;
        }
    }

    // Export overrides
    if let Ok(val) = std::env::var("HARVEST_EXPORT_OUTPUT_DIR") {
        config.export.output_dir = val;
    }
    if let Ok(val) = std::env::var("HARVEST_EXPORT_EXTENSION") {
        config.export.extension = val;
    }

    // Logging overrides
    if let Ok(val) = std::env::var("HARVEST_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("HARVEST_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::Mutex;
    use tempfile::NamedTempFile;

    // Serializes tests that set or observe HARVEST_* override variables
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("/nonexistent/harvest.toml");
        assert!(matches!(result, Err(HarvestError::Configuration(_))));
    }

    #[test]
    fn test_load_config_minimal() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let file = write_config(
            r#"
[firestore]
credential_path = "service-account.json"
"#,
        );

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.firestore.credential_path, "service-account.json");
        assert_eq!(config.firestore.collection, "reflections");
        assert_eq!(config.export.output_dir, "submissions");
        assert_eq!(config.application.log_level, "info");
    }

    #[test]
    fn test_load_config_invalid_toml() {
        let file = write_config("this is not = toml =");
        let result = load_config(file.path());
        assert!(matches!(result, Err(HarvestError::Configuration(_))));
    }

    #[test]
    fn test_load_config_fails_validation() {
        let file = write_config(
            r#"
[firestore]
credential_path = "key.json"
page_size = 0
"#,
        );

        let result = load_config(file.path());
        assert!(matches!(result, Err(HarvestError::Configuration(_))));
    }

    #[test]
    fn test_substitute_env_vars() {
        std::env::set_var("HARVEST_TEST_SUBST_VAR", "substituted");
        let input = "credential_path = \"${HARVEST_TEST_SUBST_VAR}\"";
        let output = substitute_env_vars(input).unwrap();
        assert!(output.contains("substituted"));
        std::env::remove_var("HARVEST_TEST_SUBST_VAR");
    }

    #[test]
    fn test_substitute_env_vars_missing() {
        let input = "credential_path = \"${HARVEST_TEST_DEFINITELY_UNSET}\"";
        let result = substitute_env_vars(input);
        assert!(result.is_err());
    }

    #[test]
    fn test_substitute_env_vars_skips_comments() {
        let input = "# uses ${HARVEST_TEST_DEFINITELY_UNSET}\nkey = \"value\"";
        let output = substitute_env_vars(input).unwrap();
        assert!(output.contains("${HARVEST_TEST_DEFINITELY_UNSET}"));
    }

    #[test]
    fn test_env_override_collection() {
        let _guard = ENV_MUTEX.lock().unwrap();
        std::env::set_var("HARVEST_FIRESTORE_COLLECTION", "essays");
        let file = write_config(
            r#"
[firestore]
credential_path = "key.json"
collection = "reflections"
"#,
        );

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.firestore.collection, "essays");
        std::env::remove_var("HARVEST_FIRESTORE_COLLECTION");
    }
}
