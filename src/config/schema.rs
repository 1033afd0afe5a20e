//! Configuration schema types
//!
//! This module defines the configuration structure for Harvest. With no
//! configuration beyond the credential path, the `reflections` collection
//! is exported into a local `submissions` directory.

use serde::{Deserialize, Serialize};

/// Main Harvest configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarvestConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Firestore connection and query configuration
    pub firestore: FirestoreConfig,

    /// Export settings
    #[serde(default)]
    pub export: ExportConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl HarvestConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.firestore.validate()?;
        self.export.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Dry run mode (derive filenames but don't write files)
    #[serde(default)]
    pub dry_run: bool,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            dry_run: false,
        }
    }
}

/// Firestore connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FirestoreConfig {
    /// Path to the service credential file (JSON with project_id and token)
    pub credential_path: String,

    /// Collection to export
    #[serde(default = "default_collection")]
    pub collection: String,

    /// Base URL of the Firestore REST API
    ///
    /// Overridable for emulators and tests.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// Page size for document listing (1-1000, the Firestore API cap)
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

impl FirestoreConfig {
    fn validate(&self) -> Result<(), String> {
        if self.credential_path.trim().is_empty() {
            return Err("firestore.credential_path cannot be empty".to_string());
        }
        if self.collection.trim().is_empty() {
            return Err("firestore.collection cannot be empty".to_string());
        }
        if self.base_url.trim().is_empty() {
            return Err("firestore.base_url cannot be empty".to_string());
        }
        if self.timeout_seconds == 0 {
            return Err("firestore.timeout_seconds must be at least 1".to_string());
        }
        if self.page_size == 0 || self.page_size > 1000 {
            return Err(format!(
                "firestore.page_size must be between 1 and 1000, got {}",
                self.page_size
            ));
        }
        Ok(())
    }
}

impl Default for FirestoreConfig {
    fn default() -> Self {
        Self {
            credential_path: String::new(),
            collection: default_collection(),
            base_url: default_base_url(),
            timeout_seconds: default_timeout_seconds(),
            page_size: default_page_size(),
        }
    }
}

/// Export configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory the exported files are written to (created if absent)
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// File extension for exported files, without the leading dot
    #[serde(default = "default_extension")]
    pub extension: String,
}

impl ExportConfig {
    fn validate(&self) -> Result<(), String> {
        if self.output_dir.trim().is_empty() {
            return Err("export.output_dir cannot be empty".to_string());
        }
        if self.extension.trim().is_empty() || self.extension.starts_with('.') {
            return Err(format!(
                "export.extension must be a bare extension without the leading dot, got '{}'",
                self.extension
            ));
        }
        Ok(())
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            extension: default_extension(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_log_path")]
    pub local_path: String,

    /// Log rotation (daily or hourly)
    #[serde(default = "default_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }
        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local_enabled".to_string());
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_log_path(),
            local_rotation: default_rotation(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_collection() -> String {
    "reflections".to_string()
}

fn default_base_url() -> String {
    "https://firestore.googleapis.com/v1".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_page_size() -> u32 {
    300
}

fn default_output_dir() -> String {
    "submissions".to_string()
}

fn default_extension() -> String {
    "py".to_string()
}

fn default_log_path() -> String {
    "logs".to_string()
}

fn default_rotation() -> String {
    "daily".to_string()
}
