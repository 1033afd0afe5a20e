//! Configuration management for Harvest.
//!
//! This module provides TOML-based configuration loading, parsing, and
//! validation.
//!
//! # Overview
//!
//! Harvest uses TOML configuration files with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `HARVEST_*` environment variable overrides
//! - Default values for optional settings
//! - Validation on load
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use harvest::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("harvest.toml")?;
//!
//! println!("Collection: {}", config.firestore.collection);
//! println!("Output dir: {}", config.export.output_dir);
//! # Ok(())
//! # }
//! ```
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [firestore]
//! credential_path = "service-account.json"
//! collection = "reflections"
//!
//! [export]
//! output_dir = "submissions"
//! extension = "py"
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::load_config;
pub use schema::{
    ApplicationConfig, ExportConfig, FirestoreConfig, HarvestConfig, LoggingConfig,
};
pub use secret::{secret_string, SecretString, SecretValue};
