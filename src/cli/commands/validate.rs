//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the Harvest configuration file.

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // load_config validates on the way in
        let config = match load_config(config_path) {
            Ok(c) => {
                println!("✅ Configuration file loaded successfully");
                c
            }
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Dry Run: {}", config.application.dry_run);
        println!("  Credential Path: {}", config.firestore.credential_path);
        println!("  Collection: {}", config.firestore.collection);
        println!("  Firestore URL: {}", config.firestore.base_url);
        println!("  Page Size: {}", config.firestore.page_size);
        println!("  Output Directory: {}", config.export.output_dir);
        println!("  Extension: .{}", config.export.extension);
        println!();

        // The credential file is read at connect time; warn early when it
        // is already known to be missing.
        if !std::path::Path::new(&config.firestore.credential_path).exists() {
            println!(
                "⚠️  Credential file does not exist yet: {}",
                config.firestore.credential_path
            );
            println!("   The export will fail until it is in place");
            println!();
        }

        Ok(0)
    }
}
