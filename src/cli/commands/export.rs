//! Export command implementation
//!
//! This module implements the `export` command for exporting submissions
//! from Firestore to local files.

use crate::config::load_config;
use crate::core::export::ExportCoordinator;
use crate::domain::HarvestError;
use clap::Args;

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Skip confirmation prompt
    #[arg(short, long)]
    pub yes: bool,

    /// Dry run mode - derive filenames without writing files
    #[arg(long)]
    pub dry_run: bool,

    /// Override the collection to export
    #[arg(long)]
    pub collection: Option<String>,

    /// Override the output directory
    #[arg(long)]
    pub output_dir: Option<String>,
}

impl ExportArgs {
    /// Execute the export command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Starting export command");

        // Load configuration
        let mut config = load_config(config_path)?;

        // Apply CLI overrides
        if let Some(collection) = &self.collection {
            tracing::info!(collection = %collection, "Overriding collection from CLI");
            config.firestore.collection = collection.clone();
        }

        if let Some(output_dir) = &self.output_dir {
            tracing::info!(output_dir = %output_dir, "Overriding output directory from CLI");
            config.export.output_dir = output_dir.clone();
        }

        if self.dry_run {
            tracing::info!("Enabling dry-run mode from CLI");
            config.application.dry_run = true;
        }

        // Validate configuration after overrides
        if let Err(e) = config.validate() {
            tracing::error!(error = %e, "Configuration validation failed");
            eprintln!("Configuration validation failed: {e}");
            return Ok(2); // Configuration error exit code
        }

        if config.application.dry_run {
            println!("🔍 DRY RUN MODE - No files will be written");
            println!();
        }

        // Confirmation prompt (unless --yes or dry-run)
        if !self.yes && !config.application.dry_run {
            println!("Export Configuration:");
            println!("  Collection: {}", config.firestore.collection);
            println!("  Output directory: {}", config.export.output_dir);
            println!("  Extension: .{}", config.export.extension);
            println!();
            print!("Proceed with export? [y/N]: ");
            use std::io::{self, Write};
            io::stdout().flush()?;

            let mut input = String::new();
            io::stdin().read_line(&mut input)?;

            if !input.trim().eq_ignore_ascii_case("y") {
                println!("Export cancelled.");
                return Ok(0);
            }
        }

        // Establish the Firestore session
        tracing::info!("Connecting to Firestore");
        let coordinator = match ExportCoordinator::new(&config).await {
            Ok(c) => c,
            Err(HarvestError::CredentialNotFound(path)) => {
                tracing::error!(path = %path, "Credential file not found");
                eprintln!("Credential file not found: {path}");
                eprintln!("  Download a service key from the Firebase console and set");
                eprintln!("  firestore.credential_path in {config_path}");
                return Ok(4); // Connection error exit code
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to initialize export");
                eprintln!("Failed to initialize export: {e}");
                return Ok(4);
            }
        };

        // Execute export
        println!("🚀 Starting export...");
        println!();

        let summary = match coordinator.execute_export().await {
            Ok(s) => s,
            Err(e) => {
                tracing::error!(error = %e, "Export failed");
                eprintln!("Export failed: {e}");
                return Ok(5); // Fatal error exit code
            }
        };

        // Display summary
        println!();
        println!("📊 Export Summary:");
        println!("  Total documents: {}", summary.total_documents);
        println!("  Files saved: {}", summary.saved);
        println!("  Skipped (no code): {}", summary.skipped);
        println!("  Errors: {}", summary.error_count());
        println!("  Duration: {:.2}s", summary.duration.as_secs_f64());
        println!();
        println!(
            "Done: {} files saved, {} errors",
            summary.saved,
            summary.error_count()
        );

        if !summary.errors.is_empty() {
            println!();
            println!("⚠️  Errors encountered:");
            for error in &summary.errors {
                println!(
                    "  - {:?} (document {}): {}",
                    error.error_type,
                    error.document_id.as_deref().unwrap_or("<unknown>"),
                    error.message
                );
            }
        }

        let exit_code = if summary.is_successful() {
            println!("✅ Export completed successfully!");
            0
        } else {
            println!("⚠️  Export completed with errors");
            1 // Partial success
        };

        Ok(exit_code)
    }
}
