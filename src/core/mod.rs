//! Core business logic for Harvest.
//!
//! # Modules
//!
//! - [`export`] - Export orchestration, file writing, and reporting
//!
//! # Export Workflow
//!
//! 1. **Connect**: Establish the Firestore session from the credential file
//! 2. **List**: Fetch all documents from the configured collection
//! 3. **Decode**: Resolve each document to a typed submission
//! 4. **Write**: One file per submission with a non-empty code payload
//! 5. **Report**: Summarize saved / skipped / errored documents
//!
//! # Example
//!
//! ```rust,no_run
//! use harvest::config::load_config;
//! use harvest::core::export::ExportCoordinator;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("harvest.toml")?;
//!
//! let coordinator = ExportCoordinator::new(&config).await?;
//! let summary = coordinator.execute_export().await?;
//!
//! println!("Saved: {}", summary.saved);
//! println!("Errors: {}", summary.error_count());
//! # Ok(())
//! # }
//! ```

pub mod export;
