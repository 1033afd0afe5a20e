// Harvest - Firestore Submission Export Tool
// Copyright (c) 2025 Harvest Contributors
// Licensed under the MIT License

//! # Harvest - Firestore Submission Export
//!
//! Harvest is a CLI tool that exports code submissions from a Google
//! Cloud Firestore collection into individual UTF-8 text files, one per
//! submission, each prefixed with a plain-text metadata header.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Connecting** to Firestore once per process from a credential file
//! - **Listing** all documents in a collection via the REST API
//! - **Decoding** loosely-typed documents into typed submissions
//! - **Writing** one file per valid submission with a metadata header
//!
//! ## Architecture
//!
//! Harvest follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (export orchestration, file writing)
//! - [`adapters`] - External integrations (Firestore REST API)
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use harvest::config::load_config;
//! use harvest::core::export::ExportCoordinator;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Load configuration
//!     let config = load_config("harvest.toml")?;
//!
//!     // Connect and create the export coordinator
//!     let coordinator = ExportCoordinator::new(&config).await?;
//!
//!     // Execute export
//!     let summary = coordinator.execute_export().await?;
//!
//!     println!("{} files saved, {} errors", summary.saved, summary.error_count());
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Harvest uses the [`domain::HarvestError`] type for all errors. Fatal
//! errors (missing credential file, connection failures) abort the run;
//! per-document failures are logged, counted in the summary, and the
//! pass continues:
//!
//! ```rust,no_run
//! use harvest::domain::HarvestError;
//!
//! fn example() -> Result<(), HarvestError> {
//!     let config = harvest::config::load_config("harvest.toml")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Logging
//!
//! Harvest uses structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! use tracing::{info, warn, error};
//!
//! info!("Starting export");
//! warn!(document_id = "abc123", "Submission has no code payload");
//! error!(error = "timeout", "Export failed");
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
