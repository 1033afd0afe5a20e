//! External system integrations for Harvest.
//!
//! This module provides adapters for integrating with external systems:
//!
//! - [`firestore`] - Firestore REST API integration
//!
//! # Design Pattern
//!
//! Adapters isolate external dependencies behind trait seams so the core
//! pipeline can be exercised with in-memory implementations. The
//! [`firestore::DocumentSource`] trait is the seam the export coordinator
//! consumes.
//!
//! ```rust,no_run
//! use harvest::adapters::firestore;
//! use harvest::config::FirestoreConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = FirestoreConfig {
//!     credential_path: "service-account.json".to_string(),
//!     ..Default::default()
//! };
//!
//! // Connects once per process; later calls return the same handle
//! let client = firestore::connect(&config).await?;
//! # Ok(())
//! # }
//! ```

pub mod firestore;
