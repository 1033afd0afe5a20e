//! Firestore adapter implementation
//!
//! This module provides the integration with the Firestore REST API:
//! the session initializer, the document listing client, and the wire
//! models.

pub mod client;
pub mod models;

pub use client::{connect, DocumentSource, FirestoreClient};
pub use models::{Document, FirestoreValue, ListDocumentsResponse};
