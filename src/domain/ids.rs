//! Domain identifier types with validation
//!
//! This module provides a newtype wrapper for Firestore document
//! identifiers. The wrapper ensures type safety and rejects empty values.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Firestore document identifier newtype wrapper
///
/// Represents the store-assigned unique identifier of a submission
/// document (the last path segment of the document resource name).
///
/// # Examples
///
/// ```
/// use harvest::domain::ids::DocumentId;
/// use std::str::FromStr;
///
/// let doc_id = DocumentId::from_str("Xb29fKqL0aWn3pQ7rTuV").unwrap();
/// assert_eq!(doc_id.as_str(), "Xb29fKqL0aWn3pQ7rTuV");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentId(String);

impl DocumentId {
    /// Creates a new DocumentId from a string
    ///
    /// # Errors
    ///
    /// Returns an error if the identifier is empty or whitespace-only
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("Document ID cannot be empty".to_string());
        }
        Ok(Self(id))
    }

    /// Returns the document ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DocumentId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for DocumentId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
