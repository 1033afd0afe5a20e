//! Firestore REST API models
//!
//! Wire types for the Firestore v1 `documents.list` operation and the
//! decoding of a raw document into the domain [`Submission`] type.
//! Firestore wraps every field in a typed value envelope
//! (`stringValue`, `integerValue`, `timestampValue`, ...); only the
//! variants the submission schema uses are modeled here.

use crate::domain::{DocumentId, FirestoreError, Submission};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Response body of the `documents.list` operation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListDocumentsResponse {
    /// Documents in this page; absent when the collection is empty
    #[serde(default)]
    pub documents: Vec<Document>,

    /// Token for the next page; absent or empty on the last page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

/// A single Firestore document
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Full resource name:
    /// `projects/{project}/databases/(default)/documents/{collection}/{id}`
    pub name: String,

    /// Document fields, each wrapped in a value envelope
    #[serde(default)]
    pub fields: HashMap<String, FirestoreValue>,

    /// Server-assigned creation time (RFC 3339)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_time: Option<String>,
}

/// Firestore typed value envelope
///
/// Exactly one of the fields is populated per value on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirestoreValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub string_value: Option<String>,

    /// Integers arrive as decimal strings on the wire
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub integer_value: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp_value: Option<String>,
}

impl FirestoreValue {
    /// Wraps a string value
    pub fn string(s: impl Into<String>) -> Self {
        Self {
            string_value: Some(s.into()),
            ..Default::default()
        }
    }

    /// Wraps a timestamp value
    pub fn timestamp(ts: DateTime<Utc>) -> Self {
        Self {
            timestamp_value: Some(ts.to_rfc3339()),
            ..Default::default()
        }
    }

    /// Reads the value as text
    ///
    /// Accepts both string and integer envelopes; the submission form
    /// stores the student number as either depending on client version.
    pub fn as_text(&self) -> Option<&str> {
        self.string_value
            .as_deref()
            .or(self.integer_value.as_deref())
    }

    /// Reads the value as a UTC timestamp, if present and convertible
    pub fn as_timestamp(&self) -> Option<DateTime<Utc>> {
        self.timestamp_value
            .as_deref()
            .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
            .map(|dt| dt.with_timezone(&Utc))
    }
}

impl Document {
    /// Extracts the store-assigned document id from the resource name
    pub fn document_id(&self) -> Result<DocumentId, FirestoreError> {
        let id = self
            .name
            .rsplit('/')
            .next()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| {
                FirestoreError::InvalidResponse(format!(
                    "Document resource name has no id segment: {}",
                    self.name
                ))
            })?;

        DocumentId::new(id).map_err(FirestoreError::InvalidResponse)
    }

    /// Decodes this document into a domain [`Submission`]
    ///
    /// Missing metadata fields stay absent on the Submission; the domain
    /// accessors resolve them to defaults. Only the `createdAt` field
    /// drives the submission timestamp; a missing or unparseable value
    /// leaves it absent, and the writer substitutes the export time.
    ///
    /// # Errors
    ///
    /// Returns an error only when the document id cannot be derived from
    /// the resource name.
    pub fn to_submission(&self) -> Result<Submission, FirestoreError> {
        let id = self.document_id()?;

        let text_field = |key: &str| {
            self.fields
                .get(key)
                .and_then(FirestoreValue::as_text)
                .map(str::to_string)
        };

        let created_at = self
            .fields
            .get("createdAt")
            .and_then(FirestoreValue::as_timestamp);

        Ok(Submission {
            id,
            student_name: text_field("studentName"),
            student_class: text_field("studentClass"),
            student_number: text_field("studentNumber"),
            project_level: text_field("projectLevel"),
            created_at,
            code: text_field("projectCode"),
        })
    }
}
