//! Submission domain model
//!
//! This module defines the core Submission type representing one student
//! submission document read from Firestore.

use super::ids::DocumentId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fallback value for missing student metadata fields
pub const UNKNOWN_FIELD: &str = "Unknown";

/// Fallback value for a missing project level
pub const UNKNOWN_LEVEL: &str = "unknown";

/// Represents a single student submission
///
/// A submission carries the student's metadata and the submitted source
/// code. All metadata fields are optional on the wire; accessors resolve
/// missing values to documented defaults so downstream code never deals
/// with absence directly.
///
/// # Examples
///
/// ```
/// use harvest::domain::submission::SubmissionBuilder;
/// use harvest::domain::ids::DocumentId;
///
/// let submission = SubmissionBuilder::new()
///     .id(DocumentId::new("Xb29fKqL0aWn3pQ7rTuV").unwrap())
///     .student_name("John Doe")
///     .student_class("3-2")
///     .student_number("17")
///     .project_level("basic")
///     .code("print('hello')\n")
///     .build()
///     .unwrap();
///
/// assert_eq!(submission.student_name(), "John Doe");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    /// Store-assigned document identifier
    pub id: DocumentId,

    /// Student name, if present on the document
    pub student_name: Option<String>,

    /// Class/group label, if present
    pub student_class: Option<String>,

    /// Student number within the class, if present
    pub student_number: Option<String>,

    /// Project difficulty level, if present
    pub project_level: Option<String>,

    /// Submission timestamp, if present and convertible
    pub created_at: Option<DateTime<Utc>>,

    /// Submitted source code payload
    ///
    /// Required for export; submissions without it are skipped.
    pub code: Option<String>,
}

impl Submission {
    /// Creates a new builder for constructing a Submission
    pub fn builder() -> SubmissionBuilder {
        SubmissionBuilder::default()
    }

    /// Student name, defaulting to `"Unknown"` when absent
    pub fn student_name(&self) -> &str {
        self.student_name.as_deref().unwrap_or(UNKNOWN_FIELD)
    }

    /// Class label, defaulting to `"Unknown"` when absent
    pub fn student_class(&self) -> &str {
        self.student_class.as_deref().unwrap_or(UNKNOWN_FIELD)
    }

    /// Student number, defaulting to `"Unknown"` when absent
    pub fn student_number(&self) -> &str {
        self.student_number.as_deref().unwrap_or(UNKNOWN_FIELD)
    }

    /// Project level, defaulting to `"unknown"` when absent
    pub fn project_level(&self) -> &str {
        self.project_level.as_deref().unwrap_or(UNKNOWN_LEVEL)
    }

    /// True when the submission carries a non-empty code payload
    pub fn has_code(&self) -> bool {
        self.code.as_deref().is_some_and(|c| !c.is_empty())
    }
}

/// Builder for constructing Submission instances
#[derive(Debug, Default)]
pub struct SubmissionBuilder {
    id: Option<DocumentId>,
    student_name: Option<String>,
    student_class: Option<String>,
    student_number: Option<String>,
    project_level: Option<String>,
    created_at: Option<DateTime<Utc>>,
    code: Option<String>,
}

impl SubmissionBuilder {
    /// Creates a new SubmissionBuilder
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the document identifier
    pub fn id(mut self, id: DocumentId) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the student name
    pub fn student_name(mut self, name: impl Into<String>) -> Self {
        self.student_name = Some(name.into());
        self
    }

    /// Sets the class label
    pub fn student_class(mut self, class: impl Into<String>) -> Self {
        self.student_class = Some(class.into());
        self
    }

    /// Sets the student number
    pub fn student_number(mut self, number: impl Into<String>) -> Self {
        self.student_number = Some(number.into());
        self
    }

    /// Sets the project level
    pub fn project_level(mut self, level: impl Into<String>) -> Self {
        self.project_level = Some(level.into());
        self
    }

    /// Sets the submission timestamp
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Sets the submitted code payload
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Builds the Submission
    ///
    /// # Errors
    ///
    /// Returns an error if the document id is missing. All other fields
    /// are optional and resolve to defaults through the accessors.
    pub fn build(self) -> Result<Submission, String> {
        Ok(Submission {
            id: self.id.ok_or("id is required")?,
            student_name: self.student_name,
            student_class: self.student_class,
            student_number: self.student_number,
            project_level: self.project_level,
            created_at: self.created_at,
            code: self.code,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn doc_id(s: &str) -> DocumentId {
        DocumentId::new(s).unwrap()
    }

    #[test]
    fn test_builder_full() {
        let created = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let submission = Submission::builder()
            .id(doc_id("doc-1"))
            .student_name("Kim Dayoung")
            .student_class("3-2")
            .student_number("17")
            .project_level("basic")
            .created_at(created)
            .code("print('hi')\n")
            .build()
            .unwrap();

        assert_eq!(submission.id.as_str(), "doc-1");
        assert_eq!(submission.student_name(), "Kim Dayoung");
        assert_eq!(submission.created_at, Some(created));
        assert!(submission.has_code());
    }

    #[test]
    fn test_builder_requires_id() {
        let result = SubmissionBuilder::new().code("x").build();
        assert!(result.is_err());
    }

    #[test]
    fn test_defaults_for_missing_fields() {
        let submission = Submission::builder().id(doc_id("doc-2")).build().unwrap();

        assert_eq!(submission.student_name(), "Unknown");
        assert_eq!(submission.student_class(), "Unknown");
        assert_eq!(submission.student_number(), "Unknown");
        assert_eq!(submission.project_level(), "unknown");
        assert!(submission.created_at.is_none());
    }

    #[test]
    fn test_has_code_empty_payload() {
        let submission = Submission::builder()
            .id(doc_id("doc-3"))
            .code("")
            .build()
            .unwrap();
        assert!(!submission.has_code());
    }

    #[test]
    fn test_has_code_absent_payload() {
        let submission = Submission::builder().id(doc_id("doc-4")).build().unwrap();
        assert!(!submission.has_code());
    }
}
