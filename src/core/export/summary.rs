//! Export summary and reporting
//!
//! This module defines structures for tracking and reporting export
//! results. Skipped submissions (no code payload) are counted separately
//! from errors.

use std::time::Duration;

/// Summary of an export run
#[derive(Debug, Clone)]
pub struct ExportSummary {
    /// Total number of documents seen in the collection
    pub total_documents: usize,

    /// Number of files written (or that would be written, in dry-run)
    pub saved: usize,

    /// Number of submissions skipped for lacking a code payload
    pub skipped: usize,

    /// Duration of the export
    pub duration: Duration,

    /// Per-document errors encountered during export
    pub errors: Vec<ExportError>,
}

impl ExportSummary {
    /// Create a new empty export summary
    pub fn new() -> Self {
        Self {
            total_documents: 0,
            saved: 0,
            skipped: 0,
            duration: Duration::from_secs(0),
            errors: Vec::new(),
        }
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Add a per-document error
    pub fn add_error(&mut self, error: ExportError) {
        self.errors.push(error);
    }

    /// Number of per-document errors
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Check if the export completed without per-document errors
    ///
    /// Skips do not affect success.
    pub fn is_successful(&self) -> bool {
        self.errors.is_empty()
    }

    /// Log the summary
    pub fn log_summary(&self) {
        tracing::info!(
            total_documents = self.total_documents,
            saved = self.saved,
            skipped = self.skipped,
            errors = self.error_count(),
            duration_secs = self.duration.as_secs(),
            "Export completed"
        );

        for error in &self.errors {
            tracing::warn!(
                error_type = ?error.error_type,
                document_id = error.document_id.as_deref().unwrap_or("<unknown>"),
                message = %error.message,
                "Export error"
            );
        }
    }
}

impl Default for ExportSummary {
    fn default() -> Self {
        Self::new()
    }
}

/// Type of per-document export error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportErrorType {
    /// Document could not be decoded into a submission
    Decode,
    /// File write failed
    Write,
}

/// Per-document export error with context
#[derive(Debug, Clone)]
pub struct ExportError {
    /// Type of error
    pub error_type: ExportErrorType,

    /// Document the error belongs to, when known
    pub document_id: Option<String>,

    /// Error message
    pub message: String,
}

impl ExportError {
    /// Create a new export error
    pub fn new(error_type: ExportErrorType, message: impl Into<String>) -> Self {
        Self {
            error_type,
            document_id: None,
            message: message.into(),
        }
    }

    /// Attach the document id the error belongs to
    pub fn with_document_id(mut self, document_id: impl Into<String>) -> Self {
        self.document_id = Some(document_id.into());
        self
    }
}
