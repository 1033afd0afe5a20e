//! Submission file writer
//!
//! Derives deterministic filenames from submission metadata and renders
//! the exported file: an encoding declaration, six metadata comment
//! lines, a blank line, then the verbatim code payload.

use crate::domain::{HarvestError, Result, Submission};
use chrono::{DateTime, Local, Utc};
use std::fs;
use std::path::{Path, PathBuf};

/// Timestamp layout used in filenames and the metadata header
const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Sanitizes a student name for use in a filename
///
/// Retains only alphanumeric characters, spaces, hyphens and underscores,
/// trims surrounding whitespace, then replaces spaces with underscores.
///
/// # Examples
///
/// ```
/// use harvest::core::export::writer::sanitize_student_name;
///
/// assert_eq!(sanitize_student_name("Jo@hn Doe!"), "John_Doe");
/// ```
pub fn sanitize_student_name(name: &str) -> String {
    let safe: String = name
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .collect();
    safe.trim().replace(' ', "_")
}

/// Formats the submission timestamp for filenames and the header
///
/// Uses `created_at` converted to local time when present, otherwise the
/// given fallback (the export time, captured once per run so re-runs with
/// a pinned clock are byte-identical).
pub fn timestamp_label(created_at: Option<DateTime<Utc>>, fallback: DateTime<Local>) -> String {
    match created_at {
        Some(ts) => ts.with_timezone(&Local).format(TIMESTAMP_FORMAT).to_string(),
        None => fallback.format(TIMESTAMP_FORMAT).to_string(),
    }
}

/// Writes exported submission files into the output directory
pub struct SubmissionWriter {
    output_dir: PathBuf,
    extension: String,
    fallback_time: DateTime<Local>,
}

impl SubmissionWriter {
    /// Creates a writer for the given output directory
    ///
    /// `fallback_time` is used for submissions without a convertible
    /// `createdAt`; capture it once at the start of the run.
    pub fn new(
        output_dir: impl Into<PathBuf>,
        extension: impl Into<String>,
        fallback_time: DateTime<Local>,
    ) -> Self {
        Self {
            output_dir: output_dir.into(),
            extension: extension.into(),
            fallback_time,
        }
    }

    /// The directory files are written into
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Creates the output directory if it does not exist
    pub fn ensure_output_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.output_dir).map_err(|e| {
            HarvestError::Io(format!(
                "Failed to create output directory {}: {}",
                self.output_dir.display(),
                e
            ))
        })
    }

    /// Derives the output filename for a submission
    ///
    /// Layout: `{class}_{number}_{sanitizedName}_{level}_{timestamp}.{ext}`.
    /// Identical submission data yields an identical name, so re-running
    /// an export overwrites rather than duplicates.
    pub fn filename(&self, submission: &Submission) -> String {
        format!(
            "{}_{}_{}_{}_{}.{}",
            submission.student_class(),
            submission.student_number(),
            sanitize_student_name(submission.student_name()),
            submission.project_level(),
            timestamp_label(submission.created_at, self.fallback_time),
            self.extension
        )
    }

    /// Renders the full file contents for a submission
    ///
    /// The encoding declaration and header keep non-ASCII comments in the
    /// exported code readable when the file is later opened as Python
    /// source.
    pub fn render(&self, submission: &Submission) -> String {
        let code = submission.code.as_deref().unwrap_or_default();
        format!(
            "# -*- coding: utf-8 -*-\n\
             # Student: {}\n\
             # Class: {}\n\
             # Number: {}\n\
             # Level: {}\n\
             # Submitted: {}\n\
             # Document ID: {}\n\
             \n\
             {}",
            submission.student_name(),
            submission.student_class(),
            submission.student_number(),
            submission.project_level(),
            timestamp_label(submission.created_at, self.fallback_time),
            submission.id,
            code
        )
    }

    /// Writes the submission to disk, returning the path written
    ///
    /// Overwrites an existing file with the same derived name.
    pub fn write(&self, submission: &Submission) -> Result<PathBuf> {
        let path = self.output_dir.join(self.filename(submission));
        fs::write(&path, self.render(submission)).map_err(|e| {
            HarvestError::Io(format!("Failed to write {}: {}", path.display(), e))
        })?;
        Ok(path)
    }
}
