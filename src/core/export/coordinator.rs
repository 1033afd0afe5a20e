//! Export coordinator - main orchestrator for the export process
//!
//! This module coordinates the export workflow: establishing the
//! Firestore session, listing the collection, and writing one file per
//! valid submission. The pass is strictly sequential; each document is
//! processed independently and a per-document failure never aborts the
//! run.

use crate::adapters::firestore::{self, DocumentSource};
use crate::config::HarvestConfig;
use crate::core::export::summary::{ExportError, ExportErrorType, ExportSummary};
use crate::core::export::writer::SubmissionWriter;
use crate::domain::Result;
use chrono::{DateTime, Local};
use std::sync::Arc;
use std::time::Instant;

/// Export coordinator
pub struct ExportCoordinator {
    source: Arc<dyn DocumentSource>,
    collection: String,
    writer: SubmissionWriter,
    dry_run: bool,
}

impl ExportCoordinator {
    /// Create a new export coordinator
    ///
    /// Establishes the process-wide Firestore session; fails before any
    /// file is written when the credential file is missing or the client
    /// cannot be built.
    pub async fn new(config: &HarvestConfig) -> Result<Self> {
        let client = firestore::connect(&config.firestore).await?;
        Ok(Self::with_source(client, config, Local::now()))
    }

    /// Create a coordinator over an explicit document source
    ///
    /// Used by tests to drive the pipeline from an in-memory source with
    /// a pinned fallback clock.
    pub fn with_source(
        source: Arc<dyn DocumentSource>,
        config: &HarvestConfig,
        fallback_time: DateTime<Local>,
    ) -> Self {
        Self {
            source,
            collection: config.firestore.collection.clone(),
            writer: SubmissionWriter::new(
                &config.export.output_dir,
                &config.export.extension,
                fallback_time,
            ),
            dry_run: config.application.dry_run,
        }
    }

    /// Execute the export
    ///
    /// 1. Ensures the output directory exists
    /// 2. Lists all documents in the configured collection
    /// 3. Per document: decode, skip when the code payload is missing or
    ///    empty, otherwise derive the filename and write the file
    /// 4. Returns a summary of saved / skipped / errored documents
    ///
    /// Listing failures are fatal; per-document decode or write failures
    /// are logged with the document id, recorded in the summary, and the
    /// pass continues.
    pub async fn execute_export(&self) -> Result<ExportSummary> {
        let start_time = Instant::now();
        let mut summary = ExportSummary::new();

        tracing::info!(
            collection = %self.collection,
            output_dir = %self.writer.output_dir().display(),
            dry_run = self.dry_run,
            "Starting export"
        );

        if !self.dry_run {
            self.writer.ensure_output_dir()?;
        }

        let documents = self.source.list_documents(&self.collection).await?;
        summary.total_documents = documents.len();

        for document in &documents {
            let submission = match document.to_submission() {
                Ok(s) => s,
                Err(e) => {
                    tracing::error!(
                        resource_name = %document.name,
                        error = %e,
                        "Failed to decode document"
                    );
                    summary.add_error(ExportError::new(ExportErrorType::Decode, e.to_string()));
                    continue;
                }
            };

            if !submission.has_code() {
                tracing::warn!(
                    document_id = %submission.id,
                    "Submission has no code payload, skipping"
                );
                summary.skipped += 1;
                continue;
            }

            if self.dry_run {
                tracing::info!(
                    document_id = %submission.id,
                    filename = %self.writer.filename(&submission),
                    "Dry run: would save submission"
                );
                summary.saved += 1;
                continue;
            }

            match self.writer.write(&submission) {
                Ok(path) => {
                    tracing::info!(
                        document_id = %submission.id,
                        path = %path.display(),
                        "Saved submission"
                    );
                    summary.saved += 1;
                }
                Err(e) => {
                    tracing::error!(
                        document_id = %submission.id,
                        error = %e,
                        "Failed to save submission"
                    );
                    summary.add_error(
                        ExportError::new(ExportErrorType::Write, e.to_string())
                            .with_document_id(submission.id.as_str()),
                    );
                }
            }
        }

        let summary = summary.with_duration(start_time.elapsed());
        summary.log_summary();
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::firestore::models::{Document, FirestoreValue};
    use crate::config::{FirestoreConfig, HarvestConfig};
    use crate::domain::FirestoreError;
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use std::collections::HashMap;

    struct FakeSource {
        documents: Vec<Document>,
        fail: bool,
    }

    #[async_trait]
    impl DocumentSource for FakeSource {
        async fn list_documents(&self, _collection: &str) -> Result<Vec<Document>> {
            if self.fail {
                return Err(FirestoreError::ConnectionFailed("refused".to_string()).into());
            }
            Ok(self.documents.clone())
        }
    }

    fn wire_document(id: &str, fields: Vec<(&str, FirestoreValue)>) -> Document {
        Document {
            name: format!("projects/p/databases/(default)/documents/reflections/{id}"),
            fields: fields
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect::<HashMap<_, _>>(),
            create_time: None,
        }
    }

    fn config(output_dir: &str, dry_run: bool) -> HarvestConfig {
        let mut config = HarvestConfig {
            application: Default::default(),
            firestore: FirestoreConfig {
                credential_path: "unused.json".to_string(),
                ..Default::default()
            },
            export: Default::default(),
            logging: Default::default(),
        };
        config.export.output_dir = output_dir.to_string();
        config.application.dry_run = dry_run;
        config
    }

    fn coordinator(documents: Vec<Document>, output_dir: &str, dry_run: bool) -> ExportCoordinator {
        let fallback = Local.with_ymd_and_hms(2024, 6, 1, 9, 30, 0).unwrap();
        ExportCoordinator::with_source(
            Arc::new(FakeSource {
                documents,
                fail: false,
            }),
            &config(output_dir, dry_run),
            fallback,
        )
    }

    #[tokio::test]
    async fn test_export_counts_saved_and_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("submissions");
        let created = Utc.with_ymd_and_hms(2024, 1, 1, 3, 0, 0).unwrap();

        let documents = vec![
            // No code payload: skipped, not an error
            wire_document("doc-1", vec![("studentName", FirestoreValue::string("A"))]),
            wire_document(
                "doc-2",
                vec![
                    ("studentName", FirestoreValue::string("Kim Dayoung")),
                    ("createdAt", FirestoreValue::timestamp(created)),
                    ("projectCode", FirestoreValue::string("print(1)\n")),
                ],
            ),
            wire_document(
                "doc-3",
                vec![("projectCode", FirestoreValue::string("print(2)\n"))],
            ),
        ];

        let summary = coordinator(documents, out.to_str().unwrap(), false)
            .execute_export()
            .await
            .unwrap();

        assert_eq!(summary.total_documents, 3);
        assert_eq!(summary.saved, 2);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.error_count(), 0);
        assert!(summary.is_successful());

        let written: Vec<_> = std::fs::read_dir(&out).unwrap().collect();
        assert_eq!(written.len(), 2);
    }

    #[tokio::test]
    async fn test_export_creates_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("fresh/submissions");

        let summary = coordinator(vec![], out.to_str().unwrap(), false)
            .execute_export()
            .await
            .unwrap();

        assert_eq!(summary.total_documents, 0);
        assert!(out.is_dir());
    }

    #[tokio::test]
    async fn test_dry_run_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("submissions");

        let documents = vec![wire_document(
            "doc-1",
            vec![("projectCode", FirestoreValue::string("x = 1\n"))],
        )];

        let summary = coordinator(documents, out.to_str().unwrap(), true)
            .execute_export()
            .await
            .unwrap();

        assert_eq!(summary.saved, 1);
        assert!(!out.exists());
    }

    #[tokio::test]
    async fn test_decode_failure_is_recorded_and_run_continues() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("submissions");

        let mut bad = wire_document("ignored", vec![]);
        bad.name = String::new();
        let documents = vec![
            bad,
            wire_document(
                "doc-2",
                vec![("projectCode", FirestoreValue::string("print(3)\n"))],
            ),
        ];

        let summary = coordinator(documents, out.to_str().unwrap(), false)
            .execute_export()
            .await
            .unwrap();

        assert_eq!(summary.saved, 1);
        assert_eq!(summary.error_count(), 1);
        assert_eq!(summary.errors[0].error_type, ExportErrorType::Decode);
        assert!(!summary.is_successful());
    }

    #[tokio::test]
    async fn test_listing_failure_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let fallback = Local.with_ymd_and_hms(2024, 6, 1, 9, 30, 0).unwrap();
        let coordinator = ExportCoordinator::with_source(
            Arc::new(FakeSource {
                documents: vec![],
                fail: true,
            }),
            &config(dir.path().join("out").to_str().unwrap(), false),
            fallback,
        );

        assert!(coordinator.execute_export().await.is_err());
    }
}
