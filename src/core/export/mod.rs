//! Export orchestration
//!
//! This module provides the core export logic for Harvest:
//! - Filename derivation and file writing
//! - Export coordination
//! - Summary and reporting

pub mod coordinator;
pub mod summary;
pub mod writer;

pub use coordinator::ExportCoordinator;
pub use summary::{ExportError, ExportErrorType, ExportSummary};
pub use writer::SubmissionWriter;
