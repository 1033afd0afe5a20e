//! Domain models and types for Harvest.
//!
//! This module contains the core domain models, types, and business rules.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`DocumentId`])
//! - **Domain models** ([`Submission`])
//! - **Error types** ([`HarvestError`], [`FirestoreError`])
//! - **Result type alias** ([`Result`])
//!
//! # Type Safety
//!
//! Harvest uses the newtype pattern for identifiers:
//!
//! ```rust
//! use harvest::domain::DocumentId;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let doc_id = DocumentId::new("Xb29fKqL0aWn3pQ7rTuV")?;
//! # Ok(())
//! # }
//! ```
//!
//! # Builder Pattern
//!
//! The [`Submission`] model uses a builder for construction:
//!
//! ```rust
//! use harvest::domain::{DocumentId, Submission};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let submission = Submission::builder()
//!     .id(DocumentId::new("doc-123")?)
//!     .student_name("John Doe")
//!     .code("print('hello')\n")
//!     .build()?;
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod ids;
pub mod result;
pub mod submission;

// Re-export commonly used types for convenience
pub use errors::{FirestoreError, HarvestError};
pub use ids::DocumentId;
pub use result::Result;
pub use submission::{Submission, SubmissionBuilder};
