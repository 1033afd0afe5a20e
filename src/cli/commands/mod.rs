//! CLI command implementations
//!
//! Each submodule implements one subcommand:
//! - [`export`] - Run the Firestore export
//! - [`validate`] - Validate the configuration file
//! - [`init`] - Generate a sample configuration file

pub mod export;
pub mod init;
pub mod validate;
