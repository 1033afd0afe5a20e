//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "harvest.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing Harvest configuration");
        println!();

        // Check if file already exists
        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        match fs::write(&self.output, Self::generate_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Download a service key from the Firebase console");
                println!("  2. Set firestore.credential_path in {}", self.output);
                println!("  3. Validate configuration: harvest validate-config");
                println!("  4. Run export: harvest export");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(5) // Fatal error exit code
            }
        }
    }

    /// Generate the sample configuration
    fn generate_config() -> String {
        r#"# Harvest Configuration File
# Firestore submission export tool

[application]
# Log level (trace, debug, info, warn, error)
log_level = "info"

# Dry run mode (derive filenames but don't write files)
dry_run = false

[firestore]
# Path to the service credential file (JSON with project_id and token)
credential_path = "service-account.json"

# Collection to export
collection = "reflections"

# Request timeout in seconds
timeout_seconds = 30

# Page size for document listing (1-1000)
page_size = 300

[export]
# Directory the exported files are written to (created if absent)
output_dir = "submissions"

# File extension for exported files, without the leading dot
extension = "py"

[logging]
# Enable local file logging
local_enabled = false

# Local log directory
local_path = "logs"

# Log rotation (daily or hourly)
local_rotation = "daily"
"#
        .to_string()
    }
}
