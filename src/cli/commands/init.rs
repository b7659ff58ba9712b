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
    #[arg(short, long, default_value = "tabscrub.toml")]
    pub output: String,

    /// Include every setting with comments
    #[arg(long)]
    pub with_examples: bool,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing Tabscrub configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2);
        }

        let config_content = if self.with_examples {
            Self::generate_config_with_examples()
        } else {
            Self::generate_minimal_config()
        };

        match fs::write(&self.output, config_content) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your column names", self.output);
                println!("  2. Validate configuration: tabscrub validate-config");
                println!("  3. Run: tabscrub anonymize --input people.csv --output anonymized.csv");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(5)
            }
        }
    }

    /// Generate minimal configuration
    fn generate_minimal_config() -> String {
        r#"# Tabscrub Configuration File

[application]
log_level = "info"

[anonymization]
# Zero-based index or header name
email_column = "email"
phone_column = "phone"

[csv]
delimiter = ","
"#
        .to_string()
    }

    /// Generate configuration with every section documented
    fn generate_config_with_examples() -> String {
        r#"# Tabscrub Configuration File
#
# Values may reference environment variables with ${VAR_NAME}.
# Any setting can also be overridden with TABSCRUB_<SECTION>_<KEY>,
# for example TABSCRUB_ANONYMIZATION_PHONE_COLUMN=2.

[application]
# trace | debug | info | warn | error
log_level = "info"

[anonymization]
# Column hashed with SHA-256 after trimming and lowercasing.
# Zero-based index (email_column = 1) or header name (matched case-insensitively).
email_column = "email"

# Column whose digits are masked with X, keeping the last four.
phone_column = "phone"

# Process records on all cores
parallel = false

# Anonymize and report without writing output
dry_run = false

[anonymization.audit]
enabled = false
log_path = "./audit/anonymization.log"
json_format = true

[csv]
# Single ASCII character, or "tab"
delimiter = ","

[generator]
output_dir = "data"
seed = 42
default_count = 10
# json | csv | sql
default_format = "json"

[logging]
local_enabled = false
local_path = "./logs"
# daily | hourly | never
local_rotation = "daily"
json_format = true
"#
        .to_string()
    }
}
