//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the Tabscrub configuration file.

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // Loading runs substitution, overrides and validation
        let config = match load_config(config_path) {
            Ok(c) => {
                println!("✅ Configuration is valid");
                c
            }
            Err(e) => {
                println!("❌ Configuration is invalid");
                println!("   Error: {e}");
                return Ok(2);
            }
        };

        let audit = &config.anonymization.audit;
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Email Column: {}", config.anonymization.email_column);
        println!("  Phone Column: {}", config.anonymization.phone_column);
        println!("  Parallel: {}", config.anonymization.parallel);
        println!("  Dry Run: {}", config.anonymization.dry_run);
        if audit.enabled {
            println!("  Audit Log: {}", audit.log_path.display());
        } else {
            println!("  Audit Log: disabled");
        }
        println!("  CSV Delimiter: {:?}", config.csv.delimiter);
        println!("  Generator Output: {}", config.generator.output_dir.display());
        println!("  Generator Seed: {}", config.generator.seed);
        println!(
            "  File Logging: {}",
            if config.logging.local_enabled {
                config.logging.local_path.as_str()
            } else {
                "disabled"
            }
        );
        println!();
        Ok(0)
    }
}
