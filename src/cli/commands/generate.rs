//! Generate command implementation
//!
//! This module implements the `generate` command for producing synthetic
//! test datasets.

use crate::config::load_config_or_default;
use crate::generator::{save, DataGenerator, GenerateRequest};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate command
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Data domain: employee, customer, business, product, transaction, iot, or any other name
    pub domain: String,

    /// Number of records (1-1000)
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// Output format (json, csv, sql)
    #[arg(short, long)]
    pub format: Option<String>,

    /// Directory to save the generated file in
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Random seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the data to stdout instead of saving a file
    #[arg(long)]
    pub stdout: bool,
}

impl GenerateArgs {
    /// Execute the generate command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = match load_config_or_default(config_path) {
            Ok(c) => c.generator,
            Err(e) => {
                eprintln!("Failed to load configuration: {e}");
                return Ok(2);
            }
        };

        let count = self.count.unwrap_or(config.default_count);
        let format = self.format.as_deref().unwrap_or(&config.default_format);
        let request = match GenerateRequest::new(&self.domain, count, format) {
            Ok(r) => r,
            Err(e) => {
                tracing::error!(error = %e, "Invalid generate request");
                eprintln!("Error: {e}");
                return Ok(2);
            }
        };

        let seed = self.seed.unwrap_or(config.seed);
        tracing::info!(
            domain = %request.domain,
            count = request.count,
            format = %request.format,
            seed,
            "Generating test data"
        );

        let data = DataGenerator::new(seed).generate(&request.domain, request.count);

        if self.stdout {
            println!("{}", request.format.render(&data)?);
            return Ok(0);
        }

        let output_dir = self.output_dir.clone().unwrap_or(config.output_dir);
        let path = match save(&data, &request.domain, request.format, &output_dir) {
            Ok(p) => p,
            Err(e) => {
                tracing::error!(error = %e, "Failed to save generated data");
                eprintln!("Error generating test data: {e}");
                return Ok(5);
            }
        };

        println!(
            "✅ Generated {} {} records in {} format",
            request.count,
            request.domain,
            request.format.extension().to_uppercase()
        );
        println!();
        println!("File saved to: {}", path.display());
        println!();
        println!("Preview:");
        println!("{}", data.preview(request.format)?);
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn args(dir: &TempDir, domain: &str, count: usize, format: &str) -> GenerateArgs {
        GenerateArgs {
            domain: domain.to_string(),
            count: Some(count),
            format: Some(format.to_string()),
            output_dir: Some(dir.path().join("data")),
            seed: Some(7),
            stdout: false,
        }
    }

    fn missing_config(dir: &TempDir) -> String {
        dir.path().join("absent.toml").to_string_lossy().to_string()
    }

    #[test]
    fn test_generate_saves_file() {
        let dir = TempDir::new().unwrap();
        let code = args(&dir, "customer", 5, "csv")
            .execute(&missing_config(&dir))
            .unwrap();
        assert_eq!(code, 0);

        let files: Vec<_> = std::fs::read_dir(dir.path().join("data"))
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        assert_eq!(files.len(), 1);
        assert!(files[0].starts_with("customer_data_"));
        assert!(files[0].ends_with(".csv"));
    }

    #[test]
    fn test_generate_rejects_bad_count() {
        let dir = TempDir::new().unwrap();
        let code = args(&dir, "customer", 0, "json")
            .execute(&missing_config(&dir))
            .unwrap();
        assert_eq!(code, 2);
        assert!(!dir.path().join("data").exists());
    }

    #[test]
    fn test_generate_rejects_bad_format() {
        let dir = TempDir::new().unwrap();
        let code = args(&dir, "customer", 3, "xml")
            .execute(&missing_config(&dir))
            .unwrap();
        assert_eq!(code, 2);
    }
}
