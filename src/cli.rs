use crate::sampler::{DEFAULT_SAMPLE_SIZE, DEFAULT_SEED};
use clap::Parser;
use std::path::PathBuf;

/// Workbook audited when no --input is given
pub const DEFAULT_INPUT: &str = "/home/ubuntu/vc-enrichment-web/audit-data.xlsx";
/// Sample file written when no --output is given
pub const DEFAULT_OUTPUT: &str = "/home/ubuntu/vc-enrichment-web/audit_sample.json";
/// Members shown per sampled firm in the console preview
pub const DEFAULT_PREVIEW_LIMIT: usize = 5;

#[derive(Parser, Debug, Clone)]
#[command(name = "vc-audit")]
#[command(about = "Audit VC enrichment data and export a seeded sample for manual verification")]
#[command(version)]
pub struct CliArgs {
    /// Spreadsheet with "VC Firms" and "Team Members" sheets
    #[arg(long, short = 'i', value_name = "PATH", env = "VC_AUDIT_INPUT", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Where to write the JSON sample (overwritten if it exists)
    #[arg(long, short = 'o', value_name = "PATH", env = "VC_AUDIT_OUTPUT", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Number of firms to sample
    #[arg(long, default_value_t = DEFAULT_SAMPLE_SIZE)]
    pub sample_size: usize,

    /// Seed for the sampling RNG
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Team members listed per sampled firm in the console preview
    /// (the JSON sample always contains every member)
    #[arg(long, default_value_t = DEFAULT_PREVIEW_LIMIT)]
    pub preview_limit: usize,

    /// Disable colored check marks
    #[arg(long)]
    pub no_color: bool,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        CliArgs::parse()
    }

    /// Validate argument combinations
    pub fn validate(&self) -> Result<(), String> {
        if self.sample_size == 0 {
            return Err("--sample-size must be at least 1".to_string());
        }

        if self.input == self.output {
            return Err(format!("--output must differ from --input ({})", self.input.display()));
        }

        if self.output.is_dir() {
            return Err(format!("--output points to a directory: {}", self.output.display()));
        }

        Ok(())
    }
}
