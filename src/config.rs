/// Configuration resolution module
///
/// Turns CLI arguments into an immutable `AuditConfig` so the rest of the run
/// never looks at raw arguments.
use crate::cli::CliArgs;
use log::debug;
use std::io::IsTerminal;
use std::path::PathBuf;

/// Fully resolved settings for one audit run
#[derive(Debug, Clone, PartialEq)]
pub struct AuditConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub sample_size: usize,
    pub seed: u64,
    pub preview_limit: usize,
    pub use_colors: bool,
}

/// Build an `AuditConfig` from CLI arguments
pub fn build_audit_config(args: &CliArgs) -> Result<AuditConfig, String> {
    args.validate()?;

    let config = AuditConfig {
        input: args.input.clone(),
        output: args.output.clone(),
        sample_size: args.sample_size,
        seed: args.seed,
        preview_limit: args.preview_limit,
        use_colors: !args.no_color && std::io::stdout().is_terminal(),
    };

    debug!("Resolved audit config: {:?}", config);
    Ok(config)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
