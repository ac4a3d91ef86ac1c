// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

mod cli;
mod config;
mod report;
mod sampler;
mod types;
mod ui;
mod workbook;

#[cfg(test)]
mod test_support;

use config::AuditConfig;
use log::info;
use report::{ReportContext, ReportWriter};
use std::io;

fn main() {
    env_logger::init();

    // Parse CLI arguments
    let args = cli::CliArgs::parse_args();

    let config = match config::build_audit_config(&args) {
        Ok(c) => c,
        Err(e) => {
            ui::print_error(&format!("Configuration error: {}", e));
            std::process::exit(1);
        }
    };

    if let Err(e) = run_audit(&config) {
        ui::print_error(&e);
        std::process::exit(1);
    }
}

/// Load, compute, print, sample and export, in that order.
/// Any error aborts before the sample file is written.
fn run_audit(config: &AuditConfig) -> Result<(), String> {
    ui::status(&format!("Loading {}", config.input.display()));

    let mut source = workbook::open_workbook(&config.input)?;
    let tables = workbook::load_tables(&mut source)?;

    info!(
        "Loaded {} firms, {} team members (portfolio: {}, metrics: {})",
        tables.firms.len(),
        tables.members.len(),
        tables.portfolio.is_some(),
        tables.metrics.is_some()
    );

    let metrics = report::quality_metrics(&tables.members);
    let distinct_firms = sampler::distinct_firm_names(&tables.firms).len();

    let mut rng = sampler::seeded_rng(config.seed);
    let sample = sampler::sample_firms(&tables, config.sample_size, &mut rng);
    let records = report::build_sample_records(&tables.firms, &tables.members, &sample);

    let generated_at = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    let ctx = ReportContext {
        tables: &tables,
        metrics: &metrics,
        sample: &sample,
        distinct_firms,
        preview_limit: config.preview_limit,
        generated_at: &generated_at,
    };

    let mut writer = ReportWriter::new(io::stdout(), config.use_colors);
    writer.write_report(&ctx).map_err(|e| format!("Failed to print report: {}", e))?;

    report::export_sample_json(&records, &config.output)
        .map_err(|e| format!("Failed to write sample to {}: {}", config.output.display(), e))?;
    info!("Wrote {} sampled firms to {}", records.len(), config.output.display());

    writer.write_footer(&config.output).map_err(|e| format!("Failed to print report: {}", e))?;

    Ok(())
}
