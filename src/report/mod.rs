//! Report generation module.
//!
//! This module handles:
//! - Coverage and distribution statistics over the member table
//! - Console rendering of the audit report
//! - JSON export of the sampled firms
//!
//! # Module Organization
//!
//! - `stats` - Coverage, members-per-firm and tier distribution
//! - `console` - `ReportWriter` and line formatting
//! - `export` - Sample records and the JSON file writer

mod console;
mod export;
mod stats;

pub use stats::quality_metrics;

pub use console::{ReportContext, ReportWriter};

pub use export::{build_sample_records, export_sample_json};
