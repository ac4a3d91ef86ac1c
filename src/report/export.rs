//! Sample export to JSON.
//!
//! Every cell is written as text so the file can be diffed against the
//! source spreadsheet by hand.

use crate::sampler::SampledFirm;
use crate::types::{Row, Table};
use serde::Serialize;
use serde_json::{Map, Value};
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// One exported firm with its raw rows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleRecord {
    pub firm: String,
    /// Empty when the firm has no website
    pub website: String,
    pub firm_data: Map<String, Value>,
    pub team_members: Vec<Map<String, Value>>,
}

/// Raw row as a JSON object of text values, keys in column order
pub fn row_to_object(table: &Table, row: &Row) -> Map<String, Value> {
    table.text_fields(row).into_iter().map(|(k, v)| (k, Value::String(v))).collect()
}

/// Build export records for the sampled firms, including all of their members
pub fn build_sample_records(firms: &Table, members: &Table, sample: &[SampledFirm<'_>]) -> Vec<SampleRecord> {
    sample
        .iter()
        .map(|firm| SampleRecord {
            firm: firm.name.clone(),
            website: firm.website.clone().unwrap_or_default(),
            firm_data: row_to_object(firms, firm.row),
            team_members: firm.members.iter().map(|m| row_to_object(members, m.row)).collect(),
        })
        .collect()
}

/// Serialize records as a pretty-printed JSON array
pub fn write_sample_json<W: Write>(records: &[SampleRecord], writer: W) -> io::Result<()> {
    serde_json::to_writer_pretty(writer, records)?;
    Ok(())
}

/// Write the sample file, replacing any existing file at `output_path`.
///
/// The JSON is written to a temporary file in the same directory and renamed
/// into place, so a failed run never leaves a truncated sample behind.
pub fn export_sample_json(records: &[SampleRecord], output_path: &Path) -> io::Result<()> {
    let dir = match output_path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    write_sample_json(records, &mut tmp)?;
    tmp.write_all(b"\n")?;
    tmp.persist(output_path).map_err(|e| e.error)?;

    Ok(())
}

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;
