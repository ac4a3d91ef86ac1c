/// Spreadsheet loading
///
/// This module handles:
/// - Opening the workbook with calamine (xlsx, xlsm, xlsb, xls, ods)
/// - Converting worksheet ranges into `Table`s
/// - The two-tier sheet policy: required sheets are fatal when missing,
///   optional sheets become `None`
use crate::types::*;
use calamine::{Data, DataType, Range, Reader, Sheets, open_workbook_auto};
use log::{debug, info};
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Anything that can list and read named sheets
pub trait SheetSource {
    /// Names of all sheets in the workbook
    fn sheet_names(&self) -> Vec<String>;

    /// Read one sheet into a table
    fn read_sheet(&mut self, name: &str) -> Result<Table, String>;
}

/// Workbook on disk, read through calamine
pub struct CalamineSource {
    path: PathBuf,
    sheets: Sheets<BufReader<File>>,
}

impl SheetSource for CalamineSource {
    fn sheet_names(&self) -> Vec<String> {
        self.sheets.sheet_names()
    }

    fn read_sheet(&mut self, name: &str) -> Result<Table, String> {
        let range = self
            .sheets
            .worksheet_range(name)
            .map_err(|e| format!("Failed to read sheet '{}' from {}: {}", name, self.path.display(), e))?;
        Ok(range_to_table(&range))
    }
}

/// Open a workbook file. A missing or unreadable file is an error.
pub fn open_workbook(path: &Path) -> Result<CalamineSource, String> {
    if !path.exists() {
        return Err(format!("Input file not found: {}", path.display()));
    }

    let sheets =
        open_workbook_auto(path).map_err(|e| format!("Failed to open workbook {}: {}", path.display(), e))?;

    debug!("Opened workbook {:?} with sheets {:?}", path, sheets.sheet_names());

    Ok(CalamineSource { path: path.to_path_buf(), sheets })
}

/// Load the two required and two optional sheets of an audit workbook
pub fn load_tables<S: SheetSource>(source: &mut S) -> Result<AuditTables, String> {
    let firms = load_required(source, FIRMS_SHEET, &[COL_COMPANY_NAME])?;
    let members = load_required(source, MEMBERS_SHEET, &[COL_VC_FIRM, COL_NAME])?;
    let portfolio = load_optional(source, PORTFOLIO_SHEET)?;
    let metrics = load_optional(source, METRICS_SHEET)?;

    Ok(AuditTables { firms, members, portfolio, metrics })
}

/// Load a sheet that must exist and must carry `columns`
pub fn load_required<S: SheetSource>(source: &mut S, name: &str, columns: &[&str]) -> Result<Table, String> {
    if !has_sheet(source, name) {
        return Err(format!("Required sheet '{}' not found in workbook", name));
    }

    let table = source.read_sheet(name)?;

    if let Some(missing) = columns.iter().find(|c| !table.has_column(c)) {
        return Err(format!(
            "Sheet '{}' is missing required column '{}' (found: {:?})",
            name,
            missing,
            table.columns()
        ));
    }

    debug!("Loaded sheet '{}': {} rows, {} columns", name, table.len(), table.columns().len());
    Ok(table)
}

/// Load a sheet that may be absent. Absence yields `Ok(None)`; a present
/// sheet that cannot be read is still an error.
pub fn load_optional<S: SheetSource>(source: &mut S, name: &str) -> Result<Option<Table>, String> {
    if !has_sheet(source, name) {
        info!("Optional sheet '{}' not present, reporting as unavailable", name);
        return Ok(None);
    }

    let table = source.read_sheet(name)?;
    debug!("Loaded optional sheet '{}': {} rows", name, table.len());
    Ok(Some(table))
}

fn has_sheet<S: SheetSource>(source: &S, name: &str) -> bool {
    source.sheet_names().iter().any(|s| s == name)
}

/// Convert a worksheet range into a table, first row as header
pub fn range_to_table(range: &Range<Data>) -> Table {
    let mut rows = range.rows();

    let columns: Vec<String> = match rows.next() {
        Some(header) => dedupe_headers(header.iter().enumerate().map(|(i, cell)| header_name(cell, i)).collect()),
        None => return Table::default(),
    };

    let data: Vec<Vec<Cell>> = rows.map(|row| row.iter().map(convert_cell).collect()).collect();

    Table::new(columns, data)
}

/// Rename repeated headers to `name.1`, `name.2`, ... so no column is shadowed
pub fn dedupe_headers(names: Vec<String>) -> Vec<String> {
    let mut taken: HashSet<String> = names.iter().cloned().collect();
    let mut seen: HashSet<String> = HashSet::new();
    let mut suffix: HashMap<String, usize> = HashMap::new();

    names
        .into_iter()
        .map(|name| {
            if seen.insert(name.clone()) {
                return name;
            }
            let n = suffix.entry(name.clone()).or_insert(0);
            loop {
                *n += 1;
                let candidate = format!("{}.{}", name, n);
                if taken.insert(candidate.clone()) {
                    seen.insert(candidate.clone());
                    return candidate;
                }
            }
        })
        .collect()
}

fn header_name(cell: &Data, index: usize) -> String {
    let name = convert_cell(cell);
    if name.is_filled() { name.as_text().trim().to_string() } else { format!("Unnamed: {}", index) }
}

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Map a calamine value onto a `Cell`; dates become `YYYY-MM-DD HH:MM:SS`,
/// ISO and error cells keep their displayed text
pub fn convert_cell(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Int(i) => Cell::Int(*i),
        Data::Float(f) => Cell::Float(*f),
        Data::Bool(b) => Cell::Bool(*b),
        Data::DateTime(_) => match data.as_datetime() {
            Some(dt) => Cell::Text(dt.format(DATETIME_FORMAT).to_string()),
            None => Cell::Text(data.to_string()),
        },
        other => Cell::Text(other.to_string()),
    }
}

#[cfg(test)]
#[path = "workbook_test.rs"]
mod workbook_test;
