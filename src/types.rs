/// Core data structures for spreadsheet tables
///
/// This module defines the cell, row and table types that every other part of
/// vc-audit reads from. Tables are loaded once and never mutated afterwards.

use std::collections::HashMap;
use std::fmt;

/// Sheet holding one row per VC firm
pub const FIRMS_SHEET: &str = "VC Firms";
/// Sheet holding one row per team member
pub const MEMBERS_SHEET: &str = "Team Members";
/// Optional sheet, only its row count is reported
pub const PORTFOLIO_SHEET: &str = "Portfolio Companies";
/// Optional sheet, only its presence is reported
pub const METRICS_SHEET: &str = "Extraction Metrics";

// Firm columns
pub const COL_COMPANY_NAME: &str = "companyName";
pub const COL_WEBSITE_URL: &str = "websiteUrl";

// Team member columns
pub const COL_VC_FIRM: &str = "vcFirm";
pub const COL_NAME: &str = "name";
pub const COL_TITLE: &str = "title";
pub const COL_EMAIL: &str = "email";
pub const COL_LINKEDIN_URL: &str = "linkedinUrl";
pub const COL_PORTFOLIO_COMPANIES: &str = "portfolioCompanies";
pub const COL_DECISION_MAKER_TIER: &str = "decisionMakerTier";

/// A single spreadsheet cell value
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Missing-value marker (blank cell or cell past the end of a short row)
    Empty,
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl Cell {
    /// Text coercion used for reporting, grouping and export
    pub fn as_text(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Text(s) => s.clone(),
            Cell::Int(i) => i.to_string(),
            Cell::Float(f) => format_float(*f),
            Cell::Bool(b) => b.to_string(),
        }
    }

    /// True when the cell holds something other than whitespace
    pub fn is_filled(&self) -> bool {
        match self {
            Cell::Empty => false,
            Cell::Text(s) => !s.trim().is_empty(),
            Cell::Float(f) => !f.is_nan(),
            Cell::Int(_) | Cell::Bool(_) => true,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_text())
    }
}

/// Integral floats keep a trailing ".0" so `3.0` never reads as an integer column
fn format_float(f: f64) -> String {
    if f.is_nan() {
        String::new()
    } else if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e16 {
        format!("{:.1}", f)
    } else {
        format!("{}", f)
    }
}

/// Shared "meaningfully present" predicate: the cell exists and is non-blank after trimming
pub fn is_filled(cell: Option<&Cell>) -> bool {
    cell.is_some_and(Cell::is_filled)
}

/// One table row, cells aligned with the owning table's columns
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    cells: Vec<Cell>,
}

impl Row {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }
}

/// A loaded sheet: header names plus data rows
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Row>,
    index: HashMap<String, usize>,
}

impl Table {
    /// Build a table, padding short rows with `Cell::Empty` and truncating long ones
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        let width = columns.len();
        let rows = rows
            .into_iter()
            .map(|mut cells| {
                cells.resize(width, Cell::Empty);
                Row::new(cells)
            })
            .collect();

        // Loaded sheets have unique headers; for hand-built tables a later duplicate shadows an earlier one
        let index = columns.iter().enumerate().map(|(i, c)| (c.clone(), i)).collect();

        Self { columns, rows, index }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.index.contains_key(column)
    }

    /// Look up a cell by column name; `None` when the column does not exist
    pub fn get<'a>(&self, row: &'a Row, column: &str) -> Option<&'a Cell> {
        self.index.get(column).and_then(|&i| row.cells.get(i))
    }

    /// Text value of a column, or `None` when the column is absent or the cell is not filled
    pub fn text(&self, row: &Row, column: &str) -> Option<String> {
        self.get(row, column).filter(|c| c.is_filled()).map(Cell::as_text)
    }

    pub fn is_filled(&self, row: &Row, column: &str) -> bool {
        is_filled(self.get(row, column))
    }

    /// Rows whose `column` text equals `value`, in table order
    pub fn rows_matching<'a, 's>(&'a self, column: &'s str, value: &'s str) -> impl Iterator<Item = &'a Row> + 's
    where
        'a: 's,
    {
        self.rows.iter().filter(move |row| self.text(row, column).as_deref() == Some(value))
    }

    /// Column name / text value pairs for one row, in column order
    pub fn text_fields(&self, row: &Row) -> Vec<(String, String)> {
        self.columns.iter().zip(row.cells.iter()).map(|(c, v)| (c.clone(), v.as_text())).collect()
    }
}

/// All tables of one audit run
#[derive(Debug, Clone)]
pub struct AuditTables {
    pub firms: Table,
    pub members: Table,
    /// `None` when the sheet is not in the workbook
    pub portfolio: Option<Table>,
    /// `None` when the sheet is not in the workbook
    pub metrics: Option<Table>,
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
