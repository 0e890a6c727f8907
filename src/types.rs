use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

//==============================================================================
// Cell model
//==============================================================================

/// Raw value of a single sheet cell.
///
/// The importer normalizes every cell into one of these four variants;
/// integral cells are widened to `Number(f64)` so integer- and float-typed
/// spreadsheet cells produce the same output.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Null,
    Text(String),
    Number(f64),
    Date(NaiveDate),
}

impl CellValue {
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Calendar date carried by the cell, if it is date-typed.
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            CellValue::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// Text rendering used for descriptions and references.
    ///
    /// `Null` yields `None`; numbers are printed without a trailing `.0`
    /// when integral, dates as ISO `YYYY-MM-DD`.
    pub fn as_text(&self) -> Option<String> {
        match self {
            CellValue::Null => None,
            CellValue::Text(s) => Some(s.clone()),
            CellValue::Number(n) => Some(format_number(*n)),
            CellValue::Date(d) => Some(d.format("%Y-%m-%d").to_string()),
        }
    }
}

/// Format a number for display, removing an unnecessary `.0` on integers.
fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

/// A rectangular merged cell span, 1-indexed, bounds inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergedRange {
    pub min_row: u32,
    pub min_col: u32,
    pub max_row: u32,
    pub max_col: u32,
}

//==============================================================================
// Parameter records (the per-column output)
//==============================================================================

/// Scalar stored for one date of a parameter history.
///
/// Untagged so `Null` serializes as YAML `null` and the others as plain
/// scalars.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    Null,
    Number(f64),
    Text(String),
}

impl ParamValue {
    pub fn is_null(&self) -> bool {
        matches!(self, ParamValue::Null)
    }
}

impl From<&CellValue> for ParamValue {
    fn from(cell: &CellValue) -> Self {
        match cell {
            CellValue::Null => ParamValue::Null,
            CellValue::Text(s) => ParamValue::Text(s.clone()),
            CellValue::Number(n) => ParamValue::Number(*n),
            // Date-typed data cells are unusual; keep them as ISO text.
            CellValue::Date(d) => ParamValue::Text(d.format("%Y-%m-%d").to_string()),
        }
    }
}

/// One dated entry of a parameter history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValueEntry {
    pub value: ParamValue,
    /// Present only when the sheet has a reference column and the cell on
    /// this row is non-null.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

/// The value produced per data column: a free-text description plus a
/// date-indexed value history.
///
/// `BTreeMap` keyed by ISO date keeps entries date-sorted, which the
/// null-trimming rule relies on.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterRecord {
    pub description: String,
    pub values: BTreeMap<String, ValueEntry>,
}
