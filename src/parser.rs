//! Single-sheet parser for barème layouts.
//!
//! The sheets this understands are human-maintained: row 1 holds column
//! markers (`date`, `reference`, ignored markers, or a dotted parameter
//! path), free-text description rows sit between the header and the data,
//! and the data region is bounded by the first and last date-typed cells of
//! the date column. Header cells are frequently merged across columns, so
//! the first step dissolves merges in place.
//!
//! Parsing is a strict linear pipeline:
//! unmerge → headers → dates → references → per-column records → tree.

use crate::error::{BaremeError, BaremeResult};
use crate::sheet::Sheet;
use crate::types::{CellValue, ParamValue, ParameterRecord, ValueEntry};
use crate::writer;
use serde_yaml::{Mapping, Value};
use std::collections::BTreeMap;
use std::path::Path;

/// Row-1 marker of the date column.
const DATE_MARKER: &str = "date";
/// Row-1 marker of the optional reference column.
const REFERENCE_MARKER: &str = "reference";
/// Columns ignored for the moment.
const IGNORED_MARKERS: [&str; 2] = ["date_parution_jo", "notes"];

/// Date-column scan starts here; row 2 is reserved by the layout convention.
const FIRST_SCAN_ROW: u32 = 3;

/// Parses one sheet's layout-encoded parameter history into a nested
/// path-keyed tree of date-to-value records.
///
/// Create one parser per sheet; `parse()` runs the whole pipeline and the
/// resulting tree is read-only afterwards.
pub struct SheetParser {
    sheet: Sheet,
    date_column: Option<u32>,
    reference_column: Option<u32>,
    data_columns: Vec<u32>,
    dates: Vec<String>,
    /// `None` when the sheet has no reference column at all, which disables
    /// reference attachment entirely (distinct from "no references found").
    references: Option<Vec<Option<String>>>,
    first_data_row: Option<u32>,
    last_data_row: Option<u32>,
    parsed_data: Mapping,
}

impl SheetParser {
    pub fn new(sheet: Sheet) -> Self {
        Self {
            sheet,
            date_column: None,
            reference_column: None,
            data_columns: Vec::new(),
            dates: Vec::new(),
            references: None,
            first_data_row: None,
            last_data_row: None,
            parsed_data: Mapping::new(),
        }
    }

    /// Run the full pipeline and return the parameter tree.
    pub fn parse(&mut self) -> BaremeResult<&Mapping> {
        self.unmerge_cells();
        self.parse_headers()?;
        self.parse_dates();
        self.parse_references();

        let mut tree = Mapping::new();
        for column in self.data_columns.clone() {
            // Header cell present but unlabeled: skip the column silently.
            let Some((path, record)) = self.parse_column(column) else {
                continue;
            };
            let value = serde_yaml::to_value(&record)?;
            writer::insert_at_path(&mut tree, &path, value)?;
        }
        self.parsed_data = tree;

        Ok(&self.parsed_data)
    }

    /// Write the parsed tree to `destination` as block-style YAML.
    pub fn save_as_yaml(&self, destination: &Path) -> BaremeResult<()> {
        writer::write_yaml_file(destination, &Value::Mapping(self.parsed_data.clone()))
    }

    /// Dissolve every merged range, copying the anchor (top-left) value
    /// into each other cell of the range. Idempotent: the merged-range list
    /// is empty afterwards.
    fn unmerge_cells(&mut self) {
        for range in self.sheet.take_merged_ranges() {
            let anchor = self.sheet.value(range.min_row, range.min_col).clone();
            for row in range.min_row..=range.max_row {
                for col in range.min_col..=range.max_col {
                    if row == range.min_row && col == range.min_col {
                        continue;
                    }
                    self.sheet.set_value(row, col, anchor.clone());
                }
            }
        }
    }

    /// Classify row-1 cells into date / reference / ignored / data columns.
    ///
    /// Every header that is not a known marker names a parameter, blanks
    /// included (blank-headed columns die later in `parse_column` for lack
    /// of a path). The date column is the one hard requirement.
    fn parse_headers(&mut self) -> BaremeResult<()> {
        for col in 1..=self.sheet.last_column() {
            match self.sheet.value(1, col) {
                CellValue::Text(s) if s == DATE_MARKER => self.date_column = Some(col),
                CellValue::Text(s) if s == REFERENCE_MARKER => self.reference_column = Some(col),
                CellValue::Text(s) if IGNORED_MARKERS.contains(&s.as_str()) => {}
                _ => self.data_columns.push(col),
            }
        }
        if self.date_column.is_none() {
            return Err(BaremeError::Header(format!(
                "sheet '{}' has no 'date' column in row 1",
                self.sheet.name()
            )));
        }
        Ok(())
    }

    /// Locate the data region by scanning the date column from row 3.
    ///
    /// Cells before the first date-typed value are header leftovers and are
    /// skipped. The region closes at the first null/non-date cell after it
    /// opened, or at the sheet's last row when the column never goes blank.
    fn parse_dates(&mut self) {
        let Some(date_column) = self.date_column else {
            return;
        };
        let mut dates = Vec::new();
        let mut first = None;
        let mut last = None;
        for (row, cell) in self
            .sheet
            .column(date_column)
            .skip(FIRST_SCAN_ROW as usize - 1)
        {
            match cell.as_date() {
                Some(date) => {
                    if first.is_none() {
                        first = Some(row);
                    }
                    dates.push(date.format("%Y-%m-%d").to_string());
                }
                None if first.is_some() => {
                    last = Some(row - 1);
                    break;
                }
                None => {}
            }
        }
        if first.is_some() && last.is_none() {
            last = Some(self.sheet.last_row());
        }
        self.first_data_row = first;
        self.last_data_row = last;
        self.dates = dates;
    }

    /// Read one raw reference per data row, positionally aligned with the
    /// date sequence. No reference column at all leaves `references` unset.
    fn parse_references(&mut self) {
        let Some(reference_column) = self.reference_column else {
            return;
        };
        let refs = match (self.first_data_row, self.last_data_row) {
            (Some(first), Some(last)) => (first..=last)
                .map(|row| self.sheet.value(row, reference_column).as_text())
                .collect(),
            _ => Vec::new(),
        };
        self.references = Some(refs);
    }

    /// Join the column's description-region cells (row 2 up to the data
    /// region) with `"; "`, skipping nulls.
    fn build_description(&self, column: u32) -> String {
        let Some(first) = self.first_data_row else {
            return String::new();
        };
        (2..first)
            .filter_map(|row| self.sheet.value(row, column).as_text())
            .collect::<Vec<_>>()
            .join("; ")
    }

    /// Build one parameter record from a data column.
    ///
    /// Returns `None` when the column's row-1 cell is null (no path to file
    /// the record under).
    fn parse_column(&self, column: u32) -> Option<(String, ParameterRecord)> {
        let path = self.sheet.value(1, column).as_text()?;

        let mut values = BTreeMap::new();
        if let Some(first) = self.first_data_row {
            for (offset, date) in self.dates.iter().enumerate() {
                let row = first + offset as u32;
                let value = ParamValue::from(self.sheet.value(row, column));
                let reference = self
                    .references
                    .as_ref()
                    .and_then(|refs| refs.get(offset).cloned().flatten());
                values.insert(date.clone(), ValueEntry { value, reference });
            }
        }

        let record = ParameterRecord {
            description: self.build_description(column),
            values: clean_none_values(values),
        };
        Some((path, record))
    }

    /// Detected date sequence, one ISO string per data row.
    pub fn dates(&self) -> &[String] {
        &self.dates
    }

    /// Number of data rows in the detected region.
    pub fn number_values(&self) -> usize {
        self.dates.len()
    }

    /// First row of the data region, unset when the sheet has no data rows.
    pub fn first_data_row(&self) -> Option<u32> {
        self.first_data_row
    }

    /// Last row of the data region, unset when the sheet has no data rows.
    pub fn last_data_row(&self) -> Option<u32> {
        self.last_data_row
    }

    /// The tree produced by the last `parse()` call.
    pub fn parsed_data(&self) -> &Mapping {
        &self.parsed_data
    }

    pub fn sheet(&self) -> &Sheet {
        &self.sheet
    }
}

/// Trim the leading run of null-valued entries from a date-ordered history.
///
/// Leading nulls mean "not yet in force" and are noise. A null appearing
/// after any non-null value marks a genuine absence during an otherwise
/// active period, so it is kept, as is everything after it.
pub fn clean_none_values(
    values: BTreeMap<String, ValueEntry>,
) -> BTreeMap<String, ValueEntry> {
    values
        .into_iter()
        .skip_while(|(_, entry)| entry.value.is_null())
        .collect()
}
