//! In-memory worksheet grid.
//!
//! The parser never touches the spreadsheet library directly; the importer
//! materializes each worksheet into this plain grid (typed cells plus the
//! sheet's merged-range list) and everything downstream works on it.
//! Rows and columns are 1-indexed, matching spreadsheet addressing.

use crate::types::{CellValue, MergedRange};

const NULL_CELL: CellValue = CellValue::Null;

#[derive(Debug, Clone)]
pub struct Sheet {
    name: String,
    rows: Vec<Vec<CellValue>>,
    merged_ranges: Vec<MergedRange>,
}

impl Sheet {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            rows: Vec::new(),
            merged_ranges: Vec::new(),
        }
    }

    /// Build a sheet from row data (row 1 first). Ragged rows are padded so
    /// the grid is rectangular.
    pub fn from_rows<S: Into<String>>(name: S, mut rows: Vec<Vec<CellValue>>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        for row in &mut rows {
            row.resize(width, CellValue::Null);
        }
        Self {
            name: name.into(),
            rows,
            merged_ranges: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Last row of the grid (0 when the sheet is empty).
    pub fn last_row(&self) -> u32 {
        self.rows.len() as u32
    }

    /// Last column of the grid (0 when the sheet is empty).
    pub fn last_column(&self) -> u32 {
        self.rows.first().map(|r| r.len() as u32).unwrap_or(0)
    }

    /// Cell value at (row, col), 1-indexed. Out-of-range reads are `Null`.
    pub fn value(&self, row: u32, col: u32) -> &CellValue {
        if row == 0 || col == 0 {
            return &NULL_CELL;
        }
        self.rows
            .get(row as usize - 1)
            .and_then(|r| r.get(col as usize - 1))
            .unwrap_or(&NULL_CELL)
    }

    /// Set the cell at (row, col), growing the grid if needed.
    pub fn set_value(&mut self, row: u32, col: u32, value: CellValue) {
        assert!(row > 0 && col > 0, "sheet cells are 1-indexed");
        let row = row as usize - 1;
        let col = col as usize - 1;
        let width = self.rows.first().map(Vec::len).unwrap_or(0).max(col + 1);
        if row >= self.rows.len() {
            self.rows.resize_with(row + 1, Vec::new);
        }
        for r in &mut self.rows {
            if r.len() < width {
                r.resize(width, CellValue::Null);
            }
        }
        self.rows[row][col] = value;
    }

    /// All cells of one column, top to bottom, with their row numbers.
    pub fn column(&self, col: u32) -> impl Iterator<Item = (u32, &CellValue)> {
        (1..=self.last_row()).map(move |row| (row, self.value(row, col)))
    }

    pub fn merged_ranges(&self) -> &[MergedRange] {
        &self.merged_ranges
    }

    pub fn add_merged_range(&mut self, range: MergedRange) {
        self.merged_ranges.push(range);
    }

    /// Remove and return every merged range, leaving the list empty.
    pub fn take_merged_ranges(&mut self) -> Vec<MergedRange> {
        std::mem::take(&mut self.merged_ranges)
    }
}
