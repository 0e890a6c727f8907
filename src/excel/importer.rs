//! Workbook reader built on calamine.
//!
//! Materializes worksheets as plain [`Sheet`] grids so the parser never
//! depends on the spreadsheet library. Cell values are normalized into the
//! [`CellValue`] variants here: integral cells widen to `Number(f64)` and
//! date-formatted cells surface as calendar dates (calamine `dates`
//! feature).

use crate::error::{BaremeError, BaremeResult};
use crate::sheet::Sheet;
use crate::types::{CellValue, MergedRange};
use calamine::{open_workbook, Data, DataType, Reader, Xlsx};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub struct ExcelImporter {
    workbook: Xlsx<BufReader<File>>,
}

impl ExcelImporter {
    /// Open an .xlsx workbook and load its merged-region index.
    pub fn open<P: AsRef<Path>>(path: P) -> BaremeResult<Self> {
        let path = path.as_ref();
        let mut workbook: Xlsx<_> = open_workbook(path).map_err(|e| {
            BaremeError::Xlsx(format!("failed to open {}: {}", path.display(), e))
        })?;
        workbook
            .load_merged_regions()
            .map_err(|e| BaremeError::Xlsx(format!("failed to load merged regions: {e}")))?;
        Ok(Self { workbook })
    }

    pub fn sheet_names(&self) -> Vec<String> {
        self.workbook.sheet_names().to_vec()
    }

    /// Read one worksheet into a grid, preserving absolute coordinates
    /// (cell A1 is row 1, column 1 even when the used range starts lower).
    pub fn read_sheet(&mut self, name: &str) -> BaremeResult<Sheet> {
        let range = self
            .workbook
            .worksheet_range(name)
            .map_err(|e| BaremeError::Xlsx(format!("failed to read sheet '{name}': {e}")))?;

        let mut sheet = Sheet::new(name);
        if let Some((end_row, end_col)) = range.end() {
            for row in 0..=end_row {
                for col in 0..=end_col {
                    let value = range
                        .get_value((row, col))
                        .map(convert_cell)
                        .unwrap_or(CellValue::Null);
                    if !value.is_null() {
                        sheet.set_value(row + 1, col + 1, value);
                    }
                }
            }
        }

        for (_, _, region) in self.workbook.merged_regions_by_sheet(name) {
            sheet.add_merged_range(MergedRange {
                min_row: region.start.0 + 1,
                min_col: region.start.1 + 1,
                max_row: region.end.0 + 1,
                max_col: region.end.1 + 1,
            });
        }

        Ok(sheet)
    }
}

/// Normalize a calamine cell into a [`CellValue`].
fn convert_cell(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Null,
        Data::String(s) if s.trim().is_empty() => CellValue::Null,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Bool(b) => CellValue::Text(b.to_string()),
        Data::DateTime(_) => data.as_date().map(CellValue::Date).unwrap_or(CellValue::Null),
        Data::DateTimeIso(s) => data
            .as_date()
            .map(CellValue::Date)
            .unwrap_or_else(|| CellValue::Text(s.clone())),
        Data::DurationIso(s) => CellValue::Text(s.clone()),
        // Error cells behave like blanks for our purposes.
        Data::Error(_) => CellValue::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::{ExcelDateTime, ExcelDateTimeType};
    use chrono::NaiveDate;

    #[test]
    fn test_convert_cell_scalars() {
        assert_eq!(convert_cell(&Data::Empty), CellValue::Null);
        assert_eq!(
            convert_cell(&Data::String("abc".to_string())),
            CellValue::Text("abc".to_string())
        );
        assert_eq!(convert_cell(&Data::String("  ".to_string())), CellValue::Null);
        assert_eq!(convert_cell(&Data::Int(3)), CellValue::Number(3.0));
        assert_eq!(convert_cell(&Data::Float(1.5)), CellValue::Number(1.5));
        assert_eq!(
            convert_cell(&Data::Bool(true)),
            CellValue::Text("true".to_string())
        );
    }

    #[test]
    fn test_convert_cell_dates() {
        // Excel serial 36526 = 2000-01-01.
        let dt = ExcelDateTime::new(36526.0, ExcelDateTimeType::DateTime, false);
        assert_eq!(
            convert_cell(&Data::DateTime(dt)),
            CellValue::Date(NaiveDate::from_ymd_opt(2000, 1, 1).unwrap())
        );
        assert_eq!(
            convert_cell(&Data::DateTimeIso("2024-01-15".to_string())),
            CellValue::Date(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap())
        );
    }

    #[test]
    fn test_open_missing_file_errors() {
        let result = ExcelImporter::open("does-not-exist.xlsx");
        assert!(matches!(result, Err(BaremeError::Xlsx(_))));
    }
}
