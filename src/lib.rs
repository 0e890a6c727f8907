//! Baremes - legal parameter history extraction
//!
//! This library parses spreadsheet sheets that track legal/fiscal parameter
//! values over time (barèmes: tax thresholds, rates, ceilings) and converts
//! them into nested YAML parameter trees keyed by the dotted paths found in
//! the sheet's column headers.
//!
//! # Features
//!
//! - Tolerant single-sheet layout inference (merged headers, irregular
//!   date column, free-text description rows)
//! - Optional per-date legislative references
//! - Leading empty-value runs trimmed, genuine gaps preserved
//! - Block-style, unicode-safe YAML output
//!
//! # Example
//!
//! ```no_run
//! use baremes::excel::ExcelImporter;
//! use baremes::parser::SheetParser;
//! use std::path::Path;
//!
//! let mut importer = ExcelImporter::open("ir_baremes.xlsx")?;
//! let sheet = importer.read_sheet("Seuils IR")?;
//!
//! let mut parser = SheetParser::new(sheet);
//! parser.parse()?;
//! parser.save_as_yaml(Path::new("ir.yaml"))?;
//! # Ok::<(), baremes::error::BaremeError>(())
//! ```

pub mod cli;
pub mod error;
pub mod excel;
pub mod parser;
pub mod sheet;
pub mod types;
pub mod writer;

// Re-export commonly used types
pub use error::{BaremeError, BaremeResult};
pub use parser::SheetParser;
pub use sheet::Sheet;
pub use types::{CellValue, MergedRange, ParamValue, ParameterRecord, ValueEntry};
