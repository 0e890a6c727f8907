//! Excel input: .xlsx workbooks → in-memory [`Sheet`](crate::sheet::Sheet) grids.

pub mod importer;

pub use importer::ExcelImporter;
