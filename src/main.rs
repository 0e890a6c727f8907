use baremes::cli;
use baremes::error::BaremeResult;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "baremes")]
#[command(about = "Convert legal parameter history spreadsheets (barèmes) into YAML parameter trees")]
#[command(long_about = "Baremes - Excel barème sheets → YAML parameter trees

Reads spreadsheets that track legal/fiscal parameter values over time
(tax thresholds, rates, ceilings) and converts one sheet at a time into a
nested YAML document keyed by the dotted paths found in the sheet's column
headers.

SHEET LAYOUT CONVENTION:
  Row 1        - column markers: 'date', 'reference', ignored markers
                 (date_parution_jo, notes), or a dotted parameter path
  Rows 2..     - free-text descriptions, one block per data column
  Data region  - bounded by the first and last date cells of the date column

COMMANDS:
  convert - Convert one worksheet to a YAML parameter tree
  sheets  - List the worksheets of a workbook

EXAMPLES:
  baremes convert ir_baremes.xlsx ir.yaml
  baremes convert ir_baremes.xlsx ir.yaml --sheet 'Seuils IR'
  baremes sheets ir_baremes.xlsx")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(long_about = "Convert one worksheet to a YAML parameter tree.

Parses the sheet's layout (merged headers are dissolved first), locates the
date-bounded data region, and emits a nested YAML mapping: each data column
becomes a {description, values} record filed under its dotted path, with
per-date references attached when the sheet has a 'reference' column.

Leading runs of empty values are trimmed from each parameter history;
gaps between dated values are kept (they mean the parameter was genuinely
absent for a period).

EXAMPLE:
  baremes convert ir_baremes.xlsx ir.yaml --sheet 'Seuils IR'")]
    /// Convert one worksheet of an .xlsx workbook to a YAML parameter tree
    Convert {
        /// Path to Excel file (.xlsx)
        input: PathBuf,

        /// Output YAML file path
        output: PathBuf,

        /// Worksheet to convert (defaults to the first sheet)
        #[arg(short, long)]
        sheet: Option<String>,

        /// Show verbose conversion steps
        #[arg(short, long)]
        verbose: bool,
    },

    /// List the worksheets of an .xlsx workbook
    Sheets {
        /// Path to Excel file (.xlsx)
        input: PathBuf,
    },
}

fn main() -> BaremeResult<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            input,
            output,
            sheet,
            verbose,
        } => cli::convert(input, output, sheet, verbose),

        Commands::Sheets { input } => cli::sheets(input),
    }
}
