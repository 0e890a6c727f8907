use crate::error::{BaremeError, BaremeResult};
use crate::excel::ExcelImporter;
use crate::parser::SheetParser;
use colored::Colorize;
use std::path::PathBuf;

/// Execute the convert command: one worksheet → one YAML parameter tree.
pub fn convert(
    input: PathBuf,
    output: PathBuf,
    sheet: Option<String>,
    verbose: bool,
) -> BaremeResult<()> {
    println!("{}", "📊 Baremes - Excel → YAML".bold().green());
    println!("   Input:  {}", input.display());
    println!("   Output: {}\n", output.display());

    let mut importer = ExcelImporter::open(&input)?;
    let sheet_name = match sheet {
        Some(name) => name,
        None => importer
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| BaremeError::Xlsx("workbook has no sheets".to_string()))?,
    };

    if verbose {
        println!("{}", format!("📖 Reading sheet '{sheet_name}'...").cyan());
    }

    let worksheet = importer.read_sheet(&sheet_name)?;
    let mut parser = SheetParser::new(worksheet);
    parser.parse()?;

    if verbose {
        match (parser.dates().first(), parser.dates().last()) {
            (Some(first), Some(last)) => println!(
                "   {} dated rows ({} → {})",
                parser.number_values(),
                first,
                last
            ),
            _ => println!("   no data rows detected"),
        }
        println!(
            "   {} top-level parameter keys\n",
            parser.parsed_data().len()
        );
    }

    parser.save_as_yaml(&output)?;

    println!("{}", "✅ Conversion complete".bold().green());
    println!("   YAML file: {}\n", output.display());

    Ok(())
}

/// Execute the sheets command: list a workbook's sheet names.
pub fn sheets(input: PathBuf) -> BaremeResult<()> {
    let importer = ExcelImporter::open(&input)?;

    println!(
        "{}",
        format!("📄 Sheets in {}", input.display()).bold().green()
    );
    for name in importer.sheet_names() {
        println!("   {}", name.cyan());
    }

    Ok(())
}
