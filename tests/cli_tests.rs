//! Binary integration tests.

use assert_cmd::Command;
use predicates::prelude::*;
use rust_xlsxwriter::{ExcelDateTime, Format, Workbook};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_fixture(path: &Path) {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Plafonds").unwrap();

    let date_format = Format::new().set_num_format("yyyy-mm-dd");

    sheet.write_string(0, 0, "date").unwrap();
    sheet.write_string(0, 1, "secu.plafond").unwrap();
    sheet.write_string(1, 1, "Plafond de la sécurité sociale").unwrap();

    let date = ExcelDateTime::from_ymd(2020, 1, 1).unwrap();
    sheet
        .write_datetime_with_format(2, 0, &date, &date_format)
        .unwrap();
    sheet.write_number(2, 1, 3428.0).unwrap();

    workbook.save(path).unwrap();
}

#[test]
fn test_convert_writes_yaml() {
    let dir = TempDir::new().unwrap();
    let xlsx = dir.path().join("plafonds.xlsx");
    let yaml = dir.path().join("plafonds.yaml");
    write_fixture(&xlsx);

    Command::cargo_bin("baremes")
        .unwrap()
        .arg("convert")
        .arg(&xlsx)
        .arg(&yaml)
        .assert()
        .success()
        .stdout(predicate::str::contains("Conversion complete"));

    let content = fs::read_to_string(&yaml).unwrap();
    assert!(content.contains("secu:"));
    assert!(content.contains("plafond:"));
    assert!(content.contains("2020-01-01"));
}

#[test]
fn test_convert_named_sheet_verbose() {
    let dir = TempDir::new().unwrap();
    let xlsx = dir.path().join("plafonds.xlsx");
    let yaml = dir.path().join("plafonds.yaml");
    write_fixture(&xlsx);

    Command::cargo_bin("baremes")
        .unwrap()
        .arg("convert")
        .arg(&xlsx)
        .arg(&yaml)
        .args(["--sheet", "Plafonds", "--verbose"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 dated rows"));
}

#[test]
fn test_convert_unknown_sheet_fails() {
    let dir = TempDir::new().unwrap();
    let xlsx = dir.path().join("plafonds.xlsx");
    write_fixture(&xlsx);

    Command::cargo_bin("baremes")
        .unwrap()
        .arg("convert")
        .arg(&xlsx)
        .arg(dir.path().join("out.yaml"))
        .args(["--sheet", "nope"])
        .assert()
        .failure();
}

#[test]
fn test_convert_missing_input_fails() {
    Command::cargo_bin("baremes")
        .unwrap()
        .arg("convert")
        .arg("does-not-exist.xlsx")
        .arg("out.yaml")
        .assert()
        .failure();
}

#[test]
fn test_sheets_lists_worksheets() {
    let dir = TempDir::new().unwrap();
    let xlsx = dir.path().join("plafonds.xlsx");
    write_fixture(&xlsx);

    Command::cargo_bin("baremes")
        .unwrap()
        .arg("sheets")
        .arg(&xlsx)
        .assert()
        .success()
        .stdout(predicate::str::contains("Plafonds"));
}
