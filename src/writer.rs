//! Parameter-tree assembly and YAML output.
//!
//! Data columns carry dot-delimited paths ("impot.bareme.seuil"); each
//! parsed record is inserted into a nested `serde_yaml` mapping at that
//! path. serde_yaml emits block style with unicode preserved, which is the
//! output format we want.

use crate::error::{BaremeError, BaremeResult};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Insert `record` into `tree` at the dot-delimited `path`, creating
/// intermediate mappings as needed. Sibling paths sharing a prefix merge
/// into the same subtree.
///
/// Fails when an intermediate segment already holds a non-mapping value.
pub fn insert_at_path(tree: &mut Mapping, path: &str, record: Value) -> BaremeResult<()> {
    let parts: Vec<&str> = path.split('.').collect();
    insert_recursive(tree, path, &parts, record)
}

fn insert_recursive(
    map: &mut Mapping,
    full_path: &str,
    parts: &[&str],
    record: Value,
) -> BaremeResult<()> {
    let key = Value::String(parts[0].to_string());
    if parts.len() == 1 {
        map.insert(key, record);
        return Ok(());
    }
    let entry = map
        .entry(key)
        .or_insert_with(|| Value::Mapping(Mapping::new()));
    match entry {
        Value::Mapping(inner) => insert_recursive(inner, full_path, &parts[1..], record),
        _ => Err(BaremeError::PathConflict(format!(
            "segment '{}' of path '{}' already holds a non-mapping value",
            parts[0], full_path
        ))),
    }
}

/// Write the parameter tree to `path` as block-style YAML, overwriting any
/// existing content. Write failures propagate unmodified.
pub fn write_yaml_file(path: &Path, tree: &Value) -> BaremeResult<()> {
    let content = serde_yaml::to_string(tree)?;
    fs::write(path, content)?;
    Ok(())
}
