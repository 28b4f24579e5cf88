//! Notebook sanitizing
//!
//! Exported notebooks are stripped of transient cell fields (execution
//! outputs) so that the files on disk are reproducible and diff-friendly.

use serde_json::Value;

use crate::error::{MigrationError, Result};

/// Cell fields cleared on export
pub const TRANSIENT_CELL_FIELDS: &[&str] = &["outputs"];

/// Reset every listed field of every cell to an empty list.
///
/// Cells are never removed or reordered, and a field absent on a cell stays
/// absent.
pub fn clean_notebook_cells(notebook: &mut Value, fields: &[&str]) -> Result<()> {
    let cells = notebook
        .get_mut("cells")
        .ok_or_else(|| MigrationError::MissingField("cells".to_string()))?
        .as_array_mut()
        .ok_or_else(|| MigrationError::InvalidField {
            field: "cells".to_string(),
            expected: "array",
        })?;

    for cell in cells.iter_mut().filter_map(Value::as_object_mut) {
        for field in fields {
            if let Some(value) = cell.get_mut(*field) {
                *value = Value::Array(Vec::new());
            }
        }
    }

    Ok(())
}
