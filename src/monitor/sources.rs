//! Input loading for drift checks.

use std::path::Path;

use crate::data::{normalize_column_name, read_table, PredictionLog, Schema, Table};
use crate::error::Result;

/// Reference (training) distribution with its schema fixed
#[derive(Debug, Clone)]
pub struct ReferenceData {
    pub table: Table,
    pub schema: Schema,
}

/// Load the reference dataset, drop `target_column` when present and infer the schema.
pub fn load_reference(path: &Path, target_column: &str) -> Result<ReferenceData> {
    let mut table = read_table(path, "Reference data")?;
    if table.drop_column(&normalize_column_name(target_column)).is_some() {
        tracing::debug!(target_column, "dropped target column from reference data");
    }
    let schema = Schema::infer(&table);
    tracing::info!(
        path = %path.display(),
        rows = table.row_count(),
        features = schema.len(),
        "loaded reference data"
    );
    Ok(ReferenceData { table, schema })
}

/// Build the current distribution from the payloads logged in `input_column`.
pub fn load_current(path: &Path, input_column: &str) -> Result<Table> {
    let log = PredictionLog::read(path)?;
    let table = log.current_table(input_column)?;
    tracing::info!(
        path = %path.display(),
        logged = log.len(),
        rows = table.row_count(),
        "loaded current inputs"
    );
    Ok(table)
}
