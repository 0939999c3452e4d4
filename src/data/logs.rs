//! Prediction log access.
//!
//! The serving endpoint appends one CSV row per prediction. The request's feature
//! payload is stored as a JSON object in the `input_json` column; labels arrive later
//! through `true_label` / `is_correct`.

use std::io::Read;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value as JsonValue};
use thiserror::Error;

use crate::error::{MonitorError, Result};

use super::load::{parse_records, read_records, CsvRecords};
use super::table::{normalize_column_name, Table};
use super::value::Value;

/// Why one logged payload was not usable
#[derive(Debug, Error)]
pub enum PayloadError {
    /// Not valid JSON
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// Valid JSON, but not an object
    #[error("payload is a JSON {0}, expected an object")]
    NotAnObject(&'static str),
}

/// Decode one logged request payload.
pub fn decode_payload(raw: &str) -> std::result::Result<Map<String, JsonValue>, PayloadError> {
    match serde_json::from_str::<JsonValue>(raw)? {
        JsonValue::Object(map) => Ok(map),
        JsonValue::Null => Err(PayloadError::NotAnObject("null")),
        JsonValue::Bool(_) => Err(PayloadError::NotAnObject("boolean")),
        JsonValue::Number(_) => Err(PayloadError::NotAnObject("number")),
        JsonValue::String(_) => Err(PayloadError::NotAnObject("string")),
        JsonValue::Array(_) => Err(PayloadError::NotAnObject("array")),
    }
}

/// A prediction log loaded into memory
#[derive(Debug, Clone)]
pub struct PredictionLog {
    path: PathBuf,
    records: CsvRecords,
}

impl PredictionLog {
    /// Read a prediction log CSV
    pub fn read(path: &Path) -> Result<Self> {
        let records = read_records(path, "Prediction log")?;
        Ok(Self { path: path.to_path_buf(), records })
    }

    /// Parse a prediction log from any reader; `path` labels diagnostics.
    pub fn parse<R: Read>(path: impl Into<PathBuf>, reader: R) -> Result<Self> {
        let path = path.into();
        let records = parse_records(&path, reader)?;
        Ok(Self { path, records })
    }

    /// Source path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of logged predictions
    pub fn len(&self) -> usize {
        self.records.rows.len()
    }

    /// Whether nothing has been logged
    pub fn is_empty(&self) -> bool {
        self.records.rows.is_empty()
    }

    /// Whether a column exists
    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Raw cells of one column, in log order
    pub fn column(&self, name: &str) -> Option<impl Iterator<Item = &str> + '_> {
        let idx = self.column_index(name)?;
        Some(self.records.rows.iter().map(move |row| row.get(idx).unwrap_or("")))
    }

    /// Fail with [`MonitorError::MissingColumns`] unless every column exists.
    pub fn require_columns(&self, columns: &[&str], hint: &str) -> Result<()> {
        let missing: Vec<String> = columns
            .iter()
            .filter(|c| !self.has_column(c))
            .map(|c| (*c).to_string())
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(MonitorError::MissingColumns {
                path: self.path.clone(),
                columns: missing,
                hint: hint.to_string(),
            })
        }
    }

    /// Build the current distribution from the JSON payloads in `input_column`.
    ///
    /// Records that do not decode to a JSON object are discarded. Keys are normalized
    /// per record the same way as reference column names, so `"Tenure"` and `"tenure"`
    /// land in one column.
    pub fn current_table(&self, input_column: &str) -> Result<Table> {
        self.require_columns(
            &[input_column],
            "Log the JSON request payload of every prediction in this column",
        )?;

        let mut discarded = 0usize;
        let mut rows = Vec::with_capacity(self.len());
        for (line, raw) in self.column(input_column).into_iter().flatten().enumerate() {
            match decode_payload(raw) {
                Ok(map) => rows.push(
                    map.iter()
                        .map(|(k, v)| (normalize_column_name(k), Value::from_json(v)))
                        .collect::<Vec<_>>(),
                ),
                Err(e) => {
                    discarded += 1;
                    tracing::debug!(record = line, error = %e, "discarding prediction log record");
                }
            }
        }

        if discarded > 0 {
            tracing::warn!(
                discarded,
                kept = rows.len(),
                path = %self.path.display(),
                "discarded prediction log records whose payload is not a JSON object"
            );
        }
        if rows.is_empty() {
            return Err(MonitorError::NoValidRecords { path: self.path.clone() });
        }

        Ok(Table::from_rows(rows))
    }

    fn column_index(&self, name: &str) -> Option<usize> {
        self.records.headers.iter().position(|h| h == name)
    }
}
