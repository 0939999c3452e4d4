//! Report persistence.

use std::io::Write;
use std::path::Path;

use serde::Serialize;
use tempfile::NamedTempFile;

use crate::error::{MonitorError, Result};

/// Write `report` to `path` as pretty JSON, replacing any previous report.
///
/// The JSON is rendered in memory, written to a temporary file next to `path` and renamed
/// over it, so readers never observe a partial report. Missing parent directories are
/// created.
pub fn write_report_json<T: Serialize>(path: &Path, report: &T) -> Result<()> {
    let mut json = serde_json::to_string_pretty(report)
        .map_err(|e| MonitorError::Serialization { message: e.to_string() })?;
    json.push('\n');

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)
        .map_err(|e| MonitorError::io(format!("creating {}", dir.display()), e))?;

    let mut tmp = NamedTempFile::new_in(dir)
        .map_err(|e| MonitorError::io(format!("creating temp file in {}", dir.display()), e))?;
    tmp.write_all(json.as_bytes())
        .and_then(|()| tmp.flush())
        .map_err(|e| MonitorError::io(format!("writing {}", path.display()), e))?;
    tmp.persist(path)
        .map_err(|e| MonitorError::io(format!("replacing {}", path.display()), e.error))?;

    tracing::info!(path = %path.display(), "report written");
    Ok(())
}
