//! CSV loading.

use std::io::Read;
use std::path::Path;

use crate::error::{MonitorError, Result};

use super::table::Table;
use super::value::Value;

/// Raw header and records of a CSV file
#[derive(Debug, Clone)]
pub(crate) struct CsvRecords {
    pub headers: Vec<String>,
    pub rows: Vec<csv::StringRecord>,
}

/// Read every record of a headered CSV.
pub(crate) fn read_records(path: &Path, what: &'static str) -> Result<CsvRecords> {
    if !path.exists() {
        return Err(MonitorError::FileNotFound { what, path: path.to_path_buf() });
    }
    let file = std::fs::File::open(path)
        .map_err(|e| MonitorError::io(format!("opening {}", path.display()), e))?;
    parse_records(path, file)
}

/// Parse CSV from any reader; `path` is used for diagnostics only.
pub(crate) fn parse_records<R: Read>(path: &Path, reader: R) -> Result<CsvRecords> {
    let csv_error = |e: csv::Error| MonitorError::Csv {
        path: path.to_path_buf(),
        message: e.to_string(),
    };

    let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);
    let headers: Vec<String> = rdr
        .headers()
        .map_err(csv_error)?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();
    let rows = rdr
        .records()
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(csv_error)?;

    Ok(CsvRecords { headers, rows })
}

/// Load a headered CSV into a [`Table`] with normalized column names.
pub fn read_csv(path: &Path) -> Result<Table> {
    read_table(path, "CSV file")
}

/// [`read_csv`] with `what` naming the file in diagnostics.
pub(crate) fn read_table(path: &Path, what: &'static str) -> Result<Table> {
    let records = read_records(path, what)?;
    into_table(path, records)
}

pub(crate) fn into_table(path: &Path, records: CsvRecords) -> Result<Table> {
    let CsvRecords { headers, rows } = records;
    let mut columns: Vec<Vec<Value>> =
        headers.iter().map(|_| Vec::with_capacity(rows.len())).collect();
    for row in &rows {
        for (idx, column) in columns.iter_mut().enumerate() {
            column.push(Value::from_csv_cell(row.get(idx).unwrap_or("")));
        }
    }

    let mut table = Table::from_parts(headers, columns, rows.len());
    table.normalize_column_names().map_err(|dup| MonitorError::DuplicateColumn {
        path: path.to_path_buf(),
        column: dup.0,
    })?;
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_csv_normalizes_and_types() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Tenure,Contract Type,Monthly Charges").unwrap();
        writeln!(file, "1,Month-to-month,29.85").unwrap();
        writeln!(file, "34,One year,").unwrap();

        let table = read_csv(file.path()).unwrap();
        assert_eq!(table.row_count(), 2);
        assert_eq!(
            table.column_names().collect::<Vec<_>>(),
            vec!["tenure", "contract_type", "monthly_charges"]
        );
        assert_eq!(table.column("monthly_charges").unwrap()[1], Value::Missing);
        assert_eq!(table.column("contract_type").unwrap()[1], Value::Text("One year".into()));
    }

    #[test]
    fn test_read_csv_missing_file() {
        let err = read_csv(Path::new("/nonexistent/final.csv")).unwrap_err();
        assert!(matches!(err, MonitorError::FileNotFound { .. }));
    }

    #[test]
    fn test_ragged_rows_are_csv_errors() {
        let data = "a,b\n1,2\n3\n";
        let err = parse_records(Path::new("inline.csv"), data.as_bytes()).unwrap_err();
        assert!(matches!(err, MonitorError::Csv { .. }));
    }

    #[test]
    fn test_duplicate_after_normalization() {
        let records = parse_records(Path::new("dup.csv"), "Tenure,tenure\n1,2\n".as_bytes()).unwrap();
        let err = into_table(Path::new("dup.csv"), records).unwrap_err();
        assert!(matches!(err, MonitorError::DuplicateColumn { ref column, .. } if column == "tenure"));
    }

    #[test]
    fn test_header_only_csv() {
        let records = parse_records(Path::new("empty.csv"), "a,b\n".as_bytes()).unwrap();
        let table = into_table(Path::new("empty.csv"), records).unwrap();
        assert_eq!(table.row_count(), 0);
        assert_eq!(table.column_count(), 2);
    }
}
