//! Column-oriented table.

use std::fmt;

use super::value::Value;

/// Normalize a column name: trim, lowercase, collapse every run of characters that are
/// neither alphanumeric nor `_` into one `_`, then strip leading/trailing `_`.
///
/// `"Monthly Charges ($)"` becomes `"monthly_charges"`.
pub fn normalize_column_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_separator = false;
    for c in name.trim().chars() {
        if c.is_alphanumeric() || c == '_' {
            out.extend(c.to_lowercase());
            in_separator = false;
        } else if !in_separator {
            out.push('_');
            in_separator = true;
        }
    }
    out.trim_matches('_').to_string()
}

/// Two columns share one normalized name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateColumn(pub String);

impl fmt::Display for DuplicateColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "duplicate column '{}'", self.0)
    }
}

impl std::error::Error for DuplicateColumn {}

/// Named columns of equal length
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    names: Vec<String>,
    columns: Vec<Vec<Value>>,
    rows: usize,
}

impl Table {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from columns. Every column must hold `rows` values.
    pub(crate) fn from_parts(names: Vec<String>, columns: Vec<Vec<Value>>, rows: usize) -> Self {
        debug_assert_eq!(names.len(), columns.len());
        debug_assert!(columns.iter().all(|c| c.len() == rows));
        Self { names, columns, rows }
    }

    /// Build a table from records of `(name, value)` pairs.
    ///
    /// Columns appear in first-seen order; a name absent from a record is `Missing` there.
    /// A name repeated within one record keeps its last value.
    pub fn from_rows<I, R>(rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = (String, Value)>,
    {
        let mut table = Self::new();
        for record in rows {
            for (name, value) in record {
                let idx = match table.index_of(&name) {
                    Some(idx) => idx,
                    None => {
                        table.names.push(name);
                        table.columns.push(vec![Value::Missing; table.rows]);
                        table.columns.len() - 1
                    }
                };
                let column = &mut table.columns[idx];
                if column.len() > table.rows {
                    column[table.rows] = value;
                } else {
                    column.push(value);
                }
            }
            table.rows += 1;
            for column in &mut table.columns {
                column.resize(table.rows, Value::Missing);
            }
        }
        table
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.names.len()
    }

    /// Whether the table has no rows
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Column names in order
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Whether a column exists
    pub fn contains(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }

    /// Values of one column
    pub fn column(&self, name: &str) -> Option<&[Value]> {
        self.index_of(name).map(|idx| self.columns[idx].as_slice())
    }

    /// Iterate `(name, values)` in column order
    pub fn columns(&self) -> impl Iterator<Item = (&str, &[Value])> {
        self.names.iter().map(String::as_str).zip(self.columns.iter().map(Vec::as_slice))
    }

    /// Remove a column, returning its values if it existed
    pub fn drop_column(&mut self, name: &str) -> Option<Vec<Value>> {
        let idx = self.index_of(name)?;
        self.names.remove(idx);
        Some(self.columns.remove(idx))
    }

    /// Rename every column with [`normalize_column_name`].
    pub fn normalize_column_names(&mut self) -> Result<(), DuplicateColumn> {
        let normalized: Vec<String> =
            self.names.iter().map(|n| normalize_column_name(n)).collect();
        for (i, name) in normalized.iter().enumerate() {
            if normalized[..i].contains(name) {
                return Err(DuplicateColumn(name.clone()));
            }
        }
        self.names = normalized;
        Ok(())
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, Value)]) -> Vec<(String, Value)> {
        pairs.iter().map(|(k, v)| ((*k).to_string(), v.clone())).collect()
    }

    #[test]
    fn test_normalize_column_name() {
        assert_eq!(normalize_column_name("  Monthly Charges ($) "), "monthly_charges");
        assert_eq!(normalize_column_name("customerID"), "customerid");
        assert_eq!(normalize_column_name("Contract-Type"), "contract_type");
        assert_eq!(normalize_column_name("already_snake"), "already_snake");
        assert_eq!(normalize_column_name("__x__"), "x");
    }

    #[test]
    fn test_from_rows_union_of_keys() {
        let table = Table::from_rows(vec![
            row(&[("a", Value::Number(1.0))]),
            row(&[("b", Value::Text("x".into())), ("a", Value::Number(2.0))]),
            row(&[]),
        ]);
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.column_names().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(
            table.column("a").unwrap(),
            &[Value::Number(1.0), Value::Number(2.0), Value::Missing]
        );
        assert_eq!(
            table.column("b").unwrap(),
            &[Value::Missing, Value::Text("x".into()), Value::Missing]
        );
    }

    #[test]
    fn test_from_rows_repeated_key_keeps_last() {
        let table = Table::from_rows(vec![row(&[("a", Value::Number(1.0)), ("a", Value::Number(9.0))])]);
        assert_eq!(table.column("a").unwrap(), &[Value::Number(9.0)]);
    }

    #[test]
    fn test_drop_column() {
        let mut table = Table::from_rows(vec![row(&[
            ("churn", Value::Bool(true)),
            ("tenure", Value::Number(3.0)),
        ])]);
        assert!(table.drop_column("churn").is_some());
        assert!(!table.contains("churn"));
        assert!(table.drop_column("churn").is_none());
        assert_eq!(table.column_count(), 1);
    }

    #[test]
    fn test_normalize_detects_duplicates() {
        let mut table = Table::from_rows(vec![row(&[
            ("Tenure", Value::Number(1.0)),
            ("tenure ", Value::Number(2.0)),
        ])]);
        assert_eq!(table.normalize_column_names(), Err(DuplicateColumn("tenure".into())));
    }
}
