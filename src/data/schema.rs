//! Feature type tags.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::table::Table;
use super::value::Value;

/// How a feature is compared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureType {
    /// Real-valued; compared with reference-quantile bins
    Numeric,
    /// Discrete labels; compared by category frequency
    Categorical,
}

impl FeatureType {
    /// Infer the type of a column.
    ///
    /// Numeric when every non-missing cell is a number, or every non-missing cell is a
    /// boolean, or nothing is present at all. Anything else is categorical.
    pub fn infer(values: &[Value]) -> Self {
        let mut numbers = false;
        let mut bools = false;
        for value in values {
            match value {
                Value::Missing => {}
                Value::Number(_) => numbers = true,
                Value::Bool(_) => bools = true,
                Value::Text(_) => return FeatureType::Categorical,
            }
        }
        if numbers && bools {
            FeatureType::Categorical
        } else {
            FeatureType::Numeric
        }
    }

    /// Lowercase name as it appears in reports
    pub fn as_str(&self) -> &'static str {
        match self {
            FeatureType::Numeric => "numeric",
            FeatureType::Categorical => "categorical",
        }
    }
}

impl fmt::Display for FeatureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Feature types of a reference table, in column order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    columns: Vec<(String, FeatureType)>,
}

impl Schema {
    /// Tag every column of `table`
    pub fn infer(table: &Table) -> Self {
        let columns = table
            .columns()
            .map(|(name, values)| (name.to_string(), FeatureType::infer(values)))
            .collect();
        Self { columns }
    }

    /// Type tag of one column
    pub fn feature_type(&self, name: &str) -> Option<FeatureType> {
        self.columns.iter().find(|(n, _)| n == name).map(|(_, t)| *t)
    }

    /// Iterate `(name, type)` in column order
    pub fn iter(&self) -> impl Iterator<Item = (&str, FeatureType)> {
        self.columns.iter().map(|(n, t)| (n.as_str(), *t))
    }

    /// Number of tagged columns
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether no column is tagged
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_numeric() {
        let values = vec![Value::Number(1.0), Value::Missing, Value::Number(2.5)];
        assert_eq!(FeatureType::infer(&values), FeatureType::Numeric);
    }

    #[test]
    fn test_infer_bool_is_numeric() {
        let values = vec![Value::Bool(true), Value::Bool(false)];
        assert_eq!(FeatureType::infer(&values), FeatureType::Numeric);
    }

    #[test]
    fn test_infer_all_missing_is_numeric() {
        assert_eq!(FeatureType::infer(&[Value::Missing, Value::Missing]), FeatureType::Numeric);
    }

    #[test]
    fn test_infer_text_is_categorical() {
        let values = vec![Value::Number(1.0), Value::Text("Two year".into())];
        assert_eq!(FeatureType::infer(&values), FeatureType::Categorical);
    }

    #[test]
    fn test_infer_bool_number_mix_is_categorical() {
        let values = vec![Value::Number(1.0), Value::Bool(true)];
        assert_eq!(FeatureType::infer(&values), FeatureType::Categorical);
    }

    #[test]
    fn test_schema_keeps_column_order() {
        let table = Table::from_rows(vec![vec![
            ("tenure".to_string(), Value::Number(1.0)),
            ("contract".to_string(), Value::Text("One year".into())),
        ]]);
        let schema = Schema::infer(&table);
        let tags: Vec<_> = schema.iter().collect();
        assert_eq!(
            tags,
            vec![("tenure", FeatureType::Numeric), ("contract", FeatureType::Categorical)]
        );
        assert_eq!(schema.feature_type("contract"), Some(FeatureType::Categorical));
        assert_eq!(schema.feature_type("missing"), None);
    }

    #[test]
    fn test_feature_type_serde() {
        assert_eq!(serde_json::to_string(&FeatureType::Numeric).unwrap(), "\"numeric\"");
        assert_eq!(FeatureType::Categorical.to_string(), "categorical");
    }
}
