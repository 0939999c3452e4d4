//! Cell values and their coercions.

use std::borrow::Cow;

/// Label used for missing values in categorical comparisons
pub const MISSING_CATEGORY: &str = "MISSING";

/// Tokens read as a missing cell in CSV input
const NA_TOKENS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-NaN", "-nan", "<NA>", "N/A", "NA", "NULL", "NaN", "None",
    "n/a", "nan", "null",
];

/// A single cell of a tabular dataset
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absent or explicitly null
    Missing,
    /// Boolean flag
    Bool(bool),
    /// Real number
    Number(f64),
    /// Free text / category label
    Text(String),
}

impl Value {
    /// Parse a raw CSV cell.
    pub fn from_csv_cell(raw: &str) -> Self {
        let cell = raw.trim();
        if NA_TOKENS.contains(&cell) {
            return Value::Missing;
        }
        if cell.eq_ignore_ascii_case("true") {
            return Value::Bool(true);
        }
        if cell.eq_ignore_ascii_case("false") {
            return Value::Bool(false);
        }
        match cell.parse::<f64>() {
            Ok(n) => Value::Number(n),
            Err(_) => Value::Text(cell.to_string()),
        }
    }

    /// Convert a decoded JSON value. Nested arrays and objects keep their compact JSON text.
    pub fn from_json(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Missing,
            serde_json::Value::Bool(b) => Value::Bool(*b),
            serde_json::Value::Number(n) => n.as_f64().map_or(Value::Missing, Value::Number),
            serde_json::Value::String(s) => Value::Text(s.clone()),
            other => Value::Text(other.to_string()),
        }
    }

    /// Whether this cell is missing
    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }

    /// Numeric coercion; anything that cannot be read as a finite number is `None`.
    pub fn as_number(&self) -> Option<f64> {
        let n = match self {
            Value::Missing => return None,
            Value::Bool(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            Value::Number(n) => *n,
            Value::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        n.is_finite().then_some(n)
    }

    /// Label used when the value is compared as a category.
    pub fn category_label(&self) -> Cow<'_, str> {
        match self {
            Value::Missing => Cow::Borrowed(MISSING_CATEGORY),
            Value::Bool(true) => Cow::Borrowed("true"),
            Value::Bool(false) => Cow::Borrowed("false"),
            Value::Number(n) => Cow::Owned(n.to_string()),
            Value::Text(s) => Cow::Borrowed(s.as_str()),
        }
    }
}
