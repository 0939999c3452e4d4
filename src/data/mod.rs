//! Tabular data for monitoring runs
//!
//! - `value`: a single cell and its numeric / categorical coercions
//! - `table`: named columns of equal length, column-name normalization
//! - `schema`: feature type tags fixed once from the reference table
//! - `load`: CSV loading
//! - `logs`: prediction log access and JSON payload decoding

mod load;
mod logs;
mod schema;
mod table;
mod value;

pub use load::read_csv;
pub(crate) use load::read_table;
pub use logs::{decode_payload, PayloadError, PredictionLog};
pub use schema::{FeatureType, Schema};
pub use table::{normalize_column_name, DuplicateColumn, Table};
pub use value::{Value, MISSING_CATEGORY};
