//! Schema command implementation

use std::io::Write;

use serde::Serialize;

use crate::cli::logging::log_to;
use crate::cli::LogLevel;
use crate::config::cli::{apply_schema_overrides, OutputFormat, SchemaArgs};
use crate::data::FeatureType;
use crate::error::Result;
use crate::monitor::load_reference;

use super::{base_config, print_structured};

#[derive(Serialize)]
struct FeatureEntry<'a> {
    name: &'a str,
    #[serde(rename = "type")]
    feature_type: FeatureType,
}

pub fn run_schema<W: Write>(args: SchemaArgs, level: LogLevel, out: &mut W) -> Result<()> {
    let mut config = base_config(args.config.as_deref())?;
    apply_schema_overrides(&mut config, &args);
    config.validate()?;

    let reference = load_reference(&config.reference_data_path, &config.target_column)?;
    let entries: Vec<FeatureEntry<'_>> = reference
        .schema
        .iter()
        .map(|(name, feature_type)| FeatureEntry { name, feature_type })
        .collect();

    match args.format {
        OutputFormat::Text => {
            log_to(
                out,
                level,
                LogLevel::Normal,
                &format!(
                    "Reference schema: {} ({} rows)",
                    config.reference_data_path.display(),
                    reference.table.row_count()
                ),
            );
            for entry in &entries {
                let line = format!("  {:<24} {}", entry.name, entry.feature_type.as_str());
                log_to(out, level, LogLevel::Normal, &line);
            }
        }
        format => print_structured(out, format, &entries)?,
    }
    Ok(())
}
