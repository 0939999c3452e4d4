//! Configuration for accuracy tracking.

use serde::{Deserialize, Serialize};

use crate::error::{MonitorError, Result};

/// Parameters of an accuracy check
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccuracyConfig {
    /// Number of most recent labeled rows in the rolling accuracy
    pub rolling_window: usize,
}

impl Default for AccuracyConfig {
    fn default() -> Self {
        Self { rolling_window: 50 }
    }
}

impl AccuracyConfig {
    /// Check value ranges
    pub fn validate(&self) -> Result<()> {
        if self.rolling_window == 0 {
            return Err(MonitorError::config_value(
                "accuracy.rolling_window",
                "must be at least 1",
                "Use 50 rows",
            ));
        }
        Ok(())
    }
}
