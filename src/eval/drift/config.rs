//! Configuration for drift checks.

use serde::{Deserialize, Serialize};

use crate::error::{MonitorError, Result};

use super::types::PsiThresholds;

/// Upper bound on `numeric_bins`
pub const MAX_NUMERIC_BINS: usize = 1000;

/// Parameters of a drift check
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriftConfig {
    /// Status boundaries
    pub thresholds: PsiThresholds,
    /// Below this many current rows nothing is compared
    pub min_current_samples: usize,
    /// Number of numeric bins
    pub numeric_bins: usize,
}

impl Default for DriftConfig {
    fn default() -> Self {
        Self { thresholds: PsiThresholds::default(), min_current_samples: 100, numeric_bins: 10 }
    }
}

impl DriftConfig {
    /// Check value ranges
    pub fn validate(&self) -> Result<()> {
        let PsiThresholds { ok, warning } = self.thresholds;
        if !ok.is_finite() || ok < 0.0 {
            return Err(MonitorError::config_value(
                "drift.thresholds.ok",
                format!("{ok} is not a finite, non-negative PSI"),
                "Use the conventional 0.1",
            ));
        }
        if !warning.is_finite() || warning < ok {
            return Err(MonitorError::config_value(
                "drift.thresholds.warning",
                format!("{warning} must be finite and at least the ok threshold ({ok})"),
                "Use the conventional 0.2",
            ));
        }
        if self.numeric_bins == 0 || self.numeric_bins > MAX_NUMERIC_BINS {
            return Err(MonitorError::config_value(
                "drift.numeric_bins",
                format!("{} is outside 1..={MAX_NUMERIC_BINS}", self.numeric_bins),
                "Use 10 bins (deciles)",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = DriftConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.min_current_samples, 100);
        assert_eq!(config.numeric_bins, 10);
    }

    #[test]
    fn test_rejects_inverted_thresholds() {
        let config = DriftConfig {
            thresholds: PsiThresholds { ok: 0.3, warning: 0.2 },
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("drift.thresholds.warning"));
    }

    #[test]
    fn test_rejects_negative_ok() {
        let config = DriftConfig {
            thresholds: PsiThresholds { ok: -0.1, warning: 0.2 },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_bins() {
        let config = DriftConfig { numeric_bins: 0, ..Default::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bins_upper_bound() {
        let config = DriftConfig { numeric_bins: MAX_NUMERIC_BINS, ..Default::default() };
        assert!(config.validate().is_ok());

        let config = DriftConfig { numeric_bins: 1_000_000_000, ..Default::default() };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("drift.numeric_bins"));
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: DriftConfig = serde_yaml::from_str("min_current_samples: 50\n").unwrap();
        assert_eq!(config.min_current_samples, 50);
        assert_eq!(config.numeric_bins, 10);
        assert_eq!(config.thresholds, PsiThresholds::default());
    }
}
