use crate::error::ConfigError;
use core_types::PeriodWindow;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The root configuration structure for the entire application.
///
/// Every section is optional in the TOML file; omitted keys fall back to the defaults below.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub indicators: IndicatorSettings,
    pub display: DisplaySettings,
    pub logging: LoggingSettings,
}

impl Config {
    /// Checks every section for values the analytics layer cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.indicators.validate()
    }
}

/// Windows and thresholds used to derive the headline indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorSettings {
    /// Number of monthly inflation prints compounded into the trailing figure.
    pub trailing_window: usize,
    /// Number of monthly exchange-rate returns in each volatility window.
    pub volatility_window: usize,
    /// Number of months in the exchange-rate moving average.
    pub moving_average_window: usize,
    /// Upper tolerance bound of the inflation target, in percent.
    pub inflation_ceiling: Decimal,
    /// Central inflation target, in percent.
    pub inflation_target: Decimal,
    /// Percentile rank at or above which the exchange rate is flagged "high".
    pub percentile_high: u32,
    /// Percentile rank at or above which the exchange rate is flagged "elevated".
    pub percentile_elevated: u32,
    /// Month offsets for which the exchange-rate change is reported.
    pub fx_lookbacks: Vec<usize>,
    pub status: StatusThresholds,
}

impl Default for IndicatorSettings {
    fn default() -> Self {
        Self {
            trailing_window: 12,
            volatility_window: 6,
            moving_average_window: 6,
            inflation_ceiling: dec!(4.5),
            inflation_target: dec!(3.0),
            percentile_high: 90,
            percentile_elevated: 75,
            fx_lookbacks: vec![1],
            status: StatusThresholds::default(),
        }
    }
}

impl IndicatorSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let windows = [
            ("trailing_window", self.trailing_window),
            ("volatility_window", self.volatility_window),
            ("moving_average_window", self.moving_average_window),
        ];
        for (name, value) in windows {
            if value == 0 {
                return Err(ConfigError::ValidationError(format!(
                    "{name} must be greater than 0"
                )));
            }
        }

        if self.percentile_high > 100 {
            return Err(ConfigError::ValidationError(
                "percentile_high must be at most 100".to_string(),
            ));
        }
        if self.percentile_elevated > self.percentile_high {
            return Err(ConfigError::ValidationError(format!(
                "percentile_elevated ({}) must not exceed percentile_high ({})",
                self.percentile_elevated, self.percentile_high
            )));
        }
        if self.inflation_target > self.inflation_ceiling {
            return Err(ConfigError::ValidationError(format!(
                "inflation_target ({}) must not exceed inflation_ceiling ({})",
                self.inflation_target, self.inflation_ceiling
            )));
        }
        if self.fx_lookbacks.is_empty() {
            return Err(ConfigError::ValidationError(
                "fx_lookbacks must list at least one offset".to_string(),
            ));
        }
        if self.fx_lookbacks.contains(&0) {
            return Err(ConfigError::ValidationError(
                "fx_lookbacks offsets must be greater than 0".to_string(),
            ));
        }
        if self.status.volatility_watch > self.status.volatility_alert {
            return Err(ConfigError::ValidationError(
                "status.volatility_watch must not exceed status.volatility_alert".to_string(),
            ));
        }

        Ok(())
    }
}

/// Breakpoints that turn headline values into card statuses and insights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusThresholds {
    /// Exchange-rate change (percent) above which the card is an alert.
    pub fx_alert_change: Decimal,
    /// Rolling volatility above which the card is an alert.
    pub volatility_alert: Decimal,
    /// Rolling volatility above which the card is trending up.
    pub volatility_watch: Decimal,
    /// Single-month inflation print above which the card is an alert.
    pub monthly_inflation_alert: Decimal,
    /// Policy rate considered restrictive.
    pub tight_policy_rate: Decimal,
}

impl Default for StatusThresholds {
    fn default() -> Self {
        Self {
            fx_alert_change: dec!(2),
            volatility_alert: dec!(3),
            volatility_watch: dec!(2),
            monthly_inflation_alert: dec!(0.5),
            tight_policy_rate: dec!(14),
        }
    }
}

/// Presentation defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    pub period: PeriodWindow,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Filter directive used when `RUST_LOG` is not set (e.g. "info", "analytics=debug").
    pub level: String,
    /// When set, logs are also written to `macrodash.log` in this directory.
    pub directory: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(Config::default().validate().is_ok());
        let s = IndicatorSettings::default();
        assert_eq!(s.trailing_window, 12);
        assert_eq!(s.volatility_window, 6);
        assert_eq!(s.inflation_ceiling, dec!(4.5));
        assert_eq!(s.inflation_target, dec!(3.0));
        assert_eq!((s.percentile_elevated, s.percentile_high), (75, 90));
    }

    #[test]
    fn rejects_zero_window() {
        let s = IndicatorSettings {
            volatility_window: 0,
            ..Default::default()
        };
        let err = s.validate().unwrap_err();
        assert!(err.to_string().contains("volatility_window"));
    }

    #[test]
    fn rejects_inverted_percentile_breakpoints() {
        let s = IndicatorSettings {
            percentile_elevated: 95,
            ..Default::default()
        };
        assert!(matches!(s.validate(), Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn rejects_target_above_ceiling() {
        let s = IndicatorSettings {
            inflation_target: dec!(5),
            ..Default::default()
        };
        assert!(s.validate().is_err());
    }

    #[test]
    fn rejects_empty_or_zero_lookbacks() {
        let empty = IndicatorSettings {
            fx_lookbacks: vec![],
            ..Default::default()
        };
        assert!(empty.validate().is_err());
        let zero = IndicatorSettings {
            fx_lookbacks: vec![1, 0],
            ..Default::default()
        };
        assert!(zero.validate().is_err());
    }
}
