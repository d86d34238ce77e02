//! Qualitative labels derived from headline numbers. Pure functions of their inputs and
//! the configured thresholds.

use crate::transforms::Delta;
use configuration::{IndicatorSettings, StatusThresholds};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where the latest exchange rate sits in its own history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PercentileLevel {
    Normal,
    Elevated,
    High,
}

impl fmt::Display for PercentileLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PercentileLevel::Normal => "normal",
            PercentileLevel::Elevated => "elevated",
            PercentileLevel::High => "high",
        };
        f.write_str(label)
    }
}

/// Visual status of a headline card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KpiStatus {
    Up,
    Down,
    Alert,
    /// The underlying change is undefined (zero baseline).
    Neutral,
}

impl fmt::Display for KpiStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            KpiStatus::Up => "up",
            KpiStatus::Down => "down",
            KpiStatus::Alert => "alert",
            KpiStatus::Neutral => "neutral",
        };
        f.write_str(label)
    }
}

/// The headline cards of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Indicator {
    PolicyRate,
    ExchangeRate,
    TrailingInflation,
    FxVolatility,
    MonthlyInflation,
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Indicator::PolicyRate => "Policy rate",
            Indicator::ExchangeRate => "Exchange rate",
            Indicator::TrailingInflation => "Inflation (trailing)",
            Indicator::FxVolatility => "FX volatility",
            Indicator::MonthlyInflation => "Inflation (last month)",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KpiCard {
    pub indicator: Indicator,
    pub status: KpiStatus,
}

/// Colour band of a single monthly inflation print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InflationBand {
    Deflation,
    Normal,
    High,
}

pub fn percentile_level(percentile: u32, settings: &IndicatorSettings) -> PercentileLevel {
    if percentile >= settings.percentile_high {
        PercentileLevel::High
    } else if percentile >= settings.percentile_elevated {
        PercentileLevel::Elevated
    } else {
        PercentileLevel::Normal
    }
}

/// A flat policy rate is flagged: a hold is itself news.
pub fn policy_rate_status(change_pp: Decimal) -> KpiStatus {
    if change_pp > Decimal::ZERO {
        KpiStatus::Up
    } else if change_pp < Decimal::ZERO {
        KpiStatus::Down
    } else {
        KpiStatus::Alert
    }
}

pub fn exchange_rate_status(change: &Delta, thresholds: &StatusThresholds) -> KpiStatus {
    if !change.defined {
        KpiStatus::Neutral
    } else if change.value > thresholds.fx_alert_change {
        KpiStatus::Alert
    } else if change.value > Decimal::ZERO {
        KpiStatus::Up
    } else {
        KpiStatus::Down
    }
}

pub fn trailing_inflation_status(above_ceiling: bool, vs_target: Decimal) -> KpiStatus {
    if above_ceiling {
        KpiStatus::Alert
    } else if vs_target > Decimal::ZERO {
        KpiStatus::Up
    } else {
        KpiStatus::Down
    }
}

pub fn volatility_status(volatility: Decimal, thresholds: &StatusThresholds) -> KpiStatus {
    if volatility > thresholds.volatility_alert {
        KpiStatus::Alert
    } else if volatility > thresholds.volatility_watch {
        KpiStatus::Up
    } else {
        KpiStatus::Down
    }
}

pub fn monthly_inflation_status(value: Decimal, thresholds: &StatusThresholds) -> KpiStatus {
    if value > thresholds.monthly_inflation_alert {
        KpiStatus::Alert
    } else if value > Decimal::ZERO {
        KpiStatus::Up
    } else {
        KpiStatus::Down
    }
}

pub fn inflation_band(value: Decimal, thresholds: &StatusThresholds) -> InflationBand {
    if value < Decimal::ZERO {
        InflationBand::Deflation
    } else if value > thresholds.monthly_inflation_alert {
        InflationBand::High
    } else {
        InflationBand::Normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn percentile_breakpoints_are_inclusive() {
        let s = IndicatorSettings::default();
        assert_eq!(percentile_level(90, &s), PercentileLevel::High);
        assert_eq!(percentile_level(89, &s), PercentileLevel::Elevated);
        assert_eq!(percentile_level(75, &s), PercentileLevel::Elevated);
        assert_eq!(percentile_level(74, &s), PercentileLevel::Normal);
    }

    #[test]
    fn policy_rate_hold_is_flagged() {
        assert_eq!(policy_rate_status(dec!(0.50)), KpiStatus::Up);
        assert_eq!(policy_rate_status(dec!(-0.25)), KpiStatus::Down);
        assert_eq!(policy_rate_status(dec!(0)), KpiStatus::Alert);
    }

    #[test]
    fn exchange_rate_status_thresholds() {
        let t = StatusThresholds::default();
        assert_eq!(exchange_rate_status(&Delta::new(dec!(2.01)), &t), KpiStatus::Alert);
        assert_eq!(exchange_rate_status(&Delta::new(dec!(2.00)), &t), KpiStatus::Up);
        assert_eq!(exchange_rate_status(&Delta::new(dec!(0)), &t), KpiStatus::Down);
        assert_eq!(exchange_rate_status(&Delta::undefined(), &t), KpiStatus::Neutral);
    }

    #[test]
    fn trailing_inflation_status_prefers_ceiling() {
        assert_eq!(trailing_inflation_status(true, dec!(1.8)), KpiStatus::Alert);
        assert_eq!(trailing_inflation_status(false, dec!(1.0)), KpiStatus::Up);
        assert_eq!(trailing_inflation_status(false, dec!(-0.2)), KpiStatus::Down);
    }

    #[test]
    fn volatility_and_monthly_bands() {
        let t = StatusThresholds::default();
        assert_eq!(volatility_status(dec!(3.1), &t), KpiStatus::Alert);
        assert_eq!(volatility_status(dec!(2.5), &t), KpiStatus::Up);
        assert_eq!(volatility_status(dec!(2.0), &t), KpiStatus::Down);
        assert_eq!(monthly_inflation_status(dec!(0.56), &t), KpiStatus::Alert);
        assert_eq!(monthly_inflation_status(dec!(0.33), &t), KpiStatus::Up);
        assert_eq!(monthly_inflation_status(dec!(-0.11), &t), KpiStatus::Down);
        assert_eq!(inflation_band(dec!(-0.11), &t), InflationBand::Deflation);
        assert_eq!(inflation_band(dec!(0.50), &t), InflationBand::Normal);
        assert_eq!(inflation_band(dec!(1.31), &t), InflationBand::High);
    }
}
