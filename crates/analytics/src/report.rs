use crate::classify::{KpiCard, PercentileLevel};
use crate::insights::Insight;
use crate::transforms::{Delta, PercentileBands, RateCycle};
use core_types::{Month, Series};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A standardized summary of every headline indicator.
///
/// The snapshot is always computed over the full history of the source series; the
/// selected period window only affects projections. It is never mutated once built; a new
/// snapshot replaces it whenever the source series change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiSnapshot {
    pub policy_rate: PolicyRateKpi,
    pub exchange_rate: ExchangeRateKpi,
    pub inflation: InflationKpi,
    pub cards: Vec<KpiCard>,
    pub insights: Vec<Insight>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyRateKpi {
    pub month: Month,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub latest: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub previous: Decimal,
    /// Latest minus previous, in percentage points.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub change_pp: Decimal,
    pub cycle: Option<RateCycle>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRateKpi {
    pub month: Month,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub latest: Decimal,
    /// The value one period before `latest`.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub previous: Decimal,
    /// Percentage change for each configured lookback, in configuration order.
    pub changes: Vec<LookbackChange>,
    /// Latest rolling volatility of monthly returns.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub volatility: Decimal,
    /// Latest moving average of the rate.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub moving_average: Decimal,
    /// Inclusive percentile rank of `latest` over the whole history.
    pub percentile: u32,
    pub level: PercentileLevel,
    pub bands: PercentileBands,
}

impl ExchangeRateKpi {
    /// The change over exactly `months` periods, if that lookback was configured.
    pub fn change(&self, months: usize) -> Option<&Delta> {
        self.changes
            .iter()
            .find(|c| c.months == months)
            .map(|c| &c.delta)
    }

    /// The change for the first configured lookback, which drives the card status.
    pub fn primary_change(&self) -> Option<&Delta> {
        self.changes.first().map(|c| &c.delta)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookbackChange {
    pub months: usize,
    /// The observation the change is measured against, clamped to the first one.
    pub base_month: Month,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub base: Decimal,
    pub delta: Delta,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InflationKpi {
    pub month: Month,
    /// The latest single-month print.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub last_month: Decimal,
    /// The print one period before `last_month`.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub previous: Decimal,
    /// `last_month - previous`, in percentage points.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub change_pp: Decimal,
    /// Latest trailing compounded inflation.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub trailing: Decimal,
    /// `trailing - target`, in percentage points.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub vs_target: Decimal,
    pub above_target: bool,
    pub above_ceiling: bool,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub target: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub ceiling: Decimal,
}

/// The derived series behind the charts, each computed over the full history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedSeries {
    pub inflation_trailing: Series,
    pub fx_returns: Series,
    pub fx_volatility: Series,
    pub fx_moving_average: Series,
}

/// Everything the analytics layer produces for one version of the source series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub snapshot: KpiSnapshot,
    pub derived: DerivedSeries,
}
