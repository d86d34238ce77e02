use analytics::InflationBand;
use core_types::{Month, Observation, PeriodWindow};
use rust_decimal::Decimal;
use serde::Serialize;

/// One month of the joined dashboard table.
///
/// The policy-rate series drives the join, so `policy_rate` is always present; every other
/// column is `None` when that series has no observation for the month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardRow {
    pub month: Month,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub policy_rate: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision_option")]
    pub exchange_rate: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::arbitrary_precision_option")]
    pub inflation: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::arbitrary_precision_option")]
    pub inflation_trailing: Option<Decimal>,
}

/// A monthly inflation print with its colour band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InflationBar {
    pub month: Month,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub value: Decimal,
    pub band: InflationBand,
}

/// A month where both the policy rate and the exchange rate are known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PolicyFxPoint {
    pub month: Month,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub policy_rate: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub exchange_rate: Decimal,
}

/// Everything the charts and tables need for one period window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardView {
    pub period: PeriodWindow,
    pub rows: Vec<DashboardRow>,
    pub fx_returns: Vec<Observation>,
    pub fx_volatility: Vec<Observation>,
    pub fx_moving_average: Vec<Observation>,
    pub inflation_bars: Vec<InflationBar>,
    pub policy_vs_fx: Vec<PolicyFxPoint>,
}

impl DashboardView {
    /// Table order: most recent month first.
    pub fn rows_newest_first(&self) -> impl Iterator<Item = &DashboardRow> {
        self.rows.iter().rev()
    }

    /// Rows that carry a trailing inflation figure, for the trailing-inflation charts.
    pub fn rows_with_trailing(&self) -> impl Iterator<Item = &DashboardRow> {
        self.rows.iter().filter(|r| r.inflation_trailing.is_some())
    }
}
