use crate::view::{DashboardRow, DashboardView, InflationBar, PolicyFxPoint};
use analytics::DerivedSeries;
use analytics::classify::inflation_band;
use configuration::StatusThresholds;
use core_types::{PeriodWindow, SeriesStore};

/// Builds period-filtered views from the full series and their derived counterparts.
///
/// Derived series are always computed over the full history and sliced afterwards, so a
/// point near the start of the window still has its complete lookback.
#[derive(Debug, Clone, Default)]
pub struct ViewProjector {
    thresholds: StatusThresholds,
}

impl ViewProjector {
    pub fn new(thresholds: StatusThresholds) -> Self {
        Self { thresholds }
    }

    pub fn project(
        &self,
        store: &SeriesStore,
        derived: &DerivedSeries,
        period: PeriodWindow,
    ) -> DashboardView {
        let rows: Vec<DashboardRow> = period
            .apply(store.policy_rate())
            .iter()
            .map(|p| DashboardRow {
                month: p.month,
                policy_rate: p.value,
                exchange_rate: store.exchange_rate().get(p.month),
                inflation: store.inflation().get(p.month),
                inflation_trailing: derived.inflation_trailing.get(p.month),
            })
            .collect();

        let policy_vs_fx = rows
            .iter()
            .filter_map(|r| {
                r.exchange_rate.map(|fx| PolicyFxPoint {
                    month: r.month,
                    policy_rate: r.policy_rate,
                    exchange_rate: fx,
                })
            })
            .collect();

        let inflation_bars = period
            .apply(store.inflation())
            .iter()
            .map(|o| InflationBar {
                month: o.month,
                value: o.value,
                band: inflation_band(o.value, &self.thresholds),
            })
            .collect();

        let view = DashboardView {
            period,
            rows,
            fx_returns: period.apply(&derived.fx_returns).to_vec(),
            fx_volatility: period.apply(&derived.fx_volatility).to_vec(),
            fx_moving_average: period.apply(&derived.fx_moving_average).to_vec(),
            inflation_bars,
            policy_vs_fx,
        };

        tracing::debug!(
            %period,
            rows = view.rows.len(),
            fx_returns = view.fx_returns.len(),
            fx_volatility = view.fx_volatility.len(),
            "Dashboard view projected."
        );
        view
    }
}
