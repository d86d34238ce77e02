use crate::classify::{self, Indicator, KpiCard};
use crate::error::AnalyticsError;
use crate::insights::derive_insights;
use crate::report::{
    Analysis, DerivedSeries, ExchangeRateKpi, InflationKpi, KpiSnapshot, LookbackChange,
    PolicyRateKpi,
};
use crate::rounding::round2;
use crate::transforms;
use configuration::IndicatorSettings;
use core_types::SeriesStore;
use rust_decimal::Decimal;

/// A stateless calculator for deriving headline indicators from the canonical series.
///
/// The engine holds only its (validated) settings. Every call recomputes from scratch, so a
/// caller that swaps in new series simply calls [`AnalyticsEngine::analyze`] again and
/// replaces its previous [`Analysis`] wholesale.
#[derive(Debug, Clone, Default)]
pub struct AnalyticsEngine {
    settings: IndicatorSettings,
}

impl AnalyticsEngine {
    /// Creates an engine, rejecting settings the transforms cannot work with.
    pub fn new(settings: IndicatorSettings) -> Result<Self, AnalyticsError> {
        settings
            .validate()
            .map_err(|e| AnalyticsError::InvalidSettings(e.to_string()))?;
        Ok(Self { settings })
    }

    pub fn settings(&self) -> &IndicatorSettings {
        &self.settings
    }

    /// The main entry point: derived series plus the KPI snapshot.
    ///
    /// # Arguments
    ///
    /// * `store` - The three canonical series, full history.
    ///
    /// # Returns
    ///
    /// A `Result` containing the `Analysis` or an `AnalyticsError` when a series is too short
    /// for a configured window or a return has a zero baseline.
    #[tracing::instrument(name = "analytics_analyze", skip_all)]
    pub fn analyze(&self, store: &SeriesStore) -> Result<Analysis, AnalyticsError> {
        let derived = self.derive_series(store)?;
        let snapshot = self.snapshot(store, &derived)?;

        tracing::info!(
            policy_rate = %snapshot.policy_rate.latest,
            exchange_rate = %snapshot.exchange_rate.latest,
            trailing_inflation = %snapshot.inflation.trailing,
            percentile = snapshot.exchange_rate.percentile,
            insights = snapshot.insights.len(),
            "KPI snapshot computed."
        );

        Ok(Analysis { snapshot, derived })
    }

    /// Computes every chart series over the full history.
    pub fn derive_series(&self, store: &SeriesStore) -> Result<DerivedSeries, AnalyticsError> {
        let s = &self.settings;

        let inflation_trailing = transforms::trailing_compounded(store.inflation(), s.trailing_window)?;
        let fx_returns = transforms::period_returns(store.exchange_rate())?;
        let fx_volatility = transforms::rolling_volatility(&fx_returns, s.volatility_window)?;
        let fx_moving_average =
            transforms::rolling_mean(store.exchange_rate(), s.moving_average_window)?;

        tracing::debug!(
            inflation_trailing = inflation_trailing.len(),
            fx_returns = fx_returns.len(),
            fx_volatility = fx_volatility.len(),
            fx_moving_average = fx_moving_average.len(),
            "Derived series computed."
        );

        Ok(DerivedSeries {
            inflation_trailing,
            fx_returns,
            fx_volatility,
            fx_moving_average,
        })
    }

    /// Builds the snapshot from the full series and their already-derived counterparts.
    pub fn snapshot(
        &self,
        store: &SeriesStore,
        derived: &DerivedSeries,
    ) -> Result<KpiSnapshot, AnalyticsError> {
        let policy_rate = self.policy_rate_kpi(store)?;
        let exchange_rate = self.exchange_rate_kpi(store, derived)?;
        let inflation = self.inflation_kpi(store, derived)?;
        let cards = self.cards(&policy_rate, &exchange_rate, &inflation);
        let insights = derive_insights(&policy_rate, &exchange_rate, &inflation, &self.settings);

        Ok(KpiSnapshot {
            policy_rate,
            exchange_rate,
            inflation,
            cards,
            insights,
        })
    }

    /// Latest policy rate and its move against the previous month.
    fn policy_rate_kpi(&self, store: &SeriesStore) -> Result<PolicyRateKpi, AnalyticsError> {
        let series = store.policy_rate();
        let latest = transforms::latest(series, "policy rate")?;
        let previous = series.back(1).copied().unwrap_or(latest);

        Ok(PolicyRateKpi {
            month: latest.month,
            latest: latest.value,
            previous: previous.value,
            change_pp: transforms::point_change(series, 1)?,
            cycle: transforms::rate_cycle(series)?,
        })
    }

    /// Lookback changes, volatility, moving average and percentile position of the rate.
    fn exchange_rate_kpi(
        &self,
        store: &SeriesStore,
        derived: &DerivedSeries,
    ) -> Result<ExchangeRateKpi, AnalyticsError> {
        let series = store.exchange_rate();
        let latest = transforms::latest(series, "exchange rate")?;

        let changes = self
            .settings
            .fx_lookbacks
            .iter()
            .map(|&months| {
                let base = series.back(months).copied().unwrap_or(latest);
                Ok(LookbackChange {
                    months,
                    base_month: base.month,
                    base: base.value,
                    delta: transforms::change_over(series, months)?,
                })
            })
            .collect::<Result<Vec<_>, AnalyticsError>>()?;

        let history: Vec<Decimal> = series.values().collect();
        let percentile = transforms::percentile_rank(&history, latest.value)?;

        Ok(ExchangeRateKpi {
            month: latest.month,
            latest: latest.value,
            previous: series.back(1).map_or(latest.value, |o| o.value),
            changes,
            volatility: transforms::latest(&derived.fx_volatility, "rolling volatility")?.value,
            moving_average: transforms::latest(&derived.fx_moving_average, "rolling mean")?.value,
            percentile,
            level: classify::percentile_level(percentile, &self.settings),
            bands: transforms::percentile_bands(&history)?,
        })
    }

    /// Last monthly print and the trailing figure measured against the target band.
    fn inflation_kpi(
        &self,
        store: &SeriesStore,
        derived: &DerivedSeries,
    ) -> Result<InflationKpi, AnalyticsError> {
        let series = store.inflation();
        let last_month = transforms::latest(series, "inflation")?;
        let trailing =
            transforms::latest(&derived.inflation_trailing, "trailing compounded aggregate")?.value;
        let target = self.settings.inflation_target;
        let ceiling = self.settings.inflation_ceiling;

        Ok(InflationKpi {
            month: last_month.month,
            last_month: last_month.value,
            previous: series.back(1).map_or(last_month.value, |o| o.value),
            change_pp: transforms::point_change(series, 1)?,
            trailing,
            vs_target: trailing
                .checked_sub(target)
                .map(round2)
                .ok_or(AnalyticsError::Overflow("inflation vs target"))?,
            above_target: trailing > target,
            above_ceiling: trailing > ceiling,
            target,
            ceiling,
        })
    }

    /// Card statuses, in display order.
    fn cards(
        &self,
        policy: &PolicyRateKpi,
        fx: &ExchangeRateKpi,
        inflation: &InflationKpi,
    ) -> Vec<KpiCard> {
        let thresholds = &self.settings.status;
        let fx_status = fx
            .primary_change()
            .map(|d| classify::exchange_rate_status(d, thresholds))
            .unwrap_or(classify::KpiStatus::Neutral);

        vec![
            KpiCard {
                indicator: Indicator::PolicyRate,
                status: classify::policy_rate_status(policy.change_pp),
            },
            KpiCard {
                indicator: Indicator::ExchangeRate,
                status: fx_status,
            },
            KpiCard {
                indicator: Indicator::TrailingInflation,
                status: classify::trailing_inflation_status(
                    inflation.above_ceiling,
                    inflation.vs_target,
                ),
            },
            KpiCard {
                indicator: Indicator::FxVolatility,
                status: classify::volatility_status(fx.volatility, thresholds),
            },
            KpiCard {
                indicator: Indicator::MonthlyInflation,
                status: classify::monthly_inflation_status(inflation.last_month, thresholds),
            },
        ]
    }
}
