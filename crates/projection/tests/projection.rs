use analytics::{AnalyticsEngine, InflationBand};
use core_types::{Month, PeriodWindow, Series, SeriesSet, SeriesStore};
use projection::ViewProjector;
use rust_decimal_macros::dec;

const BCB_SAMPLE: &str = include_str!("../../../data/bcb_sample.json");

fn bcb_store() -> SeriesStore {
    let set: SeriesSet = serde_json::from_str(BCB_SAMPLE).unwrap();
    set.into_store().unwrap()
}

fn month(s: &str) -> Month {
    s.parse().unwrap()
}

#[test]
fn rows_follow_policy_rate_months_inside_window() {
    let store = bcb_store();
    let derived = AnalyticsEngine::default().derive_series(&store).unwrap();
    let view = ViewProjector::default().project(&store, &derived, PeriodWindow::Last36);

    assert_eq!(view.rows.len(), 36);
    assert_eq!(view.rows[0].month, month("2023-02"));
    assert_eq!(view.rows[35].month, month("2026-01"));

    let first = &view.rows[0];
    assert_eq!(first.policy_rate, dec!(13.75));
    assert_eq!(first.exchange_rate, Some(dec!(5.20)));
    assert_eq!(first.inflation, Some(dec!(0.84)));
    assert_eq!(first.inflation_trailing, None);

    // Inflation for the last policy month has not been published yet.
    let last = &view.rows[35];
    assert_eq!(last.exchange_rate, Some(dec!(5.23)));
    assert_eq!(last.inflation, None);
    assert_eq!(last.inflation_trailing, None);

    let dec_2025 = view.rows.iter().find(|r| r.month == month("2025-12")).unwrap();
    assert_eq!(dec_2025.inflation_trailing, Some(dec!(4.26)));

    assert_eq!(view.rows_with_trailing().count(), 25);
    assert_eq!(view.policy_vs_fx.len(), 36);
    assert_eq!(view.rows_newest_first().next().unwrap().month, month("2026-01"));
}

#[test]
fn window_is_applied_to_every_derived_series() {
    let store = bcb_store();
    let derived = AnalyticsEngine::default().derive_series(&store).unwrap();
    let view = ViewProjector::default().project(&store, &derived, PeriodWindow::Last12);

    assert_eq!(view.period, PeriodWindow::Last12);
    assert_eq!(view.rows.len(), 12);
    assert_eq!(view.fx_returns.len(), 12);
    assert_eq!(view.fx_volatility.len(), 12);
    assert_eq!(view.fx_moving_average.len(), 12);
    assert_eq!(view.inflation_bars.len(), 12);

    assert_eq!(view.fx_returns[0].month, month("2025-03"));
    assert_eq!(view.fx_returns[11].value, dec!(0.57));
    // Sliced from the full-history volatility, not recomputed on the window.
    assert_eq!(view.fx_volatility[11].value, dec!(4.59));

    let bands: Vec<(String, InflationBand)> = view
        .inflation_bars
        .iter()
        .map(|b| (b.month.to_string(), b.band))
        .collect();
    assert!(bands.contains(&("2025-02".to_string(), InflationBand::High)));
    assert!(bands.contains(&("2025-08".to_string(), InflationBand::Deflation)));
    assert!(bands.contains(&("2025-12".to_string(), InflationBand::Normal)));
}

#[test]
fn missing_counterparts_project_as_no_data() {
    let policy = Series::from_pairs(
        "policy_rate",
        [("2024-01", dec!(10.50)), ("2024-02", dec!(10.50)), ("2024-03", dec!(10.75))],
    )
    .unwrap();
    let inflation = Series::from_pairs("inflation", [("2024-02", dec!(0.00))]).unwrap();
    let fx = Series::from_pairs("exchange_rate", [("2024-01", dec!(4.93)), ("2024-03", dec!(5.02))])
        .unwrap();
    let store = SeriesStore::new(policy, inflation, fx);

    let derived = analytics::DerivedSeries {
        inflation_trailing: Series::new("t", vec![]).unwrap(),
        fx_returns: Series::new("r", vec![]).unwrap(),
        fx_volatility: Series::new("v", vec![]).unwrap(),
        fx_moving_average: Series::new("m", vec![]).unwrap(),
    };
    let view = ViewProjector::default().project(&store, &derived, PeriodWindow::Last12);

    assert_eq!(view.rows.len(), 3);
    assert_eq!(view.rows[1].exchange_rate, None);
    // A genuine zero is kept as a value, distinct from "no data".
    assert_eq!(view.rows[1].inflation, Some(dec!(0.00)));
    assert_eq!(view.rows[0].inflation, None);
    assert_eq!(view.policy_vs_fx.len(), 2);
    assert!(view.fx_returns.is_empty());

    let json = serde_json::to_value(&view).unwrap();
    assert!(json["rows"][1]["exchange_rate"].is_null());
    assert_eq!(json["rows"][1]["inflation"].to_string(), "0.00");
    assert!(json["rows"][0]["policy_rate"].is_number());
    assert_eq!(json["period"], "12m");
}
