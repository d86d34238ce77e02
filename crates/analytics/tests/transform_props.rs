mod common;

use analytics::transforms::{
    pct, percentile_rank, period_returns, rolling_volatility, trailing_compounded,
};
use analytics::rounding::round2;
use common::monthly;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Monthly rates in percent with two decimals, between -2.00 and 3.00.
fn arb_rate() -> impl Strategy<Value = Decimal> {
    (-200i64..=300).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strictly positive prices with two decimals.
fn arb_price() -> impl Strategy<Value = Decimal> {
    (100i64..=1_000).prop_map(|cents| Decimal::new(cents, 2))
}

proptest! {
    #[test]
    fn constant_rate_compounds_to_closed_form(cents in -200i64..=300, extra in 0usize..24) {
        let r = Decimal::new(cents, 2);
        let series = monthly("ipca", 2020, &vec![r; 12 + extra]);
        let out = trailing_compounded(&series, 12).unwrap();

        let factor = Decimal::ONE + r / dec!(100);
        let mut growth = Decimal::ONE;
        for _ in 0..12 {
            growth *= factor;
        }
        let expected = round2((growth - Decimal::ONE) * dec!(100));

        prop_assert_eq!(out.len(), extra + 1);
        prop_assert!(out.values().all(|v| v == expected));
    }

    #[test]
    fn length_contracts(
        prices in proptest::collection::vec(arb_price(), 2..60),
        window in 1usize..8,
    ) {
        let n = prices.len();
        let series = monthly("usd", 2020, &prices);

        match trailing_compounded(&series, 12) {
            Ok(out) => prop_assert_eq!(out.len(), n - 11),
            Err(_) => prop_assert!(n < 12),
        }

        let returns = period_returns(&series).unwrap();
        prop_assert_eq!(returns.len(), n - 1);

        match rolling_volatility(&returns, window) {
            Ok(vol) => prop_assert_eq!(vol.len(), (n - 1) - (window - 1)),
            Err(_) => prop_assert!(n - 1 < window),
        }
    }

    #[test]
    fn no_look_ahead(
        rates in proptest::collection::vec(arb_rate(), 14..40),
        cut in any::<prop::sample::Index>(),
        replacement in arb_rate(),
    ) {
        // Change one observation at index j; every derived point dated before j must hold.
        let j = cut.index(rates.len());
        let mut changed = rates.clone();
        changed[j] = replacement;

        let a = trailing_compounded(&monthly("x", 2020, &rates), 12).unwrap();
        let b = trailing_compounded(&monthly("x", 2020, &changed), 12).unwrap();
        let boundary = monthly("x", 2020, &rates).observations()[j].month;
        for (pa, pb) in a.observations().iter().zip(b.observations()) {
            if pa.month < boundary {
                prop_assert_eq!(pa, pb);
            }
        }

        // Prices derived from the same rates (kept strictly positive).
        let to_prices = |v: &[Decimal]| -> Vec<Decimal> { v.iter().map(|r| r + dec!(5)).collect() };
        let ra = period_returns(&monthly("p", 2020, &to_prices(&rates[..]))).unwrap();
        let rb = period_returns(&monthly("p", 2020, &to_prices(&changed[..]))).unwrap();
        let va = rolling_volatility(&ra, 6).unwrap();
        let vb = rolling_volatility(&rb, 6).unwrap();
        for (pa, pb) in ra.observations().iter().zip(rb.observations()) {
            if pa.month < boundary {
                prop_assert_eq!(pa, pb);
            }
        }
        for (pa, pb) in va.observations().iter().zip(vb.observations()) {
            if pa.month < boundary {
                prop_assert_eq!(pa, pb);
            }
        }
    }

    #[test]
    fn percentile_bounds(values in proptest::collection::vec(arb_price(), 1..80)) {
        let n = values.len();
        let max = *values.iter().max().unwrap();
        let min = *values.iter().min().unwrap();

        prop_assert_eq!(percentile_rank(&values, max).unwrap(), 100);

        let min_count = values.iter().filter(|v| **v == min).count();
        let expected_min = (Decimal::from(min_count * 100) / Decimal::from(n))
            .round_dp_with_strategy(0, rust_decimal::RoundingStrategy::MidpointAwayFromZero);
        prop_assert_eq!(Decimal::from(percentile_rank(&values, min).unwrap()), expected_min);
    }

    #[test]
    fn distinct_minimum_ranks_one_over_n(n in 1usize..100) {
        let values: Vec<Decimal> = (0..n).map(Decimal::from).collect();
        let expected = (Decimal::from(100) / Decimal::from(n))
            .round_dp_with_strategy(0, rust_decimal::RoundingStrategy::MidpointAwayFromZero);
        prop_assert_eq!(Decimal::from(percentile_rank(&values, Decimal::ZERO).unwrap()), expected);
    }

    #[test]
    fn zero_guard_is_deterministic(a in arb_rate()) {
        let d = pct(a, Decimal::ZERO).unwrap();
        prop_assert_eq!(d.value, Decimal::ZERO);
        prop_assert!(!d.defined);
    }

    #[test]
    fn volatility_is_never_negative(
        prices in proptest::collection::vec(arb_price(), 7..40),
    ) {
        let returns = period_returns(&monthly("p", 2020, &prices)).unwrap();
        let vol = rolling_volatility(&returns, 6).unwrap();
        prop_assert!(vol.values().all(|v| v >= Decimal::ZERO));
    }
}
