#![allow(dead_code)]

use core_types::{Month, Observation, Series, SeriesSet, SeriesStore};
use rust_decimal::Decimal;

const BCB_SAMPLE: &str = include_str!("../../../../data/bcb_sample.json");

/// Monthly policy rate, inflation and exchange rate published by the Brazilian central bank,
/// Jan/2023 onwards.
pub fn bcb_store() -> SeriesStore {
    let set: SeriesSet = serde_json::from_str(BCB_SAMPLE).expect("sample data parses");
    set.into_store().expect("sample data is well formed")
}

/// A consecutive monthly series starting at January of `start_year`.
pub fn monthly(name: &str, start_year: i32, values: &[Decimal]) -> Series {
    let observations = values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let month = Month::new(start_year + (i / 12) as i32, (i % 12) as u32 + 1).unwrap();
            Observation::new(month, *v)
        })
        .collect();
    Series::new(name, observations).unwrap()
}
