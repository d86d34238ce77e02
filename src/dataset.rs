use core_types::SeriesSet;

/// Monthly SELIC target, IPCA and USD/BRL from the Brazilian central bank's SGS service
/// (series 11, 433 and 1), Jan/2023 onwards.
const BCB_SAMPLE: &str = include_str!("../data/bcb_sample.json");

pub fn bcb_sample() -> anyhow::Result<SeriesSet> {
    Ok(serde_json::from_str(BCB_SAMPLE)?)
}
