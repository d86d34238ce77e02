use crate::error::CoreError;
use crate::series::{Observation, Series};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The three canonical indicators the dashboard tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesKind {
    PolicyRate,
    Inflation,
    ExchangeRate,
}

impl SeriesKind {
    pub const ALL: [SeriesKind; 3] = [Self::PolicyRate, Self::Inflation, Self::ExchangeRate];

    /// Identifier used as the series name.
    pub fn key(&self) -> &'static str {
        match self {
            SeriesKind::PolicyRate => "policy_rate",
            SeriesKind::Inflation => "inflation",
            SeriesKind::ExchangeRate => "exchange_rate",
        }
    }
}

impl fmt::Display for SeriesKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SeriesKind::PolicyRate => "Policy rate (% p.a.)",
            SeriesKind::Inflation => "Inflation (% m/m)",
            SeriesKind::ExchangeRate => "Exchange rate",
        };
        f.write_str(label)
    }
}

/// The three raw observation lists as they arrive from ingestion, before validation.
///
/// Serialized as `{ "policy_rate": [...], "inflation": [...], "exchange_rate": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesSet {
    pub policy_rate: Vec<Observation>,
    pub inflation: Vec<Observation>,
    pub exchange_rate: Vec<Observation>,
}

impl SeriesSet {
    /// Validates every list and assembles the store.
    pub fn into_store(self) -> Result<SeriesStore, CoreError> {
        SeriesStore::from_raw(self.policy_rate, self.inflation, self.exchange_rate)
    }
}

/// Owns the three canonical series. Read-only once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeriesStore {
    policy_rate: Series,
    inflation: Series,
    exchange_rate: Series,
}

impl SeriesStore {
    pub fn new(policy_rate: Series, inflation: Series, exchange_rate: Series) -> Self {
        Self {
            policy_rate,
            inflation,
            exchange_rate,
        }
    }

    /// Validates raw observation lists and assembles the store.
    pub fn from_raw(
        policy_rate: Vec<Observation>,
        inflation: Vec<Observation>,
        exchange_rate: Vec<Observation>,
    ) -> Result<Self, CoreError> {
        let store = Self::new(
            Series::new(SeriesKind::PolicyRate.key(), policy_rate)?,
            Series::new(SeriesKind::Inflation.key(), inflation)?,
            Series::new(SeriesKind::ExchangeRate.key(), exchange_rate)?,
        );
        tracing::debug!(
            policy_rate = store.policy_rate.len(),
            inflation = store.inflation.len(),
            exchange_rate = store.exchange_rate.len(),
            "Series store loaded."
        );
        Ok(store)
    }

    pub fn get(&self, kind: SeriesKind) -> &Series {
        match kind {
            SeriesKind::PolicyRate => &self.policy_rate,
            SeriesKind::Inflation => &self.inflation,
            SeriesKind::ExchangeRate => &self.exchange_rate,
        }
    }

    pub fn policy_rate(&self) -> &Series {
        &self.policy_rate
    }

    pub fn inflation(&self) -> &Series {
        &self.inflation
    }

    pub fn exchange_rate(&self) -> &Series {
        &self.exchange_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn obs(month: &str, value: rust_decimal::Decimal) -> Observation {
        Observation::new(month.parse().unwrap(), value)
    }

    #[test]
    fn from_raw_names_series_by_kind() {
        let store = SeriesStore::from_raw(
            vec![obs("2025-01", dec!(13.25))],
            vec![obs("2025-01", dec!(0.16))],
            vec![obs("2025-01", dec!(5.94))],
        )
        .unwrap();
        for kind in SeriesKind::ALL {
            assert_eq!(store.get(kind).name(), kind.key());
        }
        assert_eq!(store.exchange_rate().latest().unwrap().value, dec!(5.94));
    }

    #[test]
    fn series_set_deserializes_and_validates() {
        let json = r#"{
            "policy_rate": [{"month": "2025-01", "value": 13.25}, {"month": "2025-02", "value": 13.25}],
            "inflation": [{"month": "2025-01", "value": 0.16}],
            "exchange_rate": [{"month": "2025-01", "value": 5.94}]
        }"#;
        let set: SeriesSet = serde_json::from_str(json).unwrap();
        let store = set.into_store().unwrap();
        assert_eq!(store.policy_rate().len(), 2);
        assert_eq!(store.inflation().latest().unwrap().value, dec!(0.16));
    }

    #[test]
    fn from_raw_rejects_malformed_series() {
        let err = SeriesStore::from_raw(
            vec![obs("2025-01", dec!(13.25))],
            vec![obs("2025-02", dec!(0.16)), obs("2025-01", dec!(0.20))],
            vec![],
        )
        .unwrap_err();
        assert!(matches!(err, CoreError::MalformedSeries { ref series, .. } if series == "inflation"));
    }
}
