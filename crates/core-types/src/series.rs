use crate::error::CoreError;
use crate::month::Month;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single monthly data point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    pub month: Month,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub value: Decimal,
}

impl Observation {
    pub fn new(month: Month, value: Decimal) -> Self {
        Self { month, value }
    }
}

/// A named, chronologically ordered monthly series.
///
/// Months are unique and strictly increasing; this is checked once in [`Series::new`] and
/// the series is immutable afterwards. Gaps between months are allowed: every consumer works
/// positionally over the stored order, never by calendar arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Series {
    name: String,
    observations: Vec<Observation>,
}

impl Series {
    /// Builds a series, failing fast on duplicate or out-of-order months.
    pub fn new(name: impl Into<String>, observations: Vec<Observation>) -> Result<Self, CoreError> {
        let name = name.into();

        for (index, pair) in observations.windows(2).enumerate() {
            let (prev, next) = (pair[0].month, pair[1].month);
            if next == prev {
                return Err(CoreError::MalformedSeries {
                    series: name,
                    index: index + 1,
                    reason: format!("duplicate month {next}"),
                });
            }
            if next < prev {
                return Err(CoreError::MalformedSeries {
                    series: name,
                    index: index + 1,
                    reason: format!("month {next} is not after {prev}"),
                });
            }
        }

        tracing::trace!(series = %name, len = observations.len(), "Series validated.");
        Ok(Self { name, observations })
    }

    /// Builds a series from `("YYYY-MM", value)` pairs.
    pub fn from_pairs<S: AsRef<str>>(
        name: impl Into<String>,
        pairs: impl IntoIterator<Item = (S, Decimal)>,
    ) -> Result<Self, CoreError> {
        let observations = pairs
            .into_iter()
            .map(|(month, value)| Ok(Observation::new(month.as_ref().parse()?, value)))
            .collect::<Result<Vec<_>, CoreError>>()?;
        Self::new(name, observations)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn values(&self) -> impl Iterator<Item = Decimal> + '_ {
        self.observations.iter().map(|o| o.value)
    }

    pub fn months(&self) -> impl Iterator<Item = Month> + '_ {
        self.observations.iter().map(|o| o.month)
    }

    pub fn latest(&self) -> Option<&Observation> {
        self.observations.last()
    }

    /// The observation `n` periods before the latest one.
    ///
    /// When the series is not long enough the first observation is returned instead, so a
    /// lookback on a short series compares against the oldest available value.
    pub fn back(&self, n: usize) -> Option<&Observation> {
        let len = self.observations.len();
        if len > n {
            self.observations.get(len - 1 - n)
        } else {
            self.observations.first()
        }
    }

    /// Looks up the value recorded for `month`.
    pub fn get(&self, month: Month) -> Option<Decimal> {
        self.observations
            .binary_search_by_key(&month, |o| o.month)
            .ok()
            .map(|i| self.observations[i].value)
    }

    /// The last `min(n, len)` observations, in order.
    pub fn tail(&self, n: usize) -> &[Observation] {
        let start = self.observations.len().saturating_sub(n);
        &self.observations[start..]
    }
}
