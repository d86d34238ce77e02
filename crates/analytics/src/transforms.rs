//! Stateless series transforms.
//!
//! Every function reads its input and returns a fresh value. Rolling transforms emit one
//! point per input position that has a full trailing window, dated with that position's
//! month, so a derived point never depends on later observations.

use crate::error::AnalyticsError;
use crate::rounding::{round2, round_to_u32};
use core_types::{Month, Observation, Series};
use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Result of a percentage change against a baseline.
///
/// `defined` is `false` only when the baseline was zero; `value` is then `0` by convention,
/// which keeps a "no prior data" case distinguishable from a genuine zero change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delta {
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub value: Decimal,
    pub defined: bool,
}

impl Delta {
    pub fn new(value: Decimal) -> Self {
        Self {
            value,
            defined: true,
        }
    }

    pub fn undefined() -> Self {
        Self {
            value: Decimal::ZERO,
            defined: false,
        }
    }
}

/// The 25th and 75th percentile levels of a distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PercentileBands {
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub p25: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub p75: Decimal,
}

/// Direction of the current policy-rate cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CycleDirection {
    Tightening,
    Easing,
}

/// The move from the most recent extreme of a rate series to its current level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateCycle {
    pub direction: CycleDirection,
    pub from_month: Month,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub from_value: Decimal,
    /// First month at which the current level was reached.
    pub to_month: Month,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub to_value: Decimal,
    /// Signed change in percentage points.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub change_pp: Decimal,
    /// Number of month-over-month changes between the two points.
    pub moves: usize,
}

fn require_window(transform: &'static str, window: usize) -> Result<(), AnalyticsError> {
    if window == 0 {
        return Err(AnalyticsError::InvalidWindow { transform, window });
    }
    Ok(())
}

fn require_len(transform: &'static str, required: usize, available: usize) -> Result<(), AnalyticsError> {
    if available < required {
        return Err(AnalyticsError::InsufficientData {
            transform,
            required,
            available,
        });
    }
    Ok(())
}

/// Compounds a monthly rate series (in percent) over a trailing window.
///
/// `result[i] = (Π (1 + value[k] / 100) for k in i-window+1..=i) - 1`, in percent, 2 d.p.
/// The output has `len - window + 1` points.
pub fn trailing_compounded(series: &Series, window: usize) -> Result<Series, AnalyticsError> {
    const NAME: &str = "trailing compounded aggregate";
    require_window(NAME, window)?;
    require_len(NAME, window, series.len())?;

    let hundred = dec!(100);
    let points = series
        .observations()
        .windows(window)
        .map(|w| {
            let growth = w.iter().try_fold(Decimal::ONE, |acc, o| {
                let factor = Decimal::ONE
                    .checked_add(o.value / hundred)
                    .ok_or(AnalyticsError::Overflow(NAME))?;
                acc.checked_mul(factor).ok_or(AnalyticsError::Overflow(NAME))
            })?;
            let pct = growth
                .checked_sub(Decimal::ONE)
                .and_then(|g| g.checked_mul(hundred))
                .ok_or(AnalyticsError::Overflow(NAME))?;
            Ok(Observation::new(w[window - 1].month, round2(pct)))
        })
        .collect::<Result<Vec<_>, AnalyticsError>>()?;

    tracing::trace!(input = series.len(), output = points.len(), window, "Trailing aggregate computed.");
    Ok(Series::new(format!("{}_trailing_{window}", series.name()), points)?)
}

/// Month-over-month percentage change: `(value[i] - value[i-1]) / value[i-1] * 100`, 2 d.p.
///
/// Output has `len - 1` points. A zero previous value is an error rather than a silent
/// zero, since the change is mathematically undefined.
pub fn period_returns(series: &Series) -> Result<Series, AnalyticsError> {
    const NAME: &str = "period returns";
    require_len(NAME, 2, series.len())?;

    let points = series
        .observations()
        .windows(2)
        .map(|w| {
            let (prev, cur) = (w[0], w[1]);
            if prev.value.is_zero() {
                return Err(AnalyticsError::ZeroBaseline {
                    transform: NAME,
                    month: cur.month,
                });
            }
            let change = cur
                .value
                .checked_sub(prev.value)
                .and_then(|diff| diff.checked_mul(dec!(100)))
                .and_then(|scaled| scaled.checked_div(prev.value))
                .ok_or(AnalyticsError::Overflow(NAME))?;
            Ok(Observation::new(cur.month, round2(change)))
        })
        .collect::<Result<Vec<_>, AnalyticsError>>()?;

    Ok(Series::new(format!("{}_returns", series.name()), points)?)
}

/// Population standard deviation (divide by `window`) of each trailing window, 2 d.p.
///
/// Output has `len - window + 1` points.
pub fn rolling_volatility(returns: &Series, window: usize) -> Result<Series, AnalyticsError> {
    const NAME: &str = "rolling volatility";
    require_window(NAME, window)?;
    require_len(NAME, window, returns.len())?;

    let points = returns
        .observations()
        .windows(window)
        .map(|w| {
            let variance = population_variance(w).ok_or(AnalyticsError::Overflow(NAME))?;
            let std_dev = variance.sqrt().ok_or_else(|| {
                AnalyticsError::Calculation(format!(
                    "Failed to calculate square root of variance at {}",
                    w[window - 1].month
                ))
            })?;
            Ok(Observation::new(w[window - 1].month, round2(std_dev)))
        })
        .collect::<Result<Vec<_>, AnalyticsError>>()?;

    tracing::trace!(input = returns.len(), output = points.len(), window, "Rolling volatility computed.");
    Ok(Series::new(format!("{}_volatility_{window}", returns.name()), points)?)
}

/// `None` when an intermediate sum or square leaves the `Decimal` range.
fn checked_mean(window: &[Observation]) -> Option<Decimal> {
    window
        .iter()
        .try_fold(Decimal::ZERO, |acc, o| acc.checked_add(o.value))?
        .checked_div(Decimal::from(window.len()))
}

fn population_variance(window: &[Observation]) -> Option<Decimal> {
    let mean = checked_mean(window)?;
    window
        .iter()
        .try_fold(Decimal::ZERO, |acc, o| {
            let dev = o.value.checked_sub(mean)?;
            acc.checked_add(dev.checked_mul(dev)?)
        })?
        .checked_div(Decimal::from(window.len()))
}

/// Trailing arithmetic mean over `window` observations, 2 d.p.
pub fn rolling_mean(series: &Series, window: usize) -> Result<Series, AnalyticsError> {
    const NAME: &str = "rolling mean";
    require_window(NAME, window)?;
    require_len(NAME, window, series.len())?;

    let points = series
        .observations()
        .windows(window)
        .map(|w| {
            let mean = checked_mean(w).ok_or(AnalyticsError::Overflow(NAME))?;
            Ok(Observation::new(w[window - 1].month, round2(mean)))
        })
        .collect::<Result<Vec<_>, AnalyticsError>>()?;

    Ok(Series::new(format!("{}_mean_{window}", series.name()), points)?)
}

/// Inclusive percentile rank of `query` within `values`, as a whole percentage.
///
/// `rank = count(v <= query) / len * 100`, rounded half away from zero. Ties count in favour
/// of the higher percentile, so the maximum of a series always ranks 100.
pub fn percentile_rank(values: &[Decimal], query: Decimal) -> Result<u32, AnalyticsError> {
    require_len("percentile rank", 1, values.len())?;

    let at_or_below = values.iter().filter(|v| **v <= query).count();
    let rank = Decimal::from(at_or_below) * dec!(100) / Decimal::from(values.len());
    Ok(round_to_u32(rank))
}

/// 25th/75th percentile levels taken as the sorted elements at `floor(len * q)`.
pub fn percentile_bands(values: &[Decimal]) -> Result<PercentileBands, AnalyticsError> {
    require_len("percentile bands", 1, values.len())?;

    let mut sorted = values.to_vec();
    sorted.sort();
    let len = sorted.len();
    Ok(PercentileBands {
        p25: sorted[len / 4],
        p75: sorted[len * 3 / 4],
    })
}

/// Percentage change of `a` relative to `b`, 2 d.p.
///
/// A zero baseline yields [`Delta::undefined`] (value `0`) instead of an error. A change too
/// large for `Decimal` is an `Overflow` error, never an undefined delta.
pub fn pct(a: Decimal, b: Decimal) -> Result<Delta, AnalyticsError> {
    if b.is_zero() {
        return Ok(Delta::undefined());
    }
    a.checked_sub(b)
        .and_then(|diff| diff.checked_mul(dec!(100)))
        .and_then(|scaled| scaled.checked_div(b))
        .map(|change| Delta::new(round2(change)))
        .ok_or(AnalyticsError::Overflow("percentage change"))
}

/// The most recent observation, or `InsufficientData` on an empty series.
pub fn latest(series: &Series, transform: &'static str) -> Result<Observation, AnalyticsError> {
    series.latest().copied().ok_or(AnalyticsError::InsufficientData {
        transform,
        required: 1,
        available: 0,
    })
}

/// Percentage change of the latest value against the value `months` periods earlier.
pub fn change_over(series: &Series, months: usize) -> Result<Delta, AnalyticsError> {
    const NAME: &str = "lookback change";
    let current = latest(series, NAME)?;
    let base = series.back(months).copied().unwrap_or(current);
    pct(current.value, base.value)
}

/// Difference, in the series' own units, between the latest value and the value `months`
/// periods earlier, 2 d.p. Used for rate levels, where a percentage of a percentage is
/// meaningless.
pub fn point_change(series: &Series, months: usize) -> Result<Decimal, AnalyticsError> {
    const NAME: &str = "point change";
    let current = latest(series, NAME)?;
    let base = series.back(months).copied().unwrap_or(current);
    current
        .value
        .checked_sub(base.value)
        .map(round2)
        .ok_or(AnalyticsError::Overflow(NAME))
}

/// Locates the current rate cycle: the move from the most recent run at the series'
/// historical minimum (tightening) or maximum (easing) up to the first month the current
/// level was reached. A latest value above the minimum reads as tightening when it is at
/// the maximum or the minimum came after the maximum; otherwise it reads as easing. Returns
/// `None` only for an empty or flat series.
pub fn rate_cycle(series: &Series) -> Result<Option<RateCycle>, AnalyticsError> {
    let Some((direction, start, reached)) = cycle_bounds(series.observations()) else {
        return Ok(None);
    };
    let obs = series.observations();
    let (from, to) = (obs[start], obs[reached]);
    let change_pp = to
        .value
        .checked_sub(from.value)
        .ok_or(AnalyticsError::Overflow("rate cycle"))?;
    let moves = obs[start..=reached]
        .windows(2)
        .filter(|w| w[0].value != w[1].value)
        .count();

    Ok(Some(RateCycle {
        direction,
        from_month: from.month,
        from_value: from.value,
        to_month: to.month,
        to_value: to.value,
        change_pp: round2(change_pp),
        moves,
    }))
}

/// Direction, start index and end index of the current cycle.
fn cycle_bounds(obs: &[Observation]) -> Option<(CycleDirection, usize, usize)> {
    let current = obs.last()?.value;

    let min = obs.iter().map(|o| o.value).min()?;
    let max = obs.iter().map(|o| o.value).max()?;
    let last_min = obs.iter().rposition(|o| o.value == min)?;
    let last_max = obs.iter().rposition(|o| o.value == max)?;

    let (direction, extreme, anchor) = if current > min && (current == max || last_min > last_max) {
        (CycleDirection::Tightening, min, last_min)
    } else if current < max {
        (CycleDirection::Easing, max, last_max)
    } else {
        return None;
    };

    // Start of the run that holds the extreme.
    let mut start = anchor;
    while start > 0 && obs[start - 1].value == extreme {
        start -= 1;
    }

    let reached = (anchor..obs.len()).find(|&i| obs[i].value == current)?;
    Some((direction, start, reached))
}
