use crate::error::CoreError;
use crate::series::{Observation, Series};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The trailing slice of history shown on charts and tables.
///
/// Applying a window never fails: a series shorter than the window is returned whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum PeriodWindow {
    #[serde(rename = "12m")]
    #[cfg_attr(feature = "clap", value(name = "12m"))]
    Last12,
    #[serde(rename = "24m")]
    #[cfg_attr(feature = "clap", value(name = "24m"))]
    Last24,
    #[default]
    #[serde(rename = "36m")]
    #[cfg_attr(feature = "clap", value(name = "36m"))]
    Last36,
}

impl PeriodWindow {
    pub const ALL: [PeriodWindow; 3] = [Self::Last12, Self::Last24, Self::Last36];

    pub fn months(&self) -> usize {
        match self {
            PeriodWindow::Last12 => 12,
            PeriodWindow::Last24 => 24,
            PeriodWindow::Last36 => 36,
        }
    }

    /// The last `min(months, len)` observations of `series`.
    pub fn apply<'a>(&self, series: &'a Series) -> &'a [Observation] {
        series.tail(self.months())
    }
}

impl fmt::Display for PeriodWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}m", self.months())
    }
}

impl FromStr for PeriodWindow {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "12m" | "12" => Ok(PeriodWindow::Last12),
            "24m" | "24" => Ok(PeriodWindow::Last24),
            "36m" | "36" => Ok(PeriodWindow::Last36),
            _ => Err(CoreError::UnknownPeriod(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::month::Month;
    use rust_decimal::Decimal;

    fn months(n: usize) -> Series {
        let observations = (0..n)
            .map(|i| {
                let month = Month::new(2020 + (i / 12) as i32, (i % 12) as u32 + 1).unwrap();
                Observation::new(month, Decimal::from(i))
            })
            .collect();
        Series::new("counter", observations).unwrap()
    }

    #[test]
    fn apply_takes_suffix() {
        let s = months(40);
        let view = PeriodWindow::Last12.apply(&s);
        assert_eq!(view.len(), 12);
        assert_eq!(view[0].value, Decimal::from(28));
        assert_eq!(view[11].value, Decimal::from(39));
    }

    #[test]
    fn apply_on_short_series_returns_everything() {
        let s = months(20);
        assert_eq!(PeriodWindow::Last24.apply(&s).len(), 20);
        assert_eq!(PeriodWindow::Last36.apply(&s).len(), 20);
    }

    #[test]
    fn parses_and_displays() {
        for window in PeriodWindow::ALL {
            assert_eq!(window.to_string().parse::<PeriodWindow>(), Ok(window));
        }
        assert_eq!("24".parse::<PeriodWindow>(), Ok(PeriodWindow::Last24));
        assert!("6m".parse::<PeriodWindow>().is_err());
        assert_eq!(PeriodWindow::default(), PeriodWindow::Last36);
    }
}
