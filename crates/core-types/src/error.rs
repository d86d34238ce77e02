use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid month key '{0}': expected YYYY-MM")]
    InvalidMonth(String),

    #[error("Malformed series '{series}' at index {index}: {reason}")]
    MalformedSeries {
        series: String,
        index: usize,
        reason: String,
    },

    #[error("Unknown period window '{0}': expected one of 12m, 24m, 36m")]
    UnknownPeriod(String),
}
