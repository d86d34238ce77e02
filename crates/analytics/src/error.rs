use core_types::{CoreError, Month};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalyticsError {
    #[error(
        "Not enough data to calculate {transform}: requires {required} observations, got {available}"
    )]
    InsufficientData {
        transform: &'static str,
        required: usize,
        available: usize,
    },

    #[error("Invalid window size {window} for {transform}: must be greater than 0")]
    InvalidWindow {
        transform: &'static str,
        window: usize,
    },

    #[error("Calculation error: Division by zero in {transform}, previous value before {month} is zero")]
    ZeroBaseline {
        transform: &'static str,
        month: Month,
    },

    #[error("Arithmetic overflow while calculating {0}")]
    Overflow(&'static str),

    #[error("Error in calculation: {0}")]
    Calculation(String),

    #[error("Indicator settings are invalid: {0}")]
    InvalidSettings(String),

    #[error(transparent)]
    Core(#[from] CoreError),
}
