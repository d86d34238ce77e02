//! # Core Types
//!
//! Layer 0 of the workspace: the canonical monthly series the rest of the system reads.
//!
//! - `Month`: a "YYYY-MM" key, the join key across all series.
//! - `Observation` / `Series`: an ordered, validated, immutable monthly series.
//! - `SeriesStore`: owns the three canonical series (policy rate, inflation, exchange rate).
//! - `PeriodWindow`: the trailing 12/24/36-month view selector.

pub mod error;
pub mod month;
pub mod period;
pub mod series;
pub mod store;

// Re-export the core types to provide a clean public API.
pub use error::CoreError;
pub use month::Month;
pub use period::PeriodWindow;
pub use series::{Observation, Series};
pub use store::{SeriesKind, SeriesSet, SeriesStore};
