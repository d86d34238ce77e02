//! # Analytics
//!
//! Turns the raw monthly series into derived indicators and a headline snapshot.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** A pure logic crate. It depends only on `core-types` and on the
//!   `configuration` structs that parameterize it; it performs no I/O.
//! - **Stateless Calculation:** Transforms are free functions over immutable input; the
//!   `AnalyticsEngine` holds nothing but its settings. The same input always produces the
//!   same output.
//! - **Exact Rounding:** Arithmetic is done on `Decimal` and rounded half away from zero, so
//!   results do not depend on floating-point summation order.
//!
//! ## Public API
//!
//! - `transforms`: trailing compounding, returns, rolling volatility, percentile rank, deltas.
//! - `AnalyticsEngine`: composes the transforms into an `Analysis`.
//! - `KpiSnapshot`: the full-history headline indicators, card statuses and insights.
//! - `AnalyticsError`: the specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod classify;
pub mod engine;
pub mod error;
pub mod insights;
pub mod report;
pub mod rounding;
pub mod transforms;

// Re-export the key components to create a clean, public-facing API.
pub use classify::{Indicator, InflationBand, KpiCard, KpiStatus, PercentileLevel};
pub use engine::AnalyticsEngine;
pub use error::AnalyticsError;
pub use insights::{Insight, InsightCode, Severity};
pub use report::{
    Analysis, DerivedSeries, ExchangeRateKpi, InflationKpi, KpiSnapshot, LookbackChange,
    PolicyRateKpi,
};
pub use transforms::{CycleDirection, Delta, PercentileBands, RateCycle};
