//! # Projection
//!
//! The last stage before rendering: joins the canonical series and their derived
//! counterparts by month into row records for the selected `PeriodWindow`.
//!
//! Missing counterparts are `None`, never zero, so a gap cannot be mistaken for a value.

pub mod projector;
pub mod view;

pub use projector::ViewProjector;
pub use view::{DashboardRow, DashboardView, InflationBar, PolicyFxPoint};
