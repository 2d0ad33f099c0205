//! dashboard-charts: deterministic chart geometry and drawing for KPI dashboards.
//!
//! The crate keeps a strict split between pure geometry projection (`core`),
//! the injected drawing capability (`render`) and the per-kind renderers and
//! orchestration the dashboard shell calls into (`api`).

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod synthetic;
pub mod telemetry;

pub use api::{ChartBoard, ChartData, ChartHandle, ChartKind, ChartOptions, draw};
pub use error::{ChartError, ChartResult};
