//! Core calculations for vehicle powertrain performance curves.
//!
//! A single forward pass turns a loaded [`params::ParameterSet`] into per-gear
//! vehicle speeds, hub power and road-load power, then packages them as labeled
//! series for a chart renderer.

pub mod chart_interface;
pub mod math;
pub mod params;
pub mod prelude;
pub mod processing;
pub mod telemetry;

pub use chart_interface::{ChartSet, ChartView, LabeledSeries, TopSpeedMarker};
pub use params::ParameterSet;
pub use prelude::{CurveError, CurveResult};
pub use processing::PowertrainCurves;
