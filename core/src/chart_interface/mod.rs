pub mod series;
pub mod views;

pub use series::{LabeledSeries, LineStyle, VerticalMarker};
pub use views::{ChartSet, ChartView, TopSpeedMarker};
