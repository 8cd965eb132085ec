//! SVG rendering for assembled powertrain chart sets.

pub mod render;

pub use render::{render_chart_set, render_view_svg, RenderError, FIGURE_SIZE};
