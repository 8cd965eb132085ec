use log::info;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontTransform;
use ptcore::chart_interface::{ChartSet, ChartView, LineStyle, VerticalMarker};
use std::fs;
use std::ops::Range;
use std::path::{Path, PathBuf};

pub const FIGURE_SIZE: (u32, u32) = (1024, 720);

const DASH_COUNT: usize = 25;
const LINE_WIDTH: u32 = 2;

// Default matplotlib colour cycle.
const PALETTE: [RGBColor; 10] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
    RGBColor(227, 119, 194),
    RGBColor(127, 127, 127),
    RGBColor(188, 189, 34),
    RGBColor(23, 190, 207),
];

#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    #[error("chart `{0}` has nothing to draw")]
    EmptyView(String),
    #[error("drawing chart `{view}` failed: {message}")]
    Drawing { view: String, message: String },
    #[error("creating output directory {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Writes every view of `charts` to `<output_dir>/<view id>.svg`.
pub fn render_chart_set(charts: &ChartSet, output_dir: &Path) -> Result<Vec<PathBuf>, RenderError> {
    fs::create_dir_all(output_dir).map_err(|source| RenderError::Io {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::with_capacity(charts.views.len());
    for view in &charts.views {
        let path = output_dir.join(format!("{}.svg", view.id));
        render_view_svg(view, &path, FIGURE_SIZE)?;
        info!("rendered {} -> {}", view.id, path.display());
        written.push(path);
    }
    Ok(written)
}

pub fn render_view_svg(view: &ChartView, path: &Path, size: (u32, u32)) -> Result<(), RenderError> {
    let (x_range, y_range) =
        padded_ranges(view).ok_or_else(|| RenderError::EmptyView(view.id.clone()))?;

    let root = SVGBackend::new(path, size).into_drawing_area();
    draw_view(&root, view, x_range, y_range)
        .and_then(|_| root.present())
        .map_err(|err| RenderError::Drawing {
            view: view.id.clone(),
            message: err.to_string(),
        })
}

fn draw_view<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    view: &ChartView,
    x_range: Range<f64>,
    y_range: Range<f64>,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(root)
        .margin(15)
        .caption(view.title.as_str(), ("sans-serif", 22))
        .set_label_area_size(LabelAreaPosition::Bottom, 45)
        .set_label_area_size(LabelAreaPosition::Left, 60)
        .build_cartesian_2d(x_range, y_range)?;

    let mut mesh = chart.configure_mesh();
    mesh.x_desc(view.x_label.as_str())
        .light_line_style(&BLACK.mix(0.05))
        .bold_line_style(&BLACK.mix(0.15));
    if let Some(y_label) = &view.y_label {
        mesh.y_desc(y_label.as_str());
    }
    mesh.draw()?;

    for (idx, series) in view.series.iter().enumerate() {
        let colour = series_colour(series.style, idx);
        chart
            .draw_series(LineSeries::new(series.points(), colour.stroke_width(LINE_WIDTH)))?
            .label(series.label.as_str())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], colour.stroke_width(LINE_WIDTH))
            });
    }

    for marker in &view.markers {
        chart.draw_series(
            dash_segments(marker)
                .into_iter()
                .map(|segment| PathElement::new(segment, BLACK.stroke_width(1))),
        )?;
        let label_style = ("sans-serif", 14)
            .into_font()
            .transform(FontTransform::Rotate270)
            .color(&BLACK);
        chart.draw_series(std::iter::once(Text::new(
            marker.label.clone(),
            (marker.label_x, marker.label_y),
            label_style,
        )))?;
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    Ok(())
}

fn series_colour(style: LineStyle, idx: usize) -> RGBColor {
    match style {
        LineStyle::Solid { rgb: (r, g, b) } => RGBColor(r, g, b),
        LineStyle::Auto => PALETTE[idx % PALETTE.len()],
    }
}

/// Axis ranges with a 5% margin on every side.
fn padded_ranges(view: &ChartView) -> Option<(Range<f64>, Range<f64>)> {
    let (x_min, x_max, y_min, y_max) = view.bounds()?;
    Some((pad(x_min, x_max), pad(y_min, y_max)))
}

fn pad(min: f64, max: f64) -> Range<f64> {
    let span = max - min;
    let margin = if span > 0.0 { 0.05 * span } else { 1.0 };
    (min - margin)..(max + margin)
}

fn dash_segments(marker: &VerticalMarker) -> Vec<Vec<(f64, f64)>> {
    let step = (marker.y_max - marker.y_min) / DASH_COUNT as f64;
    (0..DASH_COUNT)
        .map(|idx| {
            let start = marker.y_min + step * idx as f64;
            vec![(marker.x, start), (marker.x, start + 0.6 * step)]
        })
        .collect()
}
