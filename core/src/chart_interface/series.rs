use serde::{Deserialize, Serialize};

/// Line appearance hint for the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineStyle {
    /// Renderer picks the colour from its palette.
    Auto,
    /// Fixed RGB colour.
    Solid { rgb: (u8, u8, u8) },
}

/// One plotted line: x and y samples with their legend label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledSeries {
    pub label: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub style: LineStyle,
}

impl LabeledSeries {
    pub fn new(label: impl Into<String>, x: Vec<f64>, y: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            x,
            y,
            style: LineStyle::Auto,
        }
    }

    pub fn with_rgb(mut self, rgb: (u8, u8, u8)) -> Self {
        self.style = LineStyle::Solid { rgb };
        self
    }

    /// (x, y) pairs up to the shorter of the two sequences.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty() || self.y.is_empty()
    }
}

/// Dashed vertical reference line with a rotated text label beside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerticalMarker {
    pub x: f64,
    pub y_min: f64,
    pub y_max: f64,
    pub label: String,
    pub label_x: f64,
    pub label_y: f64,
}
