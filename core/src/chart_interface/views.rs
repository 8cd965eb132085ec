use crate::chart_interface::series::{LabeledSeries, VerticalMarker};
use crate::prelude::{CurveError, CurveResult};
use crate::processing::PowertrainCurves;
use serde::{Deserialize, Serialize};

const SPEED_AXIS: &str = "Speed [km/h]";
const RPM_AXIS: &str = "RPM";
const POWER_AXIS: &str = "Power [kW]";

/// Hand-supplied top-speed annotation drawn on the last chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TopSpeedMarker {
    pub speed_kmh: f64,
    pub y_min: f64,
    pub y_max: f64,
    /// Horizontal distance from the line to the label [km/h].
    pub label_offset_kmh: f64,
    pub label_y: f64,
}

impl Default for TopSpeedMarker {
    fn default() -> Self {
        Self {
            speed_kmh: 158.5,
            y_min: 0.0,
            y_max: 100.0,
            label_offset_kmh: 5.0,
            label_y: 60.0,
        }
    }
}

impl TopSpeedMarker {
    pub fn to_vertical_marker(&self) -> VerticalMarker {
        VerticalMarker {
            x: self.speed_kmh,
            y_min: self.y_min,
            y_max: self.y_max,
            label: format!("Vmax = {} km/h", self.speed_kmh),
            label_x: self.speed_kmh + self.label_offset_kmh,
            label_y: self.label_y,
        }
    }
}

/// One figure: title, axis labels and the lines drawn on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartView {
    pub id: String,
    pub title: String,
    pub x_label: String,
    #[serde(default)]
    pub y_label: Option<String>,
    pub series: Vec<LabeledSeries>,
    #[serde(default)]
    pub markers: Vec<VerticalMarker>,
}

impl ChartView {
    fn new(id: &str, title: &str, x_label: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            x_label: x_label.to_string(),
            y_label: None,
            series: Vec::new(),
            markers: Vec::new(),
        }
    }

    fn with_y_label(mut self, label: &str) -> Self {
        self.y_label = Some(label.to_string());
        self
    }

    fn with_series(mut self, series: impl IntoIterator<Item = LabeledSeries>) -> Self {
        self.series.extend(series);
        self
    }

    /// Axis bounds covering every series and marker as `(x_min, x_max, y_min, y_max)`.
    pub fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
        let points = self.series.iter().flat_map(|s| s.points()).chain(
            self.markers
                .iter()
                .flat_map(|m| [(m.x, m.y_min), (m.x, m.y_max), (m.label_x, m.label_y)]),
        );
        points.fold(None, |acc, (x, y)| match acc {
            None => Some((x, x, y, y)),
            Some((x0, x1, y0, y1)) => Some((x0.min(x), x1.max(x), y0.min(y), y1.max(y))),
        })
    }
}

/// Ordered list of charts handed to the renderer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartSet {
    pub views: Vec<ChartView>,
}

impl ChartSet {
    /// Packages computed curves into the six standard views. No values are
    /// derived here.
    pub fn assemble(curves: &PowertrainCurves, marker: &TopSpeedMarker) -> CurveResult<Self> {
        if curves.rpm.is_empty() {
            return Err(CurveError::EmptySeries("rpm".into()));
        }
        if curves.domain.is_empty() {
            return Err(CurveError::EmptySeries("unified speed domain".into()));
        }

        let torque_power = ChartView::new("torque_power", "Torque and power curves", RPM_AXIS)
            .with_series([
                LabeledSeries::new("Torque [Nm]", curves.rpm.clone(), curves.torque_rpm.clone())
                    .with_rgb((0, 0, 255)),
                LabeledSeries::new("Power [kW]", curves.rpm.clone(), curves.power_rpm.clone())
                    .with_rgb((255, 0, 0)),
            ]);

        let gear_speeds = ChartView::new("gear_speeds", "Vehicle speed in each gear", RPM_AXIS)
            .with_y_label(SPEED_AXIS)
            .with_series(curves.gears.iter().map(|gear| {
                LabeledSeries::new(
                    format!("Speed in gear {} [km/h]", gear.gear),
                    curves.rpm.clone(),
                    gear.speed_kmh.clone(),
                )
            }));

        let hub_series = || {
            curves.gears.iter().map(move |gear| {
                LabeledSeries::new(
                    format!("Power in gear {} [kW]", gear.gear),
                    gear.speed_kmh.clone(),
                    curves.hub_power.clone(),
                )
            })
        };
        let road_load = || {
            LabeledSeries::new(
                "Pa + Pr [kW]",
                curves.domain.speed_kmh.clone(),
                curves.resistance.total.clone(),
            )
        };

        let hub_power = ChartView::new("hub_power", "Hub power in each gear", SPEED_AXIS)
            .with_y_label(POWER_AXIS)
            .with_series(hub_series());

        let resistance_power = ChartView::new(
            "resistance_power",
            "Rolling and aerodynamic resistance power",
            SPEED_AXIS,
        )
        .with_y_label(POWER_AXIS)
        .with_series([
            LabeledSeries::new(
                "Rolling resistance power [kW]",
                curves.domain.speed_kmh.clone(),
                curves.resistance.rolling.clone(),
            ),
            LabeledSeries::new(
                "Aerodynamic drag power [kW]",
                curves.domain.speed_kmh.clone(),
                curves.resistance.aero.clone(),
            ),
        ]);

        let hub_vs_resistance = ChartView::new(
            "hub_vs_resistance",
            "Hub power and resistance power",
            SPEED_AXIS,
        )
        .with_y_label(POWER_AXIS)
        .with_series(hub_series().chain([road_load()]));

        let mut top_speed = ChartView::new(
            "top_speed",
            "Hub power and resistance power",
            SPEED_AXIS,
        )
        .with_y_label(POWER_AXIS)
        .with_series(hub_series().chain([road_load()]));
        top_speed.markers.push(marker.to_vertical_marker());

        Ok(Self {
            views: vec![
                torque_power,
                gear_speeds,
                hub_power,
                resistance_power,
                hub_vs_resistance,
                top_speed,
            ],
        })
    }

    pub fn view(&self, id: &str) -> Option<&ChartView> {
        self.views.iter().find(|view| view.id == id)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart_interface::series::LineStyle;
    use crate::params::vehicle::tests::sample_params;

    fn chart_set() -> (PowertrainCurves, ChartSet) {
        let curves = PowertrainCurves::compute(&sample_params()).unwrap();
        let charts = ChartSet::assemble(&curves, &TopSpeedMarker::default()).unwrap();
        (curves, charts)
    }

    #[test]
    fn assemble_produces_six_views_in_order() {
        let (_, charts) = chart_set();
        let ids: Vec<&str> = charts.views.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "torque_power",
                "gear_speeds",
                "hub_power",
                "resistance_power",
                "hub_vs_resistance",
                "top_speed"
            ]
        );
    }

    #[test]
    fn torque_power_view_uses_fixed_colours() {
        let (curves, charts) = chart_set();
        let view = charts.view("torque_power").unwrap();
        assert_eq!(view.series.len(), 2);
        assert_eq!(view.series[0].x, curves.rpm);
        assert_eq!(view.series[0].y, curves.torque_rpm);
        assert_eq!(view.series[1].style, LineStyle::Solid { rgb: (255, 0, 0) });
    }

    #[test]
    fn hub_power_views_share_y_values_across_gears() {
        let (curves, charts) = chart_set();
        let view = charts.view("hub_power").unwrap();
        assert_eq!(view.series.len(), 5);
        for (series, gear) in view.series.iter().zip(&curves.gears) {
            assert_eq!(series.x, gear.speed_kmh);
            assert_eq!(series.y, curves.hub_power);
        }
    }

    #[test]
    fn combined_views_end_with_road_load() {
        let (curves, charts) = chart_set();
        for id in ["hub_vs_resistance", "top_speed"] {
            let view = charts.view(id).unwrap();
            assert_eq!(view.series.len(), 6);
            let last = view.series.last().unwrap();
            assert_eq!(last.label, "Pa + Pr [kW]");
            assert_eq!(last.x, curves.domain.speed_kmh);
            assert_eq!(last.y, curves.resistance.total);
        }
        assert!(charts.view("hub_vs_resistance").unwrap().markers.is_empty());
    }

    #[test]
    fn only_last_view_carries_top_speed_marker() {
        let (_, charts) = chart_set();
        let marker = &charts.view("top_speed").unwrap().markers[0];
        assert_eq!(marker.x, 158.5);
        assert_eq!((marker.y_min, marker.y_max), (0.0, 100.0));
        assert_eq!((marker.label_x, marker.label_y), (163.5, 60.0));
        assert_eq!(marker.label, "Vmax = 158.5 km/h");
        let with_markers = charts.views.iter().filter(|v| !v.markers.is_empty()).count();
        assert_eq!(with_markers, 1);
    }

    #[test]
    fn bounds_include_marker() {
        let (_, charts) = chart_set();
        let (_, x_max, y_min, y_max) = charts.view("top_speed").unwrap().bounds().unwrap();
        assert!(x_max >= 163.5);
        assert!(y_min <= 0.0);
        assert!(y_max >= 100.0);
    }

    #[test]
    fn json_export_restores_chart_set() {
        let (_, charts) = chart_set();
        let text = charts.to_json().unwrap();
        assert_eq!(ChartSet::from_json(&text).unwrap(), charts);
    }

    #[test]
    fn assemble_rejects_empty_curves() {
        let (mut curves, _) = chart_set();
        curves.rpm.clear();
        assert!(matches!(
            ChartSet::assemble(&curves, &TopSpeedMarker::default()),
            Err(CurveError::EmptySeries(_))
        ));
    }
}
