use crate::math::{SeriesHelper, MS_TO_KMH, RPM_TO_RAD_PER_S};
use crate::params::ParameterSet;
use serde::{Deserialize, Serialize};

/// Vehicle speed over the `rpm` samples while held in one gear.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GearSpeedSeries {
    /// Gear number, starting at 1.
    pub gear: usize,
    pub ratio: f64,
    /// Index-aligned with `rpm` [m/s].
    pub speed_ms: Vec<f64>,
    /// `speed_ms` converted to km/h.
    pub speed_kmh: Vec<f64>,
}

impl GearSpeedSeries {
    pub fn top_speed_kmh(&self) -> Option<f64> {
        SeriesHelper::max(&self.speed_kmh)
    }
}

/// Metres per second of vehicle speed per engine rpm in a gear of `ratio`:
/// `(π/30)·(1-e)·r_d / (i_g·i_d)`.
pub fn speed_factor(params: &ParameterSet, ratio: f64) -> f64 {
    RPM_TO_RAD_PER_S * params.slip_factor() * params.r_d / (ratio * params.i_d)
}

pub fn vehicle_speed(params: &ParameterSet, rpm: f64, ratio: f64) -> f64 {
    speed_factor(params, ratio) * rpm
}

/// Speed series for every gear, in gear order.
pub fn gear_speed_series(params: &ParameterSet) -> Vec<GearSpeedSeries> {
    params
        .gear_ratios()
        .iter()
        .enumerate()
        .map(|(idx, &ratio)| {
            let speed_ms = SeriesHelper::scale(&params.rpm, speed_factor(params, ratio));
            let speed_kmh = SeriesHelper::scale(&speed_ms, MS_TO_KMH);
            GearSpeedSeries {
                gear: idx + 1,
                ratio,
                speed_ms,
                speed_kmh,
            }
        })
        .collect()
}
