use crate::math::{SeriesHelper, W_PER_KW};
use crate::params::ParameterSet;
use crate::prelude::CurveResult;
use crate::processing::domain::SpeedDomain;
use serde::{Deserialize, Serialize};

/// Road-load power model: rolling resistance plus aerodynamic drag, both
/// derated by drivetrain slip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResistanceModel {
    /// `f·G / (1-e)` [N].
    rolling_force: f64,
    /// `cx·A·ρ/2 / (1-e)` [N·s²/m²].
    drag_constant: f64,
}

/// Road-load power over the unified speed domain [kW].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResistanceSeries {
    pub rolling: Vec<f64>,
    pub aero: Vec<f64>,
    pub total: Vec<f64>,
}

impl ResistanceModel {
    pub fn from_params(params: &ParameterSet) -> Self {
        let slip = params.slip_factor();
        Self {
            rolling_force: (params.f * params.vehicle_weight()) / slip,
            drag_constant: (params.cx * params.a_frontal * 0.5 * params.rho) / slip,
        }
    }

    /// Rolling-resistance power at `speed_ms` [kW]. Linear in speed.
    pub fn rolling_power(&self, speed_ms: f64) -> f64 {
        (self.rolling_force * speed_ms) / W_PER_KW
    }

    /// Aerodynamic drag power at `speed_ms` [kW]. Cubic in speed.
    pub fn aero_power(&self, speed_ms: f64) -> f64 {
        (self.drag_constant * (speed_ms * speed_ms * speed_ms)) / W_PER_KW
    }

    pub fn total_power(&self, speed_ms: f64) -> f64 {
        self.rolling_power(speed_ms) + self.aero_power(speed_ms)
    }

    pub fn evaluate(&self, domain: &SpeedDomain) -> CurveResult<ResistanceSeries> {
        let rolling: Vec<f64> = domain
            .speed_ms
            .iter()
            .map(|&v| self.rolling_power(v))
            .collect();
        let aero: Vec<f64> = domain.speed_ms.iter().map(|&v| self.aero_power(v)).collect();
        let total = SeriesHelper::add(&rolling, &aero)?;
        Ok(ResistanceSeries {
            rolling,
            aero,
            total,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::vehicle::tests::sample_params;
    use crate::processing::kinematics::gear_speed_series;

    fn close(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol * b.abs().max(1.0)
    }

    #[test]
    fn rolling_power_matches_hand_calculation() {
        let mut params = sample_params();
        params.f = 0.015;
        params.m = 1200.0;
        params.g = 9.81;
        params.e = 0.0;
        let model = ResistanceModel::from_params(&params);
        assert!((model.rolling_power(20.0) - 3.53).abs() < 0.01);
    }

    #[test]
    fn rolling_power_is_linear_in_speed() {
        let model = ResistanceModel::from_params(&sample_params());
        for v in [1.0, 7.5, 33.0] {
            assert!(close(model.rolling_power(2.0 * v), 2.0 * model.rolling_power(v), 1e-12));
        }
        assert_eq!(model.rolling_power(0.0), 0.0);
    }

    #[test]
    fn aero_power_scales_with_speed_cubed() {
        let model = ResistanceModel::from_params(&sample_params());
        for v in [1.0, 12.0, 41.5] {
            assert!(close(model.aero_power(2.0 * v), 8.0 * model.aero_power(v), 1e-12));
        }
    }

    #[test]
    fn aero_power_matches_hand_calculation() {
        let mut params = sample_params();
        params.cx = 0.3;
        params.a_frontal = 2.0;
        params.rho = 1.2;
        params.e = 0.0;
        let model = ResistanceModel::from_params(&params);
        // 0.3 * 2.0 * 0.5 * 1.2 * 30³ / 1000
        assert!((model.aero_power(30.0) - 9.72).abs() < 1e-9);
    }

    #[test]
    fn slip_inflates_both_components() {
        let mut params = sample_params();
        params.e = 0.0;
        let ideal = ResistanceModel::from_params(&params);
        params.e = 0.2;
        let slipping = ResistanceModel::from_params(&params);
        assert!(close(slipping.rolling_power(10.0), ideal.rolling_power(10.0) / 0.8, 1e-12));
        assert!(close(slipping.aero_power(10.0), ideal.aero_power(10.0) / 0.8, 1e-12));
    }

    #[test]
    fn total_is_sum_over_domain() {
        let params = sample_params();
        let domain = SpeedDomain::from_gears(&gear_speed_series(&params));
        let model = ResistanceModel::from_params(&params);
        let series = model.evaluate(&domain).unwrap();

        assert_eq!(series.rolling.len(), domain.len());
        assert_eq!(series.aero.len(), domain.len());
        for (idx, &v) in domain.speed_ms.iter().enumerate() {
            assert!(close(series.total[idx], series.rolling[idx] + series.aero[idx], 1e-12));
            assert!(close(series.total[idx], model.total_power(v), 1e-12));
        }
        assert!(SeriesHelper::is_non_decreasing(&series.total));
    }
}
