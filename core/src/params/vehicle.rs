use crate::math::SeriesHelper;
use crate::prelude::{CurveError, CurveResult, GEAR_COUNT};
use serde::{Deserialize, Serialize};

/// Vehicle and engine parameters read from the parameter file.
///
/// Field names match the keys of the YAML document. Every key is required;
/// nothing is defaulted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterSet {
    /// Sampled engine speeds [rpm], strictly increasing.
    pub rpm: Vec<f64>,
    /// Engine torque at each `rpm` sample [N·m].
    pub torque_rpm: Vec<f64>,
    /// Engine power at each `rpm` sample [kW].
    pub power_rpm: Vec<f64>,
    /// Drivetrain slip fraction.
    pub e: f64,
    /// Rolling-resistance coefficient.
    pub f: f64,
    /// Aerodynamic drag coefficient.
    pub cx: f64,
    /// Frontal area [m²].
    pub a_frontal: f64,
    /// Air density [kg/m³].
    pub rho: f64,
    /// Vehicle mass [kg].
    pub m: f64,
    /// Gravitational acceleration [m/s²].
    pub g: f64,
    /// Transmission efficiency.
    pub n_transm: f64,
    /// Dynamic wheel radius [m].
    pub r_d: f64,
    pub i_1: f64,
    pub i_2: f64,
    pub i_3: f64,
    pub i_4: f64,
    pub i_5: f64,
    /// Final-drive ratio.
    pub i_d: f64,
}

impl ParameterSet {
    pub fn gear_ratios(&self) -> [f64; GEAR_COUNT] {
        [self.i_1, self.i_2, self.i_3, self.i_4, self.i_5]
    }

    /// Vehicle weight G = m·g [N].
    pub fn vehicle_weight(&self) -> f64 {
        self.m * self.g
    }

    /// Remaining fraction after drivetrain slip, `1 - e`.
    pub fn slip_factor(&self) -> f64 {
        1.0 - self.e
    }

    /// Rejects parameter sets the curve formulas cannot be evaluated on.
    pub fn validate(&self) -> CurveResult<()> {
        if self.rpm.is_empty() {
            return Err(invalid("rpm must contain at least one sample"));
        }
        for (key, values) in [("torque_rpm", &self.torque_rpm), ("power_rpm", &self.power_rpm)] {
            if values.len() != self.rpm.len() {
                return Err(invalid(format!(
                    "{} has {} samples, rpm has {}",
                    key,
                    values.len(),
                    self.rpm.len()
                )));
            }
        }
        for (key, values) in [
            ("rpm", &self.rpm),
            ("torque_rpm", &self.torque_rpm),
            ("power_rpm", &self.power_rpm),
        ] {
            if let Some(idx) = values.iter().position(|v| !v.is_finite()) {
                return Err(invalid(format!("{}[{}] is not finite", key, idx)));
            }
        }
        if !SeriesHelper::is_strictly_increasing(&self.rpm) {
            return Err(invalid("rpm must be strictly increasing"));
        }

        let scalars = [
            ("e", self.e),
            ("f", self.f),
            ("cx", self.cx),
            ("a_frontal", self.a_frontal),
            ("rho", self.rho),
            ("m", self.m),
            ("g", self.g),
            ("n_transm", self.n_transm),
            ("r_d", self.r_d),
            ("i_1", self.i_1),
            ("i_2", self.i_2),
            ("i_3", self.i_3),
            ("i_4", self.i_4),
            ("i_5", self.i_5),
            ("i_d", self.i_d),
        ];
        if let Some((key, value)) = scalars.iter().find(|(_, v)| !v.is_finite()) {
            return Err(invalid(format!("{} = {} is not finite", key, value)));
        }

        if !(0.0..1.0).contains(&self.e) {
            return Err(invalid(format!("e = {} must be in [0, 1)", self.e)));
        }
        if !(self.n_transm > 0.0 && self.n_transm <= 1.0) {
            return Err(invalid(format!(
                "n_transm = {} must be in (0, 1]",
                self.n_transm
            )));
        }
        let positive = [
            ("m", self.m),
            ("g", self.g),
            ("r_d", self.r_d),
            ("i_1", self.i_1),
            ("i_2", self.i_2),
            ("i_3", self.i_3),
            ("i_4", self.i_4),
            ("i_5", self.i_5),
            ("i_d", self.i_d),
        ];
        if let Some((key, value)) = positive.iter().find(|(_, v)| *v <= 0.0) {
            return Err(invalid(format!("{} = {} must be positive", key, value)));
        }
        let non_negative = [
            ("f", self.f),
            ("cx", self.cx),
            ("a_frontal", self.a_frontal),
            ("rho", self.rho),
        ];
        if let Some((key, value)) = non_negative.iter().find(|(_, v)| *v < 0.0) {
            return Err(invalid(format!("{} = {} must not be negative", key, value)));
        }
        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> CurveError {
    CurveError::InvalidParameter(message.into())
}
