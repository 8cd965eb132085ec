use crate::math::SeriesHelper;
use crate::params::ParameterSet;
use crate::prelude::CurveResult;
use crate::processing::domain::SpeedDomain;
use crate::processing::hub::hub_power;
use crate::processing::kinematics::{gear_speed_series, GearSpeedSeries};
use crate::processing::resistance::{ResistanceModel, ResistanceSeries};
use crate::telemetry::LogManager;
use serde::{Deserialize, Serialize};

/// Every series derived from one parameter set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowertrainCurves {
    pub rpm: Vec<f64>,
    pub torque_rpm: Vec<f64>,
    pub power_rpm: Vec<f64>,
    pub gears: Vec<GearSpeedSeries>,
    pub hub_power: Vec<f64>,
    pub domain: SpeedDomain,
    pub resistance: ResistanceSeries,
}

impl PowertrainCurves {
    /// Runs the forward pass: gear speeds, unified speed domain, road load and
    /// hub power.
    pub fn compute(params: &ParameterSet) -> CurveResult<Self> {
        let logger = LogManager::new("curves");

        let gears = gear_speed_series(params);
        for gear in &gears {
            logger.record_series(&format!("gear {} speed [m/s]", gear.gear), &gear.speed_ms);
        }

        let domain = SpeedDomain::from_gears(&gears);
        logger.record_series("unified speed domain [m/s]", &domain.speed_ms);

        let resistance = ResistanceModel::from_params(params).evaluate(&domain)?;
        logger.record_series("road load [kW]", &resistance.total);

        let hub_power = hub_power(params);
        logger.record_series("hub power [kW]", &hub_power);

        logger.record(&format!(
            "{} rpm samples, {} gears, {} unified speeds",
            params.rpm.len(),
            gears.len(),
            domain.len()
        ));

        Ok(Self {
            rpm: params.rpm.clone(),
            torque_rpm: params.torque_rpm.clone(),
            power_rpm: params.power_rpm.clone(),
            gears,
            hub_power,
            domain,
            resistance,
        })
    }

    pub fn peak_hub_power(&self) -> Option<f64> {
        SeriesHelper::max(&self.hub_power)
    }
}
