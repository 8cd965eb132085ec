use crate::math::SeriesHelper;
use crate::params::ParameterSet;

/// Engine power left at the wheel hub after transmission losses [kW].
///
/// Index-aligned with `rpm`. The values do not depend on the selected gear;
/// only the speed each sample maps to does.
pub fn hub_power(params: &ParameterSet) -> Vec<f64> {
    SeriesHelper::scale(&params.power_rpm, params.n_transm)
}
