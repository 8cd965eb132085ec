use crate::workflow::config::WorkflowConfig;
use anyhow::Context;
use log::info;
use ptcore::{ChartSet, ParameterSet, PowertrainCurves};

pub struct WorkflowResult {
    pub curves: PowertrainCurves,
    pub charts: ChartSet,
}

#[derive(Clone)]
pub struct Runner {
    config: WorkflowConfig,
}

impl Runner {
    pub fn new(config: WorkflowConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &WorkflowConfig {
        &self.config
    }

    pub fn execute(&self, params: &ParameterSet) -> anyhow::Result<WorkflowResult> {
        let curves = PowertrainCurves::compute(params).context("computing powertrain curves")?;
        let charts = ChartSet::assemble(&curves, &self.config.top_speed_marker)
            .context("assembling chart views")?;
        info!(
            "workflow produced {} chart views from {} rpm samples",
            charts.views.len(),
            curves.rpm.len()
        );
        Ok(WorkflowResult { curves, charts })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::config::default_params_path;
    use std::path::PathBuf;

    #[test]
    fn runner_executes_workflow_on_shipped_params() {
        let cfg = WorkflowConfig::from_args(None, PathBuf::from("charts"), false, false, None);
        let params = ParameterSet::load(&cfg.params).unwrap();
        let runner = Runner::new(cfg);
        let result = runner.execute(&params).unwrap();

        assert_eq!(result.charts.views.len(), 6);
        assert_eq!(result.curves.gears.len(), 5);
        assert_eq!(result.curves.hub_power.len(), params.rpm.len());
        assert!(result.curves.domain.len() <= 5 * params.rpm.len());
    }

    #[test]
    fn shipped_params_reach_configured_top_speed_in_fifth_gear() {
        let params = ParameterSet::load(default_params_path()).unwrap();
        let result = Runner::new(WorkflowConfig::default()).execute(&params).unwrap();
        let fifth = result.curves.gears.last().unwrap();
        assert!(fifth.top_speed_kmh().unwrap() > 158.5);
    }
}
