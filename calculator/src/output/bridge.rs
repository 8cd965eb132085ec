use crate::workflow::config::WorkflowConfig;
use anyhow::Context;
use log::info;
use ptcore::ChartSet;
use std::fs;
use std::path::PathBuf;

pub const CHART_SET_FILE: &str = "chart_set.json";

/// Hands an assembled chart set to its consumers: the JSON export and the SVG
/// renderer.
pub struct OutputBridge {
    output_dir: PathBuf,
    json: bool,
    render: bool,
}

impl OutputBridge {
    pub fn new(config: &WorkflowConfig) -> Self {
        Self {
            output_dir: config.output_dir.clone(),
            json: config.json,
            render: config.render,
        }
    }

    /// Returns every file written.
    pub fn publish(&self, charts: &ChartSet) -> anyhow::Result<Vec<PathBuf>> {
        let mut written = Vec::new();
        if !self.json && !self.render {
            return Ok(written);
        }
        fs::create_dir_all(&self.output_dir)
            .with_context(|| format!("creating output directory {}", self.output_dir.display()))?;

        if self.json {
            let path = self.output_dir.join(CHART_SET_FILE);
            let text = charts.to_json().context("serializing chart set")?;
            fs::write(&path, text)
                .with_context(|| format!("writing chart set {}", path.display()))?;
            info!("chart set exported to {}", path.display());
            written.push(path);
        }
        if self.render {
            let figures = visualizer::render_chart_set(charts, &self.output_dir)
                .context("rendering charts")?;
            written.extend(figures);
        }
        Ok(written)
    }

    pub fn publish_status(&self, message: &str) {
        println!("[charts] {}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::config::default_params_path;
    use ptcore::{ParameterSet, PowertrainCurves, TopSpeedMarker};

    fn charts() -> ChartSet {
        let params = ParameterSet::load(default_params_path()).unwrap();
        let curves = PowertrainCurves::compute(&params).unwrap();
        ChartSet::assemble(&curves, &TopSpeedMarker::default()).unwrap()
    }

    #[test]
    fn publish_exports_json_only() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = WorkflowConfig::from_args(None, dir.path().join("out"), true, false, None);
        let written = OutputBridge::new(&cfg).publish(&charts()).unwrap();

        assert_eq!(written, vec![dir.path().join("out").join(CHART_SET_FILE)]);
        let restored = ChartSet::from_json(&fs::read_to_string(&written[0]).unwrap()).unwrap();
        assert_eq!(restored.views.len(), 6);
    }

    #[test]
    fn publish_renders_one_svg_per_view() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = WorkflowConfig::from_args(None, dir.path().to_path_buf(), false, true, None);
        let written = OutputBridge::new(&cfg).publish(&charts()).unwrap();

        assert_eq!(written.len(), 6);
        assert!(dir.path().join("top_speed.svg").exists());
        assert!(!dir.path().join(CHART_SET_FILE).exists());
    }

    #[test]
    fn publish_with_nothing_enabled_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("unused");
        let cfg = WorkflowConfig::from_args(None, out.clone(), false, false, None);
        assert!(OutputBridge::new(&cfg).publish(&charts()).unwrap().is_empty());
        assert!(!out.exists());
    }
}
