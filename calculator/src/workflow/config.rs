use anyhow::Context;
use ptcore::TopSpeedMarker;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_OUTPUT_DIR: &str = "charts";

/// Parameter file shipped next to this crate's manifest.
pub fn default_params_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("params-ka.yaml")
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowConfig {
    pub params: PathBuf,
    pub output_dir: PathBuf,
    pub json: bool,
    pub render: bool,
    pub top_speed_marker: TopSpeedMarker,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            params: default_params_path(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            json: true,
            render: true,
            top_speed_marker: TopSpeedMarker::default(),
        }
    }
}

impl WorkflowConfig {
    /// Loads a workflow file. Relative paths inside it are resolved against the
    /// file's own directory.
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading workflow config {}", path_ref.display()))?;
        let mut config: WorkflowConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing workflow config {}", path_ref.display()))?;

        if let Some(base) = path_ref.parent() {
            if config.params.is_relative() {
                config.params = base.join(&config.params);
            }
            if config.output_dir.is_relative() {
                config.output_dir = base.join(&config.output_dir);
            }
        }
        Ok(config)
    }

    pub fn from_args(
        params: Option<PathBuf>,
        output_dir: PathBuf,
        json: bool,
        render: bool,
        top_speed_kmh: Option<f64>,
    ) -> Self {
        let mut top_speed_marker = TopSpeedMarker::default();
        if let Some(speed_kmh) = top_speed_kmh {
            top_speed_marker.speed_kmh = speed_kmh;
        }
        Self {
            params: params.unwrap_or_else(default_params_path),
            output_dir,
            json,
            render,
            top_speed_marker,
        }
    }
}
