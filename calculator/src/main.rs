use anyhow::Context;
use clap::Parser;
use log::info;
use output::bridge::OutputBridge;
use output::summary::RunSummary;
use ptcore::{CurveError, ParameterSet};
use std::path::PathBuf;
use std::process;
use workflow::config::{WorkflowConfig, DEFAULT_OUTPUT_DIR};
use workflow::runner::Runner;

mod output;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Vehicle powertrain curve calculator")]
struct Args {
    /// Load a workflow config from YAML (replaces the options below)
    #[arg(long)]
    workflow: Option<PathBuf>,
    /// Vehicle parameter file (YAML); defaults to the bundled params-ka.yaml
    #[arg(long)]
    params: Option<PathBuf>,
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,
    /// Skip the chart_set.json export
    #[arg(long, default_value_t = false)]
    no_json: bool,
    /// Skip SVG rendering
    #[arg(long, default_value_t = false)]
    no_render: bool,
    /// Speed of the top-speed marker [km/h]
    #[arg(long)]
    top_speed: Option<f64>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let workflow_config = if let Some(path) = args.workflow {
        WorkflowConfig::load(path)?
    } else {
        WorkflowConfig::from_args(
            args.params,
            args.output_dir,
            !args.no_json,
            !args.no_render,
            args.top_speed,
        )
    };

    let params = match ParameterSet::load(&workflow_config.params) {
        Ok(params) => params,
        Err(CurveError::ConfigNotFound { path, .. }) => {
            println!("Error: path \"{}\" not found.", path.display());
            process::exit(-1);
        }
        Err(err) => return Err(err).context("loading vehicle parameters"),
    };

    let runner = Runner::new(workflow_config);
    info!("parameters loaded from {}", runner.config().params.display());
    let result = runner.execute(&params)?;

    println!("{}", RunSummary::from_curves(&result.curves));

    let bridge = OutputBridge::new(runner.config());
    let written = bridge.publish(&result.charts)?;
    if written.is_empty() {
        bridge.publish_status("No outputs requested.");
    } else {
        bridge.publish_status(&format!(
            "{} files written to {}",
            written.len(),
            runner.config().output_dir.display()
        ));
    }

    Ok(())
}
