use anyhow::Context;
use clap::Parser;
use ptcore::ChartSet;
use std::fs;
use std::path::PathBuf;
use visualizer::render_chart_set;

#[derive(Parser)]
#[command(author, version, about = "Render a saved powertrain chart set to SVG")]
struct Args {
    /// Chart set exported by the calculator (JSON)
    input: PathBuf,
    /// Directory receiving one SVG per chart
    #[arg(long, default_value = "charts")]
    output_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let contents = fs::read_to_string(&args.input)
        .with_context(|| format!("reading chart set {}", args.input.display()))?;
    let charts = ChartSet::from_json(&contents)
        .with_context(|| format!("parsing chart set {}", args.input.display()))?;

    let written = render_chart_set(&charts, &args.output_dir)
        .with_context(|| format!("rendering into {}", args.output_dir.display()))?;
    for path in written {
        println!("{}", path.display());
    }
    Ok(())
}
