use crate::cli::PlotArgs;
use crate::config::PartialConfig;
use crate::error::Result;
use crate::utils::{output, plot};
use rnascore_core::workflows;
use std::path::Path;
use tracing::info;

pub fn run(args: PlotArgs, config_path: Option<&Path>) -> Result<()> {
    info!("Merging configuration from file and CLI arguments...");
    let config = PartialConfig::load(config_path)?.merge_plot(&args)?;

    let profiles = workflows::load_profiles(&config.profiles)?;
    output::ensure_output_dir(&config.output_dir)?;
    let charts = plot::draw_profiles(&profiles, &config.output_dir)?;

    println!("✓ Plotted {} interaction profiles.", charts.len());
    println!("  Charts written to: {}", config.output_dir.display());
    Ok(())
}
