use crate::cli::ScoreArgs;
use crate::config::PartialConfig;
use crate::error::Result;
use crate::utils::output;
use crate::utils::progress::CliProgressHandler;
use rnascore_core::{engine::progress::ProgressReporter, workflows};
use std::path::Path;
use tracing::info;

pub fn run(args: ScoreArgs, config_path: Option<&Path>, quiet: bool) -> Result<()> {
    info!("Merging configuration from file and CLI arguments...");
    let config = PartialConfig::load(config_path)?.merge_score(&args)?;

    let progress_handler = CliProgressHandler::new(quiet);
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    let report = workflows::score::run(&config.core_config, &reporter);
    progress_handler.finish();
    let report = report?;
    output::ensure_output_dir(&config.output_dir)?;

    for (pair, contribution) in &report.breakdown.contributions {
        info!(
            pair = %pair,
            distances = contribution.distances,
            energy = contribution.energy,
            "Pair type contribution."
        );
    }

    let path = output::write_result(&config.output_dir, &report.sample, report.total_energy())?;
    println!(
        "✓ Gibbs free energy of {}: {}",
        report.sample,
        report.total_energy()
    );
    println!("  Result written to: {}", path.display());
    Ok(())
}
