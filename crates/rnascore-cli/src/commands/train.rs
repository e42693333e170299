use crate::cli::TrainArgs;
use crate::config::PartialConfig;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use rnascore_core::{engine::progress::ProgressReporter, workflows};
use std::path::Path;
use tracing::info;

pub fn run(args: TrainArgs, config_path: Option<&Path>, quiet: bool) -> Result<()> {
    info!("Merging configuration from file and CLI arguments...");
    let config = PartialConfig::load(config_path)?.merge_train(&args)?;

    let progress_handler = CliProgressHandler::new(quiet);
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    println!(
        "Training on structures in {}...",
        config.corpus_dir.display()
    );
    let report = workflows::train::run(&config, &reporter);
    progress_handler.finish();
    let report = report?;

    println!(
        "✓ Trained {} profiles from {} distances in {} structures.",
        report.profiles.len(),
        report.distances,
        report.structures
    );
    if report.discarded_pairs > 0 {
        println!(
            "  {} residue pairs with non-standard bases were skipped.",
            report.discarded_pairs
        );
    }
    println!(
        "  Profiles written to: {} ({})",
        config.profiles.path.display(),
        config.profiles.format
    );
    Ok(())
}
