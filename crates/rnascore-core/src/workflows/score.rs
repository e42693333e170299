use super::{load_profiles, load_structure};
use crate::core::potential::scoring::{ScoreBreakdown, Scorer};
use crate::engine::config::ScoringConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::ProgressReporter;
use tracing::{info, instrument};

#[derive(Debug, Clone)]
pub struct ScoringReport {
    /// File stem of the scored structure.
    pub sample: String,
    pub residues: usize,
    pub breakdown: ScoreBreakdown,
}

impl ScoringReport {
    pub fn total_energy(&self) -> f64 {
        self.breakdown.total()
    }
}

#[instrument(skip_all, name = "scoring_workflow")]
pub fn run(config: &ScoringConfig, reporter: &ProgressReporter) -> Result<ScoringReport, EngineError> {
    let profiles = reporter.phase("Loading profiles", || load_profiles(&config.profiles))?;

    let loaded = reporter.phase("Reading structure", || {
        load_structure(&config.structure_path)
    })?;

    let breakdown = reporter.phase("Scoring", || Scorer::new(&profiles).score(&loaded.sample))?;

    let sample = config
        .structure_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    info!(
        sample = %sample,
        residues = loaded.residues,
        distances = breakdown.distance_count(),
        total = breakdown.total(),
        "Scored structure."
    );

    Ok(ScoringReport {
        sample,
        residues: loaded.residues,
        breakdown,
    })
}
