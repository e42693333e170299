use super::load_structure;
use crate::core::io::profiles::ProfileStore;
use crate::core::potential::distances::SampleDistanceSet;
use crate::core::potential::energy::{ProfileSet, derive_profiles};
use crate::core::potential::frequency::{FrequencyMatrix, FrequencyModel, TrainingError};
use crate::engine::config::TrainingConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};

#[derive(Debug, Clone)]
pub struct TrainingReport {
    pub structures: usize,
    pub distances: usize,
    pub discarded_pairs: usize,
    pub model: FrequencyModel,
    pub profiles: ProfileSet,
}

/// Running totals over the structures seen by one rayon worker.
#[derive(Debug, Default)]
struct CorpusTally {
    matrix: FrequencyMatrix,
    structures: usize,
    distances: usize,
    discarded_pairs: usize,
}

impl CorpusTally {
    fn add(mut self, sample: &SampleDistanceSet) -> Result<Self, TrainingError> {
        self.matrix.add_sample(sample)?;
        self.structures += 1;
        self.distances += sample.len();
        self.discarded_pairs += sample.discarded_pairs();
        Ok(self)
    }

    fn merge(self, other: CorpusTally) -> Self {
        Self {
            matrix: self.matrix.merge(other.matrix),
            structures: self.structures + other.structures,
            distances: self.distances + other.distances,
            discarded_pairs: self.discarded_pairs + other.discarded_pairs,
        }
    }
}

#[instrument(skip_all, name = "training_workflow")]
pub fn run(config: &TrainingConfig, reporter: &ProgressReporter) -> Result<TrainingReport, EngineError> {
    let files = reporter.phase("Collecting structures", || {
        collect_structure_files(&config.corpus_dir, config)
    })?;
    info!(
        files = files.len(),
        corpus = %config.corpus_dir.display(),
        "Training on structure corpus."
    );

    reporter.report(Progress::PhaseStart {
        name: "Extracting distances",
    });
    reporter.report(Progress::TaskStart {
        total_steps: files.len() as u64,
    });
    let tally = files
        .par_iter()
        .try_fold(CorpusTally::default, |tally, path| {
            let loaded = load_structure(path)?;
            let tally = tally.add(&loaded.sample)?;
            reporter.report(Progress::TaskIncrement);
            Ok::<_, EngineError>(tally)
        })
        .try_reduce(CorpusTally::default, |a, b| Ok(a.merge(b)))?;
    reporter.report(Progress::TaskFinish);
    reporter.report(Progress::PhaseFinish);

    if tally.discarded_pairs > 0 {
        warn!(
            discarded = tally.discarded_pairs,
            "Residue pairs with non-standard bases were left out of training."
        );
        reporter.report(Progress::Message(format!(
            "Skipped {} residue pair(s) with non-standard bases",
            tally.discarded_pairs
        )));
    }
    info!(
        structures = tally.structures,
        distances = tally.distances,
        "Finished distance extraction."
    );

    let (model, profiles) = reporter.phase("Deriving profiles", || {
        let model = FrequencyModel::build(tally.matrix)?;
        let profiles = derive_profiles(&model.observed, &model.reference);
        Ok::<_, EngineError>((model, profiles))
    })?;

    reporter.phase("Saving profiles", || {
        ProfileStore::save(&profiles, &config.profiles.path, config.profiles.format)
    })?;

    Ok(TrainingReport {
        structures: tally.structures,
        distances: tally.distances,
        discarded_pairs: tally.discarded_pairs,
        model,
        profiles,
    })
}

/// Lists the structure files of the corpus in sorted path order.
fn collect_structure_files(dir: &Path, config: &TrainingConfig) -> Result<Vec<PathBuf>, EngineError> {
    if !dir.is_dir() {
        return Err(EngineError::Directory {
            path: dir.to_path_buf(),
            reason: "not an existing directory".to_string(),
        });
    }
    let entries = fs::read_dir(dir).map_err(|e| EngineError::Directory {
        path: dir.to_path_buf(),
        reason: e.to_string(),
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|e| EngineError::Directory {
                path: dir.to_path_buf(),
                reason: e.to_string(),
            })?
            .path();
        let recognized = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| config.accepts_extension(e));
        if path.is_file() && recognized {
            files.push(path);
        }
    }
    files.sort();

    if files.is_empty() {
        return Err(TrainingError::EmptyCorpus.into());
    }
    Ok(files)
}
