use std::path::PathBuf;
use thiserror::Error;

use super::config::ConfigError;
use crate::core::io::pdb::PdbError;
use crate::core::io::profiles::ProfileStoreError;
use crate::core::potential::distances::ExtractionError;
use crate::core::potential::frequency::TrainingError;
use crate::core::potential::scoring::ScoringError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Failed to import structure '{path}': {source}", path = path.display())]
    StructureImport {
        path: PathBuf,
        #[source]
        source: PdbError,
    },

    #[error("Structure '{path}' has no backbone residues: {source}", path = path.display())]
    Extraction {
        path: PathBuf,
        #[source]
        source: ExtractionError,
    },

    #[error("Training failed: {source}")]
    Training {
        #[from]
        source: TrainingError,
    },

    #[error("Scoring failed: {source}")]
    Scoring {
        #[from]
        source: ScoringError,
    },

    #[error("Profile storage failed: {source}")]
    ProfileStore {
        #[from]
        source: ProfileStoreError,
    },

    #[error("Directory '{path}' is unusable: {reason}", path = path.display())]
    Directory { path: PathBuf, reason: String },

    #[error("Invalid configuration: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },
}
