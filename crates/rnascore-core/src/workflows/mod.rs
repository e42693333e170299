//! # Workflows Module
//!
//! Public entry points of the library. [`train::run`] turns a directory of
//! structure files into persisted pseudo-energy profiles; [`score::run`] evaluates
//! one structure against previously trained profiles.

pub mod score;
pub mod train;

use crate::core::io::pdb::PdbFile;
use crate::core::io::profiles::{ProfileFormat, ProfileStore};
use crate::core::io::traits::StructureFile;
use crate::core::models::residue::backbone_positions;
use crate::core::potential::distances::{SampleDistanceSet, extract_distances};
use crate::core::potential::energy::ProfileSet;
use crate::engine::config::ProfileConfig;
use crate::engine::error::EngineError;
use std::path::Path;
use tracing::debug;

/// The qualifying distances of one structure file.
#[derive(Debug, Clone)]
pub(crate) struct LoadedStructure {
    pub residues: usize,
    pub sample: SampleDistanceSet,
}

pub(crate) fn load_structure(path: &Path) -> Result<LoadedStructure, EngineError> {
    let records = PdbFile::read_from_path(path).map_err(|source| EngineError::StructureImport {
        path: path.to_path_buf(),
        source,
    })?;
    let residues = backbone_positions(&records);
    let sample = extract_distances(&residues).map_err(|source| EngineError::Extraction {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(
        atoms = records.len(),
        residues = residues.len(),
        "Loaded structure {:?}.",
        path
    );
    Ok(LoadedStructure {
        residues: residues.len(),
        sample,
    })
}

/// Loads trained profiles. A missing profile directory is reported as a
/// [`EngineError::Directory`] rather than a storage error.
pub fn load_profiles(config: &ProfileConfig) -> Result<ProfileSet, EngineError> {
    if config.format == ProfileFormat::Directory && !config.path.is_dir() {
        return Err(EngineError::Directory {
            path: config.path.clone(),
            reason: "profile directory does not exist; run training first".to_string(),
        });
    }
    Ok(ProfileStore::load(&config.path, config.format)?)
}
