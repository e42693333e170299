use crate::core::io::profiles::ProfileFormat;
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_STRUCTURE_EXTENSION: &str = "pdb";

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("At least one structure file extension is required")]
    NoExtensions,
}

/// Where the trained profiles live and how they are laid out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileConfig {
    pub path: PathBuf,
    pub format: ProfileFormat,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingConfig {
    pub corpus_dir: PathBuf,
    /// Lowercase file extensions, without the leading dot.
    pub extensions: Vec<String>,
    pub profiles: ProfileConfig,
}

impl TrainingConfig {
    /// Case-insensitive check of a file extension against the configured list.
    pub fn accepts_extension(&self, extension: &str) -> bool {
        let extension = extension.to_ascii_lowercase();
        self.extensions.iter().any(|e| *e == extension)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoringConfig {
    pub structure_path: PathBuf,
    pub profiles: ProfileConfig,
}

#[derive(Default)]
pub struct TrainingConfigBuilder {
    corpus_dir: Option<PathBuf>,
    extensions: Option<Vec<String>>,
    profile_path: Option<PathBuf>,
    profile_format: Option<ProfileFormat>,
}

impl TrainingConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn corpus_dir(mut self, path: PathBuf) -> Self {
        self.corpus_dir = Some(path);
        self
    }
    pub fn extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = Some(extensions);
        self
    }
    pub fn profile_path(mut self, path: PathBuf) -> Self {
        self.profile_path = Some(path);
        self
    }
    pub fn profile_format(mut self, format: ProfileFormat) -> Self {
        self.profile_format = Some(format);
        self
    }

    pub fn build(self) -> Result<TrainingConfig, ConfigError> {
        let extensions = normalize_extensions(
            self.extensions
                .unwrap_or_else(|| vec![DEFAULT_STRUCTURE_EXTENSION.to_string()]),
        );
        if extensions.is_empty() {
            return Err(ConfigError::NoExtensions);
        }
        Ok(TrainingConfig {
            corpus_dir: self
                .corpus_dir
                .ok_or(ConfigError::MissingParameter("corpus_dir"))?,
            extensions,
            profiles: ProfileConfig {
                path: self
                    .profile_path
                    .ok_or(ConfigError::MissingParameter("profile_path"))?,
                format: self.profile_format.unwrap_or_default(),
            },
        })
    }
}

#[derive(Default)]
pub struct ScoringConfigBuilder {
    structure_path: Option<PathBuf>,
    profile_path: Option<PathBuf>,
    profile_format: Option<ProfileFormat>,
}

impl ScoringConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn structure_path(mut self, path: PathBuf) -> Self {
        self.structure_path = Some(path);
        self
    }
    pub fn profile_path(mut self, path: PathBuf) -> Self {
        self.profile_path = Some(path);
        self
    }
    pub fn profile_format(mut self, format: ProfileFormat) -> Self {
        self.profile_format = Some(format);
        self
    }

    pub fn build(self) -> Result<ScoringConfig, ConfigError> {
        Ok(ScoringConfig {
            structure_path: self
                .structure_path
                .ok_or(ConfigError::MissingParameter("structure_path"))?,
            profiles: ProfileConfig {
                path: self
                    .profile_path
                    .ok_or(ConfigError::MissingParameter("profile_path"))?,
                format: self.profile_format.unwrap_or_default(),
            },
        })
    }
}

fn normalize_extensions(extensions: Vec<String>) -> Vec<String> {
    let mut normalized: Vec<String> = extensions
        .into_iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect();
    normalized.sort();
    normalized.dedup();
    normalized
}
