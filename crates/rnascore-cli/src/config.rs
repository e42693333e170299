pub mod defaults;

use crate::cli::{PlotArgs, ScoreArgs, TrainArgs};
use crate::error::{CliError, Result};
use defaults::DefaultsConfig;
use rnascore_core::core::io::profiles::ProfileFormat;
use rnascore_core::engine::config as core_config;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct PartialTrainingConfig {
    corpus_dir: Option<PathBuf>,
    extensions: Option<Vec<String>>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct PartialProfileConfig {
    path: Option<PathBuf>,
    format: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct PartialScoringConfig {
    output_dir: Option<PathBuf>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct PartialPlottingConfig {
    output_dir: Option<PathBuf>,
}

/// The optional TOML configuration file. Every key may be omitted.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialConfig {
    training: Option<PartialTrainingConfig>,
    profiles: Option<PartialProfileConfig>,
    scoring: Option<PartialScoringConfig>,
    plotting: Option<PartialPlottingConfig>,
}

/// Fully resolved settings of the `score` command.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreAppConfig {
    pub core_config: core_config::ScoringConfig,
    pub output_dir: PathBuf,
}

/// Fully resolved settings of the `plot` command.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotAppConfig {
    pub profiles: core_config::ProfileConfig,
    pub output_dir: PathBuf,
}

impl PartialConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads the file if one was given, or starts from an empty configuration.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn merge_train(self, args: &TrainArgs) -> Result<core_config::TrainingConfig> {
        let defaults = DefaultsConfig::default();
        let training = self.training.unwrap_or_default();
        let profiles = self.profiles.unwrap_or_default();

        let format = resolve_format(args.format, profiles.format.as_deref())?;
        let extensions = if args.extensions.is_empty() {
            training.extensions.unwrap_or(defaults.extensions.clone())
        } else {
            args.extensions.clone()
        };

        core_config::TrainingConfigBuilder::new()
            .corpus_dir(
                args.corpus
                    .clone()
                    .or(training.corpus_dir)
                    .unwrap_or(defaults.corpus_dir.clone()),
            )
            .extensions(extensions)
            .profile_path(resolve_profile_path(
                args.profiles.as_ref(),
                profiles.path,
                format,
                &defaults,
            ))
            .profile_format(format)
            .build()
            .map_err(|e| CliError::Config(e.to_string()))
    }

    pub fn merge_score(self, args: &ScoreArgs) -> Result<ScoreAppConfig> {
        let defaults = DefaultsConfig::default();
        let profiles = self.profiles.unwrap_or_default();
        let scoring = self.scoring.unwrap_or_default();

        let format = resolve_format(args.format, profiles.format.as_deref())?;
        let core_config = core_config::ScoringConfigBuilder::new()
            .structure_path(args.structure.clone())
            .profile_path(resolve_profile_path(
                args.profiles.as_ref(),
                profiles.path,
                format,
                &defaults,
            ))
            .profile_format(format)
            .build()
            .map_err(|e| CliError::Config(e.to_string()))?;

        Ok(ScoreAppConfig {
            core_config,
            output_dir: args
                .output
                .clone()
                .or(scoring.output_dir)
                .unwrap_or(defaults.output_dir),
        })
    }

    pub fn merge_plot(self, args: &PlotArgs) -> Result<PlotAppConfig> {
        let defaults = DefaultsConfig::default();
        let profiles = self.profiles.unwrap_or_default();
        let plotting = self.plotting.unwrap_or_default();

        let format = resolve_format(args.format, profiles.format.as_deref())?;
        Ok(PlotAppConfig {
            profiles: core_config::ProfileConfig {
                path: resolve_profile_path(args.profiles.as_ref(), profiles.path, format, &defaults),
                format,
            },
            output_dir: args
                .output
                .clone()
                .or(plotting.output_dir)
                .unwrap_or(defaults.plot_dir),
        })
    }
}

fn resolve_format(cli: Option<ProfileFormat>, file: Option<&str>) -> Result<ProfileFormat> {
    if let Some(format) = cli {
        return Ok(format);
    }
    file.map(|s| s.parse::<ProfileFormat>().map_err(CliError::Config))
        .transpose()
        .map(Option::unwrap_or_default)
}

fn resolve_profile_path(
    cli: Option<&PathBuf>,
    file: Option<PathBuf>,
    format: ProfileFormat,
    defaults: &DefaultsConfig,
) -> PathBuf {
    cli.cloned().or(file).unwrap_or_else(|| match format {
        ProfileFormat::Directory => defaults.profile_dir.clone(),
        ProfileFormat::Table => defaults.profile_table.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const FULL_CONFIG: &str = r#"
[training]
corpus-dir = "structures"
extensions = ["ent", "PDB"]

[profiles]
path = "trained.csv"
format = "table"

[scoring]
output-dir = "results"

[plotting]
output-dir = "charts"
"#;

    fn score_args(structure: &str) -> ScoreArgs {
        ScoreArgs {
            structure: PathBuf::from(structure),
            profiles: None,
            format: None,
            output: None,
        }
    }

    #[test]
    fn empty_config_falls_back_to_defaults() {
        let config = PartialConfig::default()
            .merge_train(&TrainArgs::default())
            .unwrap();
        assert_eq!(config.corpus_dir, PathBuf::from("FilesPDB"));
        assert_eq!(config.extensions, vec!["pdb".to_string()]);
        assert_eq!(config.profiles.path, PathBuf::from("Pseudoenergy"));
        assert_eq!(config.profiles.format, ProfileFormat::Directory);

        let scoring = PartialConfig::default()
            .merge_score(&score_args("query.pdb"))
            .unwrap();
        assert_eq!(scoring.output_dir, PathBuf::from("Output"));
        assert_eq!(scoring.core_config.profiles.path, PathBuf::from("Pseudoenergy"));
    }

    #[test]
    fn file_values_override_defaults() {
        let config = PartialConfig::from_toml(FULL_CONFIG)
            .unwrap()
            .merge_train(&TrainArgs::default())
            .unwrap();
        assert_eq!(config.corpus_dir, PathBuf::from("structures"));
        assert_eq!(config.extensions, vec!["ent".to_string(), "pdb".to_string()]);
        assert_eq!(config.profiles.path, PathBuf::from("trained.csv"));
        assert_eq!(config.profiles.format, ProfileFormat::Table);

        let scoring = PartialConfig::from_toml(FULL_CONFIG)
            .unwrap()
            .merge_score(&score_args("query.pdb"))
            .unwrap();
        assert_eq!(scoring.output_dir, PathBuf::from("results"));
    }

    #[test]
    fn cli_values_override_file_values() {
        let args = TrainArgs {
            corpus: Some(PathBuf::from("cli_corpus")),
            profiles: Some(PathBuf::from("cli_profiles")),
            format: Some(ProfileFormat::Directory),
            extensions: vec!["cif".to_string()],
        };
        let config = PartialConfig::from_toml(FULL_CONFIG)
            .unwrap()
            .merge_train(&args)
            .unwrap();
        assert_eq!(config.corpus_dir, PathBuf::from("cli_corpus"));
        assert_eq!(config.extensions, vec!["cif".to_string()]);
        assert_eq!(config.profiles.path, PathBuf::from("cli_profiles"));
        assert_eq!(config.profiles.format, ProfileFormat::Directory);
    }

    #[test]
    fn plot_settings_follow_cli_then_file_then_defaults() {
        let config = PartialConfig::default()
            .merge_plot(&PlotArgs::default())
            .unwrap();
        assert_eq!(config.output_dir, PathBuf::from("InteractionProfiles"));
        assert_eq!(config.profiles.path, PathBuf::from("Pseudoenergy"));
        assert_eq!(config.profiles.format, ProfileFormat::Directory);

        let config = PartialConfig::from_toml(FULL_CONFIG)
            .unwrap()
            .merge_plot(&PlotArgs::default())
            .unwrap();
        assert_eq!(config.output_dir, PathBuf::from("charts"));
        assert_eq!(config.profiles.path, PathBuf::from("trained.csv"));
        assert_eq!(config.profiles.format, ProfileFormat::Table);

        let args = PlotArgs {
            output: Some(PathBuf::from("cli_charts")),
            ..PlotArgs::default()
        };
        let config = PartialConfig::from_toml(FULL_CONFIG)
            .unwrap()
            .merge_plot(&args)
            .unwrap();
        assert_eq!(config.output_dir, PathBuf::from("cli_charts"));
    }

    #[test]
    fn table_format_without_path_uses_table_default() {
        let args = TrainArgs {
            format: Some(ProfileFormat::Table),
            ..TrainArgs::default()
        };
        let config = PartialConfig::default().merge_train(&args).unwrap();
        assert_eq!(config.profiles.path, PathBuf::from("Pseudoenergy.csv"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(PartialConfig::from_toml("[training]\ncorpus = \"x\"\n").is_err());
        assert!(PartialConfig::from_toml("[plotting]\nenabled = true\n").is_err());
        assert!(PartialConfig::from_toml("[plotting]\noutput-dir = \"x\"\n").is_ok());
    }

    #[test]
    fn invalid_format_in_file_is_a_config_error() {
        let result = PartialConfig::from_toml("[profiles]\nformat = \"json\"\n")
            .unwrap()
            .merge_train(&TrainArgs::default());
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn from_file_reports_parse_failures_with_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("rnascore.toml");
        fs::write(&path, "[training\n").unwrap();
        match PartialConfig::load(Some(&path)) {
            Err(CliError::FileParsing { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected FileParsing, got {:?}", other),
        }
    }
}
