use clap::{Args, Parser, Subcommand};
use rnascore_core::core::io::profiles::ProfileFormat;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "RNAscore contributors",
    version,
    about = "RNAscore - train a knowledge-based distance potential on RNA 3D structures and score new structures with it.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output and progress bars
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads used to read the training corpus.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,

    /// Path to an optional configuration file in TOML format.
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Train pseudo-energy profiles from a directory of RNA structures.
    Train(TrainArgs),
    /// Score one RNA structure against trained profiles.
    Score(ScoreArgs),
    /// Draw one interaction profile chart per pair type.
    Plot(PlotArgs),
}

/// Arguments for the `train` subcommand.
#[derive(Args, Debug, Default)]
pub struct TrainArgs {
    /// Directory holding the training structures [default: ./FilesPDB]
    #[arg(long, value_name = "DIR")]
    pub corpus: Option<PathBuf>,

    /// Where to write the trained profiles [default: ./Pseudoenergy]
    #[arg(short, long, value_name = "PATH")]
    pub profiles: Option<PathBuf>,

    /// Profile layout on disk: 'directory' or 'table' [default: directory]
    #[arg(short, long, value_name = "FORMAT")]
    pub format: Option<ProfileFormat>,

    /// Structure file extension to read from the corpus. Can be used multiple times [default: pdb]
    #[arg(short, long = "extension", value_name = "EXT")]
    pub extensions: Vec<String>,
}

/// Arguments for the `score` subcommand.
#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// The structure file to score.
    #[arg(required = true, value_name = "STRUCTURE")]
    pub structure: PathBuf,

    /// Trained profiles to score against [default: ./Pseudoenergy]
    #[arg(short, long, value_name = "PATH")]
    pub profiles: Option<PathBuf>,

    /// Profile layout on disk: 'directory' or 'table' [default: directory]
    #[arg(short, long, value_name = "FORMAT")]
    pub format: Option<ProfileFormat>,

    /// Directory receiving the result file [default: ./Output]
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,
}

/// Arguments for the `plot` subcommand.
#[derive(Args, Debug, Default)]
pub struct PlotArgs {
    /// Trained profiles to plot [default: ./Pseudoenergy]
    #[arg(short, long, value_name = "PATH")]
    pub profiles: Option<PathBuf>,

    /// Profile layout on disk: 'directory' or 'table' [default: directory]
    #[arg(short, long, value_name = "FORMAT")]
    pub format: Option<ProfileFormat>,

    /// Directory receiving the SVG charts [default: ./InteractionProfiles]
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,
}
