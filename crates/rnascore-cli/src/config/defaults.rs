use std::path::PathBuf;

/// Built-in values used when neither the command line nor the config file sets one.
pub struct DefaultsConfig {
    pub corpus_dir: PathBuf,
    pub profile_dir: PathBuf,
    pub profile_table: PathBuf,
    pub extensions: Vec<String>,
    pub output_dir: PathBuf,
    pub plot_dir: PathBuf,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            corpus_dir: PathBuf::from("FilesPDB"),
            profile_dir: PathBuf::from("Pseudoenergy"),
            profile_table: PathBuf::from("Pseudoenergy.csv"),
            extensions: vec!["pdb".to_string()],
            output_dir: PathBuf::from("Output"),
            plot_dir: PathBuf::from("InteractionProfiles"),
        }
    }
}
