use crate::error::{CliError, Result};
use chrono::{DateTime, Local};
use rnascore_core::engine::error::EngineError;
use std::fs;
use std::path::{Path, PathBuf};

const RESULT_PREFIX: &str = "rnascore_";
const RESULT_EXTENSION: &str = "tsv";

/// Creates the output directory and any missing parents.
pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| {
        CliError::from(EngineError::Directory {
            path: dir.to_path_buf(),
            reason: format!("cannot create output directory: {}", e),
        })
    })
}

/// First free `<stem>.<ext>`, `<stem> (1).<ext>`, `<stem> (2).<ext>`, ... in `dir`.
pub fn uniquify(dir: &Path, stem: &str, extension: &str) -> PathBuf {
    let candidate = dir.join(format!("{}.{}", stem, extension));
    if !candidate.exists() {
        return candidate;
    }
    (1usize..)
        .map(|n| dir.join(format!("{} ({}).{}", stem, n, extension)))
        .find(|path| !path.exists())
        .unwrap_or(candidate)
}

pub fn render_result(sample: &str, total_energy: f64, run_at: &DateTime<Local>) -> String {
    format!(
        "Sample\t{}\nGibbs Free Energy\t{}\nRun\t{}\t{}\n",
        sample,
        total_energy,
        run_at.format("%Y-%m-%d"),
        run_at.format("%H:%M:%S"),
    )
}

/// Writes the result file of one scored sample and returns its path.
pub fn write_result(dir: &Path, sample: &str, total_energy: f64) -> Result<PathBuf> {
    let path = uniquify(dir, &format!("{}{}", RESULT_PREFIX, sample), RESULT_EXTENSION);
    let content = render_result(sample, total_energy, &Local::now());
    fs::write(&path, content).map_err(|source| CliError::Output {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}
