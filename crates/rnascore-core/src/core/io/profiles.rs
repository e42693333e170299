use crate::core::models::nucleotide::NucleotidePairType;
use crate::core::potential::bins::BIN_COUNT;
use crate::core::potential::energy::{ProfileSet, PseudoEnergyProfile};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, info, warn};

const PROFILE_FILE_EXTENSION: &str = "txt";

/// On-disk layout of a trained profile set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileFormat {
    /// One `<PAIR>.txt` file per pair type holding 21 newline-separated energies.
    #[default]
    Directory,
    /// A single CSV table with `pair,bin,energy` rows.
    Table,
}

impl FromStr for ProfileFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "directory" | "dir" => Ok(ProfileFormat::Directory),
            "table" | "csv" => Ok(ProfileFormat::Table),
            _ => Err(format!(
                "Unknown profile format '{}'. Expected 'directory' or 'table'.",
                s
            )),
        }
    }
}

impl fmt::Display for ProfileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ProfileFormat::Directory => "directory",
            ProfileFormat::Table => "table",
        })
    }
}

#[derive(Debug, Error)]
pub enum ProfileStoreError {
    #[error("File I/O error for '{path}': {source}", path = path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("CSV error for '{path}': {source}", path = path.display())]
    Csv { path: PathBuf, source: csv::Error },
    #[error("Invalid energy value '{value}' on line {line} of '{path}'", path = path.display())]
    InvalidValue {
        path: PathBuf,
        line: usize,
        value: String,
    },
    #[error("'{path}' holds {found} energies, expected {expected}", path = path.display(), expected = BIN_COUNT)]
    WrongLength { path: PathBuf, found: usize },
    #[error("Unknown nucleotide pair type '{value}' in '{path}'", path = path.display())]
    UnknownPairType { path: PathBuf, value: String },
    #[error("Bin {bin} of pair type {pair} in '{path}' is invalid or duplicated", path = path.display())]
    InvalidBin {
        path: PathBuf,
        pair: NucleotidePairType,
        bin: usize,
    },
    #[error("No profiles found in '{path}'", path = path.display())]
    Empty { path: PathBuf },
}

#[derive(Debug, Serialize, Deserialize)]
struct ProfileRow {
    pair: String,
    bin: usize,
    energy: f64,
}

/// Reads and writes trained profile sets.
pub struct ProfileStore;

impl ProfileStore {
    pub fn load(path: &Path, format: ProfileFormat) -> Result<ProfileSet, ProfileStoreError> {
        let profiles = match format {
            ProfileFormat::Directory => Self::read_directory(path)?,
            ProfileFormat::Table => Self::read_table(path)?,
        };
        if profiles.is_empty() {
            return Err(ProfileStoreError::Empty {
                path: path.to_path_buf(),
            });
        }
        info!(
            profiles = profiles.len(),
            format = %format,
            "Loaded pseudo-energy profiles from {:?}.",
            path
        );
        Ok(profiles)
    }

    /// Persists a profile set. Every file is rendered before the first write.
    pub fn save(
        profiles: &ProfileSet,
        path: &Path,
        format: ProfileFormat,
    ) -> Result<(), ProfileStoreError> {
        match format {
            ProfileFormat::Directory => Self::write_directory(profiles, path)?,
            ProfileFormat::Table => Self::write_table(profiles, path)?,
        }
        info!(
            profiles = profiles.len(),
            format = %format,
            "Saved pseudo-energy profiles to {:?}.",
            path
        );
        Ok(())
    }

    pub fn profile_file_name(pair: NucleotidePairType) -> String {
        format!("{}.{}", pair.symbol(), PROFILE_FILE_EXTENSION)
    }

    pub fn render_profile(profile: &PseudoEnergyProfile) -> String {
        profile
            .energies()
            .iter()
            .map(|energy| format!("{}\n", energy))
            .collect()
    }

    pub fn parse_profile(content: &str, path: &Path) -> Result<PseudoEnergyProfile, ProfileStoreError> {
        let mut values = Vec::with_capacity(BIN_COUNT);
        for (line_num, line) in content.lines().enumerate() {
            let raw = line.trim();
            if raw.is_empty() {
                continue;
            }
            let value: f64 = raw.parse().map_err(|_| ProfileStoreError::InvalidValue {
                path: path.to_path_buf(),
                line: line_num + 1,
                value: raw.to_string(),
            })?;
            values.push(value);
        }
        PseudoEnergyProfile::try_from(values).map_err(|e| ProfileStoreError::WrongLength {
            path: path.to_path_buf(),
            found: e.found,
        })
    }

    fn read_directory(dir: &Path) -> Result<ProfileSet, ProfileStoreError> {
        let io_error = |source| ProfileStoreError::Io {
            path: dir.to_path_buf(),
            source,
        };
        let mut profiles = ProfileSet::new();
        for entry in fs::read_dir(dir).map_err(io_error)? {
            let path = entry.map_err(io_error)?.path();
            if !path.is_file()
                || path.extension().and_then(|e| e.to_str()) != Some(PROFILE_FILE_EXTENSION)
            {
                continue;
            }
            let Some(pair) = path
                .file_stem()
                .and_then(|s| s.to_str())
                .and_then(|s| s.parse::<NucleotidePairType>().ok())
            else {
                warn!("Skipping file without a pair type name: {:?}", path);
                continue;
            };
            let content = fs::read_to_string(&path).map_err(|source| ProfileStoreError::Io {
                path: path.clone(),
                source,
            })?;
            debug!(pair = %pair, "Reading profile from {:?}", path);
            profiles.insert(pair, Self::parse_profile(&content, &path)?);
        }
        Ok(profiles)
    }

    fn write_directory(profiles: &ProfileSet, dir: &Path) -> Result<(), ProfileStoreError> {
        let rendered: Vec<(PathBuf, String)> = profiles
            .iter()
            .map(|(pair, profile)| {
                (
                    dir.join(Self::profile_file_name(pair)),
                    Self::render_profile(profile),
                )
            })
            .collect();

        fs::create_dir_all(dir).map_err(|source| ProfileStoreError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        for (path, content) in rendered {
            fs::write(&path, content).map_err(|source| ProfileStoreError::Io { path, source })?;
        }
        Ok(())
    }

    fn read_table(path: &Path) -> Result<ProfileSet, ProfileStoreError> {
        let csv_error = |source| ProfileStoreError::Csv {
            path: path.to_path_buf(),
            source,
        };
        let mut reader = csv::Reader::from_path(path).map_err(csv_error)?;

        let mut rows: BTreeMap<NucleotidePairType, [Option<f64>; BIN_COUNT]> = BTreeMap::new();
        for result in reader.deserialize::<ProfileRow>() {
            let row = result.map_err(csv_error)?;
            let pair: NucleotidePairType =
                row.pair
                    .parse()
                    .map_err(|_| ProfileStoreError::UnknownPairType {
                        path: path.to_path_buf(),
                        value: row.pair.clone(),
                    })?;
            let slots = rows.entry(pair).or_insert([None; BIN_COUNT]);
            match slots.get_mut(row.bin) {
                Some(slot) if slot.is_none() => *slot = Some(row.energy),
                _ => {
                    return Err(ProfileStoreError::InvalidBin {
                        path: path.to_path_buf(),
                        pair,
                        bin: row.bin,
                    });
                }
            }
        }

        rows.into_iter()
            .map(|(pair, slots)| -> Result<_, ProfileStoreError> {
                let mut energies = [0.0; BIN_COUNT];
                for (bin, (energy, slot)) in energies.iter_mut().zip(slots).enumerate() {
                    *energy = slot.ok_or_else(|| ProfileStoreError::InvalidBin {
                        path: path.to_path_buf(),
                        pair,
                        bin,
                    })?;
                }
                Ok((pair, PseudoEnergyProfile::new(energies)))
            })
            .collect()
    }

    fn write_table(profiles: &ProfileSet, path: &Path) -> Result<(), ProfileStoreError> {
        let csv_error = |source| ProfileStoreError::Csv {
            path: path.to_path_buf(),
            source,
        };
        let mut writer = csv::Writer::from_writer(Vec::new());
        for (pair, profile) in profiles.iter() {
            for (bin, &energy) in profile.energies().iter().enumerate() {
                writer
                    .serialize(ProfileRow {
                        pair: pair.symbol().to_string(),
                        bin,
                        energy,
                    })
                    .map_err(csv_error)?;
            }
        }
        let content = writer.into_inner().map_err(|e| ProfileStoreError::Io {
            path: path.to_path_buf(),
            source: e.into_error(),
        })?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| ProfileStoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(path, content).map_err(|source| ProfileStoreError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample_profiles() -> ProfileSet {
        NucleotidePairType::ALL
            .iter()
            .enumerate()
            .map(|(i, &pair)| {
                let mut energies = [10.0; BIN_COUNT];
                energies[i] = -0.123456789 * (i as f64 + 1.0);
                energies[20] = 1.0 / 3.0;
                (pair, PseudoEnergyProfile::new(energies))
            })
            .collect()
    }

    #[test]
    fn directory_format_writes_one_file_of_twenty_one_lines_per_pair() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("Pseudoenergy");
        ProfileStore::save(&sample_profiles(), &target, ProfileFormat::Directory).unwrap();

        for pair in NucleotidePairType::ALL {
            let content = fs::read_to_string(target.join(format!("{}.txt", pair))).unwrap();
            assert_eq!(content.lines().count(), BIN_COUNT);
        }
        assert_eq!(fs::read_dir(&target).unwrap().count(), 10);
    }

    #[test]
    fn directory_format_round_trips_values_exactly() {
        let dir = tempdir().unwrap();
        let profiles = sample_profiles();
        ProfileStore::save(&profiles, dir.path(), ProfileFormat::Directory).unwrap();
        let loaded = ProfileStore::load(dir.path(), ProfileFormat::Directory).unwrap();
        assert_eq!(loaded, profiles);
    }

    #[test]
    fn table_format_round_trips_values_exactly() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("profiles.csv");
        let profiles = sample_profiles();
        ProfileStore::save(&profiles, &path, ProfileFormat::Table).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("pair,bin,energy"));
        assert_eq!(content.lines().count(), 1 + 10 * BIN_COUNT);

        let loaded = ProfileStore::load(&path, ProfileFormat::Table).unwrap();
        assert_eq!(loaded, profiles);
    }

    #[test]
    fn reading_directory_accepts_reversed_pair_names_and_skips_unknown_files() {
        let dir = tempdir().unwrap();
        let values: String = (0..BIN_COUNT).map(|i| format!("{}\n", i)).collect();
        fs::write(dir.path().join("UA.txt"), &values).unwrap();
        fs::write(dir.path().join("notes.txt"), "hello").unwrap();
        fs::write(dir.path().join("GG.png"), "binary").unwrap();

        let loaded = ProfileStore::load(dir.path(), ProfileFormat::Directory).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(
            loaded.get(NucleotidePairType::AU).unwrap().energies()[7],
            7.0
        );
    }

    #[test]
    fn parse_profile_rejects_wrong_line_count() {
        let content: String = (0..20).map(|i| format!("{}\n", i)).collect();
        let result = ProfileStore::parse_profile(&content, Path::new("AU.txt"));
        assert!(matches!(
            result,
            Err(ProfileStoreError::WrongLength { found: 20, .. })
        ));
    }

    #[test]
    fn parse_profile_rejects_non_numeric_lines() {
        let mut lines: Vec<String> = (0..BIN_COUNT).map(|i| i.to_string()).collect();
        lines[4] = "abc".to_string();
        let result = ProfileStore::parse_profile(&lines.join("\n"), Path::new("AU.txt"));
        assert!(matches!(
            result,
            Err(ProfileStoreError::InvalidValue { line: 5, .. })
        ));
    }

    #[test]
    fn render_profile_uses_default_float_text() {
        let mut energies = [10.0; BIN_COUNT];
        energies[0] = -0.5;
        let rendered = ProfileStore::render_profile(&PseudoEnergyProfile::new(energies));
        let mut lines = rendered.lines();
        assert_eq!(lines.next(), Some("-0.5"));
        assert_eq!(lines.next(), Some("10"));
    }

    #[test]
    fn load_fails_for_missing_directory() {
        let dir = tempdir().unwrap();
        let result = ProfileStore::load(&dir.path().join("missing"), ProfileFormat::Directory);
        assert!(matches!(result, Err(ProfileStoreError::Io { .. })));
    }

    #[test]
    fn load_fails_for_directory_without_profiles() {
        let dir = tempdir().unwrap();
        let result = ProfileStore::load(dir.path(), ProfileFormat::Directory);
        assert!(matches!(result, Err(ProfileStoreError::Empty { .. })));
    }

    #[test]
    fn table_with_missing_bin_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("profiles.csv");
        let mut content = String::from("pair,bin,energy\n");
        for bin in 0..BIN_COUNT - 1 {
            content.push_str(&format!("AU,{},1.0\n", bin));
        }
        fs::write(&path, content).unwrap();
        let result = ProfileStore::load(&path, ProfileFormat::Table);
        assert!(matches!(
            result,
            Err(ProfileStoreError::InvalidBin { bin: 20, .. })
        ));
    }

    #[test]
    fn table_with_duplicate_or_out_of_range_bin_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("profiles.csv");
        fs::write(&path, "pair,bin,energy\nAU,0,1.0\nAU,0,2.0\n").unwrap();
        assert!(matches!(
            ProfileStore::load(&path, ProfileFormat::Table),
            Err(ProfileStoreError::InvalidBin { bin: 0, .. })
        ));

        fs::write(&path, "pair,bin,energy\nGC,21,1.0\n").unwrap();
        assert!(matches!(
            ProfileStore::load(&path, ProfileFormat::Table),
            Err(ProfileStoreError::InvalidBin { bin: 21, .. })
        ));
    }

    #[test]
    fn table_with_unknown_pair_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("profiles.csv");
        fs::write(&path, "pair,bin,energy\nAT,0,1.0\n").unwrap();
        assert!(matches!(
            ProfileStore::load(&path, ProfileFormat::Table),
            Err(ProfileStoreError::UnknownPairType { .. })
        ));
    }

    #[test]
    fn profile_format_parses_names() {
        assert_eq!(ProfileFormat::from_str("directory"), Ok(ProfileFormat::Directory));
        assert_eq!(ProfileFormat::from_str("TABLE"), Ok(ProfileFormat::Table));
        assert_eq!(ProfileFormat::from_str("csv"), Ok(ProfileFormat::Table));
        assert!(ProfileFormat::from_str("json").is_err());
    }
}
