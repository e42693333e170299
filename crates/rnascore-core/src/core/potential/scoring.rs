use super::bins::{BinIndexError, bin_index};
use super::distances::SampleDistanceSet;
use super::energy::{ProfileSet, PseudoEnergyProfile};
use crate::core::models::nucleotide::NucleotidePairType;
use std::collections::BTreeMap;
use std::ops::AddAssign;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ScoringError {
    #[error("No trained profile for nucleotide pair type {0}")]
    MissingProfile(NucleotidePairType),
    #[error(transparent)]
    BinIndex(#[from] BinIndexError),
}

/// Linearly interpolates the profile energy at a raw distance.
///
/// Integer distances return the bin energy unchanged.
///
/// # Errors
///
/// Returns [`BinIndexError`] if the distance is outside [0, 20] Å.
pub fn interpolate(profile: &PseudoEnergyProfile, distance: f64) -> Result<f64, BinIndexError> {
    let lower = bin_index(distance)?;
    let upper = distance.ceil() as usize;
    let energies = profile.energies();
    if lower == upper {
        return Ok(energies[lower]);
    }
    let lower_energy = energies[lower];
    let upper_energy = energies[upper];
    Ok(lower_energy + (distance - lower as f64) * (upper_energy - lower_energy))
}

/// Energy accumulated by one pair type.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PairContribution {
    pub energy: f64,
    pub distances: usize,
}

impl AddAssign<f64> for PairContribution {
    fn add_assign(&mut self, energy: f64) {
        self.energy += energy;
        self.distances += 1;
    }
}

/// Per-pair-type contributions to the pseudo-Gibbs free energy of a structure.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreBreakdown {
    pub contributions: BTreeMap<NucleotidePairType, PairContribution>,
}

impl ScoreBreakdown {
    /// The total pseudo-Gibbs free energy. Lower is more favourable.
    pub fn total(&self) -> f64 {
        self.contributions.values().map(|c| c.energy).sum()
    }

    pub fn distance_count(&self) -> usize {
        self.contributions.values().map(|c| c.distances).sum()
    }
}

pub struct Scorer<'a> {
    profiles: &'a ProfileSet,
}

impl<'a> Scorer<'a> {
    pub fn new(profiles: &'a ProfileSet) -> Self {
        Self { profiles }
    }

    pub fn score(&self, sample: &SampleDistanceSet) -> Result<ScoreBreakdown, ScoringError> {
        let mut breakdown = ScoreBreakdown::default();

        for (pair, distances) in sample.iter() {
            let profile = self
                .profiles
                .get(pair)
                .ok_or(ScoringError::MissingProfile(pair))?;
            let contribution = breakdown.contributions.entry(pair).or_default();
            for &distance in distances {
                *contribution += interpolate(profile, distance)?;
            }
            debug!(
                pair = %pair,
                distances = contribution.distances,
                energy = contribution.energy,
                "Scored pair type."
            );
        }

        Ok(breakdown)
    }
}
