use super::bins::{BIN_COUNT, BinArray, ZERO_OBSERVATION_ENERGY};
use crate::core::models::nucleotide::NucleotidePairType;
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("A pseudo-energy profile needs exactly {expected} values, found {found}", expected = BIN_COUNT)]
pub struct ProfileLengthError {
    pub found: usize,
}

/// Pseudo-energies of one pair type at the distance bins 0..=20 Å.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PseudoEnergyProfile {
    energies: BinArray<f64>,
}

impl PseudoEnergyProfile {
    pub fn new(energies: BinArray<f64>) -> Self {
        Self { energies }
    }

    pub fn energies(&self) -> &BinArray<f64> {
        &self.energies
    }

    #[inline]
    pub fn get(&self, bin: usize) -> Option<f64> {
        self.energies.get(bin).copied()
    }
}

impl TryFrom<Vec<f64>> for PseudoEnergyProfile {
    type Error = ProfileLengthError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        let found = values.len();
        let energies: BinArray<f64> = values
            .try_into()
            .map_err(|_| ProfileLengthError { found })?;
        Ok(Self::new(energies))
    }
}

/// The trained profiles, keyed by pair type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileSet {
    profiles: BTreeMap<NucleotidePairType, PseudoEnergyProfile>,
}

impl ProfileSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, pair: NucleotidePairType, profile: PseudoEnergyProfile) {
        self.profiles.insert(pair, profile);
    }

    pub fn get(&self, pair: NucleotidePairType) -> Option<&PseudoEnergyProfile> {
        self.profiles.get(&pair)
    }

    pub fn iter(&self) -> impl Iterator<Item = (NucleotidePairType, &PseudoEnergyProfile)> {
        self.profiles.iter().map(|(&pair, profile)| (pair, profile))
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl FromIterator<(NucleotidePairType, PseudoEnergyProfile)> for ProfileSet {
    fn from_iter<I: IntoIterator<Item = (NucleotidePairType, PseudoEnergyProfile)>>(iter: I) -> Self {
        Self {
            profiles: iter.into_iter().collect(),
        }
    }
}

/// `-ln(observed / reference)`, or [`ZERO_OBSERVATION_ENERGY`] when nothing was observed.
#[inline]
pub fn pseudo_energy(observed: f64, reference: f64) -> f64 {
    if observed != 0.0 {
        -(observed / reference).ln()
    } else {
        ZERO_OBSERVATION_ENERGY
    }
}

/// Converts observed and reference frequencies into one profile per pair type.
pub fn derive_profiles(
    observed: &BTreeMap<NucleotidePairType, BinArray<f64>>,
    reference: &BinArray<f64>,
) -> ProfileSet {
    let profiles: ProfileSet = observed
        .iter()
        .map(|(&pair, row)| {
            let mut energies = [0.0; BIN_COUNT];
            for (bin, energy) in energies.iter_mut().enumerate() {
                *energy = pseudo_energy(row[bin], reference[bin]);
            }
            (pair, PseudoEnergyProfile::new(energies))
        })
        .collect();
    info!(profiles = profiles.len(), "Derived pseudo-energy profiles.");
    profiles
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    #[test]
    fn pseudo_energy_uses_negative_log_ratio() {
        assert!((pseudo_energy(0.5, 0.25) - (-(2.0f64).ln())).abs() < TOLERANCE);
        assert!((pseudo_energy(0.1, 0.4) - (4.0f64).ln()).abs() < TOLERANCE);
        assert_eq!(pseudo_energy(0.3, 0.3), 0.0);
    }

    #[test]
    fn pseudo_energy_of_zero_observation_is_sentinel() {
        assert_eq!(pseudo_energy(0.0, 0.7), ZERO_OBSERVATION_ENERGY);
        assert_eq!(pseudo_energy(0.0, 0.0), 10.0);
    }

    #[test]
    fn lower_ratio_gives_higher_energy() {
        let reference = 0.2;
        let mut previous = f64::NEG_INFINITY;
        for observed in [0.9, 0.5, 0.2, 0.05, 0.001] {
            let energy = pseudo_energy(observed, reference);
            assert!(energy > previous);
            previous = energy;
        }
    }

    #[test]
    fn derive_profiles_builds_one_profile_per_pair_type() {
        let mut observed = BTreeMap::new();
        let mut au = [0.0; BIN_COUNT];
        au[8] = 1.0;
        observed.insert(NucleotidePairType::AU, au);
        observed.insert(NucleotidePairType::GG, [0.0; BIN_COUNT]);
        let mut reference = [0.0; BIN_COUNT];
        reference[8] = 0.5;
        reference[3] = 0.5;

        let profiles = derive_profiles(&observed, &reference);
        assert_eq!(profiles.len(), 2);

        let au_profile = profiles.get(NucleotidePairType::AU).unwrap();
        assert!((au_profile.energies()[8] - (-(2.0f64).ln())).abs() < TOLERANCE);
        for bin in (0..BIN_COUNT).filter(|&b| b != 8) {
            assert_eq!(au_profile.energies()[bin], ZERO_OBSERVATION_ENERGY);
        }
        let gg_profile = profiles.get(NucleotidePairType::GG).unwrap();
        assert!(gg_profile.energies().iter().all(|&e| e == ZERO_OBSERVATION_ENERGY));
    }

    #[test]
    fn profile_try_from_requires_exactly_twenty_one_values() {
        assert!(PseudoEnergyProfile::try_from(vec![0.0; BIN_COUNT]).is_ok());
        assert_eq!(
            PseudoEnergyProfile::try_from(vec![0.0; 20]),
            Err(ProfileLengthError { found: 20 })
        );
        assert_eq!(
            PseudoEnergyProfile::try_from(vec![0.0; 22]),
            Err(ProfileLengthError { found: 22 })
        );
    }

    #[test]
    fn profile_get_is_bounds_checked() {
        let profile = PseudoEnergyProfile::new([1.5; BIN_COUNT]);
        assert_eq!(profile.get(20), Some(1.5));
        assert_eq!(profile.get(21), None);
    }
}
