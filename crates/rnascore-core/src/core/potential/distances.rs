use super::bins::{MAX_DISTANCE, MIN_SEQUENCE_SEPARATION};
use crate::core::models::nucleotide::NucleotidePairType;
use crate::core::models::residue::ResiduePosition;
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("Structure contains no residue positions")]
    EmptyStructure,
}

/// Raw (unbinned) qualifying distances of one structure, grouped by pair type.
///
/// Only pair types with at least one distance are present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleDistanceSet {
    distances: BTreeMap<NucleotidePairType, Vec<f64>>,
    discarded_pairs: usize,
}

impl SampleDistanceSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, pair: NucleotidePairType, distance: f64) {
        self.distances.entry(pair).or_default().push(distance);
    }

    pub fn get(&self, pair: NucleotidePairType) -> &[f64] {
        self.distances.get(&pair).map_or(&[], Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (NucleotidePairType, &[f64])> {
        self.distances
            .iter()
            .map(|(&pair, values)| (pair, values.as_slice()))
    }

    /// Total number of distances across all pair types.
    pub fn len(&self) -> usize {
        self.distances.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of in-domain residue pairs dropped because a base is non-standard.
    pub fn discarded_pairs(&self) -> usize {
        self.discarded_pairs
    }
}

/// Computes every qualifying pairwise distance of a structure.
///
/// Each unordered residue pair is visited once. A pair qualifies when the residue
/// numbers differ by at least four and the C3' atoms are at most 20 Å apart. Pairs
/// involving a non-standard base are counted in
/// [`SampleDistanceSet::discarded_pairs`] but carry no distance.
///
/// # Errors
///
/// Returns [`ExtractionError::EmptyStructure`] if `residues` is empty.
pub fn extract_distances(residues: &[ResiduePosition]) -> Result<SampleDistanceSet, ExtractionError> {
    if residues.is_empty() {
        return Err(ExtractionError::EmptyStructure);
    }

    let mut sample = SampleDistanceSet::new();
    for (i, first) in residues.iter().enumerate() {
        for second in &residues[i + 1..] {
            if first.sequence_separation(second) < MIN_SEQUENCE_SEPARATION {
                continue;
            }
            let distance = first.distance_to(second);
            if distance > MAX_DISTANCE {
                continue;
            }
            match (first.base, second.base) {
                (Some(a), Some(b)) => sample.push(NucleotidePairType::from_bases(a, b), distance),
                _ => sample.discarded_pairs += 1,
            }
        }
    }

    debug!(
        residues = residues.len(),
        distances = sample.len(),
        discarded = sample.discarded_pairs,
        "Extracted pairwise distances."
    );
    Ok(sample)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::atom::AtomRecord;
    use nalgebra::Point3;

    fn residue(name: &str, number: isize, xyz: [f64; 3]) -> ResiduePosition {
        ResiduePosition::from_record(&AtomRecord::new(
            number as usize,
            "C3'",
            name,
            'A',
            number,
            Point3::new(xyz[0], xyz[1], xyz[2]),
        ))
    }

    #[test]
    fn empty_structure_is_rejected() {
        assert_eq!(extract_distances(&[]), Err(ExtractionError::EmptyStructure));
    }

    #[test]
    fn single_qualifying_pair_is_classified_canonically() {
        let residues = vec![
            residue("U", 1, [0.0, 0.0, 0.0]),
            residue("A", 10, [8.0, 0.0, 0.0]),
        ];
        let sample = extract_distances(&residues).unwrap();
        assert_eq!(sample.get(NucleotidePairType::AU), &[8.0]);
        assert_eq!(sample.len(), 1);
        assert_eq!(
            sample.iter().map(|(pair, _)| pair).collect::<Vec<_>>(),
            vec![NucleotidePairType::AU]
        );
    }

    #[test]
    fn swapping_bases_yields_the_same_pair_type() {
        let forward = extract_distances(&[
            residue("G", 1, [0.0, 0.0, 0.0]),
            residue("C", 5, [0.0, 6.5, 0.0]),
        ])
        .unwrap();
        let reverse = extract_distances(&[
            residue("C", 1, [0.0, 0.0, 0.0]),
            residue("G", 5, [0.0, 6.5, 0.0]),
        ])
        .unwrap();
        assert_eq!(forward, reverse);
        assert_eq!(forward.get(NucleotidePairType::CG), &[6.5]);
    }

    #[test]
    fn pairs_closer_than_four_in_sequence_are_skipped() {
        let residues = vec![
            residue("A", 1, [0.0, 0.0, 0.0]),
            residue("A", 2, [5.0, 0.0, 0.0]),
            residue("A", 4, [6.0, 0.0, 0.0]),
            residue("A", 5, [7.0, 0.0, 0.0]),
        ];
        let sample = extract_distances(&residues).unwrap();
        assert_eq!(sample.get(NucleotidePairType::AA), &[7.0]);
    }

    #[test]
    fn separation_is_measured_in_absolute_terms() {
        let residues = vec![
            residue("A", 10, [0.0, 0.0, 0.0]),
            residue("G", 2, [3.0, 4.0, 0.0]),
        ];
        let sample = extract_distances(&residues).unwrap();
        assert_eq!(sample.get(NucleotidePairType::AG), &[5.0]);
    }

    #[test]
    fn distances_beyond_twenty_angstroms_are_skipped_but_twenty_is_kept() {
        let residues = vec![
            residue("C", 1, [0.0, 0.0, 0.0]),
            residue("C", 6, [20.0, 0.0, 0.0]),
            residue("C", 11, [0.0, 20.5, 0.0]),
        ];
        let sample = extract_distances(&residues).unwrap();
        let cc = sample.get(NucleotidePairType::CC);
        assert!(cc.contains(&20.0));
        assert!(cc.iter().all(|&d| d <= MAX_DISTANCE));
        assert!(!cc.contains(&20.5));
    }

    #[test]
    fn non_standard_bases_are_counted_as_discarded() {
        let residues = vec![
            residue("PSU", 1, [0.0, 0.0, 0.0]),
            residue("A", 5, [4.0, 0.0, 0.0]),
            residue("U", 9, [8.0, 0.0, 0.0]),
        ];
        let sample = extract_distances(&residues).unwrap();
        assert_eq!(sample.discarded_pairs(), 2);
        assert_eq!(sample.get(NucleotidePairType::AU), &[4.0]);
        assert_eq!(sample.len(), 1);
    }

    #[test]
    fn every_extracted_distance_respects_the_domain() {
        let residues: Vec<_> = (0..30)
            .map(|i| {
                let base = ["A", "U", "C", "G"][i % 4];
                let angle = i as f64 * 0.6;
                residue(base, i as isize + 1, [10.0 * angle.cos(), 10.0 * angle.sin(), i as f64 * 1.5])
            })
            .collect();
        let sample = extract_distances(&residues).unwrap();
        assert!(!sample.is_empty());
        for (_, distances) in sample.iter() {
            for &d in distances {
                assert!((0.0..=MAX_DISTANCE).contains(&d));
            }
        }
        let expected = residues
            .iter()
            .enumerate()
            .flat_map(|(k, a)| residues[k + 1..].iter().map(move |b| (a, b)))
            .filter(|(a, b)| {
                a.sequence_separation(b) >= MIN_SEQUENCE_SEPARATION && a.distance_to(b) <= MAX_DISTANCE
            })
            .count();
        assert_eq!(sample.len(), expected);
    }
}
