use super::bins::{BIN_COUNT, BinArray, BinIndexError, bin_index};
use super::distances::SampleDistanceSet;
use crate::core::models::nucleotide::NucleotidePairType;
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::debug;

const PAIR_TYPE_COUNT: usize = NucleotidePairType::ALL.len();

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum TrainingError {
    #[error("Training corpus contains no structure files")]
    EmptyCorpus,
    #[error("Training corpus yielded no qualifying distances")]
    NoObservations,
    #[error(transparent)]
    BinIndex(#[from] BinIndexError),
}

/// Per-bin observation counts for every canonical pair type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyMatrix {
    counts: [BinArray<u64>; PAIR_TYPE_COUNT],
}

impl Default for FrequencyMatrix {
    fn default() -> Self {
        Self::new()
    }
}

impl FrequencyMatrix {
    /// A fresh all-zero matrix holding one row per canonical pair type.
    pub fn new() -> Self {
        Self {
            counts: [[0; BIN_COUNT]; PAIR_TYPE_COUNT],
        }
    }

    /// Counts one distance in the bin `floor(distance)` of the pair type.
    pub fn increment(&mut self, pair: NucleotidePairType, distance: f64) -> Result<(), BinIndexError> {
        let bin = bin_index(distance)?;
        self.counts[pair.index()][bin] += 1;
        Ok(())
    }

    /// Counts every distance of one structure.
    ///
    /// The matrix is left untouched if any distance falls outside the bin range.
    pub fn add_sample(&mut self, sample: &SampleDistanceSet) -> Result<(), BinIndexError> {
        let mut staged = self.clone();
        for (pair, distances) in sample.iter() {
            for &distance in distances {
                staged.increment(pair, distance)?;
            }
        }
        *self = staged;
        Ok(())
    }

    /// Adds the counts of another matrix, the reduction step of parallel accumulation.
    pub fn merge(mut self, other: FrequencyMatrix) -> Self {
        for (row, other_row) in self.counts.iter_mut().zip(other.counts.iter()) {
            for (count, other_count) in row.iter_mut().zip(other_row.iter()) {
                *count += other_count;
            }
        }
        self
    }

    pub fn counts(&self, pair: NucleotidePairType) -> &BinArray<u64> {
        &self.counts[pair.index()]
    }

    /// Sum of all bin counts of one pair type.
    pub fn pair_sum(&self, pair: NucleotidePairType) -> u64 {
        self.counts(pair).iter().sum()
    }

    /// Grand total of counts across all pair types.
    pub fn total(&self) -> u64 {
        self.counts.iter().flatten().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NucleotidePairType, &BinArray<u64>)> {
        NucleotidePairType::ALL
            .into_iter()
            .map(move |pair| (pair, self.counts(pair)))
    }
}

/// Observed frequency of every bin, normalized per pair type.
///
/// A pair type without observations keeps its raw (all-zero) counts.
pub fn observed_frequencies(
    matrix: &FrequencyMatrix,
) -> BTreeMap<NucleotidePairType, BinArray<f64>> {
    matrix
        .iter()
        .map(|(pair, counts)| {
            let pair_sum = matrix.pair_sum(pair);
            let row = counts.map(|count| {
                if pair_sum != 0 {
                    count as f64 / pair_sum as f64
                } else {
                    count as f64
                }
            });
            (pair, row)
        })
        .collect()
}

/// Background frequency of every bin, pooled over all pair types and normalized by
/// the grand total.
///
/// # Errors
///
/// Returns [`TrainingError::NoObservations`] if the matrix is empty.
pub fn reference_frequencies(matrix: &FrequencyMatrix) -> Result<BinArray<f64>, TrainingError> {
    let total = matrix.total();
    if total == 0 {
        return Err(TrainingError::NoObservations);
    }
    let mut reference = [0.0; BIN_COUNT];
    for (_, counts) in matrix.iter() {
        for (slot, &count) in reference.iter_mut().zip(counts.iter()) {
            *slot += count as f64 / total as f64;
        }
    }
    Ok(reference)
}

/// The trained frequency model: raw counts plus the derived distributions.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyModel {
    pub matrix: FrequencyMatrix,
    pub pair_sums: BTreeMap<NucleotidePairType, u64>,
    pub observed: BTreeMap<NucleotidePairType, BinArray<f64>>,
    pub reference: BinArray<f64>,
}

impl FrequencyModel {
    pub fn build(matrix: FrequencyMatrix) -> Result<Self, TrainingError> {
        let pair_sums: BTreeMap<_, _> = NucleotidePairType::ALL
            .into_iter()
            .map(|pair| (pair, matrix.pair_sum(pair)))
            .collect();
        for (pair, sum) in &pair_sums {
            debug!(pair = %pair, observations = sum, "Pair type frequency sum.");
        }

        let reference = reference_frequencies(&matrix)?;
        let observed = observed_frequencies(&matrix);

        Ok(Self {
            matrix,
            pair_sums,
            observed,
            reference,
        })
    }
}
