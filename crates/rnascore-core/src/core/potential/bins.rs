use thiserror::Error;

/// Number of 1 Å bins covering the closed distance domain [0, 20] Å.
pub const BIN_COUNT: usize = 21;

/// Upper bound (inclusive) of the distance domain in Angstroms.
pub const MAX_DISTANCE: f64 = 20.0;

/// Minimum residue sequence-number separation for a pair to be counted.
pub const MIN_SEQUENCE_SEPARATION: isize = 4;

/// Energy assigned to bins without a single observation.
pub const ZERO_OBSERVATION_ENERGY: f64 = 10.0;

/// A fixed-length per-bin array, indexed by distance bin.
pub type BinArray<T> = [T; BIN_COUNT];

#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[error("Distance {distance} Å is outside the profile range [0, {max}] Å", max = MAX_DISTANCE)]
pub struct BinIndexError {
    pub distance: f64,
}

/// Returns the enclosing 1 Å bin of a distance, i.e. `floor(distance)`.
///
/// A distance of exactly 20 Å falls into the last bin (20).
///
/// # Errors
///
/// Returns [`BinIndexError`] for negative, NaN or greater than 20 Å distances.
#[inline]
pub fn bin_index(distance: f64) -> Result<usize, BinIndexError> {
    if !(0.0..=MAX_DISTANCE).contains(&distance) {
        return Err(BinIndexError { distance });
    }
    Ok(distance.floor() as usize)
}
