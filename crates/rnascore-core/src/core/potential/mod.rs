//! # Statistical Potential Module
//!
//! The distance-based pseudo-energy model. Training and scoring share the same
//! distance extraction so a structure is always seen through identical restrictions:
//! residues at least [`bins::MIN_SEQUENCE_SEPARATION`] apart in sequence and at most
//! [`bins::MAX_DISTANCE`] Å apart in space.
//!
//! ## Pipeline
//!
//! 1. [`distances`] - Pairwise C3' distances of one structure, grouped by pair type
//! 2. [`frequency`] - Binned counts over a corpus, observed and reference frequencies
//! 3. [`energy`] - Per-bin pseudo-energies `-ln(f_obs / f_ref)`
//! 4. [`scoring`] - Linear interpolation of a query structure against the profiles
//!
//! ## Usage
//!
//! ```ignore
//! use rnascore_core::core::potential::{distances, energy, frequency::{FrequencyMatrix, FrequencyModel}};
//!
//! let mut matrix = FrequencyMatrix::new();
//! for residues in corpus {
//!     matrix.add_sample(&distances::extract_distances(&residues)?)?;
//! }
//! let model = FrequencyModel::build(matrix)?;
//! let profiles = energy::derive_profiles(&model.observed, &model.reference);
//! ```

pub mod bins;
pub mod distances;
pub mod energy;
pub mod frequency;
pub mod scoring;
