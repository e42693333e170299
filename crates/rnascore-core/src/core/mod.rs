//! # Core Module
//!
//! Fundamental building blocks of RNAscore: the structure data model, the
//! distance-based statistical potential and file I/O.
//!
//! - **Structure Representation** ([`models`]) - Atom records, representative residue
//!   positions, nucleobases and canonical nucleotide pair types
//! - **Statistical Potential** ([`potential`]) - Distance extraction, frequency model,
//!   pseudo-energy derivation and interpolation scoring
//! - **File I/O** ([`io`]) - PDB parsing and the persisted profile store
//! - **Identifiers** ([`utils`]) - Static lookup tables for atom and residue names

pub mod io;
pub mod models;
pub mod potential;
pub mod utils;
