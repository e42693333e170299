//! # RNAscore Core Library
//!
//! A knowledge-based statistical potential for three-dimensional RNA structures.
//! Pairwise distances between the C3' atoms of residues are collected from a corpus
//! of reference structures, binned into 1 Å slots per nucleotide pair type and turned
//! into pseudo-energy profiles. A candidate structure is scored by interpolating its
//! own distances against those profiles.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture:
//!
//! - **[`core`]: The Foundation.** Stateless data models (`AtomRecord`, `ResiduePosition`,
//!   `NucleotidePairType`), the statistical potential itself (`potential`) and I/O for
//!   structure files and persisted profiles.
//!
//! - **[`engine`]: Run Plumbing.** Configuration builders, the error taxonomy shared by
//!   all workflows and progress reporting hooks for front-ends.
//!
//! - **[`workflows`]: The Public API.** Complete `train` and `score` procedures that tie
//!   `core` and `engine` together.

pub mod core;
pub mod engine;
pub mod workflows;
