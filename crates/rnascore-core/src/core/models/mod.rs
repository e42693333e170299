//! # Core Models Module
//!
//! Data structures describing an RNA structure at the resolution the statistical
//! potential works with.
//!
//! ## Key Components
//!
//! - [`atom`] - One parsed atom line of a structure file
//! - [`residue`] - The representative (C3') position of a residue and backbone filtering
//! - [`nucleotide`] - Nucleobases and the ten canonical nucleotide pair types
//!
//! ## Usage
//!
//! ```ignore
//! use rnascore_core::core::io::{pdb::PdbFile, traits::StructureFile};
//! use rnascore_core::core::models::residue::backbone_positions;
//!
//! let records = PdbFile::read_from_path("1ehz.pdb")?;
//! let residues = backbone_positions(&records);
//! ```

pub mod atom;
pub mod nucleotide;
pub mod residue;
