//! Input/output for structure files and trained profiles.
//!
//! Structure readers implement the [`traits::StructureFile`] trait and produce flat,
//! validated [`AtomRecord`](crate::core::models::atom::AtomRecord) sequences. The
//! [`profiles`] module owns the on-disk format of the trained pseudo-energy profiles,
//! which is the only durable artifact shared by training and scoring.

pub mod pdb;
pub mod profiles;
pub mod traits;
