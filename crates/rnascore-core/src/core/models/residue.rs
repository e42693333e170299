use super::atom::{AtomRecord, RecordType};
use super::nucleotide::Nucleobase;
use crate::core::utils::identifiers::{is_representative_atom, residue_base};
use nalgebra::Point3;

/// The coarse-grained position of one residue: its C3' atom.
#[derive(Debug, Clone, PartialEq)]
pub struct ResiduePosition {
    pub residue_name: String,
    /// `None` for modified or otherwise non-standard residues.
    pub base: Option<Nucleobase>,
    pub chain_id: char,
    pub residue_number: isize,
    pub position: Point3<f64>,
}

impl ResiduePosition {
    pub fn from_record(record: &AtomRecord) -> Self {
        Self {
            residue_name: record.residue_name.clone(),
            base: residue_base(&record.residue_name),
            chain_id: record.chain_id,
            residue_number: record.residue_number,
            position: record.position,
        }
    }

    #[inline]
    pub fn distance_to(&self, other: &ResiduePosition) -> f64 {
        nalgebra::distance(&self.position, &other.position)
    }

    #[inline]
    pub fn sequence_separation(&self, other: &ResiduePosition) -> isize {
        (other.residue_number - self.residue_number).abs()
    }
}

/// Keeps the representative atom of every polymer residue, in file order.
///
/// `HETATM` records (ligands, ions, modified residues deposited as hetero groups)
/// never contribute a position.
pub fn backbone_positions(records: &[AtomRecord]) -> Vec<ResiduePosition> {
    records
        .iter()
        .filter(|record| record.record_type == RecordType::Atom)
        .filter(|record| is_representative_atom(&record.name))
        .map(ResiduePosition::from_record)
        .collect()
}
