use nalgebra::Point3;
use std::fmt;
use std::str::FromStr;

/// The record keyword an atom line was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RecordType {
    #[default]
    Atom,
    Hetatm,
}

impl FromStr for RecordType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "ATOM" => Ok(RecordType::Atom),
            "HETATM" => Ok(RecordType::Hetatm),
            _ => Err(()),
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RecordType::Atom => "ATOM",
            RecordType::Hetatm => "HETATM",
        })
    }
}

/// A single atom as parsed from a structure file.
///
/// Records are produced once by the structure reader and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomRecord {
    /// The record keyword of the source line.
    pub record_type: RecordType,
    /// The atom serial number; `None` when the field is blank or unreadable (e.g. `*****`
    /// overflow markers), since nothing downstream depends on it.
    pub serial: Option<usize>,
    /// The atom name (e.g., "C3'", "P", "N1").
    pub name: String,
    /// The residue name, which for standard nucleotides is the base letter.
    pub residue_name: String,
    /// The chain identifier.
    pub chain_id: char,
    /// The residue sequence number.
    pub residue_number: isize,
    /// The 3D coordinates of the atom in Angstroms.
    pub position: Point3<f64>,
}

impl AtomRecord {
    pub fn new(
        serial: usize,
        name: &str,
        residue_name: &str,
        chain_id: char,
        residue_number: isize,
        position: Point3<f64>,
    ) -> Self {
        Self {
            record_type: RecordType::Atom,
            serial: Some(serial),
            name: name.to_string(),
            residue_name: residue_name.to_string(),
            chain_id,
            residue_number,
            position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_atom_record_defaults_to_atom_record_type() {
        let record = AtomRecord::new(7, "C3'", "G", 'A', 3, Point3::new(1.0, 2.0, 3.0));
        assert_eq!(record.record_type, RecordType::Atom);
        assert_eq!(record.serial, Some(7));
        assert_eq!(record.name, "C3'");
        assert_eq!(record.residue_name, "G");
        assert_eq!(record.chain_id, 'A');
        assert_eq!(record.residue_number, 3);
        assert_eq!(record.position, Point3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn record_type_parses_known_keywords() {
        assert_eq!(RecordType::from_str("ATOM"), Ok(RecordType::Atom));
        assert_eq!(RecordType::from_str("ATOM  "), Ok(RecordType::Atom));
        assert_eq!(RecordType::from_str("HETATM"), Ok(RecordType::Hetatm));
        assert_eq!(RecordType::from_str("REMARK"), Err(()));
    }

    #[test]
    fn record_type_display_round_trips() {
        for record_type in [RecordType::Atom, RecordType::Hetatm] {
            assert_eq!(RecordType::from_str(&record_type.to_string()), Ok(record_type));
        }
    }
}
