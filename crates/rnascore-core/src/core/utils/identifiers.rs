use crate::core::models::nucleotide::Nucleobase;
use phf::{Map, Set, phf_map, phf_set};

static REPRESENTATIVE_ATOM_NAMES: Set<&'static str> = phf_set! {
    "C3'", "C3*",
};

static RESIDUE_BASES: Map<&'static str, Nucleobase> = phf_map! {
    "A" => Nucleobase::A,
    "U" => Nucleobase::U,
    "C" => Nucleobase::C,
    "G" => Nucleobase::G,
};

/// Returns `true` for the sugar carbon used as the single coarse-grained position of a
/// nucleotide. Both the current (`C3'`) and the legacy PDB (`C3*`) spellings are accepted.
pub fn is_representative_atom(atom_name: &str) -> bool {
    REPRESENTATIVE_ATOM_NAMES.contains(atom_name.trim())
}

/// Maps a residue name to one of the four standard RNA bases.
///
/// Modified nucleotides and DNA residues are not modelled and yield `None`.
pub fn residue_base(residue_name: &str) -> Option<Nucleobase> {
    RESIDUE_BASES.get(residue_name.trim()).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_representative_atom_accepts_both_spellings() {
        assert!(is_representative_atom("C3'"));
        assert!(is_representative_atom("C3*"));
        assert!(is_representative_atom(" C3' "));
    }

    #[test]
    fn is_representative_atom_rejects_other_sugar_atoms() {
        assert!(!is_representative_atom("C4'"));
        assert!(!is_representative_atom("C3"));
        assert!(!is_representative_atom("P"));
        assert!(!is_representative_atom(""));
    }

    #[test]
    fn residue_base_maps_standard_rna_residues() {
        assert_eq!(residue_base("A"), Some(Nucleobase::A));
        assert_eq!(residue_base("U"), Some(Nucleobase::U));
        assert_eq!(residue_base("C"), Some(Nucleobase::C));
        assert_eq!(residue_base("G"), Some(Nucleobase::G));
    }

    #[test]
    fn residue_base_returns_none_for_non_standard_residues() {
        assert_eq!(residue_base("PSU"), None);
        assert_eq!(residue_base("DA"), None);
        assert_eq!(residue_base("T"), None);
        assert_eq!(residue_base("a"), None);
    }
}
