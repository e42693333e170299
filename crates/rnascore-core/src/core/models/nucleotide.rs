use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the four standard RNA nucleobases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Nucleobase {
    A,
    U,
    C,
    G,
}

impl Nucleobase {
    pub fn to_char(self) -> char {
        match self {
            Nucleobase::A => 'A',
            Nucleobase::U => 'U',
            Nucleobase::C => 'C',
            Nucleobase::G => 'G',
        }
    }
}

impl fmt::Display for Nucleobase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unsupported nucleobase: '{0}'")]
pub struct ParseNucleobaseError(pub char);

impl TryFrom<char> for Nucleobase {
    type Error = ParseNucleobaseError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'A' => Ok(Nucleobase::A),
            'U' => Ok(Nucleobase::U),
            'C' => Ok(Nucleobase::C),
            'G' => Ok(Nucleobase::G),
            _ => Err(ParseNucleobaseError(c)),
        }
    }
}

/// The ten symmetric two-letter nucleotide combinations used to index frequency and
/// energy data.
///
/// The lookup is order independent: the pair (U, A) and the pair (A, U) resolve to
/// [`NucleotidePairType::AU`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NucleotidePairType {
    AA,
    AU,
    AC,
    AG,
    UU,
    UC,
    UG,
    CC,
    CG,
    GG,
}

impl NucleotidePairType {
    /// All pair types in canonical order.
    pub const ALL: [NucleotidePairType; 10] = [
        NucleotidePairType::AA,
        NucleotidePairType::AU,
        NucleotidePairType::AC,
        NucleotidePairType::AG,
        NucleotidePairType::UU,
        NucleotidePairType::UC,
        NucleotidePairType::UG,
        NucleotidePairType::CC,
        NucleotidePairType::CG,
        NucleotidePairType::GG,
    ];

    /// Position of the pair type in [`NucleotidePairType::ALL`].
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Resolves two bases to their canonical pair type, regardless of order.
    pub fn from_bases(first: Nucleobase, second: Nucleobase) -> Self {
        use Nucleobase::*;
        match (first, second) {
            (A, A) => NucleotidePairType::AA,
            (A, U) | (U, A) => NucleotidePairType::AU,
            (A, C) | (C, A) => NucleotidePairType::AC,
            (A, G) | (G, A) => NucleotidePairType::AG,
            (U, U) => NucleotidePairType::UU,
            (U, C) | (C, U) => NucleotidePairType::UC,
            (U, G) | (G, U) => NucleotidePairType::UG,
            (C, C) => NucleotidePairType::CC,
            (C, G) | (G, C) => NucleotidePairType::CG,
            (G, G) => NucleotidePairType::GG,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            NucleotidePairType::AA => "AA",
            NucleotidePairType::AU => "AU",
            NucleotidePairType::AC => "AC",
            NucleotidePairType::AG => "AG",
            NucleotidePairType::UU => "UU",
            NucleotidePairType::UC => "UC",
            NucleotidePairType::UG => "UG",
            NucleotidePairType::CC => "CC",
            NucleotidePairType::CG => "CG",
            NucleotidePairType::GG => "GG",
        }
    }
}

impl fmt::Display for NucleotidePairType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid nucleotide pair type: '{0}'")]
pub struct ParsePairTypeError(pub String);

impl FromStr for NucleotidePairType {
    type Err = ParsePairTypeError;

    /// Parses a two-letter symbol in either orientation ("UA" yields `AU`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParsePairTypeError(s.to_string());
        let mut chars = s.trim().chars();
        let (Some(first), Some(second), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };
        let first = Nucleobase::try_from(first).map_err(|_| invalid())?;
        let second = Nucleobase::try_from(second).map_err(|_| invalid())?;
        Ok(Self::from_bases(first, second))
    }
}
