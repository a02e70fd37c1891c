use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AminoAcid {
    // --- Aliphatic, Nonpolar ---
    Alanine,    // Alanine (ALA)
    Glycine,    // Glycine (GLY)
    Isoleucine, // Isoleucine (ILE)
    Leucine,    // Leucine (LEU)
    Proline,    // Proline (PRO)
    Valine,     // Valine (VAL)

    // --- Aromatic ---
    Phenylalanine, // Phenylalanine (PHE)
    Tryptophan,    // Tryptophan (TRP)
    Tyrosine,      // Tyrosine (TYR)

    // --- Polar, Uncharged ---
    Asparagine, // Asparagine (ASN)
    Cysteine,   // Cysteine (CYS)
    Glutamine,  // Glutamine (GLN)
    Serine,     // Serine (SER)
    Threonine,  // Threonine (THR)
    Methionine, // Methionine (MET)

    // --- Positively Charged (Basic) ---
    Arginine,  // Arginine (ARG)
    Histidine, // Histidine (HIS)
    Lysine,    // Lysine (LYS)

    // --- Negatively Charged (Acidic) ---
    AsparticAcid, // Aspartic Acid (ASP)
    GlutamicAcid, // Glutamic Acid (GLU)
}

impl AminoAcid {
    /// All 20 canonical amino acids, in declaration order.
    pub const ALL: [AminoAcid; 20] = [
        AminoAcid::Alanine,
        AminoAcid::Glycine,
        AminoAcid::Isoleucine,
        AminoAcid::Leucine,
        AminoAcid::Proline,
        AminoAcid::Valine,
        AminoAcid::Phenylalanine,
        AminoAcid::Tryptophan,
        AminoAcid::Tyrosine,
        AminoAcid::Asparagine,
        AminoAcid::Cysteine,
        AminoAcid::Glutamine,
        AminoAcid::Serine,
        AminoAcid::Threonine,
        AminoAcid::Methionine,
        AminoAcid::Arginine,
        AminoAcid::Histidine,
        AminoAcid::Lysine,
        AminoAcid::AsparticAcid,
        AminoAcid::GlutamicAcid,
    ];

    pub const COUNT: usize = 20;

    /// Looks up an amino acid from its uppercase one-letter code.
    /// Returns `None` for anything outside the canonical alphabet.
    pub const fn from_code(code: char) -> Option<AminoAcid> {
        match code {
            'A' => Some(AminoAcid::Alanine),
            'C' => Some(AminoAcid::Cysteine),
            'D' => Some(AminoAcid::AsparticAcid),
            'E' => Some(AminoAcid::GlutamicAcid),
            'F' => Some(AminoAcid::Phenylalanine),
            'G' => Some(AminoAcid::Glycine),
            'H' => Some(AminoAcid::Histidine),
            'I' => Some(AminoAcid::Isoleucine),
            'K' => Some(AminoAcid::Lysine),
            'L' => Some(AminoAcid::Leucine),
            'M' => Some(AminoAcid::Methionine),
            'N' => Some(AminoAcid::Asparagine),
            'P' => Some(AminoAcid::Proline),
            'Q' => Some(AminoAcid::Glutamine),
            'R' => Some(AminoAcid::Arginine),
            'S' => Some(AminoAcid::Serine),
            'T' => Some(AminoAcid::Threonine),
            'V' => Some(AminoAcid::Valine),
            'W' => Some(AminoAcid::Tryptophan),
            'Y' => Some(AminoAcid::Tyrosine),
            _ => None,
        }
    }

    /// The canonical uppercase one-letter code.
    pub const fn code(self) -> char {
        match self {
            AminoAcid::Alanine => 'A',
            AminoAcid::Cysteine => 'C',
            AminoAcid::AsparticAcid => 'D',
            AminoAcid::GlutamicAcid => 'E',
            AminoAcid::Phenylalanine => 'F',
            AminoAcid::Glycine => 'G',
            AminoAcid::Histidine => 'H',
            AminoAcid::Isoleucine => 'I',
            AminoAcid::Lysine => 'K',
            AminoAcid::Leucine => 'L',
            AminoAcid::Methionine => 'M',
            AminoAcid::Asparagine => 'N',
            AminoAcid::Proline => 'P',
            AminoAcid::Glutamine => 'Q',
            AminoAcid::Arginine => 'R',
            AminoAcid::Serine => 'S',
            AminoAcid::Threonine => 'T',
            AminoAcid::Valine => 'V',
            AminoAcid::Tryptophan => 'W',
            AminoAcid::Tyrosine => 'Y',
        }
    }

    /// The title-case three-letter code, the form simulation input writers
    /// consume (e.g. `"Ala"`).
    pub const fn three_letter_code(self) -> &'static str {
        match self {
            AminoAcid::Alanine => "Ala",
            AminoAcid::Cysteine => "Cys",
            AminoAcid::AsparticAcid => "Asp",
            AminoAcid::GlutamicAcid => "Glu",
            AminoAcid::Phenylalanine => "Phe",
            AminoAcid::Glycine => "Gly",
            AminoAcid::Histidine => "His",
            AminoAcid::Isoleucine => "Ile",
            AminoAcid::Lysine => "Lys",
            AminoAcid::Leucine => "Leu",
            AminoAcid::Methionine => "Met",
            AminoAcid::Asparagine => "Asn",
            AminoAcid::Proline => "Pro",
            AminoAcid::Glutamine => "Gln",
            AminoAcid::Arginine => "Arg",
            AminoAcid::Serine => "Ser",
            AminoAcid::Threonine => "Thr",
            AminoAcid::Valine => "Val",
            AminoAcid::Tryptophan => "Trp",
            AminoAcid::Tyrosine => "Tyr",
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unrecognized amino acid code '{0}'")]
pub struct ParseAminoAcidError(pub String);

impl FromStr for AminoAcid {
    type Err = ParseAminoAcidError;

    /// Parses a one-letter or three-letter code, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return AminoAcid::from_code(c.to_ascii_uppercase())
                .ok_or_else(|| ParseAminoAcidError(s.to_string()));
        }
        let upper = trimmed.to_ascii_uppercase();
        AminoAcid::ALL
            .iter()
            .find(|aa| aa.three_letter_code().to_ascii_uppercase() == upper)
            .copied()
            .ok_or_else(|| ParseAminoAcidError(s.to_string()))
    }
}

impl fmt::Display for AminoAcid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_contains_each_residue_exactly_once() {
        let mut codes: Vec<char> = AminoAcid::ALL.iter().map(|aa| aa.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), AminoAcid::COUNT);
    }

    #[test]
    fn from_code_round_trips_with_code() {
        for aa in AminoAcid::ALL {
            assert_eq!(AminoAcid::from_code(aa.code()), Some(aa));
        }
    }

    #[test]
    fn from_code_rejects_non_canonical_characters() {
        assert_eq!(AminoAcid::from_code('X'), None);
        assert_eq!(AminoAcid::from_code('Z'), None);
        assert_eq!(AminoAcid::from_code('B'), None);
        assert_eq!(AminoAcid::from_code('a'), None);
        assert_eq!(AminoAcid::from_code('-'), None);
    }

    #[test]
    fn three_letter_codes_are_unique_and_title_case() {
        let mut codes: Vec<&str> = AminoAcid::ALL
            .iter()
            .map(|aa| aa.three_letter_code())
            .collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), AminoAcid::COUNT);
        for code in codes {
            assert_eq!(code.len(), 3);
            assert!(code.chars().next().unwrap().is_ascii_uppercase());
            assert!(code.chars().skip(1).all(|c| c.is_ascii_lowercase()));
        }
    }

    #[test]
    fn from_str_parses_one_letter_codes_case_insensitively() {
        assert_eq!("K".parse::<AminoAcid>().unwrap(), AminoAcid::Lysine);
        assert_eq!("k".parse::<AminoAcid>().unwrap(), AminoAcid::Lysine);
        assert_eq!("w".parse::<AminoAcid>().unwrap(), AminoAcid::Tryptophan);
    }

    #[test]
    fn from_str_parses_three_letter_codes_case_insensitively() {
        assert_eq!("Ala".parse::<AminoAcid>().unwrap(), AminoAcid::Alanine);
        assert_eq!("ALA".parse::<AminoAcid>().unwrap(), AminoAcid::Alanine);
        assert_eq!("asp".parse::<AminoAcid>().unwrap(), AminoAcid::AsparticAcid);
        assert_eq!("TRP".parse::<AminoAcid>().unwrap(), AminoAcid::Tryptophan);
    }

    #[test]
    fn from_str_rejects_unknown_codes() {
        assert!("X".parse::<AminoAcid>().is_err());
        assert!("Xaa".parse::<AminoAcid>().is_err());
        assert!("".parse::<AminoAcid>().is_err());
        assert!("Alanine".parse::<AminoAcid>().is_err());
    }

    #[test]
    fn display_writes_the_one_letter_code() {
        assert_eq!(AminoAcid::GlutamicAcid.to_string(), "E");
        assert_eq!(AminoAcid::Glycine.to_string(), "G");
    }
}
