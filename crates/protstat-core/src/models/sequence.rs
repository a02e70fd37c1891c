use super::residue::AminoAcid;
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SequenceError {
    /// Input contained characters outside the canonical 20-code alphabet.
    /// `found` lists the offending characters (after uppercasing),
    /// deduplicated in first-occurrence order.
    #[error("sequence contains non-canonical residue codes: {found:?}")]
    InvalidResidue { found: Vec<char> },
}

/// A validated, immutable protein sequence.
///
/// Construction always goes through validation, so every residue is one of
/// the 20 canonical amino acids. Scoring functions take `&Sequence` and can
/// therefore never observe unvalidated input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Sequence {
    residues: Vec<AminoAcid>,
}

impl Sequence {
    /// Validates and canonicalizes a raw sequence string.
    ///
    /// Characters are uppercased before validation, so `"mkv"` and `"MKV"`
    /// produce the same sequence. An empty string parses to an empty
    /// sequence; length-normalized scores reject that case themselves.
    pub fn parse(input: &str) -> Result<Self, SequenceError> {
        let mut residues = Vec::with_capacity(input.len());
        let mut found: Vec<char> = Vec::new();

        for raw in input.chars() {
            let code = raw.to_ascii_uppercase();
            match AminoAcid::from_code(code) {
                Some(aa) => residues.push(aa),
                None => {
                    if !found.contains(&code) {
                        found.push(code);
                    }
                }
            }
        }

        if !found.is_empty() {
            return Err(SequenceError::InvalidResidue { found });
        }
        Ok(Self { residues })
    }

    pub fn from_residues(residues: Vec<AminoAcid>) -> Self {
        Self { residues }
    }

    pub fn residues(&self) -> &[AminoAcid] {
        &self.residues
    }

    pub fn len(&self) -> usize {
        self.residues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AminoAcid> {
        self.residues.iter()
    }

    /// The sequence as title-case three-letter codes, one per residue, in the
    /// form simulation input writers consume.
    pub fn three_letter_codes(&self) -> Vec<&'static str> {
        self.residues.iter().map(|aa| aa.three_letter_code()).collect()
    }
}

impl Deref for Sequence {
    type Target = [AminoAcid];

    fn deref(&self) -> &Self::Target {
        &self.residues
    }
}

impl FromStr for Sequence {
    type Err = SequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Sequence::parse(s)
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for aa in &self.residues {
            write!(f, "{}", aa.code())?;
        }
        Ok(())
    }
}

impl FromIterator<AminoAcid> for Sequence {
    fn from_iter<I: IntoIterator<Item = AminoAcid>>(iter: I) -> Self {
        Self {
            residues: iter.into_iter().collect(),
        }
    }
}
