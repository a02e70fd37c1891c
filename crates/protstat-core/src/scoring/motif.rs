use crate::models::group::Group;
use crate::models::residue::AminoAcid;
use crate::models::sequence::{Sequence, SequenceError};
use std::str::FromStr;

/// One position of a motif pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternElement {
    /// Matches any residue.
    Any,
    /// Matches exactly one residue.
    Literal(AminoAcid),
    /// Matches any member of a group.
    OneOf(Group),
}

impl PatternElement {
    pub fn matches(self, residue: AminoAcid) -> bool {
        match self {
            PatternElement::Any => true,
            PatternElement::Literal(aa) => aa == residue,
            PatternElement::OneOf(group) => group.contains(residue),
        }
    }
}

impl From<AminoAcid> for PatternElement {
    fn from(residue: AminoAcid) -> Self {
        PatternElement::Literal(residue)
    }
}

impl From<Group> for PatternElement {
    fn from(group: Group) -> Self {
        PatternElement::OneOf(group)
    }
}

impl FromStr for PatternElement {
    type Err = SequenceError;

    /// `"*"` parses to the wildcard, a single code to a literal, and a longer
    /// code string to a group alternative.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "*" {
            return Ok(PatternElement::Any);
        }
        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            let code = c.to_ascii_uppercase();
            return match AminoAcid::from_code(code) {
                Some(aa) => Ok(PatternElement::Literal(aa)),
                None => Err(SequenceError::InvalidResidue { found: vec![code] }),
            };
        }
        s.parse::<Group>().map(PatternElement::OneOf)
    }
}

/// Whether the sequence contains a contiguous run matching `pattern`
/// position for position, checked at every start offset. The empty pattern
/// matches trivially.
pub fn motif_present(seq: &Sequence, pattern: &[PatternElement]) -> bool {
    if pattern.is_empty() {
        return true;
    }
    let residues = seq.residues();
    if pattern.len() > residues.len() {
        return false;
    }
    residues.windows(pattern.len()).any(|window| {
        window
            .iter()
            .zip(pattern)
            .all(|(&aa, element)| element.matches(aa))
    })
}
