use super::residue::AminoAcid;
use super::sequence::SequenceError;
use std::fmt;
use std::str::FromStr;

/// A set of amino acids sharing a biochemical property.
///
/// Backed by a bitmask over the 20-code alphabet, so groups are `Copy`,
/// comparable, and constructible in `const` context. Predefined groups live
/// in [`crate::tables::groups`]; ad hoc groups can be parsed from a code
/// string (e.g. `"DE"`) or collected from residues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Group {
    bits: u32,
}

impl Group {
    pub const EMPTY: Group = Group { bits: 0 };

    pub const fn of(residues: &[AminoAcid]) -> Group {
        let mut bits = 0u32;
        let mut i = 0;
        while i < residues.len() {
            bits |= 1 << residues[i] as u32;
            i += 1;
        }
        Group { bits }
    }

    pub const fn contains(self, residue: AminoAcid) -> bool {
        self.bits & (1 << residue as u32) != 0
    }

    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    pub const fn union(self, other: Group) -> Group {
        Group {
            bits: self.bits | other.bits,
        }
    }

    pub const fn intersection(self, other: Group) -> Group {
        Group {
            bits: self.bits & other.bits,
        }
    }

    pub fn iter(self) -> impl Iterator<Item = AminoAcid> {
        AminoAcid::ALL.into_iter().filter(move |aa| self.contains(*aa))
    }
}

impl From<AminoAcid> for Group {
    fn from(residue: AminoAcid) -> Self {
        Group::of(&[residue])
    }
}

impl FromIterator<AminoAcid> for Group {
    fn from_iter<I: IntoIterator<Item = AminoAcid>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Group::EMPTY, |group, aa| group.union(aa.into()))
    }
}

impl FromStr for Group {
    type Err = SequenceError;

    /// Parses an ad hoc group from a string of one-letter codes, with the
    /// same canonical-alphabet validation as sequence parsing.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut group = Group::EMPTY;
        let mut found: Vec<char> = Vec::new();
        for raw in s.chars() {
            let code = raw.to_ascii_uppercase();
            match AminoAcid::from_code(code) {
                Some(aa) => group = group.union(aa.into()),
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
        Ok(group)
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for aa in self.iter() {
            write!(f, "{}", aa.code())?;
        }
        Ok(())
    }
}
