use super::ScoringError;
use crate::models::group::Group;
use crate::models::sequence::Sequence;
use crate::tables::groups::{NEGATIVE, POSITIVE};

/// Net charge at standard pH: each negative residue contributes -1, each
/// positive residue +1.
pub fn net_charge(seq: &Sequence) -> i64 {
    seq.iter()
        .map(|&aa| {
            if NEGATIVE.contains(aa) {
                -1
            } else if POSITIVE.contains(aa) {
                1
            } else {
                0
            }
        })
        .sum()
}

/// Total number of charged residues, regardless of sign.
pub fn total_charge(seq: &Sequence) -> usize {
    group_content(seq, NEGATIVE.union(POSITIVE))
}

/// Net charge per residue (NCPR). Fails on an empty sequence.
pub fn net_charge_per_residue(seq: &Sequence) -> Result<f64, ScoringError> {
    per_residue(net_charge(seq) as f64, seq)
}

/// Total charge per residue (TCPR). Fails on an empty sequence.
pub fn total_charge_per_residue(seq: &Sequence) -> Result<f64, ScoringError> {
    per_residue(total_charge(seq) as f64, seq)
}

/// Number of residues belonging to `group`. The group may be one of the
/// predefined tables or any ad hoc set.
pub fn group_content(seq: &Sequence, group: Group) -> usize {
    seq.iter().filter(|&&aa| group.contains(aa)).count()
}

/// Fraction of residues belonging to `group`. Fails on an empty sequence.
pub fn group_content_per_residue(seq: &Sequence, group: Group) -> Result<f64, ScoringError> {
    per_residue(group_content(seq, group) as f64, seq)
}

fn per_residue(value: f64, seq: &Sequence) -> Result<f64, ScoringError> {
    if seq.is_empty() {
        return Err(ScoringError::EmptySequence);
    }
    Ok(value / seq.len() as f64)
}
