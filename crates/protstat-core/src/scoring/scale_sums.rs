use super::ScoringError;
use crate::models::sequence::Sequence;
use crate::tables::scales::{
    Conformation, HELIX_PROPENSITY, KYTE_DOOLITTLE, SHEET_PROPENSITY, Scale,
};

/// Sums the per-residue values of `scale` over the sequence.
pub fn scale_sum(seq: &Sequence, scale: &Scale) -> Result<f64, ScoringError> {
    let mut sum = 0.0;
    for &aa in seq.iter() {
        sum += scale.get(aa)?;
    }
    Ok(sum)
}

/// Summed side-chain conformational entropy for the given conformation.
pub fn entropy_sum(seq: &Sequence, conformation: Conformation) -> Result<f64, ScoringError> {
    scale_sum(seq, conformation.entropy_scale())
}

/// Summed Kyte-Doolittle hydrophobicity.
pub fn hydrophobicity_sum(seq: &Sequence) -> Result<f64, ScoringError> {
    scale_sum(seq, &KYTE_DOOLITTLE)
}

/// Kyte-Doolittle hydrophobicity normalized by the theoretical maximum for
/// the sequence length, making scores comparable across lengths. Fails on an
/// empty sequence.
pub fn hydrophobicity_score(seq: &Sequence) -> Result<f64, ScoringError> {
    if seq.is_empty() {
        return Err(ScoringError::EmptySequence);
    }
    let max = seq.len() as f64 * KYTE_DOOLITTLE.max_value();
    Ok(hydrophobicity_sum(seq)? / max)
}

/// Combined fold-normalized helix plus sheet propensity, summed per residue.
/// A measure of how ambivalent the sequence is toward regular secondary
/// structure.
pub fn anti_structure_score(seq: &Sequence) -> Result<f64, ScoringError> {
    let mut score = 0.0;
    for &aa in seq.iter() {
        score += HELIX_PROPENSITY.get(aa)? + SHEET_PROPENSITY.get(aa)?;
    }
    Ok(score)
}
