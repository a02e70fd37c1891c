use super::ScoringError;
use super::composition::{
    group_content_per_residue, net_charge, net_charge_per_residue, total_charge,
    total_charge_per_residue,
};
use super::scale_sums::{
    anti_structure_score, entropy_sum, hydrophobicity_score, hydrophobicity_sum,
};
use crate::models::sequence::Sequence;
use crate::tables::groups::{AROMATIC, BULKY_HYDROPHOBES, HYDROPHOBIC, POLAR};
use crate::tables::scales::Conformation;
use serde::Serialize;

/// The batch of per-sequence statistics, computed in one call.
///
/// Serializable so downstream pipelines can persist or tabulate reports.
/// Undefined for empty sequences, which fail with
/// [`ScoringError::EmptySequence`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SequenceProfile {
    pub length: usize,
    pub net_charge: i64,
    pub total_charge: usize,
    pub net_charge_per_residue: f64,
    pub total_charge_per_residue: f64,
    pub aromatic_fraction: f64,
    pub hydrophobic_fraction: f64,
    pub polar_fraction: f64,
    pub bulky_hydrophobe_fraction: f64,
    pub hydrophobicity_sum: f64,
    pub hydrophobicity_score: f64,
    pub helix_entropy_sum: f64,
    pub coil_entropy_sum: f64,
    pub anti_structure_score: f64,
}

impl SequenceProfile {
    pub fn compute(seq: &Sequence) -> Result<Self, ScoringError> {
        Ok(Self {
            length: seq.len(),
            net_charge: net_charge(seq),
            total_charge: total_charge(seq),
            net_charge_per_residue: net_charge_per_residue(seq)?,
            total_charge_per_residue: total_charge_per_residue(seq)?,
            aromatic_fraction: group_content_per_residue(seq, AROMATIC)?,
            hydrophobic_fraction: group_content_per_residue(seq, HYDROPHOBIC)?,
            polar_fraction: group_content_per_residue(seq, POLAR)?,
            bulky_hydrophobe_fraction: group_content_per_residue(seq, BULKY_HYDROPHOBES)?,
            hydrophobicity_sum: hydrophobicity_sum(seq)?,
            hydrophobicity_score: hydrophobicity_score(seq)?,
            helix_entropy_sum: entropy_sum(seq, Conformation::Helix)?,
            coil_entropy_sum: entropy_sum(seq, Conformation::Coil)?,
            anti_structure_score: anti_structure_score(seq)?,
        })
    }
}
