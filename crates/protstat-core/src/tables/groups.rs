use crate::models::group::Group;
use crate::models::residue::AminoAcid::*;

// Charge groups at standard pH.
pub const NEGATIVE: Group = Group::of(&[AsparticAcid, GlutamicAcid]);
pub const POSITIVE: Group = Group::of(&[Lysine, Arginine, Histidine]);

// Standard hydropathy / polarity classes.
pub const HYDROPHOBIC: Group = Group::of(&[
    Alanine,
    Valine,
    Leucine,
    Isoleucine,
    Methionine,
    Phenylalanine,
    Tryptophan,
    Proline,
    Tyrosine,
]);
pub const POLAR: Group = Group::of(&[
    Serine,
    Threonine,
    Asparagine,
    Glutamine,
    Histidine,
    Cysteine,
]);
// Membership here is somewhat subjective.
pub const BULKY_HYDROPHOBES: Group = Group::of(&[
    Leucine,
    Valine,
    Isoleucine,
    Phenylalanine,
    Tyrosine,
    Tryptophan,
    Proline,
]);
pub const NONPOLAR: Group = Group::of(&[
    Alanine,
    Valine,
    Leucine,
    Isoleucine,
    Methionine,
    Phenylalanine,
    Tryptophan,
    Proline,
    Tyrosine,
    Glycine,
]);

// Side-chain chemistry based grouping.
pub const AROMATIC: Group = Group::of(&[Phenylalanine, Tryptophan, Tyrosine]);
pub const AMIDES: Group = Group::of(&[Glutamine, Asparagine]);
pub const HYDROXYLS: Group = Group::of(&[Tyrosine, Threonine, Serine]);

// Solvent exposure classes from:
// Bordo & Argos, "Suggestions for 'safe' residue substitutions in
// site-directed mutagenesis", J. Mol. Biol. (1991) 217, 721-729.
pub const LOW_EXPOSURE: Group = Group::of(&[
    Isoleucine,
    Cysteine,
    Leucine,
    Valine,
    Phenylalanine,
    Methionine,
    Tryptophan,
    Alanine,
]);
pub const MEDIUM_EXPOSURE: Group = Group::of(&[
    Glycine,
    Histidine,
    Proline,
    Serine,
    Threonine,
    Tyrosine,
]);
pub const HIGH_EXPOSURE: Group = Group::of(&[
    Arginine,
    AsparticAcid,
    Asparagine,
    GlutamicAcid,
    Glutamine,
    Lysine,
]);
