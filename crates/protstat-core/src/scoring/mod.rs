//! # Scoring Module
//!
//! Pure scoring functions over validated sequences. Every function here is a
//! single-pass scan, O(sequence length) or O(length × pattern length), with
//! no state carried between calls.
//!
//! ## Key Components
//!
//! - [`composition`] - Charge and group-content scores, absolute and
//!   length-normalized
//! - [`scale_sums`] - Sums over per-residue scale values: conformational
//!   entropy, hydrophobicity, combined structure propensity
//! - [`patterning`] - Positional statistics: flanking score, maximum residue
//!   separation, group alternation count
//! - [`motif`] - Sliding-window motif search over residue patterns
//! - [`profile`] - Aggregate per-sequence report bundling the common scores
//!
//! ## Failure Semantics
//!
//! Scoring functions take [`crate::models::sequence::Sequence`], so alphabet
//! validation cannot be bypassed. Degenerate inputs never yield a disguised
//! zero: length-normalized scores fail with [`ScoringError::EmptySequence`]
//! on empty sequences, and a scale lookup miss propagates as an error rather
//! than being skipped. The one documented sentinel is
//! [`patterning::max_residue_separation`], which returns `None` when the
//! group occurs fewer than twice.

pub mod composition;
pub mod motif;
pub mod patterning;
pub mod profile;
pub mod scale_sums;

use crate::tables::scales::UnknownResidueError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScoringError {
    #[error("score is undefined for an empty sequence")]
    EmptySequence,

    #[error("score is undefined for sequences shorter than {minimum} residues")]
    SequenceTooShort { minimum: usize },

    #[error("scale lookup failed: {source}")]
    UnknownResidue {
        #[from]
        source: UnknownResidueError,
    },
}
