//! # protstat Core Library
//!
//! A library for computing physicochemical and patterning statistics of protein
//! amino-acid sequences, built on published biochemical property tables.
//!
//! ## Architectural Philosophy
//!
//! The library is organized in three layers with a strict dependency direction,
//! keeping the data model, the reference data, and the algorithms separable and
//! independently testable.
//!
//! - **[`models`]: The Foundation.** Strongly typed representations of the 20
//!   canonical amino acids, validated sequences, and residue groups. A
//!   [`models::sequence::Sequence`] can only be constructed through validation,
//!   so every scoring function receives clean input by construction.
//!
//! - **[`tables`]: The Reference Data.** Compiled-in biochemical property
//!   tables: group constants (charge classes, aromatics, solvent exposure) and
//!   real-valued scales (Kyte-Doolittle hydrophobicity, conformational
//!   entropies, secondary-structure propensities), each with its literature
//!   source.
//!
//! - **[`scoring`]: The Public API.** Pure scoring functions over validated
//!   sequences: charge and group-content compositions, scale sums, flanking
//!   and patterning statistics, motif search, and an aggregate per-sequence
//!   profile report.
//!
//! All scoring is synchronous, allocation-light, and free of shared mutable
//! state; the property tables are immutable statics, so every function is safe
//! to call concurrently across threads.

pub mod models;
pub mod scoring;
pub mod tables;
