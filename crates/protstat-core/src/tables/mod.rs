//! # Tables Module
//!
//! Compiled-in biochemical property tables. All tables are immutable statics
//! initialized at compile time and never mutated, so they can be shared
//! freely across threads.
//!
//! ## Key Components
//!
//! - [`groups`] - Predefined residue groups (charge classes, aromatics,
//!   solvent exposure classes, ...)
//! - [`scales`] - Real-valued per-residue scales (hydrophobicity, entropy,
//!   secondary-structure propensity) with total alphabet coverage
//!
//! If you use results derived from these tables, please cite the source
//! publications noted alongside each table.

pub mod groups;
pub mod scales;
