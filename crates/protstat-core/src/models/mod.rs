//! # Models Module
//!
//! Fundamental data types for representing protein sequence data.
//!
//! ## Key Components
//!
//! - [`residue`] - The 20 canonical amino acids and their code conversions
//! - [`sequence`] - Validated, immutable amino-acid sequences
//! - [`group`] - Sets of amino acids sharing a biochemical property
//!
//! ## Usage
//!
//! Most operations start by validating raw input into a [`sequence::Sequence`]:
//!
//! ```
//! use protstat::models::sequence::Sequence;
//!
//! let seq = Sequence::parse("mkvisae").unwrap();
//! assert_eq!(seq.to_string(), "MKVISAE");
//! ```

pub mod group;
pub mod residue;
pub mod sequence;
