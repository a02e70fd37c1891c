use crate::models::residue::AminoAcid;
use phf::{Map, phf_map};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// A total mapping from every canonical one-letter code to a real-valued
/// physicochemical score.
///
/// The builtin scales cover the whole alphabet; coverage is nevertheless a
/// table invariant separate from sequence validation, so lookups return a
/// `Result` and a miss surfaces as [`UnknownResidueError`] rather than being
/// skipped.
#[derive(Debug)]
pub struct Scale {
    name: &'static str,
    values: &'static Map<char, f64>,
}

impl Scale {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn get(&self, residue: AminoAcid) -> Result<f64, UnknownResidueError> {
        self.values
            .get(&residue.code())
            .copied()
            .ok_or(UnknownResidueError {
                residue: residue.code(),
                scale: self.name,
            })
    }

    /// The largest single-residue value in the scale.
    pub fn max_value(&self) -> f64 {
        self.values
            .values()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max)
    }

    pub fn min_value(&self) -> f64 {
        self.values.values().copied().fold(f64::INFINITY, f64::min)
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("residue '{residue}' has no entry in the {scale} scale")]
pub struct UnknownResidueError {
    pub residue: char,
    pub scale: &'static str,
}

/// Secondary-structure conformation selecting an entropy scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Conformation {
    Helix,
    Coil,
}

impl Conformation {
    pub fn entropy_scale(self) -> &'static Scale {
        match self {
            Conformation::Helix => &HELIX_ENTROPY,
            Conformation::Coil => &COIL_ENTROPY,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid conformation '{0}': expected 'helix' or 'coil'")]
pub struct InvalidConformationError(pub String);

impl FromStr for Conformation {
    type Err = InvalidConformationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "helix" => Ok(Conformation::Helix),
            "coil" => Ok(Conformation::Coil),
            _ => Err(InvalidConformationError(s.to_string())),
        }
    }
}

// Side-chain conformational entropy values from:
// Avbelj & Fele, "Role of main-chain electrostatics, hydrophobic effect and
// side-chain conformational entropy in determining the secondary structure
// of proteins", J. Mol. Biol. (1998) 279, 665-684.

static COIL_ENTROPY_VALUES: Map<char, f64> = phf_map! {
    'A' => 0.0,
    'C' => -0.572,
    'D' => -1.318,
    'E' => -1.763,
    'F' => -0.554,
    'G' => 0.0,
    'H' => -0.895,
    'I' => -0.926,
    'K' => -1.873,
    'L' => -0.763,
    'M' => -1.549,
    'N' => -1.318,
    'P' => 0.0,
    'Q' => -1.763,
    'R' => -2.120,
    'S' => -1.695,
    'T' => -1.618,
    'V' => -0.541,
    'W' => -0.909,
    'Y' => -1.019,
};

static HELIX_ENTROPY_VALUES: Map<char, f64> = phf_map! {
    'A' => 0.0,
    'C' => -0.535,
    'D' => -0.959,
    'E' => -1.547,
    'F' => -0.409,
    'G' => 0.0,
    'H' => -0.794,
    'I' => -0.481,
    'K' => -1.849,
    'L' => -0.696,
    'M' => -1.452,
    'N' => -1.436,
    'P' => 0.0,
    'Q' => -1.547,
    'R' => -1.991,
    'S' => -1.686,
    'T' => -1.363,
    'V' => -0.172,
    'W' => -0.633,
    'Y' => -0.858,
};

// Hydrophobicity values as tabulated from:
// Kyte & Doolittle, "A simple method for displaying the hydropathic
// character of a protein", J. Mol. Biol. (1982) 157, 105-132.
static KYTE_DOOLITTLE_VALUES: Map<char, f64> = phf_map! {
    'A' => 1.8,
    'C' => 2.5,
    'D' => -3.5,
    'E' => -3.5,
    'F' => 2.8,
    'G' => -0.4,
    'H' => -3.2,
    'I' => 4.5,
    'K' => -3.9,
    'L' => 3.8,
    'M' => 1.9,
    'N' => -3.5,
    'P' => -1.6,
    'Q' => -3.5,
    'R' => -4.5,
    'S' => -0.8,
    'T' => -1.3,
    'V' => 4.2,
    'W' => -0.9,
    'Y' => -1.3,
};

// Alpha helix propensity values (kcal/mol) from:
// Pace & Scholtz, "A helix propensity scale based on experimental studies of
// peptides and proteins", Biophys. J. (1998) 75, 422-427.
static HELIX_PROPENSITY_KCAL_VALUES: Map<char, f64> = phf_map! {
    'A' => 0.0,
    'C' => 0.68,
    'D' => 0.69,
    'E' => 0.4,
    'F' => 0.54,
    'G' => 1.0,
    'H' => 0.66,
    'I' => 0.41,
    'K' => 0.26,
    'L' => 0.21,
    'M' => 0.24,
    'N' => 0.65,
    'P' => 3.16,
    'Q' => 0.39,
    'R' => 0.21,
    'S' => 0.5,
    'T' => 0.49,
    'V' => 0.61,
    'W' => 0.49,
    'Y' => 0.53,
};

// Beta sheet propensity values (kcal/mol) from:
// Minor & Kim, "Measurement of the beta-sheet-forming propensities of amino
// acids", Nature (1994) 367, 660-663. The proline value is suspect.
static SHEET_PROPENSITY_KCAL_VALUES: Map<char, f64> = phf_map! {
    'A' => 0.0,
    'C' => 0.52,
    'D' => -0.94,
    'E' => 0.01,
    'F' => 0.86,
    'G' => -1.2,
    'H' => -0.02,
    'I' => 1.0,
    'K' => 0.27,
    'L' => 0.51,
    'M' => 0.72,
    'N' => -0.08,
    'P' => -3.0,
    'Q' => 0.23,
    'R' => 0.45,
    'S' => 0.7,
    'T' => 1.1,
    'V' => 0.82,
    'W' => 0.54,
    'Y' => 0.96,
};

// Fold-normalized helix and sheet propensity values from:
// Fujiwara, Toda & Ikeguchi, "Dependence of alpha-helical and beta-sheet
// amino acid propensities on the overall protein fold type",
// BMC Structural Biology (2012) 12:18.
static HELIX_PROPENSITY_VALUES: Map<char, f64> = phf_map! {
    'A' => 1.41,
    'C' => 0.85,
    'D' => 0.82,
    'E' => 1.39,
    'F' => 1.00,
    'G' => 0.44,
    'H' => 0.87,
    'I' => 1.04,
    'K' => 1.17,
    'L' => 1.28,
    'M' => 1.26,
    'N' => 0.73,
    'P' => 0.44,
    'Q' => 1.26,
    'R' => 1.21,
    'S' => 0.76,
    'T' => 0.78,
    'V' => 0.91,
    'W' => 1.07,
    'Y' => 0.98,
};

static SHEET_PROPENSITY_VALUES: Map<char, f64> = phf_map! {
    'A' => 0.75,
    'C' => 1.36,
    'D' => 0.55,
    'E' => 0.65,
    'F' => 1.4,
    'G' => 0.67,
    'H' => 0.99,
    'I' => 1.79,
    'K' => 0.76,
    'L' => 1.15,
    'M' => 1.01,
    'N' => 0.63,
    'P' => 0.40,
    'Q' => 0.72,
    'R' => 0.85,
    'S' => 0.81,
    'T' => 1.21,
    'V' => 2.00,
    'W' => 1.23,
    'Y' => 1.37,
};

pub static COIL_ENTROPY: Scale = Scale {
    name: "coil entropy",
    values: &COIL_ENTROPY_VALUES,
};

pub static HELIX_ENTROPY: Scale = Scale {
    name: "helix entropy",
    values: &HELIX_ENTROPY_VALUES,
};

pub static KYTE_DOOLITTLE: Scale = Scale {
    name: "Kyte-Doolittle hydrophobicity",
    values: &KYTE_DOOLITTLE_VALUES,
};

pub static HELIX_PROPENSITY_KCAL: Scale = Scale {
    name: "helix propensity (kcal/mol)",
    values: &HELIX_PROPENSITY_KCAL_VALUES,
};

pub static SHEET_PROPENSITY_KCAL: Scale = Scale {
    name: "sheet propensity (kcal/mol)",
    values: &SHEET_PROPENSITY_KCAL_VALUES,
};

pub static HELIX_PROPENSITY: Scale = Scale {
    name: "fold-normalized helix propensity",
    values: &HELIX_PROPENSITY_VALUES,
};

pub static SHEET_PROPENSITY: Scale = Scale {
    name: "fold-normalized sheet propensity",
    values: &SHEET_PROPENSITY_VALUES,
};
