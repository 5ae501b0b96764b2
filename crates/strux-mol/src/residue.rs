//! Component classification
//!
//! Sorts residues into the molecule categories used when a structure is
//! split into display buckets. The entity type decides first; component name
//! tables settle non-polymer entities (and atoms without a known entity).

use phf::{phf_map, phf_set};
use serde::{Deserialize, Serialize};

use crate::entity::EntityKind;

// ============================================================================
// Component Name Tables (compile-time perfect hash)
// ============================================================================
//
// AMINO_ACIDS and NUCLEOTIDES map to `true` for the canonical set and
// `false` for common modified or variant components.

static AMINO_ACIDS: phf::Map<&str, bool> = phf_map! {
    "ALA" => true, "ARG" => true, "ASN" => true, "ASP" => true, "CYS" => true,
    "GLN" => true, "GLU" => true, "GLY" => true, "HIS" => true, "ILE" => true,
    "LEU" => true, "LYS" => true, "MET" => true, "PHE" => true, "PRO" => true,
    "SER" => true, "THR" => true, "TRP" => true, "TYR" => true, "VAL" => true,
    "MSE" => false, "SEC" => false, "PYL" => false, "UNK" => false,
    "SEP" => false, "TPO" => false, "PTR" => false, "CSO" => false, "MLY" => false,
};

static NUCLEOTIDES: phf::Map<&str, bool> = phf_map! {
    "DA" => true, "DC" => true, "DG" => true, "DT" => true, "DI" => true,
    "A" => true, "C" => true, "G" => true, "U" => true, "I" => true,
    "N" => true, "DN" => true,
    "PSU" => false, "5MC" => false, "OMC" => false, "OMG" => false,
    "M2G" => false, "5MU" => false, "7MG" => false, "2MG" => false,
    "H2U" => false, "1MA" => false, "4SU" => false, "5CM" => false, "8OG" => false,
};

static WATER_NAMES: phf::Set<&str> = phf_set! {
    "HOH", "DOD", "WAT", "H2O", "SOL", "TIP", "TIP3",
};

/// Single-atom ions as they appear in the chemical component dictionary.
static ION_NAMES: phf::Set<&str> = phf_set! {
    "NA", "K", "LI", "RB", "CS", "MG", "CA", "SR", "BA",
    "ZN", "FE", "FE2", "CU", "CU1", "MN", "MN3", "NI", "CO", "CD", "HG",
    "PT", "AU", "AG", "PB", "AL", "GA", "IN", "TL", "YB", "SM", "EU", "GD",
    "CL", "BR", "IOD", "F", "OH",
};

static LIPID_NAMES: phf::Set<&str> = phf_set! {
    "POPC", "DPPC", "DMPC", "DOPC", "POPE", "DOPE", "POPG", "POPS",
    "PLM", "MYR", "OLA", "OLC", "STE", "LDA", "PEE", "PGV", "CDL",
    "CLR", "CHL", "CHD", "Y01", "LMT", "LHG", "SQD",
};

// ============================================================================
// Classification Functions
// ============================================================================

/// Check if a component is an amino acid (canonical + variants).
pub fn is_amino_acid(comp_id: &str) -> bool {
    AMINO_ACIDS.contains_key(comp_id)
}

/// Returns `true` only for the 20 canonical amino acids.
pub fn is_standard_amino_acid(comp_id: &str) -> bool {
    AMINO_ACIDS.get(comp_id) == Some(&true)
}

/// Check if a component is a nucleotide (standard + modified).
pub fn is_nucleotide(comp_id: &str) -> bool {
    NUCLEOTIDES.contains_key(comp_id)
}

pub fn is_water(comp_id: &str) -> bool {
    WATER_NAMES.contains(comp_id)
}

pub fn is_ion(comp_id: &str) -> bool {
    ION_NAMES.contains(comp_id)
}

pub fn is_lipid(comp_id: &str) -> bool {
    LIPID_NAMES.contains(comp_id)
}

/// Display category of a residue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoleculeCategory {
    Polymer,
    Ligand,
    Ion,
    /// Carbohydrates
    Branched,
    Lipid,
    Water,
}

impl MoleculeCategory {
    /// All categories in display order
    pub const ALL: [MoleculeCategory; 6] = [
        MoleculeCategory::Polymer,
        MoleculeCategory::Ligand,
        MoleculeCategory::Ion,
        MoleculeCategory::Branched,
        MoleculeCategory::Lipid,
        MoleculeCategory::Water,
    ];

    /// Short lowercase name, used as selection tag
    pub fn tag(&self) -> &'static str {
        match self {
            MoleculeCategory::Polymer => "polymer",
            MoleculeCategory::Ligand => "ligand",
            MoleculeCategory::Ion => "ion",
            MoleculeCategory::Branched => "branched",
            MoleculeCategory::Lipid => "lipid",
            MoleculeCategory::Water => "water",
        }
    }

    /// Plural display name
    pub fn display_name(&self) -> &'static str {
        match self {
            MoleculeCategory::Polymer => "Polymers",
            MoleculeCategory::Ligand => "Ligands",
            MoleculeCategory::Ion => "Ions",
            MoleculeCategory::Branched => "Carbohydrates",
            MoleculeCategory::Lipid => "Lipids",
            MoleculeCategory::Water => "Waters",
        }
    }
}

impl std::fmt::Display for MoleculeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// Classify a component given the type of its entity (if known)
pub fn classify_component(kind: Option<EntityKind>, comp_id: &str) -> MoleculeCategory {
    match kind {
        Some(EntityKind::Polymer) => MoleculeCategory::Polymer,
        Some(EntityKind::Branched) => MoleculeCategory::Branched,
        Some(EntityKind::Water) => MoleculeCategory::Water,
        Some(EntityKind::NonPolymer) | Some(EntityKind::Macrolide) => classify_small(comp_id),
        None if is_amino_acid(comp_id) || is_nucleotide(comp_id) => MoleculeCategory::Polymer,
        None => classify_small(comp_id),
    }
}

fn classify_small(comp_id: &str) -> MoleculeCategory {
    if is_water(comp_id) {
        MoleculeCategory::Water
    } else if is_ion(comp_id) {
        MoleculeCategory::Ion
    } else if is_lipid(comp_id) {
        MoleculeCategory::Lipid
    } else {
        MoleculeCategory::Ligand
    }
}
