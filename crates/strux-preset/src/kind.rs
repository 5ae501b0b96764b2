//! Representation kinds assigned to selection buckets

use std::fmt;

use serde::{Deserialize, Serialize};
use strux_mol::MoleculeCategory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RepresentationKind {
    Cartoon,
    BallAndStick,
    Carbohydrate,
}

impl RepresentationKind {
    pub fn name(&self) -> &'static str {
        match self {
            RepresentationKind::Cartoon => "cartoon",
            RepresentationKind::BallAndStick => "ball-and-stick",
            RepresentationKind::Carbohydrate => "carbohydrate",
        }
    }

    /// Default representation of a molecule category
    pub fn for_category(category: MoleculeCategory) -> Self {
        match category {
            MoleculeCategory::Polymer => RepresentationKind::Cartoon,
            MoleculeCategory::Branched => RepresentationKind::Carbohydrate,
            MoleculeCategory::Ligand
            | MoleculeCategory::Ion
            | MoleculeCategory::Lipid
            | MoleculeCategory::Water => RepresentationKind::BallAndStick,
        }
    }
}

impl fmt::Display for RepresentationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
