//! Entities (`entity` category)

use serde::{Deserialize, Serialize};

/// Molecular type of an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntityKind {
    Polymer,
    NonPolymer,
    Branched,
    Water,
    Macrolide,
}

impl EntityKind {
    /// Parse the mmCIF `entity.type` value
    pub fn from_mmcif(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "polymer" => Some(EntityKind::Polymer),
            "non-polymer" => Some(EntityKind::NonPolymer),
            "branched" => Some(EntityKind::Branched),
            "water" => Some(EntityKind::Water),
            "macrolide" => Some(EntityKind::Macrolide),
            _ => None,
        }
    }
}

/// A distinct chemical entity of the entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: String,
    pub kind: EntityKind,
    #[serde(default)]
    pub description: String,
}

impl Entity {
    pub fn new(id: impl Into<String>, kind: EntityKind) -> Self {
        Entity {
            id: id.into(),
            kind,
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}
