//! Atom records
//!
//! One row of the `atom_site` table. Residue and chain identity are stored
//! inline, in both the label (mmCIF-assigned) and auth (author) numbering.

use serde::{Deserialize, Serialize};

/// A single atom with its residue and chain identifiers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Atom {
    /// Atom name (e.g., "CA", "N")
    pub label_atom_id: String,
    /// Element symbol (e.g., "C", "ZN")
    pub type_symbol: String,
    /// Residue (component) name (e.g., "ALA", "HOH")
    pub label_comp_id: String,
    /// Chain instance id assigned by the archive
    pub label_asym_id: String,
    /// Author chain id
    pub auth_asym_id: String,
    /// Sequence position within the entity; absent for non-polymers
    pub label_seq_id: Option<i32>,
    /// Author residue number
    pub auth_seq_id: i32,
    /// Entity this atom belongs to
    pub label_entity_id: String,
    /// Temperature factor, or a per-atom confidence value for predicted models
    pub b_factor: f32,
}

impl Default for Atom {
    fn default() -> Self {
        Atom {
            label_atom_id: String::new(),
            type_symbol: String::new(),
            label_comp_id: String::new(),
            label_asym_id: String::new(),
            auth_asym_id: String::new(),
            label_seq_id: None,
            auth_seq_id: 0,
            label_entity_id: String::new(),
            b_factor: 0.0,
        }
    }
}

impl Atom {
    /// Create a new atom with a name and element symbol
    pub fn new(name: impl Into<String>, symbol: impl Into<String>) -> Self {
        Atom {
            label_atom_id: name.into(),
            type_symbol: symbol.into(),
            ..Default::default()
        }
    }

    /// True if this atom and `other` belong to the same residue
    pub fn same_residue(&self, other: &Atom) -> bool {
        self.label_asym_id == other.label_asym_id
            && self.auth_seq_id == other.auth_seq_id
            && self.label_seq_id == other.label_seq_id
            && self.label_comp_id == other.label_comp_id
    }

    /// True if this atom and `other` belong to the same chain instance
    #[inline]
    pub fn same_chain(&self, other: &Atom) -> bool {
        self.label_asym_id == other.label_asym_id
    }
}

/// Builder for atoms
#[derive(Debug, Default)]
pub struct AtomBuilder {
    atom: Atom,
}

impl AtomBuilder {
    pub fn new() -> Self {
        AtomBuilder::default()
    }

    /// Set the atom name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.atom.label_atom_id = name.into();
        self
    }

    /// Set the element symbol
    pub fn element(mut self, symbol: impl Into<String>) -> Self {
        self.atom.type_symbol = symbol.into();
        self
    }

    /// Set the residue name
    pub fn comp_id(mut self, comp_id: impl Into<String>) -> Self {
        self.atom.label_comp_id = comp_id.into();
        self
    }

    /// Set the label chain id; the auth chain id follows unless set explicitly
    pub fn asym_id(mut self, asym_id: impl Into<String>) -> Self {
        let asym_id = asym_id.into();
        if self.atom.auth_asym_id.is_empty() {
            self.atom.auth_asym_id = asym_id.clone();
        }
        self.atom.label_asym_id = asym_id;
        self
    }

    /// Set the author chain id
    pub fn auth_asym_id(mut self, asym_id: impl Into<String>) -> Self {
        self.atom.auth_asym_id = asym_id.into();
        self
    }

    /// Set the label sequence id
    pub fn label_seq_id(mut self, seq_id: i32) -> Self {
        self.atom.label_seq_id = Some(seq_id);
        self
    }

    /// Set the author residue number
    pub fn auth_seq_id(mut self, seq_id: i32) -> Self {
        self.atom.auth_seq_id = seq_id;
        self
    }

    /// Set both numberings to the same value
    pub fn seq_id(self, seq_id: i32) -> Self {
        self.label_seq_id(seq_id).auth_seq_id(seq_id)
    }

    pub fn entity(mut self, entity_id: impl Into<String>) -> Self {
        self.atom.label_entity_id = entity_id.into();
        self
    }

    pub fn b_factor(mut self, b: f32) -> Self {
        self.atom.b_factor = b;
        self
    }

    pub fn build(self) -> Atom {
        self.atom
    }
}
