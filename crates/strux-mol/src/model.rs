//! Model: the atom table plus the entity and symmetry tables that go with it
//!
//! A [`Model`] is immutable once built and is shared between structures
//! through `Arc`. Use [`ModelBuilder`] to create one.

use std::ops::Range;

use ahash::AHashMap;
use lin_alg::f32::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

use crate::atom::Atom;
use crate::coordset::CoordSet;
use crate::entity::{Entity, EntityKind};
use crate::error::{MolError, MolResult};
use crate::index::AtomIndex;
use crate::iterator::{chain_runs, ResidueIterator};
use crate::residue::{classify_component, MoleculeCategory};

/// One row of `pdbx_struct_oper_list`
#[derive(Debug, Clone)]
pub struct StructOper {
    pub id: String,
    /// Row-major transform
    pub matrix: Mat4,
}

/// One row of `pdbx_struct_assembly_gen`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssemblyGen {
    pub assembly_id: String,
    /// Operator expression, e.g. `"(1-60)"` or `"(X0)(1-5)"`
    pub oper_expression: String,
    /// Chains the expression applies to
    pub asym_id_list: Vec<String>,
}

impl AssemblyGen {
    /// Create a row; `asym_ids` is the comma separated list as stored in mmCIF
    pub fn new(
        assembly_id: impl Into<String>,
        oper_expression: impl Into<String>,
        asym_ids: &str,
    ) -> Self {
        AssemblyGen {
            assembly_id: assembly_id.into(),
            oper_expression: oper_expression.into(),
            asym_id_list: asym_ids
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect(),
        }
    }
}

/// A contiguous chain instance inside the atom table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainInfo {
    pub label_asym_id: String,
    pub entity_id: String,
    pub atom_range: Range<usize>,
}

/// An immutable model: atoms, coordinates, entities and symmetry tables
#[derive(Debug, Clone)]
pub struct Model {
    entry_id: String,
    atoms: Vec<Atom>,
    coords: CoordSet,
    entities: AHashMap<String, Entity>,
    chains: Vec<ChainInfo>,
    struct_opers: Vec<StructOper>,
    assembly_gen: Option<Vec<AssemblyGen>>,
}

impl Model {
    /// Entry identifier (e.g. "1ABC")
    #[inline]
    pub fn entry_id(&self) -> &str {
        &self.entry_id
    }

    #[inline]
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    #[inline]
    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    pub fn atom(&self, index: AtomIndex) -> Option<&Atom> {
        self.atoms.get(index.as_usize())
    }

    /// Untransformed coordinate of an atom
    pub fn position(&self, index: AtomIndex) -> Option<Vec3> {
        self.coords.get(index)
    }

    pub fn entity(&self, id: &str) -> Option<&Entity> {
        self.entities.get(id)
    }

    pub fn entity_kind(&self, atom: &Atom) -> Option<EntityKind> {
        self.entities.get(&atom.label_entity_id).map(|e| e.kind)
    }

    /// Display category of the residue an atom belongs to
    pub fn category(&self, index: AtomIndex) -> Option<MoleculeCategory> {
        let atom = self.atom(index)?;
        Some(classify_component(
            self.entity_kind(atom),
            &atom.label_comp_id,
        ))
    }

    /// Chain instances in storage order
    #[inline]
    pub fn chains(&self) -> &[ChainInfo] {
        &self.chains
    }

    /// Position of a chain in storage order
    pub fn chain_ordinal(&self, label_asym_id: &str) -> Option<usize> {
        self.chains
            .iter()
            .position(|c| c.label_asym_id == label_asym_id)
    }

    pub fn chain(&self, label_asym_id: &str) -> Option<&ChainInfo> {
        self.chains.iter().find(|c| c.label_asym_id == label_asym_id)
    }

    /// Atom indices of one chain
    pub fn chain_elements(&self, label_asym_id: &str) -> Option<Vec<AtomIndex>> {
        self.chain(label_asym_id)
            .map(|c| c.atom_range.clone().map(AtomIndex::from).collect())
    }

    /// Residues of one chain
    pub fn residues(&self, label_asym_id: &str) -> Option<ResidueIterator<'_>> {
        let chain = self.chain(label_asym_id)?;
        let range = chain.atom_range.clone();
        Some(ResidueIterator::new(&self.atoms[range.clone()], range.start))
    }

    pub fn struct_opers(&self) -> &[StructOper] {
        &self.struct_opers
    }

    pub fn struct_oper(&self, id: &str) -> Option<&StructOper> {
        self.struct_opers.iter().find(|op| op.id == id)
    }

    /// The assembly generation table; `None` for models without one
    /// (e.g. computed models)
    pub fn assembly_gen(&self) -> Option<&[AssemblyGen]> {
        self.assembly_gen.as_deref()
    }

    /// Distinct assembly ids in table order
    pub fn assembly_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = Vec::new();
        for row in self.assembly_gen().unwrap_or_default() {
            if !ids.contains(&row.assembly_id.as_str()) {
                ids.push(&row.assembly_id);
            }
        }
        ids
    }
}

/// Builder for models
///
/// Atoms must be added chain by chain; [`ModelBuilder::build`] rejects chains
/// that are interleaved with others.
#[derive(Debug, Default)]
pub struct ModelBuilder {
    entry_id: String,
    atoms: Vec<Atom>,
    coords: CoordSet,
    entities: AHashMap<String, Entity>,
    struct_opers: Vec<StructOper>,
    assembly_gen: Option<Vec<AssemblyGen>>,
}

impl ModelBuilder {
    pub fn new(entry_id: impl Into<String>) -> Self {
        ModelBuilder {
            entry_id: entry_id.into(),
            ..Default::default()
        }
    }

    /// Add an atom with coordinates
    pub fn add_atom(mut self, atom: Atom, coord: Vec3) -> Self {
        self.atoms.push(atom);
        self.coords.push(coord);
        self
    }

    pub fn add_entity(mut self, entity: Entity) -> Self {
        self.entities.insert(entity.id.clone(), entity);
        self
    }

    /// Register a `pdbx_struct_oper_list` row
    pub fn add_struct_oper(mut self, id: impl Into<String>, matrix: Mat4) -> Self {
        self.struct_opers.push(StructOper {
            id: id.into(),
            matrix,
        });
        self
    }

    /// Register a `pdbx_struct_assembly_gen` row
    pub fn add_assembly_gen(mut self, row: AssemblyGen) -> Self {
        self.assembly_gen.get_or_insert_with(Vec::new).push(row);
        self
    }

    /// Validate and build the model
    pub fn build(self) -> MolResult<Model> {
        if self.coords.len() != self.atoms.len() {
            return Err(MolError::CoordinateMismatch {
                expected: self.atoms.len(),
                actual: self.coords.len(),
            });
        }

        if !self.entities.is_empty() {
            for (i, atom) in self.atoms.iter().enumerate() {
                if !self.entities.contains_key(&atom.label_entity_id) {
                    return Err(MolError::UnknownEntity {
                        atom: i as u32,
                        entity_id: atom.label_entity_id.clone(),
                    });
                }
            }
        }

        let mut chains: Vec<ChainInfo> = Vec::new();
        for (atom_range, first) in chain_runs(&self.atoms) {
            if chains.iter().any(|c| c.label_asym_id == first.label_asym_id) {
                return Err(MolError::ChainNotContiguous(first.label_asym_id.clone()));
            }
            chains.push(ChainInfo {
                label_asym_id: first.label_asym_id.clone(),
                entity_id: first.label_entity_id.clone(),
                atom_range,
            });
        }

        for (i, op) in self.struct_opers.iter().enumerate() {
            if self.struct_opers[..i].iter().any(|o| o.id == op.id) {
                return Err(MolError::DuplicateOperator(op.id.clone()));
            }
        }

        log::debug!(
            "Built model '{}': {} atoms, {} chains, {} operators",
            self.entry_id,
            self.atoms.len(),
            chains.len(),
            self.struct_opers.len()
        );

        Ok(Model {
            entry_id: self.entry_id,
            atoms: self.atoms,
            coords: self.coords,
            entities: self.entities,
            chains,
            struct_opers: self.struct_opers,
            assembly_gen: self.assembly_gen,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atom::AtomBuilder;
    use crate::linalg::identity_mat4;

    fn atom(asym: &str, entity: &str, comp: &str, seq: i32) -> Atom {
        AtomBuilder::new()
            .name("X")
            .asym_id(asym)
            .entity(entity)
            .comp_id(comp)
            .seq_id(seq)
            .build()
    }

    fn origin() -> Vec3 {
        Vec3::new(0.0, 0.0, 0.0)
    }

    #[test]
    fn test_build_chains() {
        let model = ModelBuilder::new("1ABC")
            .add_entity(Entity::new("1", EntityKind::Polymer))
            .add_entity(Entity::new("2", EntityKind::Water))
            .add_atom(atom("A", "1", "ALA", 1), origin())
            .add_atom(atom("A", "1", "GLY", 2), origin())
            .add_atom(atom("B", "2", "HOH", 1), origin())
            .build()
            .unwrap();

        assert_eq!(model.atom_count(), 3);
        assert_eq!(model.chains().len(), 2);
        assert_eq!(model.chain_ordinal("B"), Some(1));
        assert_eq!(
            model.chain_elements("A").unwrap(),
            vec![AtomIndex(0), AtomIndex(1)]
        );
        assert_eq!(model.residues("A").unwrap().count(), 2);
        assert_eq!(model.category(AtomIndex(2)), Some(MoleculeCategory::Water));
    }

    #[test]
    fn test_interleaved_chain_rejected() {
        let err = ModelBuilder::new("X")
            .add_atom(atom("A", "1", "ALA", 1), origin())
            .add_atom(atom("B", "1", "ALA", 1), origin())
            .add_atom(atom("A", "1", "ALA", 2), origin())
            .build()
            .unwrap_err();
        assert_eq!(err, MolError::ChainNotContiguous("A".into()));
    }

    #[test]
    fn test_unknown_entity_rejected() {
        let err = ModelBuilder::new("X")
            .add_entity(Entity::new("1", EntityKind::Polymer))
            .add_atom(atom("A", "9", "ALA", 1), origin())
            .build()
            .unwrap_err();
        assert!(matches!(err, MolError::UnknownEntity { atom: 0, .. }));
    }

    #[test]
    fn test_duplicate_operator_rejected() {
        let err = ModelBuilder::new("X")
            .add_struct_oper("1", identity_mat4())
            .add_struct_oper("1", identity_mat4())
            .build()
            .unwrap_err();
        assert_eq!(err, MolError::DuplicateOperator("1".into()));
    }

    #[test]
    fn test_assembly_ids() {
        let model = ModelBuilder::new("X")
            .add_assembly_gen(AssemblyGen::new("1", "(1)", "A,B"))
            .add_assembly_gen(AssemblyGen::new("1", "(2)", "C"))
            .add_assembly_gen(AssemblyGen::new("2", "(1)", "A"))
            .build()
            .unwrap();
        assert_eq!(model.assembly_ids(), vec!["1", "2"]);
        assert_eq!(model.assembly_gen().unwrap()[0].asym_id_list, vec!["A", "B"]);
    }

    #[test]
    fn test_no_assembly_table() {
        let model = ModelBuilder::new("AF-P12345").build().unwrap();
        assert!(model.assembly_gen().is_none());
        assert!(model.assembly_ids().is_empty());
    }
}
