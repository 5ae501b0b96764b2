//! Units: one chain of a model placed by one operator

use std::sync::Arc;

use lin_alg::f32::{Mat4, Vec3};

use crate::atom::Atom;
use crate::index::{AtomIndex, UnitId};
use crate::linalg::{identity_mat4, is_identity_mat4, left_multiply_mat4, transform_mat4};
use crate::model::Model;

/// Name of the identity operator of the deposited coordinates
pub const IDENTITY_OPERATOR_NAME: &str = "1_555";

/// Operator id reported for coordinates that were not symmetry-expanded
pub const DEFAULT_STRUCT_OPER_ID: &str = "1";

/// A symmetry or user transform applied to a unit
#[derive(Debug, Clone)]
pub struct Operator {
    /// Display name (e.g. "1_555", "ASM_3")
    pub name: String,
    /// Struct oper ids joined by `x`, rightmost applied first (e.g. "2x5")
    pub struct_oper_id: String,
    /// Assembly this operator was generated for
    pub assembly_id: Option<String>,
    /// Row-major transform
    pub matrix: Mat4,
    is_identity: bool,
}

impl Operator {
    pub fn new(name: impl Into<String>, struct_oper_id: impl Into<String>, matrix: Mat4) -> Self {
        let is_identity = is_identity_mat4(&matrix);
        Operator {
            name: name.into(),
            struct_oper_id: struct_oper_id.into(),
            assembly_id: None,
            matrix,
            is_identity,
        }
    }

    /// The operator of deposited coordinates
    pub fn identity() -> Self {
        Operator::new(IDENTITY_OPERATOR_NAME, DEFAULT_STRUCT_OPER_ID, identity_mat4())
    }

    pub fn with_assembly(mut self, assembly_id: impl Into<String>) -> Self {
        self.assembly_id = Some(assembly_id.into());
        self
    }

    #[inline]
    pub fn is_identity(&self) -> bool {
        self.is_identity
    }

    /// Apply `transform` after this operator
    pub fn then(&self, transform: &Mat4) -> Operator {
        let matrix = left_multiply_mat4(transform, &self.matrix);
        Operator {
            is_identity: is_identity_mat4(&matrix),
            matrix,
            ..self.clone()
        }
    }

    #[inline]
    pub fn apply(&self, p: Vec3) -> Vec3 {
        if self.is_identity {
            p
        } else {
            transform_mat4(&self.matrix, p)
        }
    }
}

/// A set of atoms from one chain of a model, placed by an operator
#[derive(Debug, Clone)]
pub struct Unit {
    id: UnitId,
    invariant_id: u32,
    chain_group_id: u32,
    model: Arc<Model>,
    elements: Arc<[AtomIndex]>,
    operator: Operator,
}

impl Unit {
    pub(crate) fn new(
        id: UnitId,
        invariant_id: u32,
        chain_group_id: u32,
        model: Arc<Model>,
        elements: Arc<[AtomIndex]>,
        operator: Operator,
    ) -> Self {
        Unit {
            id,
            invariant_id,
            chain_group_id,
            model,
            elements,
            operator,
        }
    }

    #[inline]
    pub fn id(&self) -> UnitId {
        self.id
    }

    /// Identity shared by all copies of the same chain atoms
    /// (symmetry mates, subsets)
    #[inline]
    pub fn invariant_id(&self) -> u32 {
        self.invariant_id
    }

    #[inline]
    pub fn chain_group_id(&self) -> u32 {
        self.chain_group_id
    }

    #[inline]
    pub fn model(&self) -> &Arc<Model> {
        &self.model
    }

    /// Sorted model atom indices
    #[inline]
    pub fn elements(&self) -> &[AtomIndex] {
        &self.elements
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    #[inline]
    pub fn operator(&self) -> &Operator {
        &self.operator
    }

    /// Atom at a unit-local position
    pub fn atom(&self, local: usize) -> Option<&Atom> {
        self.elements
            .get(local)
            .and_then(|&idx| self.model.atom(idx))
    }

    /// Chain id of the unit (empty for an empty unit)
    pub fn label_asym_id(&self) -> &str {
        self.atom(0).map(|a| a.label_asym_id.as_str()).unwrap_or("")
    }

    /// Transformed coordinate at a unit-local position
    pub fn position(&self, local: usize) -> Option<Vec3> {
        let idx = *self.elements.get(local)?;
        self.model.position(idx).map(|p| self.operator.apply(p))
    }

    /// Iterate `(model index, atom)` pairs
    pub fn atoms(&self) -> impl Iterator<Item = (AtomIndex, &Atom)> + '_ {
        self.elements
            .iter()
            .filter_map(move |&idx| self.model.atom(idx).map(|a| (idx, a)))
    }
}
