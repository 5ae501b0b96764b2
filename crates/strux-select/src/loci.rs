//! Loci: resolved, structure-bound selections
//!
//! A [`Loci`] lists, per unit, the model atom indices it covers. Each entry
//! also carries the unit's invariant id so the deposited chain identity
//! survives symmetry expansion.

use strux_mol::{AtomIndex, Structure, Unit, UnitId};

/// Selected elements of one unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LociElement {
    pub unit_id: UnitId,
    pub invariant_id: u32,
    pub label_asym_id: String,
    pub operator_name: String,
    /// Sorted model atom indices
    pub indices: Vec<AtomIndex>,
}

impl LociElement {
    pub fn new(unit: &Unit, indices: Vec<AtomIndex>) -> Self {
        LociElement {
            unit_id: unit.id(),
            invariant_id: unit.invariant_id(),
            label_asym_id: unit.label_asym_id().to_string(),
            operator_name: unit.operator().name.clone(),
            indices,
        }
    }
}

/// An ordered collection of `(unit, elements)` pairs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loci {
    structure_label: String,
    elements: Vec<LociElement>,
}

impl Loci {
    pub fn new(structure_label: impl Into<String>, elements: Vec<LociElement>) -> Self {
        Loci {
            structure_label: structure_label.into(),
            elements,
        }
    }

    pub fn empty(structure_label: impl Into<String>) -> Self {
        Loci::new(structure_label, Vec::new())
    }

    /// Every element of the structure
    pub fn all(structure: &Structure) -> Self {
        let elements = structure
            .units()
            .iter()
            .filter(|u| !u.is_empty())
            .map(|u| LociElement::new(u, u.elements().to_vec()))
            .collect();
        Loci::new(structure.label(), elements)
    }

    #[inline]
    pub fn structure_label(&self) -> &str {
        &self.structure_label
    }

    #[inline]
    pub fn elements(&self) -> &[LociElement] {
        &self.elements
    }

    pub fn is_empty(&self) -> bool {
        self.elements.iter().all(|e| e.indices.is_empty())
    }

    /// Total number of covered elements
    pub fn element_count(&self) -> usize {
        self.elements.iter().map(|e| e.indices.len()).sum()
    }

    pub fn unit_ids(&self) -> Vec<UnitId> {
        self.elements.iter().map(|e| e.unit_id).collect()
    }

    /// Distinct chain ids in loci order
    pub fn label_asym_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = Vec::new();
        for e in &self.elements {
            if !ids.contains(&e.label_asym_id.as_str()) {
                ids.push(&e.label_asym_id);
            }
        }
        ids
    }

    pub fn contains(&self, unit_id: UnitId, index: AtomIndex) -> bool {
        self.elements
            .iter()
            .any(|e| e.unit_id == unit_id && e.indices.binary_search(&index).is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use lin_alg::f32::Vec3;
    use strux_mol::{AtomBuilder, ModelBuilder};

    #[test]
    fn test_all_and_empty() {
        let model = ModelBuilder::new("1ABC")
            .add_atom(
                AtomBuilder::new().asym_id("A").comp_id("GLY").seq_id(1).build(),
                Vec3::new(0.0, 0.0, 0.0),
            )
            .add_atom(
                AtomBuilder::new().asym_id("B").comp_id("GLY").seq_id(1).build(),
                Vec3::new(0.0, 0.0, 0.0),
            )
            .build()
            .unwrap();
        let s = Structure::from_model(&Arc::new(model));

        let all = Loci::all(&s);
        assert_eq!(all.element_count(), 2);
        assert_eq!(all.label_asym_ids(), vec!["A", "B"]);
        assert!(all.contains(UnitId(1), AtomIndex(1)));
        assert!(!all.contains(UnitId(0), AtomIndex(1)));
        assert_eq!(all.elements()[0].operator_name, "1_555");

        let none = Loci::empty("1ABC");
        assert!(none.is_empty());
        assert_eq!(none.structure_label(), "1ABC");
    }
}
