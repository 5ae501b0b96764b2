//! Structures and the structure builder
//!
//! A [`Structure`] is an ordered list of [`Unit`]s under a label. Units that
//! share a chain group id are treated as a single chain by chain-based
//! representations; [`StructureBuilder::begin_chain_group`] and
//! [`StructureBuilder::end_chain_group`] bracket such groups.

use std::sync::Arc;

use lin_alg::f32::Mat4;

use crate::index::{AtomIndex, UnitId};
use crate::model::Model;
use crate::unit::{Operator, Unit};

/// An immutable collection of units
#[derive(Debug, Clone)]
pub struct Structure {
    label: String,
    units: Vec<Unit>,
}

impl Structure {
    /// A structure with no units
    pub fn empty(label: impl Into<String>) -> Self {
        Structure {
            label: label.into(),
            units: Vec::new(),
        }
    }

    /// The deposited coordinates: one unit per chain, identity operator
    pub fn from_model(model: &Arc<Model>) -> Self {
        let mut builder = StructureBuilder::new(model.entry_id());
        for (ordinal, chain) in model.chains().iter().enumerate() {
            builder.add_unit(
                model.clone(),
                chain.atom_range.clone().map(AtomIndex::from).collect(),
                Operator::identity(),
                ordinal as u32,
            );
        }
        builder.build()
    }

    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    #[inline]
    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    pub fn unit(&self, id: UnitId) -> Option<&Unit> {
        self.units.iter().find(|u| u.id() == id)
    }

    #[inline]
    pub fn unit_count(&self) -> usize {
        self.units.len()
    }

    /// Total number of elements over all units
    pub fn element_count(&self) -> usize {
        self.units.iter().map(Unit::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.element_count() == 0
    }

    /// Runs of consecutive units sharing a chain group id
    pub fn chain_groups(&self) -> Vec<&[Unit]> {
        let mut groups = Vec::new();
        let mut start = 0;
        for i in 1..=self.units.len() {
            if i == self.units.len()
                || self.units[i].chain_group_id() != self.units[start].chain_group_id()
            {
                if start < i {
                    groups.push(&self.units[start..i]);
                }
                start = i;
            }
        }
        groups
    }

    /// Distinct chain ids in unit order
    pub fn label_asym_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = Vec::new();
        for unit in &self.units {
            let id = unit.label_asym_id();
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        ids
    }

    /// A copy of this structure with `transform` applied after every unit's
    /// operator
    pub fn transformed(&self, transform: &Mat4) -> Structure {
        let units = self
            .units
            .iter()
            .map(|u| {
                Unit::new(
                    u.id(),
                    u.invariant_id(),
                    u.chain_group_id(),
                    u.model().clone(),
                    u.elements().into(),
                    u.operator().then(transform),
                )
            })
            .collect();
        Structure {
            label: self.label.clone(),
            units,
        }
    }

    /// Keep only the given elements of each unit, dropping units left empty.
    ///
    /// `subsets` pairs each unit of `self` (by position) with the sorted
    /// elements to keep. Unit ids, invariant ids, chain groups and operators
    /// are preserved.
    pub fn subset(&self, subsets: Vec<Vec<AtomIndex>>) -> Structure {
        let units = self
            .units
            .iter()
            .zip(subsets)
            .filter(|(_, elements)| !elements.is_empty())
            .map(|(u, elements)| {
                Unit::new(
                    u.id(),
                    u.invariant_id(),
                    u.chain_group_id(),
                    u.model().clone(),
                    elements.into(),
                    u.operator().clone(),
                )
            })
            .collect();
        Structure {
            label: self.label.clone(),
            units,
        }
    }
}

/// Incrementally assembles a [`Structure`]
#[derive(Debug)]
pub struct StructureBuilder {
    label: String,
    units: Vec<Unit>,
    next_chain_group: u32,
    open_group: Option<u32>,
}

impl StructureBuilder {
    pub fn new(label: impl Into<String>) -> Self {
        StructureBuilder {
            label: label.into(),
            units: Vec::new(),
            next_chain_group: 0,
            open_group: None,
        }
    }

    /// Start a chain group; all units added until [`end_chain_group`]
    /// share one chain group id. Opening a group closes any open one.
    ///
    /// [`end_chain_group`]: StructureBuilder::end_chain_group
    pub fn begin_chain_group(&mut self) {
        self.open_group = Some(self.take_chain_group_id());
    }

    pub fn end_chain_group(&mut self) {
        self.open_group = None;
    }

    fn take_chain_group_id(&mut self) -> u32 {
        let id = self.next_chain_group;
        self.next_chain_group += 1;
        id
    }

    fn chain_group_for_next_unit(&mut self) -> u32 {
        match self.open_group {
            Some(group) => group,
            None => self.take_chain_group_id(),
        }
    }

    /// Add a unit built from model atoms
    pub fn add_unit(
        &mut self,
        model: Arc<Model>,
        mut elements: Vec<AtomIndex>,
        operator: Operator,
        invariant_id: u32,
    ) -> UnitId {
        elements.sort_unstable();
        elements.dedup();
        let id = UnitId::from(self.units.len());
        let chain_group_id = self.chain_group_for_next_unit();
        self.units.push(Unit::new(
            id,
            invariant_id,
            chain_group_id,
            model,
            elements.into(),
            operator,
        ));
        id
    }

    /// Add a copy of an existing unit under a fresh id
    pub fn add_unit_from(&mut self, unit: &Unit) -> UnitId {
        let id = UnitId::from(self.units.len());
        let chain_group_id = self.chain_group_for_next_unit();
        self.units.push(Unit::new(
            id,
            unit.invariant_id(),
            chain_group_id,
            unit.model().clone(),
            unit.elements().into(),
            unit.operator().clone(),
        ));
        id
    }

    pub fn unit_count(&self) -> usize {
        self.units.len()
    }

    pub fn build(self) -> Structure {
        Structure {
            label: self.label,
            units: self.units,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atom::AtomBuilder;
    use crate::linalg::translation_mat4;
    use crate::model::ModelBuilder;
    use lin_alg::f32::Vec3;

    fn two_chain_model() -> Arc<Model> {
        let mut builder = ModelBuilder::new("1ABC");
        for (asym, n) in [("A", 3), ("B", 2)] {
            for seq in 1..=n {
                builder = builder.add_atom(
                    AtomBuilder::new().name("CA").asym_id(asym).comp_id("ALA").seq_id(seq).build(),
                    Vec3::new(seq as f32, 0.0, 0.0),
                );
            }
        }
        Arc::new(builder.build().unwrap())
    }

    #[test]
    fn test_from_model() {
        let model = two_chain_model();
        let s = Structure::from_model(&model);
        assert_eq!(s.label(), "1ABC");
        assert_eq!(s.unit_count(), 2);
        assert_eq!(s.element_count(), 5);
        assert_eq!(s.label_asym_ids(), vec!["A", "B"]);
        assert_eq!(s.chain_groups().len(), 2);
        assert_eq!(s.units()[1].invariant_id(), 1);
    }

    #[test]
    fn test_chain_group_bracket() {
        let model = two_chain_model();
        let base = Structure::from_model(&model);
        let mut builder = StructureBuilder::new("merged");
        builder.begin_chain_group();
        builder.add_unit_from(&base.units()[0]);
        builder.add_unit_from(&base.units()[0]);
        builder.end_chain_group();
        builder.add_unit_from(&base.units()[1]);
        let s = builder.build();

        let groups = s.chain_groups();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].len(), 2);
        assert_eq!(groups[1][0].label_asym_id(), "B");
        assert_eq!(s.units()[2].id(), UnitId(2));
    }

    #[test]
    fn test_transformed_is_a_copy() {
        let model = two_chain_model();
        let s = Structure::from_model(&model);
        let moved = s.transformed(&translation_mat4(Vec3::new(0.0, 10.0, 0.0)));
        let p = moved.units()[0].position(0).unwrap();
        assert_eq!((p.x, p.y), (1.0, 10.0));
        let q = s.units()[0].position(0).unwrap();
        assert_eq!((q.x, q.y), (1.0, 0.0));
    }

    #[test]
    fn test_subset_drops_empty_units() {
        let model = two_chain_model();
        let s = Structure::from_model(&model);
        let sub = s.subset(vec![vec![AtomIndex(1)], vec![]]);
        assert_eq!(sub.unit_count(), 1);
        assert_eq!(sub.units()[0].elements(), &[AtomIndex(1)]);
        assert_eq!(sub.units()[0].id(), UnitId(0));
    }

    #[test]
    fn test_empty() {
        let s = Structure::empty("nothing");
        assert!(s.is_empty());
        assert!(s.chain_groups().is_empty());
    }
}
