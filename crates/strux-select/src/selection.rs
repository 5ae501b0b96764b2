//! Evaluated selections over a structure

use strux_mol::{AtomIndex, Structure};

use crate::loci::{Loci, LociElement};
use crate::result::SelectionResult;

/// One selection mask per unit of the structure it was evaluated on
#[derive(Debug, Clone)]
pub struct StructureSelection<'a> {
    structure: &'a Structure,
    masks: Vec<SelectionResult>,
}

impl<'a> StructureSelection<'a> {
    pub(crate) fn new(structure: &'a Structure, masks: Vec<SelectionResult>) -> Self {
        debug_assert_eq!(structure.unit_count(), masks.len());
        StructureSelection { structure, masks }
    }

    #[inline]
    pub fn structure(&self) -> &'a Structure {
        self.structure
    }

    /// Masks in unit order
    #[inline]
    pub fn masks(&self) -> &[SelectionResult] {
        &self.masks
    }

    pub fn element_count(&self) -> usize {
        self.masks.iter().map(SelectionResult::count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.masks.iter().all(SelectionResult::is_empty)
    }

    /// Selected model atom indices of each unit
    fn selected_elements(&self) -> impl Iterator<Item = Vec<AtomIndex>> + '_ {
        self.structure
            .units()
            .iter()
            .zip(&self.masks)
            .map(|(unit, mask)| {
                mask.raw_indices()
                    .filter_map(|i| unit.elements().get(i).copied())
                    .collect::<Vec<AtomIndex>>()
            })
    }

    /// Loci at source-unit granularity; units with nothing selected are
    /// omitted
    pub fn to_loci(&self) -> Loci {
        let elements = self
            .structure
            .units()
            .iter()
            .zip(self.selected_elements())
            .filter(|(_, indices)| !indices.is_empty())
            .map(|(unit, indices)| LociElement::new(unit, indices))
            .collect();
        Loci::new(self.structure.label(), elements)
    }

    /// The sub-structure of selected elements
    pub fn to_structure(&self) -> Structure {
        self.structure.subset(self.selected_elements().collect())
    }
}
