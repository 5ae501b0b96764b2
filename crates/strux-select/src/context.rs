//! Query context
//!
//! Holds the structure a selection is evaluated against and exposes each
//! element together with the unit it lives in.

use strux_mol::{Atom, AtomIndex, MoleculeCategory, Structure, Unit};

/// Context for evaluating selection expressions against one structure
pub struct QueryContext<'a> {
    structure: &'a Structure,
}

impl<'a> QueryContext<'a> {
    pub fn new(structure: &'a Structure) -> Self {
        QueryContext { structure }
    }

    #[inline]
    pub fn structure(&self) -> &'a Structure {
        self.structure
    }

    #[inline]
    pub fn units(&self) -> &'a [Unit] {
        self.structure.units()
    }

    #[inline]
    pub fn unit_count(&self) -> usize {
        self.structure.unit_count()
    }

    /// Total number of elements over all units
    #[inline]
    pub fn element_count(&self) -> usize {
        self.structure.element_count()
    }
}

/// One element seen through its unit
#[derive(Clone, Copy)]
pub struct ElementRef<'a> {
    pub unit: &'a Unit,
    pub index: AtomIndex,
    pub atom: &'a Atom,
}

impl ElementRef<'_> {
    pub fn category(&self) -> Option<MoleculeCategory> {
        self.unit.model().category(self.index)
    }
}
