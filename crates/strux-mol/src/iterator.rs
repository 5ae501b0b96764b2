//! Iterators over residues of a contiguous atom range
//!
//! Atoms are stored sorted by chain and residue, so residues are runs of
//! consecutive atoms. [`ResidueIterator`] walks those runs.

use std::ops::Range;

use crate::atom::Atom;

/// Groups consecutive atoms that satisfy `same_group`.
pub(crate) struct GroupingIterator<'a, F> {
    atoms: &'a [Atom],
    base_index: usize,
    current: usize,
    same_group: F,
}

impl<'a, F> GroupingIterator<'a, F>
where
    F: Fn(&Atom, &Atom) -> bool,
{
    pub(crate) fn new(atoms: &'a [Atom], base_index: usize, same_group: F) -> Self {
        GroupingIterator {
            atoms,
            base_index,
            current: 0,
            same_group,
        }
    }

    /// Advance to the next group, returning its absolute range and first atom
    pub(crate) fn next_group(&mut self) -> Option<(Range<usize>, &'a Atom)> {
        let first = self.atoms.get(self.current)?;
        let start = self.current;
        let mut end = start + 1;
        while end < self.atoms.len() && (self.same_group)(&self.atoms[end], first) {
            end += 1;
        }
        self.current = end;
        Some((self.base_index + start..self.base_index + end, first))
    }
}

/// A run of atoms forming one residue
#[derive(Debug, Clone)]
pub struct ResidueView<'a> {
    pub label_comp_id: &'a str,
    pub label_seq_id: Option<i32>,
    pub auth_seq_id: i32,
    /// Range of atom indices in the parent model
    pub atom_range: Range<usize>,
}

impl ResidueView<'_> {
    #[inline]
    pub fn len(&self) -> usize {
        self.atom_range.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.atom_range.is_empty()
    }
}

/// Iterator over residues in a slice of atoms
pub struct ResidueIterator<'a> {
    inner: GroupingIterator<'a, fn(&Atom, &Atom) -> bool>,
}

impl<'a> ResidueIterator<'a> {
    /// `base_index` is the model index of `atoms[0]`
    pub fn new(atoms: &'a [Atom], base_index: usize) -> Self {
        ResidueIterator {
            inner: GroupingIterator::new(atoms, base_index, Atom::same_residue),
        }
    }
}

impl<'a> Iterator for ResidueIterator<'a> {
    type Item = ResidueView<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (atom_range, first) = self.inner.next_group()?;
        Some(ResidueView {
            label_comp_id: &first.label_comp_id,
            label_seq_id: first.label_seq_id,
            auth_seq_id: first.auth_seq_id,
            atom_range,
        })
    }
}

/// Split atoms into chain runs (absolute ranges)
pub(crate) fn chain_runs(atoms: &[Atom]) -> Vec<(Range<usize>, &Atom)> {
    let mut iter = GroupingIterator::new(atoms, 0, Atom::same_chain);
    let mut runs = Vec::new();
    while let Some(run) = iter.next_group() {
        runs.push(run);
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atom::AtomBuilder;

    fn atom(asym: &str, comp: &str, seq: i32) -> Atom {
        AtomBuilder::new().asym_id(asym).comp_id(comp).seq_id(seq).build()
    }

    #[test]
    fn test_residue_iterator() {
        let atoms = vec![
            atom("A", "ALA", 1),
            atom("A", "ALA", 1),
            atom("A", "GLY", 2),
            atom("B", "GLY", 2),
        ];
        let residues: Vec<_> = ResidueIterator::new(&atoms, 10).collect();
        assert_eq!(residues.len(), 3);
        assert_eq!(residues[0].atom_range, 10..12);
        assert_eq!(residues[1].label_comp_id, "GLY");
        assert_eq!(residues[2].atom_range, 13..14);
    }

    #[test]
    fn test_chain_runs() {
        let atoms = vec![atom("A", "ALA", 1), atom("A", "GLY", 2), atom("B", "HOH", 1)];
        let runs = chain_runs(&atoms);
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].0, 0..2);
        assert_eq!(runs[1].1.label_asym_id, "B");
    }
}
