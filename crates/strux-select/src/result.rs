//! Per-unit selection masks
//!
//! A [`SelectionResult`] marks which elements of one unit are selected. Bit
//! `i` corresponds to the unit-local element `i`.

use bitvec::prelude::*;

/// Bitset over the elements of one unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionResult {
    bits: BitVec<u64, Lsb0>,
}

impl SelectionResult {
    /// Nothing selected
    pub fn new(len: usize) -> Self {
        SelectionResult {
            bits: bitvec![u64, Lsb0; 0; len],
        }
    }

    /// Everything selected
    pub fn all(len: usize) -> Self {
        SelectionResult {
            bits: bitvec![u64, Lsb0; 1; len],
        }
    }

    pub fn from_indices(len: usize, indices: impl IntoIterator<Item = usize>) -> Self {
        let mut result = Self::new(len);
        for idx in indices {
            result.set_index(idx);
        }
        result
    }

    /// Number of elements covered (selected or not)
    #[inline]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    #[inline]
    pub fn contains_index(&self, idx: usize) -> bool {
        self.bits.get(idx).map(|b| *b).unwrap_or(false)
    }

    #[inline]
    pub fn set_index(&mut self, idx: usize) {
        if let Some(mut bit) = self.bits.get_mut(idx) {
            *bit = true;
        }
    }

    /// Number of selected elements
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    #[inline]
    pub fn any(&self) -> bool {
        self.bits.any()
    }

    /// True if nothing is selected
    #[inline]
    pub fn is_empty(&self) -> bool {
        !self.any()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.bits.all()
    }

    /// Unit-local indices of selected elements
    pub fn raw_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter_ones()
    }

    pub fn union(&self, other: &SelectionResult) -> SelectionResult {
        let mut result = self.clone();
        result.union_with(other);
        result
    }

    pub fn union_with(&mut self, other: &SelectionResult) {
        debug_assert_eq!(self.len(), other.len());
        self.bits |= &other.bits;
    }

    pub fn intersection(&self, other: &SelectionResult) -> SelectionResult {
        let mut result = self.clone();
        result.intersect_with(other);
        result
    }

    pub fn intersect_with(&mut self, other: &SelectionResult) {
        debug_assert_eq!(self.len(), other.len());
        self.bits &= &other.bits;
    }

    pub fn complement(&self) -> SelectionResult {
        SelectionResult {
            bits: !self.bits.clone(),
        }
    }
}
