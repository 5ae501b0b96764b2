//! Per-residue color lookup
//!
//! A [`ResidueColorMap`] maps `label_asym_id -> label_seq_id -> Color`. It is
//! produced once by [`ResidueColorMapBuilder`] and read-only afterwards.

use std::ops::RangeInclusive;

use ahash::AHashMap;

use crate::Color;

/// Immutable `chain -> residue -> color` table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResidueColorMap {
    chains: AHashMap<String, AHashMap<i32, Color>>,
}

impl ResidueColorMap {
    pub fn builder() -> ResidueColorMapBuilder {
        ResidueColorMapBuilder::default()
    }

    pub fn get(&self, label_asym_id: &str, label_seq_id: i32) -> Option<Color> {
        self.chains
            .get(label_asym_id)
            .and_then(|residues| residues.get(&label_seq_id))
            .copied()
    }

    /// All residue colors of one chain
    pub fn chain(&self, label_asym_id: &str) -> Option<&AHashMap<i32, Color>> {
        self.chains.get(label_asym_id)
    }

    /// Chain ids, sorted
    pub fn chain_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.chains.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Total number of colored residues
    pub fn len(&self) -> usize {
        self.chains.values().map(|m| m.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Builder for [`ResidueColorMap`]; later writes win
#[derive(Debug, Default)]
pub struct ResidueColorMapBuilder {
    chains: AHashMap<String, AHashMap<i32, Color>>,
}

impl ResidueColorMapBuilder {
    pub fn set(&mut self, label_asym_id: &str, label_seq_id: i32, color: Color) -> &mut Self {
        self.chains
            .entry(label_asym_id.to_string())
            .or_default()
            .insert(label_seq_id, color);
        self
    }

    pub fn set_range(
        &mut self,
        label_asym_id: &str,
        residues: RangeInclusive<i32>,
        color: Color,
    ) -> &mut Self {
        let chain = self.chains.entry(label_asym_id.to_string()).or_default();
        for seq_id in residues {
            chain.insert(seq_id, color);
        }
        self
    }

    pub fn build(self) -> ResidueColorMap {
        ResidueColorMap {
            chains: self.chains,
        }
    }
}
