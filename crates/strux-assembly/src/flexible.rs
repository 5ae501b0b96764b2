//! Flexible structure assembly
//!
//! Builds a new structure from chain (or residue range) selections of a base
//! structure, each optionally placed by its own transform. Selections of the
//! same chain are gathered into one chain group so a chain split into rigid
//! pieces still reads as a single chain.

use serde::{Deserialize, Serialize};
use strux_color::{Color, ResidueColorMap, ResidueColorMapBuilder};
use strux_mol::linalg::{is_rigid_mat4, mat4_from_column_major};
use strux_mol::{Structure, StructureBuilder};
use strux_select::{range_to_expression, select_structure, Range, SeqRange};

use crate::error::AssemblyResult;

/// One piece of the assembled structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FlexibleSelection {
    pub label_asym_id: String,
    /// Residues to keep; the whole chain when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_seq_range: Option<SeqRange>,
    /// Rigid transform as 16 column-major values
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matrix: Option<[f32; 16]>,
}

impl FlexibleSelection {
    pub fn chain(label_asym_id: impl Into<String>) -> Self {
        FlexibleSelection {
            label_asym_id: label_asym_id.into(),
            label_seq_range: None,
            matrix: None,
        }
    }

    pub fn with_range(mut self, beg: i32, end: i32) -> Self {
        self.label_seq_range = Some(SeqRange::new(beg, end));
        self
    }

    pub fn with_matrix(mut self, column_major: [f32; 16]) -> Self {
        self.matrix = Some(column_major);
        self
    }

    fn as_range(&self) -> Range {
        Range {
            label_asym_id: self.label_asym_id.clone(),
            label_seq_range: self.label_seq_range,
        }
    }
}

/// Color override for a chain or residue range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TargetColor {
    pub label_asym_id: String,
    pub color: Color,
    /// Residues to color; every residue of the chain when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_seq_range: Option<SeqRange>,
}

impl TargetColor {
    pub fn new(label_asym_id: impl Into<String>, color: Color) -> Self {
        TargetColor {
            label_asym_id: label_asym_id.into(),
            color,
            label_seq_range: None,
        }
    }

    pub fn with_range(mut self, beg: i32, end: i32) -> Self {
        self.label_seq_range = Some(SeqRange::new(beg, end));
        self
    }
}

/// Output of [`assemble`]
#[derive(Debug, Clone)]
pub struct FlexibleAssembly {
    pub structure: Structure,
    /// `label_asym_id -> label_seq_id -> color`, later overrides winning
    pub colors: ResidueColorMap,
    /// Indices of selections that matched nothing and were dropped
    pub skipped: Vec<usize>,
}

/// Assemble `base` pieces into a new structure.
///
/// Selections are grouped by `label_asym_id` in first-seen order. Each
/// selection's transform is applied to its piece exactly once; pieces that
/// select no atoms are dropped. A group with more than one piece becomes a
/// single chain group. The result keeps the base structure's label.
pub fn assemble(
    base: &Structure,
    selections: &[FlexibleSelection],
    colors: &[TargetColor],
) -> AssemblyResult<FlexibleAssembly> {
    let mut groups: Vec<(&str, Vec<Structure>)> = Vec::new();
    let mut skipped = Vec::new();

    for (i, selection) in selections.iter().enumerate() {
        let expr = range_to_expression(&selection.as_range())?;
        let piece = select_structure(base, &expr);
        if piece.is_empty() {
            log::warn!(
                "Selection {} ({}) matched nothing and was skipped",
                i,
                expr
            );
            skipped.push(i);
            continue;
        }

        let piece = match &selection.matrix {
            Some(values) => {
                let matrix = mat4_from_column_major(values);
                if !is_rigid_mat4(&matrix) {
                    log::warn!(
                        "Selection {} transform is not a rigid motion; applying as given",
                        i
                    );
                }
                piece.transformed(&matrix)
            }
            None => piece,
        };

        match groups
            .iter()
            .position(|(asym, _)| *asym == selection.label_asym_id)
        {
            Some(g) => groups[g].1.push(piece),
            None => groups.push((selection.label_asym_id.as_str(), vec![piece])),
        }
    }

    let mut builder = StructureBuilder::new(base.label());
    for (_, pieces) in &groups {
        let grouped = pieces.len() > 1;
        if grouped {
            builder.begin_chain_group();
        }
        for unit in pieces.iter().flat_map(Structure::units) {
            builder.add_unit_from(unit);
        }
        if grouped {
            builder.end_chain_group();
        }
    }

    let colors = build_color_map(base, colors)?;
    let structure = builder.build();
    log::debug!(
        "Assembled {} units from {} selections ({} skipped), {} colored residues",
        structure.unit_count(),
        selections.len(),
        skipped.len(),
        colors.len()
    );

    Ok(FlexibleAssembly {
        structure,
        colors,
        skipped,
    })
}

fn build_color_map(base: &Structure, colors: &[TargetColor]) -> AssemblyResult<ResidueColorMap> {
    let mut builder = ResidueColorMap::builder();
    for entry in colors {
        match &entry.label_seq_range {
            Some(range) => {
                range.validate()?;
                builder.set_range(&entry.label_asym_id, range.residues(), entry.color);
            }
            None => color_whole_chain(&mut builder, base, entry),
        }
    }
    Ok(builder.build())
}

fn color_whole_chain(builder: &mut ResidueColorMapBuilder, base: &Structure, entry: &TargetColor) {
    let Some(unit) = base
        .units()
        .iter()
        .find(|u| u.label_asym_id() == entry.label_asym_id)
    else {
        log::debug!("Color target chain {} not in structure", entry.label_asym_id);
        return;
    };
    let Some(residues) = unit.model().residues(&entry.label_asym_id) else {
        return;
    };
    for residue in residues {
        if let Some(seq_id) = residue.label_seq_id {
            builder.set(&entry.label_asym_id, seq_id, entry.color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_json() {
        let sel: FlexibleSelection = serde_json::from_str(
            r#"{"labelAsymId":"A","labelSeqRange":{"beg":1,"end":10}}"#,
        )
        .unwrap();
        assert_eq!(sel, FlexibleSelection::chain("A").with_range(1, 10));
        assert!(serde_json::from_str::<FlexibleSelection>(r#"{"asym":"A"}"#).is_err());
    }
}
