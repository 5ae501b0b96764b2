//! Preset parameters and their output

use serde::{Deserialize, Serialize};
use strux_assembly::{FlexibleSelection, TargetColor};
use strux_color::{Color, ResidueColorMap};
use strux_mol::Structure;
use strux_select::Target;

use crate::expression::SelectionExpression;
use crate::taxonomy::SelectionSpec;
use crate::validation::ScoreThresholds;

/// How a preset is applied to a model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum PresetParams {
    /// Assembly (or model) with the default taxonomy, or one explicit bucket
    #[serde(rename_all = "camelCase")]
    Standard {
        #[serde(default)]
        assembly_id: Option<String>,
        #[serde(default)]
        selection: Option<SelectionSpec>,
        #[serde(default)]
        color: Option<Color>,
    },
    /// Default taxonomy colored by per-residue scores
    #[serde(rename_all = "camelCase")]
    Validation {
        #[serde(default)]
        assembly_id: Option<String>,
        /// Falls back to the `score_*_cutoff` settings
        #[serde(default)]
        thresholds: Option<ScoreThresholds>,
    },
    /// Independently transformed chain pieces merged into one structure
    #[serde(rename_all = "camelCase")]
    Alignment {
        #[serde(default)]
        assembly_id: Option<String>,
        selections: Vec<FlexibleSelection>,
        #[serde(default)]
        colors: Vec<TargetColor>,
    },
    /// The assembly containing `targets`, with one bucket for them
    Motif {
        targets: Vec<Target>,
        #[serde(default)]
        color: Option<Color>,
    },
    /// Model-level structure, no buckets
    Empty,
}

impl PresetParams {
    pub fn name(&self) -> &'static str {
        match self {
            PresetParams::Standard { .. } => "standard",
            PresetParams::Validation { .. } => "validation",
            PresetParams::Alignment { .. } => "alignment",
            PresetParams::Motif { .. } => "motif",
            PresetParams::Empty => "empty",
        }
    }
}

impl Default for PresetParams {
    fn default() -> Self {
        PresetParams::Standard {
            assembly_id: None,
            selection: None,
            color: None,
        }
    }
}

/// Which coloring the buckets of a preset should use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorTheme {
    /// Viewer default (by chain)
    Default,
    /// The returned residue color map, falling back to [`PresetOutput::base_color`]
    ResidueLookup,
    /// The returned residue color map holds confidence colors
    Confidence,
}

/// Everything a preset produced
#[derive(Debug, Clone)]
pub struct PresetOutput {
    pub structure: Structure,
    pub expressions: Vec<SelectionExpression>,
    pub colors: Option<ResidueColorMap>,
    pub color_theme: ColorTheme,
    /// Color for residues the map leaves out
    pub base_color: Option<Color>,
}

impl PresetOutput {
    pub(crate) fn new(structure: Structure, expressions: Vec<SelectionExpression>) -> Self {
        PresetOutput {
            structure,
            expressions,
            colors: None,
            color_theme: ColorTheme::Default,
            base_color: None,
        }
    }

    pub(crate) fn with_colors(mut self, colors: ResidueColorMap, theme: ColorTheme) -> Self {
        self.colors = Some(colors);
        self.color_theme = theme;
        self
    }

    pub(crate) fn with_base_color(mut self, color: Color) -> Self {
        self.base_color = Some(color);
        self
    }

    /// Color of one residue under this output's color map, or the base color
    /// when the map has no entry for it
    pub fn residue_color(&self, label_asym_id: &str, label_seq_id: i32) -> Option<Color> {
        self.colors
            .as_ref()
            .and_then(|map| map.get(label_asym_id, label_seq_id))
            .or(self.base_color)
    }
}
