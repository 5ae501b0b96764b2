//! Per-residue score coloring
//!
//! Scores (pLDDT-style confidence or validation metrics) come from an
//! external [`ResidueScores`] provider. They are binned by numeric
//! thresholds into four confidence levels, each with a named color.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use strux_color::{Color, NamedColors, ResidueColorMap};
use strux_mol::Structure;
use strux_settings::{id, Settings};

use crate::error::PresetResult;

/// A score and the provider's own category label for it
#[derive(Debug, Clone, PartialEq)]
pub struct ResidueScore {
    pub score: f32,
    pub category: Option<String>,
}

/// Source of per-residue scores
pub trait ResidueScores {
    fn score(&self, label_asym_id: &str, label_seq_id: i32) -> Option<ResidueScore>;
}

/// In-memory [`ResidueScores`]
#[derive(Debug, Clone, Default)]
pub struct ScoreTable {
    scores: AHashMap<(String, i32), ResidueScore>,
}

impl ScoreTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, label_asym_id: &str, label_seq_id: i32, score: f32, category: Option<&str>) {
        self.scores.insert(
            (label_asym_id.to_string(), label_seq_id),
            ResidueScore {
                score,
                category: category.map(str::to_string),
            },
        );
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

impl ResidueScores for ScoreTable {
    fn score(&self, label_asym_id: &str, label_seq_id: i32) -> Option<ResidueScore> {
        self.scores
            .get(&(label_asym_id.to_string(), label_seq_id))
            .cloned()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfidenceLevel {
    VeryHigh,
    High,
    Low,
    VeryLow,
}

impl ConfidenceLevel {
    pub const ALL: [ConfidenceLevel; 4] = [
        ConfidenceLevel::VeryHigh,
        ConfidenceLevel::High,
        ConfidenceLevel::Low,
        ConfidenceLevel::VeryLow,
    ];

    /// Name of the palette color for this level
    pub fn color_name(&self) -> &'static str {
        match self {
            ConfidenceLevel::VeryHigh => "confidence_very_high",
            ConfidenceLevel::High => "confidence_high",
            ConfidenceLevel::Low => "confidence_low",
            ConfidenceLevel::VeryLow => "confidence_very_low",
        }
    }
}

/// Lower bounds (inclusive) of the three upper confidence levels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreThresholds {
    pub very_high: f32,
    pub high: f32,
    pub low: f32,
}

impl Default for ScoreThresholds {
    fn default() -> Self {
        ScoreThresholds {
            very_high: 90.0,
            high: 70.0,
            low: 50.0,
        }
    }
}

impl ScoreThresholds {
    pub fn from_settings(settings: &Settings) -> Self {
        ScoreThresholds {
            very_high: settings.get_float(id::score_very_high_cutoff),
            high: settings.get_float(id::score_high_cutoff),
            low: settings.get_float(id::score_low_cutoff),
        }
    }

    pub fn classify(&self, score: f32) -> ConfidenceLevel {
        if score >= self.very_high {
            ConfidenceLevel::VeryHigh
        } else if score >= self.high {
            ConfidenceLevel::High
        } else if score >= self.low {
            ConfidenceLevel::Low
        } else {
            ConfidenceLevel::VeryLow
        }
    }
}

/// Color every scored residue of `structure` by its confidence level
pub fn score_colors(
    structure: &Structure,
    scores: &dyn ResidueScores,
    thresholds: &ScoreThresholds,
    palette: &NamedColors,
) -> PresetResult<ResidueColorMap> {
    let mut level_colors: Vec<(ConfidenceLevel, Color)> = Vec::with_capacity(4);
    for level in ConfidenceLevel::ALL {
        level_colors.push((level, palette.parse(level.color_name())?));
    }
    let color_of = |level: ConfidenceLevel| {
        level_colors
            .iter()
            .find(|(l, _)| *l == level)
            .map(|(_, c)| *c)
    };

    let mut builder = ResidueColorMap::builder();
    let mut missing = 0usize;
    for unit in structure.units() {
        let mut last = None;
        for (_, atom) in unit.atoms() {
            let Some(seq_id) = atom.label_seq_id else {
                continue;
            };
            if last == Some(seq_id) {
                continue;
            }
            last = Some(seq_id);
            match scores.score(&atom.label_asym_id, seq_id) {
                Some(s) => {
                    if let Some(color) = color_of(thresholds.classify(s.score)) {
                        builder.set(&atom.label_asym_id, seq_id, color);
                    }
                }
                None => missing += 1,
            }
        }
    }
    if missing > 0 {
        log::debug!("{} residues without a score", missing);
    }
    Ok(builder.build())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_boundaries() {
        let t = ScoreThresholds::default();
        assert_eq!(t.classify(95.0), ConfidenceLevel::VeryHigh);
        assert_eq!(t.classify(90.0), ConfidenceLevel::VeryHigh);
        assert_eq!(t.classify(89.9), ConfidenceLevel::High);
        assert_eq!(t.classify(50.0), ConfidenceLevel::Low);
        assert_eq!(t.classify(10.0), ConfidenceLevel::VeryLow);
    }

    #[test]
    fn test_thresholds_from_settings() {
        let mut settings = Settings::new();
        settings.set_float(id::score_high_cutoff, 60.0).unwrap();
        let t = ScoreThresholds::from_settings(&settings);
        assert_eq!(t, ScoreThresholds { very_high: 90.0, high: 60.0, low: 50.0 });
    }

    #[test]
    fn test_score_table() {
        let mut table = ScoreTable::new();
        table.insert("A", 1, 88.0, Some("confident"));
        assert_eq!(table.len(), 1);
        let s = table.score("A", 1).unwrap();
        assert_eq!(s.category.as_deref(), Some("confident"));
        assert!(table.score("A", 2).is_none());
    }
}
