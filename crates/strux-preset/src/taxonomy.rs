//! Selection-expression taxonomies
//!
//! The default taxonomy splits a structure into six molecule-category
//! buckets. Explicit selections (one [`Range`] or a list of [`Target`]s)
//! produce a single polymer bucket instead.

use serde::{Deserialize, Serialize};
use strux_color::Color;
use strux_mol::MoleculeCategory;
use strux_select::{range_to_expression, targets_to_expression, Expression, Range, Target};

use crate::error::{PresetError, PresetResult};
use crate::expression::SelectionExpression;
use crate::kind::RepresentationKind;

/// Tag used for explicit selections
pub const EXPLICIT_TAG: &str = "polymer";

/// The six category buckets, in display order:
/// Polymers, Ligands, Ions, Carbohydrates, Lipids, Waters
pub fn default_taxonomy(base_label: &str, water_hidden: bool) -> Vec<SelectionExpression> {
    MoleculeCategory::ALL
        .iter()
        .map(|&category| {
            SelectionExpression::new(
                category.tag(),
                RepresentationKind::for_category(category),
                format!("{} - {}", base_label, category.display_name()),
                Expression::Category(category),
            )
            .hidden(water_hidden && category == MoleculeCategory::Water)
        })
        .collect()
}

/// `{base}.{chain}:{beg}` or `{base}.{chain}:{beg}-{end}`; just
/// `{base}.{chain}` for a whole-chain range
pub fn format_range_label(base_label: &str, range: &Range) -> String {
    match &range.label_seq_range {
        Some(seq) if seq.end() != seq.beg => format!(
            "{}.{}:{}-{}",
            base_label,
            range.label_asym_id,
            seq.beg,
            seq.end()
        ),
        Some(seq) => format!("{}.{}:{}", base_label, range.label_asym_id, seq.beg),
        None => format!("{}.{}", base_label, range.label_asym_id),
    }
}

pub fn range_taxonomy(
    base_label: &str,
    range: &Range,
    color: Option<Color>,
) -> PresetResult<Vec<SelectionExpression>> {
    let expression = range_to_expression(range)?;
    Ok(vec![SelectionExpression::new(
        EXPLICIT_TAG,
        RepresentationKind::Cartoon,
        format_range_label(base_label, range),
        expression,
    )
    .with_color(color)])
}

/// One merged bucket for all targets, labeled with the base label
pub fn targets_taxonomy(
    base_label: &str,
    targets: &[Target],
    color: Option<Color>,
) -> Vec<SelectionExpression> {
    vec![SelectionExpression::new(
        EXPLICIT_TAG,
        RepresentationKind::Cartoon,
        base_label,
        targets_to_expression(targets),
    )
    .with_color(color)]
}

/// An explicit selection document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SelectionSpec {
    Range(Range),
    Targets(Vec<Target>),
}

impl SelectionSpec {
    /// Parse a Range object or a Target array
    pub fn from_json(json: &str) -> PresetResult<Self> {
        serde_json::from_str(json).map_err(|e| PresetError::MalformedSelection(e.to_string()))
    }

    pub fn from_value(value: serde_json::Value) -> PresetResult<Self> {
        serde_json::from_value(value).map_err(|e| PresetError::MalformedSelection(e.to_string()))
    }

    pub fn taxonomy(
        &self,
        base_label: &str,
        color: Option<Color>,
    ) -> PresetResult<Vec<SelectionExpression>> {
        match self {
            SelectionSpec::Range(range) => range_taxonomy(base_label, range, color),
            SelectionSpec::Targets(targets) => Ok(targets_taxonomy(base_label, targets, color)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_taxonomy() {
        let buckets = default_taxonomy("1ABC", false);
        let labels: Vec<&str> = buckets.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(
            labels,
            [
                "1ABC - Polymers",
                "1ABC - Ligands",
                "1ABC - Ions",
                "1ABC - Carbohydrates",
                "1ABC - Lipids",
                "1ABC - Waters"
            ]
        );
        let kinds: Vec<RepresentationKind> = buckets.iter().map(|b| b.kind).collect();
        assert_eq!(
            kinds,
            [
                RepresentationKind::Cartoon,
                RepresentationKind::BallAndStick,
                RepresentationKind::BallAndStick,
                RepresentationKind::Carbohydrate,
                RepresentationKind::BallAndStick,
                RepresentationKind::BallAndStick,
            ]
        );
        assert_eq!(buckets[3].tag, "branched");
        assert!(buckets.iter().all(|b| !b.is_hidden && b.color.is_none()));

        let buckets = default_taxonomy("1ABC", true);
        assert!(buckets[5].is_hidden);
        assert!(!buckets[0].is_hidden);
    }

    #[test]
    fn test_range_labels() {
        assert_eq!(format_range_label("1ABC", &Range::new("A", 5, 9)), "1ABC.A:5-9");
        assert_eq!(format_range_label("1ABC", &Range::new("A", 5, 5)), "1ABC.A:5");
        assert_eq!(format_range_label("1ABC", &Range::chain("B")), "1ABC.B");
    }

    #[test]
    fn test_explicit_range_bucket() {
        let buckets = range_taxonomy("1ABC", &Range::new("A", 5, 9), Some(Color::RED)).unwrap();
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].tag, "polymer");
        assert_eq!(buckets[0].kind, RepresentationKind::Cartoon);
        assert_eq!(buckets[0].color, Some(Color::RED));

        assert!(range_taxonomy("1ABC", &Range::new("A", 9, 5), None).is_err());
    }

    #[test]
    fn test_selection_spec_json() {
        let spec = SelectionSpec::from_json(
            r#"{"labelAsymId":"A","labelSeqRange":{"beg":5,"end":9}}"#,
        )
        .unwrap();
        assert_eq!(spec, SelectionSpec::Range(Range::new("A", 5, 9)));

        let spec = SelectionSpec::from_json(r#"[{"labelAsymId":"A","authSeqId":5},{"labelCompId":"HEM"}]"#)
            .unwrap();
        let buckets = spec.taxonomy("1ABC", None).unwrap();
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].label, "1ABC");
        assert!(matches!(buckets[0].expression, Expression::Merge(_)));
    }

    #[test]
    fn test_malformed_selection() {
        for json in [r#"{}"#, r#""A""#, r#"42"#, r#"{"chain":"A"}"#, r#"[{"foo":1}]"#] {
            assert!(
                matches!(
                    SelectionSpec::from_json(json),
                    Err(PresetError::MalformedSelection(_))
                ),
                "{} should be rejected",
                json
            );
        }
    }
}
