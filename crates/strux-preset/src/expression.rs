//! Selection buckets produced by presets

use strux_color::Color;
use strux_select::Expression;

use crate::kind::RepresentationKind;

/// A named, typed, colorable selection
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionExpression {
    /// Short category tag (`polymer`, `ligand`, ...)
    pub tag: String,
    pub kind: RepresentationKind,
    pub label: String,
    pub expression: Expression,
    pub is_hidden: bool,
    /// Override color; the active color theme applies when absent
    pub color: Option<Color>,
}

impl SelectionExpression {
    pub fn new(
        tag: impl Into<String>,
        kind: RepresentationKind,
        label: impl Into<String>,
        expression: Expression,
    ) -> Self {
        SelectionExpression {
            tag: tag.into(),
            kind,
            label: label.into(),
            expression,
            is_hidden: false,
            color: None,
        }
    }

    pub fn hidden(mut self, is_hidden: bool) -> Self {
        self.is_hidden = is_hidden;
        self
    }

    pub fn with_color(mut self, color: Option<Color>) -> Self {
        self.color = color;
        self
    }
}
