//! STRUX presets
//!
//! A preset turns a model into a [`Structure`](strux_mol::Structure) plus a
//! list of [`SelectionExpression`] buckets, each naming a representation
//! kind and optionally a color. Presets run against an explicit
//! [`ViewerContext`].
//!
//! # Example
//!
//! ```rust,ignore
//! use strux_preset::{PresetParams, ViewerContext};
//!
//! let ctx = ViewerContext::new();
//! let out = ctx.apply_preset(&model, &PresetParams::default())?;
//! for bucket in &out.expressions {
//!     println!("{} ({})", bucket.label, bucket.kind);
//! }
//! ```

mod context;
mod error;
mod expression;
mod kind;
mod preset;
mod taxonomy;
mod validation;

pub use context::ViewerContext;
pub use error::{PresetError, PresetResult};
pub use expression::SelectionExpression;
pub use kind::RepresentationKind;
pub use preset::{ColorTheme, PresetOutput, PresetParams};
pub use taxonomy::{
    default_taxonomy, format_range_label, range_taxonomy, targets_taxonomy, SelectionSpec,
    EXPLICIT_TAG,
};
pub use validation::{
    score_colors, ConfidenceLevel, ResidueScore, ResidueScores, ScoreTable, ScoreThresholds,
};
