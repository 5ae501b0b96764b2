//! STRUX selections
//!
//! Addresses substructures by biological identifiers rather than coordinates.
//!
//! - [`Target`] and [`Range`] describe residues and chains declaratively
//! - [`target_to_expression`] and friends compile them into [`Expression`]s
//! - [`resolve`] evaluates an expression over a [`Structure`] into [`Loci`]
//!
//! # Example
//!
//! ```rust,ignore
//! use strux_select::{resolve_target, Target};
//!
//! let structure: Structure = /* build a structure */;
//! let loci = resolve_target(&structure, &Target::chain("A").with_auth_seq_id(42));
//! ```
//!
//! An empty [`Target`] selects everything; any target resolved against an
//! empty structure yields empty loci.

mod compile;
mod context;
mod error;
mod eval;
mod expr;
mod loci;
mod resolve;
mod result;
mod selection;
mod target;

pub use compile::{
    range_to_expression, residues_to_expression, target_to_expression, targets_to_expression,
};
pub use context::{ElementRef, QueryContext};
pub use error::{SelectError, SelectResult};
pub use eval::{evaluate, test_predicate};
pub use expr::{Expression, Predicate, Property, Value};
pub use loci::{Loci, LociElement};
pub use resolve::{
    resolve, resolve_range, resolve_target, resolve_targets, resolve_with_fallback,
    select_structure,
};
pub use result::SelectionResult;
pub use selection::StructureSelection;
pub use target::{Range, SeqRange, Target, MAX_SEQ_RANGE_LEN};

pub use strux_mol::Structure;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::expr::{Expression, Predicate, Property};
    pub use crate::loci::Loci;
    pub use crate::resolve::{resolve, resolve_target, resolve_targets};
    pub use crate::target::{Range, SeqRange, Target};
}
