//! Resolution entry points: targets, ranges and expressions to loci
//! and sub-structures.

use strux_mol::Structure;

use crate::compile::{range_to_expression, target_to_expression, targets_to_expression};
use crate::context::QueryContext;
use crate::error::SelectResult;
use crate::eval::evaluate;
use crate::expr::Expression;
use crate::loci::Loci;
use crate::target::{Range, Target};

/// Resolve an expression to loci
pub fn resolve(structure: &Structure, expr: &Expression) -> Loci {
    if structure.is_empty() {
        return Loci::empty(structure.label());
    }
    let ctx = QueryContext::new(structure);
    let loci = evaluate(expr, &ctx).to_loci();
    log::debug!(
        "Resolved '{}' on '{}': {} elements in {} units",
        expr,
        structure.label(),
        loci.element_count(),
        loci.elements().len()
    );
    loci
}

/// Resolve a single target
pub fn resolve_target(structure: &Structure, target: &Target) -> Loci {
    resolve(structure, &target_to_expression(target))
}

/// Resolve the union of several targets
pub fn resolve_targets(structure: &Structure, targets: &[Target]) -> Loci {
    resolve(structure, &targets_to_expression(targets))
}

pub fn resolve_range(structure: &Structure, range: &Range) -> SelectResult<Loci> {
    Ok(resolve(structure, &range_to_expression(range)?))
}

/// Resolve against the assembly-scoped structure first and fall back to
/// the model-level structure when that finds nothing
pub fn resolve_with_fallback(target: &Target, scoped: &Structure, unscoped: &Structure) -> Loci {
    let loci = resolve_target(scoped, target);
    if !loci.is_empty() {
        return loci;
    }
    log::debug!(
        "Target not found in '{}', retrying on '{}'",
        scoped.label(),
        unscoped.label()
    );
    resolve_target(unscoped, target)
}

/// The sub-structure an expression selects
pub fn select_structure(structure: &Structure, expr: &Expression) -> Structure {
    let ctx = QueryContext::new(structure);
    evaluate(expr, &ctx).to_structure()
}
