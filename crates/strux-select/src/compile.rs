//! Target and range compilation
//!
//! Turns declarative [`Target`]s and [`Range`]s into [`Expression`]s. The
//! compiled form always has at most two clauses, a chain test and a residue
//! test, which are ANDed.

use crate::error::SelectResult;
use crate::expr::{Expression, Predicate, Property};
use crate::target::{Range, Target};

/// Compile a single target.
///
/// An empty target compiles to [`Expression::All`]. With `extend_to_chain`
/// the residue test is dropped when the chain is named, and otherwise widened
/// to the chains holding a matching residue.
pub fn target_to_expression(target: &Target) -> Expression {
    let residue_test = residue_test(target);
    let chain_test = chain_test(target);

    match (chain_test, residue_test) {
        (None, None) => Expression::All,
        (None, Some(residue_test)) if target.extend_to_chain => {
            Expression::extend_to_chain(Expression::AtomGroups {
                chain_test: None,
                residue_test: Some(residue_test),
            })
        }
        (Some(chain_test), _) if target.extend_to_chain => Expression::chain_test(chain_test),
        (chain_test, residue_test) => Expression::AtomGroups {
            chain_test,
            residue_test,
        },
    }
}

/// Compile several targets into their union.
///
/// Targets are never intersected with each other; an empty slice selects
/// nothing.
pub fn targets_to_expression(targets: &[Target]) -> Expression {
    match targets {
        [] => Expression::Empty,
        [single] => target_to_expression(single),
        many => Expression::Merge(many.iter().map(target_to_expression).collect()),
    }
}

/// Compile a chain range; the residue span is expanded to an explicit list
pub fn range_to_expression(range: &Range) -> SelectResult<Expression> {
    range.validate()?;
    let seq_ids: Vec<i32> = range
        .label_seq_range
        .map(|r| r.residues().collect())
        .unwrap_or_default();
    Ok(residues_to_expression(&range.label_asym_id, &seq_ids))
}

/// Chain test on `label_asym_id` plus, when `seq_ids` is non-empty, a
/// residue test on `label_seq_id`
pub fn residues_to_expression(label_asym_id: &str, seq_ids: &[i32]) -> Expression {
    let residue_test = match seq_ids {
        [] => None,
        [single] => Some(Predicate::eq(Property::LabelSeqId, *single)),
        many => Some(Predicate::one_of(Property::LabelSeqId, many.iter().copied())),
    };
    Expression::AtomGroups {
        chain_test: Some(Predicate::eq(Property::LabelAsymId, label_asym_id)),
        residue_test,
    }
}

fn residue_test(target: &Target) -> Option<Predicate> {
    let seq_test = match (target.auth_seq_id, target.label_seq_id) {
        (Some(auth), _) => Some(Predicate::eq(Property::AuthSeqId, auth)),
        (None, Some(label)) => Some(Predicate::eq(Property::LabelSeqId, label)),
        (None, None) => None,
    };
    match &target.label_comp_id {
        Some(comp_id) => Some(Predicate::and_opt(
            seq_test,
            Predicate::eq(Property::LabelCompId, comp_id.as_str()),
        )),
        None => seq_test,
    }
}

fn chain_test(target: &Target) -> Option<Predicate> {
    let asym_id = target.label_asym_id.as_deref()?;
    let mut test = Predicate::eq(Property::LabelAsymId, asym_id);
    if let Some(name) = &target.operator_name {
        test = test.and(Predicate::eq(Property::OperatorName, name.as_str()));
    }
    if let Some(oper_id) = &target.struct_oper_id {
        test = test.and(Predicate::eq(Property::StructOperId, oper_id.as_str()));
    }
    Some(test)
}
