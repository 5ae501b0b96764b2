//! Expression evaluator
//!
//! Evaluates an [`Expression`] over every unit of a structure in a single
//! pass, producing one mask per unit.

use strux_mol::Unit;

use crate::context::{ElementRef, QueryContext};
use crate::expr::{Expression, Predicate, Property, Value};
use crate::result::SelectionResult;
use crate::selection::StructureSelection;

/// Evaluate an expression against a context
pub fn evaluate<'a>(expr: &Expression, ctx: &QueryContext<'a>) -> StructureSelection<'a> {
    let masks = ctx.units().iter().map(|unit| eval_unit(expr, unit)).collect();
    StructureSelection::new(ctx.structure(), masks)
}

fn eval_unit(expr: &Expression, unit: &Unit) -> SelectionResult {
    match expr {
        Expression::All => SelectionResult::all(unit.len()),
        Expression::Empty => SelectionResult::new(unit.len()),
        Expression::AtomGroups {
            chain_test,
            residue_test,
        } => eval_property(unit, |element| {
            chain_test.as_ref().map_or(true, |t| test_predicate(t, element))
                && residue_test.as_ref().map_or(true, |t| test_predicate(t, element))
        }),
        Expression::Category(category) => {
            eval_property(unit, |element| element.category() == Some(*category))
        }
        Expression::Merge(items) => {
            let mut result = SelectionResult::new(unit.len());
            for item in items {
                result.union_with(&eval_unit(item, unit));
            }
            result
        }
        Expression::Intersect(items) => {
            let mut result = SelectionResult::all(unit.len());
            for item in items {
                if result.is_empty() {
                    break;
                }
                result.intersect_with(&eval_unit(item, unit));
            }
            result
        }
        Expression::ExtendToChain(inner) => {
            let hits = eval_unit(inner, unit);
            if hits.is_empty() {
                return hits;
            }
            let mut chains: Vec<&str> = unit
                .atoms()
                .enumerate()
                .filter(|(local_idx, _)| hits.contains_index(*local_idx))
                .map(|(_, (_, atom))| atom.label_asym_id.as_str())
                .collect();
            chains.sort_unstable();
            chains.dedup();
            eval_property(unit, |element| {
                chains.binary_search(&element.atom.label_asym_id.as_str()).is_ok()
            })
        }
    }
}

/// Set the bit of every element of `unit` that passes `predicate`
fn eval_property<F>(unit: &Unit, predicate: F) -> SelectionResult
where
    F: Fn(&ElementRef) -> bool,
{
    let mut result = SelectionResult::new(unit.len());
    for (local_idx, (index, atom)) in unit.atoms().enumerate() {
        let element = ElementRef { unit, index, atom };
        if predicate(&element) {
            result.set_index(local_idx);
        }
    }
    result
}

/// Evaluate a predicate for one element
pub fn test_predicate(predicate: &Predicate, element: &ElementRef) -> bool {
    match predicate {
        Predicate::Eq(property, value) => property_matches(*property, value, element),
        Predicate::OneOf(property, values) => values
            .iter()
            .any(|v| property_matches(*property, v, element)),
        Predicate::And(items) => items.iter().all(|p| test_predicate(p, element)),
        Predicate::Or(items) => items.iter().any(|p| test_predicate(p, element)),
        Predicate::Not(inner) => !test_predicate(inner, element),
    }
}

fn property_matches(property: Property, value: &Value, element: &ElementRef) -> bool {
    let atom = element.atom;
    let operator = element.unit.operator();
    match (property, value) {
        (Property::AuthSeqId, Value::Int(v)) => atom.auth_seq_id == *v,
        (Property::LabelSeqId, Value::Int(v)) => atom.label_seq_id == Some(*v),
        (Property::LabelCompId, Value::Str(v)) => atom.label_comp_id == *v,
        (Property::LabelAsymId, Value::Str(v)) => atom.label_asym_id == *v,
        (Property::AuthAsymId, Value::Str(v)) => atom.auth_asym_id == *v,
        (Property::EntityId, Value::Str(v)) => atom.label_entity_id == *v,
        (Property::OperatorName, Value::Str(v)) => operator.name == *v,
        (Property::StructOperId, Value::Str(v)) => operator.struct_oper_id == *v,
        // numeric properties compared to text and vice versa never match
        _ => false,
    }
}
