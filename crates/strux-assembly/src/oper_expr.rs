//! Operator expression parsing
//!
//! Grammar of `pdbx_struct_assembly_gen.oper_expression`:
//!
//! ```text
//! expression := group+ | list
//! group      := '(' list ')'
//! list       := item (',' item)*
//! item       := id | int '-' int
//! ```
//!
//! Numeric dash ranges are expanded (`1-3` becomes `1,2,3`); any other item is
//! kept as a literal id. An expression without parentheses is one group.

use nom::{
    bytes::complete::take_while1,
    character::complete::{char, multispace0},
    combinator::{all_consuming, map, opt},
    multi::{many1, separated_list1},
    sequence::{delimited, pair, preceded},
    IResult,
};
use smallvec::SmallVec;

use crate::error::{AssemblyError, AssemblyResult};

/// Upper bound on the ids a single dash range may expand to
const MAX_RANGE_LEN: i64 = 100_000;

/// One parsed item before range expansion
#[derive(Debug, Clone, PartialEq)]
enum Item<'a> {
    Id(&'a str),
    Span(&'a str, &'a str),
}

fn is_id_char(c: char) -> bool {
    !c.is_whitespace() && !matches!(c, '(' | ')' | ',' | '-')
}

fn ws<'a, O>(
    inner: impl FnMut(&'a str) -> IResult<&'a str, O>,
) -> impl FnMut(&'a str) -> IResult<&'a str, O> {
    delimited(multispace0, inner, multispace0)
}

fn item(input: &str) -> IResult<&str, Item<'_>> {
    map(
        pair(
            take_while1(is_id_char),
            opt(preceded(ws(char('-')), take_while1(is_id_char))),
        ),
        |(first, second)| match second {
            Some(second) => Item::Span(first, second),
            None => Item::Id(first),
        },
    )(input)
}

fn list(input: &str) -> IResult<&str, Vec<Item<'_>>> {
    separated_list1(ws(char(',')), ws(item))(input)
}

fn group(input: &str) -> IResult<&str, Vec<Item<'_>>> {
    ws(delimited(char('('), list, char(')')))(input)
}

fn oper_expression(input: &str) -> IResult<&str, Vec<Vec<Item<'_>>>> {
    let trimmed = input.trim_start();
    if trimmed.starts_with('(') {
        all_consuming(many1(group))(input)
    } else {
        all_consuming(map(ws(list), |items| vec![items]))(input)
    }
}

fn expand(expression: &str, items: Vec<Item<'_>>) -> AssemblyResult<Vec<String>> {
    let mut ids = Vec::with_capacity(items.len());
    for item in items {
        match item {
            Item::Id(id) => ids.push(id.to_string()),
            Item::Span(a, b) => match (a.parse::<i64>(), b.parse::<i64>()) {
                (Ok(beg), Ok(end)) => {
                    if beg > end {
                        return Err(AssemblyError::invalid_expression(
                            expression,
                            format!("descending range {}-{}", beg, end),
                        ));
                    }
                    if end - beg >= MAX_RANGE_LEN {
                        return Err(AssemblyError::invalid_expression(
                            expression,
                            format!("range {}-{} is too large", beg, end),
                        ));
                    }
                    ids.extend((beg..=end).map(|i| i.to_string()));
                }
                _ => ids.push(format!("{}-{}", a, b)),
            },
        }
    }
    Ok(ids)
}

/// Parse an operator expression into its groups of operator ids.
///
/// `"(X0)(1-5)"` yields `[["X0"], ["1", "2", "3", "4", "5"]]`.
pub fn parse_oper_expression(expression: &str) -> AssemblyResult<Vec<Vec<String>>> {
    let (_, groups) = oper_expression(expression).map_err(|e| {
        AssemblyError::invalid_expression(expression, format!("syntax error: {}", e))
    })?;
    groups
        .into_iter()
        .map(|items| expand(expression, items))
        .collect()
}

/// A combination of operator ids, one from each group, in group order
pub type OperatorCombination = SmallVec<[String; 2]>;

/// Cartesian product of the groups; earlier groups vary slowest
pub fn operator_combinations(groups: &[Vec<String>]) -> Vec<OperatorCombination> {
    let mut combos: Vec<OperatorCombination> = vec![SmallVec::new()];
    for group in groups {
        let mut next = Vec::with_capacity(combos.len() * group.len());
        for combo in &combos {
            for id in group {
                let mut extended = combo.clone();
                extended.push(id.clone());
                next.push(extended);
            }
        }
        combos = next;
    }
    if groups.is_empty() {
        return Vec::new();
    }
    combos
}

/// The `struct_oper_id` naming of a combination: ids in reverse group order
/// joined by `x` (the rightmost operator is applied first)
pub fn combination_id(combo: &[String]) -> String {
    let mut ids: Vec<&str> = combo.iter().map(String::as_str).collect();
    ids.reverse();
    ids.join("x")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_two_groups() {
        let groups = parse_oper_expression("(X0)(1-5)").unwrap();
        assert_eq!(groups, vec![strings(&["X0"]), strings(&["1", "2", "3", "4", "5"])]);
    }

    #[test]
    fn test_mixed_list() {
        let groups = parse_oper_expression("(1,2,5-7)").unwrap();
        assert_eq!(groups, vec![strings(&["1", "2", "5", "6", "7"])]);
    }

    #[test]
    fn test_whitespace_and_bare_list() {
        assert_eq!(
            parse_oper_expression(" ( 1 - 3 , P ) ").unwrap(),
            vec![strings(&["1", "2", "3", "P"])]
        );
        assert_eq!(parse_oper_expression("1,2").unwrap(), vec![strings(&["1", "2"])]);
        assert_eq!(parse_oper_expression("1").unwrap(), vec![strings(&["1"])]);
    }

    #[test]
    fn test_non_numeric_span_is_literal() {
        assert_eq!(
            parse_oper_expression("(P-1)").unwrap(),
            vec![strings(&["P-1"])]
        );
    }

    #[test]
    fn test_malformed() {
        assert!(parse_oper_expression("").is_err());
        assert!(parse_oper_expression("(1-5").is_err());
        assert!(parse_oper_expression("()").is_err());
        assert!(parse_oper_expression("(1)x").is_err());
        assert!(matches!(
            parse_oper_expression("(5-1)"),
            Err(AssemblyError::InvalidOperatorExpression { .. })
        ));
    }

    #[test]
    fn test_combinations() {
        let groups = vec![strings(&["X0"]), strings(&["1", "2"])];
        let combos = operator_combinations(&groups);
        assert_eq!(combos.len(), 2);
        assert_eq!(combos[1].as_slice(), strings(&["X0", "2"]).as_slice());
        assert_eq!(combination_id(&combos[1]), "2xX0");
        assert!(operator_combinations(&[]).is_empty());
    }
}
