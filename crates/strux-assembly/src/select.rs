//! Picking the assembly that contains a set of required chain instances

use strux_mol::{AssemblyGen, DEFAULT_STRUCT_OPER_ID};
use strux_select::Target;

use crate::oper_expr::parse_oper_expression;

/// Assembly id used when no row of the generation table matches
pub const FALLBACK_ASSEMBLY_ID: &str = "1";

/// A chain instance that must be present in the chosen assembly
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorChainPair {
    /// `struct_oper_id` of the instance, `None` meaning the deposited copy ("1")
    pub struct_oper_id: Option<String>,
    pub label_asym_id: String,
}

impl OperatorChainPair {
    pub fn new(label_asym_id: impl Into<String>, struct_oper_id: Option<&str>) -> Self {
        OperatorChainPair {
            struct_oper_id: struct_oper_id.map(str::to_string),
            label_asym_id: label_asym_id.into(),
        }
    }

    /// The pair a target refers to; targets without a chain have none
    pub fn from_target(target: &Target) -> Option<Self> {
        target.label_asym_id.as_ref().map(|asym| OperatorChainPair {
            struct_oper_id: target.struct_oper_id.clone(),
            label_asym_id: asym.clone(),
        })
    }

    pub fn struct_oper_id(&self) -> &str {
        self.struct_oper_id.as_deref().unwrap_or(DEFAULT_STRUCT_OPER_ID)
    }
}

/// Whether a composite `struct_oper_id` (e.g. `"2x5"`) fits the parsed
/// operator groups.
///
/// The id is split on `x` and reversed, so its rightmost token is tested
/// against the first group. A token matches a group when it is a substring
/// of one of the group's ids. Groups beyond the token count are not
/// constrained; a token without a group never matches.
pub fn matches_operators(groups: &[Vec<String>], struct_oper_id: &str) -> bool {
    struct_oper_id
        .split('x')
        .rev()
        .enumerate()
        .all(|(i, token)| {
            groups
                .get(i)
                .is_some_and(|group| group.iter().any(|id| id.contains(token)))
        })
}

fn row_matches(row: &AssemblyGen, groups: &[Vec<String>], pair: &OperatorChainPair) -> bool {
    matches_operators(groups, pair.struct_oper_id())
        && row
            .asym_id_list
            .iter()
            .any(|asym| asym.contains(pair.label_asym_id.as_str()))
}

/// Choose the first assembly whose generation row contains every required
/// pair.
///
/// Falls back to [`FALLBACK_ASSEMBLY_ID`] when the table is missing or no row
/// matches. Rows with unparseable operator expressions are skipped.
pub fn select_assembly(table: Option<&[AssemblyGen]>, required: &[OperatorChainPair]) -> String {
    let Some(rows) = table else {
        log::warn!(
            "No assembly generation table, using assembly {}",
            FALLBACK_ASSEMBLY_ID
        );
        return FALLBACK_ASSEMBLY_ID.to_string();
    };

    for row in rows {
        let groups = match parse_oper_expression(&row.oper_expression) {
            Ok(groups) => groups,
            Err(e) => {
                log::debug!("Skipping assembly row {}: {}", row.assembly_id, e);
                continue;
            }
        };
        if required.iter().all(|pair| row_matches(row, &groups, pair)) {
            log::debug!("Selected assembly {}", row.assembly_id);
            return row.assembly_id.clone();
        }
    }

    log::warn!(
        "No assembly contains all {} required chain instance(s), using assembly {}",
        required.len(),
        FALLBACK_ASSEMBLY_ID
    );
    FALLBACK_ASSEMBLY_ID.to_string()
}

/// [`select_assembly`] for the chain instances referenced by `targets`
pub fn select_assembly_for_targets(table: Option<&[AssemblyGen]>, targets: &[Target]) -> String {
    let required: Vec<OperatorChainPair> = targets
        .iter()
        .filter_map(OperatorChainPair::from_target)
        .collect();
    select_assembly(table, &required)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn groups(expr: &str) -> Vec<Vec<String>> {
        parse_oper_expression(expr).unwrap()
    }

    fn table() -> Vec<AssemblyGen> {
        vec![
            AssemblyGen::new("1", "(1)", "A,B"),
            AssemblyGen::new("2", "(1-5)", "C"),
            AssemblyGen::new("3", "(X0)(1-5)", "A,B,C"),
        ]
    }

    #[test]
    fn test_composite_id_matched_right_to_left() {
        let g = groups("(1-5)(1-3)");
        assert!(matches_operators(&g, "2x5"));
        assert!(!matches_operators(&g, "5x2"));
        assert!(!matches_operators(&g, "1x2x3"));
    }

    #[test]
    fn test_substring_semantics() {
        let g = groups("(11,12)");
        assert!(matches_operators(&g, "1"));
        assert!(!matches_operators(&g, "3"));
    }

    #[test]
    fn test_first_matching_row_wins() {
        let rows = table();
        let required = [OperatorChainPair::new("A", None)];
        assert_eq!(select_assembly(Some(&rows), &required), "1");

        let required = [OperatorChainPair::new("C", Some("3"))];
        assert_eq!(select_assembly(Some(&rows), &required), "2");
    }

    #[test]
    fn test_all_pairs_must_match_same_row() {
        let rows = table();
        let required = [
            OperatorChainPair::new("A", None),
            OperatorChainPair::new("C", None),
        ];
        // row 3 starts with group (X0), which does not contain "1"
        assert_eq!(select_assembly(Some(&rows), &required), FALLBACK_ASSEMBLY_ID);

        let required = [
            OperatorChainPair::new("A", Some("4xX0")),
            OperatorChainPair::new("C", Some("2xX0")),
        ];
        assert_eq!(select_assembly(Some(&rows), &required), "3");
    }

    #[test]
    fn test_fallbacks() {
        assert_eq!(select_assembly(None, &[]), "1");
        let rows = table();
        let required = [OperatorChainPair::new("Z", None)];
        assert_eq!(select_assembly(Some(&rows), &required), "1");
    }

    #[test]
    fn test_targets_without_chain_ignored() {
        let rows = vec![AssemblyGen::new("7", "(2)", "B")];
        let targets = [
            Target::default().with_comp_id("HEM"),
            Target::chain("B").with_struct_oper_id("2"),
        ];
        assert_eq!(select_assembly_for_targets(Some(&rows), &targets), "7");
    }
}
