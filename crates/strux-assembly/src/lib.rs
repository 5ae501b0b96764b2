//! STRUX assemblies
//!
//! - [`parse_oper_expression`] - `pdbx_struct_assembly_gen.oper_expression`
//!   parsing, e.g. `"(X0)(1-5)"`
//! - [`select_assembly`] - pick the assembly that contains a set of chain
//!   instances
//! - [`build_assembly`] - expand an assembly into a [`Structure`]
//! - [`assemble`] - build a structure from independently transformed chain
//!   pieces, with per-residue color overrides
//!
//! [`Structure`]: strux_mol::Structure

mod build;
mod error;
mod flexible;
mod oper_expr;
mod select;

pub use build::build_assembly;
pub use error::{AssemblyError, AssemblyResult};
pub use flexible::{assemble, FlexibleAssembly, FlexibleSelection, TargetColor};
pub use oper_expr::{
    combination_id, operator_combinations, parse_oper_expression, OperatorCombination,
};
pub use select::{
    matches_operators, select_assembly, select_assembly_for_targets, OperatorChainPair,
    FALLBACK_ASSEMBLY_ID,
};
