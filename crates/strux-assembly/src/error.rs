//! Error types for assembly construction

use strux_select::SelectError;
use thiserror::Error;

/// Errors that can occur when parsing operator expressions or building
/// assemblies
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AssemblyError {
    /// The operator expression does not follow the `(G1)(G2)...` grammar
    #[error("invalid operator expression '{expression}': {reason}")]
    InvalidOperatorExpression { expression: String, reason: String },

    /// The model has no assembly generation table
    #[error("model '{0}' has no assembly generation table")]
    NoAssemblyTable(String),

    /// Requested assembly id is not in the generation table
    #[error("assembly '{0}' not found")]
    UnknownAssembly(String),

    /// An operator id used by the assembly is missing from the operator list
    #[error("assembly '{assembly_id}' uses unknown operator '{oper_id}'")]
    UnknownOperator { assembly_id: String, oper_id: String },

    /// A selection or color range is malformed
    #[error(transparent)]
    Select(#[from] SelectError),
}

impl AssemblyError {
    pub(crate) fn invalid_expression(expression: &str, reason: impl Into<String>) -> Self {
        AssemblyError::InvalidOperatorExpression {
            expression: expression.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type for assembly operations
pub type AssemblyResult<T> = Result<T, AssemblyError>;
