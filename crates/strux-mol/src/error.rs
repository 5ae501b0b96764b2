//! Error types for the structural data model

use thiserror::Error;

/// Errors that can occur when building or querying a model
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MolError {
    /// Atom index is out of bounds
    #[error("Atom index {0} is out of bounds (max: {1})")]
    AtomIndexOutOfBounds(u32, usize),

    /// Coordinate count doesn't match atom count
    #[error("Coordinate count mismatch: expected {expected}, got {actual}")]
    CoordinateMismatch { expected: usize, actual: usize },

    /// An atom references an entity that was never registered
    #[error("Atom {atom} references unknown entity '{entity_id}'")]
    UnknownEntity { atom: u32, entity_id: String },

    /// Atoms of one chain are split by atoms of another chain
    #[error("Chain '{0}' is not stored contiguously")]
    ChainNotContiguous(String),

    /// Two operators share the same id
    #[error("Duplicate struct_oper id '{0}'")]
    DuplicateOperator(String),
}

impl MolError {
    /// Create an atom out of bounds error
    pub fn atom_out_of_bounds(index: u32, max: usize) -> Self {
        MolError::AtomIndexOutOfBounds(index, max)
    }
}

/// Result type for model operations
pub type MolResult<T> = Result<T, MolError>;
