//! Error types for the settings system

use thiserror::Error;

/// Errors that can occur when working with settings
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SettingError {
    /// Setting not found
    #[error("Setting not found: {0}")]
    NotFound(String),

    /// Type mismatch when setting a value
    #[error("Type mismatch for '{name}': expected {expected}, got {actual}")]
    TypeMismatch {
        name: String,
        expected: String,
        actual: String,
    },

    /// Invalid value for the setting
    #[error("Invalid value for setting '{name}': {reason}")]
    InvalidValue { name: String, reason: String },

    /// Settings document could not be read
    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl SettingError {
    pub fn not_found_id(id: u16) -> Self {
        SettingError::NotFound(format!("id:{}", id))
    }
}
