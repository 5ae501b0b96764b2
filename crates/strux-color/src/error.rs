//! Error types for the color system

use thiserror::Error;

/// Errors that can occur when working with colors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ColorError {
    /// Color not found by name
    #[error("Color not found: {0}")]
    NotFound(String),

    /// Invalid color value
    #[error("Invalid color value: {0}")]
    InvalidValue(String),
}
