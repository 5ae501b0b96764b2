//! Error types for preset application

use strux_assembly::AssemblyError;
use strux_color::ColorError;
use strux_select::SelectError;
use strux_settings::SettingError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PresetError {
    /// Selection JSON is neither a Range object nor an array of Targets
    #[error("malformed selection: {0}")]
    MalformedSelection(String),

    #[error(transparent)]
    Select(#[from] SelectError),

    #[error(transparent)]
    Assembly(#[from] AssemblyError),

    #[error(transparent)]
    Color(#[from] ColorError),

    #[error(transparent)]
    Setting(#[from] SettingError),
}

/// Result type for preset operations
pub type PresetResult<T> = Result<T, PresetError>;
