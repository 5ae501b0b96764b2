//! STRUX settings
//!
//! A small typed configuration table. Each setting has a stable id, a name,
//! a type and a default; a [`Settings`] store holds the values a session
//! changed.
//!
//! # Example
//!
//! ```rust
//! use strux_settings::{id, Settings};
//!
//! let mut settings = Settings::new();
//! settings.set_int(id::alignment_poll_interval_ms, 250).unwrap();
//! assert_eq!(settings.get_int(id::alignment_poll_interval_ms), 250);
//! assert_eq!(settings.get_string(id::default_assembly_id), "1");
//! ```

mod definitions;
mod error;
mod setting;
mod store;

pub use definitions::{
    default_value, get_setting, get_setting_id, get_string_default, id, setting_names, SETTINGS,
    SETTING_COUNT,
};
pub use error::SettingError;
pub use setting::{Setting, SettingType, SettingValue};
pub use store::Settings;
