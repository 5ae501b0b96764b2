//! Setting definitions
//!
//! Ids are stable; new settings are appended.

use crate::setting::{Setting, SettingType, SettingValue};

/// Total number of settings
pub const SETTING_COUNT: usize = 10;

/// Setting indices
#[allow(non_upper_case_globals)]
pub mod id {
    pub const default_assembly_id: u16 = 0;
    pub const water_hidden: u16 = 1;
    pub const alignment_poll_interval_ms: u16 = 2;
    pub const alignment_timeout_ms: u16 = 3;
    pub const alignment_service_url: u16 = 4;
    pub const motif_color: u16 = 5;
    pub const base_color: u16 = 6;
    pub const score_very_high_cutoff: u16 = 7;
    pub const score_high_cutoff: u16 = 8;
    pub const score_low_cutoff: u16 = 9;
}

macro_rules! s_bool {
    ($id:expr, $name:expr, $default:expr) => {
        Setting { id: $id, name: $name, setting_type: SettingType::Bool, default: SettingValue::Bool($default), min: None, max: None }
    };
}

macro_rules! s_int {
    ($id:expr, $name:expr, $default:expr, $min:expr, $max:expr) => {
        Setting { id: $id, name: $name, setting_type: SettingType::Int, default: SettingValue::Int($default), min: Some($min as f32), max: Some($max as f32) }
    };
}

macro_rules! s_float {
    ($id:expr, $name:expr, $default:expr, $min:expr, $max:expr) => {
        Setting { id: $id, name: $name, setting_type: SettingType::Float, default: SettingValue::Float($default), min: Some($min), max: Some($max) }
    };
}

macro_rules! s_string {
    ($id:expr, $name:expr) => {
        Setting { id: $id, name: $name, setting_type: SettingType::String, default: SettingValue::Int(0), min: None, max: None }
    };
}

/// All setting definitions, indexed by id
pub static SETTINGS: &[Setting] = &[
    s_string!(0, "default_assembly_id"),
    s_bool!(1, "water_hidden", false),
    s_int!(2, "alignment_poll_interval_ms", 1000, 10, 60_000),
    s_int!(3, "alignment_timeout_ms", 300_000, 100, 3_600_000),
    s_string!(4, "alignment_service_url"),
    s_string!(5, "motif_color"),
    s_string!(6, "base_color"),
    s_float!(7, "score_very_high_cutoff", 90.0, 0.0, 100.0),
    s_float!(8, "score_high_cutoff", 70.0, 0.0, 100.0),
    s_float!(9, "score_low_cutoff", 50.0, 0.0, 100.0),
];

/// Get a setting definition by id
pub fn get_setting(id: u16) -> Option<&'static Setting> {
    SETTINGS.get(id as usize)
}

/// Get a setting id by name
pub fn get_setting_id(name: &str) -> Option<u16> {
    SETTINGS.iter().find(|s| s.name == name).map(|s| s.id)
}

/// Names of all settings, in id order
pub fn setting_names() -> Vec<&'static str> {
    SETTINGS.iter().map(|s| s.name).collect()
}

/// String defaults, kept out of the static table since `String` is not const
pub fn get_string_default(id: u16) -> &'static str {
    match id {
        id::default_assembly_id => "1",
        id::motif_color => "orange",
        id::base_color => "white",
        _ => "",
    }
}

/// The default value of a setting, with string defaults filled in
pub fn default_value(setting: &Setting) -> SettingValue {
    match setting.setting_type {
        SettingType::String => SettingValue::String(get_string_default(setting.id).to_string()),
        _ => setting.default.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_consistent() {
        assert_eq!(SETTINGS.len(), SETTING_COUNT);
        for (i, s) in SETTINGS.iter().enumerate() {
            assert_eq!(s.id as usize, i, "setting {} out of place", s.name);
        }
    }

    #[test]
    fn test_lookup_by_name() {
        assert_eq!(get_setting_id("water_hidden"), Some(id::water_hidden));
        assert_eq!(get_setting_id("nope"), None);
        assert_eq!(get_setting(id::alignment_timeout_ms).unwrap().name, "alignment_timeout_ms");
    }

    #[test]
    fn test_string_defaults() {
        let s = get_setting(id::default_assembly_id).unwrap();
        assert_eq!(default_value(s), SettingValue::String("1".into()));
        let url = get_setting(id::alignment_service_url).unwrap();
        assert_eq!(default_value(url), SettingValue::String(String::new()));
    }
}
