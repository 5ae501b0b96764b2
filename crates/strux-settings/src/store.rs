//! Settings store
//!
//! One [`Settings`] value holds the configuration of a viewer session. It is
//! owned by the session context and passed explicitly; there is no global
//! instance.

use crate::definitions::{default_value, get_setting, get_setting_id, SETTINGS, SETTING_COUNT};
use crate::error::SettingError;
use crate::setting::SettingValue;

/// Session settings; unset entries fall back to their defaults
#[derive(Debug, Clone)]
pub struct Settings {
    /// Current values (None = use default)
    values: Vec<Option<SettingValue>>,
    /// Tracks which settings have been modified
    changed: Vec<bool>,
}

impl Settings {
    pub fn new() -> Self {
        Settings {
            values: vec![None; SETTING_COUNT],
            changed: vec![false; SETTING_COUNT],
        }
    }

    /// Get a setting value, returning the default if not explicitly set
    pub fn get(&self, id: u16) -> Option<SettingValue> {
        let setting = get_setting(id)?;
        self.values
            .get(id as usize)
            .and_then(|v| v.clone())
            .or_else(|| Some(default_value(setting)))
    }

    /// Check if a setting is explicitly defined (not using default)
    pub fn is_defined(&self, id: u16) -> bool {
        self.values
            .get(id as usize)
            .map_or(false, |v| v.is_some())
    }

    /// Set a setting value, type- and range-checked
    pub fn set(&mut self, id: u16, value: SettingValue) -> Result<(), SettingError> {
        let setting = get_setting(id).ok_or_else(|| SettingError::not_found_id(id))?;

        let actual = value.setting_type();
        let value = value
            .coerce(setting.setting_type)
            .ok_or_else(|| SettingError::TypeMismatch {
                name: setting.name.to_string(),
                expected: setting.setting_type.to_string(),
                actual: actual.to_string(),
            })?;

        if let (Some(min), Some(max), Some(v)) = (setting.min, setting.max, value.as_float()) {
            if v < min || v > max {
                return Err(SettingError::InvalidValue {
                    name: setting.name.to_string(),
                    reason: format!("value {} is outside range [{}, {}]", v, min, max),
                });
            }
        }

        log::debug!("Setting {} = {}", setting.name, value);
        self.values[id as usize] = Some(value);
        self.changed[id as usize] = true;
        Ok(())
    }

    /// Set a setting by name
    pub fn set_by_name(&mut self, name: &str, value: SettingValue) -> Result<(), SettingError> {
        let id = get_setting_id(name).ok_or_else(|| SettingError::NotFound(name.to_string()))?;
        self.set(id, value)
    }

    /// Unset a setting (revert to default)
    pub fn unset(&mut self, id: u16) -> bool {
        match self.values.get_mut(id as usize) {
            Some(slot) => {
                let was_set = slot.take().is_some();
                if was_set {
                    self.changed[id as usize] = true;
                }
                was_set
            }
            None => false,
        }
    }

    /// Ids of settings modified since the last call, clearing the flags
    pub fn take_changed(&mut self) -> Vec<u16> {
        let ids = self
            .changed
            .iter()
            .enumerate()
            .filter(|(_, c)| **c)
            .map(|(i, _)| i as u16)
            .collect();
        self.changed.iter_mut().for_each(|c| *c = false);
        ids
    }

    /// Apply a JSON object of `name: value` pairs.
    ///
    /// All entries are validated before any is applied.
    pub fn apply_json(&mut self, json: &str) -> Result<usize, SettingError> {
        let entries: serde_json::Map<String, serde_json::Value> = serde_json::from_str(json)
            .map_err(|e| SettingError::Deserialization(e.to_string()))?;

        let mut staged = self.clone();
        for (name, raw) in &entries {
            let value: SettingValue = serde_json::from_value(raw.clone()).map_err(|_| {
                SettingError::InvalidValue {
                    name: name.clone(),
                    reason: format!("unsupported value {}", raw),
                }
            })?;
            staged.set_by_name(name, value)?;
        }
        *self = staged;
        Ok(entries.len())
    }

    // =========================================================================
    // Type-Safe Getters
    // =========================================================================

    pub fn get_bool(&self, id: u16) -> bool {
        self.get(id).and_then(|v| v.as_bool()).unwrap_or(false)
    }

    pub fn get_int(&self, id: u16) -> i32 {
        self.get(id).and_then(|v| v.as_int()).unwrap_or(0)
    }

    pub fn get_float(&self, id: u16) -> f32 {
        self.get(id).and_then(|v| v.as_float()).unwrap_or(0.0)
    }

    pub fn get_string(&self, id: u16) -> String {
        self.get(id)
            .and_then(|v| v.as_string().map(|s| s.to_string()))
            .unwrap_or_default()
    }

    // =========================================================================
    // Type-Safe Setters
    // =========================================================================

    pub fn set_bool(&mut self, id: u16, value: bool) -> Result<(), SettingError> {
        self.set(id, SettingValue::Bool(value))
    }

    pub fn set_int(&mut self, id: u16, value: i32) -> Result<(), SettingError> {
        self.set(id, SettingValue::Int(value))
    }

    pub fn set_float(&mut self, id: u16, value: f32) -> Result<(), SettingError> {
        self.set(id, SettingValue::Float(value))
    }

    pub fn set_string(&mut self, id: u16, value: impl Into<String>) -> Result<(), SettingError> {
        self.set(id, SettingValue::String(value.into()))
    }

    /// `(name, current value)` of every setting, in id order
    pub fn entries(&self) -> Vec<(&'static str, SettingValue)> {
        SETTINGS
            .iter()
            .filter_map(|s| self.get(s.id).map(|v| (s.name, v)))
            .collect()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definitions::id;

    #[test]
    fn test_defaults() {
        let settings = Settings::new();
        assert_eq!(settings.get_string(id::default_assembly_id), "1");
        assert!(!settings.get_bool(id::water_hidden));
        assert_eq!(settings.get_int(id::alignment_poll_interval_ms), 1000);
        assert_eq!(settings.get_float(id::score_high_cutoff), 70.0);
        assert!(settings.get(999).is_none());
    }

    #[test]
    fn test_set_and_unset() {
        let mut settings = Settings::new();
        settings.set_int(id::alignment_timeout_ms, 5000).unwrap();
        assert!(settings.is_defined(id::alignment_timeout_ms));
        assert_eq!(settings.get_int(id::alignment_timeout_ms), 5000);

        assert!(settings.unset(id::alignment_timeout_ms));
        assert_eq!(settings.get_int(id::alignment_timeout_ms), 300_000);
        assert!(!settings.unset(id::alignment_timeout_ms));
    }

    #[test]
    fn test_type_and_range_checks() {
        let mut settings = Settings::new();
        assert!(matches!(
            settings.set_string(id::water_hidden, "yes"),
            Err(SettingError::TypeMismatch { .. })
        ));
        assert!(matches!(
            settings.set_int(id::alignment_poll_interval_ms, 1),
            Err(SettingError::InvalidValue { .. })
        ));
        // int accepted for a bool setting
        settings.set_int(id::water_hidden, 1).unwrap();
        assert!(settings.get_bool(id::water_hidden));
    }

    #[test]
    fn test_take_changed() {
        let mut settings = Settings::new();
        settings.set_string(id::motif_color, "red").unwrap();
        assert_eq!(settings.take_changed(), vec![id::motif_color]);
        assert!(settings.take_changed().is_empty());
    }

    #[test]
    fn test_apply_json() {
        let mut settings = Settings::new();
        let n = settings
            .apply_json(r#"{"water_hidden": true, "default_assembly_id": "2", "score_low_cutoff": 40}"#)
            .unwrap();
        assert_eq!(n, 3);
        assert!(settings.get_bool(id::water_hidden));
        assert_eq!(settings.get_string(id::default_assembly_id), "2");
        assert_eq!(settings.get_float(id::score_low_cutoff), 40.0);
    }

    #[test]
    fn test_apply_json_is_all_or_nothing() {
        let mut settings = Settings::new();
        let err = settings
            .apply_json(r#"{"water_hidden": true, "no_such_setting": 1}"#)
            .unwrap_err();
        assert_eq!(err, SettingError::NotFound("no_such_setting".into()));
        assert!(!settings.get_bool(id::water_hidden));

        assert!(matches!(
            settings.apply_json("[1, 2]"),
            Err(SettingError::Deserialization(_))
        ));
    }
}
