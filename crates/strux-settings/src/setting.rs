//! Setting definitions and value types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type of a setting value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum SettingType {
    Bool = 1,
    Int = 2,
    Float = 3,
    String = 4,
}

impl fmt::Display for SettingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingType::Bool => write!(f, "bool"),
            SettingType::Int => write!(f, "int"),
            SettingType::Float => write!(f, "float"),
            SettingType::String => write!(f, "string"),
        }
    }
}

/// A setting value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Bool(bool),
    Int(i32),
    Float(f32),
    String(String),
}

impl SettingValue {
    /// Get the type of this value
    pub fn setting_type(&self) -> SettingType {
        match self {
            SettingValue::Bool(_) => SettingType::Bool,
            SettingValue::Int(_) => SettingType::Int,
            SettingValue::Float(_) => SettingType::Float,
            SettingValue::String(_) => SettingType::String,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            SettingValue::Bool(v) => Some(*v),
            SettingValue::Int(v) => Some(*v != 0),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match self {
            SettingValue::Int(v) => Some(*v),
            SettingValue::Bool(v) => Some(if *v { 1 } else { 0 }),
            SettingValue::Float(v) => Some(*v as i32),
            _ => None,
        }
    }

    /// Float value, with int-to-float coercion
    pub fn as_float(&self) -> Option<f32> {
        match self {
            SettingValue::Float(v) => Some(*v),
            SettingValue::Int(v) => Some(*v as f32),
            _ => None,
        }
    }

    pub fn as_string(&self) -> Option<&str> {
        match self {
            SettingValue::String(v) => Some(v),
            _ => None,
        }
    }

    /// Check if this value can be stored in a setting of `target_type`
    pub fn is_compatible_with(&self, target_type: SettingType) -> bool {
        matches!(
            (self, target_type),
            (SettingValue::Bool(_), SettingType::Bool)
                | (SettingValue::Int(_), SettingType::Int)
                | (SettingValue::Float(_), SettingType::Float)
                | (SettingValue::String(_), SettingType::String)
                | (SettingValue::Int(_), SettingType::Bool)
                | (SettingValue::Int(_), SettingType::Float)
        )
    }

    /// Convert to the setting's own type, applying the coercions
    /// accepted by [`is_compatible_with`](SettingValue::is_compatible_with)
    pub fn coerce(self, target_type: SettingType) -> Option<SettingValue> {
        if !self.is_compatible_with(target_type) {
            return None;
        }
        Some(match (target_type, &self) {
            (SettingType::Bool, SettingValue::Int(v)) => SettingValue::Bool(*v != 0),
            (SettingType::Float, SettingValue::Int(v)) => SettingValue::Float(*v as f32),
            _ => self,
        })
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingValue::Bool(v) => write!(f, "{}", if *v { "on" } else { "off" }),
            SettingValue::Int(v) => write!(f, "{}", v),
            SettingValue::Float(v) => write!(f, "{:.5}", v),
            SettingValue::String(v) => write!(f, "{}", v),
        }
    }
}

impl From<bool> for SettingValue {
    fn from(v: bool) -> Self {
        SettingValue::Bool(v)
    }
}

impl From<i32> for SettingValue {
    fn from(v: i32) -> Self {
        SettingValue::Int(v)
    }
}

impl From<f32> for SettingValue {
    fn from(v: f32) -> Self {
        SettingValue::Float(v)
    }
}

impl From<String> for SettingValue {
    fn from(v: String) -> Self {
        SettingValue::String(v)
    }
}

impl From<&str> for SettingValue {
    fn from(v: &str) -> Self {
        SettingValue::String(v.to_string())
    }
}

/// Static description of one setting
#[derive(Debug, Clone)]
pub struct Setting {
    /// Stable identifier
    pub id: u16,
    pub name: &'static str,
    pub setting_type: SettingType,
    /// Default value (string settings keep theirs in `get_string_default`)
    pub default: SettingValue,
    /// Minimum value (for numeric types)
    pub min: Option<f32>,
    /// Maximum value (for numeric types)
    pub max: Option<f32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        assert_eq!(SettingValue::Int(3).as_float(), Some(3.0));
        assert_eq!(SettingValue::Int(0).as_bool(), Some(false));
        assert_eq!(SettingValue::from("x").as_string(), Some("x"));
        assert_eq!(SettingValue::Bool(true).as_string(), None);
    }

    #[test]
    fn test_coerce() {
        assert_eq!(
            SettingValue::Int(1).coerce(SettingType::Bool),
            Some(SettingValue::Bool(true))
        );
        assert_eq!(
            SettingValue::Int(2).coerce(SettingType::Float),
            Some(SettingValue::Float(2.0))
        );
        assert_eq!(SettingValue::Float(2.5).coerce(SettingType::Int), None);
        assert_eq!(SettingValue::from("1").coerce(SettingType::Int), None);
    }

    #[test]
    fn test_untagged_json() {
        let v: SettingValue = serde_json::from_str("true").unwrap();
        assert_eq!(v, SettingValue::Bool(true));
        let v: SettingValue = serde_json::from_str("250").unwrap();
        assert_eq!(v, SettingValue::Int(250));
        let v: SettingValue = serde_json::from_str("0.5").unwrap();
        assert_eq!(v, SettingValue::Float(0.5));
        let v: SettingValue = serde_json::from_str("\"2\"").unwrap();
        assert_eq!(v, SettingValue::String("2".into()));
    }
}
