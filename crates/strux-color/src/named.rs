//! Named color registry

use ahash::AHashMap;

use crate::error::ColorError;
use crate::Color;

/// Registry of named colors
#[derive(Debug, Clone)]
pub struct NamedColors {
    by_name: AHashMap<String, Color>,
}

impl NamedColors {
    /// Create a registry with the default palette
    pub fn new() -> Self {
        let mut registry = NamedColors {
            by_name: AHashMap::new(),
        };
        registry.register_defaults();
        registry
    }

    fn register_defaults(&mut self) {
        self.register("white", Color::WHITE);
        self.register("black", Color::BLACK);
        self.register("red", Color::RED);
        self.register("green", Color::GREEN);
        self.register("blue", Color::BLUE);
        self.register("yellow", Color::YELLOW);
        self.register("orange", Color::ORANGE);
        self.register("gray", Color::GRAY);
        self.register("grey", Color::GRAY);
        self.register("cyan", Color::new(0.0, 1.0, 1.0));
        self.register("magenta", Color::new(1.0, 0.0, 1.0));
        self.register("purple", Color::new(0.75, 0.0, 0.75));
        self.register("salmon", Color::new(1.0, 0.6, 0.6));
        self.register("slate", Color::new(0.5, 0.5, 1.0));
        self.register("teal", Color::new(0.0, 0.75, 0.75));
        self.register("marine", Color::new(0.0, 0.5, 1.0));
        self.register("forest", Color::new(0.2, 0.6, 0.2));
        self.register("wheat", Color::new(0.99, 0.82, 0.65));

        // confidence bands of predicted models
        self.register("confidence_very_high", Color::from_u32(0x0053D6));
        self.register("confidence_high", Color::from_u32(0x65CBF3));
        self.register("confidence_low", Color::from_u32(0xFFDB13));
        self.register("confidence_very_low", Color::from_u32(0xFF7D45));
    }

    /// Register (or replace) a named color; names are case-insensitive
    pub fn register(&mut self, name: &str, color: Color) {
        self.by_name.insert(name.to_ascii_lowercase(), color);
    }

    pub fn get(&self, name: &str) -> Option<Color> {
        self.by_name.get(&name.to_ascii_lowercase()).copied()
    }

    /// Resolve a color given as a name or as a `#RRGGBB` hex string
    pub fn parse(&self, value: &str) -> Result<Color, ColorError> {
        let value = value.trim();
        if value.starts_with('#') {
            return Color::from_hex(value).ok_or_else(|| ColorError::InvalidValue(value.into()));
        }
        self.get(value)
            .ok_or_else(|| ColorError::NotFound(value.into()))
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

impl Default for NamedColors {
    fn default() -> Self {
        Self::new()
    }
}
