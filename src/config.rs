// src/config.rs
use crate::error::ShapeResult;
use crate::types::Color;
use crate::utils::constants::DEFAULT_UNIT;
use crate::utils::validation::ensure_label;
use serde::Deserialize;

/// Gemeinsame Startwerte, die jede Form vor ihren eigenen Feldern erhält.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ShapeDefaults {
    pub unit: String,
    pub color: Color,
}

impl ShapeDefaults {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn validate(&self) -> ShapeResult<()> {
        if let Err(err) = ensure_label("Unit", self.unit.as_str()) {
            tracing::warn!("ShapeDefaults: {err}");
            return Err(err);
        }

        Ok(())
    }
}

impl Default for ShapeDefaults {
    fn default() -> Self {
        Self {
            unit: DEFAULT_UNIT.to_string(),
            color: Color::WHITE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_defaults() {
        let defaults = ShapeDefaults::new();
        assert_eq!(defaults.unit, "in");
        assert_eq!(defaults.color, Color::WHITE);
        assert!(defaults.validate().is_ok());
    }

    #[test]
    fn test_blank_unit_rejected() {
        let err = ShapeDefaults::new().with_unit("  ").validate().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Value);
    }

    #[test]
    fn test_partial_deserialize_keeps_defaults() {
        let defaults: ShapeDefaults = serde_json::from_str(r#"{"unit": "cm"}"#).unwrap();
        assert_eq!(defaults.unit, "cm");
        assert_eq!(defaults.color, Color::WHITE);

        let defaults: ShapeDefaults =
            serde_json::from_str(r#"{"color": {"red": 0, "green": 0, "blue": 0}}"#).unwrap();
        assert_eq!(defaults.unit, "in");
        assert_eq!(defaults.color, Color::BLACK);
    }
}
