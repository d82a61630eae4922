// src/utils.rs

/// Mathematische Konstanten
pub mod constants {
    pub const PI: f64 = std::f64::consts::PI;
    pub const TAU: f64 = std::f64::consts::TAU;
    /// Innenwinkel eines Rechtecks in Grad
    pub const RIGHT_ANGLE: f64 = 90.0;
    pub const DEFAULT_UNIT: &str = "in";
}

/// Eingabeprüfungen, die alle Setter teilen
pub mod validation {
    use crate::error::{ShapeError, ShapeResult};

    /// NaN und ±∞ gelten nicht als Zahl.
    pub fn ensure_finite(what: &'static str, value: f64) -> ShapeResult<f64> {
        if !value.is_finite() {
            return Err(ShapeError::NotFinite { what, value });
        }
        Ok(value)
    }

    pub fn ensure_positive(what: &'static str, value: f64) -> ShapeResult<f64> {
        let value = ensure_finite(what, value)?;
        if value <= 0.0 {
            return Err(ShapeError::NonPositive { what, value });
        }
        Ok(value)
    }

    /// Beschriftungen wie die Einheit dürfen nicht nur aus Leerraum bestehen.
    pub fn ensure_label(what: &'static str, value: impl Into<String>) -> ShapeResult<String> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ShapeError::BlankLabel { what, value });
        }
        Ok(value)
    }
}
