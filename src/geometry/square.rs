// src/geometry/square.rs

use super::shape::{Shape, ShapeAttributes};
use crate::config::ShapeDefaults;
use crate::error::{ShapeError, ShapeResult};
use crate::types::Color;
use crate::utils::constants::RIGHT_ANGLE;
use crate::utils::validation::{ensure_finite, ensure_positive};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, trace};

const KIND: &str = "Square";
const CORNERS: usize = 4;

/// Bezugsgröße beim Skalieren eines Quadrats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SquareScaling {
    Area,
    #[default]
    SideLength,
}

impl SquareScaling {
    const EXPECTED: &'static str = "'area', 'side_length'";

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Area => "area",
            Self::SideLength => "side_length",
        }
    }
}

impl FromStr for SquareScaling {
    type Err = ShapeError;

    fn from_str(how: &str) -> Result<Self, Self::Err> {
        match how.to_lowercase().as_str() {
            "area" => Ok(Self::Area),
            "side_length" => Ok(Self::SideLength),
            _ => Err(ShapeError::UnknownScaling {
                how: how.to_string(),
                expected: Self::EXPECTED,
            }),
        }
    }
}

impl fmt::Display for SquareScaling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Quadrat: vier gleiche Seiten, vier rechte Winkel.
/// Seiten und Winkel liegen in den gemeinsamen Attributen.
#[derive(Debug, Clone, PartialEq)]
pub struct Square {
    attributes: ShapeAttributes,
}

impl Square {
    pub fn new(side_length: f64) -> ShapeResult<Self> {
        Self::new_with_defaults(side_length, &ShapeDefaults::default())
    }

    /// Seiten und Winkel laufen durch dieselben Setter wie spätere Zuweisungen.
    pub fn new_with_defaults(side_length: f64, defaults: &ShapeDefaults) -> ShapeResult<Self> {
        let mut square = Self {
            attributes: ShapeAttributes::new(KIND, defaults)?,
        };
        square.set_sides(&[side_length; CORNERS])?;
        square.set_angles(&[RIGHT_ANGLE; CORNERS])?;

        trace!(side_length, "constructed square");
        Ok(square)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.attributes.set_name(name);
        self
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> ShapeResult<Self> {
        self.attributes.set_unit(unit)?;
        Ok(self)
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.attributes.set_color(color);
        self
    }

    pub fn side_length(&self) -> f64 {
        // Nach der Konstruktion gibt es immer vier Seiten, der Fallback wird nie erreicht
        self.sides().first().copied().unwrap_or_default()
    }

    pub fn scale_by(&mut self, factor: f64, mode: SquareScaling) -> ShapeResult<()> {
        let factor = ensure_positive("scaling_factor", factor)?;

        let side_length = match mode {
            SquareScaling::Area => self.side_length() * factor.sqrt(),
            SquareScaling::SideLength => self.side_length() * factor,
        };

        debug!(factor, %mode, from = self.side_length(), to = side_length, "scaling square");
        self.set_sides(&[side_length; CORNERS])
    }
}

impl Shape for Square {
    fn kind(&self) -> &'static str {
        KIND
    }

    fn attributes(&self) -> &ShapeAttributes {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut ShapeAttributes {
        &mut self.attributes
    }

    fn area(&self) -> f64 {
        self.side_length().powi(2)
    }

    fn scale(&mut self, factor: f64, how: &str) -> ShapeResult<()> {
        let mode = how.parse::<SquareScaling>()?;
        self.scale_by(factor, mode)
    }

    fn validate_sides(&self, sides: &[f64]) -> ShapeResult<()> {
        if sides.len() != CORNERS {
            return Err(ShapeError::WrongCount {
                what: "sides",
                expected: CORNERS,
                actual: sides.len(),
            });
        }

        let first = sides[0];
        for &side in sides {
            ensure_positive("Side", side)?;
            if side != first {
                return Err(ShapeError::UnequalSides {
                    shape: KIND,
                    sides: sides.to_vec(),
                });
            }
        }

        Ok(())
    }

    fn validate_angles(&self, angles: &[f64]) -> ShapeResult<()> {
        if angles.len() != CORNERS {
            return Err(ShapeError::WrongCount {
                what: "angles",
                expected: CORNERS,
                actual: angles.len(),
            });
        }

        for &angle in angles {
            if ensure_finite("Angle", angle)? != RIGHT_ANGLE {
                return Err(ShapeError::InvalidAngles {
                    shape: KIND,
                    expected: RIGHT_ANGLE,
                    angles: angles.to_vec(),
                });
            }
        }

        Ok(())
    }

    fn describe(&self) -> String {
        self.to_string()
    }

    fn repr(&self) -> String {
        format!(
            "Square(name={:?}, unit={:?}, color={}, side_length={:?}, area={:?})",
            self.name(),
            self.unit(),
            self.color().repr(),
            self.side_length(),
            self.area()
        )
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = self.unit();
        write!(
            f,
            "{} the Square: s = {} {unit}, P = {} {unit}, color {}",
            self.name(),
            self.side_length(),
            self.perimeter(),
            self.color()
        )
    }
}
