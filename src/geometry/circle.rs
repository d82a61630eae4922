// src/geometry/circle.rs

use super::shape::{Shape, ShapeAttributes};
use crate::config::ShapeDefaults;
use crate::error::{ShapeError, ShapeResult};
use crate::types::Color;
use crate::utils::constants::{PI, TAU};
use crate::utils::validation::ensure_positive;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, trace};

const KIND: &str = "Circle";
const MEASURE_OPTIONS: &str = "'radius' or 'circumference'";

/// Bezugsgröße beim Skalieren eines Kreises
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CircleScaling {
    Area,
    #[default]
    Radius,
    Circumference,
}

impl CircleScaling {
    const EXPECTED: &'static str = "'area', 'radius', 'circumference'";

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Area => "area",
            Self::Radius => "radius",
            Self::Circumference => "circumference",
        }
    }
}

impl FromStr for CircleScaling {
    type Err = ShapeError;

    fn from_str(how: &str) -> Result<Self, Self::Err> {
        match how.to_lowercase().as_str() {
            "area" => Ok(Self::Area),
            "radius" => Ok(Self::Radius),
            "circumference" => Ok(Self::Circumference),
            _ => Err(ShapeError::UnknownScaling {
                how: how.to_string(),
                expected: Self::EXPECTED,
            }),
        }
    }
}

impl fmt::Display for CircleScaling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Die zuletzt gesetzte Größe bleibt exakt erhalten, die andere wird beim Lesen abgeleitet.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Measure {
    Radius(f64),
    Circumference(f64),
}

impl Measure {
    fn radius(self) -> f64 {
        match self {
            Self::Radius(r) => r,
            Self::Circumference(c) => c / TAU,
        }
    }

    fn circumference(self) -> f64 {
        match self {
            Self::Radius(r) => TAU * r,
            Self::Circumference(c) => c,
        }
    }
}

/// Kreis, definiert durch Radius oder Umfang. Hat weder Seiten noch Winkel.
#[derive(Debug, Clone)]
pub struct Circle {
    attributes: ShapeAttributes,
    measure: Measure,
}

impl Circle {
    /// Erwartet genau eines von `radius` oder `circumference`.
    pub fn new(radius: Option<f64>, circumference: Option<f64>) -> ShapeResult<Self> {
        Self::new_with_defaults(radius, circumference, &ShapeDefaults::default())
    }

    pub fn new_with_defaults(
        radius: Option<f64>,
        circumference: Option<f64>,
        defaults: &ShapeDefaults,
    ) -> ShapeResult<Self> {
        let measure = match (radius, circumference) {
            (Some(_), Some(_)) => {
                return Err(ShapeError::ConflictingArguments {
                    shape: KIND,
                    options: MEASURE_OPTIONS,
                    received: "both",
                });
            }
            (None, None) => {
                return Err(ShapeError::ConflictingArguments {
                    shape: KIND,
                    options: MEASURE_OPTIONS,
                    received: "neither",
                });
            }
            (Some(r), None) => Measure::Radius(ensure_positive("Radius", r)?),
            (None, Some(c)) => Measure::Circumference(ensure_positive("Circumference", c)?),
        };

        let circle = Self {
            attributes: ShapeAttributes::new(KIND, defaults)?,
            measure,
        };
        trace!(?measure, "constructed circle");
        Ok(circle)
    }

    pub fn with_radius(radius: f64) -> ShapeResult<Self> {
        Self::new(Some(radius), None)
    }

    pub fn with_circumference(circumference: f64) -> ShapeResult<Self> {
        Self::new(None, Some(circumference))
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

    pub fn radius(&self) -> f64 {
        self.measure.radius()
    }

    pub fn diameter(&self) -> f64 {
        self.radius() * 2.0
    }

    pub fn circumference(&self) -> f64 {
        self.measure.circumference()
    }

    /// Bei ungültigem Wert bleibt der bisherige Radius erhalten.
    pub fn set_radius(&mut self, radius: f64) -> ShapeResult<()> {
        self.measure = Measure::Radius(ensure_positive("Radius", radius)?);
        Ok(())
    }

    /// Bei ungültigem Wert bleibt der bisherige Umfang erhalten.
    pub fn set_circumference(&mut self, circumference: f64) -> ShapeResult<()> {
        self.measure = Measure::Circumference(ensure_positive("Circumference", circumference)?);
        Ok(())
    }

    pub fn scale_by(&mut self, factor: f64, mode: CircleScaling) -> ShapeResult<()> {
        let factor = ensure_positive("scaling_factor", factor)?;

        let measure = match mode {
            CircleScaling::Area => Measure::Radius(self.radius() * factor.sqrt()),
            CircleScaling::Radius => Measure::Radius(self.radius() * factor),
            CircleScaling::Circumference => Measure::Circumference(self.circumference() * factor),
        };

        // Über- oder Unterlauf darf keinen ungültigen Kreis hinterlassen
        match measure {
            Measure::Radius(r) => ensure_positive("Radius", r)?,
            Measure::Circumference(c) => ensure_positive("Circumference", c)?,
        };

        debug!(factor, %mode, from = ?self.measure, to = ?measure, "scaling circle");
        self.measure = measure;
        Ok(())
    }
}

impl Shape for Circle {
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
        PI * self.radius().powi(2)
    }

    fn perimeter(&self) -> f64 {
        self.circumference()
    }

    fn scale(&mut self, factor: f64, how: &str) -> ShapeResult<()> {
        let mode = how.parse::<CircleScaling>()?;
        self.scale_by(factor, mode)
    }

    fn validate_sides(&self, _sides: &[f64]) -> ShapeResult<()> {
        Err(ShapeError::SidesNotSupported { shape: self.kind() })
    }

    fn validate_angles(&self, _angles: &[f64]) -> ShapeResult<()> {
        Err(ShapeError::AnglesNotSupported { shape: self.kind() })
    }

    fn describe(&self) -> String {
        self.to_string()
    }

    fn repr(&self) -> String {
        format!(
            "Circle(name={:?}, unit={:?}, color={}, radius={:?}, circumference={:?}, area={:?})",
            self.name(),
            self.unit(),
            self.color().repr(),
            self.radius(),
            self.circumference(),
            self.area()
        )
    }
}

/// Zwei Kreise sind gleich, wenn Attribute und Radius übereinstimmen.
impl PartialEq for Circle {
    fn eq(&self, other: &Self) -> bool {
        self.attributes == other.attributes && self.radius() == other.radius()
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = self.unit();
        write!(
            f,
            "{} the Circle: r = {} {unit}, d = {} {unit}, C = {} {unit}, color {}",
            self.name(),
            self.radius(),
            self.diameter(),
            self.circumference(),
            self.color()
        )
    }
}
