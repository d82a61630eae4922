// src/geometry/shape.rs

use crate::config::ShapeDefaults;
use crate::error::ShapeResult;
use crate::types::Color;
use crate::utils::validation::ensure_label;
use enum_dispatch::enum_dispatch;
use std::cmp::Ordering;
use std::fmt;
use tracing::debug;

/// Attribute, die jede Form teilt. Konkrete Formen enthalten diese Struktur
/// und legen ihre eigenen Felder daneben.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeAttributes {
    name: String,
    color: Color,
    unit: String,
    sides: Vec<f64>,
    angles: Vec<f64>,
}

impl ShapeAttributes {
    /// Setzt die gemeinsamen Startwerte: Name = Typname, keine Seiten, keine Winkel.
    pub fn new(kind: &'static str, defaults: &ShapeDefaults) -> ShapeResult<Self> {
        defaults.validate()?;

        Ok(Self {
            name: kind.to_string(),
            color: defaults.color,
            unit: defaults.unit.clone(),
            sides: Vec::new(),
            angles: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn sides(&self) -> &[f64] {
        &self.sides
    }

    pub fn angles(&self) -> &[f64] {
        &self.angles
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Eine leere Einheit wird abgelehnt, die bisherige bleibt dann erhalten.
    pub fn set_unit(&mut self, unit: impl Into<String>) -> ShapeResult<()> {
        self.unit = ensure_label("Unit", unit)?;
        Ok(())
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    // Nur nach erfolgreicher Validierung aufrufen; ersetzt die ganze Folge auf einmal.
    pub(crate) fn replace_sides(&mut self, sides: Vec<f64>) {
        self.sides = sides;
    }

    pub(crate) fn replace_angles(&mut self, angles: Vec<f64>) {
        self.angles = angles;
    }
}

/// Gemeinsamer Vertrag aller 2D-Formen.
#[enum_dispatch]
pub trait Shape {
    /// Name des konkreten Typs, z.B. "Circle"
    fn kind(&self) -> &'static str;

    fn attributes(&self) -> &ShapeAttributes;

    fn attributes_mut(&mut self) -> &mut ShapeAttributes;

    /// Fläche in Quadrat-`unit`
    fn area(&self) -> f64;

    /// Umfang. Standard für Polygone ist die Summe der Seiten.
    fn perimeter(&self) -> f64 {
        self.attributes().sides().iter().sum()
    }

    /// Skaliert die Form an Ort und Stelle. `how` wählt die Bezugsgröße
    /// (Groß-/Kleinschreibung egal); unbekannte Werte sind ein Fehler.
    fn scale(&mut self, factor: f64, how: &str) -> ShapeResult<()>;

    fn validate_sides(&self, sides: &[f64]) -> ShapeResult<()>;

    fn validate_angles(&self, angles: &[f64]) -> ShapeResult<()>;

    /// Lesbare Zusammenfassung für Benutzer
    fn describe(&self) -> String;

    /// Eindeutige Entwicklerdarstellung mit allen definierenden Feldern
    fn repr(&self) -> String;

    fn name(&self) -> &str {
        self.attributes().name()
    }

    fn color(&self) -> Color {
        self.attributes().color()
    }

    fn unit(&self) -> &str {
        self.attributes().unit()
    }

    fn sides(&self) -> &[f64] {
        self.attributes().sides()
    }

    fn angles(&self) -> &[f64] {
        self.attributes().angles()
    }

    fn set_name(&mut self, name: &str) {
        self.attributes_mut().set_name(name);
    }

    fn set_unit(&mut self, unit: &str) -> ShapeResult<()> {
        self.attributes_mut().set_unit(unit)
    }

    fn set_color(&mut self, color: Color) {
        self.attributes_mut().set_color(color);
    }

    /// Ersetzt alle Seiten, nachdem die komplette neue Folge geprüft wurde.
    fn set_sides(&mut self, sides: &[f64]) -> ShapeResult<()> {
        self.validate_sides(sides)?;
        debug!(shape = self.kind(), ?sides, "replacing sides");
        self.attributes_mut().replace_sides(sides.to_vec());
        Ok(())
    }

    /// Ersetzt alle Winkel, nachdem die komplette neue Folge geprüft wurde.
    fn set_angles(&mut self, angles: &[f64]) -> ShapeResult<()> {
        self.validate_angles(angles)?;
        debug!(shape = self.kind(), ?angles, "replacing angles");
        self.attributes_mut().replace_angles(angles.to_vec());
        Ok(())
    }

    /// Vergleicht zwei beliebige Formen nach Fläche
    fn cmp_area(&self, other: &dyn Shape) -> Option<Ordering> {
        self.area().partial_cmp(&other.area())
    }

    fn area_lt(&self, other: &dyn Shape) -> bool {
        self.area() < other.area()
    }

    fn area_gt(&self, other: &dyn Shape) -> bool {
        self.area() > other.area()
    }
}

/// Vergleicht Formen ausschließlich über ihre Fläche, unabhängig vom Typ.
#[derive(Clone, Copy)]
pub struct ByArea<'a>(pub &'a dyn Shape);

impl PartialEq for ByArea<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.0.area() == other.0.area()
    }
}

impl PartialOrd for ByArea<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.cmp_area(other.0)
    }
}

impl fmt::Debug for ByArea<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ByArea")
            .field(&self.0.kind())
            .field(&self.0.area())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Circle, Square};
    use crate::error::ErrorKind;
    use approx::assert_relative_eq;

    #[test]
    fn test_attribute_defaults() {
        let attributes = ShapeAttributes::new("Circle", &ShapeDefaults::default()).unwrap();
        assert_eq!(attributes.name(), "Circle");
        assert_eq!(attributes.unit(), "in");
        assert_eq!(attributes.color(), Color::WHITE);
        assert!(attributes.sides().is_empty());
        assert!(attributes.angles().is_empty());
    }

    #[test]
    fn test_attributes_reject_blank_unit_defaults() {
        let defaults = ShapeDefaults::default().with_unit("");
        assert!(ShapeAttributes::new("Square", &defaults).is_err());
    }

    #[test]
    fn test_by_area_across_kinds() {
        // Gleiche Fläche: Kreis mit r = 1 und Quadrat mit s = sqrt(pi)
        let circle = Circle::with_radius(1.0).unwrap();
        let square = Square::new(std::f64::consts::PI.sqrt()).unwrap();
        let small = Square::new(1.0).unwrap();

        assert!(ByArea(&small) < ByArea(&circle));
        assert!(ByArea(&circle) > ByArea(&small));
        assert!(small.area_lt(&circle));
        assert!(circle.area_gt(&small));
        assert_relative_eq!(circle.area(), square.area(), epsilon = 1e-12);
        assert_eq!(small.cmp_area(&square), Some(Ordering::Less));
    }

    #[test]
    fn test_by_area_strict_ordering_on_equal_shapes() {
        let a = Circle::with_radius(2.0).unwrap();
        let b = Circle::with_radius(2.0).unwrap();
        assert!(!(ByArea(&a) < ByArea(&b)));
        assert!(ByArea(&a) == ByArea(&b));
    }

    #[test]
    fn test_setters_through_trait_object() {
        let mut square = Square::new(2.0).unwrap();
        let shape: &mut dyn Shape = &mut square;
        shape.set_name("Tile");
        shape.set_unit("cm").unwrap();
        shape.set_color(Color::BLACK);

        assert_eq!(shape.name(), "Tile");
        assert_eq!(shape.unit(), "cm");
        assert_eq!(shape.color(), Color::BLACK);
        assert_eq!(shape.perimeter(), 8.0);
    }

    #[test]
    fn test_rejected_unit_keeps_previous() {
        let mut square = Square::new(1.0).unwrap();
        square.set_unit("cm").unwrap();

        let err = square.set_unit("").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Value);
        assert_eq!(square.unit(), "cm");

        assert!(square.clone().with_unit("  ").is_err());
        assert_eq!(square.unit(), "cm");

        let mut attributes = ShapeAttributes::new("Square", &ShapeDefaults::default()).unwrap();
        assert!(attributes.set_unit("\n").is_err());
        assert_eq!(attributes.unit(), "in");
    }
}
