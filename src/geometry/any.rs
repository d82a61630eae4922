// src/geometry/any.rs

use super::circle::Circle;
use super::shape::{Shape, ShapeAttributes};
use super::square::Square;
use crate::error::ShapeResult;
use crate::types::Color;
use enum_dispatch::enum_dispatch;
use std::cmp::Ordering;
use std::fmt;

// Signaturen werden von enum_dispatch kopiert, daher die Importe oben.
/// Alle bekannten Formen als geschlossene Menge, z.B. für gemischte Listen.
#[enum_dispatch(Shape)]
#[derive(Debug, Clone, PartialEq)]
pub enum AnyShape {
    Circle,
    Square,
}

impl AnyShape {
    /// Sortiert aufsteigend nach Fläche
    pub fn sort_by_area(shapes: &mut [AnyShape]) {
        shapes.sort_by(|a, b| a.area().total_cmp(&b.area()));
    }

    /// Form mit der größten Fläche
    pub fn largest(shapes: &[AnyShape]) -> Option<&AnyShape> {
        shapes
            .iter()
            .max_by(|a, b| a.cmp_area(*b).unwrap_or(Ordering::Equal))
    }

    pub fn total_area(shapes: &[AnyShape]) -> f64 {
        shapes.iter().map(Shape::area).sum()
    }
}

impl fmt::Display for AnyShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
