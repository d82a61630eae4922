// src/geometry/mod.rs

// Der Trait muss vor den Formen stehen, die ihn per enum_dispatch verwenden
pub mod shape; // Der Shape-Trait und die gemeinsamen Attribute

pub mod circle;
pub mod square;

pub mod any; // Geschlossene Menge aller Formen

pub use self::any::AnyShape;
pub use self::circle::{Circle, CircleScaling};
pub use self::shape::{ByArea, Shape, ShapeAttributes};
pub use self::square::{Square, SquareScaling};
