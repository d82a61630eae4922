// src/lib.rs
//! Einfache 2D-Formen mit geprüften Attributen, abgeleiteter Fläche und Umfang
//! sowie gleichmäßiger Skalierung.

pub mod config;
pub mod error;
pub mod geometry;
pub mod types;
pub mod utils;

// Re-exports für einfache Verwendung
pub use error::{ErrorKind, ShapeError, ShapeResult};
pub use types::*;

// Öffentliche API
pub mod prelude {
    pub use super::{
        config::ShapeDefaults,
        error::{ErrorKind, ShapeError, ShapeResult},
        geometry::{
            AnyShape, ByArea, Circle, CircleScaling, Shape, ShapeAttributes, Square,
            SquareScaling,
        },
        types::*,
    };
}
