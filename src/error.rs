// src/error.rs
use thiserror::Error;

/// Grobe Fehlerklasse, nach der Aufrufer unterscheiden können.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Wert hat die falsche Art (keine endliche Zahl, kein Ganzzahl-Kanal, Form ohne Seiten)
    Type,
    /// Wert hat die richtige Art, verletzt aber einen Bereich oder eine Invariante
    Value,
    /// Konstruktor mit sich ausschließenden Argumenten falsch aufgerufen
    Argument,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShapeError {
    #[error("{what} must be numeric, received {value}")]
    NotFinite { what: &'static str, value: f64 },

    #[error("{what} must be greater than 0, received {value}")]
    NonPositive { what: &'static str, value: f64 },

    #[error("Color channel '{channel}' must be an integer, received {value}")]
    ChannelNotIntegral { channel: &'static str, value: f64 },

    #[error("Color channel '{channel}' must be between 0 and 255, received {value}")]
    ChannelOutOfRange { channel: &'static str, value: i64 },

    #[error("{shape} does not have sides")]
    SidesNotSupported { shape: &'static str },

    #[error("{shape} does not have angles")]
    AnglesNotSupported { shape: &'static str },

    #[error("Got {actual} {what}, expected {expected}")]
    WrongCount {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("All sides of a {shape} must be identical, received {sides:?}")]
    UnequalSides {
        shape: &'static str,
        sides: Vec<f64>,
    },

    #[error("{shape} angles must all be {expected} degrees, received {angles:?}")]
    InvalidAngles {
        shape: &'static str,
        expected: f64,
        angles: Vec<f64>,
    },

    #[error("scale() expects 'how' to be one of: {expected}, but received {how:?}")]
    UnknownScaling { how: String, expected: &'static str },

    #[error("{shape}() expects one of {options}, but received {received}")]
    ConflictingArguments {
        shape: &'static str,
        options: &'static str,
        received: &'static str,
    },

    #[error("{what} label must not be blank, received {value:?}")]
    BlankLabel { what: &'static str, value: String },
}

impl ShapeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFinite { .. }
            | Self::ChannelNotIntegral { .. }
            | Self::SidesNotSupported { .. }
            | Self::AnglesNotSupported { .. } => ErrorKind::Type,
            Self::NonPositive { .. }
            | Self::ChannelOutOfRange { .. }
            | Self::WrongCount { .. }
            | Self::UnequalSides { .. }
            | Self::InvalidAngles { .. }
            | Self::UnknownScaling { .. }
            | Self::BlankLabel { .. } => ErrorKind::Value,
            Self::ConflictingArguments { .. } => ErrorKind::Argument,
        }
    }
}

pub type ShapeResult<T> = Result<T, ShapeError>;
