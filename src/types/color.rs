// src/types/color.rs
use crate::error::{ShapeError, ShapeResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unveränderliches RGB-Tripel. Kanäle werden nie einzeln geändert,
/// eine Form bekommt immer eine komplett neue Farbe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawColor")]
pub struct Color {
    red: u8,
    green: u8,
    blue: u8,
}

/// Ungeprüfte Kanalwerte, wie sie aus einer Konfiguration kommen
#[derive(Deserialize)]
struct RawColor {
    red: i64,
    green: i64,
    blue: i64,
}

impl TryFrom<RawColor> for Color {
    type Error = ShapeError;

    fn try_from(raw: RawColor) -> Result<Self, Self::Error> {
        Self::new(raw.red, raw.green, raw.blue)
    }
}

impl Color {
    pub const WHITE: Color = Color {
        red: 255,
        green: 255,
        blue: 255,
    };
    pub const BLACK: Color = Color {
        red: 0,
        green: 0,
        blue: 0,
    };

    /// Erstellt eine Farbe aus ganzzahligen Kanälen im Bereich [0, 255]
    pub fn new(red: i64, green: i64, blue: i64) -> ShapeResult<Self> {
        Ok(Self {
            red: channel("red", red)?,
            green: channel("green", green)?,
            blue: channel("blue", blue)?,
        })
    }

    /// Erstellt eine Farbe aus Fließkommawerten; jeder Kanal muss ganzzahlig sein.
    pub fn from_f64(red: f64, green: f64, blue: f64) -> ShapeResult<Self> {
        Self::new(
            integral("red", red)?,
            integral("green", green)?,
            integral("blue", blue)?,
        )
    }

    pub fn red(&self) -> u8 {
        self.red
    }

    pub fn green(&self) -> u8 {
        self.green
    }

    pub fn blue(&self) -> u8 {
        self.blue
    }

    /// Eindeutige Form, aus der sich die Farbe rekonstruieren lässt
    pub fn repr(&self) -> String {
        format!(
            "Color(red={}, green={}, blue={})",
            self.red, self.green, self.blue
        )
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self { red, green, blue }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.red, self.green, self.blue)
    }
}

fn channel(name: &'static str, value: i64) -> ShapeResult<u8> {
    u8::try_from(value).map_err(|_| ShapeError::ChannelOutOfRange {
        channel: name,
        value,
    })
}

fn integral(name: &'static str, value: f64) -> ShapeResult<i64> {
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(ShapeError::ChannelNotIntegral {
            channel: name,
            value,
        });
    }
    // Ganzzahlige Werte außerhalb von i64 landen über die Sättigung im Bereichsfehler
    Ok(value as i64)
}
