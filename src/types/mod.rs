// src/types/mod.rs
pub mod color;

pub use color::*;
