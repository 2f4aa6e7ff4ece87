//! Errors produced while building clip windows.
//!
//! A segment or polygon lying fully outside the window is not an error; the
//! clippers report that through `None` or an empty polygon.

use crate::math::vec2::Vec2;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ClipError {
    #[error("clip window is inverted: min {min:?} exceeds max {max:?} on at least one axis")]
    InvertedWindow { min: Vec2, max: Vec2 },

    #[error("clip window corner has a NaN coordinate: {min:?} / {max:?}")]
    NanCoordinate { min: Vec2, max: Vec2 },

    #[error("viewport has zero size ({width}x{height})")]
    EmptyViewport { width: u32, height: u32 },
}
