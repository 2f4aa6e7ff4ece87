//! Clipping of 2D line segments and convex polygons against an axis-aligned
//! rectangular window.
//!
//! Three classical algorithms are provided, each usable on its own:
//!
//! - Cohen-Sutherland region-code line clipping
//! - Liang-Barsky parametric line clipping
//! - Sutherland-Hodgman polygon clipping
//!
//! A segment or polygon that misses the window is not an error: line
//! clippers return `None` and the polygon clipper returns an empty polygon.
//!
//! # Quick Start
//!
//! ```
//! use rectclip::prelude::*;
//!
//! let window = ClipWindow::new(Vec2::new(-1.0, -1.0), Vec2::new(1.0, 1.0))?;
//! let clipped = CohenSutherland::new()
//!     .clip_line(Vec2::new(-2.0, 0.0), Vec2::new(2.0, 0.0), &window)
//!     .expect("segment crosses the window");
//! assert_eq!(clipped.start, Vec2::new(-1.0, 0.0));
//! # Ok::<(), rectclip::ClipError>(())
//! ```

// Public API - exposed to library consumers
pub mod clipper;
pub mod engine;
pub mod error;
pub mod math;
pub mod scene;
pub mod shape;
pub mod window;

// Re-export commonly needed types at crate root for convenience
pub use clipper::{
    ClipEdge, CohenSutherland, LiangBarsky, LineAlgorithm, LineClipper, OutCode,
    SutherlandHodgman,
};
pub use engine::ClipEngine;
pub use error::ClipError;
pub use math::vec2::Vec2;
pub use shape::{Polygon, Segment, Shape};
pub use window::{ClipWindow, WindowPolicy};

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use rectclip::prelude::*;
/// ```
pub mod prelude {
    // Clippers
    pub use crate::clipper::{
        ClipEdge, CohenSutherland, LiangBarsky, LineAlgorithm, LineClipper,
        LineClipperDispatcher, OutCode, SutherlandHodgman,
    };

    // Engine
    pub use crate::engine::ClipEngine;

    // Geometry
    pub use crate::math::vec2::Vec2;
    pub use crate::shape::{Polygon, Segment, Shape};
    pub use crate::window::{ClipWindow, WindowPolicy, DEFAULT_HALF_EXTENT};

    // Errors
    pub use crate::error::ClipError;
}

/// Clips `p1 -> p2` to the window spanned by `min` and `max` with the
/// Cohen-Sutherland algorithm.
///
/// Inverted corners are normalized. Returns `None` if the segment misses the
/// window or any input is NaN.
pub fn clip_line_cohen_sutherland(
    p1: Vec2,
    p2: Vec2,
    min: Vec2,
    max: Vec2,
) -> Option<(Vec2, Vec2)> {
    let window = ClipWindow::from_corners(min, max).ok()?;
    let clipped = CohenSutherland::new().clip_line(p1, p2, &window)?;
    Some(clipped.into())
}

/// Clips `p1 -> p2` to the window spanned by `min` and `max` with the
/// Liang-Barsky algorithm.
///
/// Inverted corners are normalized. Returns `None` if the segment misses the
/// window or any input is NaN.
pub fn clip_line_liang_barsky(p1: Vec2, p2: Vec2, min: Vec2, max: Vec2) -> Option<(Vec2, Vec2)> {
    let window = ClipWindow::from_corners(min, max).ok()?;
    let clipped = LiangBarsky::new().clip_line(p1, p2, &window)?;
    Some(clipped.into())
}

/// Clips a convex polygon to the window spanned by `min` and `max` with the
/// Sutherland-Hodgman algorithm.
///
/// Inverted corners are normalized. Returns an empty vector if the polygon
/// misses the window or any input is NaN.
pub fn clip_polygon_sutherland_hodgman(polygon: &[Vec2], min: Vec2, max: Vec2) -> Vec<Vec2> {
    match ClipWindow::from_corners(min, max) {
        Ok(window) => SutherlandHodgman::new()
            .clip_polygon(polygon, &window)
            .into_vertices(),
        Err(_) => Vec::new(),
    }
}
