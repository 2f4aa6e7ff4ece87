//! The axis-aligned clip window.
//!
//! A [`ClipWindow`] always satisfies `min.x <= max.x` and `min.y <= max.y`.
//! [`ClipWindow::new`] refuses inverted corners while
//! [`ClipWindow::from_corners`] swaps them into place; [`WindowPolicy`]
//! picks between the two when the window comes from outside the crate.

use std::fmt;

use crate::error::ClipError;
use crate::math::vec2::Vec2;

/// Half the side length of the cursor-centred window, in normalized device
/// coordinates.
pub const DEFAULT_HALF_EXTENT: f32 = 0.3;

/// How corners that violate `min <= max` are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowPolicy {
    /// Swap coordinates per axis so that `min <= max`.
    #[default]
    Normalize,
    /// Fail with [`ClipError::InvertedWindow`].
    Reject,
}

impl fmt::Display for WindowPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindowPolicy::Normalize => write!(f, "Normalize"),
            WindowPolicy::Reject => write!(f, "Reject"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipWindow {
    min: Vec2,
    max: Vec2,
}

impl ClipWindow {
    /// Creates a window from its lower-left and upper-right corners.
    ///
    /// Fails if either corner has a NaN coordinate or if `min` exceeds `max`
    /// on any axis. Infinite bounds are allowed and describe an unbounded side.
    pub fn new(min: Vec2, max: Vec2) -> Result<Self, ClipError> {
        if min.is_nan() || max.is_nan() {
            return Err(ClipError::NanCoordinate { min, max });
        }
        if min.x > max.x || min.y > max.y {
            return Err(ClipError::InvertedWindow { min, max });
        }
        Ok(Self { min, max })
    }

    /// Creates a window spanning two arbitrary opposite corners.
    pub fn from_corners(a: Vec2, b: Vec2) -> Result<Self, ClipError> {
        if a.is_nan() || b.is_nan() {
            return Err(ClipError::NanCoordinate { min: a, max: b });
        }
        let (min, max) = (a.min(b), a.max(b));
        if (min, max) != (a, b) {
            log::debug!("normalized clip window corners {:?} / {:?}", a, b);
        }
        Ok(Self { min, max })
    }

    /// Creates a window from corners, handling inverted corners per `policy`.
    pub fn with_policy(min: Vec2, max: Vec2, policy: WindowPolicy) -> Result<Self, ClipError> {
        match policy {
            WindowPolicy::Normalize => Self::from_corners(min, max),
            WindowPolicy::Reject => Self::new(min, max),
        }
    }

    /// Creates a square window of the given half extent around `center`.
    pub fn centered(center: Vec2, half_extent: f32) -> Result<Self, ClipError> {
        let offset = Vec2::new(half_extent, half_extent);
        Self::from_corners(center - offset, center + offset)
    }

    /// Creates a square window around a cursor given in pixel coordinates.
    ///
    /// The cursor is mapped to normalized device coordinates, with the pixel
    /// origin at the top-left and `y` pointing down:
    ///
    /// ```text
    /// x_ndc = cursor_x / width * 2 - 1
    /// y_ndc = 1 - cursor_y / height * 2
    /// ```
    pub fn around_cursor(
        cursor_x: f64,
        cursor_y: f64,
        viewport_width: u32,
        viewport_height: u32,
        half_extent: f32,
    ) -> Result<Self, ClipError> {
        if viewport_width == 0 || viewport_height == 0 {
            return Err(ClipError::EmptyViewport {
                width: viewport_width,
                height: viewport_height,
            });
        }

        let x = (cursor_x / viewport_width as f64) * 2.0 - 1.0;
        let y = 1.0 - (cursor_y / viewport_height as f64) * 2.0;
        Self::centered(Vec2::new(x as f32, y as f32), half_extent)
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        self.min
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.max
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Vec2 {
        self.min.lerp(self.max, 0.5)
    }

    /// Returns true if `point` lies inside the window or on its boundary.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Corners in counter-clockwise order starting at `min`, for drawing the
    /// window as a line loop.
    pub fn outline(&self) -> [Vec2; 4] {
        [
            self.min,
            Vec2::new(self.max.x, self.min.y),
            self.max,
            Vec2::new(self.min.x, self.max.y),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn new_accepts_ordered_corners() {
        let window = ClipWindow::new(Vec2::new(-1.0, -2.0), Vec2::new(1.0, 2.0)).unwrap();
        assert_eq!(window.width(), 2.0);
        assert_eq!(window.height(), 4.0);
        assert_eq!(window.center(), Vec2::ZERO);
    }

    #[test]
    fn new_rejects_inverted_corners() {
        let err = ClipWindow::new(Vec2::new(1.0, -1.0), Vec2::new(-1.0, 1.0)).unwrap_err();
        assert!(matches!(err, ClipError::InvertedWindow { .. }));
    }

    #[test]
    fn degenerate_window_is_allowed() {
        // A zero-area window is still ordered.
        let window = ClipWindow::new(Vec2::ZERO, Vec2::ZERO).unwrap();
        assert!(window.contains(Vec2::ZERO));
    }

    #[test]
    fn nan_corner_is_always_rejected() {
        let nan = Vec2::new(f32::NAN, 0.0);
        for policy in [WindowPolicy::Normalize, WindowPolicy::Reject] {
            let err = ClipWindow::with_policy(nan, Vec2::ONE, policy).unwrap_err();
            assert!(matches!(err, ClipError::NanCoordinate { .. }));
        }
    }

    #[test]
    fn from_corners_normalizes_per_axis() {
        let (a, b) = (Vec2::new(1.0, -1.0), Vec2::new(-1.0, 1.0));
        let window = ClipWindow::from_corners(a, b).unwrap();
        assert_eq!(window.min(), Vec2::new(-1.0, -1.0));
        assert_eq!(window.max(), Vec2::new(1.0, 1.0));
    }

    #[test]
    fn policy_selects_constructor() {
        let a = Vec2::ONE;
        let b = Vec2::new(-1.0, -1.0);
        assert!(ClipWindow::with_policy(a, b, WindowPolicy::Normalize).is_ok());
        assert!(ClipWindow::with_policy(a, b, WindowPolicy::Reject).is_err());
        assert_eq!(WindowPolicy::default(), WindowPolicy::Normalize);
    }

    #[test]
    fn contains_includes_boundary() {
        let window = ClipWindow::new(Vec2::new(-1.0, -1.0), Vec2::ONE).unwrap();
        assert!(window.contains(Vec2::new(1.0, -1.0)));
        assert!(window.contains(Vec2::ZERO));
        assert!(!window.contains(Vec2::new(1.0001, 0.0)));
    }

    #[test]
    fn cursor_at_viewport_center_maps_to_origin() {
        let window = ClipWindow::around_cursor(800.0, 450.0, 1600, 900, 0.3).unwrap();
        assert_relative_eq!(window.center(), Vec2::ZERO, epsilon = 1e-6);
        assert_relative_eq!(window.width(), 0.6, epsilon = 1e-6);
    }

    #[test]
    fn cursor_top_left_maps_to_ndc_corner() {
        let window = ClipWindow::around_cursor(0.0, 0.0, 1600, 900, DEFAULT_HALF_EXTENT).unwrap();
        assert_relative_eq!(window.center(), Vec2::new(-1.0, 1.0), epsilon = 1e-6);
        assert_relative_eq!(window.min(), Vec2::new(-1.3, 0.7), epsilon = 1e-6);
    }

    #[test]
    fn zero_sized_viewport_is_an_error() {
        let err = ClipWindow::around_cursor(0.0, 0.0, 0, 900, 0.3).unwrap_err();
        assert_eq!(err, ClipError::EmptyViewport { width: 0, height: 900 });
    }

    #[test]
    fn outline_walks_the_corners() {
        let window = ClipWindow::new(Vec2::new(0.0, 0.0), Vec2::new(2.0, 1.0)).unwrap();
        assert_eq!(
            window.outline(),
            [
                Vec2::new(0.0, 0.0),
                Vec2::new(2.0, 0.0),
                Vec2::new(2.0, 1.0),
                Vec2::new(0.0, 1.0),
            ]
        );
    }
}
