//! Cohen-Sutherland region-code line clipping.
//!
//! Each endpoint is classified into one of nine regions around the window
//! with a 4-bit outcode:
//!
//! ```text
//!        |        |
//!  1001  |  1000  | 1010
//!        |        |
//! -------+--------+-------- max.y
//!        |        |
//!  0001  |  0000  | 0010
//!        |        |
//! -------+--------+-------- min.y
//!        |        |
//!  0101  |  0100  | 0110
//!        |        |
//!      min.x    max.x
//! ```
//!
//! Both codes zero means the segment is inside (accept). A nonzero bitwise
//! AND means both endpoints are beyond the same edge (reject). Otherwise an
//! outside endpoint is moved onto one violated edge and reclassified, and the
//! test repeats.
//!
//! A horizontal segment can never carry TOP or BOTTOM on only one endpoint
//! without the other sharing it, and likewise for vertical segments and
//! LEFT/RIGHT, so the edge intersection never divides by a zero delta.

use std::ops::{BitAnd, BitOr, BitOrAssign};

use super::LineClipper;
use crate::math::vec2::Vec2;
use crate::shape::Segment;
use crate::window::ClipWindow;

/// Endpoint replacements allowed before a segment is given up on.
///
/// Exact arithmetic needs at most four (each endpoint crosses at most one
/// vertical and one horizontal edge).
const MAX_CLIP_STEPS: usize = 8;

/// Region code of a point relative to the clip window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct OutCode(u8);

impl OutCode {
    pub const INSIDE: Self = Self(0);
    pub const LEFT: Self = Self(1);
    pub const RIGHT: Self = Self(2);
    pub const BOTTOM: Self = Self(4);
    pub const TOP: Self = Self(8);

    /// Classifies `point` against `window`.
    ///
    /// LEFT and RIGHT are mutually exclusive, as are BOTTOM and TOP. Points on
    /// the boundary count as inside.
    pub fn compute(point: Vec2, window: &ClipWindow) -> Self {
        let (min, max) = (window.min(), window.max());
        let mut code = Self::INSIDE;

        if point.x < min.x {
            code |= Self::LEFT;
        } else if point.x > max.x {
            code |= Self::RIGHT;
        }

        if point.y < min.y {
            code |= Self::BOTTOM;
        } else if point.y > max.y {
            code |= Self::TOP;
        }

        code
    }

    #[inline]
    pub fn bits(self) -> u8 {
        self.0
    }

    #[inline]
    pub fn is_inside(self) -> bool {
        self.0 == 0
    }

    /// Returns true if every bit of `other` is set in `self`.
    #[inline]
    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for OutCode {
    type Output = OutCode;

    fn bitor(self, rhs: OutCode) -> Self::Output {
        OutCode(self.0 | rhs.0)
    }
}

impl BitOrAssign for OutCode {
    fn bitor_assign(&mut self, rhs: OutCode) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for OutCode {
    type Output = OutCode;

    fn bitand(self, rhs: OutCode) -> Self::Output {
        OutCode(self.0 & rhs.0)
    }
}

/// Line clipper using the Cohen-Sutherland algorithm.
#[derive(Debug, Clone, Copy, Default)]
pub struct CohenSutherland;

impl CohenSutherland {
    pub fn new() -> Self {
        Self
    }

    /// Intersects the line through `p1` and `p2` with one edge violated by
    /// `code`.
    ///
    /// Edges are tried in the order TOP, BOTTOM, RIGHT, LEFT and only the
    /// first match is used. `code` must be nonzero. The arithmetic runs in
    /// `f64` since the delta between two finite `f32` endpoints can overflow.
    fn intersect(p1: Vec2, p2: Vec2, code: OutCode, window: &ClipWindow) -> Vec2 {
        let (min, max) = (window.min(), window.max());
        let (x1, y1) = (p1.x as f64, p1.y as f64);
        let dx = p2.x as f64 - x1;
        let dy = p2.y as f64 - y1;

        if code.contains(OutCode::TOP) {
            Vec2::new((x1 + dx * (max.y as f64 - y1) / dy) as f32, max.y)
        } else if code.contains(OutCode::BOTTOM) {
            Vec2::new((x1 + dx * (min.y as f64 - y1) / dy) as f32, min.y)
        } else if code.contains(OutCode::RIGHT) {
            Vec2::new(max.x, (y1 + dy * (max.x as f64 - x1) / dx) as f32)
        } else {
            Vec2::new(min.x, (y1 + dy * (min.x as f64 - x1) / dx) as f32)
        }
    }

    /// Runs the accept/reject/replace loop for at most `limit` endpoint
    /// replacements.
    fn clip_bounded(p1: Vec2, p2: Vec2, window: &ClipWindow, limit: usize) -> Option<Segment> {
        let mut start = (p1, OutCode::compute(p1, window));
        let mut end = (p2, OutCode::compute(p2, window));

        for step in 0..=limit {
            let (code1, code2) = (start.1, end.1);

            if (code1 | code2).is_inside() {
                return Some(Segment::new(start.0, end.0));
            }
            if !(code1 & code2).is_inside() {
                return None;
            }
            if step == limit {
                break;
            }

            // Pull in p1 first when both endpoints are outside.
            if !code1.is_inside() {
                let point = Self::intersect(start.0, end.0, code1, window);
                start = (point, OutCode::compute(point, window));
            } else {
                let point = Self::intersect(start.0, end.0, code2, window);
                end = (point, OutCode::compute(point, window));
            }
        }

        log::warn!(
            "Cohen-Sutherland gave up on {:?} -> {:?} after {} steps",
            p1,
            p2,
            limit
        );
        None
    }
}

impl LineClipper for CohenSutherland {
    fn clip_line(&self, p1: Vec2, p2: Vec2, window: &ClipWindow) -> Option<Segment> {
        if !p1.is_finite() || !p2.is_finite() {
            return None;
        }

        Self::clip_bounded(p1, p2, window, MAX_CLIP_STEPS)
    }
}
