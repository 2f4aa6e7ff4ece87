//! Liang-Barsky parametric line clipping.
//!
//! The segment is written as `P(u) = p1 + u * d` with `d = p2 - p1` and
//! `u` in `[0, 1]`. Each window edge gives a constraint `p * u <= q`:
//!
//! ```text
//! edge    p      q
//! left   -dx    p1.x - min.x
//! right   dx    max.x - p1.x
//! bottom -dy    p1.y - min.y
//! top     dy    max.y - p1.y
//! ```
//!
//! `p < 0` means the segment enters that half-plane as `u` grows, so
//! `q / p` raises the lower bound `u1`; `p > 0` means it exits, so `q / p`
//! lowers the upper bound `u2`. `p == 0` means the segment runs parallel to
//! the edge and is either entirely inside (`q >= 0`) or entirely outside.
//!
//! The zero test is exact. No tolerance is applied to near-parallel segments.

use super::LineClipper;
use crate::math::vec2::Vec2;
use crate::shape::Segment;
use crate::window::ClipWindow;

/// Line clipper using the Liang-Barsky algorithm.
#[derive(Debug, Clone, Copy, Default)]
pub struct LiangBarsky;

impl LiangBarsky {
    pub fn new() -> Self {
        Self
    }

    /// Returns the admissible parameter interval `[u1, u2]` for `p1 -> p2`,
    /// or `None` if it is empty.
    pub fn parameter_interval(p1: Vec2, p2: Vec2, window: &ClipWindow) -> Option<(f32, f32)> {
        let (u1, u2) = Self::interval(p1, p2, window)?;
        Some((u1 as f32, u2 as f32))
    }

    /// Computes the interval in `f64`. `p2 - p1` can overflow `f32` even when
    /// both endpoints are finite.
    fn interval(p1: Vec2, p2: Vec2, window: &ClipWindow) -> Option<(f64, f64)> {
        let (min, max) = (window.min(), window.max());
        let (x1, y1) = (p1.x as f64, p1.y as f64);
        let dx = p2.x as f64 - x1;
        let dy = p2.y as f64 - y1;

        let constraints = [
            (-dx, x1 - min.x as f64),
            (dx, max.x as f64 - x1),
            (-dy, y1 - min.y as f64),
            (dy, max.y as f64 - y1),
        ];

        let (u1, u2) = constraints
            .iter()
            .try_fold((0.0f64, 1.0f64), |(u1, u2), &(p, q)| {
                if p == 0.0 {
                    // Parallel to this edge
                    return if q < 0.0 { None } else { Some((u1, u2)) };
                }

                let r = q / p;
                if p < 0.0 {
                    Some((u1.max(r), u2))
                } else {
                    Some((u1, u2.min(r)))
                }
            })?;

        if u1 > u2 {
            return None;
        }

        Some((u1, u2))
    }

    /// Evaluates `P(u)` in `f64`.
    fn point_at(p1: Vec2, p2: Vec2, u: f64) -> Vec2 {
        let (x1, y1) = (p1.x as f64, p1.y as f64);
        let x = x1 + (p2.x as f64 - x1) * u;
        let y = y1 + (p2.y as f64 - y1) * u;
        Vec2::new(x as f32, y as f32)
    }
}

impl LineClipper for LiangBarsky {
    fn clip_line(&self, p1: Vec2, p2: Vec2, window: &ClipWindow) -> Option<Segment> {
        if !p1.is_finite() || !p2.is_finite() {
            return None;
        }

        let (u1, u2) = Self::interval(p1, p2, window)?;
        let start = Self::point_at(p1, p2, u1);
        let end = Self::point_at(p1, p2, u2);

        Some(Segment::new(start, end))
    }
}
