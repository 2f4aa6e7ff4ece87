//! Clipping against an axis-aligned rectangular window.
//!
//! Three independent algorithms are provided:
//!
//! - [`CohenSutherland`]: region-code line clipping. Classifies endpoints with
//!   a 4-bit outcode and pulls outside endpoints onto violated edges.
//! - [`LiangBarsky`]: parametric line clipping. Narrows the interval
//!   `[u1, u2]` of `P(u) = p1 + u (p2 - p1)` against the four half-planes.
//! - [`SutherlandHodgman`]: convex polygon clipping, one window edge at a time.
//!
//! The two line clippers are interchangeable behind [`LineClipper`] and can be
//! swapped at runtime through [`LineClipperDispatcher`].

pub mod cohen_sutherland;
pub mod liang_barsky;
pub mod sutherland_hodgman;

pub use cohen_sutherland::{CohenSutherland, OutCode};
pub use liang_barsky::LiangBarsky;
pub use sutherland_hodgman::{ClipEdge, SutherlandHodgman};

use std::fmt;

use crate::math::vec2::Vec2;
use crate::shape::Segment;
use crate::window::ClipWindow;

/// Trait for line clipping algorithms.
pub trait LineClipper {
    /// Clip the segment `p1 -> p2` to `window`.
    ///
    /// Returns the visible part with its endpoints in `p1`/`p2` order, or
    /// `None` if the segment misses the window entirely.
    fn clip_line(&self, p1: Vec2, p2: Vec2, window: &ClipWindow) -> Option<Segment>;

    /// Convenience wrapper over [`LineClipper::clip_line`] for a [`Segment`].
    fn clip_segment(&self, segment: &Segment, window: &ClipWindow) -> Option<Segment> {
        self.clip_line(segment.start, segment.end, window)
    }
}

/// Available line clipping algorithms.
///
/// Can be changed at runtime via `ClipEngine::set_line_algorithm`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineAlgorithm {
    /// Region-code clipper. Cheap trivial accept/reject for segments that are
    /// entirely inside or share an outside half-plane.
    #[default]
    CohenSutherland,
    /// Parametric clipper. Fixed amount of work per segment, no iteration.
    LiangBarsky,
}

impl fmt::Display for LineAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineAlgorithm::CohenSutherland => write!(f, "CohenSutherland"),
            LineAlgorithm::LiangBarsky => write!(f, "LiangBarsky"),
        }
    }
}

/// Holds both line clippers and forwards to the active one.
#[derive(Debug, Clone, Default)]
pub struct LineClipperDispatcher {
    cohen_sutherland: CohenSutherland,
    liang_barsky: LiangBarsky,
    active: LineAlgorithm,
}

impl LineClipperDispatcher {
    pub fn new(algorithm: LineAlgorithm) -> Self {
        Self {
            cohen_sutherland: CohenSutherland::new(),
            liang_barsky: LiangBarsky::new(),
            active: algorithm,
        }
    }

    pub fn set_algorithm(&mut self, algorithm: LineAlgorithm) {
        self.active = algorithm;
    }

    pub fn active_algorithm(&self) -> LineAlgorithm {
        self.active
    }
}

impl LineClipper for LineClipperDispatcher {
    #[inline]
    fn clip_line(&self, p1: Vec2, p2: Vec2, window: &ClipWindow) -> Option<Segment> {
        match self.active {
            LineAlgorithm::CohenSutherland => self.cohen_sutherland.clip_line(p1, p2, window),
            LineAlgorithm::LiangBarsky => self.liang_barsky.clip_line(p1, p2, window),
        }
    }
}
