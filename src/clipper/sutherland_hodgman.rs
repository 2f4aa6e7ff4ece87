//! Sutherland-Hodgman polygon clipping against the window edges.
//!
//! The window is treated as the intersection of four half-planes. The
//! polygon is clipped against each one in turn (left, right, bottom, top),
//! every pass consuming the previous pass's output. This is exact for a
//! convex subject polygon; concave input can produce degenerate bridging
//! edges and is not supported.

use crate::math::vec2::Vec2;
use crate::shape::Polygon;
use crate::window::ClipWindow;

/// The four boundaries of the clip window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClipEdge {
    /// Left boundary: x >= min.x
    Left,
    /// Right boundary: x <= max.x
    Right,
    /// Bottom boundary: y >= min.y
    Bottom,
    /// Top boundary: y <= max.y
    Top,
}

impl ClipEdge {
    /// Returns true if `point` is on the visible side of this edge.
    /// Points exactly on the boundary are inside.
    pub fn inside(&self, point: Vec2, window: &ClipWindow) -> bool {
        match self {
            Self::Left => point.x >= window.min().x,
            Self::Right => point.x <= window.max().x,
            Self::Bottom => point.y >= window.min().y,
            Self::Top => point.y <= window.max().y,
        }
    }

    /// Returns the point where `p1 -> p2` crosses this edge's boundary line.
    ///
    /// Only meaningful when `p1` and `p2` lie on opposite sides of the edge;
    /// a segment parallel to the boundary divides by zero. Computed in `f64`
    /// so that far-apart finite vertices cannot overflow the deltas.
    pub fn intersect(&self, p1: Vec2, p2: Vec2, window: &ClipWindow) -> Vec2 {
        let (min, max) = (window.min(), window.max());
        let (x1, y1) = (p1.x as f64, p1.y as f64);
        let dx = p2.x as f64 - x1;
        let dy = p2.y as f64 - y1;

        match self {
            Self::Left => Vec2::new(min.x, (y1 + dy * (min.x as f64 - x1) / dx) as f32),
            Self::Right => Vec2::new(max.x, (y1 + dy * (max.x as f64 - x1) / dx) as f32),
            Self::Bottom => Vec2::new((x1 + dx * (min.y as f64 - y1) / dy) as f32, min.y),
            Self::Top => Vec2::new((x1 + dx * (max.y as f64 - y1) / dy) as f32, max.y),
        }
    }
}

/// Clips convex polygons against a rectangular window.
///
/// Stateless; the edge order is fixed at construction.
#[derive(Debug, Clone)]
pub struct SutherlandHodgman {
    edges: [ClipEdge; 4],
}

impl SutherlandHodgman {
    pub fn new() -> Self {
        Self {
            edges: [ClipEdge::Left, ClipEdge::Right, ClipEdge::Bottom, ClipEdge::Top],
        }
    }

    /// Clip a vertex sequence against a single edge.
    ///
    /// Walks the polygon as a cycle, starting with the last vertex as the
    /// previous one so the closing edge is handled:
    ///
    /// - outside -> inside: emit the crossing, then the vertex
    /// - inside -> inside: emit the vertex
    /// - inside -> outside: emit the crossing
    /// - outside -> outside: emit nothing
    pub fn clip_against_edge(input: &[Vec2], edge: ClipEdge, window: &ClipWindow) -> Vec<Vec2> {
        let Some(&last) = input.last() else {
            return Vec::new();
        };

        let mut output = Vec::with_capacity(input.len() + 1);
        let mut previous = last;
        let mut previous_inside = edge.inside(previous, window);

        for &current in input {
            let current_inside = edge.inside(current, window);

            if current_inside {
                if !previous_inside {
                    output.push(edge.intersect(previous, current, window));
                }
                output.push(current);
            } else if previous_inside {
                output.push(edge.intersect(previous, current, window));
            }

            previous = current;
            previous_inside = current_inside;
        }

        output
    }

    /// Clip a polygon against all four window edges.
    ///
    /// Returns an empty polygon if the input is empty, lies entirely outside
    /// the window, or has a non-finite vertex.
    pub fn clip_polygon(&self, vertices: &[Vec2], window: &ClipWindow) -> Polygon {
        if vertices.iter().any(|v| !v.is_finite()) {
            return Polygon::empty();
        }

        let mut result = vertices.to_vec();

        for &edge in &self.edges {
            if result.is_empty() {
                break;
            }
            result = Self::clip_against_edge(&result, edge, window);
        }

        Polygon::new(result)
    }
}

impl Default for SutherlandHodgman {
    fn default() -> Self {
        Self::new()
    }
}
