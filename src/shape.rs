//! Segment and polygon value types consumed and produced by the clippers.

use approx::{AbsDiffEq, RelativeEq};

use crate::math::vec2::Vec2;

/// An ordered pair of points.
///
/// The order only affects the direction of parameterization; the clipped
/// geometry is the same either way.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub start: Vec2,
    pub end: Vec2,
}

impl Segment {
    pub const fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f32 {
        (self.end - self.start).magnitude()
    }

    /// Returns the point at parameter `u`, where `u = 0` is `start` and
    /// `u = 1` is `end`.
    pub fn point_at(&self, u: f32) -> Vec2 {
        self.start + (self.end - self.start) * u
    }

    pub fn reversed(&self) -> Self {
        Self::new(self.end, self.start)
    }
}

impl From<(Vec2, Vec2)> for Segment {
    fn from((start, end): (Vec2, Vec2)) -> Self {
        Self::new(start, end)
    }
}

impl From<Segment> for (Vec2, Vec2) {
    fn from(segment: Segment) -> Self {
        (segment.start, segment.end)
    }
}

impl AbsDiffEq for Segment {
    type Epsilon = f32;

    fn default_epsilon() -> Self::Epsilon {
        Vec2::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.start.abs_diff_eq(&other.start, epsilon) && self.end.abs_diff_eq(&other.end, epsilon)
    }
}

impl RelativeEq for Segment {
    fn default_max_relative() -> Self::Epsilon {
        Vec2::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.start.relative_eq(&other.start, epsilon, max_relative)
            && self.end.relative_eq(&other.end, epsilon, max_relative)
    }
}

/// A closed polygon given by its vertices in order.
///
/// The last vertex connects back to the first. Clipping assumes the polygon
/// is convex and simple but does not check it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    vertices: Vec<Vec2>,
}

impl Polygon {
    pub fn new(vertices: Vec<Vec2>) -> Self {
        Self { vertices }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a polygon from a triangle (3 vertices).
    pub fn from_triangle(v0: Vec2, v1: Vec2, v2: Vec2) -> Self {
        Self::new(vec![v0, v1, v2])
    }

    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    pub fn into_vertices(self) -> Vec<Vec2> {
        self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns true if the polygon has no vertices, i.e. it was clipped away.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Triangulate this convex polygon using fan triangulation.
    ///
    /// Yields `(v0, vi, vi+1)` for each `i`, matching a triangle-fan draw
    /// call. Polygons with fewer than three vertices yield nothing.
    pub fn triangulate(&self) -> impl Iterator<Item = (Vec2, Vec2, Vec2)> + '_ {
        (1..self.vertices.len().saturating_sub(1))
            .map(move |i| (self.vertices[0], self.vertices[i], self.vertices[i + 1]))
    }
}

impl From<Vec<Vec2>> for Polygon {
    fn from(vertices: Vec<Vec2>) -> Self {
        Self::new(vertices)
    }
}

impl From<Polygon> for Vec<Vec2> {
    fn from(polygon: Polygon) -> Self {
        polygon.vertices
    }
}

/// Geometry handed to the clip engine.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Segment(Segment),
    Polygon(Polygon),
}

impl Shape {
    /// Builds a shape from a raw vertex list: exactly two vertices make a
    /// segment, any other count makes a polygon.
    pub fn from_vertices(vertices: Vec<Vec2>) -> Self {
        if let [start, end] = vertices[..] {
            return Shape::Segment(Segment::new(start, end));
        }
        Shape::Polygon(Polygon::new(vertices))
    }

    /// The shape's points in drawing order.
    pub fn points(&self) -> Vec<Vec2> {
        match self {
            Shape::Segment(segment) => vec![segment.start, segment.end],
            Shape::Polygon(polygon) => polygon.vertices().to_vec(),
        }
    }
}

impl From<Segment> for Shape {
    fn from(segment: Segment) -> Self {
        Shape::Segment(segment)
    }
}

impl From<Polygon> for Shape {
    fn from(polygon: Polygon) -> Self {
        Shape::Polygon(polygon)
    }
}
