//! Built-in demo scene, in normalized device coordinates.

use crate::math::vec2::Vec2;
use crate::shape::Shape;

pub const N_DEMO_SHAPES: usize = 8;

// Static vertex data, borrowed by whoever builds shapes from it.
pub const DEMO_SHAPES: [&[Vec2]; N_DEMO_SHAPES] = [
    // Line 1
    &[Vec2::new(-0.95, -0.8), Vec2::new(-0.95, 0.7)],
    // Line 2
    &[Vec2::new(-0.5, 0.9), Vec2::new(0.7, -0.9)],
    // Triangle 1
    &[Vec2::new(-0.8, -0.2), Vec2::new(-0.5, 0.3), Vec2::new(-0.2, -0.2)],
    // Triangle 2
    &[Vec2::new(0.3, 0.5), Vec2::new(0.6, 0.9), Vec2::new(0.9, 0.4)],
    // Rectangle
    &[
        Vec2::new(-0.9, -0.9),
        Vec2::new(-0.5, -0.9),
        Vec2::new(-0.5, -0.5),
        Vec2::new(-0.9, -0.5),
    ],
    // Pentagon 1
    &[
        Vec2::new(-0.2, 0.5),
        Vec2::new(-0.1, 0.7),
        Vec2::new(0.1, 0.7),
        Vec2::new(0.2, 0.5),
        Vec2::new(0.0, 0.3),
    ],
    // Pentagon 2
    &[
        Vec2::new(0.5, 0.0),
        Vec2::new(0.6, 0.2),
        Vec2::new(0.8, 0.2),
        Vec2::new(0.9, 0.0),
        Vec2::new(0.7, -0.2),
    ],
    // Hexagon
    &[
        Vec2::new(-0.3, -0.4),
        Vec2::new(-0.15, -0.15),
        Vec2::new(0.15, -0.15),
        Vec2::new(0.3, -0.4),
        Vec2::new(0.15, -0.65),
        Vec2::new(-0.15, -0.65),
    ],
];

/// Builds owned shapes from [`DEMO_SHAPES`].
pub fn demo_shapes() -> Vec<Shape> {
    DEMO_SHAPES
        .iter()
        .map(|vertices| Shape::from_vertices(vertices.to_vec()))
        .collect()
}
