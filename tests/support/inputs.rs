#![allow(dead_code)]

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rectclip::{ClipWindow, Segment, Vec2};
use std::f32::consts::PI;

pub fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

pub fn random_point<R: Rng + ?Sized>(rng: &mut R, lo: f32, hi: f32) -> Vec2 {
    Vec2::new(rng.gen_range(lo..hi), rng.gen_range(lo..hi))
}

/// Random window with its lower-left corner in `[-1, 1]^2` and sides in
/// `[0.1, 1.5]`.
pub fn random_window<R: Rng + ?Sized>(rng: &mut R) -> ClipWindow {
    let min = random_point(rng, -1.0, 1.0);
    let size = Vec2::new(rng.gen_range(0.1..1.5), rng.gen_range(0.1..1.5));
    ClipWindow::new(min, min + size).expect("ordered corners")
}

/// Random segment with both endpoints in `[-3, 3]^2`.
pub fn random_segment<R: Rng + ?Sized>(rng: &mut R) -> Segment {
    Segment::new(random_point(rng, -3.0, 3.0), random_point(rng, -3.0, 3.0))
}

/// Random point strictly inside `window`.
pub fn point_inside<R: Rng + ?Sized>(rng: &mut R, window: &ClipWindow) -> Vec2 {
    let (min, max) = (window.min(), window.max());
    let margin = Vec2::new(window.width(), window.height()) * 0.01;
    Vec2::new(
        rng.gen_range(min.x + margin.x..max.x - margin.x),
        rng.gen_range(min.y + margin.y..max.y - margin.y),
    )
}

/// Counter-clockwise regular polygon with random center, radius, rotation
/// and 3 to 8 sides. Always convex.
pub fn random_convex_polygon<R: Rng + ?Sized>(rng: &mut R) -> Vec<Vec2> {
    let sides = rng.gen_range(3..=8);
    let center = random_point(rng, -2.0, 2.0);
    let radius: f32 = rng.gen_range(0.1..1.5);
    let rotation: f32 = rng.gen_range(0.0..2.0 * PI);

    (0..sides)
        .map(|i| {
            let theta = rotation + 2.0 * PI * i as f32 / sides as f32;
            center + Vec2::new(theta.cos(), theta.sin()) * radius
        })
        .collect()
}

/// Absolute area via the shoelace formula.
pub fn polygon_area(vertices: &[Vec2]) -> f32 {
    let n = vertices.len();
    if n < 3 {
        return 0.0;
    }
    let twice: f32 = (0..n)
        .map(|i| vertices[i].cross(vertices[(i + 1) % n]))
        .sum();
    twice.abs() / 2.0
}

/// Returns true if `point` is in `window`, allowing `tolerance` of slack.
pub fn within(window: &ClipWindow, point: Vec2, tolerance: f32) -> bool {
    let (min, max) = (window.min(), window.max());
    point.x >= min.x - tolerance
        && point.x <= max.x + tolerance
        && point.y >= min.y - tolerance
        && point.y <= max.y + tolerance
}
