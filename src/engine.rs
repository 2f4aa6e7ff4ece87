//! Per-frame clipping driver.
//!
//! The [`ClipEngine`] owns a scene of shapes and, each frame, clips all of
//! them against the current window. Segments go to the active line clipper
//! and everything else to the polygon clipper; shapes that end up invisible
//! are dropped so the caller can draw [`ClipEngine::visible`] as-is.

use crate::clipper::{LineAlgorithm, LineClipper, LineClipperDispatcher, SutherlandHodgman};
use crate::error::ClipError;
use crate::math::vec2::Vec2;
use crate::scene;
use crate::shape::Shape;
use crate::window::{ClipWindow, WindowPolicy};

pub struct ClipEngine {
    line_clipper: LineClipperDispatcher,
    polygon_clipper: SutherlandHodgman,
    window_policy: WindowPolicy,
    shapes: Vec<Shape>,
    visible: Vec<Shape>,
}

impl ClipEngine {
    pub fn new() -> Self {
        Self {
            line_clipper: LineClipperDispatcher::new(LineAlgorithm::default()),
            polygon_clipper: SutherlandHodgman::new(),
            window_policy: WindowPolicy::default(),
            shapes: Vec::new(),
            visible: Vec::new(),
        }
    }

    pub fn set_line_algorithm(&mut self, algorithm: LineAlgorithm) {
        self.line_clipper.set_algorithm(algorithm);
    }

    pub fn line_algorithm(&self) -> LineAlgorithm {
        self.line_clipper.active_algorithm()
    }

    pub fn set_window_policy(&mut self, policy: WindowPolicy) {
        self.window_policy = policy;
    }

    pub fn window_policy(&self) -> WindowPolicy {
        self.window_policy
    }

    /// Builds a clip window from raw corners using the engine's policy.
    pub fn window(&self, min: Vec2, max: Vec2) -> Result<ClipWindow, ClipError> {
        ClipWindow::with_policy(min, max, self.window_policy)
    }

    /// Replaces the scene with the built-in demo shapes.
    pub fn load_demo_scene(&mut self) {
        self.shapes = scene::demo_shapes();
        self.visible.clear();
    }

    pub fn add_shape(&mut self, shape: impl Into<Shape>) {
        self.shapes.push(shape.into());
    }

    pub fn clear_shapes(&mut self) {
        self.shapes.clear();
        self.visible.clear();
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Shapes that survived the last [`ClipEngine::update`].
    pub fn visible(&self) -> &[Shape] {
        &self.visible
    }

    /// Clips a single shape.
    ///
    /// Returns `None` when nothing of the shape is left to draw.
    pub fn clip_shape(&self, shape: &Shape, window: &ClipWindow) -> Option<Shape> {
        match shape {
            Shape::Segment(segment) => self
                .line_clipper
                .clip_segment(segment, window)
                .map(Shape::Segment),
            Shape::Polygon(polygon) => {
                let clipped = self.polygon_clipper.clip_polygon(polygon.vertices(), window);
                (!clipped.is_empty()).then_some(Shape::Polygon(clipped))
            }
        }
    }

    /// Clips the whole scene against `window` and returns the visible shapes.
    pub fn update(&mut self, window: &ClipWindow) -> &[Shape] {
        let mut visible = std::mem::take(&mut self.visible);
        visible.clear();
        visible.extend(
            self.shapes
                .iter()
                .filter_map(|shape| self.clip_shape(shape, window)),
        );

        log::trace!(
            "{} of {} shapes visible in {:?} ({})",
            visible.len(),
            self.shapes.len(),
            window,
            self.line_algorithm()
        );

        self.visible = visible;
        &self.visible
    }
}

impl Default for ClipEngine {
    fn default() -> Self {
        Self::new()
    }
}
