//! Vello-backed drawing surface.

use kurbo::{
    Affine, Arc, BezPath, Cap, PathEl, Point, Rect, RoundedRect, Shape as KurboShape, Size, Stroke,
    Vec2,
};
use peniko::{Color, Fill};
use std::f64::consts::TAU;
use tsketch_core::surface::{LineCap, StrokeParams, Surface};
use tsketch_core::vector::Vector2;
use vello::Scene;

/// Flattening tolerance for arcs and rounded corners, in pixels.
const PATH_TOLERANCE: f64 = 0.1;

/// Records surface calls into a [`Scene`] for the host's Vello renderer.
///
/// Coordinates arrive in canvas pixels, so everything is encoded with the
/// identity transform.
pub struct VelloSurface {
    /// The Vello scene being built.
    scene: Scene,
    /// Path under construction, consumed by `stroke` and `fill`.
    path: BezPath,
    size: Size,
}

impl Default for VelloSurface {
    fn default() -> Self {
        Self::new(Size::ZERO)
    }
}

fn to_point(v: Vector2) -> Point {
    Point::new(v.x, v.y)
}

fn to_cap(cap: LineCap) -> Cap {
    match cap {
        LineCap::Butt => Cap::Butt,
        LineCap::Round => Cap::Round,
        LineCap::Square => Cap::Square,
    }
}

/// Clockwise sweep from `start` to `end`; a full turn or more draws a whole circle.
fn clockwise_sweep(start: f64, end: f64) -> f64 {
    let sweep = end - start;
    if sweep >= TAU { TAU } else { sweep.rem_euclid(TAU) }
}

impl VelloSurface {
    pub fn new(size: Size) -> Self {
        Self {
            scene: Scene::new(),
            path: BezPath::new(),
            size,
        }
    }

    /// The host resized the drawable area.
    pub fn resize(&mut self, size: Size) {
        self.size = size;
    }

    /// Get the built scene for rendering.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Take ownership of the scene (resets internal scene).
    pub fn take_scene(&mut self) -> Scene {
        std::mem::take(&mut self.scene)
    }

    pub fn current_path(&self) -> &BezPath {
        &self.path
    }

    /// Whether a new segment has to open a subpath first.
    fn needs_move(&self) -> bool {
        matches!(self.path.elements().last(), None | Some(PathEl::ClosePath))
    }

    fn append_shape(&mut self, shape: &impl KurboShape) {
        for el in shape.path_elements(PATH_TOLERANCE) {
            self.path.push(el);
        }
    }
}

impl Surface for VelloSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn clear(&mut self) {
        self.scene.reset();
        self.path = BezPath::new();
    }

    fn begin_path(&mut self) {
        self.path = BezPath::new();
    }

    fn move_to(&mut self, p: Vector2) {
        self.path.move_to(to_point(p));
    }

    fn line_to(&mut self, p: Vector2) {
        if self.needs_move() {
            self.path.move_to(to_point(p));
        } else {
            self.path.line_to(to_point(p));
        }
    }

    fn quad_to(&mut self, ctrl: Vector2, p: Vector2) {
        if self.needs_move() {
            self.path.move_to(to_point(ctrl));
        }
        self.path.quad_to(to_point(ctrl), to_point(p));
    }

    fn arc(&mut self, center: Vector2, radius: f64, start_angle: f64, end_angle: f64) {
        let arc = Arc {
            center: to_point(center),
            radii: Vec2::new(radius, radius),
            start_angle,
            sweep_angle: clockwise_sweep(start_angle, end_angle),
            x_rotation: 0.0,
        };
        let start = to_point(center) + Vec2::from_angle(start_angle) * radius;
        if self.needs_move() {
            self.path.move_to(start);
        } else {
            self.path.line_to(start);
        }
        for el in arc.append_iter(PATH_TOLERANCE) {
            self.path.push(el);
        }
    }

    fn rect(&mut self, origin: Vector2, size: Vector2) {
        let rect = Rect::from_origin_size(to_point(origin), (size.x, size.y));
        self.append_shape(&rect);
    }

    fn round_rect(&mut self, origin: Vector2, size: Vector2, radius: f64) {
        let rect = Rect::from_origin_size(to_point(origin), (size.x, size.y));
        self.append_shape(&RoundedRect::from_rect(rect, radius));
    }

    fn close_path(&mut self) {
        if !self.needs_move() {
            self.path.close_path();
        }
    }

    fn stroke(&mut self, params: &StrokeParams) {
        if self.path.elements().is_empty() {
            log::trace!("stroke with empty path skipped");
            return;
        }
        let stroke = Stroke::new(params.width).with_caps(to_cap(params.cap));
        self.scene
            .stroke(&stroke, Affine::IDENTITY, params.color, None, &self.path);
    }

    fn fill(&mut self, color: Color) {
        if self.path.elements().is_empty() {
            log::trace!("fill with empty path skipped");
            return;
        }
        self.scene
            .fill(Fill::NonZero, Affine::IDENTITY, color, None, &self.path);
    }
}
