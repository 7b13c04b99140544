//! Line shape.

use super::{ShapeId, ShapeTrait};
use crate::bounds::BoundingBox;
use crate::camera::Camera;
use crate::surface::{LineCap, StrokeParams, Surface};
use crate::vector::Vector2;
use peniko::Color;
use uuid::Uuid;

/// Stroke style of a line, width in document units.
#[derive(Debug, Clone, Copy)]
pub struct LineStyle {
    pub width: f64,
    pub color: Color,
    pub cap: LineCap,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            width: 0.1,
            color: Color::from_rgba8(0, 0, 0, 255),
            cap: LineCap::Round,
        }
    }
}

/// A straight segment between two points.
#[derive(Debug, Clone)]
pub struct Line {
    pub(crate) id: ShapeId,
    pub start: Vector2,
    pub end: Vector2,
    pub style: LineStyle,
}

impl Line {
    pub fn new(start: Vector2, end: Vector2, style: LineStyle) -> Self {
        Self {
            id: Uuid::new_v4(),
            start,
            end,
            style,
        }
    }

    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    /// A line whose endpoints coincide draws nothing useful.
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }
}

impl ShapeTrait for Line {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn bounding_box(&self) -> BoundingBox {
        BoundingBox::new(self.start, self.end).inflate(self.style.width / 2.0)
    }

    fn render(&self, surface: &mut dyn Surface, camera: &Camera) {
        surface.begin_path();
        surface.move_to(camera.object_to_canvas(self.start));
        surface.line_to(camera.object_to_canvas(self.end));
        surface.stroke(
            &StrokeParams::new(
                self.style.color,
                camera.object_to_canvas_distance(self.style.width),
            )
            .with_cap(self.style.cap),
        );
    }
}
