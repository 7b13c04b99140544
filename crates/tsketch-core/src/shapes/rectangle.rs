//! Rectangle shape.

use super::{ShapeId, ShapeTrait};
use crate::bounds::BoundingBox;
use crate::camera::Camera;
use crate::surface::{LineCap, StrokeParams, Surface};
use crate::vector::Vector2;
use peniko::Color;
use uuid::Uuid;

/// Outline and fill of a rectangle. Lengths are in document units.
#[derive(Debug, Clone, Copy)]
pub struct RectangleStyle {
    pub width: f64,
    pub color: Color,
    pub cap: LineCap,
    pub fill: Color,
    /// Corner radius (0 = sharp corners).
    pub corner_radius: f64,
}

impl Default for RectangleStyle {
    fn default() -> Self {
        Self {
            width: 0.1,
            color: Color::from_rgba8(0, 0, 0, 255),
            cap: LineCap::Butt,
            fill: Color::from_rgba8(0, 0, 0, 0),
            corner_radius: 0.0,
        }
    }
}

/// A rectangle with optional rounded corners.
#[derive(Debug, Clone)]
pub struct Rectangle {
    pub(crate) id: ShapeId,
    /// Anchor corner; `size` may be negative on either axis.
    pub left_upper: Vector2,
    pub size: Vector2,
    pub style: RectangleStyle,
}

impl Rectangle {
    pub fn new(left_upper: Vector2, size: Vector2, style: RectangleStyle) -> Self {
        Self {
            id: Uuid::new_v4(),
            left_upper,
            size,
            style,
        }
    }

    /// Create a rectangle from two corner points.
    pub fn from_corners(a: Vector2, b: Vector2, style: RectangleStyle) -> Self {
        Self::new(a, b - a, style)
    }

    /// The rectangle's area without the stroke, with ordered corners.
    pub fn frame(&self) -> BoundingBox {
        BoundingBox::new(self.left_upper, self.left_upper + self.size)
    }
}

impl ShapeTrait for Rectangle {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn bounding_box(&self) -> BoundingBox {
        self.frame().inflate(self.style.width / 2.0)
    }

    fn render(&self, surface: &mut dyn Surface, camera: &Camera) {
        let frame = self.frame();
        let origin = camera.object_to_canvas(frame.min);
        let size = frame.size() * camera.zoom;
        let radius = camera.object_to_canvas_distance(self.style.corner_radius);

        surface.begin_path();
        if radius > 0.0 {
            surface.round_rect(origin, size, radius);
        } else {
            surface.rect(origin, size);
        }
        surface.fill(self.style.fill);
        surface.stroke(
            &StrokeParams::new(
                self.style.color,
                camera.object_to_canvas_distance(self.style.width),
            )
            .with_cap(self.style.cap),
        );
    }
}
