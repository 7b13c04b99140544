//! Circle shape.

use super::{ShapeId, ShapeTrait};
use crate::bounds::BoundingBox;
use crate::camera::Camera;
use crate::surface::{StrokeParams, Surface};
use crate::vector::Vector2;
use peniko::Color;
use std::f64::consts::TAU;
use uuid::Uuid;

#[derive(Debug, Clone, Copy)]
pub struct CircleStyle {
    pub width: f64,
    pub color: Color,
}

impl Default for CircleStyle {
    fn default() -> Self {
        Self {
            width: 0.1,
            color: Color::from_rgba8(0, 0, 0, 255),
        }
    }
}

/// A stroked circle outline.
#[derive(Debug, Clone)]
pub struct Circle {
    pub(crate) id: ShapeId,
    pub center: Vector2,
    pub radius: f64,
    pub style: CircleStyle,
}

impl Circle {
    pub fn new(center: Vector2, radius: f64, style: CircleStyle) -> Self {
        Self {
            id: Uuid::new_v4(),
            center,
            radius: radius.abs(),
            style,
        }
    }
}

impl ShapeTrait for Circle {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn bounding_box(&self) -> BoundingBox {
        BoundingBox::point(self.center).inflate(self.radius + self.style.width / 2.0)
    }

    fn render(&self, surface: &mut dyn Surface, camera: &Camera) {
        surface.begin_path();
        surface.arc(
            camera.object_to_canvas(self.center),
            camera.object_to_canvas_distance(self.radius),
            0.0,
            TAU,
        );
        surface.stroke(&StrokeParams::new(
            self.style.color,
            camera.object_to_canvas_distance(self.style.width),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DrawCommand, RecordingSurface};

    #[test]
    fn test_bounding_box() {
        let circle = Circle::new(
            Vector2::new(5.0, -5.0),
            3.0,
            CircleStyle {
                width: 1.0,
                ..CircleStyle::default()
            },
        );
        let bbox = circle.bounding_box();
        assert_eq!(bbox.min, Vector2::new(1.5, -8.5));
        assert_eq!(bbox.max, Vector2::new(8.5, -1.5));
        assert_eq!(bbox.center(), circle.center);
    }

    #[test]
    fn test_render_full_arc() {
        let circle = Circle::new(Vector2::new(1.0, 1.0), 2.0, CircleStyle::default());
        let mut surface = RecordingSurface::new(100.0, 100.0);
        circle.render(&mut surface, &Camera::new());
        match surface.commands[1] {
            DrawCommand::Arc {
                center,
                radius,
                start_angle,
                end_angle,
            } => {
                assert_eq!(center, Vector2::new(10.0, 10.0));
                assert!((radius - 20.0).abs() < f64::EPSILON);
                assert!(start_angle.abs() < f64::EPSILON);
                assert!((end_angle - TAU).abs() < f64::EPSILON);
            }
            ref other => panic!("unexpected command {other:?}"),
        }
        assert_eq!(surface.stroke_count(), 1);
    }
}
