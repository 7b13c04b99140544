//! Shape definitions for the sketch document.

mod circle;
mod line;
mod path;
mod rectangle;

pub use circle::{Circle, CircleStyle};
pub use line::{Line, LineStyle};
pub use path::Path;
pub use rectangle::{Rectangle, RectangleStyle};

use crate::bounds::BoundingBox;
use crate::camera::Camera;
use crate::surface::Surface;
use crate::vector::Vector2;
use uuid::Uuid;

/// Unique identifier for shapes.
pub type ShapeId = Uuid;

/// Common trait for all shapes.
///
/// Geometry is stored in document space. Rendering maps it through the
/// camera it is handed, a shape never holds on to the document or surface.
pub trait ShapeTrait {
    /// Get the unique identifier.
    fn id(&self) -> ShapeId;

    /// Get the bounding box in document coordinates, including stroke width.
    fn bounding_box(&self) -> BoundingBox;

    /// Check if a document-space point falls inside the bounding box.
    fn hit_test(&self, point: Vector2) -> bool {
        self.bounding_box().contains(point)
    }

    /// Issue the drawing calls for this shape.
    fn render(&self, surface: &mut dyn Surface, camera: &Camera);
}

/// Closed set of drawable shapes.
#[derive(Debug, Clone)]
pub enum Shape {
    Line(Line),
    Rectangle(Rectangle),
    Circle(Circle),
    Path(Path),
}

impl Shape {
    pub fn id(&self) -> ShapeId {
        match self {
            Shape::Line(s) => s.id(),
            Shape::Rectangle(s) => s.id(),
            Shape::Circle(s) => s.id(),
            Shape::Path(s) => s.id(),
        }
    }

    pub fn bounding_box(&self) -> BoundingBox {
        match self {
            Shape::Line(s) => s.bounding_box(),
            Shape::Rectangle(s) => s.bounding_box(),
            Shape::Circle(s) => s.bounding_box(),
            Shape::Path(s) => s.bounding_box(),
        }
    }

    pub fn hit_test(&self, point: Vector2) -> bool {
        match self {
            Shape::Line(s) => s.hit_test(point),
            Shape::Rectangle(s) => s.hit_test(point),
            Shape::Circle(s) => s.hit_test(point),
            Shape::Path(s) => s.hit_test(point),
        }
    }

    pub fn render(&self, surface: &mut dyn Surface, camera: &Camera) {
        match self {
            Shape::Line(s) => s.render(surface, camera),
            Shape::Rectangle(s) => s.render(surface, camera),
            Shape::Circle(s) => s.render(surface, camera),
            Shape::Path(s) => s.render(surface, camera),
        }
    }

    /// Short lowercase name of the variant, used in log messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Line(_) => "line",
            Shape::Rectangle(_) => "rectangle",
            Shape::Circle(_) => "circle",
            Shape::Path(_) => "path",
        }
    }
}

impl From<Line> for Shape {
    fn from(s: Line) -> Self {
        Shape::Line(s)
    }
}

impl From<Rectangle> for Shape {
    fn from(s: Rectangle) -> Self {
        Shape::Rectangle(s)
    }
}

impl From<Circle> for Shape {
    fn from(s: Circle) -> Self {
        Shape::Circle(s)
    }
}

impl From<Path> for Shape {
    fn from(s: Path) -> Self {
        Shape::Path(s)
    }
}
