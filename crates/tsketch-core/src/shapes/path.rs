//! Freehand path shape.

use super::{ShapeId, ShapeTrait};
use crate::bounds::BoundingBox;
use crate::camera::Camera;
use crate::stroke::{StrokeOptions, StrokeOutliner, StrokeSample, trace_outline};
use crate::surface::Surface;
use crate::vector::Vector2;
use kurbo::BezPath;
use peniko::Color;
use uuid::Uuid;

/// A freehand stroke: the raw samples plus the filled outline derived from them.
#[derive(Debug, Clone)]
pub struct Path {
    pub(crate) id: ShapeId,
    /// Samples in capture order, which is also the stroke direction.
    samples: Vec<StrokeSample>,
    /// Outline settings used to derive `outline`.
    pub options: StrokeOptions,
    pub color: Color,
    outline: Vec<Vector2>,
}

impl Path {
    /// Build a path and derive its outline with `outliner`.
    pub fn new(
        samples: Vec<StrokeSample>,
        options: StrokeOptions,
        color: Color,
        outliner: &dyn StrokeOutliner,
    ) -> Self {
        let outline = outliner.outline(&samples, &options);
        Self {
            id: Uuid::new_v4(),
            samples,
            options,
            color,
            outline,
        }
    }

    pub fn samples(&self) -> &[StrokeSample] {
        &self.samples
    }

    /// Boundary polygon of the stroke in document space.
    pub fn outline(&self) -> &[Vector2] {
        &self.outline
    }

    /// A path needs at least two samples to be committed.
    pub fn is_valid(&self) -> bool {
        self.samples.len() >= 2
    }

    /// Whether the outliner produced a polygon worth filling.
    pub fn has_outline(&self) -> bool {
        self.outline.len() >= 3
    }

    /// The smoothed outline as a closed document-space path.
    pub fn to_bezpath(&self) -> BezPath {
        crate::stroke::outline_to_bezpath(&self.outline)
    }
}

impl ShapeTrait for Path {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn bounding_box(&self) -> BoundingBox {
        if let Some(bbox) = BoundingBox::from_points(self.outline.iter().copied()) {
            return bbox;
        }
        BoundingBox::from_points(self.samples.iter().map(|s| s.position))
            .map(|b| b.inflate(self.options.size / 2.0))
            .unwrap_or(BoundingBox::point(Vector2::ZERO))
    }

    fn render(&self, surface: &mut dyn Surface, camera: &Camera) {
        if !self.has_outline() {
            return;
        }
        let points: Vec<Vector2> = self
            .outline
            .iter()
            .map(|p| camera.object_to_canvas(*p))
            .collect();
        surface.begin_path();
        trace_outline(surface, &points);
        surface.fill(self.color);
    }
}
