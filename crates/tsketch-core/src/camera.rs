//! Camera module for the pan/zoom transform between document and canvas space.

use crate::bounds::BoundingBox;
use crate::vector::Vector2;
use kurbo::{Affine, Size};
use serde::{Deserialize, Serialize};

/// Zoom level a fresh editor opens at (canvas pixels per document unit).
pub const DEFAULT_ZOOM: f64 = 10.0;

/// Camera manages the view transform for the canvas.
///
/// `pan` is the canvas-pixel position of the document origin and `zoom`
/// scales document units to canvas pixels. Together they define the only
/// valid document/canvas mapping:
///
/// ```text
/// canvas = object * zoom + pan
/// object = (canvas - pan) / zoom
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Camera {
    /// Canvas-pixel offset of the document origin.
    pub pan: Vector2,
    /// Document-to-canvas scale, always strictly positive.
    pub zoom: f64,
    /// Minimum allowed zoom level
    pub min_zoom: f64,
    /// Maximum allowed zoom level
    pub max_zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            pan: Vector2::ZERO,
            zoom: DEFAULT_ZOOM,
            min_zoom: 0.1,
            max_zoom: 1000.0,
        }
    }
}

impl Camera {
    /// Create a new camera with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a camera with explicit zoom limits.
    ///
    /// Swapped limits are reordered. Limits that are not finite and positive
    /// fall back to the defaults, as does a non-finite `zoom`.
    pub fn with_limits(zoom: f64, min_zoom: f64, max_zoom: f64) -> Self {
        let defaults = Self::default();
        let usable = |v: f64| v.is_finite() && v > 0.0;
        let min_zoom = if usable(min_zoom) { min_zoom } else { defaults.min_zoom };
        let max_zoom = if usable(max_zoom) { max_zoom } else { defaults.max_zoom };
        let (min_zoom, max_zoom) = if min_zoom <= max_zoom {
            (min_zoom, max_zoom)
        } else {
            (max_zoom, min_zoom)
        };
        let zoom = if zoom.is_finite() { zoom } else { defaults.zoom };
        Self {
            pan: Vector2::ZERO,
            zoom: zoom.clamp(min_zoom, max_zoom),
            min_zoom,
            max_zoom,
        }
    }

    /// Map a document-space point to canvas pixels.
    pub fn object_to_canvas(&self, v: Vector2) -> Vector2 {
        v * self.zoom + self.pan
    }

    /// Map a canvas-pixel point to document space.
    pub fn canvas_to_object(&self, v: Vector2) -> Vector2 {
        (v - self.pan) / self.zoom
    }

    pub fn object_to_canvas_distance(&self, d: f64) -> f64 {
        d * self.zoom
    }

    pub fn canvas_to_object_distance(&self, d: f64) -> f64 {
        d / self.zoom
    }

    /// Get the affine transform for rendering (document to canvas).
    pub fn transform(&self) -> Affine {
        Affine::translate(self.pan.to_vec2()) * Affine::scale(self.zoom)
    }

    /// Get the inverse transform for input handling (canvas to document).
    pub fn inverse_transform(&self) -> Affine {
        Affine::scale(1.0 / self.zoom) * Affine::translate(-self.pan.to_vec2())
    }

    /// Pan the camera by a delta in canvas pixels.
    pub fn pan_by(&mut self, delta: Vector2) {
        self.pan = self.pan + delta;
    }

    /// Multiply the zoom by `factor`, keeping the canvas point `anchor` fixed.
    pub fn zoom_at(&mut self, anchor: Vector2, factor: f64) {
        self.set_zoom_at(anchor, self.zoom * factor);
    }

    /// Set the zoom to `zoom` (clamped), keeping the canvas point `anchor` fixed.
    ///
    /// The document point under `anchor` maps back onto `anchor` afterwards:
    /// `new_pan = anchor + (old_pan - anchor) * (z1 / z0)`.
    pub fn set_zoom_at(&mut self, anchor: Vector2, zoom: f64) {
        if !zoom.is_finite() {
            return;
        }
        let new_zoom = zoom.clamp(self.min_zoom, self.max_zoom);
        if (new_zoom - self.zoom).abs() < f64::EPSILON {
            return;
        }
        let ratio = new_zoom / self.zoom;
        self.pan = anchor + (self.pan - anchor) * ratio;
        self.zoom = new_zoom;
    }

    /// Reset camera to default position and zoom.
    pub fn reset(&mut self, zoom: f64) {
        self.pan = Vector2::ZERO;
        self.zoom = zoom.clamp(self.min_zoom, self.max_zoom);
    }

    /// Fit the camera to show the given document-space box.
    pub fn fit_to_bounds(&mut self, bounds: BoundingBox, viewport: Size, padding: f64) {
        if bounds.is_zero_area() {
            self.pan = Vector2::new(viewport.width / 2.0, viewport.height / 2.0)
                - bounds.center() * self.zoom;
            return;
        }

        let padded_viewport = Size::new(
            (viewport.width - padding * 2.0).max(1.0),
            (viewport.height - padding * 2.0).max(1.0),
        );

        let scale_x = padded_viewport.width / bounds.width();
        let scale_y = padded_viewport.height / bounds.height();
        self.zoom = scale_x.min(scale_y).clamp(self.min_zoom, self.max_zoom);

        // Center the bounds in the viewport
        let viewport_center = Vector2::new(viewport.width / 2.0, viewport.height / 2.0);
        self.pan = viewport_center - bounds.center() * self.zoom;
    }
}
