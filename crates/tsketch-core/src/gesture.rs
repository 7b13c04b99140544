//! Pointer gesture tracking for navigation: mouse drag-pan and touch pan/pinch.
//!
//! The tracker only reads canvas-space positions and reports what the view
//! should do as a [`Navigation`] value; the canvas applies it to the camera.

use crate::camera::Camera;
use crate::input::PointerId;
use crate::vector::Vector2;
use std::collections::HashMap;

/// Pinches whose fingers start closer than this never zoom.
const MIN_PINCH_DISTANCE: f64 = 1e-6;

/// Reference captured when the second finger lands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinchBaseline {
    /// Distance between the two fingers, canvas pixels.
    pub distance: f64,
    /// Camera zoom at the time the baseline was taken.
    pub zoom: f64,
    /// Average finger position, canvas pixels.
    pub position: Vector2,
}

/// Camera change requested by a gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Navigation {
    None,
    /// Translate the view by a canvas-pixel delta.
    Pan(Vector2),
    /// Translate, then set the zoom keeping `anchor` fixed.
    PanZoom {
        pan: Vector2,
        anchor: Vector2,
        zoom: f64,
    },
}

impl Navigation {
    pub fn is_none(&self) -> bool {
        matches!(self, Navigation::None)
    }

    pub fn apply(self, camera: &mut Camera) {
        match self {
            Navigation::None => {}
            Navigation::Pan(delta) => camera.pan_by(delta),
            Navigation::PanZoom { pan, anchor, zoom } => {
                camera.pan_by(pan);
                camera.set_zoom_at(anchor, zoom);
            }
        }
    }
}

/// Gesture bookkeeping, reset as a unit.
#[derive(Debug, Clone, Default)]
pub struct GestureState {
    /// Active touch pointers and their last canvas position.
    touches: HashMap<PointerId, Vector2>,
    /// Average touch position at the previous two-finger move.
    last_average: Option<Vector2>,
    pinch: Option<PinchBaseline>,
    /// Last mouse position, for drag deltas.
    last_mouse: Option<Vector2>,
}

impl GestureState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn touch_count(&self) -> usize {
        self.touches.len()
    }

    pub fn pinch_baseline(&self) -> Option<PinchBaseline> {
        self.pinch
    }

    pub fn last_mouse(&self) -> Option<Vector2> {
        self.last_mouse
    }

    /// Forget every pointer and baseline.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// A finger touched down at `position`.
    pub fn touch_down(&mut self, id: PointerId, position: Vector2, zoom: f64) {
        self.touches.insert(id, position);
        self.reconcile(zoom);
    }

    /// A finger was lifted, cancelled or left the surface.
    pub fn touch_up(&mut self, id: PointerId, zoom: f64) {
        self.touches.remove(&id);
        self.reconcile(zoom);
    }

    /// A finger moved. Unknown ids are ignored.
    pub fn touch_move(&mut self, id: PointerId, position: Vector2) -> Navigation {
        let Some(previous) = self.touches.insert(id, position) else {
            self.touches.remove(&id);
            return Navigation::None;
        };

        match self.touches.len() {
            1 => Navigation::Pan(position - previous),
            2 => {
                let (average, distance) = self.two_finger_metrics();
                let pan = self.last_average.map_or(Vector2::ZERO, |last| average - last);
                self.last_average = Some(average);
                match self.pinch {
                    Some(baseline) if baseline.distance >= MIN_PINCH_DISTANCE => Navigation::PanZoom {
                        pan,
                        anchor: average,
                        zoom: baseline.zoom * (distance / baseline.distance),
                    },
                    _ => Navigation::Pan(pan),
                }
            }
            _ => Navigation::None,
        }
    }

    /// Mouse button pressed; starts delta tracking.
    pub fn mouse_down(&mut self, position: Vector2) {
        self.last_mouse = Some(position);
    }

    /// Mouse moved. Pans by the delta from the previous position when
    /// `panning` is set.
    pub fn mouse_move(&mut self, position: Vector2, panning: bool) -> Navigation {
        let previous = self.last_mouse.replace(position);
        match previous {
            Some(previous) if panning => Navigation::Pan(position - previous),
            _ => Navigation::None,
        }
    }

    pub fn mouse_up(&mut self, position: Vector2) {
        self.last_mouse = Some(position);
    }

    /// Re-derive the pinch state from the current number of touches.
    fn reconcile(&mut self, zoom: f64) {
        match self.touches.len() {
            2 => {
                let (average, distance) = self.two_finger_metrics();
                if self.pinch.is_none() {
                    log::debug!("pinch baseline: distance {distance:.2}, zoom {zoom:.3}");
                    self.pinch = Some(PinchBaseline {
                        distance,
                        zoom,
                        position: average,
                    });
                }
                self.last_average = Some(average);
            }
            1 => {
                self.pinch = None;
                self.last_average = self.touches.values().next().copied();
            }
            _ => {
                self.pinch = None;
                self.last_average = None;
            }
        }
    }

    /// Average position and distance of exactly two touches.
    fn two_finger_metrics(&self) -> (Vector2, f64) {
        let mut points = self.touches.values();
        match (points.next(), points.next()) {
            (Some(a), Some(b)) => (a.midpoint(*b), a.distance(*b)),
            _ => (Vector2::ZERO, 0.0),
        }
    }
}
