//! Rendering surface abstraction.
//!
//! The core never owns a window or GPU context. Hosts hand it something that
//! implements [`Surface`], an immediate-mode 2D context in canvas pixels,
//! and the render pass issues path and paint calls against it.

use crate::vector::Vector2;
use kurbo::Size;
use peniko::Color;
use serde::{Deserialize, Serialize};

/// Shape of the ends of stroked open paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineCap {
    Butt,
    #[default]
    Round,
    Square,
}

/// Paint parameters for a stroke, already in canvas pixels.
#[derive(Debug, Clone, Copy)]
pub struct StrokeParams {
    pub color: Color,
    pub width: f64,
    pub cap: LineCap,
}

impl StrokeParams {
    pub fn new(color: Color, width: f64) -> Self {
        Self {
            color,
            width,
            cap: LineCap::Butt,
        }
    }

    pub fn with_cap(mut self, cap: LineCap) -> Self {
        self.cap = cap;
        self
    }
}

/// Immediate-mode drawing context supplied by the host.
///
/// Path operations build a current path, `stroke` and `fill` paint it.
/// `begin_path` discards the current path. All coordinates are canvas pixels.
pub trait Surface {
    /// Current size of the drawable area in pixels.
    fn size(&self) -> Size;

    /// Clear everything drawn so far.
    fn clear(&mut self);

    fn begin_path(&mut self);
    fn move_to(&mut self, p: Vector2);
    fn line_to(&mut self, p: Vector2);
    fn quad_to(&mut self, ctrl: Vector2, p: Vector2);

    /// Circular arc around `center`, angles in radians, clockwise in
    /// screen space (y down).
    fn arc(&mut self, center: Vector2, radius: f64, start_angle: f64, end_angle: f64);

    /// Axis-aligned rectangle subpath.
    fn rect(&mut self, origin: Vector2, size: Vector2);

    /// Rounded rectangle subpath.
    fn round_rect(&mut self, origin: Vector2, size: Vector2, radius: f64);

    fn close_path(&mut self);

    /// Stroke the current path.
    fn stroke(&mut self, params: &StrokeParams);

    /// Fill the current path with the non-zero rule.
    fn fill(&mut self, color: Color);
}

/// A single recorded drawing call.
#[derive(Debug, Clone)]
pub enum DrawCommand {
    Clear,
    BeginPath,
    MoveTo(Vector2),
    LineTo(Vector2),
    QuadTo(Vector2, Vector2),
    Arc {
        center: Vector2,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    },
    Rect(Vector2, Vector2),
    RoundRect(Vector2, Vector2, f64),
    ClosePath,
    Stroke(StrokeParams),
    Fill(Color),
}

/// Surface that records every call instead of drawing.
///
/// Used by tests and by hosts that replay the frame onto another backend.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    size: Size,
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            size: Size::new(width, height),
            commands: Vec::new(),
        }
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.size = Size::new(width, height);
    }

    /// Number of `stroke` calls recorded.
    pub fn stroke_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Stroke(_)))
            .count()
    }

    /// Number of `fill` calls recorded.
    pub fn fill_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Fill(_)))
            .count()
    }

    /// Every recorded stroke, in order.
    pub fn strokes(&self) -> Vec<StrokeParams> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Stroke(p) => Some(*p),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
    }

    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }

    fn move_to(&mut self, p: Vector2) {
        self.commands.push(DrawCommand::MoveTo(p));
    }

    fn line_to(&mut self, p: Vector2) {
        self.commands.push(DrawCommand::LineTo(p));
    }

    fn quad_to(&mut self, ctrl: Vector2, p: Vector2) {
        self.commands.push(DrawCommand::QuadTo(ctrl, p));
    }

    fn arc(&mut self, center: Vector2, radius: f64, start_angle: f64, end_angle: f64) {
        self.commands.push(DrawCommand::Arc {
            center,
            radius,
            start_angle,
            end_angle,
        });
    }

    fn rect(&mut self, origin: Vector2, size: Vector2) {
        self.commands.push(DrawCommand::Rect(origin, size));
    }

    fn round_rect(&mut self, origin: Vector2, size: Vector2, radius: f64) {
        self.commands.push(DrawCommand::RoundRect(origin, size, radius));
    }

    fn close_path(&mut self) {
        self.commands.push(DrawCommand::ClosePath);
    }

    fn stroke(&mut self, params: &StrokeParams) {
        self.commands.push(DrawCommand::Stroke(*params));
    }

    fn fill(&mut self, color: Color) {
        self.commands.push(DrawCommand::Fill(color));
    }
}
