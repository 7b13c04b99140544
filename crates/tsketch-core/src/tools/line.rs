//! Two-click line tool.

use crate::camera::Camera;
use crate::canvas::SketchDocument;
use crate::input::MouseButton;
use crate::shapes::{Line, LineStyle, ShapeTrait};
use crate::surface::Surface;
use crate::vector::Vector2;

/// First left click anchors a preview line, the second commits it.
///
/// The preview end follows the cursor in between. A right click or Escape
/// drops the preview.
#[derive(Debug, Clone, Default)]
pub struct LineTool {
    pub style: LineStyle,
    preview: Option<Line>,
}

impl LineTool {
    pub fn new(style: LineStyle) -> Self {
        Self {
            style,
            preview: None,
        }
    }

    pub fn preview(&self) -> Option<&Line> {
        self.preview.as_ref()
    }

    pub fn deselect(&mut self) {
        self.preview = None;
    }

    pub fn on_cursor_down(&mut self, document: &mut SketchDocument, position: Vector2, button: MouseButton) {
        match button {
            MouseButton::Left => match self.preview.take() {
                None => {
                    self.preview = Some(Line::new(position, position, self.style));
                }
                Some(mut line) => {
                    line.end = position;
                    if line.is_degenerate() {
                        log::debug!("dropping zero-length line at {position:?}");
                    } else {
                        document.add_shape(line.into());
                    }
                }
            },
            MouseButton::Right => self.preview = None,
            MouseButton::Middle => {}
        }
    }

    pub fn on_cursor_move(&mut self, position: Vector2) {
        if let Some(line) = &mut self.preview {
            line.end = position;
        }
    }

    pub fn handle_key(&mut self, code: &str) {
        if code == "Escape" {
            self.preview = None;
        }
    }

    pub fn render_preview(&self, surface: &mut dyn Surface, camera: &Camera) {
        if let Some(line) = &self.preview {
            line.render(surface, camera);
        }
    }
}
