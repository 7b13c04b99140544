//! Tool system for the sketch editor.
//!
//! Exactly one [`Tool`] is active. The canvas feeds it cursor events in
//! document space; tools keep their own preview state and commit finished
//! shapes to the [`SketchDocument`].

mod line;
mod pen;

pub use line::LineTool;
pub use pen::PenTool;

use crate::camera::Camera;
use crate::canvas::SketchDocument;
use crate::config::EditorConfig;
use crate::error::SketchError;
use crate::input::MouseButton;
use crate::surface::Surface;
use crate::vector::Vector2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Available tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ToolKind {
    #[default]
    Select,
    Line,
    Pen,
}

impl ToolKind {
    pub const ALL: [ToolKind; 3] = [ToolKind::Select, ToolKind::Line, ToolKind::Pen];

    pub fn as_str(self) -> &'static str {
        match self {
            ToolKind::Select => "select",
            ToolKind::Line => "line",
            ToolKind::Pen => "pen",
        }
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolKind {
    type Err = SketchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ToolKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| SketchError::UnknownTool(s.to_string()))
    }
}

/// The active tool and its interaction state.
#[derive(Debug)]
pub enum Tool {
    /// Reserved for hit-testing and manipulation; ignores every event.
    Select,
    Line(LineTool),
    Pen(PenTool),
}

impl Tool {
    /// Build a fresh tool of `kind` configured from `config`.
    pub fn from_kind(kind: ToolKind, config: &EditorConfig) -> Self {
        match kind {
            ToolKind::Select => Tool::Select,
            ToolKind::Line => Tool::Line(LineTool::new(config.line.style())),
            ToolKind::Pen => Tool::Pen(PenTool::from_config(&config.pen)),
        }
    }

    pub fn kind(&self) -> ToolKind {
        match self {
            Tool::Select => ToolKind::Select,
            Tool::Line(_) => ToolKind::Line,
            Tool::Pen(_) => ToolKind::Pen,
        }
    }

    /// Called on the outgoing tool before it is replaced.
    pub fn deselect(&mut self) {
        match self {
            Tool::Select => {}
            Tool::Line(tool) => tool.deselect(),
            Tool::Pen(tool) => tool.deselect(),
        }
    }

    pub fn on_cursor_down(
        &mut self,
        document: &mut SketchDocument,
        position: Vector2,
        button: MouseButton,
        pressure: f64,
    ) {
        match self {
            Tool::Select => {}
            Tool::Line(tool) => tool.on_cursor_down(document, position, button),
            Tool::Pen(tool) => tool.on_cursor_down(position, button, pressure),
        }
    }

    pub fn on_cursor_up(&mut self, document: &mut SketchDocument, position: Vector2, button: MouseButton) {
        match self {
            Tool::Select | Tool::Line(_) => {}
            Tool::Pen(tool) => tool.on_cursor_up(document, position, button),
        }
    }

    pub fn on_cursor_move(&mut self, position: Vector2, pressure: f64) {
        match self {
            Tool::Select => {}
            Tool::Line(tool) => tool.on_cursor_move(position),
            Tool::Pen(tool) => tool.on_cursor_move(position, pressure),
        }
    }

    /// Key-down with its key code, e.g. `"Escape"`.
    pub fn handle_key(&mut self, code: &str) {
        match self {
            Tool::Select => {}
            Tool::Line(tool) => tool.handle_key(code),
            Tool::Pen(tool) => tool.handle_key(code),
        }
    }

    /// Draw the uncommitted preview, if any.
    pub fn render_preview(&self, surface: &mut dyn Surface, camera: &Camera) {
        match self {
            Tool::Select => {}
            Tool::Line(tool) => tool.render_preview(surface, camera),
            Tool::Pen(tool) => tool.render_preview(surface, camera),
        }
    }

    /// Whether the tool holds an uncommitted shape.
    pub fn is_active(&self) -> bool {
        match self {
            Tool::Select => false,
            Tool::Line(tool) => tool.preview().is_some(),
            Tool::Pen(tool) => tool.is_capturing(),
        }
    }
}
