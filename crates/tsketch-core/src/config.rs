//! Editor configuration, loadable from JSON.
//!
//! Every section derives `Default` and is `#[serde(default)]`, so a file only
//! needs the keys it wants to change:
//!
//! ```json
//! { "navigation": { "invert_wheel_pan": true }, "default_tool": "pen" }
//! ```

use crate::error::{SketchError, SketchResult};
use crate::shapes::LineStyle;
use crate::stroke::{StrokeEnd, StrokeOptions};
use crate::surface::LineCap;
use crate::tools::ToolKind;
use peniko::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    pub fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }

    pub fn red() -> Self {
        Self::new(255, 0, 0, 255)
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Pan and zoom behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Zoom the editor opens at, canvas pixels per document unit.
    pub initial_zoom: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
    /// Relative zoom change per wheel delta unit while ctrl is held.
    pub zoom_sensitivity: f64,
    /// Reverse the direction of wheel panning.
    pub invert_wheel_pan: bool,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            initial_zoom: crate::camera::DEFAULT_ZOOM,
            min_zoom: 0.1,
            max_zoom: 1000.0,
            zoom_sensitivity: 0.01,
            invert_wheel_pan: false,
        }
    }
}

/// Cursor indicator drawn on top of the scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CursorConfig {
    /// Draw the cursor indicator.
    pub preview: bool,
    /// Keep fractional cursor positions; when off the cursor snaps to
    /// whole document units.
    pub smooth: bool,
    /// Side length of the indicator square, canvas pixels.
    pub size: f64,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            preview: true,
            smooth: true,
            size: 5.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub enabled: bool,
    /// Distance between grid lines, document units.
    pub spacing: f64,
    /// Line width, canvas pixels.
    pub line_width: f64,
    pub color: SerializableColor,
    /// Skip the grid when lines would be closer than this on screen.
    pub min_pixel_spacing: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            spacing: 1.0,
            line_width: 0.5,
            color: SerializableColor::new(200, 200, 200, 255),
            min_pixel_spacing: 4.0,
        }
    }
}

/// Style of lines drawn with the line tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineToolConfig {
    /// Stroke width, document units.
    pub width: f64,
    pub color: SerializableColor,
    pub cap: LineCap,
}

impl Default for LineToolConfig {
    fn default() -> Self {
        Self {
            width: 0.1,
            color: SerializableColor::black(),
            cap: LineCap::Round,
        }
    }
}

impl LineToolConfig {
    pub fn style(&self) -> LineStyle {
        LineStyle {
            width: self.width,
            color: self.color.into(),
            cap: self.cap,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PenToolConfig {
    pub stroke: StrokeOptions,
    pub color: SerializableColor,
    /// Simplification tolerance applied to captured samples, 0 keeps them all.
    pub simplify_tolerance: f64,
    /// Also commit a marker at every captured sample.
    pub debug_points: bool,
}

impl Default for PenToolConfig {
    fn default() -> Self {
        Self {
            stroke: StrokeOptions {
                size: 0.6,
                thinning: 0.0,
                smoothing: 1.0,
                streamline: 0.2,
                simulate_pressure: true,
                start: StrokeEnd {
                    taper: 0.0,
                    cap: true,
                },
                end: StrokeEnd {
                    taper: 0.0,
                    cap: true,
                },
                last: false,
            },
            color: SerializableColor::black(),
            simplify_tolerance: 0.0,
            debug_points: false,
        }
    }
}

/// Top-level editor configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub navigation: NavigationConfig,
    pub cursor: CursorConfig,
    pub grid: GridConfig,
    /// Tool active when the editor starts.
    pub default_tool: ToolKind,
    pub line: LineToolConfig,
    pub pen: PenToolConfig,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            navigation: NavigationConfig::default(),
            cursor: CursorConfig::default(),
            grid: GridConfig::default(),
            default_tool: ToolKind::Line,
            line: LineToolConfig::default(),
            pen: PenToolConfig::default(),
        }
    }
}

impl EditorConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> SketchResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a configuration file.
    pub fn load(path: impl AsRef<Path>) -> SketchResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::debug!("loaded editor configuration from {}", path.display());
        Ok(config)
    }

    pub fn to_json(&self) -> SketchResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check value ranges the editor relies on.
    pub fn validate(&self) -> SketchResult<()> {
        let nav = &self.navigation;
        if !(nav.min_zoom > 0.0 && nav.min_zoom.is_finite()) {
            return Err(invalid(format!("min_zoom must be positive, got {}", nav.min_zoom)));
        }
        if !(nav.max_zoom >= nav.min_zoom && nav.max_zoom.is_finite()) {
            return Err(invalid(format!(
                "max_zoom {} is below min_zoom {}",
                nav.max_zoom, nav.min_zoom
            )));
        }
        if !(nav.min_zoom..=nav.max_zoom).contains(&nav.initial_zoom) {
            return Err(invalid(format!(
                "initial_zoom {} is outside [{}, {}]",
                nav.initial_zoom, nav.min_zoom, nav.max_zoom
            )));
        }
        if !nav.zoom_sensitivity.is_finite() {
            return Err(invalid("zoom_sensitivity must be finite".to_string()));
        }
        if !(self.grid.spacing > 0.0) {
            return Err(invalid(format!(
                "grid spacing must be positive, got {}",
                self.grid.spacing
            )));
        }
        if !(self.line.width > 0.0) {
            return Err(invalid(format!(
                "line width must be positive, got {}",
                self.line.width
            )));
        }
        if !(self.pen.stroke.size > 0.0) {
            return Err(invalid(format!(
                "pen size must be positive, got {}",
                self.pen.stroke.size
            )));
        }
        if !(self.pen.simplify_tolerance >= 0.0) {
            return Err(invalid(format!(
                "simplify_tolerance must not be negative, got {}",
                self.pen.simplify_tolerance
            )));
        }
        Ok(())
    }
}

fn invalid(message: String) -> SketchError {
    SketchError::InvalidConfig(message)
}
