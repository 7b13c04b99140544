//! Freehand pen tool.

use crate::camera::Camera;
use crate::canvas::SketchDocument;
use crate::config::PenToolConfig;
use crate::input::MouseButton;
use crate::shapes::{Circle, CircleStyle, Path};
use crate::stroke::{
    FreehandOutliner, StrokeOptions, StrokeOutliner, StrokeSample, simplify_by, trace_outline,
};
use crate::surface::Surface;
use crate::vector::Vector2;
use peniko::Color;

/// Radius of the debug marker drawn at each captured sample.
const DEBUG_MARKER_RADIUS: f64 = 0.02;

/// Captures samples while the left button is held and commits them as an
/// outlined [`Path`] on release.
#[derive(Debug)]
pub struct PenTool {
    pub options: StrokeOptions,
    pub color: Color,
    /// RDP tolerance applied before outlining, 0 keeps raw samples.
    pub simplify_tolerance: f64,
    /// Commit a small red circle at every captured sample.
    pub debug_points: bool,
    outliner: Box<dyn StrokeOutliner>,
    samples: Vec<StrokeSample>,
    capturing: bool,
}

impl Default for PenTool {
    fn default() -> Self {
        Self::from_config(&PenToolConfig::default())
    }
}

impl PenTool {
    pub fn from_config(config: &PenToolConfig) -> Self {
        Self {
            options: config.stroke,
            color: config.color.into(),
            simplify_tolerance: config.simplify_tolerance,
            debug_points: config.debug_points,
            outliner: Box::new(FreehandOutliner),
            samples: Vec::new(),
            capturing: false,
        }
    }

    /// Replace the outline generator.
    pub fn with_outliner(mut self, outliner: Box<dyn StrokeOutliner>) -> Self {
        self.outliner = outliner;
        self
    }

    pub fn is_capturing(&self) -> bool {
        self.capturing
    }

    /// Samples of the stroke in progress.
    pub fn samples(&self) -> &[StrokeSample] {
        &self.samples
    }

    pub fn deselect(&mut self) {
        self.discard();
    }

    pub fn on_cursor_down(&mut self, position: Vector2, button: MouseButton, pressure: f64) {
        if button == MouseButton::Left {
            self.capturing = true;
            self.samples.clear();
            self.samples.push(StrokeSample::new(position, pressure));
        }
    }

    pub fn on_cursor_move(&mut self, position: Vector2, pressure: f64) {
        if self.capturing {
            self.samples.push(StrokeSample::new(position, pressure));
        }
    }

    pub fn on_cursor_up(&mut self, document: &mut SketchDocument, _position: Vector2, button: MouseButton) {
        if button != MouseButton::Left || !self.capturing {
            return;
        }
        self.capturing = false;
        let raw = std::mem::take(&mut self.samples);

        let path = self.finish(raw.clone());
        if !path.is_valid() {
            log::debug!("dropping pen stroke with {} sample(s)", raw.len());
            return;
        }
        if !path.has_outline() {
            log::debug!("dropping pen stroke without outline");
            return;
        }
        document.add_shape(path.into());

        if self.debug_points {
            let style = CircleStyle {
                width: DEBUG_MARKER_RADIUS / 2.0,
                color: Color::from_rgba8(255, 0, 0, 255),
            };
            for sample in &raw {
                document.add_shape(Circle::new(sample.position, DEBUG_MARKER_RADIUS, style).into());
            }
        }
    }

    pub fn handle_key(&mut self, code: &str) {
        if code == "Escape" && self.capturing {
            log::debug!("pen stroke discarded");
            self.discard();
        }
    }

    pub fn render_preview(&self, surface: &mut dyn Surface, camera: &Camera) {
        if !self.capturing || self.samples.is_empty() {
            return;
        }
        let outline = self.outliner.outline(&self.samples, &self.options);
        if outline.len() < 3 {
            return;
        }
        let points: Vec<Vector2> = outline.iter().map(|p| camera.object_to_canvas(*p)).collect();
        surface.begin_path();
        trace_outline(surface, &points);
        surface.fill(self.color);
    }

    /// Build the final path from the captured samples.
    fn finish(&self, samples: Vec<StrokeSample>) -> Path {
        let samples = if self.simplify_tolerance > 0.0 {
            simplify_by(&samples, self.simplify_tolerance, |s| s.position)
        } else {
            samples
        };
        let options = StrokeOptions {
            last: true,
            ..self.options
        };
        Path::new(samples, options, self.color, self.outliner.as_ref())
    }

    fn discard(&mut self) {
        self.capturing = false;
        self.samples.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::Shape;
    use crate::surface::RecordingSurface;

    fn draw(tool: &mut PenTool, doc: &mut SketchDocument, points: &[Vector2]) {
        tool.on_cursor_down(points[0], MouseButton::Left, 0.5);
        for p in &points[1..] {
            tool.on_cursor_move(*p, 0.5);
        }
        tool.on_cursor_up(doc, points[points.len() - 1], MouseButton::Left);
    }

    fn stroke(n: usize) -> Vec<Vector2> {
        (0..n).map(|i| Vector2::new(i as f64 * 0.5, 0.0)).collect()
    }

    #[test]
    fn test_single_sample_not_committed() {
        let mut doc = SketchDocument::new();
        let mut tool = PenTool::default();
        draw(&mut tool, &mut doc, &[Vector2::new(1.0, 1.0)]);
        assert!(doc.is_empty());
        assert!(!tool.is_capturing());
    }

    #[test]
    fn test_stroke_commits_one_path() {
        let mut doc = SketchDocument::new();
        let mut tool = PenTool::default();
        draw(&mut tool, &mut doc, &stroke(12));
        assert_eq!(doc.len(), 1);
        match &doc.shapes()[0] {
            Shape::Path(path) => {
                assert_eq!(path.samples().len(), 12);
                assert!(path.options.last);
                assert!(path.has_outline());
            }
            other => panic!("expected a path, got {other:?}"),
        }
    }

    #[test]
    fn test_two_samples_commit() {
        let mut doc = SketchDocument::new();
        let mut tool = PenTool::default();
        draw(&mut tool, &mut doc, &[Vector2::new(1.0, 1.0), Vector2::new(3.0, 1.0)]);
        assert_eq!(doc.len(), 1);
        match &doc.shapes()[0] {
            Shape::Path(path) => {
                assert_eq!(path.samples().len(), 2);
                assert!(path.has_outline());
            }
            other => panic!("expected a path, got {other:?}"),
        }
    }

    #[test]
    fn test_moves_only_recorded_while_down() {
        let mut tool = PenTool::default();
        tool.on_cursor_move(Vector2::new(1.0, 1.0), 0.5);
        assert!(tool.samples().is_empty());

        tool.on_cursor_down(Vector2::ZERO, MouseButton::Left, 0.2);
        tool.on_cursor_move(Vector2::new(1.0, 0.0), 0.7);
        tool.on_cursor_move(Vector2::new(1.0, 0.0), 0.7);
        assert_eq!(tool.samples().len(), 3);
        assert!((tool.samples()[0].pressure - 0.2).abs() < f64::EPSILON);
    }

    #[test]
    fn test_right_button_ignored() {
        let mut doc = SketchDocument::new();
        let mut tool = PenTool::default();
        tool.on_cursor_down(Vector2::ZERO, MouseButton::Right, 0.5);
        assert!(!tool.is_capturing());
        tool.on_cursor_up(&mut doc, Vector2::ZERO, MouseButton::Right);
        assert!(doc.is_empty());
    }

    #[test]
    fn test_escape_discards_capture() {
        let mut doc = SketchDocument::new();
        let mut tool = PenTool::default();
        let points = stroke(10);
        tool.on_cursor_down(points[0], MouseButton::Left, 0.5);
        for p in &points[1..] {
            tool.on_cursor_move(*p, 0.5);
        }
        tool.handle_key("Escape");
        assert!(!tool.is_capturing());
        tool.on_cursor_up(&mut doc, points[9], MouseButton::Left);
        assert!(doc.is_empty());
    }

    #[test]
    fn test_simplify_before_outline() {
        let mut doc = SketchDocument::new();
        let mut tool = PenTool::default();
        tool.simplify_tolerance = 0.1;
        draw(&mut tool, &mut doc, &stroke(20));
        match &doc.shapes()[0] {
            Shape::Path(path) => assert_eq!(path.samples().len(), 2),
            other => panic!("expected a path, got {other:?}"),
        }
    }

    #[test]
    fn test_debug_points_add_markers() {
        let mut doc = SketchDocument::new();
        let mut tool = PenTool::default();
        tool.debug_points = true;
        draw(&mut tool, &mut doc, &stroke(5));
        assert_eq!(doc.len(), 6);
        assert!(matches!(doc.shapes()[0], Shape::Path(_)));
        assert!(doc.shapes()[1..].iter().all(|s| matches!(s, Shape::Circle(_))));
    }

    #[derive(Debug)]
    struct TriangleOutliner;

    impl StrokeOutliner for TriangleOutliner {
        fn outline(&self, samples: &[StrokeSample], _options: &StrokeOptions) -> Vec<Vector2> {
            let first = samples[0].position;
            vec![first, first + Vector2::new(1.0, 0.0), first + Vector2::new(0.0, 1.0)]
        }
    }

    #[test]
    fn test_custom_outliner() {
        let mut doc = SketchDocument::new();
        let mut tool = PenTool::default().with_outliner(Box::new(TriangleOutliner));
        draw(&mut tool, &mut doc, &stroke(3));
        match &doc.shapes()[0] {
            Shape::Path(path) => {
                assert_eq!(path.outline().len(), 3);
                assert_eq!(path.outline()[1], Vector2::new(1.0, 0.0));
            }
            other => panic!("expected a path, got {other:?}"),
        }
    }

    #[test]
    fn test_preview_while_capturing() {
        let mut tool = PenTool::default();
        let mut surface = RecordingSurface::new(100.0, 100.0);
        tool.render_preview(&mut surface, &Camera::new());
        assert_eq!(surface.fill_count(), 0);

        tool.on_cursor_down(Vector2::ZERO, MouseButton::Left, 0.5);
        for p in stroke(8) {
            tool.on_cursor_move(p, 0.5);
        }
        tool.render_preview(&mut surface, &Camera::new());
        assert_eq!(surface.fill_count(), 1);
    }
}
