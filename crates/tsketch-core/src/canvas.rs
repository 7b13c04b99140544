//! Sketch document and editor state management.

use crate::bounds::BoundingBox;
use crate::camera::Camera;
use crate::config::EditorConfig;
use crate::error::{SketchError, SketchResult};
use crate::gesture::GestureState;
use crate::input::{
    Buttons, KeyEvent, KeyState, Modifiers, MouseButton, PointerEvent, PointerKind, PointerPhase,
    WheelEvent,
};
use crate::render::{render_cursor, render_grid};
use crate::shapes::{Shape, ShapeId};
use crate::surface::Surface;
use crate::tools::{Tool, ToolKind};
use crate::vector::Vector2;
use kurbo::Size;

/// Smallest zoom factor a single wheel event may apply.
const MIN_WHEEL_FACTOR: f64 = 0.01;

/// Padding kept around the content by [`Canvas::fit_to_content`], pixels.
const FIT_PADDING: f64 = 50.0;

/// Ordered, append-only list of committed shapes.
#[derive(Debug, Clone, Default)]
pub struct SketchDocument {
    shapes: Vec<Shape>,
}

impl SketchDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a shape; it draws on top of everything before it.
    pub fn add_shape(&mut self, shape: Shape) {
        log::debug!("committed {} {}", shape.kind(), shape.id());
        self.shapes.push(shape);
    }

    /// Shapes in drawing order (back to front).
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn get_shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id() == id)
    }

    /// Union of all shape bounding boxes.
    pub fn bounds(&self) -> Option<BoundingBox> {
        self.shapes
            .iter()
            .map(Shape::bounding_box)
            .reduce(|acc, b| acc.union(&b))
    }

    /// Shapes whose bounding box contains `point`, topmost first.
    pub fn shapes_at(&self, point: Vector2) -> Vec<ShapeId> {
        self.shapes
            .iter()
            .rev()
            .filter(|s| s.hit_test(point))
            .map(Shape::id)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }
}

/// The editor: document, view and the active tool, driven by host events.
#[derive(Debug)]
pub struct Canvas {
    pub document: SketchDocument,
    pub camera: Camera,
    tool: Tool,
    gestures: GestureState,
    keys: KeyState,
    /// Cursor in document space, snapped when smooth mode is off.
    cursor_position: Vector2,
    config: EditorConfig,
    /// Global position of the surface's top-left corner, once mounted.
    surface_origin: Option<Vector2>,
    viewport_size: Size,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::from_valid_config(EditorConfig::default())
    }
}

impl Canvas {
    /// Create an editor for `config`, rejecting it if it does not validate.
    pub fn new(config: EditorConfig) -> SketchResult<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: EditorConfig) -> Self {
        let nav = &config.navigation;
        let camera = Camera::with_limits(nav.initial_zoom, nav.min_zoom, nav.max_zoom);
        Self {
            document: SketchDocument::new(),
            camera,
            tool: Tool::from_kind(config.default_tool, &config),
            gestures: GestureState::new(),
            keys: KeyState::new(),
            cursor_position: Vector2::ZERO,
            config,
            surface_origin: None,
            viewport_size: Size::ZERO,
        }
    }

    /// Create a canvas for an existing document.
    pub fn with_document(document: SketchDocument, config: EditorConfig) -> SketchResult<Self> {
        Ok(Self {
            document,
            ..Self::new(config)?
        })
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn tool(&self) -> &Tool {
        &self.tool
    }

    pub fn tool_kind(&self) -> ToolKind {
        self.tool.kind()
    }

    pub fn gestures(&self) -> &GestureState {
        &self.gestures
    }

    /// Cursor position in document space, as the tools see it.
    pub fn cursor_position(&self) -> Vector2 {
        self.cursor_position
    }

    pub fn is_key_pressed(&self, key: &str) -> bool {
        self.keys.is_key_pressed(key)
    }

    /// Attach the rendering surface placed at `origin` (global coordinates).
    pub fn mount_surface(&mut self, origin: Vector2, size: Size) {
        self.surface_origin = Some(origin);
        self.viewport_size = size;
    }

    pub fn unmount_surface(&mut self) {
        self.surface_origin = None;
        self.gestures.reset();
        self.keys.clear();
    }

    pub fn is_mounted(&self) -> bool {
        self.surface_origin.is_some()
    }

    /// The surface moved or changed size.
    pub fn set_surface_layout(&mut self, origin: Vector2, size: Size) {
        self.mount_surface(origin, size);
    }

    /// Convert a global (client) position to canvas pixels.
    pub fn global_to_canvas(&self, global: Vector2) -> SketchResult<Vector2> {
        let origin = self
            .surface_origin
            .ok_or(SketchError::SurfaceNotMounted("global position to canvas"))?;
        Ok(global - origin)
    }

    /// Convert a global (client) position to document space.
    pub fn global_to_object(&self, global: Vector2) -> SketchResult<Vector2> {
        Ok(self.camera.canvas_to_object(self.global_to_canvas(global)?))
    }

    /// Switch tools by name. Unknown names fall back to the select tool.
    pub fn select_tool(&mut self, name: &str) {
        let kind = match name.parse::<ToolKind>() {
            Ok(kind) => kind,
            Err(err) => {
                log::warn!("{err}, falling back to select");
                ToolKind::Select
            }
        };
        self.set_tool(kind);
    }

    /// Deselect the current tool and activate a fresh `kind`.
    pub fn set_tool(&mut self, kind: ToolKind) {
        self.tool.deselect();
        self.tool = Tool::from_kind(kind, &self.config);
        log::debug!("tool switched to {kind}");
    }

    pub fn add_shape(&mut self, shape: Shape) {
        self.document.add_shape(shape);
    }

    /// Process a pointer event from the host.
    pub fn handle_pointer(&mut self, event: &PointerEvent) -> SketchResult<()> {
        if event.kind == PointerKind::Unknown {
            return Ok(());
        }
        let position = self.global_to_canvas(event.position)?;

        match event.kind {
            PointerKind::Touch => self.handle_touch(event, position),
            _ => self.handle_cursor(event, position),
        }
        Ok(())
    }

    /// Touch pointers only navigate.
    fn handle_touch(&mut self, event: &PointerEvent, position: Vector2) {
        match event.phase {
            PointerPhase::Down => {
                self.gestures.touch_down(event.pointer_id, position, self.camera.zoom);
            }
            PointerPhase::Move => {
                let navigation = self.gestures.touch_move(event.pointer_id, position);
                log::trace!("touch navigation {navigation:?}");
                navigation.apply(&mut self.camera);
                self.update_cursor(position);
            }
            phase if phase.is_release() => {
                self.gestures.touch_up(event.pointer_id, self.camera.zoom);
            }
            _ => {}
        }
    }

    /// Mouse and pen pointers drive the active tool, except while panning.
    fn handle_cursor(&mut self, event: &PointerEvent, position: Vector2) {
        match event.phase {
            PointerPhase::Down => {
                self.gestures.mouse_down(position);
                self.update_cursor(position);
                let Some(button) = event.button else {
                    return;
                };
                if self.is_pan_drag(Buttons::NONE.with(button), event.modifiers) {
                    return;
                }
                self.tool
                    .on_cursor_down(&mut self.document, self.cursor_position, button, event.pressure);
            }
            PointerPhase::Move => {
                let panning = self.is_pan_drag(event.buttons, event.modifiers);
                let navigation = self.gestures.mouse_move(position, panning);
                log::trace!("mouse navigation {navigation:?}");
                navigation.apply(&mut self.camera);
                self.update_cursor(position);
                if !panning {
                    self.tool.on_cursor_move(self.cursor_position, event.pressure);
                }
            }
            phase if phase.is_release() => {
                self.gestures.mouse_up(position);
                self.update_cursor(position);
                let button = event.button.unwrap_or(MouseButton::Left);
                self.tool
                    .on_cursor_up(&mut self.document, self.cursor_position, button);
            }
            _ => {}
        }
    }

    /// Middle drag always pans; shift + left drag pans with the select tool.
    fn is_pan_drag(&self, buttons: Buttons, modifiers: Modifiers) -> bool {
        buttons.contains(MouseButton::Middle)
            || (buttons.contains(MouseButton::Left)
                && modifiers.shift
                && self.tool.kind() == ToolKind::Select)
    }

    fn update_cursor(&mut self, canvas_position: Vector2) {
        let position = self.camera.canvas_to_object(canvas_position);
        self.cursor_position = if self.config.cursor.smooth {
            position
        } else {
            position.round()
        };
    }

    /// Wheel: zoom around the pointer with ctrl held, pan otherwise.
    pub fn handle_wheel(&mut self, event: &WheelEvent) -> SketchResult<()> {
        let anchor = self.global_to_canvas(event.position)?;
        let nav = &self.config.navigation;

        if event.ctrl {
            let factor = (1.0 - (event.delta.x + event.delta.y) * nav.zoom_sensitivity)
                .max(MIN_WHEEL_FACTOR);
            self.camera.zoom_at(anchor, factor);
            log::trace!("wheel zoom x{factor:.3} -> {:.3}", self.camera.zoom);
        } else {
            let delta = if nav.invert_wheel_pan {
                event.delta
            } else {
                -event.delta
            };
            self.camera.pan_by(delta);
            log::trace!("wheel pan {delta:?}");
        }
        self.update_cursor(anchor);
        Ok(())
    }

    /// Key pressed: tracked as held and forwarded to the tool, repeats included.
    pub fn handle_key_down(&mut self, code: &str) {
        self.keys.handle_key_event(&KeyEvent::Pressed(code.to_string()));
        self.tool.handle_key(code);
    }

    /// Forget held keys, e.g. when the host window loses focus.
    pub fn release_all_keys(&mut self) {
        self.keys.clear();
    }

    pub fn handle_key_up(&mut self, code: &str) {
        self.keys.handle_key_event(&KeyEvent::Released(code.to_string()));
    }

    /// Center and zoom the view on all shapes.
    pub fn fit_to_content(&mut self) {
        if let Some(bounds) = self.document.bounds() {
            self.camera.fit_to_bounds(bounds, self.viewport_size, FIT_PADDING);
        }
    }

    /// Draw one frame: grid, shapes in order, tool preview, cursor.
    pub fn render(&self, surface: &mut dyn Surface) {
        surface.clear();
        render_grid(surface, &self.camera, &self.config.grid);
        for shape in self.document.shapes() {
            shape.render(surface, &self.camera);
        }
        self.tool.render_preview(surface, &self.camera);
        if self.config.cursor.preview {
            let position = self.camera.object_to_canvas(self.cursor_position);
            render_cursor(surface, position, &self.config.cursor);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Circle, CircleStyle, Line, LineStyle};
    use crate::surface::{DrawCommand, RecordingSurface};

    const ORIGIN: Vector2 = Vector2::new(100.0, 50.0);

    fn mounted(config: EditorConfig) -> Canvas {
        let mut canvas = Canvas::new(config).unwrap();
        canvas.mount_surface(ORIGIN, Size::new(800.0, 600.0));
        canvas
    }

    fn no_grid() -> EditorConfig {
        let mut config = EditorConfig::default();
        config.grid.enabled = false;
        config
    }

    /// Global position of a canvas-pixel point.
    fn at(x: f64, y: f64) -> Vector2 {
        ORIGIN + Vector2::new(x, y)
    }

    fn click(canvas: &mut Canvas, position: Vector2, button: MouseButton) {
        canvas
            .handle_pointer(&PointerEvent::mouse(PointerPhase::Down, position).with_button(button))
            .unwrap();
        canvas
            .handle_pointer(&PointerEvent::mouse(PointerPhase::Up, position).with_button(button))
            .unwrap();
    }

    fn assert_close(a: Vector2, b: Vector2) {
        assert!((a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9, "{a:?} != {b:?}");
    }

    #[test]
    fn test_defaults() {
        let canvas = Canvas::default();
        assert_eq!(canvas.tool_kind(), ToolKind::Line);
        assert!((canvas.camera.zoom - 10.0).abs() < f64::EPSILON);
        assert_eq!(canvas.camera.pan, Vector2::ZERO);
        assert!(!canvas.is_mounted());
    }

    #[test]
    fn test_unmounted_surface_is_an_error() {
        let mut canvas = Canvas::default();
        let err = canvas.global_to_canvas(Vector2::ZERO).unwrap_err();
        assert!(matches!(err, SketchError::SurfaceNotMounted(_)));
        let event = PointerEvent::mouse(PointerPhase::Move, Vector2::ZERO);
        assert!(canvas.handle_pointer(&event).is_err());
        let wheel = WheelEvent {
            position: Vector2::ZERO,
            delta: Vector2::new(0.0, 1.0),
            ctrl: false,
        };
        assert!(canvas.handle_wheel(&wheel).is_err());
    }

    #[test]
    fn test_global_to_object() {
        let mut canvas = mounted(EditorConfig::default());
        canvas.camera.pan = Vector2::new(20.0, 10.0);
        let object = canvas.global_to_object(at(40.0, 30.0)).unwrap();
        assert_close(object, Vector2::new(2.0, 2.0));
    }

    #[test]
    fn test_select_tool_fallback() {
        let mut canvas = Canvas::default();
        canvas.select_tool("pen");
        assert_eq!(canvas.tool_kind(), ToolKind::Pen);
        canvas.select_tool("spray-can");
        assert_eq!(canvas.tool_kind(), ToolKind::Select);
    }

    #[test]
    fn test_switching_tool_drops_preview() {
        let mut canvas = mounted(EditorConfig::default());
        click(&mut canvas, at(10.0, 10.0), MouseButton::Left);
        assert!(canvas.tool().is_active());
        canvas.select_tool("line");
        assert!(!canvas.tool().is_active());
        click(&mut canvas, at(50.0, 10.0), MouseButton::Left);
        assert!(canvas.document.is_empty());
    }

    #[test]
    fn test_line_tool_through_events() {
        let mut canvas = mounted(EditorConfig::default());
        click(&mut canvas, at(10.0, 20.0), MouseButton::Left);
        canvas
            .handle_pointer(&PointerEvent::mouse(PointerPhase::Move, at(30.0, 20.0)))
            .unwrap();
        click(&mut canvas, at(50.0, 20.0), MouseButton::Left);

        assert_eq!(canvas.document.len(), 1);
        match &canvas.document.shapes()[0] {
            Shape::Line(line) => {
                assert_close(line.start, Vector2::new(1.0, 2.0));
                assert_close(line.end, Vector2::new(5.0, 2.0));
            }
            other => panic!("expected a line, got {other:?}"),
        }
    }

    #[test]
    fn test_cursor_snaps_when_not_smooth() {
        let mut config = EditorConfig::default();
        config.cursor.smooth = false;
        let mut canvas = mounted(config);
        canvas
            .handle_pointer(&PointerEvent::mouse(PointerPhase::Move, at(14.0, 26.0)))
            .unwrap();
        assert_eq!(canvas.cursor_position(), Vector2::new(1.0, 3.0));

        let mut smooth = mounted(EditorConfig::default());
        smooth
            .handle_pointer(&PointerEvent::mouse(PointerPhase::Move, at(14.0, 26.0)))
            .unwrap();
        assert_close(smooth.cursor_position(), Vector2::new(1.4, 2.6));
    }

    #[test]
    fn test_middle_drag_pans_without_tool() {
        let mut canvas = mounted(EditorConfig::default());
        canvas
            .handle_pointer(
                &PointerEvent::mouse(PointerPhase::Down, at(10.0, 10.0)).with_button(MouseButton::Middle),
            )
            .unwrap();
        canvas
            .handle_pointer(
                &PointerEvent::mouse(PointerPhase::Move, at(25.0, 5.0)).with_buttons(Buttons::MIDDLE),
            )
            .unwrap();
        assert_eq!(canvas.camera.pan, Vector2::new(15.0, -5.0));
        assert!(!canvas.tool().is_active());
    }

    #[test]
    fn test_shift_left_drag_pans_only_with_select() {
        let shift = Modifiers {
            shift: true,
            ..Modifiers::default()
        };
        let mut canvas = mounted(EditorConfig::default());
        canvas.select_tool("select");
        canvas
            .handle_pointer(
                &PointerEvent::mouse(PointerPhase::Down, at(0.0, 0.0))
                    .with_button(MouseButton::Left)
                    .with_modifiers(shift),
            )
            .unwrap();
        canvas
            .handle_pointer(
                &PointerEvent::mouse(PointerPhase::Move, at(8.0, 6.0))
                    .with_buttons(Buttons::LEFT)
                    .with_modifiers(shift),
            )
            .unwrap();
        assert_eq!(canvas.camera.pan, Vector2::new(8.0, 6.0));

        // The line tool ignores shift for panning
        let mut canvas = mounted(EditorConfig::default());
        canvas
            .handle_pointer(
                &PointerEvent::mouse(PointerPhase::Move, at(8.0, 6.0))
                    .with_buttons(Buttons::LEFT)
                    .with_modifiers(shift),
            )
            .unwrap();
        assert_eq!(canvas.camera.pan, Vector2::ZERO);
    }

    #[test]
    fn test_wheel_pan_and_inversion() {
        let wheel = WheelEvent {
            position: at(0.0, 0.0),
            delta: Vector2::new(3.0, 4.0),
            ctrl: false,
        };
        let mut canvas = mounted(EditorConfig::default());
        canvas.handle_wheel(&wheel).unwrap();
        assert_eq!(canvas.camera.pan, Vector2::new(-3.0, -4.0));

        let mut config = EditorConfig::default();
        config.navigation.invert_wheel_pan = true;
        let mut inverted = mounted(config);
        inverted.handle_wheel(&wheel).unwrap();
        assert_eq!(inverted.camera.pan, Vector2::new(3.0, 4.0));
    }

    #[test]
    fn test_wheel_zoom_keeps_cursor_point() {
        let mut canvas = mounted(EditorConfig::default());
        canvas.camera.pan = Vector2::new(33.0, -12.0);
        let pointer = at(240.0, 130.0);
        let before = canvas.global_to_object(pointer).unwrap();

        let wheel = WheelEvent {
            position: pointer,
            delta: Vector2::new(0.0, -20.0),
            ctrl: true,
        };
        canvas.handle_wheel(&wheel).unwrap();
        assert!((canvas.camera.zoom - 12.0).abs() < 1e-9);
        assert_close(canvas.global_to_object(pointer).unwrap(), before);
    }

    #[test]
    fn test_pinch_zoom_through_touch_events() {
        let mut canvas = mounted(EditorConfig::default());
        let touch = |id, phase, x, y| PointerEvent::touch(id, phase, at(x, y));

        canvas.handle_pointer(&touch(1, PointerPhase::Down, 100.0, 100.0)).unwrap();
        canvas.handle_pointer(&touch(2, PointerPhase::Down, 200.0, 100.0)).unwrap();
        canvas.handle_pointer(&touch(2, PointerPhase::Move, 300.0, 100.0)).unwrap();
        assert!((canvas.camera.zoom - 20.0).abs() < 1e-9);

        // Lifting one finger ends the pinch; touch never reaches the tool
        canvas.handle_pointer(&touch(2, PointerPhase::Cancel, 300.0, 100.0)).unwrap();
        assert!(canvas.gestures().pinch_baseline().is_none());
        assert_eq!(canvas.gestures().touch_count(), 1);
        assert!(!canvas.tool().is_active());
        assert!(canvas.document.is_empty());
    }

    #[test]
    fn test_single_touch_pans() {
        let mut canvas = mounted(EditorConfig::default());
        canvas
            .handle_pointer(&PointerEvent::touch(7, PointerPhase::Down, at(10.0, 10.0)))
            .unwrap();
        canvas
            .handle_pointer(&PointerEvent::touch(7, PointerPhase::Move, at(14.0, 7.0)))
            .unwrap();
        assert_eq!(canvas.camera.pan, Vector2::new(4.0, -3.0));
    }

    #[test]
    fn test_unknown_pointer_kind_ignored() {
        let mut canvas = Canvas::default();
        let event = PointerEvent::new(3, PointerKind::Unknown, PointerPhase::Down, Vector2::ZERO);
        // Ignored even before a surface is mounted
        assert!(canvas.handle_pointer(&event).is_ok());
    }

    #[test]
    fn test_pen_stroke_through_events() {
        let mut canvas = mounted(EditorConfig::default());
        canvas.select_tool("pen");
        canvas
            .handle_pointer(
                &PointerEvent::pen(PointerPhase::Down, at(0.0, 0.0), 0.3).with_button(MouseButton::Left),
            )
            .unwrap();
        for i in 1..15 {
            canvas
                .handle_pointer(&PointerEvent::pen(PointerPhase::Move, at(i as f64 * 4.0, i as f64), 0.6))
                .unwrap();
        }
        canvas
            .handle_pointer(&PointerEvent::pen(PointerPhase::Leave, at(56.0, 14.0), 0.0))
            .unwrap();
        assert_eq!(canvas.document.len(), 1);
        assert!(matches!(canvas.document.shapes()[0], Shape::Path(_)));
    }

    #[test]
    fn test_escape_reaches_tool_and_keys_tracked() {
        let mut canvas = mounted(EditorConfig::default());
        click(&mut canvas, at(10.0, 10.0), MouseButton::Left);
        canvas.handle_key_down("Escape");
        assert!(canvas.is_key_pressed("Escape"));
        assert!(!canvas.tool().is_active());
        canvas.handle_key_up("Escape");
        assert!(!canvas.is_key_pressed("Escape"));
    }

    #[test]
    fn test_escape_cancels_after_lost_key_up() {
        let mut canvas = mounted(EditorConfig::default());
        // Key-up never arrives, e.g. focus moved away while it was held
        canvas.handle_key_down("Escape");
        click(&mut canvas, at(10.0, 10.0), MouseButton::Left);
        assert!(canvas.tool().is_active());
        canvas.handle_key_down("Escape");
        assert!(!canvas.tool().is_active());

        canvas.release_all_keys();
        assert!(!canvas.is_key_pressed("Escape"));
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let mut config = EditorConfig::default();
        config.navigation.min_zoom = 5.0;
        config.navigation.max_zoom = 1.0;
        let err = Canvas::new(config).unwrap_err();
        assert!(matches!(err, SketchError::InvalidConfig(_)));

        let mut config = EditorConfig::default();
        config.navigation.min_zoom = f64::NAN;
        assert!(Canvas::new(config).is_err());
        assert!(Canvas::with_document(SketchDocument::new(), EditorConfig::default()).is_ok());
    }

    #[test]
    fn test_document_queries() {
        let mut doc = SketchDocument::new();
        assert!(doc.bounds().is_none());
        let line = Line::new(
            Vector2::ZERO,
            Vector2::new(10.0, 0.0),
            LineStyle {
                width: 2.0,
                ..LineStyle::default()
            },
        );
        let line_id = line.id;
        let circle = Circle::new(Vector2::new(5.0, 0.0), 2.0, CircleStyle::default());
        let circle_id = circle.id;
        doc.add_shape(line.into());
        doc.add_shape(circle.into());

        let bounds = doc.bounds().unwrap();
        assert_eq!(bounds.min.x, -1.0);
        assert_eq!(bounds.max.x, 11.0);
        assert_eq!(doc.shapes_at(Vector2::new(5.0, 0.5)), vec![circle_id, line_id]);
        assert_eq!(doc.shapes_at(Vector2::new(0.0, 0.5)), vec![line_id]);
        assert!(doc.get_shape(circle_id).is_some());
    }

    #[test]
    fn test_fit_to_content() {
        let mut canvas = mounted(EditorConfig::default());
        canvas.add_shape(
            Line::new(
                Vector2::new(0.0, 0.0),
                Vector2::new(100.0, 100.0),
                LineStyle::default(),
            )
            .into(),
        );
        canvas.fit_to_content();
        let center = canvas.camera.object_to_canvas(Vector2::new(50.0, 50.0));
        assert_close(center, Vector2::new(400.0, 300.0));
    }

    #[test]
    fn test_render_order() {
        let mut canvas = mounted(EditorConfig::default());
        canvas.add_shape(
            Circle::new(Vector2::new(2.0, 2.0), 1.0, CircleStyle::default()).into(),
        );
        click(&mut canvas, at(10.0, 10.0), MouseButton::Left);
        canvas
            .handle_pointer(&PointerEvent::mouse(PointerPhase::Move, at(60.0, 10.0)))
            .unwrap();

        let mut surface = RecordingSurface::new(800.0, 600.0);
        canvas.render(&mut surface);

        let strokes = surface.strokes();
        // grid, circle, line preview, cursor
        assert_eq!(strokes.len(), 4);
        assert!(matches!(surface.commands[0], DrawCommand::Clear));
        let arc_index = surface
            .commands
            .iter()
            .position(|c| matches!(c, DrawCommand::Arc { .. }))
            .unwrap();
        let cursor_index = surface
            .commands
            .iter()
            .rposition(|c| matches!(c, DrawCommand::Rect(_, _)))
            .unwrap();
        assert!(arc_index < cursor_index);
        assert!(matches!(surface.commands.last(), Some(DrawCommand::Fill(_))));
    }

    #[test]
    fn test_render_without_overlays() {
        let mut config = no_grid();
        config.cursor.preview = false;
        let canvas = mounted(config);
        let mut surface = RecordingSurface::new(800.0, 600.0);
        canvas.render(&mut surface);
        assert_eq!(surface.commands.len(), 1);
    }
}
