//! TSketch Core Library
//!
//! Platform-agnostic document, viewport and tool logic for the TSketch
//! editor. Drawing goes through the [`Surface`] trait; hosts feed pointer,
//! wheel and key events into a [`Canvas`].

pub mod bounds;
pub mod camera;
pub mod canvas;
pub mod config;
pub mod error;
pub mod gesture;
pub mod input;
pub mod render;
pub mod shapes;
pub mod stroke;
pub mod surface;
pub mod tools;
pub mod vector;

pub use bounds::BoundingBox;
pub use camera::Camera;
pub use canvas::{Canvas, SketchDocument};
pub use config::{EditorConfig, SerializableColor};
pub use error::{SketchError, SketchResult};
pub use gesture::{GestureState, Navigation};
pub use input::{Buttons, Modifiers, MouseButton, PointerEvent, PointerKind, PointerPhase, WheelEvent};
pub use shapes::{Shape, ShapeId, ShapeTrait};
pub use stroke::{FreehandOutliner, StrokeOptions, StrokeOutliner, StrokeSample};
pub use surface::{DrawCommand, LineCap, RecordingSurface, StrokeParams, Surface};
pub use tools::{Tool, ToolKind};
pub use vector::Vector2;
