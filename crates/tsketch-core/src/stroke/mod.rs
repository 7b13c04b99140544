//! Freehand stroke algorithms: polyline simplification and outline generation.

mod outline;
mod simplify;

pub use outline::{
    FreehandOutliner, StrokeEnd, StrokeOptions, StrokeOutliner, StrokePoint, StrokeSample,
    outline_points, outline_to_bezpath, stroke_points, trace_outline,
};
pub use simplify::{perpendicular_distance, simplify, simplify_by};
