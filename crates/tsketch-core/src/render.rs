//! Scene overlays drawn around the document shapes: the grid and the cursor
//! indicator.

use crate::camera::Camera;
use crate::config::{CursorConfig, GridConfig};
use crate::surface::{StrokeParams, Surface};
use crate::vector::Vector2;
use peniko::Color;

/// Document-space grid range covering the surface, snapped outwards to
/// multiples of `spacing`. Returns index ranges `(x0, y0, x1, y1)`.
fn grid_bounds(surface_size: Vector2, camera: &Camera, spacing: f64) -> (i64, i64, i64, i64) {
    let world_tl = camera.canvas_to_object(Vector2::ZERO);
    let world_br = camera.canvas_to_object(surface_size);

    let start_x = (world_tl.x / spacing).floor() as i64;
    let start_y = (world_tl.y / spacing).floor() as i64;
    let end_x = (world_br.x / spacing).ceil() as i64;
    let end_y = (world_br.y / spacing).ceil() as i64;

    (start_x, start_y, end_x, end_y)
}

/// Render grid lines every `grid.spacing` document units.
///
/// Skipped when the lines would be denser than `grid.min_pixel_spacing`.
pub fn render_grid(surface: &mut dyn Surface, camera: &Camera, grid: &GridConfig) {
    if !grid.enabled || grid.spacing <= 0.0 {
        return;
    }
    let pixel_spacing = camera.object_to_canvas_distance(grid.spacing);
    if pixel_spacing < grid.min_pixel_spacing {
        log::trace!("grid skipped, {pixel_spacing:.2}px spacing");
        return;
    }

    let size = surface.size();
    let size = Vector2::new(size.width, size.height);
    let (start_x, start_y, end_x, end_y) = grid_bounds(size, camera, grid.spacing);

    // Batch all lines into a single path
    surface.begin_path();
    for i in start_x..=end_x {
        let x = camera.object_to_canvas(Vector2::new(i as f64 * grid.spacing, 0.0)).x;
        surface.move_to(Vector2::new(x, 0.0));
        surface.line_to(Vector2::new(x, size.y));
    }
    for j in start_y..=end_y {
        let y = camera.object_to_canvas(Vector2::new(0.0, j as f64 * grid.spacing)).y;
        surface.move_to(Vector2::new(0.0, y));
        surface.line_to(Vector2::new(size.x, y));
    }
    surface.stroke(&StrokeParams::new(grid.color.into(), grid.line_width));
}

/// Small square marking the cursor, centered on its canvas position.
pub fn render_cursor(surface: &mut dyn Surface, canvas_position: Vector2, cursor: &CursorConfig) {
    let half = cursor.size / 2.0;
    surface.begin_path();
    surface.rect(
        canvas_position - Vector2::splat(half),
        Vector2::splat(cursor.size),
    );
    surface.stroke(&StrokeParams::new(Color::from_rgba8(0, 0, 0, 255), 1.0));
    surface.fill(Color::from_rgba8(255, 255, 255, 255));
}
