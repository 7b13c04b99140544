//! Pressure-aware outline strokes.
//!
//! Turns a raw `(x, y, pressure)` polyline into the boundary polygon of a
//! variable-width stroke. The polygon is meant to be filled, usually after
//! smoothing it with [`outline_to_bezpath`] or [`trace_outline`].

use crate::surface::Surface;
use crate::vector::Vector2;
use kurbo::BezPath;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Pressure given to samples that do not carry a usable one.
const DEFAULT_PRESSURE: f64 = 0.5;

/// How quickly simulated pressure follows pointer speed.
const RATE_OF_PRESSURE_CHANGE: f64 = 0.275;

/// Slightly more than a half turn so rotated cap points never land exactly
/// on top of the opposite side.
const FIXED_PI: f64 = PI + 0.0001;

/// Points closer than this fraction of the stroke size to the end are
/// skipped (the end cap covers them).
const END_TRIM_FACTOR: f64 = 3.0 / 16.0;

/// Taper and cap settings for one end of a stroke.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrokeEnd {
    /// Length over which the stroke narrows to a point, 0 for none.
    pub taper: f64,
    /// Round cap when not tapered, flat otherwise.
    pub cap: bool,
}

impl Default for StrokeEnd {
    fn default() -> Self {
        Self {
            taper: 0.0,
            cap: true,
        }
    }
}

/// Configuration of the outline generator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrokeOptions {
    /// Base diameter of the stroke in document units.
    pub size: f64,
    /// How much pressure affects the width, in `[-1, 1]`.
    pub thinning: f64,
    /// How much to soften the outline edges, in `[0, 1]`.
    pub smoothing: f64,
    /// How much to streamline the input towards the previous point, in `[0, 1]`.
    pub streamline: f64,
    /// Derive pressure from pointer speed instead of the recorded values.
    pub simulate_pressure: bool,
    pub start: StrokeEnd,
    pub end: StrokeEnd,
    /// Whether the input is complete; the last sample is then used as-is.
    pub last: bool,
}

impl Default for StrokeOptions {
    fn default() -> Self {
        Self {
            size: 16.0,
            thinning: 0.5,
            smoothing: 0.5,
            streamline: 0.5,
            simulate_pressure: true,
            start: StrokeEnd::default(),
            end: StrokeEnd::default(),
            last: false,
        }
    }
}

/// One raw input sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokeSample {
    pub position: Vector2,
    /// Pen pressure in `[0, 1]`, negative when unknown.
    pub pressure: f64,
}

impl StrokeSample {
    pub fn new(position: Vector2, pressure: f64) -> Self {
        Self { position, pressure }
    }
}

/// A streamlined input point with its running metrics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokePoint {
    pub point: Vector2,
    pub pressure: f64,
    /// Unit vector from this point back towards the previous one.
    pub vector: Vector2,
    /// Distance to the previous point.
    pub distance: f64,
    /// Length of the stroke up to this point.
    pub running_length: f64,
}

/// Capability that converts samples into an outline polygon.
pub trait StrokeOutliner: std::fmt::Debug {
    /// Boundary polygon of the stroke, in the same space as the samples.
    /// Empty when no outline can be produced.
    fn outline(&self, samples: &[StrokeSample], options: &StrokeOptions) -> Vec<Vector2>;
}

/// Built-in outliner: streamlines the input, then offsets it by a
/// pressure-dependent radius with tapered and capped ends.
#[derive(Debug, Clone, Copy, Default)]
pub struct FreehandOutliner;

impl StrokeOutliner for FreehandOutliner {
    fn outline(&self, samples: &[StrokeSample], options: &StrokeOptions) -> Vec<Vector2> {
        outline_points(&stroke_points(samples, options), options)
    }
}

fn sample_pressure(sample: &StrokeSample, fallback: f64) -> f64 {
    if sample.pressure >= 0.0 {
        sample.pressure
    } else {
        fallback
    }
}

/// Streamline the raw samples and annotate them with direction and length.
pub fn stroke_points(samples: &[StrokeSample], options: &StrokeOptions) -> Vec<StrokePoint> {
    if samples.is_empty() {
        return Vec::new();
    }

    let t = 0.15 + (1.0 - options.streamline) * 0.85;
    let mut pts: Vec<StrokeSample> = samples.to_vec();

    // Two points: interpolate a few more so the outline has something to bend
    if pts.len() == 2 {
        let first = pts[0];
        let last = pts[1];
        pts.truncate(1);
        for i in 1..5 {
            let f = i as f64 / 4.0;
            pts.push(StrokeSample {
                position: first.position.lerp(last.position, f),
                pressure: first.pressure + (last.pressure - first.pressure) * f,
            });
        }
    }

    // Single point: add a neighbour so the dot gets a direction
    if pts.len() == 1 {
        let offset = Vector2::splat((options.size / 16.0).max(f64::EPSILON));
        pts.push(StrokeSample {
            position: pts[0].position + offset,
            pressure: pts[0].pressure,
        });
    }

    let mut result = vec![StrokePoint {
        point: pts[0].position,
        pressure: sample_pressure(&pts[0], 0.25),
        vector: Vector2::new(1.0, 1.0),
        distance: 0.0,
        running_length: 0.0,
    }];

    let mut has_reached_minimum_length = false;
    let mut running_length = 0.0;
    let mut prev = result[0];
    let max = pts.len() - 1;

    for (i, sample) in pts.iter().enumerate().skip(1) {
        let point = if options.last && i == max {
            sample.position
        } else {
            prev.point.lerp(sample.position, t)
        };

        if point == prev.point {
            continue;
        }

        let distance = point.distance(prev.point);
        running_length += distance;

        // Skip the first few points until the stroke has some length
        if i < max && !has_reached_minimum_length {
            if running_length < options.size {
                continue;
            }
            has_reached_minimum_length = true;
        }

        prev = StrokePoint {
            point,
            pressure: sample_pressure(sample, DEFAULT_PRESSURE),
            vector: (prev.point - point).normalize(),
            distance,
            running_length,
        };
        result.push(prev);
    }

    result[0].vector = result.get(1).map_or(Vector2::ZERO, |p| p.vector);
    result
}

fn stroke_radius(size: f64, thinning: f64, pressure: f64) -> f64 {
    size * (0.5 - thinning * (0.5 - pressure))
}

fn simulated_pressure(previous: f64, distance: f64, size: f64) -> f64 {
    let sp = (distance / size).min(1.0);
    let rp = (1.0 - sp).min(1.0);
    (previous + (rp - previous) * (sp * RATE_OF_PRESSURE_CHANGE)).min(1.0)
}

fn ease_out_quad(t: f64) -> f64 {
    t * (2.0 - t)
}

fn ease_out_cubic(t: f64) -> f64 {
    let t = t - 1.0;
    t * t * t + 1.0
}

/// Offset the streamlined points into the outline polygon.
///
/// The result runs along the left side, around the end cap, back along the
/// right side and around the start cap.
pub fn outline_points(points: &[StrokePoint], options: &StrokeOptions) -> Vec<Vector2> {
    let size = options.size;
    if points.is_empty() || size <= 0.0 {
        return Vec::new();
    }

    let last_index = points.len() - 1;
    let total_length = points[last_index].running_length;
    let taper_start = options.start.taper.max(0.0);
    let taper_end = options.end.taper.max(0.0);
    let min_distance = (size * options.smoothing).powi(2);
    let end_trim = size * END_TRIM_FACTOR;

    let mut left_pts: Vec<Vector2> = Vec::new();
    let mut right_pts: Vec<Vector2> = Vec::new();

    let mut prev_pressure = points.iter().take(10).fold(points[0].pressure, |acc, p| {
        let pressure = if options.simulate_pressure {
            simulated_pressure(acc, p.distance, size)
        } else {
            p.pressure
        };
        (acc + pressure) / 2.0
    });

    let mut radius = stroke_radius(size, options.thinning, points[last_index].pressure);
    let mut first_radius: Option<f64> = None;
    let mut prev_vector = points[0].vector;
    let mut pl = points[0].point;
    let mut pr = pl;
    let mut tl = pl;
    let mut tr = pr;
    let mut is_prev_point_sharp_corner = false;

    for (i, p) in points.iter().enumerate() {
        let StrokePoint {
            point,
            vector,
            distance,
            running_length,
            ..
        } = *p;
        let mut pressure = p.pressure;

        if i < last_index && total_length - running_length < end_trim {
            continue;
        }

        if options.thinning != 0.0 {
            if options.simulate_pressure {
                pressure = simulated_pressure(prev_pressure, distance, size);
            }
            radius = stroke_radius(size, options.thinning, pressure);
        } else {
            radius = size / 2.0;
        }

        if first_radius.is_none() {
            first_radius = Some(radius);
        }

        let ts = if running_length < taper_start {
            ease_out_quad(running_length / taper_start)
        } else {
            1.0
        };
        let te = if total_length - running_length < taper_end {
            ease_out_cubic((total_length - running_length) / taper_end)
        } else {
            1.0
        };
        radius = (radius * ts.min(te)).max(0.01);

        let next_vector = if i < last_index {
            points[i + 1].vector
        } else {
            vector
        };
        let next_dpr = if i < last_index {
            vector.dot(next_vector)
        } else {
            1.0
        };
        let prev_dpr = vector.dot(prev_vector);

        let is_point_sharp_corner = prev_dpr < 0.0 && !is_prev_point_sharp_corner;
        let is_next_point_sharp_corner = next_dpr < 0.0;

        if is_point_sharp_corner || is_next_point_sharp_corner {
            // Wrap a half circle around the corner
            let offset = prev_vector.perpendicular() * radius;
            for step in 0..=13 {
                let t = step as f64 / 13.0;
                tl = (point - offset).rotate_around(point, FIXED_PI * t);
                left_pts.push(tl);
                tr = (point + offset).rotate_around(point, -FIXED_PI * t);
                right_pts.push(tr);
            }
            pl = tl;
            pr = tr;
            if is_next_point_sharp_corner {
                is_prev_point_sharp_corner = true;
            }
            continue;
        }

        is_prev_point_sharp_corner = false;

        if i == last_index {
            let offset = vector.perpendicular() * radius;
            left_pts.push(point - offset);
            right_pts.push(point + offset);
            continue;
        }

        let offset = next_vector.lerp(vector, next_dpr).perpendicular() * radius;

        tl = point - offset;
        if i <= 1 || pl.distance_squared(tl) > min_distance {
            left_pts.push(tl);
            pl = tl;
        }

        tr = point + offset;
        if i <= 1 || pr.distance_squared(tr) > min_distance {
            right_pts.push(tr);
            pr = tr;
        }

        prev_pressure = pressure;
        prev_vector = vector;
    }

    let first_point = points[0].point;
    let last_point = if points.len() > 1 {
        points[last_index].point
    } else {
        first_point + Vector2::splat(size / 16.0)
    };

    if points.len() == 1 {
        if (taper_start == 0.0 && taper_end == 0.0) || options.last {
            // A dot
            let r = first_radius.unwrap_or(radius);
            let start = first_point - (first_point - last_point).perpendicular().normalize() * r;
            return (1..=13)
                .map(|step| start.rotate_around(first_point, FIXED_PI * 2.0 * step as f64 / 13.0))
                .collect();
        }
        return Vec::new();
    }

    if left_pts.is_empty() || right_pts.is_empty() {
        return Vec::new();
    }

    let mut start_cap: Vec<Vector2> = Vec::new();
    if taper_start > 0.0 {
        // Tapered start closes on its own
    } else if options.start.cap {
        for step in 1..=13 {
            let t = step as f64 / 13.0;
            start_cap.push(right_pts[0].rotate_around(first_point, FIXED_PI * t));
        }
    } else {
        let corners = left_pts[0] - right_pts[0];
        let offset_a = corners * 0.5;
        let offset_b = corners * 0.51;
        start_cap.extend([
            first_point - offset_a,
            first_point - offset_b,
            first_point + offset_b,
            first_point + offset_a,
        ]);
    }

    let mut end_cap: Vec<Vector2> = Vec::new();
    let direction = (-points[last_index].vector).perpendicular();
    if taper_end > 0.0 {
        end_cap.push(last_point);
    } else if options.end.cap {
        let start = last_point + direction * radius;
        for step in 1..29 {
            let t = step as f64 / 29.0;
            end_cap.push(start.rotate_around(last_point, FIXED_PI * 3.0 * t));
        }
    } else {
        end_cap.extend([
            last_point + direction * radius,
            last_point + direction * (radius * 0.99),
            last_point - direction * (radius * 0.99),
            last_point - direction * radius,
        ]);
    }

    let mut outline = left_pts;
    outline.extend(end_cap);
    outline.extend(right_pts.into_iter().rev());
    outline.extend(start_cap);
    outline
}

/// Closed path through an outline polygon, each vertex used as the control
/// point of a quadratic curve ending at the midpoint to the next vertex.
pub fn outline_to_bezpath(points: &[Vector2]) -> BezPath {
    let mut path = BezPath::new();
    let Some(first) = points.first() else {
        return path;
    };

    path.move_to(first.to_point());
    for (i, p) in points.iter().enumerate() {
        let next = points[(i + 1) % points.len()];
        path.quad_to(p.to_point(), p.midpoint(next).to_point());
    }
    path.close_path();
    path
}

/// Same smoothing as [`outline_to_bezpath`], issued as surface path calls.
pub fn trace_outline(surface: &mut dyn Surface, points: &[Vector2]) {
    let Some(first) = points.first() else {
        return;
    };

    surface.move_to(*first);
    for (i, p) in points.iter().enumerate() {
        let next = points[(i + 1) % points.len()];
        surface.quad_to(*p, p.midpoint(next));
    }
    surface.close_path();
}
