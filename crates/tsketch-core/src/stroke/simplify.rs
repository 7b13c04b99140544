//! Ramer-Douglas-Peucker polyline simplification.

use crate::vector::Vector2;

/// Simplify a polyline, keeping points that deviate from the chord by at
/// least `tolerance`.
///
/// The first and last input points are always kept. A tolerance of zero
/// keeps every point.
pub fn simplify(points: &[Vector2], tolerance: f64) -> Vec<Vector2> {
    simplify_by(points, tolerance, |p| *p)
}

/// Simplify any sequence of samples, reading each sample's position with
/// `position`. Extra data on the kept samples (pressure, timestamps) is
/// carried through untouched.
pub fn simplify_by<T, F>(points: &[T], tolerance: f64, position: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> Vector2 + Copy,
{
    if points.len() <= 2 {
        return points.to_vec();
    }

    let mut kept = rdp_head(points, tolerance, position);
    // rdp_head never emits the final point
    if let Some(last) = points.last() {
        kept.push(last.clone());
    }
    kept
}

/// Simplified points of `points` without its final endpoint, so the halves
/// of a split concatenate without duplicating the split point.
fn rdp_head<T, F>(points: &[T], tolerance: f64, position: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> Vector2 + Copy,
{
    let first = position(&points[0]);
    let last = position(&points[points.len() - 1]);

    if points.len() <= 2 {
        return vec![points[0].clone()];
    }

    // Find point with maximum distance from line between first and last
    let mut max_dist = 0.0;
    let mut max_index = 1;
    for (i, point) in points.iter().enumerate().skip(1).take(points.len() - 2) {
        let dist = perpendicular_distance(position(point), first, last);
        if dist > max_dist {
            max_dist = dist;
            max_index = i;
        }
    }

    if max_dist >= tolerance {
        let mut left = rdp_head(&points[..=max_index], tolerance, position);
        left.extend(rdp_head(&points[max_index..], tolerance, position));
        left
    } else {
        // Everything up to the last point collapses onto the chord
        vec![points[0].clone()]
    }
}

/// Distance from `point` to the line through `line_start` and `line_end`.
///
/// Coincident endpoints fall back to the plain distance to that point.
pub fn perpendicular_distance(point: Vector2, line_start: Vector2, line_end: Vector2) -> f64 {
    let d = line_end - line_start;
    let line_len_sq = d.magnitude_squared();
    if line_len_sq < f64::EPSILON {
        return point.distance(line_start);
    }

    // Area of triangle * 2 / base = height
    let area2 = ((point.x - line_start.x) * d.y - (point.y - line_start.y) * d.x).abs();
    area2 / line_len_sq.sqrt()
}
