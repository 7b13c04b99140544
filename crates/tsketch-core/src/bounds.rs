//! Axis-aligned bounding boxes.

use crate::vector::Vector2;
use kurbo::Rect;

/// Axis-aligned box, `min` is componentwise less than or equal to `max`.
///
/// Always derived from shape geometry on demand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: Vector2,
    pub max: Vector2,
}

impl BoundingBox {
    /// Build a box from two arbitrary corners.
    pub fn new(a: Vector2, b: Vector2) -> Self {
        Self {
            min: Vector2::new(a.x.min(b.x), a.y.min(b.y)),
            max: Vector2::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// A degenerate box covering a single point.
    pub fn point(p: Vector2) -> Self {
        Self { min: p, max: p }
    }

    /// Smallest box containing all points, `None` for an empty slice.
    pub fn from_points(points: impl IntoIterator<Item = Vector2>) -> Option<Self> {
        points.into_iter().fold(None, |acc: Option<Self>, p| {
            Some(match acc {
                Some(b) => b.include(p),
                None => Self::point(p),
            })
        })
    }

    pub fn center(&self) -> Vector2 {
        (self.min + self.max) / 2.0
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn size(&self) -> Vector2 {
        self.max - self.min
    }

    /// Grow by `amount` on every side.
    pub fn inflate(&self, amount: f64) -> Self {
        Self {
            min: self.min - Vector2::splat(amount),
            max: self.max + Vector2::splat(amount),
        }
    }

    /// Extend to include `p`.
    pub fn include(&self, p: Vector2) -> Self {
        Self {
            min: Vector2::new(self.min.x.min(p.x), self.min.y.min(p.y)),
            max: Vector2::new(self.max.x.max(p.x), self.max.y.max(p.y)),
        }
    }

    pub fn union(&self, other: &BoundingBox) -> Self {
        self.include(other.min).include(other.max)
    }

    /// Inclusive containment test.
    pub fn contains(&self, p: Vector2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    pub fn is_zero_area(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }
}

impl From<BoundingBox> for Rect {
    fn from(b: BoundingBox) -> Self {
        Rect::new(b.min.x, b.min.y, b.max.x, b.max.y)
    }
}

impl From<Rect> for BoundingBox {
    fn from(r: Rect) -> Self {
        let r = r.abs();
        Self {
            min: Vector2::new(r.x0, r.y0),
            max: Vector2::new(r.x1, r.y1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center() {
        let b = BoundingBox::new(Vector2::new(-2.0, 0.0), Vector2::new(4.0, 10.0));
        assert_eq!(b.center(), Vector2::new(1.0, 5.0));
    }

    #[test]
    fn test_new_orders_corners() {
        let b = BoundingBox::new(Vector2::new(5.0, -1.0), Vector2::new(1.0, 3.0));
        assert_eq!(b.min, Vector2::new(1.0, -1.0));
        assert_eq!(b.max, Vector2::new(5.0, 3.0));
    }

    #[test]
    fn test_from_points() {
        assert!(BoundingBox::from_points(Vec::new()).is_none());
        let b = BoundingBox::from_points(vec![
            Vector2::new(1.0, 1.0),
            Vector2::new(-3.0, 4.0),
            Vector2::new(2.0, -5.0),
        ])
        .unwrap();
        assert_eq!(b.min, Vector2::new(-3.0, -5.0));
        assert_eq!(b.max, Vector2::new(2.0, 4.0));
    }

    #[test]
    fn test_union_and_contains() {
        let a = BoundingBox::new(Vector2::ZERO, Vector2::new(1.0, 1.0));
        let b = BoundingBox::new(Vector2::new(2.0, 2.0), Vector2::new(3.0, 3.0));
        let u = a.union(&b);
        assert!(u.contains(Vector2::new(1.5, 1.5)));
        assert!(!a.contains(Vector2::new(1.5, 1.5)));
    }

    #[test]
    fn test_rect_roundtrip() {
        let b = BoundingBox::new(Vector2::new(1.0, 2.0), Vector2::new(3.0, 5.0));
        let r: Rect = b.into();
        assert_eq!(BoundingBox::from(r), b);
    }
}
