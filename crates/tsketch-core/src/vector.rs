//! 2D vector value type used for every coordinate in the editor.

use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A 2D vector.
///
/// All operations return a new value; a `Vector2` is never mutated through
/// a shared reference. Used both for document-space and canvas-space
/// positions, the camera decides which space a value lives in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub const ZERO: Vector2 = Vector2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Vector with both components set to `v`.
    pub const fn splat(v: f64) -> Self {
        Self { x: v, y: v }
    }

    /// Euclidean length.
    pub fn magnitude(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Squared length (avoids the square root).
    pub fn magnitude_squared(self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    pub fn dot(self, other: Vector2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Round both components to the nearest integer.
    pub fn round(self) -> Self {
        Self::new(self.x.round(), self.y.round())
    }

    pub fn distance(self, other: Vector2) -> f64 {
        (self - other).magnitude()
    }

    pub fn distance_squared(self, other: Vector2) -> f64 {
        (self - other).magnitude_squared()
    }

    /// Unit vector in the same direction, or zero for a zero vector.
    pub fn normalize(self) -> Self {
        let len = self.magnitude();
        if len == 0.0 { Self::ZERO } else { self / len }
    }

    /// The vector rotated a quarter turn: `(y, -x)`.
    pub fn perpendicular(self) -> Self {
        Self::new(self.y, -self.x)
    }

    /// Linear interpolation, `t = 0` yields `self`, `t = 1` yields `other`.
    pub fn lerp(self, other: Vector2, t: f64) -> Self {
        self + (other - self) * t
    }

    /// Midpoint between two positions.
    pub fn midpoint(self, other: Vector2) -> Self {
        self.lerp(other, 0.5)
    }

    /// Rotate this point around `center` by `angle` radians.
    pub fn rotate_around(self, center: Vector2, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        let d = self - center;
        Self::new(d.x * cos - d.y * sin + center.x, d.x * sin + d.y * cos + center.y)
    }

    /// Whether both components are finite.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub fn to_point(self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

impl Add for Vector2 {
    type Output = Vector2;

    fn add(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector2 {
    type Output = Vector2;

    fn sub(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Vector2;

    fn mul(self, rhs: f64) -> Vector2 {
        Vector2::new(self.x * rhs, self.y * rhs)
    }
}

/// Componentwise product.
impl Mul for Vector2 {
    type Output = Vector2;

    fn mul(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.x * rhs.x, self.y * rhs.y)
    }
}

impl Div<f64> for Vector2 {
    type Output = Vector2;

    fn div(self, rhs: f64) -> Vector2 {
        Vector2::new(self.x / rhs, self.y / rhs)
    }
}

/// Componentwise quotient.
impl Div for Vector2 {
    type Output = Vector2;

    fn div(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.x / rhs.x, self.y / rhs.y)
    }
}

impl Neg for Vector2 {
    type Output = Vector2;

    fn neg(self) -> Vector2 {
        Vector2::new(-self.x, -self.y)
    }
}

impl From<Point> for Vector2 {
    fn from(p: Point) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<Vec2> for Vector2 {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector2> for Point {
    fn from(v: Vector2) -> Self {
        v.to_point()
    }
}

impl From<Vector2> for Vec2 {
    fn from(v: Vector2) -> Self {
        v.to_vec2()
    }
}

impl From<(f64, f64)> for Vector2 {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}
