//! Struct and functions for working with free `Vector3`s.

use crate::errors::GeometryError;
use crate::float_types::{Real, tolerance};
use crate::point::Point3;
use crate::traits::{Xyz, parse_xyz};
use nalgebra as na;
use std::fmt;
use std::str::FromStr;

mod ops;

/// A free vector: direction and magnitude, no fixed location.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3 {
    pub x: Real,
    pub y: Real,
    pub z: Real,
}

impl Vector3 {
    pub const fn new(x: Real, y: Real, z: Real) -> Self {
        Vector3 { x, y, z }
    }

    /// Vector with all three components set to `value`.
    pub const fn splat(value: Real) -> Self {
        Vector3::new(value, value, value)
    }

    pub const fn zeros() -> Self {
        Vector3::splat(0.0)
    }

    /// Unit vector along the global x-axis.
    pub const fn unit_x() -> Self {
        Vector3::new(1.0, 0.0, 0.0)
    }

    /// Unit vector along the global y-axis.
    pub const fn unit_y() -> Self {
        Vector3::new(0.0, 1.0, 0.0)
    }

    /// Unit vector along the global z-axis.
    pub const fn unit_z() -> Self {
        Vector3::new(0.0, 0.0, 1.0)
    }

    pub const fn to_point(self) -> Point3 {
        Point3::new(self.x, self.y, self.z)
    }

    pub const fn to_array(self) -> [Real; 3] {
        [self.x, self.y, self.z]
    }

    /// **Mathematical Foundation: Euclidean Norm**
    /// ```text
    /// |v| = √(x² + y² + z²)
    /// ```
    pub fn magnitude(&self) -> Real {
        self.magnitude_squared().sqrt()
    }

    pub fn magnitude_squared(&self) -> Real {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Component-wise negation.
    pub fn reverse(&self) -> Vector3 {
        Vector3::new(-self.x, -self.y, -self.z)
    }

    /// `self / |self|`.
    ///
    /// # Errors
    /// [`GeometryError::DivisionByZero`] for the zero vector.
    ///
    /// # Example
    /// ```
    /// # use sdgeom::vector::Vector3;
    /// let u = Vector3::new(0.0, 3.0, 4.0).unit().unwrap();
    /// assert_eq!(u, Vector3::new(0.0, 0.6, 0.8));
    /// assert!(Vector3::zeros().unit().is_err());
    /// ```
    pub fn unit(&self) -> Result<Vector3, GeometryError> {
        let m = self.magnitude();
        if m == 0.0 {
            return Err(GeometryError::DivisionByZero);
        }
        Ok(Vector3::new(self.x / m, self.y / m, self.z / m))
    }

    /// The vector rescaled to `length`, keeping its direction.
    pub fn amplitude(&self, length: Real) -> Result<Vector3, GeometryError> {
        Ok(self.unit()? * length)
    }

    /// Direction cosines: the cosine of the angle to each global axis.
    pub fn cosines(&self) -> Result<Vector3, GeometryError> {
        self.unit()
    }

    /// `self / value`, refusing a zero divisor instead of producing Inf/NaN.
    pub fn checked_div(&self, value: Real) -> Result<Vector3, GeometryError> {
        if value == 0.0 {
            return Err(GeometryError::DivisionByZero);
        }
        Ok(*self / value)
    }

    pub fn dot(&self, other: &Vector3) -> Real {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(&self, other: &Vector3) -> Vector3 {
        Vector3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// **Mathematical Foundation: Angle Between Vectors**
    /// ```text
    /// θ = acos(a·b / (|a||b|))
    /// ```
    /// The cosine is clamped to `[-1, 1]` so rounding noise on (anti)parallel
    /// inputs yields `0` or `π` rather than NaN.
    pub fn angle(a: &Vector3, b: &Vector3) -> Result<Real, GeometryError> {
        let denominator = a.magnitude() * b.magnitude();
        if denominator == 0.0 {
            return Err(GeometryError::DivisionByZero);
        }
        Ok((a.dot(b) / denominator).clamp(-1.0, 1.0).acos())
    }

    /// Area of the triangle spanned by `a` and `b`: `|a × b| / 2`.
    pub fn triangular_area(a: &Vector3, b: &Vector3) -> Real {
        a.cross(b).magnitude() / 2.0
    }

    /// Component of `self` along `other`.
    /// ```text
    /// proj = û · (v·û / |û|)
    /// ```
    pub fn project(&self, other: &Vector3) -> Result<Vector3, GeometryError> {
        let direction = other.unit()?;
        Ok(direction * (self.dot(&direction) / direction.magnitude()))
    }

    /// Exact test: `|self × other| == 0`.
    pub fn is_parallel(&self, other: &Vector3) -> bool {
        self.cross(other).magnitude() == 0.0
    }

    /// `|self × other| <= tolerance`.
    pub fn is_parallel_within(&self, other: &Vector3, tolerance: Real) -> bool {
        self.cross(other).magnitude() <= tolerance
    }

    /// [`Vector3::is_parallel_within`] using the crate tolerance.
    pub fn is_nearly_parallel(&self, other: &Vector3) -> bool {
        self.is_parallel_within(other, tolerance())
    }

    /// Exact test: `self · other == 0`.
    pub fn is_orthogonal(&self, other: &Vector3) -> bool {
        self.dot(other) == 0.0
    }

    pub fn is_orthogonal_within(&self, other: &Vector3, tolerance: Real) -> bool {
        self.dot(other).abs() <= tolerance
    }

    /// [`Vector3::is_orthogonal_within`] using the crate tolerance.
    pub fn is_nearly_orthogonal(&self, other: &Vector3) -> bool {
        self.is_orthogonal_within(other, tolerance())
    }

    /// **Gram-Schmidt step**: the part of `v2` orthogonal to `v1`.
    /// ```text
    /// v₂ − (v₂·v₁) v₁
    /// ```
    /// Only removes the full parallel component when `v1` is unit length.
    pub fn gram_schmidt(v1: &Vector3, v2: &Vector3) -> Vector3 {
        *v2 - v2.dot(v1) * *v1
    }

    /// Scalar triple product `v1 · (v2 × v3)`.
    pub fn triple_product(v1: &Vector3, v2: &Vector3, v3: &Vector3) -> Real {
        v1.dot(&v2.cross(v3))
    }

    /// Exact test: the scalar triple product is zero.
    pub fn coplanar(v1: &Vector3, v2: &Vector3, v3: &Vector3) -> bool {
        Vector3::triple_product(v1, v2, v3) == 0.0
    }

    pub fn coplanar_within(v1: &Vector3, v2: &Vector3, v3: &Vector3, tolerance: Real) -> bool {
        Vector3::triple_product(v1, v2, v3).abs() <= tolerance
    }
}

impl Xyz for Vector3 {
    fn from_xyz(x: Real, y: Real, z: Real) -> Self {
        Vector3::new(x, y, z)
    }

    fn x(&self) -> Real {
        self.x
    }

    fn y(&self) -> Real {
        self.y
    }

    fn z(&self) -> Real {
        self.z
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}, {}, {}}}", self.x, self.y, self.z)
    }
}

impl FromStr for Vector3 {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_xyz(s)
    }
}

impl From<[Real; 3]> for Vector3 {
    fn from(a: [Real; 3]) -> Self {
        Vector3::new(a[0], a[1], a[2])
    }
}

impl From<Vector3> for [Real; 3] {
    fn from(v: Vector3) -> Self {
        v.to_array()
    }
}

impl From<Point3> for Vector3 {
    fn from(p: Point3) -> Self {
        p.to_vector()
    }
}

impl From<na::Vector3<Real>> for Vector3 {
    fn from(v: na::Vector3<Real>) -> Self {
        Vector3::new(v.x, v.y, v.z)
    }
}

impl From<Vector3> for na::Vector3<Real> {
    fn from(v: Vector3) -> Self {
        na::Vector3::new(v.x, v.y, v.z)
    }
}
