//! Affine positions.
//!
//! A [`Point3`] has the same three components as a [`Vector3`] but a
//! different meaning: the difference of two points is a vector, and a point
//! moved by a vector is a point. There is no `Point3 + Point3`.

use crate::errors::GeometryError;
use crate::float_types::Real;
use crate::traits::{Xyz, parse_xyz};
use crate::vector::Vector3;
use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use nalgebra as na;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

/// A position in 3D space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point3 {
    pub x: Real,
    pub y: Real,
    pub z: Real,
}

impl Point3 {
    pub const fn new(x: Real, y: Real, z: Real) -> Self {
        Point3 { x, y, z }
    }

    pub const fn splat(value: Real) -> Self {
        Point3::new(value, value, value)
    }

    pub const fn origin() -> Self {
        Point3::splat(0.0)
    }

    /// Position vector from the global origin to this point.
    pub const fn to_vector(self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    pub const fn to_array(self) -> [Real; 3] {
        [self.x, self.y, self.z]
    }

    /// **Mathematical Foundation: Distance Metrics**
    /// ```text
    /// d(p₁, p₂) = √((x₁-x₂)² + (y₁-y₂)² + (z₁-z₂)²)
    /// ```
    pub fn distance(&self, other: &Point3) -> Real {
        (*self - *other).magnitude()
    }

    /// `self.to_vector() - other.to_vector()`: the vector from `other` to `self`.
    pub fn vector_to_point(&self, other: &Point3) -> Vector3 {
        self.to_vector() - other.to_vector()
    }

    /// Returns `self` moved by `translation`.
    pub fn translate(&self, translation: &Vector3) -> Point3 {
        *self + *translation
    }

    pub fn add_scalar(&self, value: Real) -> Point3 {
        Point3::new(self.x + value, self.y + value, self.z + value)
    }

    pub fn sub_scalar(&self, value: Real) -> Point3 {
        Point3::new(self.x - value, self.y - value, self.z - value)
    }

    pub fn component_mul(&self, other: &Vector3) -> Point3 {
        Point3::new(self.x * other.x, self.y * other.y, self.z * other.z)
    }

    pub fn component_div(&self, other: &Vector3) -> Point3 {
        Point3::new(self.x / other.x, self.y / other.y, self.z / other.z)
    }

    /// Whether four points lie in one plane (exact scalar triple product test).
    pub fn planar_4_points(p1: &Point3, p2: &Point3, p3: &Point3, p4: &Point3) -> bool {
        let (v1, v2, v3) = Point3::edges_from(p1, p2, p3, p4);
        Vector3::coplanar(&v1, &v2, &v3)
    }

    /// [`Point3::planar_4_points`] with `|triple product| <= tolerance`.
    pub fn planar_4_points_within(
        p1: &Point3,
        p2: &Point3,
        p3: &Point3,
        p4: &Point3,
        tolerance: Real,
    ) -> bool {
        let (v1, v2, v3) = Point3::edges_from(p1, p2, p3, p4);
        Vector3::coplanar_within(&v1, &v2, &v3, tolerance)
    }

    fn edges_from(p1: &Point3, p2: &Point3, p3: &Point3, p4: &Point3) -> (Vector3, Vector3, Vector3) {
        (*p2 - *p1, *p3 - *p1, *p4 - *p1)
    }

    /// Area of the triangle `p1 p2 p3`.
    pub fn area_3_points(p1: &Point3, p2: &Point3, p3: &Point3) -> Real {
        Vector3::triangular_area(&(*p2 - *p1), &(*p3 - *p1))
    }

    /// Arithmetic centroid of `points`.
    ///
    /// # Errors
    /// [`GeometryError::EmptyInput`] when `points` is empty.
    ///
    /// # Example
    /// ```
    /// # use sdgeom::point::Point3;
    /// let c = Point3::average(&[Point3::new(0.0, 0.0, 0.0), Point3::new(2.0, 4.0, 6.0)]).unwrap();
    /// assert_eq!(c, Point3::new(1.0, 2.0, 3.0));
    /// assert!(Point3::average(&[]).is_err());
    /// ```
    pub fn average(points: &[Point3]) -> Result<Point3, GeometryError> {
        if points.is_empty() {
            return Err(GeometryError::EmptyInput("average"));
        }
        let sum = points
            .iter()
            .fold(Vector3::zeros(), |acc, p| acc + p.to_vector());
        Ok((sum / points.len() as Real).to_point())
    }
}

impl Sub for Point3 {
    type Output = Vector3;

    fn sub(self, rhs: Point3) -> Vector3 {
        Vector3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Add<Vector3> for Point3 {
    type Output = Point3;

    fn add(self, rhs: Vector3) -> Point3 {
        Point3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub<Vector3> for Point3 {
    type Output = Point3;

    fn sub(self, rhs: Vector3) -> Point3 {
        Point3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<Real> for Point3 {
    type Output = Point3;

    fn mul(self, rhs: Real) -> Point3 {
        Point3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Mul<Point3> for Real {
    type Output = Point3;

    fn mul(self, rhs: Point3) -> Point3 {
        rhs * self
    }
}

impl Div<Real> for Point3 {
    type Output = Point3;

    fn div(self, rhs: Real) -> Point3 {
        Point3::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

/// Point reflected through the origin; the operand is left untouched.
impl Neg for Point3 {
    type Output = Point3;

    fn neg(self) -> Point3 {
        Point3::new(-self.x, -self.y, -self.z)
    }
}

impl Xyz for Point3 {
    fn from_xyz(x: Real, y: Real, z: Real) -> Self {
        Point3::new(x, y, z)
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

impl fmt::Display for Point3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}, {}, {}}}", self.x, self.y, self.z)
    }
}

impl FromStr for Point3 {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_xyz(s)
    }
}

impl From<[Real; 3]> for Point3 {
    fn from(a: [Real; 3]) -> Self {
        Point3::new(a[0], a[1], a[2])
    }
}

impl From<Point3> for [Real; 3] {
    fn from(p: Point3) -> Self {
        p.to_array()
    }
}

impl From<Vector3> for Point3 {
    fn from(v: Vector3) -> Self {
        v.to_point()
    }
}

impl From<na::Point3<Real>> for Point3 {
    fn from(p: na::Point3<Real>) -> Self {
        Point3::new(p.x, p.y, p.z)
    }
}

impl From<Point3> for na::Point3<Real> {
    fn from(p: Point3) -> Self {
        na::Point3::new(p.x, p.y, p.z)
    }
}

impl AbsDiffEq for Point3 {
    type Epsilon = Real;

    fn default_epsilon() -> Real {
        Real::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Real) -> bool {
        self.to_vector().abs_diff_eq(&other.to_vector(), epsilon)
    }
}

impl RelativeEq for Point3 {
    fn default_max_relative() -> Real {
        Real::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: Real, max_relative: Real) -> bool {
        self.to_vector()
            .relative_eq(&other.to_vector(), epsilon, max_relative)
    }
}

impl UlpsEq for Point3 {
    fn default_max_ulps() -> u32 {
        Real::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Real, max_ulps: u32) -> bool {
        self.to_vector().ulps_eq(&other.to_vector(), epsilon, max_ulps)
    }
}
