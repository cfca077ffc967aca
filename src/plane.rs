//! Planes as local coordinate frames.
//!
//! A [`Plane`] is an origin plus three mutually orthogonal axes, together with
//! the implicit Cartesian equation
//! ```text
//! a·x + b·y + c·z + d = 0
//! ```
//! where `(a, b, c)` is the normal the plane was built from.
//!
//! Every constructor except [`Plane::from_axes`] derives unit, pairwise
//! orthogonal axes and fails fast with [`GeometryError::Degenerate`] when its
//! input does not span a frame.
//!
//! Handedness depends on the path: frames from points, in-plane directions or
//! a normal have `Z = Y × X`, line frames have `Z = X × Y`.

use crate::errors::GeometryError;
use crate::float_types::{Real, tolerance};
use crate::line::Line3;
use crate::matrix::Matrix;
use crate::point::Point3;
use crate::vector::Vector3;
use nalgebra::DMatrix;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    origin: Vector3,
    x_axis: Vector3,
    y_axis: Vector3,
    z_axis: Vector3,
    a: Real,
    b: Real,
    c: Real,
    d: Real,
}

impl Plane {
    /// Assemble a plane, deriving `(a, b, c, d)` from `normal` and `origin`.
    fn assemble(origin: Vector3, x_axis: Vector3, y_axis: Vector3, z_axis: Vector3, normal: Vector3) -> Self {
        Plane {
            origin,
            x_axis,
            y_axis,
            z_axis,
            a: normal.x,
            b: normal.y,
            c: normal.z,
            d: -(normal.x * origin.x + normal.y * origin.y + normal.z * origin.z),
        }
    }

    /// Plane from an origin and three axes, stored verbatim.
    ///
    /// `(a, b, c)` is `z_axis` as given. Nothing is normalized or checked; the
    /// caller is trusted to pass a right-handed orthonormal triple.
    pub fn from_axes(origin: Vector3, x_axis: Vector3, y_axis: Vector3, z_axis: Vector3) -> Self {
        Plane::assemble(origin, x_axis, y_axis, z_axis, z_axis)
    }

    /// Plane through `origin` spanned by two in-plane directions.
    ///
    /// ```text
    /// n = x_axis × y_axis
    /// X = x_axis / |x_axis|
    /// Y = −(X × n) / |X × n|      (the in-plane direction 90° from X, towards y_axis)
    /// Z = Y × X
    /// ```
    /// `(a, b, c)` is the unnormalized `n`.
    ///
    /// # Errors
    /// [`GeometryError::Degenerate`] when the two directions are parallel or
    /// either is zero, judged by `|n| <= tolerance · |x_axis| · |y_axis|`.
    pub fn from_origin_and_axes(origin: Point3, x_axis: Vector3, y_axis: Vector3) -> Result<Self, GeometryError> {
        let normal = x_axis.cross(&y_axis);
        if normal.magnitude() <= tolerance() * x_axis.magnitude() * y_axis.magnitude() {
            log::trace!("rejecting plane: {} and {} are parallel", x_axis, y_axis);
            return Err(GeometryError::Degenerate("in-plane directions are parallel or zero"));
        }

        let x = x_axis.unit()?;
        let y = x.cross(&normal).unit()?.reverse();
        let z = y.cross(&x).unit()?;

        Ok(Plane::assemble(origin.to_vector(), x, y, z, normal))
    }

    /// Plane through three points with origin `p1` and x-axis towards `p2`.
    ///
    /// Same frame as [`Plane::from_origin_and_axes`]`(p1, p2 − p1, p3 − p1)`.
    ///
    /// # Errors
    /// [`GeometryError::Degenerate`] when the points are collinear or coincide.
    pub fn from_points(p1: Point3, p2: Point3, p3: Point3) -> Result<Self, GeometryError> {
        Plane::from_origin_and_axes(p1, p2 - p1, p3 - p1)
    }

    /// Plane through `origin` with the given normal.
    ///
    /// ```text
    /// u = n × X̂        v = n × u
    /// X = u / |u|      Y = −v / |v|      Z = n / |n|
    /// ```
    /// `(a, b, c)` is `normal` as given.
    ///
    /// # Errors
    /// [`GeometryError::Degenerate`] when `normal` is parallel to the global
    /// x-axis (`|u| <= tolerance · |n|`) or zero.
    pub fn from_point_normal(origin: Point3, normal: Vector3) -> Result<Self, GeometryError> {
        let u = normal.cross(&Vector3::unit_x());
        if u.magnitude() <= tolerance() * normal.magnitude() {
            log::trace!("rejecting plane: normal {} is parallel to the global x-axis", normal);
            return Err(GeometryError::Degenerate("normal is parallel to the global x-axis or zero"));
        }
        let v = normal.cross(&u);

        let x = u.unit()?;
        let y = v.unit()?.reverse();
        let z = normal.unit()?;

        Ok(Plane::assemble(origin.to_vector(), x, y, z, normal))
    }

    /// Rotation frame along a line, oriented by a hint vector.
    ///
    /// The line direction `L̂` and the part of `orientation` orthogonal to it
    /// give the frame:
    /// ```text
    /// L̂ = (end − start) / |end − start|
    /// Ŷ = gram_schmidt(L̂, orientation) / |…|
    /// Ẑ = L̂ × Ŷ
    /// ```
    /// * `x_axis_along_line == true`  → `(X, Y, Z) = (L̂, Ŷ, Ẑ)`
    /// * `x_axis_along_line == false` → `(X, Y, Z) = (Ŷ, Ẑ, L̂)`, the line is the frame's z-axis
    ///
    /// The origin is `line.start`. When `orientation` is parallel to the line
    /// (its remainder after removing the `L̂` component is at most
    /// `tolerance · |orientation|`), the global z-axis is used instead, or
    /// `−X̂` when the line itself runs along z.
    ///
    /// # Errors
    /// [`GeometryError::Degenerate`] for a zero-length line.
    pub fn from_line(line: &Line3, orientation: Vector3, x_axis_along_line: bool) -> Result<Self, GeometryError> {
        let along = line.unit_direction()?;

        let mut remainder = Vector3::gram_schmidt(&along, &orientation);
        if remainder.magnitude() <= tolerance() * orientation.magnitude() {
            let vertical = Vector3::gram_schmidt(&along, &Vector3::unit_z()).magnitude() <= tolerance();
            let fallback = if vertical {
                -Vector3::unit_x()
            } else {
                Vector3::unit_z()
            };
            log::warn!(
                "orientation vector {} parallel to line {}: rotation frame oriented to {}",
                orientation,
                line,
                fallback
            );
            remainder = Vector3::gram_schmidt(&along, &fallback);
        }

        // second pass removes what cancellation left along the line
        let across = Vector3::gram_schmidt(&along, &remainder.unit()?).unit()?;
        let up = along.cross(&across).unit()?;

        let origin = line.start.to_vector();
        let (x, y, z) = if x_axis_along_line {
            (along, across, up)
        } else {
            (across, up, along)
        };
        Ok(Plane::assemble(origin, x, y, z, z))
    }

    /// The global XY plane: origin at zero, axes X, Y, Z.
    pub fn xy() -> Self {
        Plane::from_axes(
            Vector3::zeros(),
            Vector3::unit_x(),
            Vector3::unit_y(),
            Vector3::unit_z(),
        )
    }

    /// The global YZ plane: axes Y, Z, X.
    pub fn yz() -> Self {
        Plane::from_axes(
            Vector3::zeros(),
            Vector3::unit_y(),
            Vector3::unit_z(),
            Vector3::unit_x(),
        )
    }

    /// The global XZ plane: axes X, Z, −Y.
    pub fn xz() -> Self {
        Plane::from_axes(
            Vector3::zeros(),
            Vector3::unit_x(),
            Vector3::unit_z(),
            -Vector3::unit_y(),
        )
    }

    pub const fn origin(&self) -> Vector3 {
        self.origin
    }

    pub const fn x_axis(&self) -> Vector3 {
        self.x_axis
    }

    pub const fn y_axis(&self) -> Vector3 {
        self.y_axis
    }

    pub const fn z_axis(&self) -> Vector3 {
        self.z_axis
    }

    /// `a` in `a·x + b·y + c·z + d = 0`
    pub const fn a(&self) -> Real {
        self.a
    }

    /// `b` in `a·x + b·y + c·z + d = 0`
    pub const fn b(&self) -> Real {
        self.b
    }

    /// `c` in `a·x + b·y + c·z + d = 0`
    pub const fn c(&self) -> Real {
        self.c
    }

    /// `d` in `a·x + b·y + c·z + d = 0`
    pub const fn d(&self) -> Real {
        self.d
    }

    /// `[a, b, c, d]`
    pub const fn coefficients(&self) -> [Real; 4] {
        [self.a, self.b, self.c, self.d]
    }

    /// 3×3 matrix with the x, y and z axes as rows.
    pub fn to_rotation_matrix(&self) -> Matrix {
        let rows = [self.x_axis, self.y_axis, self.z_axis];
        let data: Vec<Real> = rows.iter().flat_map(|v| v.to_array()).collect();
        Matrix::from(DMatrix::from_row_slice(3, 3, &data))
    }

    /// `[origin, x_axis, y_axis, z_axis]`
    pub const fn to_array(&self) -> [Vector3; 4] {
        [self.origin, self.x_axis, self.y_axis, self.z_axis]
    }

    pub fn to_string_array(&self) -> [String; 4] {
        self.to_array().map(|v| v.to_string())
    }

    /// Left-hand side of the plane equation at `point`; zero on the plane.
    pub fn evaluate(&self, point: &Point3) -> Real {
        self.a * point.x + self.b * point.y + self.c * point.z + self.d
    }

    /// Distance from the plane, positive on the side `(a, b, c)` points to.
    ///
    /// This is the `z_axis` side for every constructor except
    /// [`Plane::from_points`] and [`Plane::from_origin_and_axes`]. Those store
    /// `Z = Y × X`, the normalized `−(a, b, c)`, so a point on their `+Z` side
    /// has a negative distance.
    pub fn signed_distance_to_point(&self, point: &Point3) -> Result<Real, GeometryError> {
        let length = Vector3::new(self.a, self.b, self.c).magnitude();
        if length == 0.0 {
            return Err(GeometryError::DivisionByZero);
        }
        Ok(self.evaluate(point) / length)
    }

    pub fn distance_to_point(&self, point: &Point3) -> Result<Real, GeometryError> {
        Ok(self.signed_distance_to_point(point)?.abs())
    }

    /// Foot of the perpendicular from `point` onto the plane.
    ///
    /// Moves along `(a, b, c)`, which can be opposite to `z_axis` (see
    /// [`Plane::signed_distance_to_point`]); the foot is the same either way.
    pub fn project_point(&self, point: &Point3) -> Result<Point3, GeometryError> {
        let normal = Vector3::new(self.a, self.b, self.c).unit()?;
        let distance = self.signed_distance_to_point(point)?;
        Ok(*point - normal * distance)
    }

    pub fn contains_point_within(&self, point: &Point3, tolerance: Real) -> Result<bool, GeometryError> {
        Ok(self.distance_to_point(point)? <= tolerance)
    }
}

impl Default for Plane {
    fn default() -> Self {
        Plane::xy()
    }
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "< O{}, X{}, Y{}, Z{}>",
            self.origin, self.x_axis, self.y_axis, self.z_axis
        )
    }
}
