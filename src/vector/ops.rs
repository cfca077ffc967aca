//! Arithmetic on `Vector3`.
//!
//! Operators cover the affine-safe combinations (vector ± vector, scaling).
//! Component-wise products, scalar offsets and mixed vector/point arithmetic
//! are named methods so a point can't silently pass for a vector.

use super::Vector3;
use crate::float_types::Real;
use crate::point::Point3;
use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

impl Add for Vector3 {
    type Output = Vector3;

    fn add(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector3 {
    type Output = Vector3;

    fn sub(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl AddAssign for Vector3 {
    fn add_assign(&mut self, rhs: Vector3) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vector3 {
    fn sub_assign(&mut self, rhs: Vector3) {
        *self = *self - rhs;
    }
}

impl Mul<Real> for Vector3 {
    type Output = Vector3;

    fn mul(self, rhs: Real) -> Vector3 {
        Vector3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Mul<Vector3> for Real {
    type Output = Vector3;

    fn mul(self, rhs: Vector3) -> Vector3 {
        rhs * self
    }
}

/// IEEE semantics: dividing by zero yields Inf/NaN components.
/// Use [`Vector3::checked_div`] to get an error instead.
impl Div<Real> for Vector3 {
    type Output = Vector3;

    fn div(self, rhs: Real) -> Vector3 {
        Vector3::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

/// Returns the negated vector; the operand is left untouched.
impl Neg for Vector3 {
    type Output = Vector3;

    fn neg(self) -> Vector3 {
        self.reverse()
    }
}

impl Vector3 {
    /// Adds `value` to every component.
    pub fn add_scalar(&self, value: Real) -> Vector3 {
        Vector3::new(self.x + value, self.y + value, self.z + value)
    }

    /// Subtracts `value` from every component.
    pub fn sub_scalar(&self, value: Real) -> Vector3 {
        Vector3::new(self.x - value, self.y - value, self.z - value)
    }

    pub fn component_mul(&self, other: &Vector3) -> Vector3 {
        Vector3::new(self.x * other.x, self.y * other.y, self.z * other.z)
    }

    pub fn component_div(&self, other: &Vector3) -> Vector3 {
        Vector3::new(self.x / other.x, self.y / other.y, self.z / other.z)
    }

    /// Component-wise `self + point`, read as a vector.
    pub fn add_point(&self, point: &Point3) -> Vector3 {
        *self + point.to_vector()
    }

    /// Component-wise `self - point`, read as a vector.
    pub fn sub_point(&self, point: &Point3) -> Vector3 {
        *self - point.to_vector()
    }

    pub fn mul_point(&self, point: &Point3) -> Vector3 {
        self.component_mul(&point.to_vector())
    }

    pub fn div_point(&self, point: &Point3) -> Vector3 {
        self.component_div(&point.to_vector())
    }
}

impl AbsDiffEq for Vector3 {
    type Epsilon = Real;

    fn default_epsilon() -> Real {
        Real::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Real) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl RelativeEq for Vector3 {
    fn default_max_relative() -> Real {
        Real::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: Real, max_relative: Real) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}

impl UlpsEq for Vector3 {
    fn default_max_ulps() -> u32 {
        Real::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Real, max_ulps: u32) -> bool {
        self.x.ulps_eq(&other.x, epsilon, max_ulps)
            && self.y.ulps_eq(&other.y, epsilon, max_ulps)
            && self.z.ulps_eq(&other.z, epsilon, max_ulps)
    }
}
