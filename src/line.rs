//! Directed line segments.

use crate::errors::GeometryError;
use crate::float_types::{Real, tolerance};
use crate::point::Point3;
use crate::vector::Vector3;
use std::fmt;

/// A bound segment from `start` to `end`.
///
/// Zero-length segments are representable; operations that need a direction
/// report [`GeometryError::Degenerate`] for them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line3 {
    pub start: Point3,
    pub end: Point3,
}

impl Line3 {
    pub const fn new(start: Point3, end: Point3) -> Self {
        Line3 { start, end }
    }

    /// Segment from `start` to `start + direction`.
    pub fn from_point_and_vector(start: Point3, direction: Vector3) -> Self {
        Line3::new(start, start + direction)
    }

    /// `end - start`
    pub fn direction(&self) -> Vector3 {
        self.end - self.start
    }

    /// Unit vector from `start` towards `end`.
    pub fn unit_direction(&self) -> Result<Vector3, GeometryError> {
        self.direction()
            .unit()
            .map_err(|_| GeometryError::Degenerate("line has zero length"))
    }

    pub fn length(&self) -> Real {
        self.start.distance(&self.end)
    }

    /// **Parametric form**
    /// ```text
    /// P(t) = start + (end − start)·t
    /// ```
    /// `t = 0` is `start`, `t = 1` is `end`; values outside `[0, 1]` extrapolate.
    pub fn point_at(&self, t: Real) -> Point3 {
        Point3::new(
            self.start.x + (self.end.x - self.start.x) * t,
            self.start.y + (self.end.y - self.start.y) * t,
            self.start.z + (self.end.z - self.start.z) * t,
        )
    }

    pub fn midpoint(&self) -> Point3 {
        self.point_at(0.5)
    }

    /// Exact test on the directions.
    pub fn is_parallel(&self, other: &Line3) -> bool {
        self.direction().is_parallel(&other.direction())
    }

    pub fn is_parallel_within(&self, other: &Line3, tolerance: Real) -> bool {
        self.direction()
            .is_parallel_within(&other.direction(), tolerance)
    }

    /// Exact test: `|p − start| + |p − end| == length`.
    pub fn contains_point(&self, point: &Point3) -> bool {
        self.detour(point) == 0.0
    }

    /// `|p − start| + |p − end| − length <= tolerance`.
    pub fn contains_point_within(&self, point: &Point3, tolerance: Real) -> bool {
        self.detour(point).abs() <= tolerance
    }

    /// [`Line3::contains_point_within`] using the crate tolerance.
    pub fn contains_point_approx(&self, point: &Point3) -> bool {
        self.contains_point_within(point, tolerance())
    }

    fn detour(&self, point: &Point3) -> Real {
        point.distance(&self.start) + point.distance(&self.end) - self.length()
    }

    /// Parameter `t` with `point_at(t) == point`, or `None` when the point is
    /// not on the segment (within the crate tolerance).
    ///
    /// `t` is read off the direction's largest component, so segments parallel
    /// to a coordinate plane still resolve.
    pub fn parameter_of(&self, point: &Point3) -> Option<Real> {
        if !self.contains_point_approx(point) {
            return None;
        }
        let d = self.direction();
        let offset = *point - self.start;
        let (along, span) = [(offset.x, d.x), (offset.y, d.y), (offset.z, d.z)]
            .into_iter()
            .max_by(|a, b| a.1.abs().total_cmp(&b.1.abs()))?;
        if span == 0.0 {
            // zero-length line: the only point on it is `start`
            return Some(0.0);
        }
        Some(along / span)
    }

    /// Split into `segments` equal parts.
    ///
    /// Returns the `segments + 1` division points and their parameters
    /// `t = i / segments`. Both ends are included, so the last point is `end`;
    /// this is not the `t = i / (segments + 1)` spacing, which stops short of it.
    ///
    /// # Example
    /// ```
    /// # use sdgeom::{line::Line3, point::Point3};
    /// let line = Line3::new(Point3::origin(), Point3::new(4.0, 0.0, 0.0));
    /// let (points, params) = line.divide(4).unwrap();
    /// assert_eq!(params, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    /// assert_eq!(points[1], Point3::new(1.0, 0.0, 0.0));
    /// ```
    pub fn divide(&self, segments: usize) -> Result<(Vec<Point3>, Vec<Real>), GeometryError> {
        if segments == 0 {
            return Err(GeometryError::EmptyInput("divide"));
        }
        let params: Vec<Real> = (0..=segments)
            .map(|i| i as Real / segments as Real)
            .collect();
        let points = params.iter().map(|&t| self.point_at(t)).collect();
        Ok((points, params))
    }

    pub const fn to_array(self) -> [Point3; 2] {
        [self.start, self.end]
    }
}

impl fmt::Display for Line3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.start, self.end)
    }
}
