//! Test support library
//! Provides various helper functions & utilities for tests.
#![allow(dead_code)]

use sdgeom::{Plane, Vector3, float_types::Real};

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Component-wise comparison of a vector against `[x, y, z]`.
pub fn vector_approx_eq(v: Vector3, expected: [Real; 3], eps: Real) -> bool {
    approx_eq(v.x, expected[0], eps)
        && approx_eq(v.y, expected[1], eps)
        && approx_eq(v.z, expected[2], eps)
}

/// Panics unless the plane's axes are unit length and pairwise orthogonal,
/// with `z = ±(x × y)`.
pub fn assert_orthonormal_frame(plane: &Plane) {
    let (x, y, z) = (plane.x_axis(), plane.y_axis(), plane.z_axis());
    for (name, axis) in [("x", x), ("y", y), ("z", z)] {
        assert!(
            approx_eq(axis.magnitude(), 1.0, 1e-9),
            "{} axis {} is not unit length",
            name,
            axis
        );
    }
    assert!(x.is_orthogonal_within(&y, 1e-9), "x {} not orthogonal to y {}", x, y);
    assert!(y.is_orthogonal_within(&z, 1e-9), "y {} not orthogonal to z {}", y, z);
    assert!(z.is_orthogonal_within(&x, 1e-9), "z {} not orthogonal to x {}", z, x);

    let n = x.cross(&y);
    assert!(
        vector_approx_eq(z, n.to_array(), 1e-9) || vector_approx_eq(z, n.reverse().to_array(), 1e-9),
        "z {} is not ±(x × y) = ±{}",
        z,
        n
    );
}
