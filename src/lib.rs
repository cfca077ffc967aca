//! **sdgeom**: 3D analytic-geometry primitives for structural and CAD work.
//!
//! The crate provides free [vectors](vector::Vector3), affine [points](point::Point3),
//! directed [line segments](line::Line3), rectangular [matrices](matrix::Matrix)
//! and [planes](plane::Plane) that carry both a local coordinate frame and
//! their Cartesian equation `a·x + b·y + c·z + d = 0`.
//!
//! ```
//! use sdgeom::{Plane, Point3};
//!
//! let plane = Plane::from_points(
//!     Point3::new(0.5, 0.5, 1.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.0, 0.0, 1.0),
//! )
//! .unwrap();
//! assert!(plane.x_axis().is_nearly_orthogonal(&plane.y_axis()));
//! ```
//!
//! # Features
//! #### Optional
//! - **wasm**: `wasm-bindgen` wrappers for the primitives
//!
//! # Tolerances
//! Predicates such as [`Vector3::is_parallel`] compare exactly. Their
//! `_within` and `is_nearly_*` counterparts take an explicit tolerance or the
//! crate-wide [`float_types::tolerance`].

#![forbid(unsafe_code)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod errors;
pub mod float_types;
pub mod line;
pub mod matrix;
pub mod plane;
pub mod point;
pub mod traits;
pub mod vector;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use errors::GeometryError;
pub use line::Line3;
pub use matrix::Matrix;
pub use plane::Plane;
pub use point::Point3;
pub use traits::Xyz;
pub use vector::Vector3;
