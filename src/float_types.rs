// Our Real scalar type:
pub type Real = f64;

use core::str::FromStr;
use std::sync::OnceLock;

/// Lazily-initialized tolerance used by the approximate predicates
/// (`is_nearly_parallel`, `contains_point_approx`, ...).
/// The exact predicates never consult it. It can be overridden:
///  1) **Build-time**: set env var `SDGEOM_TOLERANCE` (e.g. `SDGEOM_TOLERANCE=1e-6 cargo build`)
///  2) **Runtime**: call [`set_tolerance`] once before using the library
static TOLERANCE_CELL: OnceLock<Real> = OnceLock::new();

#[inline]
const fn default_tolerance() -> Real {
    1e-9
}

/// Returns the current tolerance.
/// If not set yet, it tries `SDGEOM_TOLERANCE` (parsed as `Real`) and
/// falls back to `1e-9`.
pub fn tolerance() -> Real {
    *TOLERANCE_CELL.get_or_init(|| {
        // Compile-time env if provided, inherited by dependencies
        if let Some(environment_variable) = option_env!("SDGEOM_TOLERANCE") {
            if let Ok(value) = Real::from_str(environment_variable) {
                log::debug!("tolerance taken from SDGEOM_TOLERANCE: {}", value);
                return value.max(Real::EPSILON);
            }
            log::warn!(
                "ignoring unparsable SDGEOM_TOLERANCE value {:?}",
                environment_variable
            );
        }
        default_tolerance()
    })
}

/// Set the tolerance programmatically once (subsequent calls are ignored).
/// Call near program start: `sdgeom::float_types::set_tolerance(1e-6);`
///
/// Returns `false` when a tolerance was already fixed.
pub fn set_tolerance(value: Real) -> bool {
    TOLERANCE_CELL.set(value.max(Real::EPSILON)).is_ok()
}

/// Round `value` to `digits` decimal places, ties to even.
///
/// Used by the digit-based equality in [`crate::traits::Xyz::equals_rounded`].
pub fn round_to(value: Real, digits: u32) -> Real {
    if !value.is_finite() {
        return value;
    }
    let scale = (10.0 as Real).powi(digits as i32);
    let scaled = value * scale;
    if !scaled.is_finite() {
        // too many digits to matter; the value is already as precise as it gets
        return value;
    }
    scaled.round_ties_even() / scale
}

/// Archimedes' constant (π)
pub const PI: Real = core::f64::consts::PI;

/// π/2
pub const FRAC_PI_2: Real = core::f64::consts::FRAC_PI_2;

/// The full circle constant (τ)
pub const TAU: Real = core::f64::consts::TAU;
