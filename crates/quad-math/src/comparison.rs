//! Comparison utilities.

use quad_core::Real;

/// Return `true` if `value` lies within `tolerance * |reference|` of
/// `reference`.
///
/// Used to decide whether a sampling gap matches the nominal step size.
#[inline]
pub fn within_relative(value: Real, reference: Real, tolerance: Real) -> bool {
    (value - reference).abs() <= tolerance * reference.abs()
}
