//! Vector helpers on top of nalgebra
//!
//! `NVec3` carries all the arithmetic (add, sub, scale, dot, cross, norm);
//! this module only pins down the normalization policy for zero-length
//! input, which nalgebra leaves to the caller:
//! - generation-time code uses [`try_unit`] and fails fast,
//! - the per-frame pass uses [`unit_or_zero`] so coincident bodies produce
//!   zero pull rather than NaN.

use super::states::NVec3;
use super::error::{SimError, SimResult};

/// Orbital-plane "up" axis (+z); orbits live in the z = 0 plane
pub const UP: NVec3 = NVec3::new(0.0, 0.0, 1.0);

/// Smallest squared norm still treated as a usable direction
const MIN_NORM: f64 = 1.0e-12;

/// Unit vector along `v`, or `DegenerateVector` if `v` is (near) zero
pub fn try_unit(v: &NVec3) -> SimResult<NVec3> {
    v.try_normalize(MIN_NORM).ok_or(SimError::DegenerateVector)
}

/// Unit vector along `v`, substituting the zero vector for degenerate input
pub fn unit_or_zero(v: &NVec3) -> NVec3 {
    v.try_normalize(MIN_NORM).unwrap_or_else(NVec3::zeros)
}
