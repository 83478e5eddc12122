//! Response validation helpers — reusable checks for physical parameters,
//! excitation samples, execution bounds, and computed series.
//!
//! Purpose
//! -------
//! Centralize the small validation routines used across the response stack so
//! constructors and the engine can fail fast with structured errors that carry
//! the offending field and value.
//!
//! Key behaviors
//! -------------
//! - Validate mass, stiffness, and time step (finite and strictly positive).
//! - Validate the damping ratio against the underdamped domain `[0, 1)`.
//! - Validate excitation samples (finite) and the optional length ceiling.
//! - Detect the first non-finite value in a computed series.
//!
//! Invariants & assumptions
//! ------------------------
//! - Nothing here clamps or defaults a value; invalid inputs are reported,
//!   never repaired.
//! - NaN never passes a check: every comparison is written so that NaN falls
//!   on the rejecting side.
//!
//! Conventions
//! -----------
//! - Parameter validators return [`ParamResult`] and echo the accepted value so
//!   they compose in constructors.
//! - Series validators return [`ResponseResult`].
//! - This module contains no I/O and no logging.
//!
//! Testing notes
//! -------------
//! - Unit tests exercise each helper on representative valid and invalid
//!   inputs, including boundary cases (zero, one, negative zero, infinities,
//!   NaN).
use crate::response::errors::{
    ParamError, ParamResult, ResponseError, ResponseResult, ResponseStage,
};
use ndarray::ArrayView1;

/// Validate the oscillator mass.
///
/// Returns `Ok(mass)` when finite and strictly positive, otherwise
/// `ParamError::InvalidMass` with the offending value.
pub fn validate_mass(mass: f64) -> ParamResult<f64> {
    if !mass.is_finite() || mass <= 0.0 {
        return Err(ParamError::InvalidMass { value: mass });
    }
    Ok(mass)
}

/// Validate the spring stiffness.
///
/// Returns `Ok(stiffness)` when finite and strictly positive, otherwise
/// `ParamError::InvalidStiffness` with the offending value.
pub fn validate_stiffness(stiffness: f64) -> ParamResult<f64> {
    if !stiffness.is_finite() || stiffness <= 0.0 {
        return Err(ParamError::InvalidStiffness { value: stiffness });
    }
    Ok(stiffness)
}

/// Validate the damping ratio ξ.
///
/// Only the underdamped case is supported, so ξ must satisfy `0 ≤ ξ < 1`.
/// Critical (`ξ = 1`) and overdamped (`ξ > 1`) systems would make
/// `wd = wn·sqrt(1 − ξ²)` zero or imaginary and are rejected with
/// `ParamError::InvalidDampingRatio`.
pub fn validate_damping_ratio(damping_ratio: f64) -> ParamResult<f64> {
    if !(0.0..1.0).contains(&damping_ratio) {
        return Err(ParamError::InvalidDampingRatio { value: damping_ratio });
    }
    Ok(damping_ratio)
}

/// Validate the sampling time step `dt`.
pub fn validate_time_step(dt: f64) -> ParamResult<f64> {
    if !dt.is_finite() || dt <= 0.0 {
        return Err(ParamError::InvalidTimeStep { value: dt });
    }
    Ok(dt)
}

/// Validate a derived modal quantity.
///
/// Frequencies (`wn`, `wd`) must be finite and strictly positive; pass
/// `allow_zero = true` for the decay coefficient, which is 0 when undamped.
/// Failures are reported as `ParamError::InvalidModalParameter` naming
/// `quantity`.
pub fn validate_modal_quantity(
    quantity: &'static str, value: f64, allow_zero: bool,
) -> ParamResult<f64> {
    let in_range = if allow_zero { value >= 0.0 } else { value > 0.0 };
    if !value.is_finite() || !in_range {
        return Err(ParamError::InvalidModalParameter { quantity, value });
    }
    Ok(value)
}

/// Validate excitation samples.
///
/// Scans once and stops at the first non-finite sample, reporting it as
/// `ResponseError::NonFiniteExcitation { index, value }`. Empty input is
/// valid.
pub fn validate_excitation(samples: ArrayView1<f64>) -> ResponseResult<()> {
    match samples.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(ResponseError::NonFiniteExcitation { index, value: samples[index] }),
        None => Ok(()),
    }
}

/// Enforce an optional ceiling on the record length.
///
/// `None` means unbounded. A record exactly at the ceiling is accepted.
pub fn validate_record_length(len: usize, max_len: Option<usize>) -> ResponseResult<()> {
    match max_len {
        Some(max) if len > max => Err(ResponseError::RecordTooLong { len, max }),
        _ => Ok(()),
    }
}

/// Check a computed value and report it against `stage` if non-finite.
#[inline]
pub fn ensure_finite(stage: ResponseStage, index: usize, value: f64) -> ResponseResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ResponseError::NonFiniteResponse { stage, index, value })
    }
}
