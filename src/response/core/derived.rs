//! Derived response quantities: finite-difference velocity/acceleration and
//! peak extraction.
//!
//! Velocity and acceleration are **not** re-derived from the equations of
//! motion. They are first-order backward differences of the displacement
//! series, so both convolution strategies share one derivation:
//!
//! - `v[i] = (u[i] − u[i−1]) / dt` for `i ≥ 1`, `v[0] = 0`
//! - `a[i] = (v[i] − v[i−1]) / dt` for `i ≥ 2`, `a[0] = a[1] = 0`
//!
//! Peaks are `max |·|` over a whole series, without filtering or smoothing.
use crate::response::{
    core::validation::ensure_finite,
    errors::{ResponseResult, ResponseStage},
};
use ndarray::{Array1, ArrayView1};

/// Backward difference of `series`, tagged with `stage` for error reporting.
///
/// The first `skip` entries are left at zero; entries from `skip` on use
/// `(x[i] − x[i−1]) / dt`. `skip` is clamped to at least 1.
///
/// # Errors
/// - `ResponseError::NonFiniteResponse { stage, .. }` when a difference
///   overflows (e.g. very small `dt`).
pub fn backward_difference(
    series: ArrayView1<f64>, dt: f64, skip: usize, stage: ResponseStage,
) -> ResponseResult<Array1<f64>> {
    let n = series.len();
    let mut out = Array1::<f64>::zeros(n);
    for i in skip.max(1)..n {
        out[i] = ensure_finite(stage, i, (series[i] - series[i - 1]) / dt)?;
    }
    Ok(out)
}

/// Velocity from displacement: `v[i] = (u[i] − u[i−1]) / dt`, `v[0] = 0`.
pub fn velocity_from_displacement(
    displacement: ArrayView1<f64>, dt: f64,
) -> ResponseResult<Array1<f64>> {
    backward_difference(displacement, dt, 1, ResponseStage::Velocity)
}

/// Acceleration from velocity: `a[i] = (v[i] − v[i−1]) / dt` for `i ≥ 2`.
///
/// `a[1]` stays zero: `v[0]` is a placeholder, not a measured velocity, so
/// the first resolvable acceleration needs two real velocities.
pub fn acceleration_from_velocity(
    velocity: ArrayView1<f64>, dt: f64,
) -> ResponseResult<Array1<f64>> {
    backward_difference(velocity, dt, 2, ResponseStage::Acceleration)
}

/// Largest absolute value of a series; 0 for an empty series.
pub fn peak_abs(series: ArrayView1<f64>) -> f64 {
    series.iter().fold(0.0, |acc: f64, v| acc.max(v.abs()))
}

/// Index of the largest absolute value (first one on ties), `None` if empty.
pub fn peak_index(series: ArrayView1<f64>) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, v) in series.iter().map(|v| v.abs()).enumerate() {
        match best {
            Some((_, b)) if v <= b => {}
            _ => best = Some((i, v)),
        }
    }
    best.map(|(i, _)| i)
}

/// Number of strict sign changes, ignoring exact zeros.
pub fn sign_changes(series: ArrayView1<f64>) -> usize {
    let mut last = 0.0f64;
    let mut changes = 0;
    for &v in series.iter().filter(|v| **v != 0.0) {
        if last != 0.0 && v.signum() != last.signum() {
            changes += 1;
        }
        last = v;
    }
    changes
}
