//! Duhamel convolution kernels: direct quadrature and recursive accumulation.
//!
//! Both kernels turn a validated excitation record into a displacement series
//! on the same sample grid. They are two separate functions selected by
//! [`ConvolutionStrategy`](crate::response::core::strategy::ConvolutionStrategy).
//!
//! ## Direct quadrature (O(n²))
//! For every output index `i ≥ 1`:
//!
//! `du_i = Σ_{j<i} x_j · exp(−ξ·wn·(t_i − t_j)) · sin(wd·(t_i − t_j)) · dt`
//!
//! `u_i = −du_i / (m·wd)`, with `u_0 = 0`.
//!
//! A Riemann sum of the Duhamel integral. Every pair `(i, j)` pays one `exp`
//! and one `sin`, so runtime grows quadratically with record length; callers
//! bound it through `EngineOptions::max_len` and the cancel flag.
//!
//! ## Recursive accumulation (O(n))
//! Two running accumulators carry the history forward with the exact decay
//! across one step, `r = exp(−ξ·wn·dt)`:
//!
//! `c_i = r·c_{i−1} + x_i·cos(wd·t_i)`, `s_i = r·s_{i−1} + x_i·sin(wd·t_i)`
//!
//! `u_i = c_i·sin(wd·t_i) − s_i·cos(wd·t_i)`
//!
//! No `dt` weight and no `−1/(m·wd)` scale are applied.
//!
//! ## Shared behavior
//! - `dt` is re-checked on entry (`dt ≤ 0` or non-finite is
//!   `ResponseError::InvalidParameter(InvalidTimeStep)`), so parameters built
//!   by struct literal cannot reach the loops.
//! - Records with fewer than two samples yield all-zero output of the same
//!   length; no kernel loop runs.
//! - The cancel flag is polled once per outer iteration; a raised flag aborts
//!   with `ResponseError::Cancelled` and drops the partial buffer.
//! - Each displacement is checked for finiteness as soon as it is produced.
//! - Working buffers are local to one call; nothing is cached between calls.
use crate::response::{
    core::{
        modal::ModalParameters, options::CancelFlag, params::SystemParameters,
        strategy::ConvolutionStrategy,
        validation::{ensure_finite, validate_time_step},
    },
    errors::{ResponseError, ResponseResult, ResponseStage},
};
use ndarray::{Array1, ArrayView1};

/// Evaluate the displacement series with the named strategy.
///
/// Dispatches to [`direct_quadrature`] or [`recursive_accumulation`]. Only
/// `dt` is re-checked here; mass, stiffness and ξ are carried by `modal`,
/// which can only be built from valid values.
pub fn displacement(
    strategy: ConvolutionStrategy, params: &SystemParameters, modal: &ModalParameters,
    excitation: ArrayView1<f64>, cancel: Option<&CancelFlag>,
) -> ResponseResult<Array1<f64>> {
    validate_time_step(params.dt)?;
    match strategy {
        ConvolutionStrategy::Direct => direct_quadrature(params, modal, excitation, cancel),
        ConvolutionStrategy::Recursive => recursive_accumulation(params, modal, excitation, cancel),
    }
}

/// Strategy A: direct Riemann-sum quadrature of the Duhamel integral.
///
/// # Returns
/// Displacement series `u` of length `n = excitation.len()` with `u[0] = 0`.
///
/// # Errors
/// - `ResponseError::InvalidParameter` if `params.dt` is not finite and > 0.
/// - `ResponseError::Cancelled { index }` if `cancel` is raised before
///   output index `index` is computed.
/// - `ResponseError::NonFiniteResponse` (stage `Displacement`) on overflow.
///
/// # Notes
/// - The lag `t_i − t_j` is taken from the sample grid `t_k = k·dt`.
pub fn direct_quadrature(
    params: &SystemParameters, modal: &ModalParameters, excitation: ArrayView1<f64>,
    cancel: Option<&CancelFlag>,
) -> ResponseResult<Array1<f64>> {
    let dt = validate_time_step(params.dt)?;
    let n = excitation.len();
    let mut displacement = Array1::<f64>::zeros(n);
    if n < 2 {
        return Ok(displacement);
    }

    let scale = params.mass * modal.wd;
    let time = Array1::from_iter((0..n).map(|k| k as f64 * dt));

    for i in 1..n {
        check_cancelled(cancel, i)?;
        let t_i = time[i];
        let du = excitation
            .iter()
            .zip(time.iter())
            .take(i)
            .map(|(&x_j, &t_j)| {
                let lag = t_i - t_j;
                x_j * (-modal.decay * lag).exp() * (modal.wd * lag).sin() * dt
            })
            .sum::<f64>();
        displacement[i] = ensure_finite(ResponseStage::Displacement, i, -du / scale)?;
    }

    Ok(displacement)
}

/// Strategy B: recursive exact accumulation.
///
/// # Returns
/// Displacement series of length `n`; for `n < 2` all zeros.
///
/// # Errors
/// - `ResponseError::InvalidParameter` if `params.dt` is not finite and > 0.
/// - `ResponseError::Cancelled { index }` if `cancel` is raised before sample
///   `index` is folded into the accumulators.
/// - `ResponseError::NonFiniteResponse` (stage `Displacement`) on overflow.
///
/// # Notes
/// - The decay factor `exp(−ξ·wn·dt)` is computed once per call.
/// - Output is on a different scale from [`direct_quadrature`]; see
///   `ConvolutionStrategy::physical_scale`.
pub fn recursive_accumulation(
    params: &SystemParameters, modal: &ModalParameters, excitation: ArrayView1<f64>,
    cancel: Option<&CancelFlag>,
) -> ResponseResult<Array1<f64>> {
    let dt = validate_time_step(params.dt)?;
    let n = excitation.len();
    let mut displacement = Array1::<f64>::zeros(n);
    if n < 2 {
        return Ok(displacement);
    }

    let decay = modal.step_decay(dt);
    let mut cos_acc = 0.0;
    let mut sin_acc = 0.0;

    for (i, &x_i) in excitation.iter().enumerate() {
        check_cancelled(cancel, i)?;
        let (sin_phase, cos_phase) = (modal.wd * i as f64 * dt).sin_cos();
        let fi = x_i * cos_phase;
        let gi = x_i * sin_phase;
        if i == 0 {
            cos_acc = fi;
            sin_acc = gi;
        } else {
            cos_acc = cos_acc * decay + fi;
            sin_acc = sin_acc * decay + gi;
        }
        let u = cos_acc * sin_phase - sin_acc * cos_phase;
        displacement[i] = ensure_finite(ResponseStage::Displacement, i, u)?;
    }

    Ok(displacement)
}

// ---- Helper Methods ----

#[inline]
fn check_cancelled(cancel: Option<&CancelFlag>, index: usize) -> ResponseResult<()> {
    match cancel {
        Some(flag) if flag.is_cancelled() => Err(ResponseError::Cancelled { index }),
        _ => Ok(()),
    }
}
