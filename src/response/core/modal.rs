//! Modal parameter derivation for an underdamped SDOF oscillator.
//!
//! - `wn = sqrt(stiffness / mass)` — natural angular frequency (rad/s).
//! - `wd = wn · sqrt(1 − ξ²)` — damped angular frequency (rad/s).
//! - `decay = ξ · wn` — exponential decay rate of the impulse response (1/s).
//!
//! All functions are pure arithmetic and fail with a [`ParamError`] instead of
//! returning NaN, infinity, or a zero frequency. Extreme but individually
//! valid inputs (e.g. `stiffness / mass` overflowing) surface as
//! `ParamError::InvalidModalParameter` naming the quantity.
//!
//! [`ParamError`]: crate::response::errors::ParamError
use crate::response::{
    core::{
        params::SystemParameters,
        validation::{
            validate_damping_ratio, validate_mass, validate_modal_quantity, validate_stiffness,
        },
    },
    errors::ParamResult,
};

/// Natural angular frequency `wn = sqrt(stiffness / mass)`.
///
/// # Errors
/// - `ParamError::InvalidMass` / `ParamError::InvalidStiffness` when either
///   input is not finite and strictly positive.
/// - `ParamError::InvalidModalParameter { quantity: "wn", .. }` when the
///   ratio overflows to infinity or underflows to zero.
pub fn natural_frequency(mass: f64, stiffness: f64) -> ParamResult<f64> {
    let mass = validate_mass(mass)?;
    let stiffness = validate_stiffness(stiffness)?;
    validate_modal_quantity("wn", (stiffness / mass).sqrt(), false)
}

/// Damped angular frequency `wd = wn · sqrt(1 − ξ²)`.
///
/// # Errors
/// - `ParamError::InvalidDampingRatio` when `ξ ∉ [0, 1)`; the square root
///   would be zero or imaginary.
/// - `ParamError::InvalidModalParameter` when `wn` or the result is not
///   finite and strictly positive.
pub fn damped_frequency(wn: f64, damping_ratio: f64) -> ParamResult<f64> {
    let xi = validate_damping_ratio(damping_ratio)?;
    let wn = validate_modal_quantity("wn", wn, false)?;
    validate_modal_quantity("wd", wn * (1.0 - xi * xi).sqrt(), false)
}

/// Modal parameters derived from [`SystemParameters`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModalParameters {
    /// Natural angular frequency (rad/s).
    pub wn: f64,
    /// Damped angular frequency (rad/s).
    pub wd: f64,
    /// Decay coefficient `ξ·wn` (1/s).
    pub decay: f64,
}

impl ModalParameters {
    /// Derive `(wn, wd, decay)` from validated or unvalidated parameters.
    ///
    /// # Examples
    /// ```rust
    /// # use rust_duhamel::response::core::{modal::ModalParameters, params::SystemParameters};
    /// let modal = ModalParameters::from_params(&SystemParameters::default()).unwrap();
    /// assert!((modal.wn - 50f64.sqrt()).abs() < 1e-12);
    /// assert!(modal.wd < modal.wn);
    /// ```
    pub fn from_params(params: &SystemParameters) -> ParamResult<Self> {
        let wn = natural_frequency(params.mass, params.stiffness)?;
        let wd = damped_frequency(wn, params.damping_ratio)?;
        let decay = validate_modal_quantity("decay", params.damping_ratio * wn, true)?;
        Ok(ModalParameters { wn, wd, decay })
    }

    /// Undamped natural period `2π / wn` (s).
    pub fn natural_period(&self) -> f64 {
        std::f64::consts::TAU / self.wn
    }

    /// Decay factor applied across one sampling step, `exp(−ξ·wn·dt)`.
    pub fn step_decay(&self, dt: f64) -> f64 {
        (-self.decay * dt).exp()
    }
}
