//! System parameters for the SDOF oscillator.
//!
//! Purpose
//! -------
//! Provide the explicit configuration value that the engine consumes:
//! sampling step, mass, stiffness, and damping ratio. The value is passed by
//! value into every invocation; no parameter lives in shared or global state.
//!
//! Key behaviors
//! -------------
//! - [`SystemParameters::new`] validates every field and fails fast with a
//!   [`ParamError`] naming the offending field.
//! - [`SystemParameters::validate`] re-runs the same checks on a value built by
//!   struct literal (fields are public); the engine calls it before
//!   allocating anything.
//! - [`Default`] yields the application defaults
//!   `dt = 0.02, mass = 1000, stiffness = 50000, damping_ratio = 0.05`.
//!
//! Invariants & assumptions
//! ------------------------
//! - After a successful `new`/`validate`: `dt`, `mass`, `stiffness` are finite
//!   and > 0; `0 ≤ damping_ratio < 1`.
//! - Units are the caller's responsibility (SI is assumed when rendering
//!   summaries: metres, seconds, kilograms).
use crate::response::{
    core::validation::{
        validate_damping_ratio, validate_mass, validate_stiffness, validate_time_step,
    },
    errors::ParamResult,
};

/// Default sampling step in seconds.
pub const DEFAULT_DT: f64 = 0.02;
/// Default mass in kilograms.
pub const DEFAULT_MASS: f64 = 1000.0;
/// Default stiffness in N/m.
pub const DEFAULT_STIFFNESS: f64 = 50_000.0;
/// Default damping ratio (5 % of critical).
pub const DEFAULT_DAMPING_RATIO: f64 = 0.05;

/// SystemParameters — validated physical description of an SDOF oscillator.
///
/// Fields
/// ------
/// - `dt`: sampling step of the excitation record (s).
/// - `mass`: oscillator mass (kg).
/// - `stiffness`: spring stiffness (N/m).
/// - `damping_ratio`: ξ, fraction of critical damping, in `[0, 1)`.
///
/// Invariants
/// ----------
/// - Guaranteed for values returned by [`SystemParameters::new`]; values built
///   by struct literal are re-checked by the engine via
///   [`SystemParameters::validate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SystemParameters {
    /// Sampling step (s); must be finite and > 0.
    pub dt: f64,
    /// Mass (kg); must be finite and > 0.
    pub mass: f64,
    /// Stiffness (N/m); must be finite and > 0.
    pub stiffness: f64,
    /// Damping ratio ξ; must lie in `[0, 1)`.
    pub damping_ratio: f64,
}

impl SystemParameters {
    /// Construct validated parameters.
    ///
    /// # Errors
    /// - `ParamError::InvalidTimeStep` if `dt` is not finite or ≤ 0.
    /// - `ParamError::InvalidMass` if `mass` is not finite or ≤ 0.
    /// - `ParamError::InvalidStiffness` if `stiffness` is not finite or ≤ 0.
    /// - `ParamError::InvalidDampingRatio` if `damping_ratio ∉ [0, 1)`.
    ///
    /// Fields are checked in that order; the first failure is returned.
    ///
    /// # Examples
    /// ```rust
    /// # use rust_duhamel::response::core::params::SystemParameters;
    /// let params = SystemParameters::new(0.01, 500.0, 2.0e4, 0.02).unwrap();
    /// assert_eq!(params.mass, 500.0);
    ///
    /// assert!(SystemParameters::new(0.01, 500.0, 2.0e4, 1.0).is_err());
    /// ```
    pub fn new(dt: f64, mass: f64, stiffness: f64, damping_ratio: f64) -> ParamResult<Self> {
        let params = SystemParameters { dt, mass, stiffness, damping_ratio };
        params.validate()?;
        Ok(params)
    }

    /// Re-check every invariant of an existing value.
    pub fn validate(&self) -> ParamResult<()> {
        validate_time_step(self.dt)?;
        validate_mass(self.mass)?;
        validate_stiffness(self.stiffness)?;
        validate_damping_ratio(self.damping_ratio)?;
        Ok(())
    }

    /// Return a copy with a different damping ratio, validated.
    pub fn with_damping_ratio(self, damping_ratio: f64) -> ParamResult<Self> {
        SystemParameters::new(self.dt, self.mass, self.stiffness, damping_ratio)
    }

    /// Return a copy with a different time step, validated.
    pub fn with_time_step(self, dt: f64) -> ParamResult<Self> {
        SystemParameters::new(dt, self.mass, self.stiffness, self.damping_ratio)
    }
}

impl Default for SystemParameters {
    fn default() -> Self {
        SystemParameters {
            dt: DEFAULT_DT,
            mass: DEFAULT_MASS,
            stiffness: DEFAULT_STIFFNESS,
            damping_ratio: DEFAULT_DAMPING_RATIO,
        }
    }
}
