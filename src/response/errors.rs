//! Errors for SDOF response evaluation (parameter validation, record checks,
//! execution bounds, and numeric breakdown).
//!
//! This module defines an engine error type, [`ResponseError`], and a parameter
//! error type, [`ParamError`], used across the Python-facing API and the
//! internal Rust core. Both implement `Display`/`Error` and, with the
//! `python-bindings` feature, convert to `PyErr` for PyO3.
//!
//! ## Conventions
//! - **Indices are 0-based** (match Rust/NumPy).
//! - Physical parameters are reported with the offending value so the caller
//!   can render a message; nothing is clamped or defaulted here.
//! - Degenerate records (length 0 or 1) are **not** errors; see
//!   `ResponseWarning` in the engine module.
#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, prelude::*};

/// Result alias for engine operations that may produce [`ResponseError`].
pub type ResponseResult<T> = Result<T, ResponseError>;

/// Result alias for parameter-construction/validation paths that may produce
/// [`ParamError`].
pub type ParamResult<T> = Result<T, ParamError>;

/// Stage of the pipeline in which a non-finite value was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseStage {
    Displacement,
    Velocity,
    Acceleration,
}

impl std::fmt::Display for ResponseStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResponseStage::Displacement => write!(f, "displacement"),
            ResponseStage::Velocity => write!(f, "velocity"),
            ResponseStage::Acceleration => write!(f, "acceleration"),
        }
    }
}

/// Invalid physical parameters (the domain errors of the engine).
///
/// Every variant carries the offending value. Raised before any buffer is
/// allocated.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamError {
    /// Mass must be finite and > 0.
    InvalidMass { value: f64 },

    /// Stiffness must be finite and > 0.
    InvalidStiffness { value: f64 },

    /// Damping ratio must lie in [0, 1) (underdamped only).
    InvalidDampingRatio { value: f64 },

    /// Time step must be finite and > 0.
    InvalidTimeStep { value: f64 },

    /// A derived modal quantity (`wn`, `wd`, `decay`) overflowed, underflowed
    /// to zero, or is otherwise out of range.
    InvalidModalParameter { quantity: &'static str, value: f64 },
}

impl ParamError {
    /// Name of the offending field, as exposed to callers.
    pub fn field(&self) -> &'static str {
        match self {
            ParamError::InvalidMass { .. } => "mass",
            ParamError::InvalidStiffness { .. } => "stiffness",
            ParamError::InvalidDampingRatio { .. } => "damping_ratio",
            ParamError::InvalidTimeStep { .. } => "dt",
            ParamError::InvalidModalParameter { quantity, .. } => quantity,
        }
    }

    /// The rejected value.
    pub fn value(&self) -> f64 {
        match self {
            ParamError::InvalidMass { value }
            | ParamError::InvalidStiffness { value }
            | ParamError::InvalidDampingRatio { value }
            | ParamError::InvalidTimeStep { value }
            | ParamError::InvalidModalParameter { value, .. } => *value,
        }
    }
}

impl std::error::Error for ParamError {}

impl std::fmt::Display for ParamError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParamError::InvalidMass { value } => {
                write!(f, "Mass must be finite and > 0, got {value}")
            }
            ParamError::InvalidStiffness { value } => {
                write!(f, "Stiffness must be finite and > 0, got {value}")
            }
            ParamError::InvalidDampingRatio { value } => {
                write!(
                    f,
                    "Damping ratio must lie in [0, 1) for an underdamped system, got {value}"
                )
            }
            ParamError::InvalidTimeStep { value } => {
                write!(f, "Time step dt must be finite and > 0, got {value}")
            }
            ParamError::InvalidModalParameter { quantity, value } => {
                write!(f, "Derived modal quantity {quantity} is out of range: {value}")
            }
        }
    }
}

/// Unified error type for response evaluation.
///
/// Covers parameter validation (wrapped [`ParamError`]), record validation,
/// execution bounds, numeric breakdown, strategy selection, and record I/O.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseError {
    // ---- Parameters ----
    /// A physical parameter is outside its domain.
    InvalidParameter(ParamError),

    // ---- Input/data validation ----
    /// An excitation sample is NaN/±inf.
    NonFiniteExcitation { index: usize, value: f64 },

    /// Record exceeds the configured length ceiling.
    RecordTooLong { len: usize, max: usize },

    // ---- Execution ----
    /// The caller cancelled the evaluation; no partial result is returned.
    Cancelled { index: usize },

    // ---- Numeric breakdown ----
    /// A stage produced NaN/±inf.
    NonFiniteResponse { stage: ResponseStage, index: usize, value: f64 },

    // ---- Configuration ----
    /// Unknown convolution strategy name.
    InvalidStrategy { name: String, reason: &'static str },

    // ---- Upstream collaborator ----
    /// Excitation file could not be read.
    Io { path: String, reason: String },
}

impl std::error::Error for ResponseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ResponseError::InvalidParameter(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for ResponseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResponseError::InvalidParameter(err) => {
                write!(f, "Invalid parameter '{}': {err}", err.field())
            }
            ResponseError::NonFiniteExcitation { index, value } => {
                write!(f, "Excitation sample at index {index} is non-finite: {value}")
            }
            ResponseError::RecordTooLong { len, max } => {
                write!(f, "Excitation record length ({len}) exceeds the configured maximum ({max}).")
            }
            ResponseError::Cancelled { index } => {
                write!(f, "Response evaluation cancelled at sample {index}.")
            }
            ResponseError::NonFiniteResponse { stage, index, value } => {
                write!(f, "Non-finite {stage} at index {index}: {value}")
            }
            ResponseError::InvalidStrategy { name, reason } => {
                write!(f, "Unknown convolution strategy {name:?}. {reason}")
            }
            ResponseError::Io { path, reason } => {
                write!(f, "Could not read excitation record from {path}: {reason}")
            }
        }
    }
}

impl From<ParamError> for ResponseError {
    fn from(err: ParamError) -> ResponseError {
        ResponseError::InvalidParameter(err)
    }
}

/// Convert a [`ResponseError`] into a Python `ValueError` with the error message.
///
/// This is used at the Rust↔Python boundary to surface domain errors cleanly.
#[cfg(feature = "python-bindings")]
impl std::convert::From<ResponseError> for PyErr {
    fn from(err: ResponseError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

/// Convert a [`ParamError`] into a Python `ValueError` with the error message.
#[cfg(feature = "python-bindings")]
impl std::convert::From<ParamError> for PyErr {
    fn from(err: ParamError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - `ParamError` field/value accessors used to render caller messages.
    // - Conversion of `ParamError` into `ResponseError::InvalidParameter`.
    // - `Display` output carrying the offending field and value.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Ensure `ParamError` exposes the offending field name and value.
    //
    // Given
    // -----
    // - One instance of each variant.
    //
    // Expect
    // ------
    // - `field()` returns the public field name; `value()` the payload.
    fn param_error_reports_field_and_value() {
        let cases = [
            (ParamError::InvalidMass { value: -1.0 }, "mass", -1.0),
            (ParamError::InvalidStiffness { value: 0.0 }, "stiffness", 0.0),
            (ParamError::InvalidDampingRatio { value: 1.0 }, "damping_ratio", 1.0),
            (ParamError::InvalidTimeStep { value: -0.02 }, "dt", -0.02),
            (ParamError::InvalidModalParameter { quantity: "wn", value: 0.0 }, "wn", 0.0),
        ];

        for (err, field, value) in cases {
            assert_eq!(err.field(), field);
            assert_eq!(err.value(), value);
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify that `?` on a `ParamResult` lifts into `ResponseError` and keeps
    // the source error reachable.
    //
    // Given
    // -----
    // - `ParamError::InvalidDampingRatio { value: 1.2 }`.
    //
    // Expect
    // ------
    // - `ResponseError::InvalidParameter` wrapping the same error.
    // - The `Display` text names the field and the value.
    fn param_error_converts_into_response_error() {
        fn lift() -> ResponseResult<()> {
            Err(ParamError::InvalidDampingRatio { value: 1.2 })?;
            Ok(())
        }

        let err = lift().unwrap_err();

        assert_eq!(
            err,
            ResponseError::InvalidParameter(ParamError::InvalidDampingRatio { value: 1.2 })
        );
        let msg = err.to_string();
        assert!(msg.contains("damping_ratio"), "message was {msg}");
        assert!(msg.contains("1.2"), "message was {msg}");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    // Purpose
    // -------
    // Check that numeric-breakdown errors name the stage and index.
    //
    // Given
    // -----
    // - A non-finite velocity at index 7.
    //
    // Expect
    // ------
    // - The message contains "velocity" and "7".
    fn non_finite_response_display_names_stage() {
        let err = ResponseError::NonFiniteResponse {
            stage: ResponseStage::Velocity,
            index: 7,
            value: f64::INFINITY,
        };

        let msg = err.to_string();

        assert!(msg.contains("velocity"));
        assert!(msg.contains("index 7"));
    }
}
