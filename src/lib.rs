//! rust_duhamel — Duhamel-integral response of damped SDOF systems, with
//! optional Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that exposes
//! the response engine to Python via the `_rust_duhamel` extension module.
//! When the `python-bindings` feature is enabled, this module defines the
//! Python-facing classes and the `response` submodule.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust modules (`response`, `input`, `utils`) as the
//!   public crate surface.
//! - Define the `DuhamelResponse` `#[pyclass]` and the `#[pymodule]`
//!   initializer for the `_rust_duhamel` Python extension.
//! - Register the `response` submodule under `rust_duhamel` in `sys.modules`
//!   so that dot-notation imports work as expected.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work is implemented in [`response`]; this file performs
//!   only FFI glue, argument defaults, and error mapping.
//! - Python keyword defaults mirror `SystemParameters::default()` and
//!   `ConvolutionStrategy::default()`.
//!
//! Conventions
//! -----------
//! - Errors from core Rust code are propagated as rich error types internally
//!   and converted to Python `ValueError`s at the PyO3 boundary.
//! - Series are returned to Python as freshly allocated `list[float]`.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code depends on [`response`] (usually via
//!   `response::prelude`) and [`input`], and can ignore the PyO3 items guarded
//!   by the `python-bindings` feature.
//!
//! Testing notes
//! -------------
//! - Numerical behavior is covered by unit tests in the inner modules and by
//!   the integration test under `tests/`.

pub mod input;
pub mod response;
pub mod utils;

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    response::{
        core::params::SystemParameters,
        models::engine::{SdofResponse, compute_response},
    },
    utils::{build_engine_options, build_system_parameters, extract_excitation_record},
};

/// DuhamelResponse — Python-facing wrapper around one engine invocation.
///
/// Purpose
/// -------
/// Run [`compute_response`] from Python arguments and expose the resulting
/// series, peaks, and modal parameters as read-only properties.
///
/// Parameters
/// ----------
/// Constructed from Python via
/// `DuhamelResponse(excitation, dt=0.02, mass=1000, stiffness=50000,
/// damping_ratio=0.05, strategy="direct", max_len=None, kind="base_acceleration",
/// verbose=False)`:
/// - `excitation`: 1-D array-like of finite `float64` samples.
/// - `dt`, `mass`, `stiffness`, `damping_ratio`: physical parameters.
/// - `strategy`: `"direct"` or `"recursive"` (case-insensitive).
/// - `max_len`: optional inclusive ceiling on the record length.
/// - `kind`: `"force"` or `"base_acceleration"` (metadata only).
/// - `verbose`: attach a terminal logger for engine diagnostics.
///
/// Fields
/// ------
/// - `inner`: [`SdofResponse`] produced at construction.
/// - `params`: [`SystemParameters`] used for the run.
///
/// Notes
/// -----
/// - Native Rust code should call [`compute_response`] directly.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "rust_duhamel.response")]
pub struct DuhamelResponse {
    inner: SdofResponse,
    params: SystemParameters,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl DuhamelResponse {
    #[new]
    #[pyo3(
        signature = (
            excitation,
            dt = None,
            mass = None,
            stiffness = None,
            damping_ratio = None,
            strategy = None,
            max_len = None,
            kind = None,
            verbose = None,
        ),
        text_signature = "(excitation, /, dt=0.02, mass=1000.0, stiffness=50000.0, \
                          damping_ratio=0.05, strategy='direct', max_len=None, \
                          kind='base_acceleration', verbose=False)"
    )]
    pub fn new<'py>(
        py: Python<'py>, excitation: &Bound<'py, PyAny>, dt: Option<f64>, mass: Option<f64>,
        stiffness: Option<f64>, damping_ratio: Option<f64>, strategy: Option<&str>,
        max_len: Option<usize>, kind: Option<&str>, verbose: Option<bool>,
    ) -> PyResult<Self> {
        let params = build_system_parameters(dt, mass, stiffness, damping_ratio)?;
        let record = extract_excitation_record(py, excitation, kind)?;
        let opts = build_engine_options(strategy, max_len, verbose)?;
        let inner = py.allow_threads(|| compute_response(&params, &record, &opts))?;
        Ok(DuhamelResponse { inner, params })
    }

    #[getter]
    pub fn time(&self) -> Vec<f64> {
        self.inner.series.time.to_vec()
    }

    #[getter]
    pub fn displacement(&self) -> Vec<f64> {
        self.inner.series.displacement.to_vec()
    }

    #[getter]
    pub fn velocity(&self) -> Vec<f64> {
        self.inner.series.velocity.to_vec()
    }

    #[getter]
    pub fn acceleration(&self) -> Vec<f64> {
        self.inner.series.acceleration.to_vec()
    }

    /// Displacement mapped onto the direct-quadrature scale.
    #[getter]
    pub fn scaled_displacement(&self) -> Vec<f64> {
        self.inner.physically_scaled_displacement(&self.params).to_vec()
    }

    #[getter]
    pub fn max_displacement(&self) -> f64 {
        self.inner.summary.max_displacement
    }

    #[getter]
    pub fn max_velocity(&self) -> f64 {
        self.inner.summary.max_velocity
    }

    #[getter]
    pub fn max_acceleration(&self) -> f64 {
        self.inner.summary.max_acceleration
    }

    #[getter]
    pub fn wn(&self) -> f64 {
        self.inner.modal.wn
    }

    #[getter]
    pub fn wd(&self) -> f64 {
        self.inner.modal.wd
    }

    #[getter]
    pub fn strategy(&self) -> String {
        self.inner.strategy.to_string()
    }

    #[getter]
    pub fn warnings(&self) -> Vec<String> {
        self.inner.warnings.iter().map(|w| w.to_string()).collect()
    }

    fn __repr__(&self) -> String {
        format!(
            "DuhamelResponse(strategy={:?}, n={}, max_displacement={:e})",
            self.inner.strategy.name(),
            self.inner.series.len(),
            self.inner.summary.max_displacement
        )
    }
}

/// Parse one sample per line from `text`; returns the samples as floats.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(signature = (text, kind = None), text_signature = "(text, /, kind='base_acceleration')")]
fn parse_excitation(text: &str, kind: Option<&str>) -> PyResult<Vec<f64>> {
    let kind = crate::utils::extract_excitation_kind(kind)?;
    let record = crate::input::parse_excitation(text, kind)?;
    Ok(record.samples().to_vec())
}

/// _rust_duhamel — PyO3 module initializer for the Python extension.
///
/// Purpose
/// -------
/// Define the `_rust_duhamel` Python module and register the `response`
/// submodule used by the public `rust_duhamel` package.
///
/// Errors
/// ------
/// - `PyErr`
///   If creating the submodule or manipulating `sys.modules` fails.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _rust_duhamel<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let response_mod = PyModule::new(_py, "response")?;
    response(_py, m, &response_mod)?;

    // Manually add submodules into sys.modules to allow for dot notation.
    _py.import("sys")?.getattr("modules")?.set_item("rust_duhamel.response", response_mod)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn response<'py>(
    _py: Python, rust_duhamel: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_class::<DuhamelResponse>()?;
    m.add_function(wrap_pyfunction!(parse_excitation, m)?)?;
    rust_duhamel.add_submodule(m)?;
    Ok(())
}
