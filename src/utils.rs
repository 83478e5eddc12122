use slog::{Drain, Logger, o};

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::response::core::{
    options::EngineOptions, params::SystemParameters, record::ExcitationKind,
    record::ExcitationRecord, strategy::ConvolutionStrategy,
};

#[cfg(feature = "python-bindings")]
use numpy::{
    IntoPyArray,    // Vec → PyArray
    PyArrayMethods, // .readonly()
    PyReadonlyArray1,
};

/// Non-blocking terminal logger (`slog-term` full format behind `slog-async`).
///
/// Pass it to `EngineOptions::with_logger` to see engine diagnostics.
pub fn term_logger() -> Logger {
    let decorator = slog_term::TermDecorator::new().build();
    let drain = slog_term::FullFormat::new(decorator).build().fuse();
    let drain = slog_async::Async::new(drain).build().fuse();
    Logger::root(drain, o!("crate" => "rust_duhamel"))
}

#[cfg(feature = "python-bindings")]
#[inline]
pub fn extract_f64_array<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>,
) -> PyResult<PyReadonlyArray1<'py, f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray1<f64>>() {
        if arr_ro.as_slice().is_ok() {
            return Ok(arr_ro);
        }
    }

    if let Ok(obj) = raw_data.call_method("to_numpy", (false,), None) {
        if let Ok(series_ro) = obj.extract::<PyReadonlyArray1<f64>>() {
            if series_ro.as_slice().is_ok() {
                return Ok(series_ro);
            }
        }
    }

    let vec: Vec<f64> = raw_data.extract().map_err(|_| {
        pyo3::exceptions::PyTypeError::new_err(
            "expected a 1-D numpy.ndarray, pandas.Series, or sequence of float64",
        )
    })?;
    Ok(vec.into_pyarray(py).readonly())
}

#[cfg(feature = "python-bindings")]
pub fn extract_excitation_record<'py>(
    py: Python<'py>, excitation: &Bound<'py, PyAny>, kind: Option<&str>,
) -> PyResult<ExcitationRecord> {
    let arr = extract_f64_array(py, excitation)?;
    let slice = arr.as_slice().map_err(|_| {
        PyValueError::new_err("excitation must be a 1-D contiguous float64 array or sequence")
    })?;
    let kind = extract_excitation_kind(kind)?;
    Ok(ExcitationRecord::from_vec(slice.to_vec(), kind)?)
}

#[cfg(feature = "python-bindings")]
pub fn extract_excitation_kind(kind: Option<&str>) -> PyResult<ExcitationKind> {
    let kind_str = kind.unwrap_or("base_acceleration").to_lowercase();
    match kind_str.as_str() {
        "force" => Ok(ExcitationKind::Force),
        "base_acceleration" | "acceleration" | "ground" => Ok(ExcitationKind::BaseAcceleration),
        other => Err(PyValueError::new_err(format!(
            "invalid excitation kind {:?} (expected 'force' or 'base_acceleration')",
            other
        ))),
    }
}

#[cfg(feature = "python-bindings")]
pub fn build_system_parameters(
    dt: Option<f64>, mass: Option<f64>, stiffness: Option<f64>, damping_ratio: Option<f64>,
) -> PyResult<SystemParameters> {
    let defaults = SystemParameters::default();
    Ok(SystemParameters::new(
        dt.unwrap_or(defaults.dt),
        mass.unwrap_or(defaults.mass),
        stiffness.unwrap_or(defaults.stiffness),
        damping_ratio.unwrap_or(defaults.damping_ratio),
    )?)
}

#[cfg(feature = "python-bindings")]
pub fn build_engine_options(
    strategy: Option<&str>, max_len: Option<usize>, verbose: Option<bool>,
) -> PyResult<EngineOptions> {
    use std::str::FromStr;

    // ConvolutionStrategy::from_str -> ResponseError -> PyErr
    let strategy = match strategy {
        Some(name) => ConvolutionStrategy::from_str(name)?,
        None => ConvolutionStrategy::Direct,
    };

    let mut opts = EngineOptions::new(strategy);
    if let Some(max) = max_len {
        opts = opts.with_max_len(max);
    }
    if verbose.unwrap_or(false) {
        opts = opts.with_logger(term_logger());
    }
    Ok(opts)
}
