//! SDOF response engine: one invocation from parameters and record to series.
//!
//! This module wires the core stages together in strict forward order:
//!
//! 1. validate [`SystemParameters`] and the record length ceiling (no buffer
//!    is allocated before both pass);
//! 2. derive [`ModalParameters`];
//! 3. evaluate displacement with the named [`ConvolutionStrategy`];
//! 4. derive velocity and acceleration by backward differences;
//! 5. build the [`ResponseSummary`] from the finished series.
//!
//! Records with fewer than two samples are not errors: they yield all-zero
//! series plus a [`ResponseWarning::DegenerateRecord`].
//!
//! A cancel flag already raised when the call starts aborts with
//! `Cancelled { index: 0 }` before any buffer is allocated; a flag raised
//! later is picked up by the kernels between outer iterations.
//!
//! [`compute_batch`] runs independent invocations on the `rayon` pool; each
//! invocation still owns all of its buffers.
use crate::response::{
    core::{
        convolution::displacement,
        derived::{acceleration_from_velocity, velocity_from_displacement},
        modal::ModalParameters,
        options::EngineOptions,
        params::SystemParameters,
        record::ExcitationRecord,
        strategy::ConvolutionStrategy,
        validation::validate_record_length,
    },
    errors::{ResponseError, ResponseResult},
    models::series::{ResponseSeries, ResponseSummary},
};
use ndarray::Array1;
use rayon::prelude::*;
use slog::{debug, info, warn};

/// Non-fatal conditions attached to an [`SdofResponse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseWarning {
    /// Fewer than two samples: no motion can be resolved, series are zero.
    DegenerateRecord { len: usize },
}

impl std::fmt::Display for ResponseWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResponseWarning::DegenerateRecord { len } => {
                write!(f, "Excitation record has {len} sample(s); response is identically zero.")
            }
        }
    }
}

/// SdofResponse — output of one engine invocation.
///
/// Fields
/// ------
/// - `strategy`: strategy that produced `series.displacement`.
/// - `modal`: `(wn, wd, ξ·wn)` used by the kernels.
/// - `series`: time grid, displacement, velocity, acceleration.
/// - `summary`: peak absolute values of `series`.
/// - `warnings`: non-fatal conditions, empty on the normal path.
///
/// # Notes
/// - Displacement stays on the raw scale of `strategy`. Use
///   [`SdofResponse::physically_scaled_displacement`] to compare strategies.
#[derive(Debug, Clone, PartialEq)]
pub struct SdofResponse {
    pub strategy: ConvolutionStrategy,
    pub modal: ModalParameters,
    pub series: ResponseSeries,
    pub summary: ResponseSummary,
    pub warnings: Vec<ResponseWarning>,
}

impl SdofResponse {
    /// Displacement multiplied by `strategy.physical_scale(..)`.
    ///
    /// Identity for `Direct`; `−dt/(mass·wd)` for `Recursive`. Only applied on
    /// this explicit request.
    pub fn physically_scaled_displacement(&self, params: &SystemParameters) -> Array1<f64> {
        let scale = self.strategy.physical_scale(params, &self.modal);
        self.series.displacement.mapv(|u| u * scale)
    }

    pub fn is_degenerate(&self) -> bool {
        self.warnings.iter().any(|w| matches!(w, ResponseWarning::DegenerateRecord { .. }))
    }
}

/// Compute the SDOF response of `record` under `params` with `options.strategy`.
///
/// # Errors
/// - `ResponseError::InvalidParameter` for any out-of-domain parameter
///   (including `damping_ratio ≥ 1`), before allocation.
/// - `ResponseError::RecordTooLong` when `options.max_len` is exceeded, before
///   allocation.
/// - `ResponseError::InvalidParameter(InvalidModalParameter)` when `wn`, `wd`
///   or `ξ·wn` leave the finite range (e.g. `stiffness / mass` overflows).
/// - `ResponseError::Cancelled` when the options' cancel flag is raised.
/// - `ResponseError::NonFiniteResponse` on numeric overflow in any stage.
///
/// # Examples
/// ```rust
/// use rust_duhamel::response::prelude::*;
///
/// let params = SystemParameters::default();
/// let record = ExcitationRecord::from_vec(vec![1.0, 0.0, 0.0, 0.0, 0.0], ExcitationKind::Force).unwrap();
/// let response = compute_response(&params, &record, &EngineOptions::default()).unwrap();
///
/// assert_eq!(response.series.displacement[0], 0.0);
/// assert!(response.series.displacement[1] < 0.0);
/// ```
pub fn compute_response(
    params: &SystemParameters, record: &ExcitationRecord, options: &EngineOptions,
) -> ResponseResult<SdofResponse> {
    params.validate()?;
    validate_record_length(record.len(), options.max_len)?;
    let modal = ModalParameters::from_params(params)?;
    let log = &options.logger;
    let n = record.len();
    let strategy = options.strategy;

    if options.is_cancelled() {
        info!(log, "response evaluation cancelled before start"; "n" => n);
        return Err(ResponseError::Cancelled { index: 0 });
    }

    debug!(log, "starting response evaluation";
        "n" => n, "strategy" => strategy.name(), "wn" => modal.wn, "wd" => modal.wd,
        "natural_period" => modal.natural_period(), "dt" => params.dt,
        "duration" => record.duration(params.dt),
        "kernel_evaluations" => %strategy.kernel_evaluations(n));

    if record.is_degenerate() {
        warn!(log, "degenerate excitation record; returning zero response"; "n" => n);
        let series = ResponseSeries::zeros(n, params.dt);
        let summary = ResponseSummary::from_series(&series);
        return Ok(SdofResponse {
            strategy,
            modal,
            series,
            summary,
            warnings: vec![ResponseWarning::DegenerateRecord { len: n }],
        });
    }

    let displacement =
        displacement(strategy, params, &modal, record.samples(), options.cancel.as_ref())
            .inspect_err(|err| {
                if let ResponseError::Cancelled { index } = err {
                    info!(log, "response evaluation cancelled"; "index" => *index, "n" => n);
                }
            })?;
    let velocity = velocity_from_displacement(displacement.view(), params.dt)?;
    let acceleration = acceleration_from_velocity(velocity.view(), params.dt)?;

    let series = ResponseSeries { time: record.times(params.dt), displacement, velocity, acceleration };
    let summary = ResponseSummary::from_series(&series);

    info!(log, "response evaluation finished";
        "strategy" => strategy.name(),
        "max_displacement" => summary.max_displacement,
        "max_velocity" => summary.max_velocity,
        "max_acceleration" => summary.max_acceleration);

    Ok(SdofResponse { strategy, modal, series, summary, warnings: Vec::new() })
}

/// Compute independent responses for several records in parallel.
///
/// Returns one result per record, in input order. A failure in one record does
/// not affect the others; a raised cancel flag cancels every record that has
/// not finished.
pub fn compute_batch(
    params: &SystemParameters, records: &[ExcitationRecord], options: &EngineOptions,
) -> Vec<ResponseResult<SdofResponse>> {
    records.par_iter().map(|record| compute_response(params, record, options)).collect()
}
