//! response — Duhamel-integral time-domain response of damped SDOF systems.
//!
//! Purpose
//! -------
//! Compute displacement, velocity, and acceleration histories of a linear,
//! viscously damped single-degree-of-freedom oscillator driven by a uniformly
//! sampled excitation record (applied force or base acceleration), together
//! with peak absolute values.
//!
//! Key behaviors
//! -------------
//! - Collect the building blocks in [`core`]: validated [`SystemParameters`]
//!   and [`ExcitationRecord`]s, [`ModalParameters`], the two Duhamel kernels,
//!   and finite-difference derivation.
//! - Expose the engine in [`models`] via [`compute_response`] /
//!   [`compute_batch`] returning [`SdofResponse`].
//! - Centralize error types in [`errors`] ([`ResponseError`], [`ParamError`]
//!   and the `ResponseResult` / `ParamResult` aliases).
//!
//! Invariants & assumptions
//! ------------------------
//! - Underdamped systems only: `0 ≤ ξ < 1`. Anything else fails fast with
//!   `ParamError::InvalidDampingRatio`.
//! - Parameters and the record length ceiling are validated before any
//!   buffer is allocated; no partial results are returned on error.
//! - An invocation is a pure function of parameters, record, and strategy.
//!   Repeated calls with identical inputs are bit-identical.
//!
//! Conventions
//! -----------
//! - Indexing is 0-based; sample `i` is at time `i·dt`.
//! - The two strategies report displacement on different scales. Nothing
//!   rescales silently; see `ConvolutionStrategy::physical_scale`.
//! - Only [`models`] logs; `core` is free of I/O and logging.
//!
//! Downstream usage
//! ----------------
//! - Typical flow:
//!   1. Build [`SystemParameters`] (or take the defaults).
//!   2. Load an [`ExcitationRecord`] (see `crate::input`).
//!   3. Pick a [`ConvolutionStrategy`] in [`EngineOptions`], optionally with
//!      a length ceiling, cancel flag, and logger.
//!   4. Call [`compute_response`] and read `series` / `summary`.
//!
//! Testing notes
//! -------------
//! - Unit tests in [`core`] cover validation, modal derivation, both kernels,
//!   and derived series. Unit tests in [`models`] cover engine ordering,
//!   degenerate records, batching, and cancellation. The integration test in
//!   `tests/` runs the public pipeline from text input to summary.

pub mod core;
pub mod errors;
pub mod models;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::core::{
    CancelFlag, ConvolutionStrategy, EngineOptions, ExcitationKind, ExcitationRecord,
    ModalParameters, SystemParameters,
};

pub use self::errors::{ParamError, ParamResult, ResponseError, ResponseResult, ResponseStage};

pub use self::models::{
    ResponseSeries, ResponseSummary, ResponseWarning, SdofResponse, compute_batch,
    compute_response,
};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use rust_duhamel::response::prelude::*;
//
// to import the main response surface in a single line.

pub mod prelude {
    pub use super::{
        CancelFlag, ConvolutionStrategy, EngineOptions, ExcitationKind, ExcitationRecord,
        ModalParameters, ParamError, ResponseError, ResponseResult, ResponseSeries,
        ResponseSummary, ResponseWarning, SdofResponse, SystemParameters, compute_batch,
        compute_response,
    };
}
