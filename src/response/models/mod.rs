//! models — the SDOF response engine and its output types.
//!
//! Purpose
//! -------
//! Compose the `response::core` stages into a single invocation and package the
//! result. This is the layer front-ends (Rust callers, Python bindings, batch
//! jobs) talk to.
//!
//! Key behaviors
//! -------------
//! - [`compute_response`] validates, derives modal parameters, runs the named
//!   strategy, and derives velocity/acceleration and peaks.
//! - [`compute_batch`] runs independent invocations in parallel, preserving
//!   input order.
//! - [`ResponseSeries`] / [`ResponseSummary`] carry the series and their peaks;
//!   [`SdofResponse`] bundles them with the strategy, modal parameters, and
//!   non-fatal [`ResponseWarning`]s.
//!
//! Conventions
//! -----------
//! - Displacement is reported on the raw scale of the chosen strategy;
//!   reconciliation is opt-in via `SdofResponse::physically_scaled_displacement`.
//! - The engine logs through the `slog::Logger` carried by `EngineOptions`.

pub mod engine;
pub mod series;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::engine::{ResponseWarning, SdofResponse, compute_batch, compute_response};
pub use self::series::{ResponseSeries, ResponseSummary};

pub mod prelude {
    pub use super::engine::{SdofResponse, compute_batch, compute_response};
    pub use super::series::{ResponseSeries, ResponseSummary};
}
