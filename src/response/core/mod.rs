//! core — SDOF parameters, excitation records, and Duhamel kernels.
//!
//! Purpose
//! -------
//! Collect the building blocks of the response engine: validated inputs,
//! modal parameter derivation, the two convolution kernels, and the
//! finite-difference derivation of velocity and acceleration. The engine in
//! `response::models` composes these into one invocation.
//!
//! Key behaviors
//! -------------
//! - Define the input value types ([`SystemParameters`], [`ExcitationRecord`],
//!   [`ExcitationKind`]) and per-invocation options ([`EngineOptions`],
//!   [`CancelFlag`], [`ConvolutionStrategy`]).
//! - Derive `(wn, wd, ξ·wn)` via [`ModalParameters`].
//! - Evaluate displacement with [`direct_quadrature`] (O(n²)) or
//!   [`recursive_accumulation`] (O(n)).
//! - Derive velocity/acceleration by backward differences and extract peaks.
//!
//! Invariants & assumptions
//! ------------------------
//! - Only the underdamped case `0 ≤ ξ < 1` is supported; critical and
//!   overdamped systems are rejected, never approximated.
//! - Excitation samples are finite; computed series are checked for
//!   finiteness stage by stage.
//! - Every buffer is owned by a single call; no state survives between calls.
//!
//! Conventions
//! -----------
//! - Indexing is 0-based; sample `i` sits at `t_i = i·dt`.
//! - This module performs no I/O and no logging; errors are reported through
//!   [`ParamResult`](crate::response::errors::ParamResult) /
//!   [`ResponseResult`](crate::response::errors::ResponseResult).
//!
//! Testing notes
//! -------------
//! - Unit tests in each submodule cover validation boundaries, closed-form
//!   impulse responses, the exact relation between the two kernels,
//!   cancellation, and overflow detection.

pub mod convolution;
pub mod derived;
pub mod modal;
pub mod options;
pub mod params;
pub mod record;
pub mod strategy;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::convolution::{direct_quadrature, displacement, recursive_accumulation};
pub use self::derived::{
    acceleration_from_velocity, backward_difference, peak_abs, peak_index, sign_changes,
    velocity_from_displacement,
};
pub use self::modal::{ModalParameters, damped_frequency, natural_frequency};
pub use self::options::{CancelFlag, EngineOptions};
pub use self::params::SystemParameters;
pub use self::record::{ExcitationKind, ExcitationRecord};
pub use self::strategy::ConvolutionStrategy;
pub use self::validation::{
    validate_damping_ratio, validate_excitation, validate_mass, validate_modal_quantity,
    validate_record_length, validate_stiffness, validate_time_step,
};

// ---- Optional convenience prelude for downstream crates -------------------

pub mod prelude {
    pub use super::modal::ModalParameters;
    pub use super::options::{CancelFlag, EngineOptions};
    pub use super::params::SystemParameters;
    pub use super::record::{ExcitationKind, ExcitationRecord};
    pub use super::strategy::ConvolutionStrategy;
}
