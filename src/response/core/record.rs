//! Excitation record container.
//!
//! Purpose
//! -------
//! Provide a small, validated container for the uniformly sampled excitation
//! history that drives the oscillator. This module centralizes input
//! validation for raw samples so the convolution kernels can assume finite
//! values.
//!
//! Key behaviors
//! -------------
//! - [`ExcitationRecord::new`] rejects non-finite samples and reports the first
//!   offending index.
//! - Empty and single-sample records are accepted; the engine maps them to a
//!   well-defined all-zero response.
//! - [`ExcitationKind`] records whether samples are an applied force or a base
//!   acceleration. It is metadata only and never rescales values.
//!
//! Invariants & assumptions
//! ------------------------
//! - All samples are finite.
//! - Sample `i` sits at time `i·dt`; `dt` belongs to
//!   [`SystemParameters`](crate::response::core::params::SystemParameters),
//!   not to the record.
//! - The record is immutable once handed to the engine.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the happy path, non-finite rejection, degenerate
//!   lengths, and the time grid.
use crate::response::{core::validation::validate_excitation, errors::ResponseResult};
use ndarray::{Array1, ArrayView1};

/// What the samples of an [`ExcitationRecord`] physically represent.
///
/// Purely descriptive; the engine applies the same convolution to both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExcitationKind {
    /// Force applied to the mass (N).
    Force,
    /// Ground/base acceleration record (m/s²), e.g. an accelerogram.
    #[default]
    BaseAcceleration,
}

/// `ExcitationRecord`: validated, uniformly sampled excitation samples.
///
/// Fields
/// ------
/// - `samples`: `Array1<f64>`, every entry finite.
/// - `kind`: [`ExcitationKind`] metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct ExcitationRecord {
    samples: Array1<f64>,
    /// Physical interpretation of the samples.
    pub kind: ExcitationKind,
}

impl ExcitationRecord {
    /// Construct a validated record.
    ///
    /// # Errors
    /// - `ResponseError::NonFiniteExcitation { index, value }` for the first
    ///   NaN/±∞ sample.
    ///
    /// # Examples
    /// ```rust
    /// # use ndarray::array;
    /// # use rust_duhamel::response::core::record::{ExcitationKind, ExcitationRecord};
    /// let record = ExcitationRecord::new(array![0.0, 1.5, -0.3], ExcitationKind::Force).unwrap();
    /// assert_eq!(record.len(), 3);
    /// ```
    pub fn new(samples: Array1<f64>, kind: ExcitationKind) -> ResponseResult<Self> {
        validate_excitation(samples.view())?;
        Ok(ExcitationRecord { samples, kind })
    }

    /// Convenience constructor from a `Vec`.
    pub fn from_vec(samples: Vec<f64>, kind: ExcitationKind) -> ResponseResult<Self> {
        ExcitationRecord::new(Array1::from(samples), kind)
    }

    /// Read-only view of the samples.
    pub fn samples(&self) -> ArrayView1<'_, f64> {
        self.samples.view()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// True when no motion can be resolved (fewer than two samples).
    pub fn is_degenerate(&self) -> bool {
        self.samples.len() < 2
    }

    /// Time grid `t_i = i·dt` matching the samples.
    pub fn times(&self, dt: f64) -> Array1<f64> {
        Array1::from_iter((0..self.samples.len()).map(|i| i as f64 * dt))
    }

    /// Record duration `(n − 1)·dt`, or 0 for degenerate records.
    pub fn duration(&self, dt: f64) -> f64 {
        self.samples.len().saturating_sub(1) as f64 * dt
    }
}
