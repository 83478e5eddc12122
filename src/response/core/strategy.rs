//! Convolution strategy selector.
//!
//! Two algorithmically distinct evaluations of the Duhamel integral coexist:
//!
//! - [`ConvolutionStrategy::Direct`]: Riemann-sum quadrature over the whole
//!   history for every output sample, O(n²), scaled by `−1/(mass·wd)`.
//! - [`ConvolutionStrategy::Recursive`]: cosine/sine accumulators carried
//!   across one step with the exact exponential decay, O(n), unscaled.
//!
//! The caller always names the strategy; nothing picks one implicitly. The raw
//! outputs live on different scales, so [`ConvolutionStrategy::physical_scale`]
//! is provided for callers that explicitly want to compare them.
use crate::response::{
    core::{modal::ModalParameters, params::SystemParameters},
    errors::ResponseError,
};
use std::str::FromStr;

/// Named Duhamel evaluation strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ConvolutionStrategy {
    /// Direct quadrature, O(n²).
    #[default]
    Direct,
    /// Recursive exact accumulation, O(n).
    Recursive,
}

impl ConvolutionStrategy {
    /// All strategies, in a stable order.
    pub const ALL: [ConvolutionStrategy; 2] =
        [ConvolutionStrategy::Direct, ConvolutionStrategy::Recursive];

    /// Canonical lowercase name, as accepted by `from_str`.
    pub fn name(&self) -> &'static str {
        match self {
            ConvolutionStrategy::Direct => "direct",
            ConvolutionStrategy::Recursive => "recursive",
        }
    }

    /// Factor mapping this strategy's raw displacement onto the physical scale
    /// of [`ConvolutionStrategy::Direct`].
    ///
    /// - `Direct` → `1`.
    /// - `Recursive` → `−dt / (mass·wd)`, the quadrature weight and modal scale
    ///   that the recursion leaves out.
    pub fn physical_scale(&self, params: &SystemParameters, modal: &ModalParameters) -> f64 {
        match self {
            ConvolutionStrategy::Direct => 1.0,
            ConvolutionStrategy::Recursive => -params.dt / (params.mass * modal.wd),
        }
    }

    /// Number of kernel evaluations for a record of length `n`.
    ///
    /// Useful for sizing `EngineOptions::max_len` in services.
    pub fn kernel_evaluations(&self, n: usize) -> u128 {
        let n = n as u128;
        match self {
            ConvolutionStrategy::Direct => n * n.saturating_sub(1) / 2,
            ConvolutionStrategy::Recursive => n,
        }
    }
}

impl std::fmt::Display for ConvolutionStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ConvolutionStrategy {
    type Err = ResponseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "direct" | "quadrature" => Ok(ConvolutionStrategy::Direct),
            "recursive" | "recurrence" => Ok(ConvolutionStrategy::Recursive),
            _ => Err(ResponseError::InvalidStrategy {
                name: s.to_string(),
                reason: "Valid options are case insensitive 'direct' or 'recursive'.",
            }),
        }
    }
}
