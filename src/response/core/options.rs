//! Engine options — strategy selection and execution bounds.
//!
//! Purpose
//! -------
//! Collect the per-invocation knobs of the response engine in one explicit
//! value: which convolution strategy to run, how long a record may be, how a
//! caller cancels a running evaluation, and where log records go.
//!
//! Key behaviors
//! -------------
//! - [`EngineOptions`] names the [`ConvolutionStrategy`]; the engine never
//!   chooses one on its own.
//! - `max_len` bounds the record length before any buffer is allocated. It is
//!   the service-facing limit on the O(n²) direct strategy.
//! - [`CancelFlag`] is a shared, cooperative cancellation signal checked
//!   between outer-loop iterations of both kernels.
//! - `logger` receives structured `slog` records; it defaults to a discarding
//!   drain so library use stays silent.
//!
//! Invariants & assumptions
//! ------------------------
//! - None of these options changes numeric output: two runs with the same
//!   parameters, record, and strategy are bit-identical regardless of logger
//!   or cancellation flag (as long as no cancellation occurs).
//! - A `CancelFlag` may be shared across threads; raising it affects every
//!   invocation holding a clone.
//!
//! Testing notes
//! -------------
//! - Unit tests check defaults, builder helpers, and flag sharing. Behavior
//!   under cancellation and length ceilings is tested in the engine.
use crate::response::core::strategy::ConvolutionStrategy;
use slog::{Discard, Logger, o};
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

/// CancelFlag — cooperative cancellation shared between caller and engine.
///
/// Cloning yields a handle to the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        CancelFlag::default()
    }

    /// Request cancellation of every invocation observing this flag.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    /// Clear a previous request so the flag can be reused.
    pub fn reset(&self) {
        self.0.store(false, Ordering::Relaxed);
    }
}

/// EngineOptions — per-invocation configuration of the response engine.
///
/// Fields
/// ------
/// - `strategy`: [`ConvolutionStrategy`] to evaluate the Duhamel integral.
/// - `max_len`: optional inclusive ceiling on the record length.
/// - `cancel`: optional [`CancelFlag`] polled between outer iterations.
/// - `logger`: `slog::Logger` for structured diagnostics.
#[derive(Debug, Clone)]
pub struct EngineOptions {
    /// Convolution strategy; always explicit.
    pub strategy: ConvolutionStrategy,
    /// Longest accepted record (`None` = unbounded).
    pub max_len: Option<usize>,
    /// Cooperative cancellation signal.
    pub cancel: Option<CancelFlag>,
    /// Structured logger; discards by default.
    pub logger: Logger,
}

impl EngineOptions {
    /// Options for `strategy` with no length ceiling, no cancellation, and a
    /// silent logger.
    pub fn new(strategy: ConvolutionStrategy) -> Self {
        EngineOptions { strategy, max_len: None, cancel: None, logger: Logger::root(Discard, o!()) }
    }

    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }

    pub fn with_cancel_flag(mut self, cancel: CancelFlag) -> Self {
        self.cancel = Some(cancel);
        self
    }

    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = logger;
        self
    }

    /// True when a cancel flag is attached and raised.
    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(CancelFlag::is_cancelled)
    }
}

impl Default for EngineOptions {
    fn default() -> Self {
        EngineOptions::new(ConvolutionStrategy::default())
    }
}
