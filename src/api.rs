//! High-level API for Higuchi curve-length computation.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point for the crate.
//! It implements a fluent builder pattern for configuring the computation
//! and a computer type that runs it over signals.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Builder configuration is checked at `build()`; signal
//!   and window sizes are checked on every computation.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ## Key concepts
//!
//! ### Configuration Flow
//!
//! 1. Create a [`HiguchiBuilder`] via `Higuchi::new()`.
//! 2. Chain configuration methods (`.normalization()`, `.parallel()`).
//! 3. Call `.build()` to obtain a reusable [`CurveLengthComputer`].
//! 4. Call `.curve_lengths(signal, window_sizes)` as often as needed.
//!
//! ## Visibility
//!
//! This is the primary public API. Types re-exported here are considered
//! stable.

use core::fmt::Debug;
use core::marker::PhantomData;
use core::result;

use num_traits::Float;

use crate::engine::executor::{CurveLengthExecutor, CurvePassFn};
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::engine::executor::Normalization;
pub use crate::engine::output::CurveLengthResult;
pub use crate::primitives::errors::HiguchiError;

/// Result type alias for curve-length operations.
pub type Result<T> = result::Result<T, HiguchiError>;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a [`CurveLengthComputer`].
///
/// All parameters have defaults; `Higuchi::<f64>::new().build()` yields a
/// computer using the per-phase normalization and sequential execution.
#[derive(Debug, Clone)]
pub struct HiguchiBuilder<T> {
    /// Normalization convention (default: PerPhase).
    pub normalization: Option<Normalization>,

    /// Evaluate window sizes across a thread pool (default: false).
    #[cfg(feature = "parallel")]
    pub parallel: bool,

    /// Tracks if any parameter was set multiple times (for validation).
    pub(crate) duplicate_param: Option<&'static str>,

    _marker: PhantomData<T>,
}

impl<T: Float> Default for HiguchiBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> HiguchiBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            normalization: None,
            #[cfg(feature = "parallel")]
            parallel: false,
            duplicate_param: None,
            _marker: PhantomData,
        }
    }

    /// Set the normalization convention.
    pub fn normalization(mut self, normalization: Normalization) -> Self {
        if self.normalization.is_some() {
            self.duplicate_param = Some("normalization");
        }
        self.normalization = Some(normalization);
        self
    }

    /// Enable or disable parallel evaluation of window sizes.
    #[cfg(feature = "parallel")]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validate the configuration and build a [`CurveLengthComputer`].
    pub fn build(self) -> Result<CurveLengthComputer<T>>
    where
        T: Debug + Send + Sync + 'static,
    {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        #[cfg(feature = "parallel")]
        let custom_pass: Option<CurvePassFn<T>> = if self.parallel {
            Some(crate::parallel::curve_length_pass_parallel::<T>)
        } else {
            None
        };
        #[cfg(not(feature = "parallel"))]
        let custom_pass: Option<CurvePassFn<T>> = None;

        Ok(CurveLengthComputer {
            executor: CurveLengthExecutor {
                normalization: self.normalization.unwrap_or_default(),
                custom_pass,
            },
        })
    }
}

// ============================================================================
// Computer
// ============================================================================

/// Reusable, validated curve-length computer.
///
/// Obtained from [`HiguchiBuilder::build`]; holds the configured executor
/// and can be applied to any number of signals.
#[derive(Debug)]
pub struct CurveLengthComputer<T: Float> {
    executor: CurveLengthExecutor<T>,
}

impl<T> CurveLengthComputer<T>
where
    T: Float + Debug + Send + Sync + 'static,
{
    /// Curve length of `signal` at each requested window size.
    ///
    /// Validates the signal and every window size, then evaluates the
    /// kernel. `lengths[i]` in the result corresponds to
    /// `window_sizes[i]`, duplicates included.
    ///
    /// # Errors
    ///
    /// * [`HiguchiError::EmptySignal`] / [`HiguchiError::TooFewPoints`] /
    ///   [`HiguchiError::NonFiniteSample`] for unusable signals.
    /// * [`HiguchiError::EmptyWindowSizes`] /
    ///   [`HiguchiError::WindowSizeOutOfRange`] /
    ///   [`HiguchiError::DegenerateNormalization`] for unusable window
    ///   sizes.
    pub fn curve_lengths(
        &self,
        signal: &[T],
        window_sizes: &[usize],
    ) -> Result<CurveLengthResult<T>> {
        Validator::validate_signal(signal)?;
        Validator::validate_window_sizes(window_sizes, signal.len())?;

        let lengths = self.executor.run(signal, window_sizes);

        Ok(CurveLengthResult {
            window_sizes: window_sizes.to_vec(),
            lengths,
            normalization: self.executor.normalization,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
