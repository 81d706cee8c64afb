//! # Higuchi — curve-length statistics for fractal dimension estimation
//!
//! A focused, generic implementation of the curve-length statistic at the
//! core of the Higuchi Fractal Dimension (HFD) estimator for 1-D signals.
//!
//! ## What is the Higuchi curve length?
//!
//! The Higuchi method characterizes the roughness (fractal dimension) of a
//! discrete time series by measuring how the "length" of the curve traced by
//! the signal changes as the signal is sub-sampled at increasing strides.
//! For a window size `k`, the signal is read at stride `k` starting from
//! each of the `k` possible phase offsets; the absolute first differences
//! along each sub-sampled path are summed, rescaled to the full series
//! length, and averaged across phases. For a self-similar signal the
//! resulting curve length `L(k)` scales as a power of `1/k`, and the
//! exponent of that power law is the fractal dimension.
//!
//! **Common applications:**
//! - EEG/MEG complexity analysis and seizure-detection features
//! - Roughness measures for financial and geophysical series
//! - Texture and irregularity quantification in sensor streams
//!
//! This crate computes the per-window curve lengths `L(k)`. The log-log
//! regression that turns them into a fractal-dimension estimate, the choice
//! of window sizes, and any I/O or preprocessing belong to the caller.
//!
//! ## Quick Start
//!
//! ```rust
//! use higuchi_rs::prelude::*;
//!
//! let signal = vec![1.0, 3.0, 2.0, 5.0, 4.0, 6.0];
//!
//! // Build the model
//! let model = Higuchi::<f64>::new().build()?;
//!
//! // Compute one curve length per window size, in input order
//! let result = model.curve_lengths(&signal, &[1, 2])?;
//!
//! assert_eq!(result.lengths, vec![9.0, 1.875]);
//! # Ok::<(), HiguchiError>(())
//! ```
//!
//! For `k = 1` the statistic reduces to the plain total variation of the
//! signal, which makes the first output above easy to check by hand:
//! `|3-1| + |2-3| + |5-2| + |4-5| + |6-4| = 9`.
//!
//! ### Result and Error Handling
//!
//! `curve_lengths` returns `Result<CurveLengthResult<T>, HiguchiError>`.
//! Invalid inputs (too-short signal, empty window list, window sizes outside
//! the computable range, non-finite samples) are rejected upfront; no
//! partial results and no silent NaN/inf outputs are ever produced.
//!
//! ```rust
//! use higuchi_rs::prelude::*;
//!
//! let model = Higuchi::<f64>::new().build()?;
//!
//! // n = 2, so k = 5 cannot be sub-sampled at all
//! let err = model.curve_lengths(&[0.5, 1.5], &[5]).unwrap_err();
//! assert!(matches!(err, HiguchiError::WindowSizeOutOfRange { k: 5, n: 2 }));
//! # Ok::<(), HiguchiError>(())
//! ```
//!
//! ## Parameters
//!
//! | Parameter         | Default    | Options                    | Description                                         |
//! |-------------------|------------|----------------------------|-----------------------------------------------------|
//! | **normalization** | `PerPhase` | `PerPhase`, `FinalAverage` | Where the division by `k` is applied (see below)    |
//! | **parallel**      | false      | true/false                 | Evaluate window sizes on rayon (`parallel` feature) |
//!
//! ### Normalization
//!
//! Two normalization conventions are in circulation for the Higuchi curve
//! length; they differ in whether each phase term is divided by `k` before
//! the final phase average (which always divides by `k`):
//!
//! * **`PerPhase`** — each phase term carries its own `1/k` factor, so
//!   outputs scale as `k^-D` for a signal of fractal dimension `D`. This is
//!   the reference behavior.
//! * **`FinalAverage`** — phase terms are left unscaled and the single
//!   division by `k` happens in the phase average. Outputs are exactly `k`
//!   times the `PerPhase` values.
//!
//! Pick the convention your downstream regression expects; do not mix them
//! across calls that feed the same fit.
//!
//! ```rust
//! use higuchi_rs::prelude::*;
//!
//! let signal = vec![1.0, 3.0, 2.0, 5.0, 4.0, 6.0];
//!
//! let model = Higuchi::<f64>::new()
//!     .normalization(FinalAverage)
//!     .build()?;
//!
//! let result = model.curve_lengths(&signal, &[2])?;
//! assert_eq!(result.lengths, vec![3.75]); // 2 x the PerPhase value
//! # Ok::<(), HiguchiError>(())
//! ```
//!
//! ### Parallel execution
//!
//! Window sizes are independent, so the outer loop parallelizes trivially.
//! With the `parallel` feature enabled, `.parallel(true)` runs it on rayon;
//! outputs are collected in input order and are bit-identical to the
//! sequential pass.
//!
//! ## Window size constraints
//!
//! For a signal of length `n`, a window size `k` is computable when
//! `1 <= k <= n/2`. Larger `k` leaves at least one phase with no complete
//! stride, which would zero the normalization denominator; such window
//! sizes are rejected as `DegenerateNormalization` rather than silently
//! producing infinities.
//!
//! ## References
//!
//! - Higuchi, T. (1988). "Approach to an Irregular Time Series on the Basis
//!   of the Fractal Theory". Physica D, 31: 277-283.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - shared error types.
mod primitives;

// Layer 2: Math - stride-variation building blocks.
mod math;

// Layer 3: Engine - validation, execution, and result assembly.
mod engine;

// Parallel execution pass, injected into the engine via its pass-fn hook.
#[cfg(feature = "parallel")]
mod parallel;

// High-level fluent API.
//
// Provides the `Higuchi` builder for configuring and running the
// curve-length computation.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard higuchi-rs prelude.
pub mod prelude {
    pub use crate::api::{CurveLengthComputer, HiguchiBuilder as Higuchi, Result};
    pub use crate::engine::executor::Normalization::{self, FinalAverage, PerPhase};
    pub use crate::engine::output::CurveLengthResult;
    pub use crate::primitives::errors::HiguchiError;
}
