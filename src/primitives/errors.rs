//! Error types for curve-length computation.
//!
//! ## Purpose
//!
//! This module defines the unified [`HiguchiError`] enum returned by every
//! fallible operation in the crate. Each variant carries the concrete values
//! that triggered the rejection, so error messages are self-describing.
//!
//! ## Design notes
//!
//! * Every invalid input maps to exactly one variant; nothing is folded into
//!   a catch-all string.
//! * Variants carry `usize` context only, so `Display` needs no allocation
//!   and the type works in `no_std` builds.
//! * `std::error::Error` is implemented under the `std` feature.
//!
//! ## Key concepts
//!
//! ### Argument errors vs degenerate arithmetic
//!
//! A window size can fail in two distinct ways: it can be outside the
//! meaningful range `[1, n-1]` entirely ([`WindowSizeOutOfRange`]), or it
//! can be in range but large enough that some phase offset has no complete
//! stride, which would place a zero in the normalization denominator
//! ([`DegenerateNormalization`]). Both are caller contract violations, but
//! callers selecting window sizes programmatically benefit from telling
//! them apart.
//!
//! [`WindowSizeOutOfRange`]: HiguchiError::WindowSizeOutOfRange
//! [`DegenerateNormalization`]: HiguchiError::DegenerateNormalization
//!
//! ## Invariants
//!
//! * Construction is infallible and allocation-free.
//! * A returned error always means no output was produced.
//!
//! ## Non-goals
//!
//! * This module does not perform validation (handled by the engine
//!   validator).
//! * This module does not provide recovery hints beyond the message text.

use core::fmt;

// ============================================================================
// Error Enum
// ============================================================================

/// Unified error type for curve-length operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HiguchiError {
    /// The signal slice was empty.
    EmptySignal,

    /// The signal has fewer points than the minimum required.
    TooFewPoints {
        /// Number of points provided.
        got: usize,
        /// Minimum number of points required.
        min: usize,
    },

    /// A signal sample was NaN or infinite.
    NonFiniteSample {
        /// Index of the offending sample.
        index: usize,
    },

    /// The window-size slice was empty.
    EmptyWindowSizes,

    /// A window size was zero or at least the signal length.
    WindowSizeOutOfRange {
        /// The offending window size.
        k: usize,
        /// The signal length.
        n: usize,
    },

    /// A window size in range would zero the normalization denominator.
    ///
    /// Occurs whenever `2k > n`: at least one phase offset then has no
    /// complete stride, so `floor((n - off - 1) / k)` is zero for it.
    DegenerateNormalization {
        /// The offending window size.
        k: usize,
        /// The signal length.
        n: usize,
    },

    /// A builder parameter was set more than once.
    DuplicateParameter {
        /// Name of the duplicated parameter.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl fmt::Display for HiguchiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySignal => write!(f, "signal is empty"),
            Self::TooFewPoints { got, min } => {
                write!(f, "signal too short: got {} points, need at least {}", got, min)
            }
            Self::NonFiniteSample { index } => {
                write!(f, "signal sample at index {} is NaN or infinite", index)
            }
            Self::EmptyWindowSizes => write!(f, "window-size list is empty"),
            Self::WindowSizeOutOfRange { k, n } => {
                write!(
                    f,
                    "window size {} is outside the valid range [1, {}] for signal length {}",
                    k,
                    n.saturating_sub(1),
                    n
                )
            }
            Self::DegenerateNormalization { k, n } => {
                write!(
                    f,
                    "window size {} is degenerate for signal length {}: \
                     some phase has no complete stride (requires 2k <= n)",
                    k, n
                )
            }
            Self::DuplicateParameter { parameter } => {
                write!(f, "builder parameter '{}' was set more than once", parameter)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for HiguchiError {}

// ============================================================================
// Tests
// ============================================================================
