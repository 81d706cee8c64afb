//! Stride-variation primitives for curve-length computation.
//!
//! ## Purpose
//!
//! This module provides the two quantities the curve-length kernel needs
//! for every (window size, phase offset) pair: the sum of absolute first
//! differences along the strided sub-sampling, and the number of complete
//! strides available to that phase.
//!
//! ## Design notes
//!
//! * All functions are generic over `Float` types to support f32 and f64.
//! * Functions are pure and allocation-free.
//! * Callers are expected to have validated inputs; preconditions are
//!   documented per function rather than re-checked here.
//!
//! ## Key concepts
//!
//! ### Strided sub-sampling
//!
//! For window size `k` and phase offset `off` in `0..k`, the sub-sampled
//! path visits indices `off, off+k, off+2k, ...` while they stay below the
//! signal length. The variation of that path is the sum of absolute
//! differences between consecutive visited samples.
//!
//! ### Stride count
//!
//! The number of complete strides for a phase is `floor((n - off - 1) / k)`,
//! which also equals the number of terms in the variation sum. It appears in
//! the normalization denominator of the curve-length formula.
//!
//! ## Invariants
//!
//! * `stride_abs_deviation` returns 0 when the phase has no complete stride.
//! * `stride_count(n, k, off)` equals the number of terms summed by
//!   `stride_abs_deviation(signal, k, off)` for a signal of length `n`.
//!
//! ## Non-goals
//!
//! * This module does not apply normalization or phase averaging (engine).
//! * This module does not validate window sizes (validator).

use num_traits::Float;

// ============================================================================
// Stride Variation
// ============================================================================

/// Sum of absolute first differences along a stride-`k` sub-sampling.
///
/// # Formula
///
/// ```text
/// sum = Σ |signal[idx] - signal[idx - k]|   for idx = off+k, off+2k, ... < n
/// ```
///
/// # Preconditions
///
/// * `k >= 1`
/// * `off < k`
pub fn stride_abs_deviation<T: Float>(signal: &[T], k: usize, off: usize) -> T {
    let n = signal.len();
    let mut sum = T::zero();
    let mut idx = off + k;
    while idx < n {
        sum = sum + (signal[idx] - signal[idx - k]).abs();
        idx += k;
    }
    sum
}

/// Number of complete strides available to phase `off` at window size `k`.
///
/// Equals `floor((n - off - 1) / k)`; the quotient is non-negative because
/// callers guarantee `off < n`.
///
/// # Preconditions
///
/// * `k >= 1`
/// * `off < n`
pub fn stride_count(n: usize, k: usize, off: usize) -> usize {
    (n - off - 1) / k
}

// ============================================================================
// Tests
// ============================================================================
