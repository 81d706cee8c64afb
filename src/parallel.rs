//! Parallel curve-length pass.
//!
//! ## Purpose
//!
//! Provides a drop-in replacement for the sequential pass that evaluates
//! window sizes across a Rayon thread pool. Enabled by the `parallel`
//! feature.
//!
//! ## Design notes
//!
//! * Window sizes are independent, so the pass parallelizes over them with
//!   no shared mutable state.
//! * Results are collected in window-size order and copied into the output
//!   slice, so the parallel pass is bit-identical to the sequential pass.
//! * Parallelism pays off when `window_sizes.len()` times the per-window
//!   cost is large; for short lists the sequential pass is faster.
//!
//! ## Visibility
//!
//! Crate-internal. The API layer injects [`curve_length_pass_parallel`]
//! into the executor when the caller opts in.

use num_traits::Float;
use rayon::prelude::*;

use crate::engine::executor::{curve_length_at, Normalization};

/// Parallel pass: evaluates the curve length at every window size across
/// the Rayon thread pool.
///
/// `lengths` has the same length as `window_sizes`. Output order matches
/// input order regardless of scheduling.
pub fn curve_length_pass_parallel<T>(
    signal: &[T],
    window_sizes: &[usize],
    normalization: Normalization,
    lengths: &mut [T],
) where
    T: Float + Send + Sync,
{
    let results: Vec<T> = window_sizes
        .par_iter()
        .map(|&k| curve_length_at(signal, k, normalization))
        .collect();
    lengths.copy_from_slice(&results);
}

// ============================================================================
// Tests
// ============================================================================
