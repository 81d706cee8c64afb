//! Output types for curve-length computation.
//!
//! ## Purpose
//!
//! This module defines the [`CurveLengthResult`] struct, the container
//! returned by every curve-length computation. It pairs each requested
//! window size with its curve length and records the normalization
//! convention used.
//!
//! ## Design notes
//!
//! * Results are generic over `Float` types to support f32 and f64.
//! * `window_sizes` and `lengths` always have the same length, and
//!   `lengths[i]` corresponds to `window_sizes[i]` in the order the caller
//!   requested them.
//! * Implements `Display` for human-readable tabular output.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.
//! * This module does not fit log-log slopes or estimate a fractal
//!   dimension from the stored lengths.
//!
//! ## Visibility
//!
//! The [`CurveLengthResult`] struct is part of the public API and is the
//! primary result type returned by the computer.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

#[cfg(feature = "std")]
use std::vec::Vec;

use num_traits::Float;

use crate::engine::executor::Normalization;

// ============================================================================
// Result Structure
// ============================================================================

/// Curve lengths evaluated at a list of window sizes.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveLengthResult<T> {
    /// Requested window sizes, in caller order.
    pub window_sizes: Vec<usize>,

    /// Curve length at each window size; `lengths[i]` corresponds to
    /// `window_sizes[i]`.
    pub lengths: Vec<T>,

    /// Normalization convention the lengths were computed under.
    pub normalization: Normalization,
}

impl<T: Float> CurveLengthResult<T> {
    // ========================================================================
    // Query Methods
    // ========================================================================

    /// Number of window sizes evaluated.
    pub fn len(&self) -> usize {
        self.window_sizes.len()
    }

    /// Check whether the result is empty.
    pub fn is_empty(&self) -> bool {
        self.window_sizes.is_empty()
    }

    /// Curve length at the `i`-th requested window size.
    pub fn get(&self, i: usize) -> Option<(usize, T)> {
        let k = *self.window_sizes.get(i)?;
        let length = *self.lengths.get(i)?;
        Some((k, length))
    }

    /// Pairs of `(window size, curve length)` in caller order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, T)> + '_ {
        self.window_sizes
            .iter()
            .copied()
            .zip(self.lengths.iter().copied())
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + core::fmt::Display> core::fmt::Display for CurveLengthResult<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Window sizes: {}", self.window_sizes.len())?;
        writeln!(f, "  Normalization: {}", self.normalization)?;
        writeln!(f)?;

        writeln!(f, "Curve Lengths:")?;
        writeln!(f, "{:>8} {:>16}", "K", "Curve_Length")?;
        writeln!(f, "{:-<25}", "")?;

        // Data rows (show first 10 and last 10 if more than 20 window sizes)
        let n = self.window_sizes.len();
        let show_all = n <= 20;
        let rows_to_show: Vec<usize> = if show_all {
            (0..n).collect()
        } else {
            (0..10).chain(n - 10..n).collect()
        };

        let mut prev_idx = 0;
        for (i, &idx) in rows_to_show.iter().enumerate() {
            if i > 0 && idx != prev_idx + 1 {
                writeln!(f, "{:>8}", "...")?;
            }
            prev_idx = idx;

            writeln!(
                f,
                "{:>8} {:>16.6}",
                self.window_sizes[idx], self.lengths[idx]
            )?;
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> CurveLengthResult<f64> {
        CurveLengthResult {
            window_sizes: vec![1, 2],
            lengths: vec![9.0, 1.875],
            normalization: Normalization::PerPhase,
        }
    }

    #[test]
    fn query_methods_track_contents() {
        let result = sample_result();
        assert_eq!(result.len(), 2);
        assert!(!result.is_empty());
        assert_eq!(result.get(0), Some((1, 9.0)));
        assert_eq!(result.get(1), Some((2, 1.875)));
        assert_eq!(result.get(2), None);
    }

    #[test]
    fn iter_preserves_caller_order() {
        let result = sample_result();
        let pairs: Vec<(usize, f64)> = result.iter().collect();
        assert_eq!(pairs, vec![(1, 9.0), (2, 1.875)]);
    }

    #[test]
    fn display_shows_all_rows_for_small_results() {
        let rendered = format!("{}", sample_result());
        assert!(rendered.contains("Window sizes: 2"));
        assert!(rendered.contains("Normalization: per-phase"));
        assert!(rendered.contains("Curve_Length"));
        assert!(!rendered.contains("..."));
    }

    #[test]
    fn display_truncates_large_results() {
        let window_sizes: Vec<usize> = (1..=30).collect();
        let lengths: Vec<f64> = (1..=30).map(|k| 1.0 / k as f64).collect();
        let result = CurveLengthResult {
            window_sizes,
            lengths,
            normalization: Normalization::FinalAverage,
        };
        let rendered = format!("{}", result);
        assert!(rendered.contains("..."));
        assert!(rendered.contains("Normalization: final-average"));
    }
}
