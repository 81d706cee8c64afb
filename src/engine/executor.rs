//! Curve-length execution.
//!
//! ## Purpose
//!
//! Implements the Higuchi curve-length kernel for a single window size and
//! the pass loop that evaluates it over a whole list of window sizes.
//!
//! ## Design notes
//!
//! * The kernel assumes validated inputs; the validator guarantees
//!   `1 <= k <= n / 2`, so every phase offset has at least one complete
//!   stride and every normalization denominator is positive.
//! * The pass over window sizes is exposed as a plain function matching
//!   [`CurvePassFn`], so the API layer can swap in a parallel pass with the
//!   same signature without the executor knowing about threading.
//! * Window sizes are independent of each other; output slot `i` depends
//!   only on `window_sizes[i]`, which keeps any pass implementation
//!   trivially deterministic.
//!
//! ## Key concepts
//!
//! ### Phase-averaged curve length
//!
//! For window size `k`, each phase offset `off` in `0..k` yields a strided
//! variation sum, normalized by
//!
//! ```text
//! norm(off) = (n - 1) / (stride_count(n, k, off) * k)
//! ```
//!
//! Under [`Normalization::PerPhase`] each phase term is additionally
//! divided by `k` before the phase sum is averaged over the `k` phases;
//! under [`Normalization::FinalAverage`] only the final average divides by
//! `k`. The two conventions differ by an exact factor of `k`.
//!
//! ## Visibility
//!
//! Crate-internal, re-exported selectively through the API layer.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

#[cfg(feature = "std")]
use std::vec::Vec;

use core::fmt;

use num_traits::Float;

use crate::math::variation::{stride_abs_deviation, stride_count};

// ============================================================================
// Normalization
// ============================================================================

/// Normalization convention for the curve-length formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Normalization {
    /// Divide each phase term by `k`, then divide the phase sum by `k`
    /// again. This is the convention of Higuchi's original formulation.
    #[default]
    PerPhase,
    /// Divide only the final phase sum by `k`. Produces values `k` times
    /// larger than [`Normalization::PerPhase`] at window size `k`; the
    /// log-log slope against `k` shifts by exactly one.
    FinalAverage,
}

impl fmt::Display for Normalization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Normalization::PerPhase => write!(f, "per-phase"),
            Normalization::FinalAverage => write!(f, "final-average"),
        }
    }
}

// ============================================================================
// Pass function type
// ============================================================================

/// Signature of a pass that fills `lengths[i]` with the curve length at
/// `window_sizes[i]`.
///
/// `lengths` has the same length as `window_sizes`. Implementations must be
/// deterministic and order-preserving.
pub type CurvePassFn<T> = fn(&[T], &[usize], Normalization, &mut [T]);

// ============================================================================
// Kernel
// ============================================================================

/// Curve length of `signal` at a single window size `k`.
///
/// # Preconditions
///
/// * `signal` is finite with `n >= 2` samples.
/// * `1 <= k <= n / 2`.
pub fn curve_length_at<T: Float>(signal: &[T], k: usize, normalization: Normalization) -> T {
    let n = signal.len();
    let n_minus_1 = T::from(n - 1).unwrap();
    let k_t = T::from(k).unwrap();

    let mut total = T::zero();
    for off in 0..k {
        let strides = stride_count(n, k, off);
        let partial = stride_abs_deviation(signal, k, off);
        let norm = n_minus_1 / (T::from(strides).unwrap() * k_t);
        let term = match normalization {
            Normalization::PerPhase => partial * norm / k_t,
            Normalization::FinalAverage => partial * norm,
        };
        total = total + term;
    }
    total / k_t
}

/// Sequential pass: evaluates [`curve_length_at`] for each window size in
/// order.
pub fn curve_length_pass<T: Float>(
    signal: &[T],
    window_sizes: &[usize],
    normalization: Normalization,
    lengths: &mut [T],
) {
    for (slot, &k) in lengths.iter_mut().zip(window_sizes) {
        *slot = curve_length_at(signal, k, normalization);
    }
}

// ============================================================================
// Executor
// ============================================================================

/// Runs a curve-length pass over a list of window sizes.
///
/// Holds the normalization convention and an optional custom pass function
/// injected by the API layer (for example, the parallel pass).
#[derive(Debug)]
pub struct CurveLengthExecutor<T: Float> {
    /// Normalization convention applied by the kernel.
    pub normalization: Normalization,
    /// Replacement pass; `None` means the sequential pass.
    pub custom_pass: Option<CurvePassFn<T>>,
}

impl<T: Float> CurveLengthExecutor<T> {
    /// Evaluate the curve length at every window size.
    ///
    /// Inputs must already be validated.
    pub fn run(&self, signal: &[T], window_sizes: &[usize]) -> Vec<T> {
        let mut lengths = alloc_zeroed::<T>(window_sizes.len());
        let pass = self.custom_pass.unwrap_or(curve_length_pass::<T>);
        pass(signal, window_sizes, self.normalization, &mut lengths);
        lengths
    }
}

fn alloc_zeroed<T: Float>(len: usize) -> Vec<T> {
    let mut v = Vec::with_capacity(len);
    v.resize(len, T::zero());
    v
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const SIGNAL: [f64; 6] = [1.0, 3.0, 2.0, 5.0, 4.0, 6.0];

    fn lengths(signal: &[f64], ks: &[usize], normalization: Normalization) -> Vec<f64> {
        CurveLengthExecutor {
            normalization,
            custom_pass: None,
        }
        .run(signal, ks)
    }

    #[test]
    fn unit_window_reduces_to_total_variation() {
        // k = 1 has one phase with norm = (n-1)/((n-1)*1) = 1, so the
        // curve length is the plain total variation.
        assert_eq!(
            curve_length_at(&SIGNAL, 1, Normalization::PerPhase),
            9.0
        );
        assert_eq!(
            curve_length_at(&SIGNAL, 1, Normalization::FinalAverage),
            9.0
        );
    }

    #[test]
    fn known_values_at_window_two() {
        // Each phase: partial = 3, strides = 2, norm = 5/4.
        // PerPhase: term = 3 * 1.25 / 2 = 1.875; sum = 3.75; out = 1.875.
        assert_eq!(
            curve_length_at(&SIGNAL, 2, Normalization::PerPhase),
            1.875
        );
        // FinalAverage: term = 3.75; sum = 7.5; out = 3.75.
        assert_eq!(
            curve_length_at(&SIGNAL, 2, Normalization::FinalAverage),
            3.75
        );
    }

    #[test]
    fn conventions_differ_by_factor_k() {
        // Equality is exact in real arithmetic; rounding of the per-phase
        // division by k leaves a few ULPs of slack for k not a power of two.
        let signal: Vec<f64> = (0..64).map(|i| ((i * 37) % 11) as f64).collect();
        for k in 1..=32 {
            let per_phase = curve_length_at(&signal, k, Normalization::PerPhase);
            let final_avg = curve_length_at(&signal, k, Normalization::FinalAverage);
            let expected = per_phase * k as f64;
            assert!(
                (final_avg - expected).abs() / expected < 1e-12,
                "k={}: {} vs {}",
                k,
                final_avg,
                expected
            );
        }
    }

    #[test]
    fn curve_length_is_homogeneous_in_amplitude() {
        let scaled: Vec<f64> = SIGNAL.iter().map(|x| x * 4.0).collect();
        for k in 1..=3 {
            let base = curve_length_at(&SIGNAL, k, Normalization::PerPhase);
            let big = curve_length_at(&scaled, k, Normalization::PerPhase);
            assert_eq!(big, base * 4.0, "k={}", k);
        }
    }

    #[test]
    fn curve_length_ignores_additive_offset() {
        // Integer-valued samples keep the differences exact after the
        // shift, so equality is exact.
        let shifted: Vec<f64> = SIGNAL.iter().map(|x| x + 10.0).collect();
        for k in 1..=3 {
            assert_eq!(
                curve_length_at(&shifted, k, Normalization::PerPhase),
                curve_length_at(&SIGNAL, k, Normalization::PerPhase),
                "k={}",
                k
            );
        }
    }

    #[test]
    fn executor_preserves_window_order() {
        let out = lengths(&SIGNAL, &[2, 1, 2], Normalization::PerPhase);
        assert_eq!(out, vec![1.875, 9.0, 1.875]);
    }

    #[test]
    fn executor_is_deterministic() {
        let signal: Vec<f64> = (0..256).map(|i| ((i * 131) % 17) as f64).collect();
        let ks: Vec<usize> = (1..=16).collect();
        let a = lengths(&signal, &ks, Normalization::PerPhase);
        let b = lengths(&signal, &ks, Normalization::PerPhase);
        assert_eq!(a, b);
    }

    #[test]
    fn custom_pass_is_used_when_present() {
        fn constant_pass(
            _signal: &[f64],
            _ks: &[usize],
            _normalization: Normalization,
            lengths: &mut [f64],
        ) {
            for slot in lengths.iter_mut() {
                *slot = 7.0;
            }
        }
        let executor = CurveLengthExecutor {
            normalization: Normalization::PerPhase,
            custom_pass: Some(constant_pass),
        };
        assert_eq!(executor.run(&SIGNAL, &[1, 2]), vec![7.0, 7.0]);
    }

    #[test]
    fn straight_line_has_log_log_slope_minus_one() {
        // For x_i = c * i the curve length is exactly c * (n-1)/k under
        // the per-phase convention whenever k divides the stride counts
        // evenly; in general it stays within rounding of c * (n-1)/k.
        let n = 512;
        let signal: Vec<f64> = (0..n).map(|i| 0.5 * i as f64).collect();
        let ks: Vec<usize> = (1..=8).collect();
        let out = lengths(&signal, &ks, Normalization::PerPhase);

        let log_k: Vec<f64> = ks.iter().map(|&k| (k as f64).ln()).collect();
        let log_l: Vec<f64> = out.iter().map(|l| l.ln()).collect();
        let (slope, _intercept): (f64, f64) =
            linreg::linear_regression(&log_k, &log_l).unwrap();
        assert!(
            (slope + 1.0).abs() < 1e-9,
            "expected slope -1, got {}",
            slope
        );
    }

    #[test]
    fn white_noise_has_log_log_slope_near_minus_two() {
        // Deterministic LCG noise; i.i.d. samples have fractal dimension 2,
        // so the per-phase curve length falls off like k^-2.
        let mut state = 0x2545F4914F6CDD1Du64;
        let signal: Vec<f64> = (0..4096)
            .map(|_| {
                state = state
                    .wrapping_mul(6364136223846793005)
                    .wrapping_add(1442695040888963407);
                (state >> 11) as f64 / (1u64 << 53) as f64
            })
            .collect();
        let ks: Vec<usize> = (1..=8).collect();
        let out = lengths(&signal, &ks, Normalization::PerPhase);

        let log_k: Vec<f64> = ks.iter().map(|&k| (k as f64).ln()).collect();
        let log_l: Vec<f64> = out.iter().map(|l| l.ln()).collect();
        let (slope, _intercept): (f64, f64) =
            linreg::linear_regression(&log_k, &log_l).unwrap();
        assert!(
            (slope + 2.0).abs() < 0.2,
            "expected slope near -2, got {}",
            slope
        );
    }

    #[test]
    fn f32_kernel_matches_f64_within_tolerance() {
        let signal_f64: Vec<f64> = (0..128).map(|i| ((i * 53) % 29) as f64).collect();
        let signal_f32: Vec<f32> = signal_f64.iter().map(|&x| x as f32).collect();
        for k in 1..=16 {
            let wide = curve_length_at(&signal_f64, k, Normalization::PerPhase);
            let narrow = curve_length_at(&signal_f32, k, Normalization::PerPhase) as f64;
            assert!(
                (wide - narrow).abs() / wide < 1e-4,
                "k={}: {} vs {}",
                k,
                wide,
                narrow
            );
        }
    }
}
