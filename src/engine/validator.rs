//! Input validation for curve-length computation.
//!
//! ## Purpose
//!
//! Centralizes all input checking so the executor can assume well-formed
//! data. Every public entry point runs these checks before touching the
//! math layer.
//!
//! ## Design notes
//!
//! * Fail-fast: the first violated rule is reported and checking stops.
//! * Checks are ordered from cheapest to most expensive; the finiteness
//!   scan over the signal runs last.
//! * Window sizes with `2k > n` are rejected here rather than producing a
//!   division by zero deep inside the executor: such a `k` leaves at least
//!   one phase offset with no complete stride, which makes that phase's
//!   normalization denominator zero.
//!
//! ## Visibility
//!
//! Crate-internal. The API layer calls these before constructing an
//! executor; external callers never see this module directly.

use num_traits::Float;

use crate::primitives::errors::HiguchiError;

// ============================================================================
// Validator
// ============================================================================

/// Stateless collection of validation routines.
pub struct Validator;

impl Validator {
    /// Validate the input signal.
    ///
    /// Rules, in order:
    ///
    /// 1. The signal must not be empty.
    /// 2. The signal must contain at least two samples, otherwise no
    ///    difference can be formed at any window size.
    /// 3. Every sample must be finite (no NaN or infinity).
    pub fn validate_signal<T: Float>(signal: &[T]) -> Result<(), HiguchiError> {
        if signal.is_empty() {
            return Err(HiguchiError::EmptySignal);
        }
        if signal.len() < 2 {
            return Err(HiguchiError::TooFewPoints {
                got: signal.len(),
                min: 2,
            });
        }
        for (index, &sample) in signal.iter().enumerate() {
            if !sample.is_finite() {
                return Err(HiguchiError::NonFiniteSample { index });
            }
        }
        Ok(())
    }

    /// Validate the requested window sizes against a signal of length `n`.
    ///
    /// Rules, in order, applied per window size:
    ///
    /// 1. The list must not be empty.
    /// 2. `k` must lie in `[1, n - 1]`.
    /// 3. `2k` must not exceed `n`. A larger `k` leaves some phase offset
    ///    with zero complete strides and therefore a zero normalization
    ///    denominator.
    pub fn validate_window_sizes(window_sizes: &[usize], n: usize) -> Result<(), HiguchiError> {
        if window_sizes.is_empty() {
            return Err(HiguchiError::EmptyWindowSizes);
        }
        for &k in window_sizes {
            if k == 0 || k >= n {
                return Err(HiguchiError::WindowSizeOutOfRange { k, n });
            }
            if 2 * k > n {
                return Err(HiguchiError::DegenerateNormalization { k, n });
            }
        }
        Ok(())
    }

    /// Reject builder configurations where a parameter was set twice.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), HiguchiError> {
        if let Some(parameter) = duplicate_param {
            return Err(HiguchiError::DuplicateParameter { parameter });
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

    #[test]
    fn empty_signal_is_rejected() {
        let signal: [f64; 0] = [];
        assert_eq!(
            Validator::validate_signal(&signal),
            Err(HiguchiError::EmptySignal)
        );
    }

    #[test]
    fn single_sample_is_rejected() {
        assert_eq!(
            Validator::validate_signal(&[1.0f64]),
            Err(HiguchiError::TooFewPoints { got: 1, min: 2 })
        );
    }

    #[test]
    fn non_finite_sample_is_located() {
        assert_eq!(
            Validator::validate_signal(&[1.0f64, f64::NAN, 3.0]),
            Err(HiguchiError::NonFiniteSample { index: 1 })
        );
        assert_eq!(
            Validator::validate_signal(&[1.0f64, 2.0, f64::INFINITY]),
            Err(HiguchiError::NonFiniteSample { index: 2 })
        );
    }

    #[test]
    fn finite_signal_passes() {
        assert!(Validator::validate_signal(&[1.0f64, 2.0]).is_ok());
    }

    #[test]
    fn empty_window_list_is_rejected() {
        assert_eq!(
            Validator::validate_window_sizes(&[], 10),
            Err(HiguchiError::EmptyWindowSizes)
        );
    }

    #[test]
    fn zero_window_size_is_rejected() {
        assert_eq!(
            Validator::validate_window_sizes(&[0], 2),
            Err(HiguchiError::WindowSizeOutOfRange { k: 0, n: 2 })
        );
    }

    #[test]
    fn oversized_window_is_rejected() {
        assert_eq!(
            Validator::validate_window_sizes(&[5], 2),
            Err(HiguchiError::WindowSizeOutOfRange { k: 5, n: 2 })
        );
    }

    #[test]
    fn degenerate_window_is_rejected() {
        // n = 6, k = 4: phase offset 3 has no complete stride.
        assert_eq!(
            Validator::validate_window_sizes(&[4], 6),
            Err(HiguchiError::DegenerateNormalization { k: 4, n: 6 })
        );
    }

    #[test]
    fn half_length_window_passes() {
        assert!(Validator::validate_window_sizes(&[1, 2, 3], 6).is_ok());
    }

    #[test]
    fn duplicate_parameter_is_rejected() {
        assert_eq!(
            Validator::validate_no_duplicates(Some("normalization")),
            Err(HiguchiError::DuplicateParameter {
                parameter: "normalization"
            })
        );
        assert!(Validator::validate_no_duplicates(None).is_ok());
    }
}
