//! Layer 2: Math
//!
//! Pure mathematical functions.
//!
//! This layer provides the stride-variation building blocks used by the
//! curve-length engine. These are reusable mathematical primitives with no
//! algorithm-specific orchestration.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine (executor, validator, output)
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives (errors)
//! ```

/// Stride-variation primitives.
///
/// Provides:
/// - Absolute first-difference sums along a strided sub-sampling
/// - Complete stride counts per phase offset
pub mod variation;
