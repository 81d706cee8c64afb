//! Layer 1: Primitives
//!
//! Core building blocks and types.
//!
//! This layer provides the primitive types shared across the crate. It has
//! zero internal dependencies within the crate.
//!
//! # Module Organization
//!
//! - **errors**: Shared error types (HiguchiError)
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine (executor, validator, output)
//!   ↓
//! Layer 2: Math (variation)
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
///
/// Provides:
/// - Unified `HiguchiError` enum
/// - Specific error variants for every rejection case
pub mod errors;
