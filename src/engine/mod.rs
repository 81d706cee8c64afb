//! Engine layer: validation, execution, and result assembly.
//!
//! ## Purpose
//!
//! Layer 3 of the crate. The engine turns a validated signal and window-size
//! list into a curve-length result, sitting between the math kernels below
//! and the public API above.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │  Layer 4: API                       │
//! │  (builder, computer)                │
//! └─────────────────────────────────────┘
//!                 │
//!                 ▼
//! ┌─────────────────────────────────────┐
//! │  Layer 3: Engine          ← You are │
//! │  (validator, executor,       here   │
//! │   output)                           │
//! └─────────────────────────────────────┘
//!                 │
//!                 ▼
//! ┌─────────────────────────────────────┐
//! │  Layer 2: Math                      │
//! │  (stride variation)                 │
//! └─────────────────────────────────────┘
//!                 │
//!                 ▼
//! ┌─────────────────────────────────────┐
//! │  Layer 1: Primitives                │
//! │  (errors)                           │
//! └─────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! * [`validator`] — fail-fast input checking before any computation.
//! * [`executor`] — the curve-length kernel and pass loop.
//! * [`output`] — the displayable result container.

pub mod executor;
pub mod output;
pub mod validator;
