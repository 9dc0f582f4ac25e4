//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer orchestrates the per-frequency solvers: it validates inputs,
//! dispatches frequency passes (sequential or injected), isolates failed
//! frequencies and assembles the result tables.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Execution engine for frequency-domain solvers.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types for site-response operations.
pub mod output;
