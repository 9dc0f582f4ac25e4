//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer describes how the computed quantities are meant to be
//! summarized across several profiles by an external aggregator.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Statistical distribution family of each quantity.
pub mod quantity;
