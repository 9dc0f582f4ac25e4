//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical building blocks used by the
//! site-response algorithms:
//! - Depth-weighted averaging and interface geometry
//! - Dense complex linear solves
//! - Bounded scalar searches
//!
//! These are reusable pieces with no algorithm-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Depth-weighted averaging kernel and interface geometry.
pub mod average;

/// Complex linear algebra backend (nalgebra).
pub mod linalg;

/// Bounded one-dimensional searches.
pub mod search;
