//! Layer 5: Engine
//!
//! This layer provides the parallel frequency passes for the site-response
//! solvers and the ndarray views of their results.

// Parallel execution engine using CPU threads
pub mod executor;

// ndarray views of solver results
pub mod output;
