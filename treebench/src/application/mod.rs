//! Application layer: timing harness and the comparison pipeline
//!
//! This layer drives the domain builders and measures them; it does no terminal output.

pub mod benchmark;
pub mod comparison;
pub mod error;

pub use benchmark::{benchmark, time_once, DEFAULT_REPEAT};
pub use comparison::{run_comparison, Comparison};
pub use error::{BenchError, BenchResult};
