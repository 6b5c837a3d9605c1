//! Benchmark errors

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BenchError {
    #[error("no benchmark inputs: cannot average over zero inputs")]
    EmptyInput,

    #[error("repeat count must be at least 1")]
    ZeroRepeat,

    #[error("misaligned series: {heights} heights, {recursive} recursive, {iterative} iterative")]
    Misaligned {
        heights: usize,
        recursive: usize,
        iterative: usize,
    },
}

/// Result type for benchmark operations.
pub type BenchResult<T> = Result<T, BenchError>;
