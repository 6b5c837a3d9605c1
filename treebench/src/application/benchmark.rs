//! Minimum-of-repeats timing harness.

use std::hint::black_box;
use std::time::{Duration, Instant};

use tracing::{debug, instrument};

use super::error::{BenchError, BenchResult};

/// Timed runs per input when the caller does not pick a count.
pub const DEFAULT_REPEAT: usize = 5;

/// Wall-clock time of a single call, including dropping its result.
pub fn time_once<T, F: FnOnce() -> T>(f: F) -> Duration {
    let start = Instant::now();
    drop(black_box(f()));
    start.elapsed()
}

/// Mean over `data` of the fastest of `repeat` isolated runs of `builder(n)`, in seconds.
///
/// Every run is a fresh call timed on its own; nothing is shared between runs.
///
/// # Errors
///
/// * [`BenchError::EmptyInput`] if `data` is empty (the mean is undefined).
/// * [`BenchError::ZeroRepeat`] if `repeat` is zero (the minimum is undefined).
#[instrument(level = "debug", skip(builder, data), fields(inputs = data.len()))]
pub fn benchmark<T, F>(mut builder: F, data: &[u32], repeat: usize) -> BenchResult<f64>
where
    F: FnMut(u32) -> T,
{
    if data.is_empty() {
        return Err(BenchError::EmptyInput);
    }
    if repeat == 0 {
        return Err(BenchError::ZeroRepeat);
    }

    let mut total = 0.0;
    for &n in data {
        let best = (0..repeat)
            .map(|_| time_once(|| builder(n)))
            .min()
            .unwrap_or_default();
        debug!(input = n, best_secs = best.as_secs_f64(), "best of {} runs", repeat);
        total += best.as_secs_f64();
    }

    Ok(total / data.len() as f64)
}
