//! Runs both builders over the configured height range.

use itertools::izip;
use tracing::{info, instrument};

use super::benchmark::benchmark;
use super::error::{BenchError, BenchResult};
use crate::config::Settings;
use crate::domain::{build_tree_iterative, build_tree_recursive};

/// Per-height timings of both strategies, aligned by index with `heights`.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    heights: Vec<u32>,
    recursive: Vec<f64>,
    iterative: Vec<f64>,
}

impl Comparison {
    /// Fails with [`BenchError::Misaligned`] unless both series have one entry per height.
    pub fn new(
        heights: Vec<u32>,
        recursive: Vec<f64>,
        iterative: Vec<f64>,
    ) -> BenchResult<Self> {
        if recursive.len() != heights.len() || iterative.len() != heights.len() {
            return Err(BenchError::Misaligned {
                heights: heights.len(),
                recursive: recursive.len(),
                iterative: iterative.len(),
            });
        }
        Ok(Self {
            heights,
            recursive,
            iterative,
        })
    }

    pub fn heights(&self) -> &[u32] {
        &self.heights
    }

    pub fn recursive(&self) -> &[f64] {
        &self.recursive
    }

    pub fn iterative(&self) -> &[f64] {
        &self.iterative
    }

    /// `(height, recursive secs, iterative secs)` per tested height.
    pub fn rows(&self) -> impl Iterator<Item = (u32, f64, f64)> + '_ {
        izip!(&self.heights, &self.recursive, &self.iterative).map(|(&h, &r, &i)| (h, r, i))
    }

    /// Largest time of either series, 0 for an empty comparison.
    pub fn max_seconds(&self) -> f64 {
        self.recursive
            .iter()
            .chain(&self.iterative)
            .copied()
            .fold(0.0, f64::max)
    }
}

/// Benchmarks the recursive builder, then the iterative builder, for each height in turn.
#[instrument(level = "debug", skip(settings))]
pub fn run_comparison(settings: &Settings) -> BenchResult<Comparison> {
    let heights = settings.heights();
    if heights.is_empty() {
        return Err(BenchError::EmptyInput);
    }
    let root = settings.root;
    let repeat = settings.repeat;

    let mut recursive = Vec::with_capacity(heights.len());
    let mut iterative = Vec::with_capacity(heights.len());
    for &height in &heights {
        let rec = benchmark(|h| build_tree_recursive(i64::from(h), root), &[height], repeat)?;
        let iter = benchmark(|h| build_tree_iterative(i64::from(h), root), &[height], repeat)?;
        info!(height, recursive = rec, iterative = iter, "benchmarked height");
        recursive.push(rec);
        iterative.push(iter);
    }

    Comparison::new(heights, recursive, iterative)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_settings() -> Settings {
        Settings {
            min_height: 1,
            max_height: 4,
            repeat: 2,
            ..Settings::default()
        }
    }

    #[test]
    fn test_results_align_with_heights() {
        let comparison = run_comparison(&small_settings()).unwrap();
        assert_eq!(comparison.heights(), &[1, 2, 3, 4]);
        assert_eq!(comparison.recursive().len(), 4);
        assert_eq!(comparison.iterative().len(), 4);
        assert!(comparison.rows().all(|(_, r, i)| r >= 0.0 && i >= 0.0));
    }

    #[test]
    fn test_empty_height_range_fails() {
        let settings = Settings {
            min_height: 5,
            max_height: 4,
            ..Settings::default()
        };
        assert_eq!(run_comparison(&settings), Err(BenchError::EmptyInput));
    }

    #[test]
    fn test_zero_repeat_propagates() {
        let settings = Settings {
            repeat: 0,
            ..small_settings()
        };
        assert_eq!(run_comparison(&settings), Err(BenchError::ZeroRepeat));
    }

    #[test]
    fn test_max_seconds_spans_both_series() {
        let comparison =
            Comparison::new(vec![1, 2], vec![0.5, 0.25], vec![0.125, 0.75]).unwrap();
        assert_eq!(comparison.max_seconds(), 0.75);
        let rows: Vec<_> = comparison.rows().collect();
        assert_eq!(rows, vec![(1, 0.5, 0.125), (2, 0.25, 0.75)]);
    }

    #[test]
    fn test_misaligned_series_are_rejected() {
        let err = Comparison::new(vec![1, 2, 3], vec![0.1, 0.2, 0.3], vec![0.1]).unwrap_err();
        assert_eq!(
            err,
            BenchError::Misaligned {
                heights: 3,
                recursive: 3,
                iterative: 1
            }
        );
    }
}
