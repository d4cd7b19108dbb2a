//! Batch processing across many independent series.
//!
//! Moving averages are pure functions of borrowed input, so distinct series
//! can be processed concurrently without synchronization. With the
//! `parallel` feature enabled, large batches are spread over Rayon's thread
//! pool; otherwise they run sequentially.
//!
//! ```toml
//! [dependencies]
//! mavg = { version = "0.1", features = ["parallel"] }
//! ```
//!
//! # Example
//!
//! ```
//! use mavg::batch::BatchProcessor;
//! use mavg::{MaType, MovingAverage};
//!
//! let closes = vec![
//!     vec![25.0_f64, 85.0, 65.0, 12.45, 66.2],
//!     vec![10.0, 10.0, 10.0, 10.0, 10.0, 10.0],
//! ];
//! let ema3 = MovingAverage::new(MaType::Ema).period(3);
//!
//! let results = BatchProcessor::new()
//!     .process(&closes, |s| ema3.compute(s))
//!     .unwrap();
//!
//! assert_eq!(results[1], vec![10.0; 4]);
//! ```

use tracing::debug;

use crate::error::Result;
use crate::traits::SeriesElement;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Batch processor for applying one indicator to many series.
///
/// Results are returned in input order. The first failing series aborts the
/// batch and its error is returned unchanged.
#[derive(Debug, Clone)]
pub struct BatchProcessor {
    /// Minimum number of series before the batch is run in parallel.
    min_parallel_threshold: usize,
}

impl Default for BatchProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl BatchProcessor {
    /// Creates a new batch processor with a parallel threshold of 1000 series.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            min_parallel_threshold: 1000,
        }
    }

    /// Sets the minimum number of series required to use parallel processing.
    ///
    /// Smaller batches run sequentially to avoid thread-pool overhead. Has no
    /// effect without the `parallel` feature.
    #[must_use]
    pub const fn min_parallel_threshold(mut self, threshold: usize) -> Self {
        self.min_parallel_threshold = threshold;
        self
    }

    /// Returns the configured parallel threshold.
    #[must_use]
    pub const fn get_min_parallel_threshold(&self) -> usize {
        self.min_parallel_threshold
    }

    /// Applies `indicator_fn` to every series.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `indicator_fn`.
    #[cfg(feature = "parallel")]
    pub fn process<T, F, R>(&self, series: &[Vec<T>], indicator_fn: F) -> Result<Vec<R>>
    where
        T: SeriesElement,
        F: Fn(&[T]) -> Result<R> + Send + Sync,
        R: Send,
    {
        if series.len() < self.min_parallel_threshold {
            debug!(series = series.len(), parallel = false, "processing batch");
            series.iter().map(|s| indicator_fn(s)).collect()
        } else {
            debug!(series = series.len(), parallel = true, "processing batch");
            series.par_iter().map(|s| indicator_fn(s)).collect()
        }
    }

    /// Applies `indicator_fn` to every series.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `indicator_fn`.
    #[cfg(not(feature = "parallel"))]
    pub fn process<T, F, R>(&self, series: &[Vec<T>], indicator_fn: F) -> Result<Vec<R>>
    where
        T: SeriesElement,
        F: Fn(&[T]) -> Result<R>,
    {
        debug!(series = series.len(), parallel = false, "processing batch");
        series.iter().map(|s| indicator_fn(s)).collect()
    }

    /// Applies `indicator_fn` to every borrowed series.
    ///
    /// Same as [`process`](Self::process), for callers holding slices.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `indicator_fn`.
    #[cfg(feature = "parallel")]
    pub fn process_refs<T, F, R>(&self, series: &[&[T]], indicator_fn: F) -> Result<Vec<R>>
    where
        T: SeriesElement,
        F: Fn(&[T]) -> Result<R> + Send + Sync,
        R: Send,
    {
        if series.len() < self.min_parallel_threshold {
            debug!(series = series.len(), parallel = false, "processing batch");
            series.iter().map(|s| indicator_fn(s)).collect()
        } else {
            debug!(series = series.len(), parallel = true, "processing batch");
            series.par_iter().map(|s| indicator_fn(s)).collect()
        }
    }

    /// Applies `indicator_fn` to every borrowed series.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `indicator_fn`.
    #[cfg(not(feature = "parallel"))]
    pub fn process_refs<T, F, R>(&self, series: &[&[T]], indicator_fn: F) -> Result<Vec<R>>
    where
        T: SeriesElement,
        F: Fn(&[T]) -> Result<R>,
    {
        debug!(series = series.len(), parallel = false, "processing batch");
        series.iter().map(|s| indicator_fn(s)).collect()
    }
}

/// Applies `indicator_fn` to every series with a default [`BatchProcessor`].
///
/// # Errors
///
/// Returns the first error produced by `indicator_fn`.
#[cfg(feature = "parallel")]
pub fn process_batch<T, F, R>(series: &[Vec<T>], indicator_fn: F) -> Result<Vec<R>>
where
    T: SeriesElement,
    F: Fn(&[T]) -> Result<R> + Send + Sync,
    R: Send,
{
    BatchProcessor::new().process(series, indicator_fn)
}

/// Applies `indicator_fn` to every series with a default [`BatchProcessor`].
///
/// # Errors
///
/// Returns the first error produced by `indicator_fn`.
#[cfg(not(feature = "parallel"))]
pub fn process_batch<T, F, R>(series: &[Vec<T>], indicator_fn: F) -> Result<Vec<R>>
where
    T: SeriesElement,
    F: Fn(&[T]) -> Result<R>,
{
    BatchProcessor::new().process(series, indicator_fn)
}
