//! Moving average configuration with a fluent builder API.
//!
//! [`MovingAverage`] bundles a [`MaType`] with a period so a moving average
//! can be configured once and applied to many series.
//!
//! # Example
//!
//! ```
//! use mavg::indicators::MovingAverage;
//! use mavg::MaType;
//!
//! let prices = vec![25.0_f64, 85.0, 65.0, 12.45, 66.2, 11.3, 22.5];
//!
//! // Defaults: SMA over 20 values
//! assert_eq!(MovingAverage::default().get_period(), 20);
//!
//! let dema3 = MovingAverage::new(MaType::Dema).period(3);
//! let result = dema3.compute(&prices).unwrap();
//! assert_eq!(result.len(), dema3.output_len(prices.len()));
//! ```

use crate::error::Result;
use crate::indicators::dema::dema_output_len;
use crate::indicators::ema::ema_output_len;
use crate::indicators::sma::sma_output_len;
use crate::ma_type::MaType;
use crate::traits::SeriesElement;

/// Moving average configuration.
///
/// Provides defaults (SMA, period 20) and fluent setters for customization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MovingAverage {
    kind: MaType,
    period: usize,
}

impl Default for MovingAverage {
    /// Creates an SMA configuration with period 20.
    fn default() -> Self {
        Self {
            kind: MaType::Sma,
            period: 20,
        }
    }
}

impl MovingAverage {
    /// Creates a configuration of the given kind with period 20.
    #[must_use]
    pub const fn new(kind: MaType) -> Self {
        Self { kind, period: 20 }
    }

    /// Sets the moving average kind.
    ///
    /// Default: [`MaType::Sma`]
    #[must_use]
    pub const fn kind(mut self, kind: MaType) -> Self {
        self.kind = kind;
        self
    }

    /// Sets the time period.
    ///
    /// Default: 20
    #[must_use]
    pub const fn period(mut self, period: usize) -> Self {
        self.period = period;
        self
    }

    /// Computes the configured moving average of `data`.
    ///
    /// # Errors
    ///
    /// - `Error::NegativeTimePeriod` if the period is 0
    /// - `Error::TimePeriodTooBig` if `data` is shorter than [`min_len`](Self::min_len)
    ///
    /// # Panics
    ///
    /// Panics if the configured kind has no algorithm.
    pub fn compute<T: SeriesElement>(&self, data: &[T]) -> Result<Vec<T>> {
        self.kind.compute(data, self.period)
    }

    /// Returns the moving average kind.
    #[must_use]
    pub const fn get_kind(&self) -> MaType {
        self.kind
    }

    /// Returns the period.
    #[must_use]
    pub const fn get_period(&self) -> usize {
        self.period
    }

    /// Returns the minimum input length for this configuration, or `None`
    /// if the kind has no algorithm.
    #[must_use]
    pub const fn min_len(&self) -> Option<usize> {
        self.kind.min_len(self.period)
    }

    /// Returns how many values [`compute`](Self::compute) yields for an input
    /// of `len` elements. Zero when the call would fail or the kind has no
    /// algorithm.
    #[must_use]
    pub const fn output_len(&self, len: usize) -> usize {
        match self.kind {
            MaType::Sma => sma_output_len(len, self.period),
            MaType::Ema => ema_output_len(len, self.period),
            MaType::Dema => dema_output_len(len, self.period),
            _ => 0,
        }
    }
}

impl From<MaType> for MovingAverage {
    fn from(kind: MaType) -> Self {
        Self::new(kind)
    }
}
