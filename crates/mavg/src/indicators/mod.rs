//! Moving average indicators.
//!
//! # Overview
//!
//! All indicators in this module share the following properties:
//!
//! - **Generic**: Work with both `f32` and `f64` types via the
//!   [`SeriesElement`](crate::traits::SeriesElement) trait
//! - **Efficient**: O(n) time complexity
//! - **Compact**: Output holds only complete windows, no NaN padding
//! - **Error-safe**: Return typed errors instead of partial output
//!
//! # Indicators
//!
//! - [`sma`] - Simple Moving Average: arithmetic mean over a sliding window
//! - [`ema`] - Exponential Moving Average: SMA-seeded exponential smoothing
//! - [`dema`] - Double Exponential Moving Average: `2 × EMA - EMA(EMA)`
//!
//! [`MovingAverage`] configures any of them by [`MaType`](crate::MaType).
//!
//! # Output Lengths
//!
//! | Indicator | Minimum input | Output length |
//! |---|---|---|
//! | `sma` | `period` | `len - period + 1` |
//! | `ema` | `period` | `len - period + 1` |
//! | `dema` | `2 × period - 1` | `len - 2 × period + 2` |
//!
//! # Example
//!
//! ```
//! use mavg::indicators::{sma, ema, dema};
//!
//! let prices = vec![25.0_f64, 85.0, 65.0, 12.45, 66.2, 11.3, 22.5];
//!
//! let sma_result = sma(&prices, 3).unwrap();
//! let ema_result = ema(&prices, 3).unwrap();
//! let dema_result = dema(&prices, 3).unwrap();
//!
//! assert_eq!(sma_result.len(), 5);
//! assert_eq!(ema_result.len(), 5);
//! assert_eq!(dema_result.len(), 3);
//! assert_eq!(sma_result[0], ema_result[0]);
//! ```
//!
//! # Error Handling
//!
//! Indicators return [`Result<T, Error>`](crate::error::Error) for:
//!
//! - A zero period ([`NegativeTimePeriod`](crate::error::Error::NegativeTimePeriod))
//! - Too few values for the period
//!   ([`TimePeriodTooBig`](crate::error::Error::TimePeriodTooBig))

pub mod dema;
pub mod ema;
pub mod moving_average;
pub mod sma;

// Re-exports so callers can write `use mavg::indicators::sma;`
pub use dema::{dema, dema_min_len, dema_output_len};
pub use ema::{ema, ema_alpha, ema_min_len, ema_output_len, ema_with_alpha};
pub use moving_average::MovingAverage;
pub use sma::{sma, sma_min_len, sma_output_len};
