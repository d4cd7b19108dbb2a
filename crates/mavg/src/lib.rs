//! mavg: moving averages over numeric time series
//!
//! This crate computes the Simple (SMA), Exponential (EMA) and Double
//! Exponential (DEMA) moving averages used as building blocks of
//! technical-analysis indicators over financial or sensor data.
//!
//! # Features
//!
//! - **Performance**: O(n) rolling sums and recurrences
//! - **Generics**: Works with both `f32` and `f64` data types
//! - **Compact output**: One value per complete window, no NaN padding
//! - **Safety**: Invalid periods and short series are typed errors, never panics
//!
//! # Quick Start
//!
//! ```
//! use mavg::indicators::sma;
//!
//! let data = vec![25.0_f64, 85.0, 65.0, 12.45, 66.2];
//! let result = sma(&data, 3).unwrap();
//!
//! // One value per complete window: 5 - 3 + 1
//! assert_eq!(result.len(), 3);
//! assert!((result[0] - 58.333).abs() < 1e-3);
//! ```
//!
//! # Available Moving Averages
//!
//! - [`indicators::sma()`]: Simple Moving Average
//! - [`indicators::ema()`]: Exponential Moving Average
//! - [`indicators::dema()`]: Double Exponential Moving Average
//!
//! [`MaType`] also names WMA, TEMA, TRIMA, KAMA, MAMA and T3MA, which have no
//! algorithm here.
//!
//! # Error Handling
//!
//! All indicator functions return [`Result<T, Error>`]:
//!
//! ```
//! use mavg::{Error, indicators::{sma, dema}};
//!
//! let data = vec![25.0_f64, 85.0, 65.0, 12.45, 66.2];
//!
//! assert!(matches!(sma(&data, 0), Err(Error::NegativeTimePeriod { .. })));
//! assert!(matches!(sma(&data, 6), Err(Error::TimePeriodTooBig { .. })));
//!
//! // DEMA needs len + 1 >= 2 * period
//! assert!(matches!(dema(&data, 4), Err(Error::TimePeriodTooBig { required: 7, .. })));
//! ```
//!
//! # Cargo Features
//!
//! - `parallel`: run large [`batch`] jobs on Rayon's thread pool

#![deny(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::perf)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod batch;
pub mod error;
pub mod indicators;
pub mod ma_type;
pub mod prelude;
pub mod traits;
pub mod utils;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use indicators::{dema, ema, sma, MovingAverage};
pub use ma_type::{MaType, ParseMaTypeError};
pub use traits::{SeriesElement, ValidatedInput};
pub use utils::{approx_eq, approx_eq_relative, series_approx_eq, EPSILON, LOOSE_EPSILON};
