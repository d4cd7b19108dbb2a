//! Commonly used types and traits for convenient importing.
//!
//! # Usage
//!
//! ```
//! use mavg::prelude::*;
//!
//! let prices = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
//!
//! let sma_result = sma(&prices, 3).unwrap();
//! let ema_result = ema(&prices, 3).unwrap();
//! let dema_result = dema(&prices, 3).unwrap();
//! let configured = MovingAverage::new(MaType::Ema).period(3).compute(&prices).unwrap();
//!
//! assert_eq!(configured, ema_result);
//! ```
//!
//! # Contents
//!
//! - [`Error`] and [`Result`]
//! - [`SeriesElement`] and [`ValidatedInput`]
//! - `sma`, `ema`, `ema_with_alpha`, `dema` and their `*_min_len` / `*_output_len` helpers
//! - [`MaType`] and [`MovingAverage`]
//! - [`BatchProcessor`]

// Error types
pub use crate::error::{Error, Result};

// Traits
pub use crate::traits::{SeriesElement, ValidatedInput};

// Indicator functions
pub use crate::indicators::{dema, ema, ema_alpha, ema_with_alpha, sma};

// Length helpers
pub use crate::indicators::{
    dema_min_len, dema_output_len, ema_min_len, ema_output_len, sma_min_len, sma_output_len,
};

// Configuration
pub use crate::indicators::MovingAverage;
pub use crate::ma_type::MaType;

// Batch processing
pub use crate::batch::BatchProcessor;
