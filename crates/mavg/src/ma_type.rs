//! Classification of moving-average kinds.
//!
//! [`MaType`] names every moving average a technical-analysis toolkit
//! commonly offers. Only [`MaType::Sma`], [`MaType::Ema`] and [`MaType::Dema`]
//! have algorithms in this crate; the remaining variants exist so callers
//! can classify and round-trip those names, and they refuse to compute
//! rather than return a wrong series.
//!
//! # Example
//!
//! ```
//! use mavg::MaType;
//!
//! let kind: MaType = "dema".parse().unwrap();
//! assert_eq!(kind, MaType::Dema);
//! assert!(kind.is_implemented());
//!
//! let data = vec![25.0_f64, 85.0, 65.0, 12.45, 66.2];
//! let result = kind.compute(&data, 3).unwrap();
//! assert_eq!(result.len(), 1);
//!
//! assert!(!MaType::Kama.is_implemented());
//! assert_eq!(MaType::Kama.min_len(10), None);
//! ```

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::error::Result;
use crate::indicators::dema::{dema, dema_min_len};
use crate::indicators::ema::{ema, ema_min_len};
use crate::indicators::sma::{sma, sma_min_len};
use crate::traits::SeriesElement;

/// Enumeration of moving-average kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaType {
    /// Simple Moving Average
    Sma,
    /// Exponential Moving Average
    Ema,
    /// Weighted Moving Average
    Wma,
    /// Double Exponential Moving Average
    Dema,
    /// Triple Exponential Moving Average
    Tema,
    /// Triangular Moving Average
    Trima,
    /// Kaufman Adaptive Moving Average
    Kama,
    /// MESA Adaptive Moving Average
    Mama,
    /// Tillson T3 Moving Average
    T3ma,
}

impl MaType {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 9] = [
        Self::Sma,
        Self::Ema,
        Self::Wma,
        Self::Dema,
        Self::Tema,
        Self::Trima,
        Self::Kama,
        Self::Mama,
        Self::T3ma,
    ];

    /// Returns the upper-case tag of the kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sma => "SMA",
            Self::Ema => "EMA",
            Self::Wma => "WMA",
            Self::Dema => "DEMA",
            Self::Tema => "TEMA",
            Self::Trima => "TRIMA",
            Self::Kama => "KAMA",
            Self::Mama => "MAMA",
            Self::T3ma => "T3MA",
        }
    }

    /// Returns whether this crate has an algorithm for the kind.
    #[must_use]
    pub const fn is_implemented(self) -> bool {
        matches!(self, Self::Sma | Self::Ema | Self::Dema)
    }

    /// Returns the minimum input length for `period`, or `None` for kinds
    /// without an algorithm.
    #[must_use]
    pub const fn min_len(self, period: usize) -> Option<usize> {
        match self {
            Self::Sma => Some(sma_min_len(period)),
            Self::Ema => Some(ema_min_len(period)),
            Self::Dema => Some(dema_min_len(period)),
            Self::Wma | Self::Tema | Self::Trima | Self::Kama | Self::Mama | Self::T3ma => None,
        }
    }

    /// Computes this moving average of `data`.
    ///
    /// # Errors
    ///
    /// Returns the error of the underlying indicator function.
    ///
    /// # Panics
    ///
    /// Panics if the kind has no algorithm (see [`is_implemented`](Self::is_implemented)).
    pub fn compute<T: SeriesElement>(self, data: &[T], period: usize) -> Result<Vec<T>> {
        match self {
            Self::Sma => sma(data, period),
            Self::Ema => ema(data, period),
            Self::Dema => dema(data, period),
            Self::Wma | Self::Tema | Self::Trima | Self::Kama | Self::Mama | Self::T3ma => {
                unimplemented!("{self} moving average has no algorithm")
            }
        }
    }
}

impl fmt::Display for MaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string names no [`MaType`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown moving average type '{input}'")]
pub struct ParseMaTypeError {
    input: String,
}

impl ParseMaTypeError {
    /// Returns the string that failed to parse.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl FromStr for MaType {
    type Err = ParseMaTypeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseMaTypeError {
                input: s.to_owned(),
            })
    }
}
