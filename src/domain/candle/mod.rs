//! Candle domain — OHLC points and their bullish / bearish classification.

mod convert;
pub mod wire;

use crate::shared::Rgba;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use convert::to_candles;

pub const BULLISH_COLOR: Rgba = Rgba::opaque(0x26, 0xA6, 0x9A);
pub const BEARISH_COLOR: Rgba = Rgba::opaque(0xEF, 0x53, 0x50);

/// One OHLC candle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandlePoint {
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl CandlePoint {
    pub fn direction(&self) -> CandleDirection {
        CandleDirection::of(self.open, self.close)
    }
}

/// Candle styling class. A candle that closes exactly at its open is bearish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CandleDirection {
    Bullish,
    Bearish,
}

impl CandleDirection {
    pub fn of(open: f64, close: f64) -> Self {
        if close > open {
            Self::Bullish
        } else {
            Self::Bearish
        }
    }

    /// Wick, body fill and body stroke all share this color.
    pub fn color(&self) -> Rgba {
        match self {
            Self::Bullish => BULLISH_COLOR,
            Self::Bearish => BEARISH_COLOR,
        }
    }
}

/// `true` if timestamps never decrease.
pub fn is_ascending(points: &[CandlePoint]) -> bool {
    points.windows(2).all(|w| w[0].timestamp <= w[1].timestamp)
}
