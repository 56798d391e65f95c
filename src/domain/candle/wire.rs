//! Wire types for the candlestick endpoint.

use crate::error::PayloadError;
use serde::{Deserialize, Serialize};

/// A single candle as the backend sends it. `x` is a date string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawCandle {
    pub x: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

/// REST response for candlestick data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawCandlePayload {
    pub data: Vec<RawCandle>,
}

impl RawCandlePayload {
    /// Validate an untyped response body. Timestamps are checked later, by
    /// [`to_candles`](super::to_candles).
    pub fn from_value(value: serde_json::Value) -> Result<Self, PayloadError> {
        Ok(serde_json::from_value(value)?)
    }
}
