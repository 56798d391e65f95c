//! Unified error types.

use std::time::Duration;
use thiserror::Error;

/// Top-level dashboard error.
#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Malformed payload: {0}")]
    Payload(#[from] PayloadError),

    #[error("Render guard: {0}")]
    Render(#[from] RenderGuardError),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Transport errors: the request never produced a usable response body.
#[derive(Error, Debug)]
pub enum HttpError {
    /// Connection failure, timeout, or a success body that is not JSON.
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Any non-success status other than 429.
    #[error("Server responded {status}: {body}")]
    Status { status: u16, body: String },

    /// 429, with the server's `Retry-After` hint when it sent one.
    #[error("Rate limited (retry after {retry_after:?})")]
    RateLimited { retry_after: Option<Duration> },
}

/// The backend answered, but the body does not have the expected shape.
#[derive(Error, Debug)]
pub enum PayloadError {
    #[error("unexpected shape: {0}")]
    Shape(#[from] serde_json::Error),

    #[error("{labels} labels but {values} values")]
    LengthMismatch { labels: usize, values: usize },

    #[error("candle {index}: unparseable timestamp {value:?}")]
    InvalidTimestamp { index: usize, value: String },
}

/// A renderer was about to receive data it cannot draw.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RenderGuardError {
    #[error("candlestick renderer requires at least one candle")]
    EmptyCandles,
}
