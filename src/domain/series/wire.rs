//! Wire types for the line / bar / pie endpoints.

use crate::error::PayloadError;
use serde::{Deserialize, Serialize};

/// REST response shared by the three categorical endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSeriesPayload {
    pub labels: Vec<String>,
    pub data: Vec<f64>,
}

impl RawSeriesPayload {
    /// Validate an untyped response body.
    ///
    /// Rejects wrong field types and label/value count mismatches.
    pub fn from_value(value: serde_json::Value) -> Result<Self, PayloadError> {
        let payload: Self = serde_json::from_value(value)?;
        if payload.labels.len() != payload.data.len() {
            return Err(PayloadError::LengthMismatch {
                labels: payload.labels.len(),
                values: payload.data.len(),
            });
        }
        Ok(payload)
    }
}
