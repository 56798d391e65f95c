//! Conversion: RawCandlePayload → ordered CandlePoints.

use super::wire::RawCandlePayload;
use super::CandlePoint;
use crate::error::PayloadError;
use crate::shared::fmt::time::parse_timestamp;

/// Parse every candle's timestamp and copy OHLC verbatim.
///
/// Output order is input order; nothing is sorted. The first unparseable
/// timestamp fails the whole payload.
pub fn to_candles(raw: RawCandlePayload) -> Result<Vec<CandlePoint>, PayloadError> {
    raw.data
        .into_iter()
        .enumerate()
        .map(|(index, c)| {
            let timestamp = parse_timestamp(&c.x)
                .ok_or(PayloadError::InvalidTimestamp { index, value: c.x })?;
            Ok(CandlePoint {
                timestamp,
                open: c.open,
                high: c.high,
                low: c.low,
                close: c.close,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::candle::wire::RawCandle;
    use chrono::{TimeZone, Utc};

    fn raw(x: &str, open: f64, high: f64, low: f64, close: f64) -> RawCandle {
        RawCandle {
            x: x.to_string(),
            open,
            high,
            low,
            close,
        }
    }

    #[test]
    fn test_preserves_order_and_values() {
        let payload = RawCandlePayload {
            data: vec![
                raw("2024-01-01", 100.0, 112.0, 95.0, 110.0),
                raw("2024-01-02", 110.0, 115.0, 88.0, 90.0),
            ],
        };
        let candles = to_candles(payload.clone()).unwrap();
        assert_eq!(candles.len(), 2);
        assert_eq!(
            candles[0].timestamp,
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
        );
        assert_eq!(
            candles[1].timestamp,
            Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap()
        );
        for (out, input) in candles.iter().zip(payload.data.iter()) {
            assert_eq!(out.open, input.open);
            assert_eq!(out.high, input.high);
            assert_eq!(out.low, input.low);
            assert_eq!(out.close, input.close);
        }
    }

    #[test]
    fn test_does_not_resort() {
        let payload = RawCandlePayload {
            data: vec![
                raw("2024-01-03", 1.0, 1.0, 1.0, 1.0),
                raw("2024-01-01", 2.0, 2.0, 2.0, 2.0),
            ],
        };
        let candles = to_candles(payload).unwrap();
        assert_eq!(candles[0].open, 1.0);
        assert_eq!(candles[1].open, 2.0);
    }

    #[test]
    fn test_empty_payload() {
        let candles = to_candles(RawCandlePayload { data: vec![] }).unwrap();
        assert!(candles.is_empty());
    }

    #[test]
    fn test_invalid_timestamp_reports_index() {
        let payload = RawCandlePayload {
            data: vec![
                raw("2024-01-01", 1.0, 1.0, 1.0, 1.0),
                raw("not a date", 1.0, 1.0, 1.0, 1.0),
            ],
        };
        match to_candles(payload) {
            Err(PayloadError::InvalidTimestamp { index, value }) => {
                assert_eq!(index, 1);
                assert_eq!(value, "not a date");
            }
            other => panic!("expected InvalidTimestamp, got {:?}", other),
        }
    }

    #[test]
    fn test_idempotent() {
        let payload = RawCandlePayload {
            data: vec![raw("2024-01-01T12:00:00Z", 5.0, 6.0, 4.0, 5.5)],
        };
        assert_eq!(
            to_candles(payload.clone()).unwrap(),
            to_candles(payload).unwrap()
        );
    }
}
