//! Candlestick chart input: the guarded, styled view of a candle slot.

use crate::domain::candle::{is_ascending, CandleDirection, CandlePoint};
use crate::error::RenderGuardError;
use crate::shared::fmt::{num, time};
use crate::shared::Rgba;

use chrono::{DateTime, Utc};

/// Canvas geometry handed to the candlestick renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandleLayout {
    pub width: u32,
    pub height: u32,
    pub pixel_ratio: f32,
    pub margin_left: u32,
    pub margin_right: u32,
    pub margin_top: u32,
    pub margin_bottom: u32,
    pub x_ticks: u32,
    pub y_ticks: u32,
    pub tick_padding: u32,
}

impl Default for CandleLayout {
    fn default() -> Self {
        Self {
            width: 600,
            height: 400,
            pixel_ratio: 1.0,
            margin_left: 50,
            margin_right: 50,
            margin_top: 10,
            margin_bottom: 30,
            x_ticks: 6,
            y_ticks: 5,
            tick_padding: 5,
        }
    }
}

/// A candle with its resolved style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyledCandle<'a> {
    pub point: &'a CandlePoint,
    pub direction: CandleDirection,
    /// Shared by wick, body fill and body stroke.
    pub color: Rgba,
}

/// Everything a candlestick renderer needs. Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct CandleChart<'a> {
    points: &'a [CandlePoint],
    time_extent: (DateTime<Utc>, DateTime<Utc>),
    price_extent: (f64, f64),
    pub layout: CandleLayout,
}

impl<'a> CandleChart<'a> {
    pub const SERIES_NAME: &'static str = "Candlestick Series";

    pub fn new(points: &'a [CandlePoint]) -> Result<Self, RenderGuardError> {
        Self::with_layout(points, CandleLayout::default())
    }

    /// The time domain runs from the first to the last point as given.
    pub fn with_layout(
        points: &'a [CandlePoint],
        layout: CandleLayout,
    ) -> Result<Self, RenderGuardError> {
        let (first, last) = match (points.first(), points.last()) {
            (Some(f), Some(l)) => (f, l),
            _ => return Err(RenderGuardError::EmptyCandles),
        };

        if !is_ascending(points) {
            tracing::warn!(
                candles = points.len(),
                "Candle timestamps are not ascending; time scale uses first/last as given"
            );
        }

        let price_extent = points.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
            (lo.min(p.low), hi.max(p.high))
        });

        Ok(Self {
            points,
            time_extent: (first.timestamp, last.timestamp),
            price_extent,
            layout,
        })
    }

    pub fn points(&self) -> &'a [CandlePoint] {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether there are no candles. Construction refuses an empty slice.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// `(first.timestamp, last.timestamp)`.
    pub fn time_extent(&self) -> (DateTime<Utc>, DateTime<Utc>) {
        self.time_extent
    }

    /// `(lowest low, highest high)`.
    pub fn price_extent(&self) -> (f64, f64) {
        self.price_extent
    }

    pub fn styled(&self) -> impl Iterator<Item = StyledCandle<'a>> + 'a {
        self.points.iter().map(|point| {
            let direction = point.direction();
            StyledCandle {
                point,
                direction,
                color: direction.color(),
            }
        })
    }

    /// Crosshair label for the x axis.
    pub fn format_time(&self, ts: &DateTime<Utc>) -> String {
        time::date_label(ts)
    }

    /// Crosshair label for the y axis.
    pub fn format_price(&self, value: f64) -> String {
        num::price(value)
    }

    /// Y axis tick label.
    pub fn format_tick(&self, value: f64) -> String {
        num::tick(value, 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn candle(day: u32, open: f64, high: f64, low: f64, close: f64) -> CandlePoint {
        CandlePoint {
            timestamp: Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0).unwrap(),
            open,
            high,
            low,
            close,
        }
    }

    #[test]
    fn test_empty_is_refused() {
        assert_eq!(CandleChart::new(&[]).unwrap_err(), RenderGuardError::EmptyCandles);
    }

    #[test]
    fn test_extents() {
        let points = vec![
            candle(1, 100.0, 112.0, 95.0, 110.0),
            candle(2, 110.0, 120.0, 101.0, 115.0),
            candle(3, 115.0, 116.0, 88.0, 90.0),
        ];
        let chart = CandleChart::new(&points).unwrap();
        assert_eq!(chart.time_extent(), (points[0].timestamp, points[2].timestamp));
        assert_eq!(chart.price_extent(), (88.0, 120.0));
        assert_eq!(chart.len(), 3);
        assert!(!chart.is_empty());
    }

    #[test]
    fn test_single_point_extent() {
        let points = vec![candle(5, 1.0, 2.0, 0.5, 1.5)];
        let chart = CandleChart::new(&points).unwrap();
        assert_eq!(chart.time_extent().0, chart.time_extent().1);
    }

    #[test]
    fn test_unordered_keeps_first_last() {
        let points = vec![candle(3, 1.0, 1.0, 1.0, 1.0), candle(1, 1.0, 1.0, 1.0, 1.0)];
        let chart = CandleChart::new(&points).unwrap();
        assert_eq!(chart.time_extent(), (points[0].timestamp, points[1].timestamp));
    }

    #[test]
    fn test_styled_colors() {
        let points = vec![
            candle(1, 100.0, 111.0, 99.0, 110.0),
            candle(2, 100.0, 101.0, 89.0, 90.0),
        ];
        let chart = CandleChart::new(&points).unwrap();
        let styled: Vec<_> = chart.styled().collect();
        assert_eq!(styled[0].direction, CandleDirection::Bullish);
        assert_eq!(styled[0].color.to_hex(), "#26A69A");
        assert_eq!(styled[1].direction, CandleDirection::Bearish);
        assert_eq!(styled[1].color.to_hex(), "#EF5350");
    }

    #[test]
    fn test_default_layout() {
        let layout = CandleLayout::default();
        assert_eq!((layout.width, layout.height), (600, 400));
        assert_eq!((layout.margin_left, layout.margin_bottom), (50, 30));
        assert_eq!((layout.x_ticks, layout.y_ticks), (6, 5));
    }

    #[test]
    fn test_formatters() {
        let points = vec![candle(9, 1.0, 2.0, 0.5, 1.5)];
        let chart = CandleChart::new(&points).unwrap();
        assert_eq!(chart.format_time(&points[0].timestamp), "2024-01-09");
        assert_eq!(chart.format_price(101.5), "101.50");
        assert_eq!(chart.format_tick(1500.0), "1,500");
    }
}
