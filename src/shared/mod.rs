//! Shared newtypes and utilities used across all domain modules.
//!
//! These types serialize the same way the backend and the renderers expect
//! them, so they can sit directly inside wire types and view models.

pub mod color;
pub mod fmt;

pub use color::Rgba;

use serde::{Deserialize, Serialize};

// ─── ChartKind ───────────────────────────────────────────────────────────────

/// The four charts on the dashboard. Each kind owns one backend endpoint,
/// one transformer and one presentation slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
    Pie,
    Candlestick,
}

impl ChartKind {
    /// Every kind, in the order the dashboard lays them out.
    pub const ALL: [ChartKind; 4] = [
        ChartKind::Line,
        ChartKind::Bar,
        ChartKind::Pie,
        ChartKind::Candlestick,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Bar => "bar",
            Self::Pie => "pie",
            Self::Candlestick => "candlestick",
        }
    }

    /// Path of the backend resource serving this chart's data.
    pub fn endpoint(&self) -> &'static str {
        match self {
            Self::Line => "/api/line-chart-data/",
            Self::Bar => "/api/bar-chart-data/",
            Self::Pie => "/api/pie-chart-data/",
            Self::Candlestick => "/api/candlestick-data/",
        }
    }

    /// Heading shown above the chart area.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Line => "Line Chart",
            Self::Bar => "Bar Chart",
            Self::Pie => "Pie Chart",
            Self::Candlestick => "Candlestick Chart",
        }
    }
}

impl std::fmt::Display for ChartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
