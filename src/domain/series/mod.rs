//! Categorical series domain — line, bar and pie view models.

mod convert;
pub mod wire;

use crate::shared::Rgba;
use serde::{Deserialize, Serialize};

pub use convert::to_categorical;

/// Which categorical chart a series is styled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleRole {
    Line,
    Bar,
    Pie,
}

const LINE_STROKE: Rgba = Rgba::new(75, 192, 192, 1.0);

const BAR_PALETTE: [Rgba; 3] = [
    Rgba::new(153, 102, 255, 0.6),
    Rgba::new(255, 159, 64, 0.6),
    Rgba::new(255, 99, 132, 0.6),
];

const PIE_PALETTE: [Rgba; 3] = [
    Rgba::new(255, 99, 132, 0.6),
    Rgba::new(54, 162, 235, 0.6),
    Rgba::new(255, 206, 86, 0.6),
];

impl StyleRole {
    /// Name given to the single series of this chart.
    pub fn series_name(&self) -> &'static str {
        match self {
            Self::Line => "Line Chart",
            Self::Bar => "Bar Chart",
            Self::Pie => "Pie Chart",
        }
    }

    /// Default styling. A fresh value on every call.
    pub fn default_style(&self) -> StyleSpec {
        match self {
            Self::Line => StyleSpec {
                stroke: Some(LINE_STROKE),
                stroke_width: 2.0,
                fill: Fill::None,
            },
            Self::Bar => StyleSpec {
                stroke: None,
                stroke_width: 0.0,
                fill: Fill::Rotating(BAR_PALETTE.to_vec()),
            },
            Self::Pie => StyleSpec {
                stroke: None,
                stroke_width: 0.0,
                fill: Fill::Rotating(PIE_PALETTE.to_vec()),
            },
        }
    }
}

/// How the area under / inside a series is filled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "colors", rename_all = "lowercase")]
pub enum Fill {
    None,
    /// Element `i` uses `colors[i % colors.len()]`.
    Rotating(Vec<Rgba>),
}

/// Renderer styling attached to a series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleSpec {
    pub stroke: Option<Rgba>,
    pub stroke_width: f32,
    pub fill: Fill,
}

impl StyleSpec {
    /// Fill color for the element at `index`, if the style fills at all.
    pub fn fill_at(&self, index: usize) -> Option<Rgba> {
        match &self.fill {
            Fill::None => None,
            Fill::Rotating(colors) if colors.is_empty() => None,
            Fill::Rotating(colors) => Some(colors[index % colors.len()]),
        }
    }
}

/// One named sequence of values plus its styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    pub values: Vec<f64>,
    pub style: StyleSpec,
}

/// Renderer-ready data for a line, bar or pie chart.
///
/// `labels[i]` names `series.values[i]`; both always have the same length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoricalViewModel {
    pub labels: Vec<String>,
    pub series: Series,
}

impl CategoricalViewModel {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// `(label, value)` pairs in display order.
    pub fn points(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.series.values.iter().copied())
    }
}
