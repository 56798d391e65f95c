//! Render dispatch — maps loaded slots onto renderer calls.
//!
//! Renderers are opaque: they implement [`ChartRenderer`] and turn a view
//! model into pixels. The dispatcher decides, per slot and per render pass,
//! whether a renderer is called or a placeholder is shown.

pub mod candle;
pub mod registry;

pub use candle::{CandleChart, CandleLayout, StyledCandle};

use crate::domain::series::CategoricalViewModel;
use crate::shared::ChartKind;
use crate::state::{DashboardSnapshot, SlotState};

/// What to show in a chart area that has nothing to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder<'a> {
    /// Not fetched yet, or still in flight.
    Loading,
    /// Loaded, but there is nothing to plot.
    Empty,
    /// The source failed; carries the logged reason.
    Failed(&'a str),
    /// Renderer components for this chart were never registered.
    Unavailable,
}

/// The external chart engines.
pub trait ChartRenderer {
    fn draw_line(&mut self, chart: &CategoricalViewModel);
    fn draw_bar(&mut self, chart: &CategoricalViewModel);
    fn draw_pie(&mut self, chart: &CategoricalViewModel);
    /// Only ever called with at least one candle.
    fn draw_candles(&mut self, chart: &CandleChart<'_>);
    fn draw_placeholder(&mut self, kind: ChartKind, placeholder: Placeholder<'_>);
}

/// Which chart areas got a real chart in one pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderSummary {
    pub drawn: Vec<ChartKind>,
    pub placeholders: Vec<ChartKind>,
}

impl RenderSummary {
    pub fn was_drawn(&self, kind: ChartKind) -> bool {
        self.drawn.contains(&kind)
    }
}

/// Reads a [`DashboardSnapshot`] and drives a [`ChartRenderer`].
///
/// Every constructor registers the default renderer components first.
#[derive(Debug, Clone)]
pub struct RenderDispatcher {
    candle_layout: CandleLayout,
}

impl Default for RenderDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderDispatcher {
    /// Registers renderer components (idempotent) and uses default layout.
    pub fn new() -> Self {
        registry::init();
        Self {
            candle_layout: CandleLayout::default(),
        }
    }

    pub fn with_candle_layout(mut self, layout: CandleLayout) -> Self {
        self.candle_layout = layout;
        self
    }

    /// One render pass over all four slots, in layout order.
    pub fn render<R: ChartRenderer + ?Sized>(
        &self,
        snapshot: &DashboardSnapshot,
        renderer: &mut R,
    ) -> RenderSummary {
        let mut summary = RenderSummary::default();
        for kind in ChartKind::ALL {
            let drawn = if registry::missing_for(kind).is_empty() {
                self.render_slot(kind, snapshot, renderer)
            } else {
                tracing::warn!(chart = %kind, "Renderer components not registered");
                renderer.draw_placeholder(kind, Placeholder::Unavailable);
                false
            };
            if drawn {
                summary.drawn.push(kind);
            } else {
                summary.placeholders.push(kind);
            }
        }
        summary
    }

    fn render_slot<R: ChartRenderer + ?Sized>(
        &self,
        kind: ChartKind,
        snapshot: &DashboardSnapshot,
        renderer: &mut R,
    ) -> bool {
        let placeholder = match (kind, snapshot) {
            (ChartKind::Line, DashboardSnapshot { line: SlotState::Loaded(vm), .. }) => {
                renderer.draw_line(vm);
                return true;
            }
            (ChartKind::Bar, DashboardSnapshot { bar: SlotState::Loaded(vm), .. }) => {
                renderer.draw_bar(vm);
                return true;
            }
            (ChartKind::Pie, DashboardSnapshot { pie: SlotState::Loaded(vm), .. }) => {
                renderer.draw_pie(vm);
                return true;
            }
            (ChartKind::Candlestick, DashboardSnapshot { candle: SlotState::Loaded(points), .. }) => {
                // Checked here so the guard error below is never hit.
                if points.is_empty() {
                    Placeholder::Empty
                } else {
                    match CandleChart::with_layout(points, self.candle_layout) {
                        Ok(chart) => {
                            renderer.draw_candles(&chart);
                            return true;
                        }
                        Err(_) => Placeholder::Empty,
                    }
                }
            }
            (ChartKind::Line, s) => placeholder_for(&s.line),
            (ChartKind::Bar, s) => placeholder_for(&s.bar),
            (ChartKind::Pie, s) => placeholder_for(&s.pie),
            (ChartKind::Candlestick, s) => placeholder_for(&s.candle),
        };
        renderer.draw_placeholder(kind, placeholder);
        false
    }
}

fn placeholder_for<T>(slot: &SlotState<T>) -> Placeholder<'_> {
    match slot {
        SlotState::Failed(reason) => Placeholder::Failed(reason),
        SlotState::Loaded(_) => Placeholder::Empty,
        SlotState::Idle | SlotState::Fetching => Placeholder::Loading,
    }
}
