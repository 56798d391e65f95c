//! Renderer registration in a fresh process.
//!
//! Kept in its own test binary so nothing else has touched the global
//! registry before the dispatcher is built.

use chartboard::domain::series::{to_categorical, wire::RawSeriesPayload};
use chartboard::prelude::*;
use chartboard::render::registry::{self, DEFAULT_COMPONENTS};

#[derive(Default)]
struct Calls(Vec<String>);

impl ChartRenderer for Calls {
    fn draw_line(&mut self, chart: &CategoricalViewModel) {
        self.0.push(format!("line:{}", chart.len()));
    }
    fn draw_bar(&mut self, chart: &CategoricalViewModel) {
        self.0.push(format!("bar:{}", chart.len()));
    }
    fn draw_pie(&mut self, chart: &CategoricalViewModel) {
        self.0.push(format!("pie:{}", chart.len()));
    }
    fn draw_candles(&mut self, chart: &CandleChart<'_>) {
        self.0.push(format!("candles:{}", chart.len()));
    }
    fn draw_placeholder(&mut self, kind: ChartKind, placeholder: Placeholder<'_>) {
        self.0.push(format!("{kind}:{placeholder:?}"));
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[test]
fn default_dispatcher_registers_components_before_first_render() {
    let line = to_categorical(
        RawSeriesPayload {
            labels: vec!["Jan".into(), "Feb".into()],
            data: vec![65.0, 59.0],
        },
        StyleRole::Line,
    );
    let snapshot = DashboardSnapshot {
        line: SlotState::Loaded(line),
        ..Default::default()
    };

    let dispatcher = RenderDispatcher::default();
    for component in DEFAULT_COMPONENTS {
        assert!(registry::is_registered(component), "{component:?} not registered");
    }

    let mut calls = Calls::default();
    let summary = dispatcher.render(&snapshot, &mut calls);

    assert_eq!(summary.drawn, vec![ChartKind::Line]);
    assert_eq!(
        calls.0,
        vec!["line:2", "bar:Loading", "pie:Loading", "candlestick:Loading"]
    );
}
