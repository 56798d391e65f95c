//! High-level entry point — `Dashboard` fetch orchestration.
//!
//! A dashboard owns a [`DataSource`] and a shared [`ChartPresentationState`].
//! Loading runs the four chart pipelines concurrently inside one future
//! (fetch → validate → transform → commit). A failure stays in its own slot.

use crate::domain::candle::{to_candles, wire::RawCandlePayload};
use crate::domain::series::{to_categorical, wire::RawSeriesPayload, StyleRole};
use crate::error::DashboardError;
use crate::render::{ChartRenderer, RenderDispatcher, RenderSummary};
use crate::shared::ChartKind;
use crate::source::DataSource;
use crate::state::{ChartData, ChartPresentationState, CommitOutcome, LifecycleToken};

use futures_util::future::join4;
use std::sync::Arc;

#[cfg(feature = "http")]
use crate::http::{DashboardHttp, RetryPolicy};
#[cfg(feature = "http")]
use std::time::Duration;

/// How one slot's pipeline ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotOutcome {
    Loaded,
    Failed(String),
    /// The lifecycle ended before the result could be applied.
    Discarded,
}

/// Per-chart outcome of one [`Dashboard::load`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub line: SlotOutcome,
    pub bar: SlotOutcome,
    pub pie: SlotOutcome,
    pub candlestick: SlotOutcome,
}

impl LoadReport {
    pub fn outcome(&self, kind: ChartKind) -> &SlotOutcome {
        match kind {
            ChartKind::Line => &self.line,
            ChartKind::Bar => &self.bar,
            ChartKind::Pie => &self.pie,
            ChartKind::Candlestick => &self.candlestick,
        }
    }

    pub fn loaded_count(&self) -> usize {
        ChartKind::ALL
            .iter()
            .filter(|k| *self.outcome(**k) == SlotOutcome::Loaded)
            .count()
    }
}

/// Fetch orchestrator for the four dashboard charts.
pub struct Dashboard<S: DataSource> {
    source: S,
    state: Arc<ChartPresentationState>,
    dispatcher: RenderDispatcher,
}

impl<S: DataSource> Dashboard<S> {
    /// Orchestrator over any data source, with fresh state.
    pub fn with_source(source: S) -> Self {
        Self {
            source,
            state: Arc::new(ChartPresentationState::new()),
            dispatcher: RenderDispatcher::new(),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Shared handle to the presentation state (for observers and readers).
    pub fn state(&self) -> Arc<ChartPresentationState> {
        self.state.clone()
    }

    pub async fn mount(&self) -> LifecycleToken {
        self.state.mount().await
    }

    /// End the lifecycle; results still in flight for `token` are discarded.
    pub async fn unmount(&self, token: &LifecycleToken) -> bool {
        self.state.unmount(token).await
    }

    /// Run all four pipelines for `token`. Completes when the slowest one does.
    pub async fn load(&self, token: &LifecycleToken) -> LoadReport {
        let (line, bar, pie, candlestick) = join4(
            self.load_slot(token, ChartKind::Line),
            self.load_slot(token, ChartKind::Bar),
            self.load_slot(token, ChartKind::Pie),
            self.load_slot(token, ChartKind::Candlestick),
        )
        .await;

        LoadReport {
            line,
            bar,
            pie,
            candlestick,
        }
    }

    pub async fn mount_and_load(&self) -> (LifecycleToken, LoadReport) {
        let token = self.mount().await;
        let report = self.load(&token).await;
        (token, report)
    }

    /// One render pass over the current state.
    pub async fn render<R: ChartRenderer + ?Sized>(&self, renderer: &mut R) -> RenderSummary {
        let snapshot = self.state.snapshot().await;
        self.dispatcher.render(&snapshot, renderer)
    }

    async fn load_slot(&self, token: &LifecycleToken, kind: ChartKind) -> SlotOutcome {
        // Stale token, or a load for this mount already owns the slot.
        if self.state.begin(token, kind).await != CommitOutcome::Applied {
            return SlotOutcome::Discarded;
        }

        match self.fetch_and_transform(kind).await {
            Ok(data) => match self.state.commit(token, data).await {
                CommitOutcome::Applied => {
                    tracing::debug!(chart = %kind, "Chart data loaded");
                    SlotOutcome::Loaded
                }
                _ => SlotOutcome::Discarded,
            },
            Err(e) => {
                tracing::error!(chart = %kind, error = %e, "Error fetching chart data");
                let reason = e.to_string();
                match self.state.fail(token, kind, reason.clone()).await {
                    CommitOutcome::Applied => SlotOutcome::Failed(reason),
                    _ => SlotOutcome::Discarded,
                }
            }
        }
    }

    async fn fetch_and_transform(&self, kind: ChartKind) -> Result<ChartData, DashboardError> {
        let body = self.source.fetch(kind).await?;
        transform(kind, body)
    }
}

/// Validate a raw body and run the matching transformer.
pub fn transform(kind: ChartKind, body: serde_json::Value) -> Result<ChartData, DashboardError> {
    let data = match kind {
        ChartKind::Line => ChartData::Line(to_categorical(
            RawSeriesPayload::from_value(body)?,
            StyleRole::Line,
        )),
        ChartKind::Bar => ChartData::Bar(to_categorical(
            RawSeriesPayload::from_value(body)?,
            StyleRole::Bar,
        )),
        ChartKind::Pie => ChartData::Pie(to_categorical(
            RawSeriesPayload::from_value(body)?,
            StyleRole::Pie,
        )),
        ChartKind::Candlestick => {
            ChartData::Candlestick(to_candles(RawCandlePayload::from_value(body)?)?)
        }
    };
    Ok(data)
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

#[cfg(feature = "http")]
impl Dashboard<DashboardHttp> {
    pub fn builder() -> DashboardBuilder {
        DashboardBuilder::default()
    }
}

/// Configures an HTTP-backed [`Dashboard`].
#[cfg(feature = "http")]
#[derive(Debug, Clone)]
pub struct DashboardBuilder {
    base_url: String,
    timeout: Option<Duration>,
    retry: RetryPolicy,
}

#[cfg(feature = "http")]
impl Default for DashboardBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            timeout: None,
            retry: RetryPolicy::Once,
        }
    }
}

#[cfg(feature = "http")]
impl DashboardBuilder {
    /// Defaults, with the base URL taken from `CHARTBOARD_API_URL` if set.
    pub fn from_env() -> Self {
        let builder = Self::default();
        match std::env::var(crate::network::API_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => builder.base_url(&url),
            _ => builder,
        }
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Per-request timeout. Unset means the transport default.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn retry(mut self, policy: RetryPolicy) -> Self {
        self.retry = policy;
        self
    }

    pub fn build(self) -> Result<Dashboard<DashboardHttp>, DashboardError> {
        let base = self.base_url.trim();
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(DashboardError::Config(format!(
                "base URL must start with http:// or https://: {:?}",
                self.base_url
            )));
        }
        let http = DashboardHttp::with_options(base, self.timeout, self.retry)?;
        Ok(Dashboard::with_source(http))
    }
}
