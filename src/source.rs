//! The data-source seam between the orchestrator and the transport.

use crate::error::HttpError;
use crate::shared::ChartKind;

use async_trait::async_trait;

/// One-shot read of a chart's backend resource.
///
/// Returns the body as untyped JSON; validation happens in the domain `wire`
/// modules. Implementations must not cache.
#[async_trait]
pub trait DataSource: Send + Sync {
    async fn fetch(&self, kind: ChartKind) -> Result<serde_json::Value, HttpError>;
}

#[cfg(feature = "http")]
#[async_trait]
impl DataSource for crate::http::DashboardHttp {
    async fn fetch(&self, kind: ChartKind) -> Result<serde_json::Value, HttpError> {
        self.fetch_chart(kind).await
    }
}
