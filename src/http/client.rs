//! Chart endpoint client — `DashboardHttp`.
//!
//! One GET per chart endpoint, returning the untyped JSON body. Failed
//! responses become [`HttpError`]; validation of the body is left to the
//! domain `wire` modules.

use crate::error::HttpError;
use crate::http::retry::RetryPolicy;
use crate::shared::ChartKind;

use reqwest::header::{HeaderMap, ACCEPT, RETRY_AFTER};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;

/// HTTP transport for the dashboard backend.
#[derive(Debug, Clone)]
pub struct DashboardHttp {
    base_url: String,
    client: Client,
    retry: RetryPolicy,
}

impl DashboardHttp {
    /// Client with the transport's default timeout and a single attempt per fetch.
    pub fn new(base_url: &str) -> Result<Self, HttpError> {
        Self::with_options(base_url, None, RetryPolicy::Once)
    }

    pub fn with_options(
        base_url: &str,
        timeout: Option<Duration>,
        retry: RetryPolicy,
    ) -> Result<Self, HttpError> {
        let client = match timeout {
            Some(t) => Client::builder().timeout(t).build()?,
            None => Client::builder().build()?,
        };

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            retry,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url_for(&self, kind: ChartKind) -> String {
        format!("{}{}", self.base_url, kind.endpoint())
    }

    /// GET the raw payload for one chart, retrying per the configured policy.
    pub async fn fetch_chart(&self, kind: ChartKind) -> Result<Value, HttpError> {
        let url = self.url_for(kind);
        let mut retry = 0;

        loop {
            let err = match self.get_json(&url).await {
                Ok(body) => return Ok(body),
                Err(err) => err,
            };

            let Some(delay) = self.retry.config().and_then(|c| c.next_delay(&err, retry)) else {
                if retry > 0 {
                    tracing::warn!(chart = %kind, attempts = retry + 1, error = %err, "Giving up on chart fetch");
                }
                return Err(err);
            };

            retry += 1;
            tracing::debug!(
                chart = %kind,
                retry,
                delay_ms = delay.as_millis() as u64,
                error = %err,
                "Retrying chart fetch"
            );
            futures_timer::Delay::new(delay).await;
        }
    }

    async fn get_json(&self, url: &str) -> Result<Value, HttpError> {
        let resp = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = resp.status();
        if status.is_success() {
            return Ok(resp.json().await?);
        }
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(HttpError::RateLimited {
                retry_after: retry_after(resp.headers()),
            });
        }

        Err(HttpError::Status {
            status: status.as_u16(),
            body: resp.text().await.unwrap_or_default(),
        })
    }
}

/// `Retry-After` in its delta-seconds form. HTTP-date values are ignored.
fn retry_after(headers: &HeaderMap) -> Option<Duration> {
    headers
        .get(RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse::<u64>()
        .ok()
        .map(Duration::from_secs)
}
