//! HTTP layer — `DashboardHttp` with an optional retry policy.

pub mod client;
pub mod retry;

pub use client::DashboardHttp;
pub use retry::{RetryConfig, RetryPolicy};
