//! Network constants for the dashboard backend.

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Environment variable overriding the base URL (see `DashboardBuilder::from_env`).
pub const API_URL_ENV: &str = "CHARTBOARD_API_URL";
