//! # chartboard
//!
//! Data pipeline for a four-chart dashboard: line, bar, pie and candlestick
//! datasets are fetched concurrently, validated, transformed into
//! renderer-ready view models and dispatched to opaque chart renderers.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core** — Shared types, domain wire types, transforms and view models
//! 2. **State** — `ChartPresentationState`: four slots, lifecycle tokens, observers
//! 3. **Transport** — `DataSource` seam and the `DashboardHttp` client
//! 4. **Render** — `RenderDispatcher` and the process-wide renderer registry
//! 5. **High-Level** — `Dashboard` orchestration and its builder
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use chartboard::prelude::*;
//!
//! let dashboard = Dashboard::builder()
//!     .base_url("http://localhost:8000")
//!     .build()?;
//!
//! let (token, report) = dashboard.mount_and_load().await;
//! dashboard.render(&mut my_renderer).await;
//! dashboard.unmount(&token).await;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes and label formatting.
pub mod shared;

/// Domain modules (vertical slices): wire types, conversions, view models.
pub mod domain;

/// Error types.
pub mod error;

/// Network constants.
pub mod network;

// ── Layer 2: State ───────────────────────────────────────────────────────────

/// Four-slot presentation state.
pub mod state;

// ── Layer 3: Transport ───────────────────────────────────────────────────────

/// `DataSource` trait.
pub mod source;

/// HTTP client with retry policies.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 4: Render ──────────────────────────────────────────────────────────

/// Render dispatch and renderer registration.
pub mod render;

// ── Layer 5: High-Level ──────────────────────────────────────────────────────

/// `Dashboard` — the primary entry point.
pub mod dashboard;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared
    pub use crate::shared::{ChartKind, Rgba};

    // Domain types
    pub use crate::domain::candle::{CandleDirection, CandlePoint};
    pub use crate::domain::series::{CategoricalViewModel, Fill, Series, StyleRole, StyleSpec};

    // Errors
    pub use crate::error::{DashboardError, HttpError, PayloadError, RenderGuardError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // State
    pub use crate::state::{
        ChartData, ChartPresentationState, CommitOutcome, DashboardSnapshot, LifecycleToken,
        SlotPhase, SlotState, StateObserver,
    };

    // Transport
    pub use crate::source::DataSource;
    #[cfg(feature = "http")]
    pub use crate::http::{DashboardHttp, RetryConfig, RetryPolicy};

    // Render
    pub use crate::render::{
        CandleChart, CandleLayout, ChartRenderer, Placeholder, RenderDispatcher, RenderSummary,
    };

    // Orchestration
    pub use crate::dashboard::{Dashboard, LoadReport, SlotOutcome};
    #[cfg(feature = "http")]
    pub use crate::dashboard::DashboardBuilder;
}
