//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — View models handed to renderers
//! - `wire.rs` — Raw serde structs matching backend responses, with boundary validation
//! - `convert.rs` — Pure transforms from wire types to view models

pub mod candle;
pub mod series;
