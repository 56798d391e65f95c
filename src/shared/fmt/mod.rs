//! Label formatting for axes and crosshair readouts.

pub mod num;
pub mod time;
