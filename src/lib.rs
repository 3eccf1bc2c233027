//! Post-processing for packet-rate benchmark results.
//!
//! Two binaries share this library: `bench-plot` draws `x y` sample files
//! to an image or a window, and `pps_stats` summarizes repeated pps
//! measurements per trial group.

pub mod app;
pub mod cli;
pub mod color;
pub mod config;
pub mod data;
pub mod render;
pub mod state;
pub mod ui;
