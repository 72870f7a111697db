//! Top NHL players per birth-year cohort.
//!
//! Reads a player-statistics workbook, keeps players born in a year window
//! with enough games played, ranks the best `k` of each birth-year cohort by
//! a chosen stat, writes the results to CSV and charts them.
//!
//! Binaries:
//! - `nhl-cohorts`: runs the analysis
//! - `generate_sample`: writes a synthetic input workbook

pub mod app;
pub mod color;
pub mod config;
pub mod data;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod state;
pub mod ui;
