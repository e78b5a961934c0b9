//! Data Transfer Objects and visualization dispatch for the presentation layer.
//!
//! - [`types`]: chart-ready summary tables and the per-interaction report
//! - [`visualization`]: the closed [`Visualization`] set and [`render`]

pub mod types;
pub mod visualization;

pub use types::{
    ActivityCount, ActivityDistribution, ChartData, ExplorationReport, GenreCount, HistogramBin,
    MonthlyCount, SummaryCounters,
};
pub use visualization::{
    render, ChartSettings, Visualization, DEFAULT_ACTIVITY_BINS, DEFAULT_RATING_BINS,
};
