//! Chart-ready output types handed to the presentation layer.
//!
//! Everything here is plain data with `Serialize`/`Deserialize`, so the CLI
//! and the Python bindings can ship it as JSON.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::transformations::FilterSelection;

/// One bar of an equal-width histogram. `lower` is inclusive; `upper` is
/// exclusive except for the last bin, which also holds the maximum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Number of distinct movies carrying a genre.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenreCount {
    pub genre: String,
    pub count: usize,
}

/// Number of ratings in one calendar month (keyed by its first day).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyCount {
    pub month: NaiveDate,
    pub count: usize,
}

/// Number of ratings attributed to one user or one movie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityCount {
    pub id: i64,
    pub count: usize,
}

/// Per-entity rating counts and the histogram of those counts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivityDistribution {
    pub counts: Vec<ActivityCount>,
    pub histogram: Vec<HistogramBin>,
}

/// Scalar counters shown above every chart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryCounters {
    pub total_ratings: usize,
    pub unique_users: usize,
    pub unique_movies: usize,
}

/// Summary table for the selected chart, one variant per visualization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum ChartData {
    RatingDistribution(Vec<HistogramBin>),
    GenrePopularity(Vec<GenreCount>),
    RatingsOverTime(Vec<MonthlyCount>),
    RatingsPerUser(ActivityDistribution),
    RatingsPerMovie(ActivityDistribution),
}

impl ChartData {
    /// True when the chart has nothing to draw.
    pub fn is_empty(&self) -> bool {
        match self {
            ChartData::RatingDistribution(bins) => bins.is_empty(),
            ChartData::GenrePopularity(counts) => counts.is_empty(),
            ChartData::RatingsOverTime(months) => months.is_empty(),
            ChartData::RatingsPerUser(dist) | ChartData::RatingsPerMovie(dist) => {
                dist.counts.is_empty()
            }
        }
    }
}

/// Everything one interaction produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplorationReport {
    pub selection: FilterSelection,
    pub summary: SummaryCounters,
    pub chart: ChartData,
}
