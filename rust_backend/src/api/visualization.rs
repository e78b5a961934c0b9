//! The closed set of dashboard visualizations and their dispatch.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::api::types::ChartData;
use crate::error::ExplorerError;
use crate::services::{
    genre_popularity, rating_distribution, ratings_over_time, ratings_per_movie, ratings_per_user,
};
use crate::transformations::{FilterSelection, FilteredView};

/// Default number of bins for the rating histogram.
pub const DEFAULT_RATING_BINS: usize = 10;

/// Default number of bins for the per-user and per-movie histograms.
pub const DEFAULT_ACTIVITY_BINS: usize = 50;

/// One of the five charts the dashboard can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visualization {
    RatingDistribution,
    GenrePopularity,
    RatingsOverTime,
    RatingsPerUser,
    RatingsPerMovie,
}

impl Visualization {
    /// All visualizations, in menu order.
    pub const ALL: [Visualization; 5] = [
        Visualization::RatingDistribution,
        Visualization::GenrePopularity,
        Visualization::RatingsOverTime,
        Visualization::RatingsPerUser,
        Visualization::RatingsPerMovie,
    ];

    /// Menu label shown by the dashboard.
    pub fn label(self) -> &'static str {
        match self {
            Visualization::RatingDistribution => "Ratings Distribution",
            Visualization::GenrePopularity => "Popularity of Genres",
            Visualization::RatingsOverTime => "Ratings Over Time",
            Visualization::RatingsPerUser => "Ratings per User",
            Visualization::RatingsPerMovie => "Ratings per Movie",
        }
    }

    /// Short command-line name.
    pub fn slug(self) -> &'static str {
        match self {
            Visualization::RatingDistribution => "rating-distribution",
            Visualization::GenrePopularity => "genre-popularity",
            Visualization::RatingsOverTime => "ratings-over-time",
            Visualization::RatingsPerUser => "ratings-per-user",
            Visualization::RatingsPerMovie => "ratings-per-movie",
        }
    }
}

impl fmt::Display for Visualization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Visualization {
    type Err = ExplorerError;

    /// Accepts either the menu label or the slug, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Visualization::ALL
            .into_iter()
            .find(|v| v.label().eq_ignore_ascii_case(wanted) || v.slug().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ExplorerError::UnknownVisualization(s.to_string()))
    }
}

/// Presentation parameters for the histogram charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSettings {
    #[serde(default = "default_rating_bins")]
    pub rating_bins: usize,
    #[serde(default = "default_activity_bins")]
    pub activity_bins: usize,
}

fn default_rating_bins() -> usize {
    DEFAULT_RATING_BINS
}

fn default_activity_bins() -> usize {
    DEFAULT_ACTIVITY_BINS
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            rating_bins: default_rating_bins(),
            activity_bins: default_activity_bins(),
        }
    }
}

/// Compute the summary table for `visualization` over the filtered view.
pub fn render(
    view: &FilteredView<'_>,
    selection: &FilterSelection,
    visualization: Visualization,
    settings: &ChartSettings,
) -> ChartData {
    match visualization {
        Visualization::RatingDistribution => {
            ChartData::RatingDistribution(rating_distribution(view, settings.rating_bins))
        }
        Visualization::GenrePopularity => {
            ChartData::GenrePopularity(genre_popularity(view, &selection.genres))
        }
        Visualization::RatingsOverTime => ChartData::RatingsOverTime(ratings_over_time(view)),
        Visualization::RatingsPerUser => {
            ChartData::RatingsPerUser(ratings_per_user(view, settings.activity_bins))
        }
        Visualization::RatingsPerMovie => {
            ChartData::RatingsPerMovie(ratings_per_movie(view, settings.activity_bins))
        }
    }
}
