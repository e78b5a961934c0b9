//! Domain models for rating events and movie metadata.
//!
//! These are the owned records produced by the loader. They are immutable once
//! loaded; the filter engine only ever selects subsets of them by reference.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Genre assigned to movies whose genre field is missing or blank.
pub const NO_GENRES_LISTED: &str = "(no genres listed)";

/// Separator used by the genre column of `movies.csv`.
pub const GENRE_SEPARATOR: char = '|';

/// Identifier of a user in the ratings table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

/// Identifier of a movie, shared by both tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One user-to-movie rating event.
///
/// # Examples
///
/// ```
/// use movielens_explorer::core::domain::{MovieId, Rating, UserId};
///
/// let rating = Rating::from_unix(UserId(1), MovieId(10), 4.0, 1_000_000_000).unwrap();
/// assert_eq!(rating.observed_date().to_string(), "2001-09-09");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub user_id: UserId,
    pub movie_id: MovieId,
    pub rating: f64,
    pub observed_at: DateTime<Utc>,
}

impl Rating {
    /// Builds a rating from a raw seconds-since-epoch timestamp, read as UTC.
    ///
    /// Returns `None` when the timestamp is outside the representable range.
    pub fn from_unix(user_id: UserId, movie_id: MovieId, rating: f64, seconds: i64) -> Option<Self> {
        DateTime::<Utc>::from_timestamp(seconds, 0).map(|observed_at| Self {
            user_id,
            movie_id,
            rating,
            observed_at,
        })
    }

    /// Calendar date (UTC) of the rating, used for date-range filtering.
    pub fn observed_date(&self) -> NaiveDate {
        self.observed_at.date_naive()
    }
}

/// One catalog entry with its (never empty) set of genres.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub movie_id: MovieId,
    pub title: String,
    pub genres: BTreeSet<String>,
}

impl Movie {
    /// Creates a movie from the raw genre column value.
    pub fn new(movie_id: MovieId, title: impl Into<String>, raw_genres: Option<&str>) -> Self {
        Self {
            movie_id,
            title: title.into(),
            genres: split_genres(raw_genres),
        }
    }

    /// True when at least one of the movie's genres is in `selected`.
    pub fn matches_any(&self, selected: &BTreeSet<String>) -> bool {
        self.genres.iter().any(|g| selected.contains(g))
    }
}

/// Splits a pipe-delimited genre value into a set.
///
/// A missing or blank value maps to [`NO_GENRES_LISTED`], so the result is
/// never empty.
///
/// ```
/// use movielens_explorer::core::domain::{split_genres, NO_GENRES_LISTED};
///
/// assert_eq!(split_genres(Some("Action|Comedy")).len(), 2);
/// assert!(split_genres(None).contains(NO_GENRES_LISTED));
/// ```
pub fn split_genres(raw: Option<&str>) -> BTreeSet<String> {
    let genres: BTreeSet<String> = raw
        .unwrap_or_default()
        .split(GENRE_SEPARATOR)
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .map(str::to_string)
        .collect();

    if genres.is_empty() {
        BTreeSet::from([NO_GENRES_LISTED.to_string()])
    } else {
        genres
    }
}
