//! The filter engine: narrow both base tables and join them on `movie_id`.
//!
//! Nothing here returns an error. Inverted ranges, an empty genre selection
//! and selections matching no rows all produce an empty [`FilteredView`].

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::{BTreeSet, HashMap};

use crate::core::dataset::Dataset;
use crate::core::domain::{Movie, MovieId, Rating};
use crate::error::{ExplorerError, ExplorerResult};

/// User-chosen bounds for one interaction.
///
/// An open rating bound (infinite) is written as `null`, since JSON has no
/// infinity; reading `null` back restores the open bound.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterSelection {
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
    #[serde(
        serialize_with = "serialize_rating_bound",
        deserialize_with = "deserialize_lower_rating_bound"
    )]
    pub rating_min: f64,
    #[serde(
        serialize_with = "serialize_rating_bound",
        deserialize_with = "deserialize_upper_rating_bound"
    )]
    pub rating_max: f64,
    pub genres: BTreeSet<String>,
}

impl FilterSelection {
    /// The default selection: every observed date and rating, every genre.
    pub fn full(dataset: &Dataset) -> Self {
        let bounds = dataset.bounds();
        let (date_from, date_to) = bounds.date_range.unwrap_or((NaiveDate::MIN, NaiveDate::MAX));
        let (rating_min, rating_max) = bounds
            .rating_range
            .unwrap_or((f64::NEG_INFINITY, f64::INFINITY));

        Self {
            date_from,
            date_to,
            rating_min,
            rating_max,
            genres: bounds.genres.clone(),
        }
    }

    pub fn with_dates(mut self, date_from: NaiveDate, date_to: NaiveDate) -> Self {
        self.date_from = date_from;
        self.date_to = date_to;
        self
    }

    pub fn with_ratings(mut self, rating_min: f64, rating_max: f64) -> Self {
        self.rating_min = rating_min;
        self.rating_max = rating_max;
        self
    }

    pub fn with_genres<I, S>(mut self, genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.genres = genres.into_iter().map(Into::into).collect();
        self
    }

    /// True when either range has its lower bound above its upper bound.
    pub fn is_inverted(&self) -> bool {
        self.date_from > self.date_to || !(self.rating_min <= self.rating_max)
    }
}

fn serialize_rating_bound<S>(bound: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if bound.is_infinite() {
        serializer.serialize_none()
    } else {
        serializer.serialize_some(bound)
    }
}

fn deserialize_lower_rating_bound<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NEG_INFINITY))
}

fn deserialize_upper_rating_bound<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::INFINITY))
}

/// Partial selection coming from a caller; `None` keeps the default bound.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionOverrides {
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub rating_min: Option<f64>,
    pub rating_max: Option<f64>,
    pub genres: Option<Vec<String>>,
}

impl SelectionOverrides {
    /// Layer the overrides on top of `base`.
    pub fn apply(self, mut base: FilterSelection) -> FilterSelection {
        if let Some(date_from) = self.date_from {
            base.date_from = date_from;
        }
        if let Some(date_to) = self.date_to {
            base.date_to = date_to;
        }
        if let Some(rating_min) = self.rating_min {
            base.rating_min = rating_min;
        }
        if let Some(rating_max) = self.rating_max {
            base.rating_max = rating_max;
        }
        if let Some(genres) = self.genres {
            base.genres = genres.into_iter().collect();
        }
        base
    }
}

/// Parse an ISO `YYYY-MM-DD` date as used by the date-range controls.
pub fn parse_date(s: &str) -> ExplorerResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|e| ExplorerError::InvalidDate(format!("'{}': {}", s, e)))
}

/// One joined row: a rating paired with the movie it refers to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewRow<'a> {
    pub rating: &'a Rating,
    pub movie: &'a Movie,
}

/// The joined, bounds-satisfying subset for the current interaction.
///
/// Borrows from the [`Dataset`]; nothing is copied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilteredView<'a> {
    rows: Vec<ViewRow<'a>>,
}

impl<'a> FilteredView<'a> {
    pub fn rows(&self) -> &[ViewRow<'a>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ViewRow<'a>> {
        self.rows.iter()
    }
}

/// Keep ratings whose calendar date and value fall inside the inclusive bounds.
///
/// An inverted range matches nothing.
pub fn filter_ratings<'a, I>(
    ratings: I,
    date_from: NaiveDate,
    date_to: NaiveDate,
    rating_min: f64,
    rating_max: f64,
) -> Vec<&'a Rating>
where
    I: IntoIterator<Item = &'a Rating>,
{
    if date_from > date_to || !(rating_min <= rating_max) {
        return Vec::new();
    }

    ratings
        .into_iter()
        .filter(|r| {
            let date = r.observed_date();
            date >= date_from && date <= date_to && r.rating >= rating_min && r.rating <= rating_max
        })
        .collect()
}

/// Keep movies carrying at least one of the selected genres.
///
/// An empty selection matches nothing.
pub fn filter_movies<'a, I>(movies: I, selected_genres: &BTreeSet<String>) -> Vec<&'a Movie>
where
    I: IntoIterator<Item = &'a Movie>,
{
    if selected_genres.is_empty() {
        return Vec::new();
    }

    movies
        .into_iter()
        .filter(|m| m.matches_any(selected_genres))
        .collect()
}

/// Inner join on `movie_id`, in rating order.
///
/// Rows without a counterpart on the other side are dropped. If a movie id
/// repeats, the first movie with that id is used.
pub fn join<'a>(ratings: &[&'a Rating], movies: &[&'a Movie]) -> FilteredView<'a> {
    let mut by_id: HashMap<MovieId, &'a Movie> = HashMap::with_capacity(movies.len());
    for movie in movies {
        by_id.entry(movie.movie_id).or_insert(*movie);
    }

    let rows = ratings
        .iter()
        .filter_map(|&rating| {
            by_id
                .get(&rating.movie_id)
                .map(|&movie| ViewRow { rating, movie })
        })
        .collect();

    FilteredView { rows }
}

/// Apply a full selection to the dataset: filter both tables, then join.
pub fn apply_selection<'a>(dataset: &'a Dataset, selection: &FilterSelection) -> FilteredView<'a> {
    let ratings = filter_ratings(
        dataset.ratings(),
        selection.date_from,
        selection.date_to,
        selection.rating_min,
        selection.rating_max,
    );
    let movies = filter_movies(dataset.movies(), &selection.genres);

    join(&ratings, &movies)
}
