//! The owned pair of base tables and the bounds observed in them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

use super::domain::{Movie, Rating};

/// Observed ranges of the loaded data, computed once at load time.
///
/// The ranges are `None` when there are no ratings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetBounds {
    pub date_range: Option<(NaiveDate, NaiveDate)>,
    pub rating_range: Option<(f64, f64)>,
    pub genres: BTreeSet<String>,
}

impl DatasetBounds {
    /// Scans both tables and records their extents.
    pub fn compute(ratings: &[Rating], movies: &[Movie]) -> Self {
        let date_range = ratings
            .iter()
            .map(Rating::observed_date)
            .fold(None, |acc: Option<(NaiveDate, NaiveDate)>, d| match acc {
                None => Some((d, d)),
                Some((lo, hi)) => Some((lo.min(d), hi.max(d))),
            });

        let rating_range = ratings
            .iter()
            .map(|r| r.rating)
            .fold(None, |acc: Option<(f64, f64)>, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            });

        let genres = movies
            .iter()
            .flat_map(|m| m.genres.iter().cloned())
            .collect();

        Self {
            date_range,
            rating_range,
            genres,
        }
    }
}

/// Read-only base tables shared by every interaction.
///
/// Built once by the loader and passed by reference into the filter engine.
#[derive(Debug, Clone)]
pub struct Dataset {
    ratings: Vec<Rating>,
    movies: Vec<Movie>,
    bounds: DatasetBounds,
}

impl Dataset {
    /// Builds a dataset, dropping repeated movie ids (first occurrence wins).
    pub fn new(ratings: Vec<Rating>, movies: Vec<Movie>) -> Self {
        let mut seen = HashSet::with_capacity(movies.len());
        let total = movies.len();
        let movies: Vec<Movie> = movies
            .into_iter()
            .filter(|m| seen.insert(m.movie_id))
            .collect();

        if movies.len() < total {
            log::warn!(
                "Dropped {} movie rows with duplicate movieId",
                total - movies.len()
            );
        }

        let bounds = DatasetBounds::compute(&ratings, &movies);
        Self {
            ratings,
            movies,
            bounds,
        }
    }

    pub fn ratings(&self) -> &[Rating] {
        &self.ratings
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn bounds(&self) -> &DatasetBounds {
        &self.bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::domain::{MovieId, UserId, NO_GENRES_LISTED};

    fn rating(user: i64, movie: i64, value: f64, ts: i64) -> Rating {
        Rating::from_unix(UserId(user), MovieId(movie), value, ts).unwrap()
    }

    #[test]
    fn test_bounds_from_data() {
        let ratings = vec![
            rating(1, 10, 4.0, 1_000_000_000),
            rating(2, 10, 0.5, 900_000_000),
            rating(3, 11, 5.0, 1_100_000_000),
        ];
        let movies = vec![
            Movie::new(MovieId(10), "A", Some("Action|Comedy")),
            Movie::new(MovieId(11), "B", None),
        ];
        let dataset = Dataset::new(ratings, movies);
        let bounds = dataset.bounds();

        assert_eq!(
            bounds.date_range,
            Some((
                NaiveDate::from_ymd_opt(1998, 7, 9).unwrap(),
                NaiveDate::from_ymd_opt(2004, 11, 9).unwrap()
            ))
        );
        assert_eq!(bounds.rating_range, Some((0.5, 5.0)));
        assert_eq!(bounds.genres.len(), 3);
        assert!(bounds.genres.contains(NO_GENRES_LISTED));
    }

    #[test]
    fn test_bounds_empty_ratings() {
        let dataset = Dataset::new(vec![], vec![Movie::new(MovieId(1), "A", Some("Drama"))]);
        assert!(dataset.bounds().date_range.is_none());
        assert!(dataset.bounds().rating_range.is_none());
        assert_eq!(dataset.bounds().genres.len(), 1);
    }

    #[test]
    fn test_duplicate_movie_ids_keep_first() {
        let movies = vec![
            Movie::new(MovieId(1), "First", Some("Drama")),
            Movie::new(MovieId(1), "Second", Some("Horror")),
        ];
        let dataset = Dataset::new(vec![], movies);
        assert_eq!(dataset.movies().len(), 1);
        assert_eq!(dataset.movies()[0].title, "First");
        assert!(!dataset.bounds().genres.contains("Horror"));
    }
}
