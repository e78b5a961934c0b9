//! Property tests for the filter engine.

use chrono::NaiveDate;
use proptest::prelude::*;
use std::collections::BTreeSet;

use movielens_explorer::core::{Dataset, Movie, MovieId, Rating, UserId};
use movielens_explorer::services::{genre_popularity, summarize};
use movielens_explorer::transformations::{
    apply_selection, filter_movies, filter_ratings, join, FilterSelection,
};

const GENRES: [&str; 5] = ["Action", "Comedy", "Drama", "Horror", "Romance"];

// 1995-01-01 .. 2020-01-01
const TS_MIN: i64 = 788_918_400;
const TS_MAX: i64 = 1_577_836_800;

fn arb_rating() -> impl Strategy<Value = Rating> {
    (0i64..20, 0i64..15, 1u8..=10, TS_MIN..TS_MAX).prop_map(|(user, movie, half_stars, ts)| {
        Rating::from_unix(UserId(user), MovieId(movie), f64::from(half_stars) / 2.0, ts).unwrap()
    })
}

fn arb_movies() -> impl Strategy<Value = Vec<Movie>> {
    prop::collection::vec(prop::sample::subsequence(GENRES.to_vec(), 0..=3), 12).prop_map(
        |genre_lists| {
            genre_lists
                .into_iter()
                .enumerate()
                .map(|(id, genres)| {
                    let raw = genres.join("|");
                    Movie::new(MovieId(id as i64), format!("Movie {}", id), Some(raw.as_str()))
                })
                .collect()
        },
    )
}

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (TS_MIN..TS_MAX).prop_map(|ts| {
        chrono::DateTime::from_timestamp(ts, 0)
            .unwrap()
            .date_naive()
    })
}

fn arb_selection() -> impl Strategy<Value = FilterSelection> {
    (
        arb_date(),
        arb_date(),
        0u8..=10,
        0u8..=10,
        prop::sample::subsequence(GENRES.to_vec(), 0..=GENRES.len()),
    )
        .prop_map(|(date_from, date_to, lo, hi, genres)| FilterSelection {
            date_from,
            date_to,
            rating_min: f64::from(lo) / 2.0,
            rating_max: f64::from(hi) / 2.0,
            genres: genres.into_iter().map(str::to_string).collect(),
        })
}

fn arb_dataset() -> impl Strategy<Value = Dataset> {
    (prop::collection::vec(arb_rating(), 0..60), arb_movies())
        .prop_map(|(ratings, movies)| Dataset::new(ratings, movies))
}

proptest! {
    #[test]
    fn prop_view_rows_satisfy_selection(dataset in arb_dataset(), selection in arb_selection()) {
        let view = apply_selection(&dataset, &selection);
        for row in view.iter() {
            let date = row.rating.observed_date();
            prop_assert!(selection.date_from <= date && date <= selection.date_to);
            prop_assert!(selection.rating_min <= row.rating.rating);
            prop_assert!(row.rating.rating <= selection.rating_max);
            prop_assert!(row.movie.genres.iter().any(|g| selection.genres.contains(g)));
            prop_assert_eq!(row.rating.movie_id, row.movie.movie_id);
        }
    }

    #[test]
    fn prop_filters_are_idempotent(dataset in arb_dataset(), selection in arb_selection()) {
        let once = filter_ratings(
            dataset.ratings(),
            selection.date_from,
            selection.date_to,
            selection.rating_min,
            selection.rating_max,
        );
        let twice = filter_ratings(
            once.iter().copied(),
            selection.date_from,
            selection.date_to,
            selection.rating_min,
            selection.rating_max,
        );
        prop_assert_eq!(&once, &twice);

        let movies_once = filter_movies(dataset.movies(), &selection.genres);
        let movies_twice = filter_movies(movies_once.iter().copied(), &selection.genres);
        prop_assert_eq!(&movies_once, &movies_twice);
    }

    #[test]
    fn prop_join_ignores_input_order(dataset in arb_dataset()) {
        let ratings: Vec<&Rating> = dataset.ratings().iter().collect();
        let movies: Vec<&Movie> = dataset.movies().iter().collect();
        let reversed_ratings: Vec<&Rating> = ratings.iter().rev().copied().collect();
        let reversed_movies: Vec<&Movie> = movies.iter().rev().copied().collect();

        let key = |view: &movielens_explorer::transformations::FilteredView<'_>| {
            let mut keys: Vec<(i64, i64, u64, i64)> = view
                .iter()
                .map(|row| {
                    (
                        row.rating.user_id.0,
                        row.movie.movie_id.0,
                        row.rating.rating.to_bits(),
                        row.rating.observed_at.timestamp(),
                    )
                })
                .collect();
            keys.sort_unstable();
            keys
        };

        let forward = join(&ratings, &movies);
        let backward = join(&reversed_ratings, &reversed_movies);
        prop_assert_eq!(key(&forward), key(&backward));
    }

    #[test]
    fn prop_inverted_ranges_are_empty(dataset in arb_dataset(), selection in arb_selection()) {
        prop_assume!(selection.is_inverted());
        let view = apply_selection(&dataset, &selection);
        prop_assert!(view.is_empty());
        let summary = summarize(&view);
        prop_assert_eq!(summary.total_ratings, 0);
        prop_assert_eq!(summary.unique_users, 0);
        prop_assert_eq!(summary.unique_movies, 0);
    }

    #[test]
    fn prop_genre_counts_cover_every_movie(dataset in arb_dataset()) {
        let selection = FilterSelection::full(&dataset);
        let view = apply_selection(&dataset, &selection);

        let popularity = genre_popularity(&view, &selection.genres);
        let total: usize = popularity.iter().map(|g| g.count).sum();
        let distinct: BTreeSet<MovieId> = view.iter().map(|row| row.movie.movie_id).collect();
        let single_genre = distinct.iter().all(|id| {
            dataset
                .movies()
                .iter()
                .find(|m| m.movie_id == *id)
                .map(|m| m.genres.len() == 1)
                .unwrap_or(false)
        });

        prop_assert!(total >= distinct.len());
        prop_assert_eq!(total == distinct.len(), single_genre);
    }
}
