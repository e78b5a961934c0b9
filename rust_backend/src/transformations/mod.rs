//! Data transformation utilities.
//!
//! This module holds the filter engine that narrows the base tables for one
//! interaction and joins them into a [`FilteredView`].
//!
//! # Example
//!
//! ```no_run
//! use movielens_explorer::io::DatasetLoader;
//! use movielens_explorer::transformations::{apply_selection, FilterSelection};
//! use std::path::Path;
//!
//! let dataset = DatasetLoader::load_from_csv(Path::new("ratings.csv"), Path::new("movies.csv"))
//!     .expect("Failed to load");
//! let selection = FilterSelection::full(&dataset).with_genres(["Comedy", "Drama"]);
//! let view = apply_selection(&dataset, &selection);
//! println!("{} matching ratings", view.len());
//! ```

pub mod filtering;

pub use filtering::{
    apply_selection, filter_movies, filter_ratings, join, parse_date, FilterSelection,
    FilteredView, SelectionOverrides, ViewRow,
};
