//! High-level data loading utilities.
//!
//! The loader combines the CSV parsers with domain model construction and
//! produces the read-only [`Dataset`](crate::core::Dataset) used by every
//! interaction.
//!
//! # Example
//!
//! ```no_run
//! use movielens_explorer::io::DatasetLoader;
//! use std::path::Path;
//!
//! let dataset = DatasetLoader::load_from_csv(Path::new("ratings.csv"), Path::new("movies.csv"))
//!     .expect("Failed to load");
//! println!("Loaded {} ratings", dataset.ratings().len());
//! ```

pub mod loaders;


pub use loaders::DatasetLoader;
