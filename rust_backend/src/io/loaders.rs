use std::path::Path;

use crate::core::dataset::Dataset;
use crate::error::ExplorerResult;
use crate::parsing::csv_parser;

/// Unified interface for loading the two MovieLens tables
pub struct DatasetLoader;

impl DatasetLoader {
    /// Load ratings and movies from CSV files into an owned [`Dataset`].
    ///
    /// Any structural problem in either file fails the whole load; there is
    /// no partially loaded dataset.
    pub fn load_from_csv(ratings_path: &Path, movies_path: &Path) -> ExplorerResult<Dataset> {
        let ratings = csv_parser::parse_ratings_csv_to_records(ratings_path)?;
        let movies = csv_parser::parse_movies_csv_to_records(movies_path)?;

        let dataset = Dataset::new(ratings, movies);

        log::info!(
            "Loaded {} ratings from {} and {} movies from {}",
            dataset.ratings().len(),
            ratings_path.display(),
            dataset.movies().len(),
            movies_path.display()
        );

        Ok(dataset)
    }
}
