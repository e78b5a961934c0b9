use polars::prelude::*;
use std::path::Path;

use crate::core::domain::{Movie, MovieId, Rating, UserId};
use crate::error::{ExplorerError, ExplorerResult};

/// Columns required in `ratings.csv`.
pub const RATINGS_COLUMNS: [&str; 4] = ["userId", "movieId", "rating", "timestamp"];

/// Columns required in `movies.csv`.
pub const MOVIES_COLUMNS: [&str; 3] = ["movieId", "title", "genres"];

/// Read a CSV file with a header row into a Polars DataFrame.
///
/// Every column is read as String and callers cast to the final types, so a
/// long run of whole-number ratings cannot lock the column to Int64.
fn read_csv(csv_path: &Path) -> ExplorerResult<DataFrame> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(csv_path.into()))?
        .finish()?;
    Ok(df)
}

/// Fail with `MissingColumn` unless every required column is present
fn require_columns(df: &DataFrame, required: &[&str], file: &str) -> ExplorerResult<()> {
    let column_names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();

    for name in required {
        if !column_names.iter().any(|c| c == name) {
            return Err(ExplorerError::MissingColumn {
                file: file.to_string(),
                column: name.to_string(),
            });
        }
    }
    Ok(())
}

/// Parse `ratings.csv` into a DataFrame with normalized column types.
///
/// Ids and timestamps are cast to Int64 and ratings to Float64. A cell that
/// does not parse becomes null and is reported by [`dataframe_to_ratings`].
pub fn parse_ratings_csv(csv_path: &Path) -> ExplorerResult<DataFrame> {
    let df = read_csv(csv_path)?;
    require_columns(&df, &RATINGS_COLUMNS, "ratings")?;

    let df = df
        .lazy()
        .select([
            col("userId").cast(DataType::Int64),
            col("movieId").cast(DataType::Int64),
            col("rating").cast(DataType::Float64),
            col("timestamp").cast(DataType::Int64),
        ])
        .collect()?;

    Ok(df)
}

/// Parse `movies.csv` into a DataFrame with normalized column types.
///
/// The genre column stays nullable here; the placeholder is applied when the
/// rows become [`Movie`] records.
pub fn parse_movies_csv(csv_path: &Path) -> ExplorerResult<DataFrame> {
    let df = read_csv(csv_path)?;
    require_columns(&df, &MOVIES_COLUMNS, "movies")?;

    let df = df
        .lazy()
        .select([
            col("movieId").cast(DataType::Int64),
            col("title"),
            col("genres"),
        ])
        .collect()?;

    Ok(df)
}

/// Convert a ratings DataFrame to Rating records
pub fn dataframe_to_ratings(df: &DataFrame) -> ExplorerResult<Vec<Rating>> {
    let user_ids = df.column("userId")?.as_materialized_series().i64()?;
    let movie_ids = df.column("movieId")?.as_materialized_series().i64()?;
    let values = df.column("rating")?.as_materialized_series().f64()?;
    let timestamps = df.column("timestamp")?.as_materialized_series().i64()?;

    let mut ratings = Vec::with_capacity(df.height());

    for i in 0..df.height() {
        let user_id = user_ids
            .get(i)
            .ok_or_else(|| ExplorerError::invalid_value("userId", i, "missing value"))?;
        let movie_id = movie_ids
            .get(i)
            .ok_or_else(|| ExplorerError::invalid_value("movieId", i, "missing value"))?;
        let value = values
            .get(i)
            .ok_or_else(|| ExplorerError::invalid_value("rating", i, "missing value"))?;
        let seconds = timestamps
            .get(i)
            .ok_or_else(|| ExplorerError::invalid_value("timestamp", i, "missing value"))?;

        if !value.is_finite() {
            return Err(ExplorerError::invalid_value("rating", i, "not a finite number"));
        }

        let rating = Rating::from_unix(UserId(user_id), MovieId(movie_id), value, seconds)
            .ok_or_else(|| {
                ExplorerError::invalid_value("timestamp", i, format!("{} is out of range", seconds))
            })?;

        ratings.push(rating);
    }

    Ok(ratings)
}

/// Convert a movies DataFrame to Movie records
pub fn dataframe_to_movies(df: &DataFrame) -> ExplorerResult<Vec<Movie>> {
    let movie_ids = df.column("movieId")?.as_materialized_series().i64()?;
    let titles = df.column("title")?.as_materialized_series().str()?;
    let genres = df.column("genres")?.as_materialized_series().str()?;

    let mut movies = Vec::with_capacity(df.height());

    for i in 0..df.height() {
        let movie_id = movie_ids
            .get(i)
            .ok_or_else(|| ExplorerError::invalid_value("movieId", i, "missing value"))?;
        let title = titles.get(i).unwrap_or_default();

        movies.push(Movie::new(MovieId(movie_id), title, genres.get(i)));
    }

    Ok(movies)
}

/// Parse `ratings.csv` directly into Rating records
pub fn parse_ratings_csv_to_records(csv_path: &Path) -> ExplorerResult<Vec<Rating>> {
    let df = parse_ratings_csv(csv_path)?;
    dataframe_to_ratings(&df)
}

/// Parse `movies.csv` directly into Movie records
pub fn parse_movies_csv_to_records(csv_path: &Path) -> ExplorerResult<Vec<Movie>> {
    let df = parse_movies_csv(csv_path)?;
    dataframe_to_movies(&df)
}
