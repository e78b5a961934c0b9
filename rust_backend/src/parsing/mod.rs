//! Parsers for the MovieLens CSV exports.
//!
//! # Parsers
//!
//! - [`csv_parser`]: Parse `ratings.csv` and `movies.csv` into typed DataFrames
//!   and convert them into domain records
//!
//! # Example
//!
//! ```no_run
//! use movielens_explorer::parsing::csv_parser::parse_ratings_csv_to_records;
//! use std::path::Path;
//!
//! let ratings = parse_ratings_csv_to_records(Path::new("ratings.csv"))
//!     .expect("Failed to parse ratings");
//! ```

pub mod csv_parser;
