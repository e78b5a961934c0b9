//! # MovieLens Explorer
//!
//! Filter-and-aggregate backend for an interactive MovieLens dashboard.
//!
//! The crate loads `ratings.csv` and `movies.csv` once, narrows them by date,
//! rating and genre on every interaction, and produces chart-ready summary
//! tables for the presentation layer.
//!
//! ## Architecture
//!
//! - [`parsing`] / [`io`]: CSV parsing with Polars and the dataset loader
//! - [`core`]: rating and movie records, the read-only [`core::Dataset`]
//! - [`transformations`]: the filter engine and the inner join
//! - [`services`]: aggregation functions and the exploration pipeline
//! - [`api`]: output DTOs and the closed [`api::Visualization`] set
//! - [`config`]: `explorer.toml` support
//! - `python` (feature `python`): bindings for the Streamlit front end
//!
//! ## Example
//!
//! ```no_run
//! use movielens_explorer::api::{ChartSettings, Visualization};
//! use movielens_explorer::io::DatasetLoader;
//! use movielens_explorer::services::explore;
//! use movielens_explorer::transformations::FilterSelection;
//! use std::path::Path;
//!
//! let dataset = DatasetLoader::load_from_csv(Path::new("ratings.csv"), Path::new("movies.csv"))?;
//! let selection = FilterSelection::full(&dataset).with_genres(["Action"]);
//! let report = explore(&dataset, &selection, Visualization::RatingsPerUser, &ChartSettings::default());
//! println!("{} ratings", report.summary.total_ratings);
//! # Ok::<(), movielens_explorer::error::ExplorerError>(())
//! ```

pub mod api;
pub mod config;
pub mod core;
pub mod error;
pub mod io;
pub mod parsing;
pub mod services;
pub mod transformations;

#[cfg(feature = "python")]
pub mod python;

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// MovieLens Explorer - Python extension module
#[cfg(feature = "python")]
#[pymodule]
fn movielens_explorer(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<python::Explorer>()?;
    m.add_function(wrap_pyfunction!(python::visualization_labels, m)?)?;
    Ok(())
}
