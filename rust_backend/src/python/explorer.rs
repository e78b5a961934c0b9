use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use std::path::PathBuf;

use crate::api::{ChartSettings, Visualization, DEFAULT_ACTIVITY_BINS, DEFAULT_RATING_BINS};
use crate::core::dataset::Dataset;
use crate::error::ExplorerError;
use crate::io::DatasetLoader;
use crate::services::explore;
use crate::transformations::{parse_date, FilterSelection, SelectionOverrides};

fn to_py_err(err: ExplorerError) -> PyErr {
    match err {
        ExplorerError::InvalidDate(_) | ExplorerError::UnknownVisualization(_) => {
            PyValueError::new_err(err.to_string())
        }
        _ => PyRuntimeError::new_err(err.to_string()),
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> PyResult<String> {
    serde_json::to_string(value).map_err(|e| {
        PyRuntimeError::new_err(format!("Failed to serialize result: {}", e))
    })
}

/// Loaded MovieLens dataset exposed to the dashboard.
///
/// The two tables are read once when the object is created; every call to
/// `explore_json` recomputes the filtered view from them.
///
/// Example:
///     >>> import movielens_explorer
///     >>> explorer = movielens_explorer.Explorer("ratings.csv", "movies.csv")
///     >>> report = explorer.explore_json("Ratings Distribution", genres=["Comedy"])
#[pyclass(module = "movielens_explorer", frozen)]
pub struct Explorer {
    dataset: Dataset,
}

#[pymethods]
impl Explorer {
    #[new]
    fn new(ratings_path: &str, movies_path: &str) -> PyResult<Self> {
        let dataset =
            DatasetLoader::load_from_csv(&PathBuf::from(ratings_path), &PathBuf::from(movies_path))
                .map_err(to_py_err)?;
        Ok(Self { dataset })
    }

    /// Observed date range, rating range and genres as JSON.
    fn bounds_json(&self) -> PyResult<String> {
        to_json(self.dataset.bounds())
    }

    /// Filter, aggregate, and return the exploration report as JSON.
    ///
    /// Args:
    ///     view: Menu label or slug of the visualization
    ///     date_from, date_to: ISO dates (YYYY-MM-DD); default to the observed range
    ///     rating_min, rating_max: Rating bounds; default to the observed range
    ///     genres: Selected genres; defaults to every genre
    #[pyo3(signature = (
        view,
        date_from=None,
        date_to=None,
        rating_min=None,
        rating_max=None,
        genres=None,
        rating_bins=DEFAULT_RATING_BINS,
        activity_bins=DEFAULT_ACTIVITY_BINS
    ))]
    #[allow(clippy::too_many_arguments)]
    fn explore_json(
        &self,
        view: &str,
        date_from: Option<&str>,
        date_to: Option<&str>,
        rating_min: Option<f64>,
        rating_max: Option<f64>,
        genres: Option<Vec<String>>,
        rating_bins: usize,
        activity_bins: usize,
    ) -> PyResult<String> {
        let visualization: Visualization = view.parse().map_err(to_py_err)?;

        let overrides = SelectionOverrides {
            date_from: date_from.map(parse_date).transpose().map_err(to_py_err)?,
            date_to: date_to.map(parse_date).transpose().map_err(to_py_err)?,
            rating_min,
            rating_max,
            genres,
        };
        let selection = overrides.apply(FilterSelection::full(&self.dataset));
        let settings = ChartSettings {
            rating_bins,
            activity_bins,
        };

        to_json(&explore(&self.dataset, &selection, visualization, &settings))
    }
}

/// Menu labels of the available visualizations, in order.
#[pyfunction]
pub fn visualization_labels() -> Vec<&'static str> {
    Visualization::ALL.iter().map(|v| v.label()).collect()
}
