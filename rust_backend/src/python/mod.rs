//! Python bindings for the explorer.
//!
//! This module exposes the loader and the exploration pipeline to the
//! Streamlit dashboard via PyO3. Results cross the boundary as JSON strings.
//!
//! # Python API
//!
//! - `Explorer(ratings_path, movies_path)`: load the dataset once
//! - `Explorer.bounds_json()`: slider and multiselect defaults
//! - `Explorer.explore_json(view, ...)`: counters plus the chart table
//! - `visualization_labels()`: menu entries for the chart selector

pub mod explorer;

pub use explorer::{visualization_labels, Explorer};
