//! Core domain models for the ratings explorer.
//!
//! This module defines the rating and movie records and the read-only
//! [`dataset::Dataset`] that owns them for the lifetime of a session.

pub mod dataset;
pub mod domain;

pub use dataset::{Dataset, DatasetBounds};
pub use domain::{Movie, MovieId, Rating, UserId, NO_GENRES_LISTED};
