//! Service layer: the aggregation functions behind each chart.
//!
//! Every function here is a pure reducer over a
//! [`FilteredView`](crate::transformations::FilteredView) and returns an empty
//! summary, never an error, for a view with no rows.

pub mod activity;

pub mod distributions;

pub mod explore;

pub mod genres;

pub mod histogram;

pub mod summary;

pub mod trends;

pub use activity::{ratings_per_movie, ratings_per_user};
pub use distributions::rating_distribution;
pub use explore::explore;
pub use genres::genre_popularity;
pub use histogram::equal_width_histogram;
pub use summary::summarize;
pub use trends::ratings_over_time;
