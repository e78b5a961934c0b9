use std::collections::HashSet;

use crate::api::SummaryCounters;
use crate::transformations::FilteredView;

/// Total rows plus distinct users and movies in the view.
pub fn summarize(view: &FilteredView<'_>) -> SummaryCounters {
    let mut users = HashSet::new();
    let mut movies = HashSet::new();

    for row in view.iter() {
        users.insert(row.rating.user_id);
        movies.insert(row.movie.movie_id);
    }

    SummaryCounters {
        total_ratings: view.len(),
        unique_users: users.len(),
        unique_movies: movies.len(),
    }
}
