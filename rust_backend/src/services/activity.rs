use std::collections::HashMap;

use crate::api::{ActivityCount, ActivityDistribution};
use crate::services::histogram::equal_width_histogram;
use crate::transformations::{FilteredView, ViewRow};

/// Reduce the view to one count per key, then bin those counts.
fn activity_distribution(
    view: &FilteredView<'_>,
    key: impl Fn(&ViewRow<'_>) -> i64,
    n_bins: usize,
) -> ActivityDistribution {
    let mut per_key: HashMap<i64, usize> = HashMap::new();
    for row in view.iter() {
        *per_key.entry(key(row)).or_insert(0) += 1;
    }

    let mut counts: Vec<ActivityCount> = per_key
        .into_iter()
        .map(|(id, count)| ActivityCount { id, count })
        .collect();
    counts.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.id.cmp(&b.id)));

    let values: Vec<f64> = counts.iter().map(|c| c.count as f64).collect();
    let histogram = equal_width_histogram(&values, n_bins);

    ActivityDistribution { counts, histogram }
}

/// Ratings per user and the histogram of those per-user counts.
pub fn ratings_per_user(view: &FilteredView<'_>, n_bins: usize) -> ActivityDistribution {
    activity_distribution(view, |row| row.rating.user_id.0, n_bins)
}

/// Ratings per movie and the histogram of those per-movie counts.
pub fn ratings_per_movie(view: &FilteredView<'_>, n_bins: usize) -> ActivityDistribution {
    activity_distribution(view, |row| row.movie.movie_id.0, n_bins)
}
