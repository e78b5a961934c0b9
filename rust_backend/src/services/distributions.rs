use crate::api::HistogramBin;
use crate::services::histogram::equal_width_histogram;
use crate::transformations::FilteredView;

/// Histogram of rating values across the rating domain observed in the view.
pub fn rating_distribution(view: &FilteredView<'_>, n_bins: usize) -> Vec<HistogramBin> {
    let values: Vec<f64> = view.iter().map(|row| row.rating.rating).collect();
    equal_width_histogram(&values, n_bins)
}
