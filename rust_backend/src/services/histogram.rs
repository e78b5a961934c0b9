//! Equal-width histogram binning shared by the distribution charts.

use crate::api::HistogramBin;

/// Bin `values` into `n_bins` equal-width bins spanning their observed range.
///
/// - empty input yields no bins
/// - if every value is equal, a single bin `[v, v]` holds all of them
/// - the maximum is clamped into the last bin
/// - empty bins are kept so gaps stay visible
///
/// `n_bins == 0` is treated as a single bin.
pub fn equal_width_histogram(values: &[f64], n_bins: usize) -> Vec<HistogramBin> {
    if values.is_empty() {
        return vec![];
    }

    let n_bins = n_bins.max(1);
    let min_val = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max_val = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if min_val == max_val {
        return vec![HistogramBin {
            lower: min_val,
            upper: max_val,
            count: values.len(),
        }];
    }

    let bin_width = (max_val - min_val) / n_bins as f64;
    let mut counts = vec![0usize; n_bins];

    for &value in values {
        let mut bin_idx = ((value - min_val) / bin_width).floor() as usize;
        if bin_idx >= n_bins {
            bin_idx = n_bins - 1;
        }
        counts[bin_idx] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(idx, count)| {
            let lower = min_val + idx as f64 * bin_width;
            let upper = if idx + 1 == n_bins {
                max_val
            } else {
                min_val + (idx + 1) as f64 * bin_width
            };
            HistogramBin {
                lower,
                upper,
                count,
            }
        })
        .collect()
}
