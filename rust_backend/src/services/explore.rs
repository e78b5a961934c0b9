use crate::api::{render, ChartSettings, ExplorationReport, Visualization};
use crate::core::dataset::Dataset;
use crate::services::summary::summarize;
use crate::transformations::{apply_selection, FilterSelection};

/// Run one full interaction: filter, join, count, and build the chosen chart.
pub fn explore(
    dataset: &Dataset,
    selection: &FilterSelection,
    visualization: Visualization,
    settings: &ChartSettings,
) -> ExplorationReport {
    let view = apply_selection(dataset, selection);

    log::debug!(
        "{} over {} of {} ratings",
        visualization,
        view.len(),
        dataset.ratings().len()
    );

    ExplorationReport {
        selection: selection.clone(),
        summary: summarize(&view),
        chart: render(&view, selection, visualization, settings),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ChartData;
    use crate::core::domain::{Movie, MovieId, Rating, UserId};

    #[test]
    fn test_explore_produces_summary_and_chart() {
        let ratings = vec![
            Rating::from_unix(UserId(1), MovieId(1), 4.0, 1_000_000_000).unwrap(),
            Rating::from_unix(UserId(2), MovieId(1), 2.0, 1_000_000_000).unwrap(),
        ];
        let movies = vec![Movie::new(MovieId(1), "Heat (1995)", Some("Action|Crime"))];
        let dataset = Dataset::new(ratings, movies);
        let selection = FilterSelection::full(&dataset);

        let report = explore(
            &dataset,
            &selection,
            Visualization::RatingsOverTime,
            &ChartSettings::default(),
        );

        assert_eq!(report.summary.total_ratings, 2);
        assert_eq!(report.summary.unique_users, 2);
        assert!(matches!(report.chart, ChartData::RatingsOverTime(ref months) if months.len() == 1));
        assert_eq!(report.selection, selection);
    }
}
