use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;

use crate::api::MonthlyCount;
use crate::transformations::FilteredView;

/// Truncate a date to the first day of its month.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Count ratings per calendar month (UTC), in chronological order.
///
/// Months without ratings are omitted.
pub fn ratings_over_time(view: &FilteredView<'_>) -> Vec<MonthlyCount> {
    let mut by_month: BTreeMap<NaiveDate, usize> = BTreeMap::new();

    for row in view.iter() {
        *by_month
            .entry(month_start(row.rating.observed_date()))
            .or_insert(0) += 1;
    }

    by_month
        .into_iter()
        .map(|(month, count)| MonthlyCount { month, count })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dataset::Dataset;
    use crate::core::domain::{Movie, MovieId, Rating, UserId};
    use crate::transformations::{apply_selection, FilterSelection};

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_start() {
        assert_eq!(month_start(ymd(2024, 2, 29)), ymd(2024, 2, 1));
        assert_eq!(month_start(ymd(2024, 3, 1)), ymd(2024, 3, 1));
    }

    #[test]
    fn test_ratings_over_time_chronological() {
        let ratings = vec![
            // 2004-11-09
            Rating::from_unix(UserId(1), MovieId(1), 4.0, 1_100_000_000).unwrap(),
            // 2001-09-09
            Rating::from_unix(UserId(2), MovieId(1), 3.0, 1_000_000_000).unwrap(),
            // 2001-09-30T23:59:59Z still belongs to September
            Rating::from_unix(UserId(3), MovieId(1), 3.0, 1_001_894_399).unwrap(),
        ];
        let dataset = Dataset::new(ratings, vec![Movie::new(MovieId(1), "Heat (1995)", Some("Action"))]);
        let view = apply_selection(&dataset, &FilterSelection::full(&dataset));

        let months = ratings_over_time(&view);

        assert_eq!(
            months,
            vec![
                MonthlyCount {
                    month: ymd(2001, 9, 1),
                    count: 2
                },
                MonthlyCount {
                    month: ymd(2004, 11, 1),
                    count: 1
                },
            ]
        );
    }

    #[test]
    fn test_ratings_over_time_empty() {
        let dataset = Dataset::new(vec![], vec![]);
        let view = apply_selection(&dataset, &FilterSelection::full(&dataset));
        assert!(ratings_over_time(&view).is_empty());
    }
}
