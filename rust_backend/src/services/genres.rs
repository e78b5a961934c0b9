use std::collections::{BTreeSet, HashMap, HashSet};

use crate::api::GenreCount;
use crate::core::domain::MovieId;
use crate::transformations::FilteredView;

/// Count distinct movies per selected genre.
///
/// A movie counts once toward each of its genres, so the counts can sum to
/// more than the number of movies. Genres outside `selected` are not
/// reported. Ordered by descending count, then by genre name.
pub fn genre_popularity(view: &FilteredView<'_>, selected: &BTreeSet<String>) -> Vec<GenreCount> {
    let mut seen: HashSet<MovieId> = HashSet::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();

    for row in view.iter() {
        if !seen.insert(row.movie.movie_id) {
            continue;
        }
        for genre in row.movie.genres.iter().filter(|g| selected.contains(*g)) {
            *counts.entry(genre.as_str()).or_insert(0) += 1;
        }
    }

    let mut popularity: Vec<GenreCount> = counts
        .into_iter()
        .map(|(genre, count)| GenreCount {
            genre: genre.to_string(),
            count,
        })
        .collect();

    popularity.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.genre.cmp(&b.genre)));
    popularity
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dataset::Dataset;
    use crate::core::domain::{Movie, Rating, UserId};
    use crate::transformations::{apply_selection, FilterSelection};

    fn dataset() -> Dataset {
        let ratings = vec![
            Rating::from_unix(UserId(1), MovieId(1), 4.0, 1_000_000_000).unwrap(),
            Rating::from_unix(UserId(2), MovieId(1), 3.0, 1_000_000_000).unwrap(),
            Rating::from_unix(UserId(1), MovieId(2), 5.0, 1_000_000_000).unwrap(),
            Rating::from_unix(UserId(1), MovieId(3), 2.0, 1_000_000_000).unwrap(),
        ];
        let movies = vec![
            Movie::new(MovieId(1), "Toy Story (1995)", Some("Animation|Comedy")),
            Movie::new(MovieId(2), "Heat (1995)", Some("Action|Crime")),
            Movie::new(MovieId(3), "Clueless (1995)", Some("Comedy|Romance")),
        ];
        Dataset::new(ratings, movies)
    }

    #[test]
    fn test_genre_popularity_counts_movies_not_ratings() {
        let dataset = dataset();
        let selection = FilterSelection::full(&dataset);
        let view = apply_selection(&dataset, &selection);

        let popularity = genre_popularity(&view, &selection.genres);

        assert_eq!(
            popularity[0],
            GenreCount {
                genre: "Comedy".to_string(),
                count: 2
            }
        );
        assert_eq!(popularity.len(), 5);
        assert!(popularity[1..].iter().all(|g| g.count == 1));
    }

    #[test]
    fn test_genre_popularity_ties_sorted_by_name() {
        let dataset = dataset();
        let selection = FilterSelection::full(&dataset);
        let view = apply_selection(&dataset, &selection);

        let names: Vec<String> = genre_popularity(&view, &selection.genres)
            .into_iter()
            .map(|g| g.genre)
            .collect();

        assert_eq!(names, vec!["Comedy", "Action", "Animation", "Crime", "Romance"]);
    }

    #[test]
    fn test_genre_popularity_only_reports_selected() {
        let dataset = dataset();
        let selection = FilterSelection::full(&dataset).with_genres(["Romance"]);
        let view = apply_selection(&dataset, &selection);

        let popularity = genre_popularity(&view, &selection.genres);
        assert_eq!(popularity.len(), 1);
        assert_eq!(popularity[0].genre, "Romance");
    }
}
