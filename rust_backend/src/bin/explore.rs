//! MovieLens Explorer command-line front end
//!
//! Loads the two tables once, applies the selection given on the command
//! line, and prints the counters plus the chosen chart table.
//!
//! # Usage
//!
//! ```bash
//! # Genre popularity among Comedy and Drama movies rated 4 or higher
//! cargo run --bin explore -- --genre Comedy --genre Drama --min-rating 4 --view genre-popularity
//!
//! # JSON report for the dashboard, with paths from explorer.toml
//! cargo run --bin explore -- --config explorer.toml --view "Ratings Over Time" --format json
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Log filter (default: info)

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use movielens_explorer::api::{ChartData, ExplorationReport, HistogramBin, Visualization};
use movielens_explorer::config::ExplorerConfig;
use movielens_explorer::core::DatasetBounds;
use movielens_explorer::io::DatasetLoader;
use movielens_explorer::services::explore;
use movielens_explorer::transformations::{parse_date, FilterSelection, SelectionOverrides};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "explore", about = "Interactive MovieLens dataset explorer")]
struct Cli {
    /// TOML configuration file (default: explorer.toml if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Path to ratings.csv (overrides the config)
    #[arg(long)]
    ratings: Option<PathBuf>,

    /// Path to movies.csv (overrides the config)
    #[arg(long)]
    movies: Option<PathBuf>,

    /// First day of the date range (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date_arg)]
    from: Option<chrono::NaiveDate>,

    /// Last day of the date range (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date_arg)]
    to: Option<chrono::NaiveDate>,

    #[arg(long)]
    min_rating: Option<f64>,

    #[arg(long)]
    max_rating: Option<f64>,

    /// Genre to include; repeat for several. Omit for every genre.
    #[arg(long = "genre")]
    genres: Vec<String>,

    /// Visualization label or slug
    #[arg(long, default_value = "rating-distribution", value_parser = parse_view_arg)]
    view: Visualization,

    #[arg(long)]
    rating_bins: Option<usize>,

    #[arg(long)]
    activity_bins: Option<usize>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Print the dataset bounds and exit
    #[arg(long)]
    bounds: bool,
}

fn parse_date_arg(s: &str) -> Result<chrono::NaiveDate, String> {
    parse_date(s).map_err(|e| e.to_string())
}

fn parse_view_arg(s: &str) -> Result<Visualization, String> {
    s.parse::<Visualization>().map_err(|e| {
        let known: Vec<&str> = Visualization::ALL.iter().map(|v| v.slug()).collect();
        format!("{} (expected one of: {})", e, known.join(", "))
    })
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => ExplorerConfig::from_file(path)?,
        None => ExplorerConfig::from_default_location()?.unwrap_or_default(),
    };
    if let Some(path) = cli.ratings.clone() {
        config.data.ratings_path = path;
    }
    if let Some(path) = cli.movies.clone() {
        config.data.movies_path = path;
    }
    if let Some(bins) = cli.rating_bins {
        config.charts.rating_bins = bins;
    }
    if let Some(bins) = cli.activity_bins {
        config.charts.activity_bins = bins;
    }

    let dataset = DatasetLoader::load_from_csv(&config.data.ratings_path, &config.data.movies_path)
        .context("Failed to load dataset")?;

    if cli.bounds {
        match cli.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(dataset.bounds())?),
            OutputFormat::Table => print_bounds(dataset.bounds()),
        }
        return Ok(());
    }

    let overrides = SelectionOverrides {
        date_from: cli.from,
        date_to: cli.to,
        rating_min: cli.min_rating,
        rating_max: cli.max_rating,
        genres: (!cli.genres.is_empty()).then_some(cli.genres),
    };
    let selection = overrides.apply(FilterSelection::full(&dataset));
    if selection.is_inverted() {
        info!("Selection has an inverted range; the result is empty");
    }

    let report = explore(&dataset, &selection, cli.view, &config.charts);

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Table => print_report(cli.view, &report),
    }

    Ok(())
}

fn print_bounds(bounds: &DatasetBounds) {
    match bounds.date_range {
        Some((from, to)) => println!("Dates:   {} .. {}", from, to),
        None => println!("Dates:   (no ratings)"),
    }
    match bounds.rating_range {
        Some((min, max)) => println!("Ratings: {} .. {}", min, max),
        None => println!("Ratings: (no ratings)"),
    }
    println!("Genres:  {}", bounds.genres.iter().cloned().collect::<Vec<_>>().join(", "));
}

fn print_histogram(bins: &[HistogramBin]) {
    for bin in bins {
        println!("  [{:>8.2}, {:>8.2}]  {}", bin.lower, bin.upper, bin.count);
    }
}

fn print_report(view: Visualization, report: &ExplorationReport) {
    println!("Total Ratings: {}", report.summary.total_ratings);
    println!("Total Users:   {}", report.summary.unique_users);
    println!("Total Movies:  {}", report.summary.unique_movies);
    println!();
    println!("{}", view.label());

    if report.chart.is_empty() {
        println!("  (no data for this selection)");
        return;
    }

    match &report.chart {
        ChartData::RatingDistribution(bins) => print_histogram(bins),
        ChartData::GenrePopularity(genres) => {
            for g in genres {
                println!("  {:<24} {}", g.genre, g.count);
            }
        }
        ChartData::RatingsOverTime(months) => {
            for m in months {
                println!("  {}  {}", m.month.format("%Y-%m"), m.count);
            }
        }
        ChartData::RatingsPerUser(dist) | ChartData::RatingsPerMovie(dist) => {
            print_histogram(&dist.histogram)
        }
    }
}
