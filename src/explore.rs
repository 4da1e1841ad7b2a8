use crate::data::Movie;
use crate::stats;

pub const NUMERIC_COLUMNS: [&str; 7] = [
    "popularity",
    "runtime",
    "vote_count",
    "vote_average",
    "release_year",
    "budget_adj",
    "revenue_adj",
];

/// Pairwise Pearson correlations over the numeric columns of the cleaned
/// table. Degenerate pairs (zero variance, fewer than two rows) come back as
/// NaN, matching what a correlation table shows for a constant column.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrMatrix {
    pub labels: Vec<&'static str>,
    pub values: Vec<Vec<f64>>,
}

fn column(movies: &[Movie], name: &str) -> Vec<f64> {
    movies
        .iter()
        .map(|m| match name {
            "popularity" => m.popularity,
            "runtime" => m.runtime as f64,
            "vote_count" => m.vote_count as f64,
            "vote_average" => m.vote_average,
            "release_year" => m.release_year as f64,
            "budget_adj" => m.budget_adj,
            _ => m.revenue_adj,
        })
        .collect()
}

pub fn correlation_matrix(movies: &[Movie]) -> CorrMatrix {
    let columns: Vec<Vec<f64>> = NUMERIC_COLUMNS
        .iter()
        .map(|name| column(movies, name))
        .collect();
    let values = columns
        .iter()
        .map(|xs| {
            columns
                .iter()
                .map(|ys| stats::pearson(xs, ys).unwrap_or(f64::NAN))
                .collect()
        })
        .collect();
    CorrMatrix {
        labels: NUMERIC_COLUMNS.to_vec(),
        values,
    }
}
