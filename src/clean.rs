use crate::data::Movie;
use rustc_hash::FxHashSet;

// Full-field row identity; float fields compare bitwise so that duplicate
// source rows hash identically.
type RowKey = (
    String,
    Option<String>,
    Option<String>,
    Option<String>,
    i64,
    u64,
    i64,
    u64,
    i32,
    u64,
    u64,
);

fn row_key(m: &Movie) -> RowKey {
    (
        m.original_title.clone(),
        m.cast.clone(),
        m.director.clone(),
        m.genres.clone(),
        m.runtime,
        m.popularity.to_bits(),
        m.vote_count,
        m.vote_average.to_bits(),
        m.release_year,
        m.budget_adj.to_bits(),
        m.revenue_adj.to_bits(),
    )
}

/// Keeps the first occurrence of each fully-equal row.
pub fn drop_duplicates(movies: Vec<Movie>) -> Vec<Movie> {
    let mut seen: FxHashSet<RowKey> = FxHashSet::default();
    movies
        .into_iter()
        .filter(|m| seen.insert(row_key(m)))
        .collect()
}

/// A zero runtime is impossible for a real movie, and a zero adjusted budget
/// or revenue means the figure is unknown; such rows are removed along with
/// duplicates. An empty result is valid and every downstream aggregate
/// tolerates it.
pub fn clean(movies: Vec<Movie>) -> Vec<Movie> {
    drop_duplicates(movies)
        .into_iter()
        .filter(|m| m.runtime > 0 && m.budget_adj > 0.0 && m.revenue_adj > 0.0)
        .collect()
}
