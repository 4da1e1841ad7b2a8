use crate::aggregate::{self, YearMean};
use crate::derive::Enriched;
use std::time::Instant;

/// Questions 1 and 2: industry trends over time. The per-year mean table
/// carries both answers, profit per year and vote_count per year.
pub fn report(rows: &[Enriched]) -> Vec<YearMean> {
    let start = Instant::now();
    let means = aggregate::year_means(rows);
    println!("trend,{:}", start.elapsed().as_secs_f32());
    means
}
