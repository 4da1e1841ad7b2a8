use crate::aggregate;
use crate::derive::{Enriched, RevenueLevel};
use crate::score::{self, RatingParams};
use std::time::Instant;

/// Question 5: the top-10 movies by weighted rating, and how the whole
/// qualifying subset spreads across revenue tiers.
#[derive(Debug, Clone, PartialEq)]
pub struct TopRatedReport {
    pub params: RatingParams,
    pub qualifying_total: usize,
    /// (title, score, tier), best first.
    pub top10: Vec<(String, f64, RevenueLevel)>,
    pub tier_counts: [(RevenueLevel, usize); 4],
    /// Share of qualifying movies whose revenue tier is Low or VeryLow.
    pub low_revenue_share: f64,
}

pub fn report(rows: &[Enriched], params: RatingParams) -> TopRatedReport {
    let start = Instant::now();

    let ranked = score::rank(rows, &params);
    let tier_counts = aggregate::tier_counts(ranked.iter().map(|s| s.row));
    let low_revenue = tier_counts[RevenueLevel::VeryLow as usize].1
        + tier_counts[RevenueLevel::Low as usize].1;
    let low_revenue_share = if ranked.is_empty() {
        0.0
    } else {
        low_revenue as f64 / ranked.len() as f64
    };

    let out = TopRatedReport {
        params,
        qualifying_total: ranked.len(),
        top10: ranked
            .iter()
            .take(10)
            .map(|s| (s.row.movie.original_title.clone(), s.score, s.row.level))
            .collect(),
        tier_counts,
        low_revenue_share,
    };

    println!("top_rated,{:}", start.elapsed().as_secs_f32());
    out
}
