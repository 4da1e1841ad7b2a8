use crate::aggregate;
use crate::derive::{Enriched, RevenueLevel};
use crate::genres;
use crate::stats::{self, Summary};
use std::time::Instant;

/// Question 3: what do very-high-revenue movies look like?
#[derive(Debug, Clone, PartialEq)]
pub struct HighRevenueReport {
    pub tier_counts: [(RevenueLevel, usize); 4],
    pub very_high_total: usize,
    pub genre_ranking: Vec<(String, u32)>,
    pub runtime: Option<Summary>,
    pub release_year: Option<Summary>,
    pub vote_average: Option<Summary>,
    pub budget_adj: Option<Summary>,
}

pub fn report(rows: &[Enriched]) -> HighRevenueReport {
    let start = Instant::now();

    let tier_counts = aggregate::tier_counts(rows);
    let very_high = aggregate::in_tier(rows, RevenueLevel::VeryHigh);

    let genre_ranking =
        genres::tabulate(very_high.iter().map(|e| e.movie.genres.as_deref())).ranking();

    let field = |f: fn(&Enriched) -> f64| {
        let xs: Vec<f64> = very_high.iter().map(|e| f(e)).collect();
        stats::summarize(&xs)
    };
    let out = HighRevenueReport {
        tier_counts,
        very_high_total: very_high.len(),
        genre_ranking,
        runtime: field(|e| e.movie.runtime as f64),
        release_year: field(|e| e.movie.release_year as f64),
        vote_average: field(|e| e.movie.vote_average),
        budget_adj: field(|e| e.movie.budget_adj),
    };

    println!("high_revenue,{:}", start.elapsed().as_secs_f32());
    out
}

#[cfg(test)]
mod test_high_revenue {
    use super::*;
    use crate::data::sample;
    use crate::derive::{BinEdges, enrich};

    fn rows() -> Vec<Enriched> {
        let mut hit = sample("Hit");
        hit.revenue_adj = 5.0e8;
        hit.genres = Some("Action|Adventure".to_string());
        hit.runtime = 140;
        let mut hit2 = sample("Hit2");
        hit2.revenue_adj = 6.0e8;
        hit2.genres = Some("Action".to_string());
        hit2.runtime = 100;
        let mut flop = sample("Flop");
        flop.revenue_adj = 1.0e6;
        flop.genres = Some("Horror".to_string());
        enrich(vec![hit, hit2, flop], &BinEdges::reference()).unwrap()
    }

    #[test]
    fn test_report_over_very_high_subset() {
        let out = report(&rows());
        assert_eq!(out.very_high_total, 2);
        assert_eq!(out.tier_counts[0], (RevenueLevel::VeryLow, 1));
        assert_eq!(out.tier_counts[3], (RevenueLevel::VeryHigh, 2));
        // Horror belongs to the flop, not the subset
        assert_eq!(
            out.genre_ranking,
            vec![("Action".to_string(), 2), ("Adventure".to_string(), 1)]
        );
        let runtime = out.runtime.unwrap();
        assert_eq!(runtime.min, 100.0);
        assert_eq!(runtime.max, 140.0);
        assert_eq!(runtime.mean, 120.0);
    }

    #[test]
    fn test_degenerate_empty_table() {
        let out = report(&[]);
        assert_eq!(out.very_high_total, 0);
        assert!(out.genre_ranking.is_empty());
        assert_eq!(out.runtime, None);
    }
}
