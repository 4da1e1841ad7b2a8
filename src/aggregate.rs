use crate::derive::{Enriched, RevenueLevel};
use std::collections::BTreeMap;

/// Arithmetic mean of every numeric column for one release year.
#[derive(Debug, Clone, PartialEq)]
pub struct YearMean {
    pub release_year: i32,
    pub popularity: f64,
    pub runtime: f64,
    pub vote_count: f64,
    pub vote_average: f64,
    pub budget_adj: f64,
    pub revenue_adj: f64,
    pub profit: f64,
}

#[derive(Default)]
struct Acc {
    n: f64,
    popularity: f64,
    runtime: f64,
    vote_count: f64,
    vote_average: f64,
    budget_adj: f64,
    revenue_adj: f64,
    profit: f64,
}

/// Groups by `release_year`, ascending. Years with no records produce no row.
pub fn year_means(rows: &[Enriched]) -> Vec<YearMean> {
    let mut groups: BTreeMap<i32, Acc> = BTreeMap::new();
    for e in rows {
        let acc = groups.entry(e.movie.release_year).or_default();
        acc.n += 1.0;
        acc.popularity += e.movie.popularity;
        acc.runtime += e.movie.runtime as f64;
        acc.vote_count += e.movie.vote_count as f64;
        acc.vote_average += e.movie.vote_average;
        acc.budget_adj += e.movie.budget_adj;
        acc.revenue_adj += e.movie.revenue_adj;
        acc.profit += e.profit;
    }
    groups
        .into_iter()
        .map(|(release_year, a)| YearMean {
            release_year,
            popularity: a.popularity / a.n,
            runtime: a.runtime / a.n,
            vote_count: a.vote_count / a.n,
            vote_average: a.vote_average / a.n,
            budget_adj: a.budget_adj / a.n,
            revenue_adj: a.revenue_adj / a.n,
            profit: a.profit / a.n,
        })
        .collect()
}

/// Value counts per revenue tier, in fixed tier order.
pub fn tier_counts<'a, I>(rows: I) -> [(RevenueLevel, usize); 4]
where
    I: IntoIterator<Item = &'a Enriched>,
{
    let mut counts = RevenueLevel::ALL.map(|level| (level, 0));
    for e in rows {
        counts[e.level as usize].1 += 1;
    }
    counts
}

pub fn in_tier(rows: &[Enriched], level: RevenueLevel) -> Vec<&Enriched> {
    rows.iter().filter(|e| e.level == level).collect()
}

#[cfg(test)]
mod test_aggregate {
    use super::*;
    use crate::data::sample;
    use crate::derive::{BinEdges, enrich};

    fn rows() -> Vec<Enriched> {
        let mut a = sample("A");
        a.release_year = 1999;
        a.budget_adj = 1.0e7;
        a.revenue_adj = 4.0e7;
        let mut b = sample("B");
        b.release_year = 2001;
        b.budget_adj = 2.0e7;
        b.revenue_adj = 2.0e8;
        let mut c = sample("C");
        c.release_year = 2001;
        c.budget_adj = 4.0e7;
        c.revenue_adj = 4.0e8;
        enrich(vec![a, b, c], &BinEdges::reference()).unwrap()
    }

    #[test]
    fn test_single_record_year_mean_is_the_record() {
        let rows = rows();
        let means = year_means(&rows);
        assert_eq!(means[0].release_year, 1999);
        assert_eq!(means[0].profit, rows[0].profit);
        assert_eq!(means[0].revenue_adj, rows[0].movie.revenue_adj);
    }

    #[test]
    fn test_group_mean_and_order() {
        let means = year_means(&rows());
        assert_eq!(means.len(), 2);
        assert_eq!(means[1].release_year, 2001);
        assert_eq!(means[1].revenue_adj, 3.0e8);
        assert_eq!(means[1].profit, ((2.0e8 - 2.0e7) + (4.0e8 - 4.0e7)) / 2.0);
    }

    #[test]
    fn test_tier_counts_and_selection() {
        let rows = rows();
        let counts = tier_counts(&rows);
        assert_eq!(counts[0], (RevenueLevel::VeryLow, 0));
        assert_eq!(counts[1], (RevenueLevel::Low, 1));
        assert_eq!(counts[2], (RevenueLevel::High, 1));
        assert_eq!(counts[3], (RevenueLevel::VeryHigh, 1));

        let very_high = in_tier(&rows, RevenueLevel::VeryHigh);
        assert_eq!(very_high.len(), 1);
        assert_eq!(very_high[0].movie.original_title, "C");
    }

    #[test]
    fn test_empty_input() {
        assert!(year_means(&[]).is_empty());
        assert_eq!(tier_counts(&[]).map(|(_, n)| n), [0, 0, 0, 0]);
        assert!(in_tier(&[], RevenueLevel::VeryHigh).is_empty());
    }
}
