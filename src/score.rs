use crate::data::Movie;
use crate::derive::Enriched;
use crate::stats;

/// Global constants of the IMDB weighted-rating formula, computed once over
/// the full cleaned dataset and passed explicitly: `m` is the 90th-percentile
/// vote count (the minimum votes required to qualify) and `c` is the mean
/// vote count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingParams {
    pub m: f64,
    pub c: f64,
}

impl RatingParams {
    pub fn from_dataset(movies: &[Movie]) -> Option<Self> {
        let counts: Vec<f64> = movies.iter().map(|m| m.vote_count as f64).collect();
        Some(RatingParams {
            m: stats::quantile(&counts, 0.9)?,
            c: stats::mean(&counts)?,
        })
    }
}

/// `(v / (v + m)) * R + (m / (m + v)) * C`. A record's score shrinks toward
/// `c` in proportion to how far its vote count falls below `m`. The
/// `v + m == 0` corner would divide by zero; it scores 0.0 instead.
pub fn weighted_rating(v: f64, r: f64, params: &RatingParams) -> f64 {
    if v + params.m == 0.0 {
        return 0.0;
    }
    v / (v + params.m) * r + params.m / (params.m + v) * params.c
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scored<'a> {
    pub row: &'a Enriched,
    pub score: f64,
}

/// Restricts to the qualifying subset (`vote_count >= m`), scores it, and
/// sorts descending by score. The sort is stable, so ties keep original row
/// order.
pub fn rank<'a>(rows: &'a [Enriched], params: &RatingParams) -> Vec<Scored<'a>> {
    let mut scored: Vec<Scored<'a>> = rows
        .iter()
        .filter(|e| e.movie.vote_count as f64 >= params.m)
        .map(|e| Scored {
            row: e,
            score: weighted_rating(e.movie.vote_count as f64, e.movie.vote_average, params),
        })
        .collect();
    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    scored
}

#[cfg(test)]
mod test_score {
    use super::*;
    use crate::data::sample;
    use crate::derive::{BinEdges, enrich};

    #[test]
    fn test_boundary_record_scores_exactly_c() {
        let params = RatingParams { m: 100.0, c: 6.5 };
        assert_eq!(weighted_rating(100.0, 6.5, &params), 6.5);
    }

    #[test]
    fn test_shrinkage_scenario() {
        let params = RatingParams { m: 100.0, c: 6.5 };
        let low_votes = weighted_rating(10.0, 8.0, &params);
        let high_votes = weighted_rating(1000.0, 6.0, &params);
        assert!((low_votes - (10.0 / 110.0 * 8.0 + 100.0 / 110.0 * 6.5)).abs() < 1e-12);
        assert!((high_votes - (1000.0 / 1100.0 * 6.0 + 100.0 / 1100.0 * 6.5)).abs() < 1e-12);
        assert!((low_votes - 6.6364).abs() < 1e-4);
        assert!((high_votes - 6.0455).abs() < 1e-4);
        // the 10-vote record outranks the 1000-vote one
        assert!(low_votes > high_votes);
    }

    #[test]
    fn test_zero_votes_zero_threshold_guarded() {
        let params = RatingParams { m: 0.0, c: 6.5 };
        assert_eq!(weighted_rating(0.0, 8.0, &params), 0.0);
    }

    #[test]
    fn test_rank_filters_and_orders() {
        let mut a = sample("A");
        a.vote_count = 10;
        a.vote_average = 8.0;
        let mut b = sample("B");
        b.vote_count = 1000;
        b.vote_average = 6.0;
        let mut c = sample("C");
        c.vote_count = 99;
        c.vote_average = 9.9;
        let rows = enrich(vec![a, b, c], &BinEdges::reference()).unwrap();

        let params = RatingParams { m: 100.0, c: 6.5 };
        let ranked = rank(&rows, &params);
        // only B qualifies with the real threshold; widen it to keep A in
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].row.movie.original_title, "B");

        let loose = RatingParams { m: 10.0, c: 6.5 };
        let ranked = rank(&rows, &loose);
        assert_eq!(ranked.len(), 2);
        assert!(ranked[0].score >= ranked[1].score);
    }

    #[test]
    fn test_ties_keep_row_order() {
        let mut a = sample("A");
        a.vote_count = 200;
        a.vote_average = 7.0;
        let mut b = sample("B");
        b.vote_count = 200;
        b.vote_average = 7.0;
        let rows = enrich(vec![a, b], &BinEdges::reference()).unwrap();
        let ranked = rank(&rows, &RatingParams { m: 100.0, c: 7.0 });
        assert_eq!(ranked[0].row.movie.original_title, "A");
        assert_eq!(ranked[1].row.movie.original_title, "B");
    }

    #[test]
    fn test_params_from_dataset() {
        let movies: Vec<_> = (1..=4)
            .map(|i| {
                let mut m = sample("A");
                m.vote_count = i * 100;
                m
            })
            .collect();
        let params = RatingParams::from_dataset(&movies).unwrap();
        assert!((params.m - 370.0).abs() < 1e-9);
        assert_eq!(params.c, 250.0);
    }

    #[test]
    fn test_params_from_empty_dataset() {
        assert_eq!(RatingParams::from_dataset(&[]), None);
    }
}
