use crate::data::Movie;
use crate::stats;
use polars::prelude::PolarsError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RevenueLevel {
    VeryLow,
    Low,
    High,
    VeryHigh,
}

impl RevenueLevel {
    pub const ALL: [RevenueLevel; 4] = [
        RevenueLevel::VeryLow,
        RevenueLevel::Low,
        RevenueLevel::High,
        RevenueLevel::VeryHigh,
    ];

    pub fn name(self) -> &'static str {
        match self {
            RevenueLevel::VeryLow => "very_low",
            RevenueLevel::Low => "low",
            RevenueLevel::High => "high",
            RevenueLevel::VeryHigh => "very_high",
        }
    }
}

/// Five ascending revenue cut points `[e0, e1, e2, e3, e4]` defining the four
/// tiers. Bins are half-open `(lower, upper]`, except the first which also
/// contains `e0` itself; a value equal to an edge belongs to the lower bin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinEdges {
    edges: [f64; 5],
}

impl BinEdges {
    /// The reference cut points, in 2010 dollars, taken from one run over the
    /// full TMDb dataset (median, 80th and 90th percentile, plus a ceiling
    /// above the maximum observed revenue).
    pub fn reference() -> Self {
        BinEdges {
            edges: [0.0, 2.872138e7, 1.496016e8, 2.880722e8, 3e9],
        }
    }

    /// Recomputes the cut points from the cleaned dataset, so the tiers track
    /// whatever distribution was actually loaded. `None` on an empty table.
    pub fn from_dataset(movies: &[Movie]) -> Option<Self> {
        let revenue: Vec<f64> = movies.iter().map(|m| m.revenue_adj).collect();
        let e1 = stats::quantile(&revenue, 0.5)?;
        let e2 = stats::quantile(&revenue, 0.8)?;
        let e3 = stats::quantile(&revenue, 0.9)?;
        let e4 = revenue.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Some(BinEdges {
            edges: [0.0, e1, e2, e3, e4],
        })
    }

    /// `None` when the value falls outside `[e0, e4]`.
    pub fn level(&self, revenue: f64) -> Option<RevenueLevel> {
        let [e0, e1, e2, e3, e4] = self.edges;
        if revenue < e0 || revenue > e4 {
            return None;
        }
        if revenue <= e1 {
            Some(RevenueLevel::VeryLow)
        } else if revenue <= e2 {
            Some(RevenueLevel::Low)
        } else if revenue <= e3 {
            Some(RevenueLevel::High)
        } else {
            Some(RevenueLevel::VeryHigh)
        }
    }
}

/// A cleaned row plus its derived fields. Immutable once built; every
/// aggregation reads from this table.
#[derive(Debug, Clone, PartialEq)]
pub struct Enriched {
    pub movie: Movie,
    pub profit: f64,
    pub level: RevenueLevel,
}

/// Computes `profit = revenue_adj - budget_adj` and assigns one revenue tier
/// per row. Revenue outside the bin range is rejected rather than silently
/// mis-binned.
pub fn enrich(movies: Vec<Movie>, edges: &BinEdges) -> Result<Vec<Enriched>, PolarsError> {
    movies
        .into_iter()
        .map(|m| {
            let level = edges.level(m.revenue_adj).ok_or_else(|| {
                PolarsError::ComputeError(
                    format!(
                        "revenue_adj {} outside bin range for {}",
                        m.revenue_adj, m.original_title
                    )
                    .into(),
                )
            })?;
            Ok(Enriched {
                profit: m.revenue_adj - m.budget_adj,
                level,
                movie: m,
            })
        })
        .collect()
}
