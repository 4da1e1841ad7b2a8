use crate::aggregate;
use crate::derive::{Enriched, RevenueLevel};
use crate::stats;
use std::time::Instant;

/// Question 4: can a low-budget movie make an extremely high profit?
/// "Low budget" means below the median `budget_adj` of the whole cleaned
/// table.
#[derive(Debug, Clone, PartialEq)]
pub struct LowBudgetReport {
    pub budget_median: f64,
    pub low_budget_total: usize,
    pub tier_counts: [(RevenueLevel, usize); 4],
    pub very_high_total: usize,
    pub very_high_share: f64,
    pub very_high_profit_mean: Option<f64>,
    /// Top 10 movies by profit over the whole table, as (title, profit).
    pub top_profit: Vec<(String, f64)>,
    pub top_profit_mean: Option<f64>,
    /// Mean-profit gap between the top-10 list and the low-budget very-high
    /// subset; `None` when either side is empty.
    pub profit_gap: Option<f64>,
}

/// `None` on an empty table (no median budget to split on).
pub fn report(rows: &[Enriched]) -> Option<LowBudgetReport> {
    let start = Instant::now();

    let budgets: Vec<f64> = rows.iter().map(|e| e.movie.budget_adj).collect();
    let budget_median = stats::median(&budgets)?;

    let low_budget: Vec<&Enriched> = rows
        .iter()
        .filter(|e| e.movie.budget_adj < budget_median)
        .collect();
    let tier_counts = aggregate::tier_counts(low_budget.iter().copied());

    let very_high: Vec<&&Enriched> = low_budget
        .iter()
        .filter(|e| e.level == RevenueLevel::VeryHigh)
        .collect();
    let very_high_share = if low_budget.is_empty() {
        0.0
    } else {
        very_high.len() as f64 / low_budget.len() as f64
    };
    let very_high_profit_mean =
        stats::mean(&very_high.iter().map(|e| e.profit).collect::<Vec<f64>>());

    let mut by_profit: Vec<&Enriched> = rows.iter().collect();
    by_profit.sort_by(|a, b| {
        b.profit
            .partial_cmp(&a.profit)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    let top_profit: Vec<(String, f64)> = by_profit
        .iter()
        .take(10)
        .map(|e| (e.movie.original_title.clone(), e.profit))
        .collect();
    let top_profit_mean = stats::mean(&top_profit.iter().map(|(_, p)| *p).collect::<Vec<f64>>());

    let profit_gap = match (top_profit_mean, very_high_profit_mean) {
        (Some(top), Some(vh)) => Some(top - vh),
        _ => None,
    };

    let out = LowBudgetReport {
        budget_median,
        low_budget_total: low_budget.len(),
        tier_counts,
        very_high_total: very_high.len(),
        very_high_share,
        very_high_profit_mean,
        top_profit,
        top_profit_mean,
        profit_gap,
    };

    println!("low_budget,{:}", start.elapsed().as_secs_f32());
    Some(out)
}
