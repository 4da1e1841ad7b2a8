use tmdb_eda::*;

fn main() -> Result<(), polars::prelude::PolarsError> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "tmdb-movies.csv".to_string());
    let thread_count = polars_core::POOL.current_num_threads();
    println!("Polars is configured to use {} threads.", thread_count);

    let db = data::TmdbData::load(&path)?;
    let raw = data::movies(&db.movies)?;
    println!("loaded {} rows from {}", raw.len(), path);

    let cleaned = clean::clean(raw);
    println!("{} rows after cleaning", cleaned.len());

    let corr = explore::correlation_matrix(&cleaned);
    println!("correlation with revenue_adj:");
    let revenue_idx = corr
        .labels
        .iter()
        .position(|l| *l == "revenue_adj")
        .unwrap_or(0);
    for (label, value) in corr.labels.iter().zip(&corr.values[revenue_idx]) {
        println!("  {label},{value:.3}");
    }

    let Some(edges) = derive::BinEdges::from_dataset(&cleaned) else {
        println!("no rows survived cleaning; nothing to analyze");
        return Ok(());
    };
    let params = score::RatingParams::from_dataset(&cleaned);
    let rows = derive::enrich(cleaned, &edges)?;

    let means = trend::report(&rows);
    println!("year,profit_mean,vote_count_mean");
    for m in &means {
        println!("{},{:.0},{:.1}", m.release_year, m.profit, m.vote_count);
    }

    let q3 = high_revenue::report(&rows);
    println!("revenue tiers:");
    for (level, count) in q3.tier_counts {
        println!("  {},{}", level.name(), count);
    }
    println!("top genres among very_high revenue movies:");
    for (genre, count) in q3.genre_ranking.iter().take(5) {
        println!("  {genre},{count}");
    }
    if let Some(runtime) = q3.runtime {
        println!(
            "very_high runtime: min {:.0} median {:.0} mean {:.1} max {:.0}",
            runtime.min, runtime.median, runtime.mean, runtime.max
        );
    }

    if let Some(q4) = low_budget::report(&rows) {
        println!(
            "low budget (< {:.0}): {} movies, {} very_high ({:.1}%)",
            q4.budget_median,
            q4.low_budget_total,
            q4.very_high_total,
            q4.very_high_share * 100.0
        );
        println!("top 10 by profit:");
        for (title, profit) in &q4.top_profit {
            println!("  {title},{profit:.0}");
        }
        if let Some(gap) = q4.profit_gap {
            println!("profit gap vs low-budget very_high mean: {gap:.0}");
        }
    }

    if let Some(params) = params {
        let q5 = top_rated::report(&rows, params);
        println!(
            "weighted rating: m={:.1} c={:.1}, {} qualifying movies",
            q5.params.m, q5.params.c, q5.qualifying_total
        );
        println!("top 10 by score:");
        for (title, score, level) in &q5.top10 {
            println!("  {title},{score:.3},{}", level.name());
        }
        println!(
            "{:.1}% of highly rated movies sit in a low revenue tier",
            q5.low_revenue_share * 100.0
        );
    }

    Ok(())
}
