pub mod aggregate;
pub mod clean;
pub mod data;
pub mod derive;
pub mod explore;
pub mod genres;
pub mod high_revenue;
pub mod low_budget;
pub mod score;
pub mod stats;
pub mod top_rated;
pub mod trend;
