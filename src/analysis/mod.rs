pub mod normalize;
pub mod scoring;
pub mod seasonality;
pub mod recommendation;
pub mod engine;
pub mod filter;
pub mod pipeline;

pub use engine::{
    best_opportunity, compute_growth_rate, compute_opportunity_score, detect_seasonality,
    generate_recommendation, KeywordInsightEngine,
};
pub use filter::{KeywordFilter, SortKey};
pub use normalize::{normalize, NormalizedKeyword};
pub use pipeline::InsightPipeline;

/// Competition assumed when a vendor reports none (or zero).
pub const DEFAULT_COMPETITION: f64 = 0.5;
pub const COMPETITION_SCALE: f64 = 100.0;
pub const SCORE_CEILING: f64 = 10.0;
pub const NEUTRAL_GROWTH_FACTOR: f64 = 1.0;

/// A month peaks above `avg * PEAK_THRESHOLD` and dips below `avg * LOW_THRESHOLD`.
pub const PEAK_THRESHOLD: f64 = 1.25;
pub const LOW_THRESHOLD: f64 = 0.75;
pub const MIN_SEASONAL_MONTHS: usize = 12;

pub const EXCELLENT_SCORE: f64 = 7.0;
pub const GOOD_SCORE: f64 = 4.0;
/// Growth (in percent) beyond which the recommendation mentions the trend.
pub const GROWTH_CLAUSE_THRESHOLD: f64 = 10.0;
pub const MAX_PEAKS_MENTIONED: usize = 3;

/// Growth (in percent) separating growing/declining keywords from stable ones.
pub const TREND_THRESHOLD: f64 = 5.0;
