pub mod config;
pub mod error;
pub mod models;
pub mod source;
pub mod analysis;

pub use config::{Config, PipelineConfig};
pub use error::{Error, Result};
pub use source::{JsonFileSource, KeywordSource};
pub use analysis::{
    best_opportunity, compute_growth_rate, compute_opportunity_score, detect_seasonality,
    generate_recommendation, InsightPipeline, KeywordFilter, KeywordInsightEngine, SortKey,
};
