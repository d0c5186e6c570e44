use serde::{Deserialize, Serialize};

use super::keyword::KeywordMetricsRecord;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Seasonality {
    pub is_seasonal: bool,
    pub peak_months: Vec<String>,
    pub low_months: Vec<String>,
}

impl Seasonality {
    pub fn not_seasonal() -> Self {
        Self::default()
    }
}

/// Fields derived from a single keyword record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedInsight {
    pub opportunity_score: f64,
    pub growth_rate: f64,
    pub is_seasonal: bool,
    pub peak_months: Vec<String>,
    pub low_months: Vec<String>,
    pub recommendation: String,
}

impl DerivedInsight {
    pub fn score_tier(&self) -> ScoreTier {
        ScoreTier::from_score(self.opportunity_score)
    }

    pub fn trend(&self) -> Trend {
        Trend::from_growth(self.growth_rate)
    }
}

/// A record merged with its derived insight, ready for storage or display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedKeyword {
    #[serde(flatten)]
    pub record: KeywordMetricsRecord,
    #[serde(flatten)]
    pub insight: DerivedInsight,
}

impl EnrichedKeyword {
    /// First three peak months, comma-joined.
    pub fn peak_summary(&self) -> String {
        self.insight
            .peak_months
            .iter()
            .take(crate::analysis::MAX_PEAKS_MENTIONED)
            .cloned()
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn search_volume(&self) -> f64 {
        self.record.search_volume.as_f64().unwrap_or(0.0)
    }

    pub fn cpc(&self) -> f64 {
        self.record.cpc.as_f64().unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreTier {
    High,
    Moderate,
    Low,
}

impl ScoreTier {
    pub fn from_score(score: f64) -> Self {
        use crate::analysis::{EXCELLENT_SCORE, GOOD_SCORE};

        if score >= EXCELLENT_SCORE {
            ScoreTier::High
        } else if score >= GOOD_SCORE {
            ScoreTier::Moderate
        } else {
            ScoreTier::Low
        }
    }
}

impl std::fmt::Display for ScoreTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreTier::High => write!(f, "High opportunity"),
            ScoreTier::Moderate => write!(f, "Moderate"),
            ScoreTier::Low => write!(f, "Low opportunity"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    Growing,
    Declining,
    Stable,
}

impl Trend {
    pub fn from_growth(growth_rate: f64) -> Self {
        use crate::analysis::TREND_THRESHOLD;

        if growth_rate > TREND_THRESHOLD {
            Trend::Growing
        } else if growth_rate < -TREND_THRESHOLD {
            Trend::Declining
        } else {
            Trend::Stable
        }
    }
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Trend::Growing => write!(f, "Growing"),
            Trend::Declining => write!(f, "Declining"),
            Trend::Stable => write!(f, "Stable"),
        }
    }
}
