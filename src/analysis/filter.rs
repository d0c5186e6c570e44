use std::cmp::Ordering;

use crate::models::insight::{EnrichedKeyword, Trend};
use crate::models::keyword::CompetitionLevel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    OpportunityScore,
    SearchVolume,
    Cpc,
    GrowthRate,
}

impl SortKey {
    fn value(&self, keyword: &EnrichedKeyword) -> f64 {
        match self {
            SortKey::OpportunityScore => keyword.insight.opportunity_score,
            SortKey::SearchVolume => keyword.search_volume(),
            SortKey::Cpc => keyword.cpc(),
            SortKey::GrowthRate => keyword.insight.growth_rate,
        }
    }
}

/// Narrows and orders enriched keywords for review.
#[derive(Debug, Clone)]
pub struct KeywordFilter {
    pub min_volume: f64,
    /// `None` keeps every competition level.
    pub competition: Option<CompetitionLevel>,
    /// `None` keeps every trend.
    pub trend: Option<Trend>,
    pub sort_by: SortKey,
    pub limit: usize,
}

impl Default for KeywordFilter {
    fn default() -> Self {
        Self {
            min_volume: 0.0,
            competition: None,
            trend: None,
            sort_by: SortKey::default(),
            limit: 50,
        }
    }
}

impl KeywordFilter {
    pub fn matches(&self, keyword: &EnrichedKeyword) -> bool {
        if keyword.search_volume() < self.min_volume {
            return false;
        }

        if let Some(level) = self.competition {
            if keyword.record.competition_level != level {
                return false;
            }
        }

        if let Some(trend) = self.trend {
            if keyword.insight.trend() != trend {
                return false;
            }
        }

        true
    }

    /// Keep matching keywords, sort descending by the chosen key and truncate.
    /// Ties keep their input order.
    pub fn apply(&self, keywords: &[EnrichedKeyword]) -> Vec<EnrichedKeyword> {
        let mut selected: Vec<EnrichedKeyword> =
            keywords.iter().filter(|k| self.matches(k)).cloned().collect();

        selected.sort_by(|a, b| {
            self.sort_by
                .value(b)
                .partial_cmp(&self.sort_by.value(a))
                .unwrap_or(Ordering::Equal)
        });
        selected.truncate(self.limit);
        selected
    }
}
