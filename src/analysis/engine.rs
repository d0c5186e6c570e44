use crate::analysis::normalize::normalize;
use crate::analysis::recommendation::generate_recommendation as recommend;
use crate::analysis::scoring::{growth_rate, opportunity_score};
use crate::analysis::seasonality::detect_seasonality as seasonality_of;
use crate::models::insight::{DerivedInsight, EnrichedKeyword, Seasonality};
use crate::models::keyword::KeywordMetricsRecord;

pub fn compute_opportunity_score(record: &KeywordMetricsRecord) -> f64 {
    opportunity_score(&normalize(record))
}

pub fn compute_growth_rate(record: &KeywordMetricsRecord) -> f64 {
    growth_rate(&normalize(record))
}

pub fn detect_seasonality(record: &KeywordMetricsRecord) -> Seasonality {
    seasonality_of(&normalize(record))
}

pub fn generate_recommendation(record: &KeywordMetricsRecord) -> String {
    recommend(&normalize(record))
}

/// Derives insight fields for keyword records.
///
/// Stateless; one instance can be shared freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordInsightEngine;

impl KeywordInsightEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn insight(&self, record: &KeywordMetricsRecord) -> DerivedInsight {
        let keyword = normalize(record);
        let seasonality = seasonality_of(&keyword);

        DerivedInsight {
            opportunity_score: opportunity_score(&keyword),
            growth_rate: growth_rate(&keyword),
            is_seasonal: seasonality.is_seasonal,
            peak_months: seasonality.peak_months,
            low_months: seasonality.low_months,
            recommendation: recommend(&keyword),
        }
    }

    pub fn enrich(&self, record: KeywordMetricsRecord) -> EnrichedKeyword {
        let insight = self.insight(&record);
        EnrichedKeyword { record, insight }
    }

    /// Enrich a batch, keeping input order.
    pub fn enrich_all(&self, records: Vec<KeywordMetricsRecord>) -> Vec<EnrichedKeyword> {
        records.into_iter().map(|r| self.enrich(r)).collect()
    }
}

/// Highest opportunity score wins; the earliest keyword wins a tie.
pub fn best_opportunity(keywords: &[EnrichedKeyword]) -> Option<&EnrichedKeyword> {
    keywords.iter().fold(None, |best: Option<&EnrichedKeyword>, kw| match best {
        Some(b) if b.insight.opportunity_score >= kw.insight.opportunity_score => Some(b),
        _ => Some(kw),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{EXCELLENT_SCORE, SCORE_CEILING};
    use crate::models::keyword::{CompetitionLevel, MonthlySearch, Numeric};
    use proptest::prelude::*;

    fn declining_record() -> KeywordMetricsRecord {
        KeywordMetricsRecord::new("fax machines")
            .with_search_volume(1000.0)
            .with_competition(0.9)
            .with_competition_level(CompetitionLevel::High)
            .with_monthly_searches(vec![
                MonthlySearch::volume_only(100.0),
                MonthlySearch::volume_only(1000.0),
            ])
    }

    #[test]
    fn test_empty_record_defaults() {
        let mut record = KeywordMetricsRecord::new("blank").with_search_volume(0.0);
        record.competition = Numeric::Missing;

        assert_eq!(compute_opportunity_score(&record), 0.0);
        assert_eq!(compute_growth_rate(&record), 0.0);
        assert_eq!(detect_seasonality(&record), Seasonality::not_seasonal());
        assert!(generate_recommendation(&record).starts_with("Difficult keyword"));
    }

    #[test]
    fn test_low_competition_growth_scores_high() {
        let monthly = (0..12)
            .map(|i| MonthlySearch::volume_only(6000.0 - i as f64 * 2000.0 / 11.0))
            .collect();
        let record = KeywordMetricsRecord::new("running shoes")
            .with_search_volume(5000.0)
            .with_competition(0.2)
            .with_monthly_searches(monthly);

        assert!(compute_opportunity_score(&record) > 5.0);
    }

    #[test]
    fn test_insight_matches_individual_functions() {
        let record = declining_record();
        let insight = KeywordInsightEngine::new().insight(&record);

        assert_eq!(insight.opportunity_score, compute_opportunity_score(&record));
        assert_eq!(insight.growth_rate, compute_growth_rate(&record));
        assert!(insight.growth_rate < 0.0);
        assert!(!insight.is_seasonal);
        assert_eq!(insight.recommendation, generate_recommendation(&record));
        assert!(insight.recommendation.contains("Declining"));
        assert!(insight.recommendation.contains("High competition"));
    }

    #[test]
    fn test_enrich_all_keeps_order() {
        let records = vec![
            KeywordMetricsRecord::new("b").with_search_volume(10.0),
            KeywordMetricsRecord::new("a").with_search_volume(900.0),
        ];
        let enriched = KeywordInsightEngine::new().enrich_all(records);
        let names: Vec<_> = enriched.iter().map(|k| k.record.keyword.as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn test_best_opportunity() {
        let engine = KeywordInsightEngine::new();
        let keywords = engine.enrich_all(vec![
            KeywordMetricsRecord::new("low").with_search_volume(50.0),
            KeywordMetricsRecord::new("top").with_search_volume(400.0),
            KeywordMetricsRecord::new("tie").with_search_volume(400.0),
        ]);

        let best = best_opportunity(&keywords).unwrap();
        assert_eq!(best.record.keyword, "top");
        assert!(best.insight.opportunity_score >= EXCELLENT_SCORE);
        assert!(best_opportunity(&[]).is_none());
    }

    fn numeric() -> impl Strategy<Value = Numeric> {
        prop_oneof![
            Just(Numeric::Missing),
            Just(Numeric::Invalid),
            (0.0f64..1_000_000.0).prop_map(Numeric::Value),
        ]
    }

    fn month() -> impl Strategy<Value = Numeric> {
        prop_oneof![numeric(), (1u32..=12).prop_map(Numeric::from)]
    }

    fn year() -> impl Strategy<Value = Numeric> {
        prop_oneof![numeric(), (2015u32..=2025).prop_map(Numeric::from)]
    }

    fn monthly_search() -> impl Strategy<Value = MonthlySearch> {
        (year(), month(), numeric()).prop_map(|(year, month, search_volume)| MonthlySearch {
            year,
            month,
            search_volume,
        })
    }

    fn arb_record() -> impl Strategy<Value = KeywordMetricsRecord> {
        (
            numeric(),
            numeric(),
            prop_oneof![
                Just(CompetitionLevel::Low),
                Just(CompetitionLevel::Medium),
                Just(CompetitionLevel::High),
                Just(CompetitionLevel::Unknown),
            ],
            prop::collection::vec(monthly_search(), 0..24),
        )
            .prop_map(|(volume, competition, level, monthly)| {
                let mut record = KeywordMetricsRecord::new("generated")
                    .with_competition_level(level)
                    .with_monthly_searches(monthly);
                record.search_volume = volume;
                record.competition = competition;
                record
            })
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 500,
            ..ProptestConfig::default()
        })]

        #[test]
        fn score_stays_in_range(record in arb_record()) {
            let score = compute_opportunity_score(&record);
            prop_assert!((0.0..=SCORE_CEILING).contains(&score));
        }

        #[test]
        fn insight_is_deterministic(record in arb_record()) {
            let engine = KeywordInsightEngine::new();
            prop_assert_eq!(engine.insight(&record), engine.insight(&record));
        }

        #[test]
        fn growth_rate_is_finite(record in arb_record()) {
            prop_assert!(compute_growth_rate(&record).is_finite());
        }

        #[test]
        fn short_series_never_seasonal(record in arb_record(), len in 0usize..12) {
            let mut record = record;
            record.monthly_searches.truncate(len);
            prop_assert_eq!(detect_seasonality(&record), Seasonality::not_seasonal());
        }

        #[test]
        fn zero_baseline_growth_is_zero(recent in 0.0f64..100_000.0, middle in 0usize..10) {
            let mut monthly = vec![MonthlySearch::volume_only(recent)];
            monthly.extend((0..middle).map(|_| MonthlySearch::volume_only(500.0)));
            monthly.push(MonthlySearch::volume_only(0.0));
            let record = KeywordMetricsRecord::new("fresh").with_monthly_searches(monthly);
            prop_assert_eq!(compute_growth_rate(&record), 0.0);
        }

        #[test]
        fn dated_series_names_real_months(
            months in prop::collection::vec((1u32..=12, 0.0f64..100_000.0), 12..24),
        ) {
            let monthly = months
                .iter()
                .enumerate()
                .map(|(i, (m, v))| MonthlySearch::new(2024 - i as u32 / 12, *m, *v))
                .collect();
            let record = KeywordMetricsRecord::new("dated").with_monthly_searches(monthly);
            let seasonality = detect_seasonality(&record);
            let names = [
                "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
            ];
            for name in seasonality.peak_months.iter().chain(&seasonality.low_months) {
                prop_assert!(names.contains(&name.as_str()));
            }
        }

        #[test]
        fn recommendation_is_never_blank(record in arb_record()) {
            prop_assert!(!generate_recommendation(&record).trim().is_empty());
        }
    }
}
