use crate::analysis::normalize::NormalizedKeyword;
use crate::analysis::scoring::{growth_rate, opportunity_score};
use crate::analysis::seasonality::detect_seasonality;
use crate::analysis::{GROWTH_CLAUSE_THRESHOLD, MAX_PEAKS_MENTIONED};
use crate::models::insight::ScoreTier;
use crate::models::keyword::CompetitionLevel;

/// One-line advice combining score tier, growth, seasonality and competition.
pub fn generate_recommendation(keyword: &NormalizedKeyword) -> String {
    let score = opportunity_score(keyword);
    let growth = growth_rate(keyword);
    let seasonality = detect_seasonality(keyword);

    let mut clauses: Vec<String> = Vec::with_capacity(4);

    clauses.push(
        match ScoreTier::from_score(score) {
            ScoreTier::High => "Excellent opportunity!",
            ScoreTier::Moderate => "Good opportunity with caveats.",
            ScoreTier::Low => "Difficult keyword.",
        }
        .to_string(),
    );

    if growth > GROWTH_CLAUSE_THRESHOLD {
        clauses.push(format!("Growing fast (+{:.1}%).", growth));
    } else if growth < -GROWTH_CLAUSE_THRESHOLD {
        clauses.push(format!("Declining ({:.1}%).", growth));
    }

    if seasonality.is_seasonal && !seasonality.peak_months.is_empty() {
        let peaks: Vec<&str> = seasonality
            .peak_months
            .iter()
            .take(MAX_PEAKS_MENTIONED)
            .map(String::as_str)
            .collect();
        clauses.push(format!("Peaks in {}.", peaks.join(", ")));
    }

    match keyword.competition_level {
        CompetitionLevel::High => {
            clauses.push("High competition — consider long-tail variations.".to_string())
        }
        CompetitionLevel::Low => clauses.push("Low competition — great for quick wins!".to_string()),
        CompetitionLevel::Medium | CompetitionLevel::Unknown => {}
    }

    clauses.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::normalize::normalize;
    use crate::models::keyword::{KeywordMetricsRecord, MonthlySearch};

    fn recommend(record: &KeywordMetricsRecord) -> String {
        generate_recommendation(&normalize(record))
    }

    #[test]
    fn test_empty_record() {
        let record = KeywordMetricsRecord::new("nothing").with_search_volume(0.0);
        assert_eq!(recommend(&record), "Difficult keyword.");
    }

    #[test]
    fn test_declining_high_competition() {
        let record = KeywordMetricsRecord::new("fax machines")
            .with_search_volume(1000.0)
            .with_competition(0.9)
            .with_competition_level(CompetitionLevel::High)
            .with_monthly_searches(vec![
                MonthlySearch::volume_only(100.0),
                MonthlySearch::volume_only(1000.0),
            ]);

        let text = recommend(&record);
        assert!(text.starts_with("Difficult keyword."));
        assert!(text.contains("Declining (-90.0%)."));
        assert!(text.contains("High competition"));
    }

    #[test]
    fn test_excellent_growing_seasonal_low_competition() {
        // Dec..Jan of 2024, ramping up toward December.
        let monthly = (1..=12u32)
            .rev()
            .map(|m| {
                let volume = match m {
                    12 => 4000.0,
                    11 => 3000.0,
                    10 => 2600.0,
                    9 => 2500.0,
                    _ => 1000.0,
                };
                MonthlySearch::new(2024, m, volume)
            })
            .collect();
        let record = KeywordMetricsRecord::new("gift ideas")
            .with_search_volume(2000.0)
            .with_competition(0.1)
            .with_competition_level(CompetitionLevel::Low)
            .with_monthly_searches(monthly);

        assert_eq!(
            recommend(&record),
            "Excellent opportunity! Growing fast (+300.0%). Peaks in Dec, Nov, Oct. \
             Low competition — great for quick wins!"
        );
    }

    #[test]
    fn test_moderate_without_extra_clauses() {
        let record = KeywordMetricsRecord::new("project tracker")
            .with_search_volume(250.0)
            .with_competition(0.5)
            .with_competition_level(CompetitionLevel::Medium)
            .with_monthly_searches(vec![
                MonthlySearch::volume_only(260.0),
                MonthlySearch::volume_only(250.0),
            ]);

        // 250 * 1.04 / 50 = 5.2, growth +4%
        assert_eq!(recommend(&record), "Good opportunity with caveats.");
    }
}
