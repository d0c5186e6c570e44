use crate::analysis::normalize::NormalizedKeyword;
use crate::analysis::{COMPETITION_SCALE, NEUTRAL_GROWTH_FACTOR, SCORE_CEILING};

/// Opportunity score in `[0, 10]`, one decimal place.
///
/// `volume * growth_factor / (competition * 100)`, capped at the ceiling. An
/// unreadable volume or competition scores 0.0; an overflowing product still
/// lands on the ceiling.
pub fn opportunity_score(keyword: &NormalizedKeyword) -> f64 {
    let (Some(volume), Some(competition)) = (keyword.search_volume, keyword.competition) else {
        return 0.0;
    };

    let raw = volume * growth_factor(keyword) / (competition * COMPETITION_SCALE);
    if raw.is_nan() {
        return 0.0;
    }

    round1(raw.clamp(0.0, SCORE_CEILING))
}

/// Ratio of the most recent to the oldest monthly volume, 1.0 when unknown.
pub fn growth_factor(keyword: &NormalizedKeyword) -> f64 {
    match keyword.endpoints() {
        Some(e) => {
            let oldest = if e.oldest > 0.0 { e.oldest } else { 1.0 };
            e.recent / oldest
        }
        None => NEUTRAL_GROWTH_FACTOR,
    }
}

/// Percentage change from the oldest to the most recent month, one decimal place.
/// Zero when there is no usable baseline.
pub fn growth_rate(keyword: &NormalizedKeyword) -> f64 {
    let rate = match keyword.endpoints() {
        Some(e) if e.oldest > 0.0 => (e.recent - e.oldest) / e.oldest * 100.0,
        _ => return 0.0,
    };

    let rounded = round1(rate);
    if rounded.is_finite() {
        rounded
    } else {
        0.0
    }
}

pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
