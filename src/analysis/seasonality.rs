use crate::analysis::normalize::{month_abbreviation, NormalizedKeyword};
use crate::analysis::{LOW_THRESHOLD, MIN_SEASONAL_MONTHS, PEAK_THRESHOLD};
use crate::models::insight::Seasonality;

/// Classify months running well above or below the keyword's own average.
///
/// Needs a year of observations. Peaks sit more than 25% above the mean, lows
/// more than 25% below it; entries without a valid month are not classified.
pub fn detect_seasonality(keyword: &NormalizedKeyword) -> Seasonality {
    if keyword.monthly.len() < MIN_SEASONAL_MONTHS {
        return Seasonality::not_seasonal();
    }

    let volumes: Vec<f64> = keyword.observations().map(|(_, v)| v).collect();
    if volumes.is_empty() {
        return Seasonality::not_seasonal();
    }

    let avg = volumes.iter().sum::<f64>() / volumes.len() as f64;
    if avg == 0.0 {
        return Seasonality::not_seasonal();
    }

    let mut peak_months = Vec::new();
    let mut low_months = Vec::new();

    for (month, volume) in keyword.observations() {
        let Some(month) = month else { continue };

        if volume > avg * PEAK_THRESHOLD {
            peak_months.push(month_abbreviation(month).to_string());
        } else if volume < avg * LOW_THRESHOLD {
            low_months.push(month_abbreviation(month).to_string());
        }
    }

    Seasonality {
        is_seasonal: !peak_months.is_empty() || !low_months.is_empty(),
        peak_months,
        low_months,
    }
}
