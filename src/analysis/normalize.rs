use chrono::Month;

use crate::analysis::DEFAULT_COMPETITION;
use crate::models::keyword::{CompetitionLevel, KeywordMetricsRecord, MonthlySearch, Numeric};

/// A keyword record with every default applied.
///
/// `None` in a numeric slot means the caller supplied something that could not
/// be read as a number, which is distinct from the field being absent.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedKeyword {
    pub keyword: String,
    pub search_volume: Option<f64>,
    pub competition: Option<f64>,
    pub competition_level: CompetitionLevel,
    /// Most recent first.
    pub monthly: Vec<MonthlyPoint>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyPoint {
    pub year: Option<i32>,
    pub month: Option<Month>,
    pub volume: Numeric,
}

/// Most recent and oldest volumes of a series with at least two points.
/// Missing volumes read as zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesEndpoints {
    pub recent: f64,
    pub oldest: f64,
}

impl NormalizedKeyword {
    /// `None` when fewer than two observations exist or either end is unreadable.
    pub fn endpoints(&self) -> Option<SeriesEndpoints> {
        if self.monthly.len() < 2 {
            return None;
        }

        let recent = self.monthly.first()?.volume.or_default(0.0)?;
        let oldest = self.monthly.last()?.volume.or_default(0.0)?;

        Some(SeriesEndpoints { recent, oldest })
    }

    /// Observations carrying a usable volume, with their month when known.
    pub fn observations(&self) -> impl Iterator<Item = (Option<Month>, f64)> + '_ {
        self.monthly
            .iter()
            .filter_map(|p| p.volume.as_f64().map(|v| (p.month, v)))
    }
}

pub fn normalize(record: &KeywordMetricsRecord) -> NormalizedKeyword {
    let competition = match record.competition {
        Numeric::Value(c) if c > 0.0 => Some(c),
        Numeric::Value(_) | Numeric::Missing => Some(DEFAULT_COMPETITION),
        Numeric::Invalid => None,
    };

    NormalizedKeyword {
        keyword: record.keyword.trim().to_string(),
        search_volume: record.search_volume.or_default(0.0),
        competition,
        competition_level: record.competition_level,
        monthly: normalize_series(&record.monthly_searches),
    }
}

fn normalize_series(series: &[MonthlySearch]) -> Vec<MonthlyPoint> {
    let mut points: Vec<MonthlyPoint> = series
        .iter()
        .map(|m| MonthlyPoint {
            year: to_year(&m.year),
            month: to_month(&m.month),
            volume: m.search_volume,
        })
        .collect();

    // Only reorder when every point can be placed on the calendar; otherwise the
    // caller's recent-first ordering is the best information available.
    let fully_dated = points.iter().all(|p| p.year.is_some() && p.month.is_some());
    if fully_dated {
        points.sort_by_key(|p| {
            std::cmp::Reverse((p.year, p.month.map(|m| m.number_from_month())))
        });
    }

    points
}

fn to_month(raw: &Numeric) -> Option<Month> {
    let n = raw.as_f64()?;
    if n.fract() != 0.0 || !(1.0..=12.0).contains(&n) {
        return None;
    }
    Month::try_from(n as u8).ok()
}

fn to_year(raw: &Numeric) -> Option<i32> {
    let n = raw.as_f64()?;
    if n.fract() != 0.0 || n > i32::MAX as f64 {
        return None;
    }
    Some(n as i32)
}

/// Three-letter English abbreviation, e.g. "Jan".
pub fn month_abbreviation(month: Month) -> &'static str {
    &month.name()[..3]
}
