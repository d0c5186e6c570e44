use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A loosely-typed numeric field as keyword vendors deliver it.
///
/// Vendors send numbers, numeric strings, nulls or nothing at all for the same
/// field. Everything is kept as-is here and resolved during normalization.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Numeric {
    /// Absent or null.
    #[default]
    Missing,
    /// A finite, non-negative number.
    Value(f64),
    /// Present but not usable as a number.
    Invalid,
}

impl Numeric {
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Null => Numeric::Missing,
            Value::Number(n) => n.as_f64().map(Numeric::from).unwrap_or(Numeric::Invalid),
            Value::String(s) => s
                .trim()
                .parse::<f64>()
                .map(Numeric::from)
                .unwrap_or(Numeric::Invalid),
            _ => Numeric::Invalid,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Numeric::Value(v) => Some(*v),
            _ => None,
        }
    }

    /// Missing resolves to `default`, invalid resolves to `None`.
    pub fn or_default(&self, default: f64) -> Option<f64> {
        match self {
            Numeric::Missing => Some(default),
            Numeric::Value(v) => Some(*v),
            Numeric::Invalid => None,
        }
    }
}

impl From<f64> for Numeric {
    fn from(value: f64) -> Self {
        if value.is_finite() && value >= 0.0 {
            Numeric::Value(value)
        } else {
            Numeric::Invalid
        }
    }
}

impl From<u32> for Numeric {
    fn from(value: u32) -> Self {
        Numeric::Value(value as f64)
    }
}

impl From<Option<f64>> for Numeric {
    fn from(value: Option<f64>) -> Self {
        value.map(Numeric::from).unwrap_or(Numeric::Missing)
    }
}

impl<'de> Deserialize<'de> for Numeric {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Numeric::from_json(&value))
    }
}

impl Serialize for Numeric {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Numeric::Value(v) => serializer.serialize_f64(*v),
            _ => serializer.serialize_none(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CompetitionLevel {
    Low,
    Medium,
    High,
    #[default]
    Unknown,
}

impl CompetitionLevel {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_uppercase().as_str() {
            "LOW" => CompetitionLevel::Low,
            "MEDIUM" => CompetitionLevel::Medium,
            "HIGH" => CompetitionLevel::High,
            _ => CompetitionLevel::Unknown,
        }
    }
}

impl std::fmt::Display for CompetitionLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompetitionLevel::Low => write!(f, "LOW"),
            CompetitionLevel::Medium => write!(f, "MEDIUM"),
            CompetitionLevel::High => write!(f, "HIGH"),
            CompetitionLevel::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

impl<'de> Deserialize<'de> for CompetitionLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::String(s) => CompetitionLevel::parse(&s),
            _ => CompetitionLevel::Unknown,
        })
    }
}

/// One month of search volume. Series arrive most-recent-first.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MonthlySearch {
    #[serde(default)]
    pub year: Numeric,
    #[serde(default)]
    pub month: Numeric,
    #[serde(default)]
    pub search_volume: Numeric,
}

impl MonthlySearch {
    pub fn new(year: u32, month: u32, search_volume: impl Into<Numeric>) -> Self {
        Self {
            year: Numeric::from(year),
            month: Numeric::from(month),
            search_volume: search_volume.into(),
        }
    }

    /// An observation without calendar information.
    pub fn volume_only(search_volume: impl Into<Numeric>) -> Self {
        Self {
            search_volume: search_volume.into(),
            ..Self::default()
        }
    }
}

/// Keyword metrics as handed over by the keyword-data fetcher.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct KeywordMetricsRecord {
    #[serde(default)]
    pub keyword: String,
    #[serde(default)]
    pub search_volume: Numeric,
    #[serde(default)]
    pub cpc: Numeric,
    #[serde(default)]
    pub competition: Numeric,
    #[serde(default)]
    pub competition_level: CompetitionLevel,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub monthly_searches: Vec<MonthlySearch>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<MonthlySearch>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<MonthlySearch>>::deserialize(deserializer)?.unwrap_or_default())
}

impl KeywordMetricsRecord {
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            ..Self::default()
        }
    }

    pub fn with_search_volume(mut self, volume: impl Into<Numeric>) -> Self {
        self.search_volume = volume.into();
        self
    }

    pub fn with_cpc(mut self, cpc: impl Into<Numeric>) -> Self {
        self.cpc = cpc.into();
        self
    }

    pub fn with_competition(mut self, competition: impl Into<Numeric>) -> Self {
        self.competition = competition.into();
        self
    }

    pub fn with_competition_level(mut self, level: CompetitionLevel) -> Self {
        self.competition_level = level;
        self
    }

    pub fn with_monthly_searches(mut self, monthly: Vec<MonthlySearch>) -> Self {
        self.monthly_searches = monthly;
        self
    }
}
