use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::models::keyword::KeywordMetricsRecord;
use crate::source::provider::KeywordSource;

/// Reads keyword records from a JSON file.
///
/// Accepts a bare array of records, a `{"keywords": [...]}` envelope as keyword
/// suggestion endpoints return, or a single record object.
pub struct JsonFileSource {
    path: PathBuf,
    name: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum KeywordFile {
    List(Vec<KeywordMetricsRecord>),
    Envelope { keywords: Vec<KeywordMetricsRecord> },
    Single(KeywordMetricsRecord),
}

impl JsonFileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let name = path.display().to_string();
        Self { path, name }
    }

    pub fn parse(content: &str) -> Result<Vec<KeywordMetricsRecord>> {
        let file: KeywordFile = serde_json::from_str(content)
            .map_err(|e| Error::ParseError(format!("Unrecognised keyword file: {}", e)))?;

        let records = match file {
            KeywordFile::List(records) => records,
            KeywordFile::Envelope { keywords } => keywords,
            KeywordFile::Single(record) => vec![record],
        };

        let total = records.len();
        let records: Vec<_> = records
            .into_iter()
            .filter(|r| !r.keyword.trim().is_empty())
            .collect();

        if records.len() < total {
            tracing::warn!("Dropped {} records without a keyword", total - records.len());
        }

        Ok(records)
    }
}

#[async_trait]
impl KeywordSource for JsonFileSource {
    async fn fetch_keywords(&self) -> Result<Vec<KeywordMetricsRecord>> {
        tracing::debug!("Reading keyword records from {}", self.name);

        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| Error::Source(format!("{}: {}", self.name, e)))?;

        Self::parse(&content)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
