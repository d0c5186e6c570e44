use async_trait::async_trait;
use crate::error::Result;
use crate::models::keyword::KeywordMetricsRecord;

/// Anything that can hand over normalized keyword records, e.g. a client for a
/// keyword-research vendor or a file exported from one.
#[async_trait]
pub trait KeywordSource: Send + Sync {
    async fn fetch_keywords(&self) -> Result<Vec<KeywordMetricsRecord>>;
    fn name(&self) -> &str;
}
