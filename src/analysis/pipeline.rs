use std::sync::Arc;
use futures::future::join_all;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::sync::Semaphore;

use crate::analysis::engine::KeywordInsightEngine;
use crate::analysis::filter::KeywordFilter;
use crate::config::PipelineConfig;
use crate::error::Result;
use crate::models::insight::EnrichedKeyword;
use crate::models::keyword::KeywordMetricsRecord;
use crate::source::KeywordSource;

pub struct InsightPipeline {
    sources: Vec<Arc<dyn KeywordSource>>,
    engine: KeywordInsightEngine,
    config: PipelineConfig,
    show_progress: bool,
}

impl InsightPipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            sources: Vec::new(),
            engine: KeywordInsightEngine::new(),
            config,
            show_progress: false,
        }
    }

    pub fn with_source(mut self, source: impl KeywordSource + 'static) -> Self {
        self.sources.push(Arc::new(source));
        self
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Load every source, enrich all records and apply `filter`.
    pub async fn run(&self, filter: &KeywordFilter) -> Result<Vec<EnrichedKeyword>> {
        let records = self.load_all().await?;
        tracing::info!("Loaded {} keyword records", records.len());

        let enriched = self.engine.enrich_all(records);
        let selected = filter.apply(&enriched);
        tracing::info!(
            "{} of {} keywords match the current filter",
            selected.len(),
            enriched.len()
        );

        Ok(selected)
    }

    /// Fetch from all sources concurrently. Output follows source order; a
    /// source that fails is logged and skipped.
    pub async fn load_all(&self) -> Result<Vec<KeywordMetricsRecord>> {
        let semaphore = Arc::new(Semaphore::new(self.config.concurrency_limit.max(1)));

        let pb = if self.show_progress {
            ProgressBar::new(self.sources.len() as u64)
        } else {
            ProgressBar::hidden()
        };
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} sources")
        {
            pb.set_style(style.progress_chars("#>-"));
        }

        let fetches = self.sources.iter().map(|source| {
            let source = source.clone();
            let sem = semaphore.clone();
            let pb = pb.clone();

            async move {
                let _permit = sem.acquire().await.ok();
                let result = source.fetch_keywords().await;
                pb.inc(1);
                (source, result)
            }
        });

        let results = join_all(fetches).await;
        pb.finish_and_clear();

        let mut records = Vec::new();
        for (source, result) in results {
            match result {
                Ok(batch) => {
                    tracing::debug!("{} returned {} records", source.name(), batch.len());
                    records.extend(batch);
                }
                Err(e) if e.is_skippable() => {
                    tracing::warn!("Skipping keyword source {}: {}", source.name(), e);
                }
                Err(e) => return Err(e),
            }
        }

        Ok(records)
    }
}
