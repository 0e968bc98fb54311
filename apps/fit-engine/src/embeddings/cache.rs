use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache;
use tracing::debug;

use crate::matching::backends::SimilarityBackend;
use crate::matching::error::BackendError;

/// Bounded embedding cache keyed by exact text, wrapping any `SimilarityBackend`.
///
/// Owned by the service state, not by the engine. Entries are evicted past `max_entries`
/// (TinyLFU) and after `time_to_idle` without a read. No lock is held across the inner
/// `embed` call; two concurrent misses for the same text may both hit the backend.
pub struct CachedEmbeddings<B> {
    inner: B,
    entries: Cache<String, Arc<Vec<f32>>>,
}

impl<B: SimilarityBackend> CachedEmbeddings<B> {
    pub fn new(inner: B, max_entries: u64, time_to_idle: Duration) -> Self {
        let entries = Cache::builder()
            .max_capacity(max_entries)
            .time_to_idle(time_to_idle)
            .build();
        Self { inner, entries }
    }

    /// Entry count after pending evictions have been applied.
    #[cfg(test)]
    pub async fn len(&self) -> u64 {
        self.entries.run_pending_tasks().await;
        self.entries.entry_count()
    }
}

#[async_trait]
impl<B: SimilarityBackend> SimilarityBackend for CachedEmbeddings<B> {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, BackendError> {
        if let Some(hit) = self.entries.get(text).await {
            return Ok(hit.as_ref().clone());
        }

        let vector = self.inner.embed(text).await?;
        self.entries
            .insert(text.to_string(), Arc::new(vector.clone()))
            .await;
        debug!(
            "Embedding cache miss, ~{} texts cached",
            self.entries.entry_count()
        );
        Ok(vector)
    }

    fn cosine(&self, a: &[f32], b: &[f32]) -> f64 {
        self.inner.cosine(a, b)
    }
}
