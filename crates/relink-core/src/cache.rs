use crate::error::CacheError;
use crate::repository::UrlRecord;
use crate::shortcode::ShortCode;
use async_trait::async_trait;
use std::future::Future;

pub type Result<T> = std::result::Result<T, CacheError>;

/// Short code → [`UrlRecord`] cache sitting in front of the redirect store.
///
/// Only positive lookups belong in a cache: a code missing now can be minted
/// by the next shorten request.
#[async_trait]
pub trait UrlCache: Send + Sync + 'static {
    /// Returns the cached record, `Ok(None)` on a miss.
    async fn lookup(&self, code: &ShortCode) -> Result<Option<UrlRecord>>;

    async fn store(&self, code: &ShortCode, record: &UrlRecord) -> Result<()>;

    /// Drops `code`. Evicting an absent code succeeds.
    async fn evict(&self, code: &ShortCode) -> Result<()>;

    /// Returns the cached record or runs `load` and caches what it finds.
    ///
    /// The default implementation does not coalesce concurrent loads.
    async fn lookup_or_load<F, Fut>(&self, code: &ShortCode, load: F) -> Result<Option<UrlRecord>>
    where
        F: FnOnce(&ShortCode) -> Fut + Send,
        Fut: Future<Output = Result<Option<UrlRecord>>> + Send,
    {
        if let Some(hit) = self.lookup(code).await? {
            return Ok(Some(hit));
        }

        let loaded = load(code).await?;
        if let Some(record) = &loaded {
            self.store(code, record).await?;
        }
        Ok(loaded)
    }
}
