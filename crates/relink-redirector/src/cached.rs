use async_trait::async_trait;
use relink_core::{CacheError, ReadRepository, ShortCode, StorageError, UrlCache, UrlRecord};
use tracing::warn;

type Result<T> = std::result::Result<T, StorageError>;

/// Read-through cache in front of a [`ReadRepository`].
///
/// A failing cache never fails a redirect: lookups fall back to the store.
#[derive(Debug, Clone)]
pub struct CachedRepository<R, C> {
    store: R,
    cache: C,
}

impl<R: ReadRepository, C: UrlCache> CachedRepository<R, C> {
    pub fn new(store: R, cache: C) -> Self {
        Self { store, cache }
    }

    pub fn inner(&self) -> &R {
        &self.store
    }

    pub fn cache(&self) -> &C {
        &self.cache
    }

    pub async fn invalidate(&self, code: &ShortCode) -> Result<()> {
        self.cache.evict(code).await?;
        Ok(())
    }
}

#[async_trait]
impl<R: ReadRepository, C: UrlCache> ReadRepository for CachedRepository<R, C> {
    async fn get(&self, code: &ShortCode) -> Result<Option<UrlRecord>> {
        let store = &self.store;
        let cached = self
            .cache
            .lookup_or_load(code, |code| {
                let code = code.clone();
                async move {
                    store
                        .get(&code)
                        .await
                        .map_err(|err| CacheError::Operation(err.to_string()))
                }
            })
            .await;

        match cached {
            Ok(found) => Ok(found),
            Err(err) => {
                warn!(code = %code, error = %err, "redirect cache failed, reading store directly");
                self.store.get(code).await
            }
        }
    }

    async fn exists(&self, code: &ShortCode) -> Result<bool> {
        if let Ok(Some(_)) = self.cache.lookup(code).await {
            return Ok(true);
        }
        self.store.exists(code).await
    }
}
