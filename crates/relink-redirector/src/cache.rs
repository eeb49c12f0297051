use async_trait::async_trait;
use moka::future::Cache;
use relink_core::{CacheError, ShortCode, UrlCache, UrlRecord};
use std::future::Future;
use std::time::Duration;
use tracing::{debug, trace};
use typed_builder::TypedBuilder;

pub type Result<T> = std::result::Result<T, CacheError>;

/// Sizing and expiry for [`MokaUrlCache`].
#[derive(Debug, Clone, TypedBuilder)]
pub struct CacheConfig {
    /// Upper bound on cached redirect records.
    #[builder(default = 10_000)]
    pub capacity: u64,
    /// Entries are dropped this long after they were cached. `None` keeps
    /// them until evicted for capacity.
    #[builder(default, setter(strip_option))]
    pub ttl: Option<Duration>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Moka-backed redirect cache.
///
/// Concurrent lookups of one cold code share a single load. Unknown codes are
/// never cached.
#[derive(Debug, Clone)]
pub struct MokaUrlCache {
    records: Cache<ShortCode, UrlRecord>,
}

#[derive(Debug, Clone)]
enum Miss {
    NotFound,
    Failed(CacheError),
}

impl MokaUrlCache {
    pub fn new(config: CacheConfig) -> Self {
        let mut builder = Cache::builder().max_capacity(config.capacity);
        if let Some(ttl) = config.ttl {
            builder = builder.time_to_live(ttl);
        }
        Self {
            records: builder.build(),
        }
    }
}

impl Default for MokaUrlCache {
    fn default() -> Self {
        Self::new(CacheConfig::default())
    }
}

#[async_trait]
impl UrlCache for MokaUrlCache {
    async fn lookup(&self, code: &ShortCode) -> Result<Option<UrlRecord>> {
        let hit = self.records.get(code).await;
        trace!(code = %code, hit = hit.is_some(), "redirect cache lookup");
        Ok(hit)
    }

    async fn store(&self, code: &ShortCode, record: &UrlRecord) -> Result<()> {
        self.records.insert(code.clone(), record.clone()).await;
        Ok(())
    }

    async fn evict(&self, code: &ShortCode) -> Result<()> {
        self.records.invalidate(code).await;
        debug!(code = %code, "evicted redirect record");
        Ok(())
    }

    async fn lookup_or_load<F, Fut>(&self, code: &ShortCode, load: F) -> Result<Option<UrlRecord>>
    where
        F: FnOnce(&ShortCode) -> Fut + Send,
        Fut: Future<Output = Result<Option<UrlRecord>>> + Send,
    {
        let loaded = self
            .records
            .try_get_with(code.clone(), async {
                match load(code).await {
                    Ok(Some(record)) => Ok(record),
                    Ok(None) => Err(Miss::NotFound),
                    Err(err) => Err(Miss::Failed(err)),
                }
            })
            .await;

        match loaded {
            Ok(record) => Ok(Some(record)),
            Err(miss) => match &*miss {
                Miss::NotFound => Ok(None),
                Miss::Failed(err) => Err(err.clone()),
            },
        }
    }
}
