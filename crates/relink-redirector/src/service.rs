use crate::redirector::Redirector;
use async_trait::async_trait;
use relink_core::{ReadRepository, ShortCode, UrlRecord};
use std::sync::Arc;
use tracing::debug;

/// Looks short codes up in a read-only store. Codes never expire, so a
/// stored record is always a valid redirect target.
#[derive(Debug, Clone)]
pub struct RedirectorService<R> {
    store: Arc<R>,
}

impl<R: ReadRepository> RedirectorService<R> {
    pub fn new(store: R) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// `Ok(None)` means the code was never minted.
    pub async fn resolve(&self, code: &ShortCode) -> crate::Result<Option<UrlRecord>> {
        Redirector::resolve(self, code).await
    }
}

#[async_trait]
impl<R: ReadRepository> Redirector for RedirectorService<R> {
    async fn resolve(&self, code: &ShortCode) -> crate::Result<Option<UrlRecord>> {
        let record = self.store.get(code).await?;
        debug!(
            code = %code,
            target = record.as_ref().map(|r| r.original_url.as_str()),
            "redirect lookup"
        );
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RedirectorError;
    use relink_core::{Repository, StorageError};
    use relink_storage::InMemoryRepository;

    struct OfflineStore;

    #[async_trait]
    impl ReadRepository for OfflineStore {
        async fn get(&self, _: &ShortCode) -> relink_core::repository::Result<Option<UrlRecord>> {
            Err(StorageError::Timeout("pool exhausted".to_string()))
        }

        async fn exists(&self, _: &ShortCode) -> relink_core::repository::Result<bool> {
            Err(StorageError::Timeout("pool exhausted".to_string()))
        }
    }

    #[tokio::test]
    async fn minted_code_resolves_to_its_url() {
        let store = InMemoryRepository::new();
        let code = ShortCode::new_unchecked("Xy9_k-");
        store
            .insert(&code, UrlRecord::new("https://news.example/issue/42"))
            .await
            .unwrap();

        let record = RedirectorService::new(store)
            .resolve(&code)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(record.original_url, "https://news.example/issue/42");
    }

    #[tokio::test]
    async fn unminted_code_is_none() {
        let service = RedirectorService::new(InMemoryRepository::new());

        let found = service
            .resolve(&ShortCode::new_unchecked("zzz999"))
            .await
            .unwrap();

        assert!(found.is_none());
    }

    #[tokio::test]
    async fn store_failure_is_an_error_not_a_miss() {
        let service = RedirectorService::new(OfflineStore);

        let err = service
            .resolve(&ShortCode::new_unchecked("Xy9_k-"))
            .await
            .unwrap_err();

        assert!(matches!(err, RedirectorError::Storage(StorageError::Timeout(_))));
    }
}
