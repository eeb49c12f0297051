use crate::error::{Result, StorageError};
use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use relink_core::{ReadRepository, Repository, ShortCode, UrlRecord};
use std::collections::HashMap;

/// Process-local code table for development and tests.
///
/// Two indexes are kept: short code → record for redirects and original URL →
/// short code for reuse. Inserts reserve the URL slot first and hold it while
/// claiming the code, so a URL can never end up with two codes.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    codes: DashMap<String, UrlRecord>,
    urls: DashMap<String, ShortCode>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored codes.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

#[async_trait]
impl ReadRepository for InMemoryRepository {
    async fn get(&self, code: &ShortCode) -> Result<Option<UrlRecord>> {
        Ok(self.codes.get(code.as_str()).map(|entry| entry.clone()))
    }

    async fn exists(&self, code: &ShortCode) -> Result<bool> {
        Ok(self.codes.contains_key(code.as_str()))
    }
}

#[async_trait]
impl Repository for InMemoryRepository {
    async fn find_by_url(&self, original_url: &str) -> Result<Option<ShortCode>> {
        Ok(self.urls.get(original_url).map(|entry| entry.clone()))
    }

    async fn find_many_by_url(&self, original_urls: &[String]) -> Result<HashMap<String, ShortCode>> {
        Ok(original_urls
            .iter()
            .filter_map(|url| {
                self.urls
                    .get(url)
                    .map(|code| (url.clone(), code.clone()))
            })
            .collect())
    }

    async fn insert(&self, code: &ShortCode, record: UrlRecord) -> Result<()> {
        let url_slot = match self.urls.entry(record.original_url.clone()) {
            Entry::Occupied(_) => return Err(StorageError::UrlTaken(record.original_url)),
            Entry::Vacant(slot) => slot,
        };

        match self.codes.entry(code.as_str().to_owned()) {
            Entry::Occupied(_) => Err(StorageError::CodeTaken(code.to_string())),
            Entry::Vacant(code_slot) => {
                code_slot.insert(record);
                url_slot.insert(code.clone());
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn code(s: &str) -> ShortCode {
        ShortCode::new_unchecked(s)
    }

    #[tokio::test]
    async fn insert_and_get() {
        let repo = InMemoryRepository::new();

        repo.insert(&code("abc123"), UrlRecord::new("https://example.com"))
            .await
            .unwrap();

        let result = repo.get(&code("abc123")).await.unwrap().unwrap();
        assert_eq!(result.original_url, "https://example.com");
        assert!(repo.exists(&code("abc123")).await.unwrap());
    }

    #[tokio::test]
    async fn get_nonexistent() {
        let repo = InMemoryRepository::new();

        assert!(repo.get(&code("nope")).await.unwrap().is_none());
        assert!(!repo.exists(&code("nope")).await.unwrap());
    }

    #[tokio::test]
    async fn find_by_url_returns_assigned_code() {
        let repo = InMemoryRepository::new();
        repo.insert(&code("abc123"), UrlRecord::new("https://example.com"))
            .await
            .unwrap();

        assert_eq!(
            repo.find_by_url("https://example.com").await.unwrap(),
            Some(code("abc123"))
        );
        assert_eq!(repo.find_by_url("https://example.com/").await.unwrap(), None);
    }

    #[tokio::test]
    async fn find_many_by_url_skips_unknown() {
        let repo = InMemoryRepository::new();
        repo.insert(&code("aaa111"), UrlRecord::new("https://a.com"))
            .await
            .unwrap();
        repo.insert(&code("bbb222"), UrlRecord::new("https://b.com"))
            .await
            .unwrap();

        let found = repo
            .find_many_by_url(&[
                "https://a.com".to_string(),
                "https://c.com".to_string(),
                "https://b.com".to_string(),
            ])
            .await
            .unwrap();

        assert_eq!(found.len(), 2);
        assert_eq!(found["https://a.com"], code("aaa111"));
        assert_eq!(found["https://b.com"], code("bbb222"));
    }

    #[tokio::test]
    async fn insert_rejects_taken_code() {
        let repo = InMemoryRepository::new();
        repo.insert(&code("abc123"), UrlRecord::new("https://example.com"))
            .await
            .unwrap();

        let err = repo
            .insert(&code("abc123"), UrlRecord::new("https://other.com"))
            .await
            .unwrap_err();

        assert!(matches!(err, StorageError::CodeTaken(_)));
        // The failed insert must not leave a dangling url reservation.
        assert_eq!(repo.find_by_url("https://other.com").await.unwrap(), None);
    }

    #[tokio::test]
    async fn insert_rejects_url_with_code() {
        let repo = InMemoryRepository::new();
        repo.insert(&code("abc123"), UrlRecord::new("https://example.com"))
            .await
            .unwrap();

        let err = repo
            .insert(&code("xyz789"), UrlRecord::new("https://example.com"))
            .await
            .unwrap_err();

        assert!(matches!(err, StorageError::UrlTaken(_)));
        assert!(!repo.exists(&code("xyz789")).await.unwrap());
    }

    #[tokio::test]
    async fn concurrent_inserts_for_one_url_keep_one_code() {
        let repo = Arc::new(InMemoryRepository::new());
        let mut handles = vec![];

        for i in 0..16u64 {
            let repo = Arc::clone(&repo);
            handles.push(tokio::spawn(async move {
                repo.insert(
                    &ShortCode::new_unchecked(format!("code-{i:03}")),
                    UrlRecord::new("https://same.example"),
                )
                .await
                .is_ok()
            }));
        }

        let mut winners = 0;
        for handle in handles {
            if handle.await.unwrap() {
                winners += 1;
            }
        }

        assert_eq!(winners, 1);
        assert_eq!(repo.len(), 1);
    }
}
