use crate::error::ShortenerError;
use crate::mapping::Mapping;
use async_trait::async_trait;

/// Resolves original URLs to short codes, minting codes for unseen URLs.
#[async_trait]
pub trait Resolver: Send + Sync + 'static {
    /// Returns a mapping entry for every URL in `urls`.
    ///
    /// Must be idempotent per URL: a URL that already has a code keeps it,
    /// including when several calls race on the same URL.
    async fn resolve(&self, urls: &[String], base_url: &str) -> Result<Mapping, ShortenerError>;
}
