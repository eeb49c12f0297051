//! Redirect lookups with an in-process cache.
//!
//! [`RedirectorService`] resolves short codes to their original URLs through
//! any [`ReadRepository`](relink_core::ReadRepository). Wrapping the store in
//! a [`CachedRepository`] backed by [`MokaUrlCache`] keeps hot codes off the
//! database.
//!
//! ```rust
//! use relink_core::{Repository, ShortCode, UrlRecord};
//! use relink_redirector::{CachedRepository, MokaUrlCache, RedirectorService};
//! use relink_storage::InMemoryRepository;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = InMemoryRepository::new();
//! let code = ShortCode::new("abc123")?;
//! store.insert(&code, UrlRecord::new("https://example.com")).await?;
//!
//! let service = RedirectorService::new(CachedRepository::new(store, MokaUrlCache::default()));
//! if let Some(record) = service.resolve(&code).await? {
//!     println!("Redirect to: {}", record.original_url);
//! }
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod cached;
pub mod error;
pub mod redirector;
pub mod service;

pub use cache::{CacheConfig, MokaUrlCache};
pub use cached::CachedRepository;
pub use error::{RedirectorError, Result};
pub use redirector::Redirector;
pub use service::RedirectorService;
