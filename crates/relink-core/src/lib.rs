//! Core types and traits for the relink HTML link shortener.
//!
//! This crate provides the shared vocabulary used by the HTML rewriting
//! core, the shortener (code assignment), the redirector and the gateway.

pub mod cache;
pub mod error;
pub mod mapping;
pub mod repository;
pub mod resolver;
pub mod shortcode;

pub use cache::UrlCache;
pub use error::{CacheError, CoreError, ShortenerError, StorageError};
pub use mapping::{Mapping, MappingEntry};
pub use repository::{ReadRepository, Repository, UrlRecord};
pub use resolver::Resolver;
pub use shortcode::ShortCode;
