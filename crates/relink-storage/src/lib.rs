//! Persistent and in-memory implementations of the short code table.

pub mod error;
pub mod memory;
pub mod mysql;

pub use error::{Result, StorageError};
pub use memory::InMemoryRepository;
pub use mysql::MySqlRepository;
pub use relink_core::{ReadRepository, Repository, UrlRecord};

/// Schema of the `short_urls` table used by [`MySqlRepository`].
pub const MYSQL_SCHEMA: &str = include_str!("../ddl/mysql/short_urls.sql");
