use thiserror::Error;

/// Rejections of untrusted short codes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("short code is {len} bytes, expected {min} to {max}")]
    CodeLength { len: usize, min: usize, max: usize },
    #[error("short code contains '{0}', only [A-Za-z0-9_-] is allowed")]
    CodeCharacter(char),
}

#[derive(Debug, Clone, Error)]
pub enum CacheError {
    #[error("redirect cache unavailable: {0}")]
    Unavailable(String),
    #[error("redirect cache: {0}")]
    Operation(String),
}

/// Failures of the code ↔ URL store.
///
/// The two conflict variants carry the value that clashed; callers rely on
/// them to retry with a fresh code or to re-read the existing one.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("short code {0} is already assigned")]
    CodeTaken(String),
    #[error("{0} already has a short code")]
    UrlTaken(String),
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("store timed out: {0}")]
    Timeout(String),
    #[error("store query failed: {0}")]
    Query(String),
    #[error("store returned malformed data: {0}")]
    InvalidData(String),
    #[error(transparent)]
    Cache(#[from] CacheError),
}

/// Errors of short code assignment.
#[derive(Debug, Clone, Error)]
pub enum ShortenerError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("gave up on {url} after {attempts} colliding codes")]
    Exhausted { url: String, attempts: usize },
    #[error(transparent)]
    Storage(#[from] StorageError),
}
