use async_trait::async_trait;
use relink_core::{
    Mapping, MappingEntry, Repository, Resolver, ShortCode, ShortenerError, StorageError,
    UrlRecord,
};
use relink_generator::Generator;
use std::sync::Arc;
use tracing::{debug, warn};
use typed_builder::TypedBuilder;

/// Tuning knobs for [`ShortenerService`].
#[derive(Debug, Clone, TypedBuilder)]
pub struct ShortenerSettings {
    /// Codes tried per URL before giving up on collisions.
    #[builder(default = 5)]
    pub max_attempts: usize,
}

impl Default for ShortenerSettings {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Validates that the URL has an http(s) scheme and a host.
pub fn validate_url(url: &str) -> Result<(), ShortenerError> {
    if url.is_empty() {
        return Err(ShortenerError::InvalidUrl(
            "URL cannot be empty".to_string(),
        ));
    }

    let Some((scheme, rest)) = url.split_once("://") else {
        return Err(ShortenerError::InvalidUrl(format!(
            "URL must have a valid scheme and host: {}",
            url
        )));
    };

    if scheme != "http" && scheme != "https" {
        return Err(ShortenerError::InvalidUrl(format!(
            "URL scheme must be http or https: {}",
            scheme
        )));
    }

    let host = rest.split(['/', '?', '#']).next().unwrap_or_default();
    if host.is_empty() {
        return Err(ShortenerError::InvalidUrl(format!(
            "URL must have a host: {}",
            url
        )));
    }

    Ok(())
}

/// Assigns short codes to URLs, reusing the code a URL already has.
///
/// The repository's unique constraints are the source of truth: a generated
/// code that is already taken is retried with a fresh one, and losing a race
/// on the URL itself falls back to reading the winner's code.
#[derive(Debug)]
pub struct ShortenerService<R, G> {
    repository: Arc<R>,
    generator: Arc<G>,
    settings: ShortenerSettings,
}

impl<R: Repository, G: Generator> ShortenerService<R, G> {
    /// Creates a new `ShortenerService` with default settings.
    pub fn new(repository: R, generator: G) -> Self {
        Self::with_settings(repository, generator, ShortenerSettings::default())
    }

    pub fn with_settings(repository: R, generator: G, settings: ShortenerSettings) -> Self {
        Self {
            repository: Arc::new(repository),
            generator: Arc::new(generator),
            settings,
        }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Returns the code for a single URL, minting one if needed.
    pub async fn shorten_one(&self, original_url: &str) -> Result<ShortCode, ShortenerError> {
        validate_url(original_url)?;

        if let Some(code) = self.repository.find_by_url(original_url).await? {
            debug!(url = original_url, code = %code, "reusing existing short code");
            return Ok(code);
        }

        self.create(original_url).await
    }

    async fn create(&self, original_url: &str) -> Result<ShortCode, ShortenerError> {
        for attempt in 1..=self.settings.max_attempts {
            let code: ShortCode = self.generator.generate().into();

            match self
                .repository
                .insert(&code, UrlRecord::new(original_url))
                .await
            {
                Ok(()) => {
                    debug!(url = original_url, code = %code, "minted short code");
                    return Ok(code);
                }
                Err(StorageError::CodeTaken(_)) => {
                    warn!(url = original_url, code = %code, attempt, "short code collision, retrying");
                }
                Err(StorageError::UrlTaken(_)) => {
                    return self
                        .repository
                        .find_by_url(original_url)
                        .await?
                        .ok_or_else(|| {
                            StorageError::InvalidData(format!(
                                "url reported as taken but has no code: {original_url}"
                            ))
                            .into()
                        });
                }
                Err(other) => return Err(other.into()),
            }
        }

        Err(ShortenerError::Exhausted {
            url: original_url.to_string(),
            attempts: self.settings.max_attempts,
        })
    }
}

#[async_trait]
impl<R: Repository, G: Generator> Resolver for ShortenerService<R, G> {
    async fn resolve(&self, urls: &[String], base_url: &str) -> Result<Mapping, ShortenerError> {
        if urls.is_empty() {
            return Ok(Mapping::new());
        }

        for url in urls {
            validate_url(url)?;
        }

        let existing = self.repository.find_many_by_url(urls).await?;
        let mut mapping = Mapping::new();
        let mut created = 0;

        for url in urls {
            let code = match existing.get(url) {
                Some(code) => code.clone(),
                None => {
                    created += 1;
                    self.create(url).await?
                }
            };
            mapping.insert(MappingEntry::new(url.clone(), code, base_url));
        }

        debug!(
            urls = urls.len(),
            reused = existing.len(),
            created,
            "resolved short codes"
        );
        Ok(mapping)
    }
}
