use crate::shortcode::ShortCode;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One original URL together with the short code and redirect URL it was
/// assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingEntry {
    pub original_url: String,
    pub short_code: ShortCode,
    pub short_url: String,
}

impl MappingEntry {
    /// Builds an entry whose short URL is `{base_url}/r/{code}`.
    pub fn new(original_url: impl Into<String>, short_code: ShortCode, base_url: &str) -> Self {
        let short_url = short_code.to_redirect_url(base_url);
        Self {
            original_url: original_url.into(),
            short_code,
            short_url,
        }
    }
}

/// Original URL → short URL assignments for one document.
///
/// Keys are compared byte for byte. Iteration is ordered by original URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mapping {
    entries: BTreeMap<String, MappingEntry>,
}

impl Mapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry, returning the one it replaced for the same URL.
    pub fn insert(&mut self, entry: MappingEntry) -> Option<MappingEntry> {
        self.entries.insert(entry.original_url.clone(), entry)
    }

    pub fn get(&self, original_url: &str) -> Option<&MappingEntry> {
        self.entries.get(original_url)
    }

    /// Returns the short URL assigned to `original_url`, if any.
    pub fn short_url(&self, original_url: &str) -> Option<&str> {
        self.get(original_url).map(|entry| entry.short_url.as_str())
    }

    pub fn contains(&self, original_url: &str) -> bool {
        self.entries.contains_key(original_url)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = &MappingEntry> {
        self.entries.values()
    }

    /// Consumes the mapping, yielding its entries in enumeration order.
    pub fn into_entries(self) -> Vec<MappingEntry> {
        self.entries.into_values().collect()
    }
}

impl FromIterator<MappingEntry> for Mapping {
    fn from_iter<T: IntoIterator<Item = MappingEntry>>(iter: T) -> Self {
        let mut mapping = Mapping::new();
        for entry in iter {
            mapping.insert(entry);
        }
        mapping
    }
}
