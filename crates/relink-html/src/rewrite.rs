use crate::error::{HtmlError, Result};
use crate::walk::walk;
use relink_core::{Mapping, MappingEntry};
use tracing::{debug, trace};

/// Output of [`rewrite`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewritten {
    /// The document with every mapped location pointing at its short URL.
    pub html: String,
    /// Every entry of the supplied mapping, in mapping order, whether or not
    /// the rewrite pass located it.
    pub replacements: Vec<MappingEntry>,
    /// Number of attribute values actually replaced.
    pub rewritten_locations: usize,
}

/// Replaces each eligible URL that has a mapping entry with its short URL.
///
/// Only rewritten start tags are re-serialized; the rest of the document is
/// copied through byte for byte. A rewritten tag keeps its attribute order but
/// separates attributes with single spaces, and the new value is
/// double-quoted. Eligible URLs missing from `mapping` stay as they are.
pub fn rewrite(html: &str, mapping: &Mapping) -> Result<Rewritten> {
    let mut output = Vec::with_capacity(html.len());
    let mut rewritten_locations = 0;

    walk(
        html,
        |url| match mapping.short_url(url) {
            Some(short_url) => {
                rewritten_locations += 1;
                Some(short_url.to_owned())
            }
            None => {
                debug!(url, "no mapping entry, leaving location unchanged");
                None
            }
        },
        |chunk: &[u8]| output.extend_from_slice(chunk),
    )?;

    let html = String::from_utf8(output).map_err(|e| HtmlError::MalformedInput(e.to_string()))?;

    trace!(
        locations = rewritten_locations,
        mappings = mapping.len(),
        "rewrote document"
    );

    Ok(Rewritten {
        html,
        replacements: mapping.entries().cloned().collect(),
        rewritten_locations,
    })
}
