//! Link extraction and rewriting for HTML documents.
//!
//! Both passes walk the document with the same streaming rewriter and the
//! same rule table ([`RULES`]), so every URL reported by [`extract`] is found
//! again at the same locations by [`rewrite`].
//!
//! ```
//! use relink_core::{Mapping, MappingEntry, ShortCode};
//!
//! let html = r#"<a href="https://a.com/x">go</a><a href="mailto:x@y.com">mail</a>"#;
//! let urls = relink_html::extract(html).unwrap();
//! assert_eq!(urls.len(), 1);
//!
//! let mapping: Mapping = urls
//!     .into_iter()
//!     .map(|url| MappingEntry::new(url, ShortCode::new_unchecked("abc123"), "https://s.ly"))
//!     .collect();
//! let rewritten = relink_html::rewrite(html, &mapping).unwrap();
//! assert_eq!(
//!     rewritten.html,
//!     r#"<a href="https://s.ly/r/abc123">go</a><a href="mailto:x@y.com">mail</a>"#
//! );
//! ```

pub mod error;
mod extract;
mod rewrite;
pub mod rules;
mod walk;

pub use error::{HtmlError, Result};
pub use extract::extract;
pub use rewrite::{rewrite, Rewritten};
pub use rules::{is_eligible, UrlRule, RULES};

/// Validates raw request bytes as document text.
///
/// The HTML engine itself is lenient; undecodable bytes are the one input
/// rejected up front.
pub fn parse_input(bytes: &[u8]) -> Result<&str> {
    std::str::from_utf8(bytes).map_err(|e| HtmlError::MalformedInput(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_input_accepts_utf8() {
        assert_eq!(parse_input("<p>héllo</p>".as_bytes()).unwrap(), "<p>héllo</p>");
    }

    #[test]
    fn parse_input_rejects_invalid_utf8() {
        let err = parse_input(&[b'<', b'a', 0xff, 0xfe, b'>']).unwrap_err();
        assert!(matches!(err, HtmlError::MalformedInput(_)));
    }
}
