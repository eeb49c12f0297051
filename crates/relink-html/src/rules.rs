/// An attribute location that may hold a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UrlRule {
    /// CSS selector matching the elements to inspect.
    pub selector: &'static str,
    /// Attribute holding the URL on matched elements.
    pub attribute: &'static str,
}

/// Every location inspected by both extraction and rewriting.
pub static RULES: [UrlRule; 6] = [
    UrlRule {
        selector: "a[href]",
        attribute: "href",
    },
    UrlRule {
        selector: "img[src]",
        attribute: "src",
    },
    UrlRule {
        selector: "script[src]",
        attribute: "src",
    },
    UrlRule {
        selector: "link[href]",
        attribute: "href",
    },
    UrlRule {
        selector: "form[action]",
        attribute: "action",
    },
    UrlRule {
        selector: "[data-url]",
        attribute: "data-url",
    },
];

const SKIPPED_PREFIXES: [&str; 4] = ["data:", "mailto:", "tel:", "#"];

/// Returns `true` for absolute `http://` / `https://` URLs.
///
/// Inline data, mail and phone links, fragments and blank values are
/// skipped. Scheme matching is case-sensitive.
pub fn is_eligible(url: &str) -> bool {
    if url.is_empty() {
        return false;
    }
    if SKIPPED_PREFIXES.iter().any(|prefix| url.starts_with(prefix)) {
        return false;
    }
    if url.trim().is_empty() {
        return false;
    }
    url.starts_with("http://") || url.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_http_and_https() {
        assert!(is_eligible("http://example.com"));
        assert!(is_eligible("https://example.com/a?b=c#d"));
    }

    #[test]
    fn skips_non_link_schemes() {
        assert!(!is_eligible("data:image/png;base64,AAAA"));
        assert!(!is_eligible("mailto:x@y.com"));
        assert!(!is_eligible("tel:+15551234"));
        assert!(!is_eligible("javascript:void(0)"));
        assert!(!is_eligible("ftp://example.com/file"));
    }

    #[test]
    fn skips_fragments_and_blanks() {
        assert!(!is_eligible(""));
        assert!(!is_eligible("   "));
        assert!(!is_eligible("#top"));
    }

    #[test]
    fn skips_relative_and_protocol_relative() {
        assert!(!is_eligible("/docs"));
        assert!(!is_eligible("docs/page.html"));
        assert!(!is_eligible("//cdn.example.com/app.js"));
    }

    #[test]
    fn prefix_match_is_case_sensitive() {
        assert!(!is_eligible("HTTPS://example.com"));
        assert!(!is_eligible("Http://example.com"));
    }

    #[test]
    fn leading_whitespace_is_not_trimmed_for_scheme_check() {
        assert!(!is_eligible(" https://example.com"));
    }

    #[test]
    fn every_selector_parses() {
        for rule in &RULES {
            assert!(
                rule.selector.parse::<lol_html::Selector>().is_ok(),
                "selector {} should parse",
                rule.selector
            );
        }
    }
}
