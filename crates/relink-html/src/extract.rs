use crate::error::Result;
use crate::walk::walk;
use std::collections::HashSet;
use tracing::trace;

/// Collects the distinct eligible URLs referenced at any rule location.
///
/// Parsing is lenient: unclosed or stray tags are tolerated. The returned set
/// has no meaningful iteration order.
pub fn extract(html: &str) -> Result<HashSet<String>> {
    let mut urls = HashSet::new();

    walk(
        html,
        |url| {
            if !urls.contains(url) {
                urls.insert(url.to_owned());
            }
            None
        },
        |_: &[u8]| {},
    )?;

    trace!(count = urls.len(), "extracted urls");
    Ok(urls)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(urls: &[&str]) -> HashSet<String> {
        urls.iter().map(|u| u.to_string()).collect()
    }

    #[test]
    fn extracts_worked_example() {
        let html = r##"<a href="https://a.com/x">go</a><img src="https://a.com/x"><a href="#top">top</a><a href="mailto:x@y.com">mail</a>"##;

        assert_eq!(extract(html).unwrap(), set(&["https://a.com/x"]));
    }

    #[test]
    fn covers_every_rule() {
        let html = r#"
            <html>
            <head>
                <link rel="stylesheet" href="https://cdn.example.com/style.css">
                <script src="https://cdn.example.com/app.js"></script>
            </head>
            <body>
                <a href="https://example.com/page">Page</a>
                <img src="https://example.com/logo.png" alt="logo">
                <form action="https://example.com/subscribe" method="post"></form>
                <div data-url="https://example.com/tracked">Tracked</div>
            </body>
            </html>
        "#;

        assert_eq!(
            extract(html).unwrap(),
            set(&[
                "https://cdn.example.com/style.css",
                "https://cdn.example.com/app.js",
                "https://example.com/page",
                "https://example.com/logo.png",
                "https://example.com/subscribe",
                "https://example.com/tracked",
            ])
        );
    }

    #[test]
    fn ignores_attributes_outside_the_rules() {
        let html = r#"
            <iframe src="https://example.com/frame"></iframe>
            <video src="https://example.com/video.mp4"></video>
            <area href="https://example.com/area">
            <a title="https://example.com/title">no href</a>
            <img data-src="https://example.com/lazy.png">
        "#;

        assert!(extract(html).unwrap().is_empty());
    }

    #[test]
    fn skips_ineligible_values() {
        let html = r##"
            <a href="mailto:someone@example.com">Mail</a>
            <a href="tel:+15551234">Call</a>
            <a href="#section">Jump</a>
            <a href="">Empty</a>
            <a href="   ">Blank</a>
            <a href="/relative/page">Relative</a>
            <a href="javascript:void(0)">JS</a>
            <img src="data:image/gif;base64,R0lGODlhAQABAAAAACw=">
            <a href="https://example.com/kept">Kept</a>
        "##;

        assert_eq!(extract(html).unwrap(), set(&["https://example.com/kept"]));
    }

    #[test]
    fn deduplicates_across_locations() {
        let html = r#"
            <a href="https://example.com/x">one</a>
            <img src="https://example.com/x">
            <div data-url="https://example.com/x"></div>
            <a href="https://example.com/x/">trailing slash is distinct</a>
        "#;

        assert_eq!(
            extract(html).unwrap(),
            set(&["https://example.com/x", "https://example.com/x/"])
        );
    }

    #[test]
    fn decodes_character_references() {
        let html = r#"<a href="https://example.com/?a=1&amp;b=2">q</a>"#;

        assert_eq!(extract(html).unwrap(), set(&["https://example.com/?a=1&b=2"]));
    }

    #[test]
    fn tolerates_malformed_markup() {
        let html = r#"<table><tr><td><a href="https://example.com/a">unclosed
            <p><img src="https://example.com/b.png"<div data-url=https://example.com/c>"#;

        let urls = extract(html).unwrap();
        assert!(urls.contains("https://example.com/a"));
        assert!(urls.contains("https://example.com/c"));
    }

    #[test]
    fn empty_document_yields_nothing() {
        assert!(extract("").unwrap().is_empty());
        assert!(extract("<p>no links here</p>").unwrap().is_empty());
    }

    #[test]
    fn is_deterministic() {
        let html = r#"<a href="https://a.com">a</a><img src="https://b.com/i.png"><link href="https://c.com/s.css">"#;

        assert_eq!(extract(html).unwrap(), extract(html).unwrap());
    }
}
