use crate::error::{HtmlError, Result};
use crate::rules::{is_eligible, RULES};
use html_escape::decode_html_entities;
use lol_html::{element, HtmlRewriter, OutputSink, Settings};
use std::cell::RefCell;

/// Streams `html` through the rewriter, handing every eligible URL found at a
/// rule location to `visit`.
///
/// Attribute values are entity-decoded before the eligibility check. When
/// `visit` returns a replacement the attribute is overwritten; everything
/// else reaches `output` untouched.
pub(crate) fn walk<V, O>(html: &str, visit: V, output: O) -> Result<()>
where
    V: FnMut(&str) -> Option<String>,
    O: OutputSink,
{
    let visit = RefCell::new(visit);
    let visit = &visit;

    let handlers: Vec<_> = RULES
        .iter()
        .map(|rule| {
            element!(rule.selector, move |el| {
                let Some(raw) = el.get_attribute(rule.attribute) else {
                    return Ok(());
                };
                let url = decode_html_entities(&raw);
                if !is_eligible(&url) {
                    return Ok(());
                }

                let replacement = {
                    let mut visit = visit.borrow_mut();
                    (*visit)(&*url)
                };
                if let Some(replacement) = replacement {
                    el.set_attribute(rule.attribute, &replacement)?;
                }
                Ok(())
            })
        })
        .collect();

    let mut rewriter = HtmlRewriter::new(
        Settings {
            element_content_handlers: handlers,
            strict: false,
            ..Settings::default()
        },
        output,
    );

    rewriter
        .write(html.as_bytes())
        .map_err(|e| HtmlError::MalformedInput(e.to_string()))?;
    rewriter
        .end()
        .map_err(|e| HtmlError::MalformedInput(e.to_string()))?;

    Ok(())
}
