//! Short code assignment and the HTML shortening pipeline.
//!
//! [`ShortenerService`] is the [`Resolver`](relink_core::Resolver) backed by a
//! repository and a code generator. [`HtmlShortener`] strings extraction,
//! resolution and rewriting together for one document.

pub mod error;
pub mod pipeline;
pub mod service;

pub use error::ShortenHtmlError;
pub use pipeline::{HtmlShortener, ShortenOutcome, ShortenStats};
pub use relink_core::ShortenerError;
pub use service::{validate_url, ShortenerService, ShortenerSettings};
