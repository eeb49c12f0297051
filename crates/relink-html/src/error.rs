use thiserror::Error;

pub type Result<T> = std::result::Result<T, HtmlError>;

#[derive(Debug, Clone, Error)]
pub enum HtmlError {
    /// The input could not be decoded or the HTML engine gave up on it.
    #[error("malformed html input: {0}")]
    MalformedInput(String),
}
