use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Path segment the redirect route is mounted under.
pub const REDIRECT_PATH: &str = "r";

/// Identifier of one shortened URL, the last segment of `{base}/r/{code}`.
///
/// Codes are case-sensitive and drawn from `[A-Za-z0-9_-]`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShortCode(String);

impl ShortCode {
    /// Accepted code lengths, in bytes.
    pub const LENGTH: RangeInclusive<usize> = 3..=32;

    /// Parses an untrusted code, e.g. a path segment of a redirect request.
    pub fn new(code: impl Into<String>) -> Result<Self, CoreError> {
        let code = code.into();

        if !Self::LENGTH.contains(&code.len()) {
            return Err(CoreError::CodeLength {
                len: code.len(),
                min: *Self::LENGTH.start(),
                max: *Self::LENGTH.end(),
            });
        }
        if let Some(ch) = code
            .chars()
            .find(|ch| !(ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_')))
        {
            return Err(CoreError::CodeCharacter(ch));
        }

        Ok(Self(code))
    }

    /// Wraps a code minted by a generator or read back from the store.
    pub fn new_unchecked(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `{base_url}/r/{code}`, tolerating a trailing slash on `base_url`.
    pub fn to_redirect_url(&self, base_url: &str) -> String {
        let base = base_url.trim_end_matches('/');
        format!("{base}/{REDIRECT_PATH}/{}", self.0)
    }
}

impl FromStr for ShortCode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for ShortCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShortCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
