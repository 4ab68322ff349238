//! Content URLs
//!
//! URLs as the engine hands them to policy hooks. Unlike [`url::Url`], a
//! [`ContentUrl`] can be invalid: the input string is kept so callers can
//! reject it.

use std::fmt;

use url::Url;

pub const BLOB_SCHEME: &str = "blob";
pub const FILESYSTEM_SCHEME: &str = "filesystem";
pub const DATA_SCHEME: &str = "data";
pub const FILE_SCHEME: &str = "file";

/// A possibly-invalid URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentUrl {
    spec: String,
    parsed: Option<Url>,
}

impl ContentUrl {
    /// Parse a URL spec; parse failures produce an invalid URL
    pub fn parse(spec: &str) -> Self {
        Self {
            spec: spec.to_string(),
            parsed: Url::parse(spec).ok(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.parsed.is_some()
    }

    /// Lower-cased scheme of a valid URL
    pub fn scheme(&self) -> Option<&str> {
        self.parsed.as_ref().map(Url::scheme)
    }

    /// Parsed form of a valid URL
    pub fn as_url(&self) -> Option<&Url> {
        self.parsed.as_ref()
    }

    /// Spec as given (normalised when valid)
    pub fn spec(&self) -> &str {
        match &self.parsed {
            Some(url) => url.as_str(),
            None => &self.spec,
        }
    }
}

impl From<Url> for ContentUrl {
    fn from(url: Url) -> Self {
        Self {
            spec: url.as_str().to_string(),
            parsed: Some(url),
        }
    }
}

impl fmt::Display for ContentUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.spec())
    }
}
