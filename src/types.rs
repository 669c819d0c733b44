//! Core data structures for URL editing.

use std::fmt;

/// One `&`-separated token of a fragment query.
///
/// The token is split on its first `=`. A token without `=` is a bare flag
/// and has no value; `key=` has an empty value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashPair {
    /// Text before the first `=`, or the whole token
    pub key: String,
    /// Text after the first `=`, if there is one
    pub value: Option<String>,
}

impl HashPair {
    /// Create a pair carrying a value.
    pub fn new(key: &str, value: &str) -> Self {
        Self {
            key: key.to_string(),
            value: Some(value.to_string()),
        }
    }

    /// Split a raw token into key and optional value.
    pub fn parse(token: &str) -> Self {
        match token.split_once('=') {
            Some((key, value)) => Self::new(key, value),
            None => Self {
                key: token.to_string(),
                value: None,
            },
        }
    }
}

impl fmt::Display for HashPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}={}", self.key, value),
            None => f.write_str(&self.key),
        }
    }
}

/// A URL fragment read as `<path>?<key1>=<val1>&<key2>=<val2>...`.
///
/// Pairs are kept as an ordered sequence, never a map: duplicate keys and
/// textual order both survive a parse/render cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HashQuery {
    /// Fragment text before the first `?`
    pub path: String,
    /// Pairs of the fragment query, in textual order
    pub pairs: Vec<HashPair>,
}

/// URL components that can be read and replaced as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlComponent {
    /// Path (/api/v1/users)
    Path,
    /// Host with optional port (example.com:8080)
    Host,
    /// Host without port (example.com)
    Hostname,
    /// Scheme (https)
    Protocol,
}

impl UrlComponent {
    /// Lowercase name used in messages and on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            UrlComponent::Path => "path",
            UrlComponent::Host => "host",
            UrlComponent::Hostname => "hostname",
            UrlComponent::Protocol => "protocol",
        }
    }
}

impl fmt::Display for UrlComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
