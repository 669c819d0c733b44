//! Hash query parsing and reassembly.
//!
//! A fragment such as `#/inbox?page=2&sort` is read as a fragment path
//! (`/inbox`) followed by a fragment query (`page=2&sort`). The query part is
//! kept as ordered pairs so edits can update keys in place.

use std::fmt;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};
use tracing::trace;

use crate::types::{HashPair, HashQuery};

/// Characters escaped when a decoded fragment is written back. `%` is
/// included so literal percent signs survive the next decode.
const FRAGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'%');

/// Percent-decode a serialized fragment.
///
/// Byte sequences that are not valid UTF-8 after decoding are replaced
/// with U+FFFD.
///
/// # Examples
///
/// ```
/// use urledit::core::decode_fragment;
///
/// assert_eq!(decode_fragment("?q=a%20b"), "?q=a b");
/// assert_eq!(decode_fragment("?q=%E4%BD%A0"), "?q=\u{4f60}");
/// ```
pub fn decode_fragment(fragment: &str) -> String {
    percent_decode_str(fragment).decode_utf8_lossy().into_owned()
}

/// Percent-encode decoded fragment text for serialization.
///
/// # Examples
///
/// ```
/// use urledit::core::encode_fragment;
///
/// assert_eq!(encode_fragment("?q=100% off"), "?q=100%25%20off");
/// assert_eq!(encode_fragment("?q=\u{4f60}"), "?q=%E4%BD%A0");
/// ```
pub fn encode_fragment(fragment: &str) -> String {
    utf8_percent_encode(fragment, FRAGMENT).to_string()
}

/// Split a raw fragment into `(fragment_path, fragment_query)` on the first `?`.
///
/// A fragment without `?` is all path; a fragment starting with `?` has an
/// empty path.
///
/// # Examples
///
/// ```
/// use urledit::split_fragment;
///
/// assert_eq!(split_fragment("path?a=1"), ("path", "a=1"));
/// assert_eq!(split_fragment("?a=1?b"), ("", "a=1?b"));
/// assert_eq!(split_fragment("section"), ("section", ""));
/// ```
pub fn split_fragment(fragment: &str) -> (&str, &str) {
    fragment.split_once('?').unwrap_or((fragment, ""))
}

impl HashQuery {
    /// Parse a raw fragment (without the leading `#`).
    ///
    /// An empty fragment query yields no pairs. Otherwise every `&`-separated
    /// token becomes a pair, empty tokens included, so that rendering gives
    /// back the original text.
    pub fn parse(fragment: &str) -> Self {
        let (path, query) = split_fragment(fragment);
        let pairs = if query.is_empty() {
            Vec::new()
        } else {
            query.split('&').map(HashPair::parse).collect()
        };
        trace!(path, pair_count = pairs.len(), "parsed hash query");

        Self {
            path: path.to_string(),
            pairs,
        }
    }

    /// Value of the first pair named `key` that carries a value.
    ///
    /// Bare tokens without `=` never match here, even when their text
    /// equals `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|pair| pair.key == key && pair.value.is_some())
            .and_then(|pair| pair.value.as_deref())
    }

    /// Bind `key` to `value`.
    ///
    /// Every pair whose key equals `key` is replaced in place by `key=value`,
    /// including bare flags. If none matched, the pair is appended.
    pub fn set(&mut self, key: &str, value: &str) {
        let mut found = false;
        for pair in self.pairs.iter_mut().filter(|pair| pair.key == key) {
            pair.value = Some(value.to_string());
            found = true;
        }
        if !found {
            self.pairs.push(HashPair::new(key, value));
        }
    }

    /// Drop every pair whose key equals `key`, returning how many were removed.
    pub fn remove(&mut self, key: &str) -> usize {
        let before = self.pairs.len();
        self.pairs.retain(|pair| pair.key != key);
        before - self.pairs.len()
    }

    /// True when there are no pairs, regardless of the fragment path.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl fmt::Display for HashQuery {
    /// Renders `path` alone when there are no pairs, otherwise `path?k=v&...`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)?;
        if self.pairs.is_empty() {
            return Ok(());
        }

        f.write_str("?")?;
        for (i, pair) in self.pairs.iter().enumerate() {
            if i > 0 {
                f.write_str("&")?;
            }
            write!(f, "{}", pair)?;
        }
        Ok(())
    }
}
