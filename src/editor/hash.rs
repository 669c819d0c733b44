//! Hash parameter accessors.
//!
//! Single-page applications often keep state in the fragment as
//! `#<path>?key=value&...`. These functions edit that secondary query and
//! leave the URL's own query string untouched.
//!
//! The fragment is percent-decoded before it is split into pairs, so keys
//! and values are read and written as plain text. An escaped `&` or `=`
//! (`%26`, `%3D`) therefore acts as a separator once decoded.

use url::Url;

use crate::core::{decode_fragment, encode_fragment, parse_url};
use crate::error::UrlEditError;
use crate::types::HashQuery;

/// The parsed hash query of a URL.
///
/// A URL without a fragment yields an empty `HashQuery`.
///
/// # Examples
///
/// ```
/// use urledit::get_hash_params;
///
/// let query = get_hash_params("https://example.com/#/inbox?page=2&unread").unwrap();
/// assert_eq!(query.path, "/inbox");
/// assert_eq!(query.pairs.len(), 2);
/// assert_eq!(query.get("page"), Some("2"));
/// ```
pub fn get_hash_params(url: &str) -> Result<HashQuery, UrlEditError> {
    let parsed = parse_url(url)?;
    Ok(read_fragment(&parsed))
}

/// Value of the hash parameter `key`, or an empty string.
///
/// A bare `key` with no `=` does not count as a match. The value is
/// returned percent-decoded.
///
/// # Examples
///
/// ```
/// use urledit::get_hash_param;
///
/// let value = get_hash_param("http://example.com/#?t1=1&t2=2", "t1").unwrap();
/// assert_eq!(value, "1");
///
/// // The URL's own query string is not consulted.
/// let none = get_hash_param("http://example.com/?t1=1&t2=2", "t1").unwrap();
/// assert_eq!(none, "");
/// ```
pub fn get_hash_param(url: &str, key: &str) -> Result<String, UrlEditError> {
    let query = get_hash_params(url)?;
    Ok(query.get(key).unwrap_or_default().to_string())
}

/// Bind the hash parameter `key` to `value`.
///
/// Existing pairs named `key` are rewritten where they stand; otherwise the
/// pair is appended. The resulting fragment always contains a `?` between
/// the fragment path and the pairs, even when the fragment had none before.
/// `value` is plain text; it is percent-encoded on write where needed.
///
/// # Examples
///
/// ```
/// use urledit::set_hash_param;
///
/// let url = set_hash_param("http://example.com/#?t1=1&t2=2", "t1", "3").unwrap();
/// assert_eq!(url, "http://example.com/#?t1=3&t2=2");
///
/// let created = set_hash_param("http://example.com/?t1=1&t2=2", "t1", "3").unwrap();
/// assert_eq!(created, "http://example.com/?t1=1&t2=2#?t1=3");
///
/// let escaped = set_hash_param("http://example.com/", "q", "100% off").unwrap();
/// assert_eq!(escaped, "http://example.com/#?q=100%25%20off");
/// ```
pub fn set_hash_param(url: &str, key: &str, value: &str) -> Result<String, UrlEditError> {
    let mut parsed = parse_url(url)?;
    let mut query = read_fragment(&parsed);
    query.set(key, value);
    write_fragment(&mut parsed, &query);
    Ok(parsed.to_string())
}

/// Remove every hash parameter named `key`.
///
/// When no pairs remain the `?` is dropped too, and an empty fragment
/// removes the `#` altogether.
///
/// # Examples
///
/// ```
/// use urledit::del_hash_param;
///
/// let url = del_hash_param("http://example.com/#?t1=1&t2=2", "t1").unwrap();
/// assert_eq!(url, "http://example.com/#?t2=2");
///
/// let emptied = del_hash_param("http://example.com/#?p1=1", "p1").unwrap();
/// assert_eq!(emptied, "http://example.com/");
/// ```
pub fn del_hash_param(url: &str, key: &str) -> Result<String, UrlEditError> {
    let mut parsed = parse_url(url)?;
    let mut query = read_fragment(&parsed);
    query.remove(key);
    write_fragment(&mut parsed, &query);
    Ok(parsed.to_string())
}

fn read_fragment(url: &Url) -> HashQuery {
    HashQuery::parse(&decode_fragment(url.fragment().unwrap_or("")))
}

fn write_fragment(url: &mut Url, query: &HashQuery) {
    let fragment = query.to_string();
    if fragment.is_empty() {
        url.set_fragment(None);
    } else {
        url.set_fragment(Some(&encode_fragment(&fragment)));
    }
}
