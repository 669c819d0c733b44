//! Query string parameter accessors.
//!
//! The query is decoded with standard form-urlencoded rules. Writing it back
//! groups values by key in ascending key order, the same canonical form used
//! by most query encoders, so an edit may reorder untouched parameters.

use std::collections::BTreeMap;

use url::form_urlencoded;
use url::Url;

use crate::core::parse_url;
use crate::error::UrlEditError;

/// All decoded query pairs of a URL, in textual order.
///
/// # Examples
///
/// ```
/// use urledit::get_query_params;
///
/// let params = get_query_params("https://example.com/?b=2&a=1&b=3").unwrap();
/// assert_eq!(params[0], ("b".to_string(), "2".to_string()));
/// assert_eq!(params.len(), 3);
/// ```
pub fn get_query_params(url: &str) -> Result<Vec<(String, String)>, UrlEditError> {
    let parsed = parse_url(url)?;
    Ok(parsed
        .query_pairs()
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect())
}

/// First value bound to `key` in the query string, or an empty string.
///
/// # Examples
///
/// ```
/// use urledit::get_query_param;
///
/// let value = get_query_param("http://example.com/?t1=1&t2=2", "t1").unwrap();
/// assert_eq!(value, "1");
///
/// let missing = get_query_param("http://example.com/?t1=1", "t3").unwrap();
/// assert_eq!(missing, "");
/// ```
pub fn get_query_param(url: &str, key: &str) -> Result<String, UrlEditError> {
    let parsed = parse_url(url)?;
    Ok(parsed
        .query_pairs()
        .find(|(k, _)| k == key)
        .map(|(_, value)| value.into_owned())
        .unwrap_or_default())
}

/// Bind `key` to the single value `value`, replacing any existing bindings.
///
/// # Examples
///
/// ```
/// use urledit::set_query_param;
///
/// let url = set_query_param("http://example.com/?p1=1&p2=2", "p1", "3").unwrap();
/// assert_eq!(url, "http://example.com/?p1=3&p2=2");
/// ```
pub fn set_query_param(url: &str, key: &str, value: &str) -> Result<String, UrlEditError> {
    let mut parsed = parse_url(url)?;
    let mut values = decode_query(&parsed);
    values.insert(key.to_string(), vec![value.to_string()]);
    encode_query(&mut parsed, &values);
    Ok(parsed.to_string())
}

/// Remove every binding of `key` from the query string.
///
/// The `?` disappears when no parameters remain.
///
/// # Examples
///
/// ```
/// use urledit::del_query_param;
///
/// let url = del_query_param("http://example.com/?p1=1&p2=2", "p1").unwrap();
/// assert_eq!(url, "http://example.com/?p2=2");
///
/// let last = del_query_param("http://example.com/?p1=1", "p1").unwrap();
/// assert_eq!(last, "http://example.com/");
/// ```
pub fn del_query_param(url: &str, key: &str) -> Result<String, UrlEditError> {
    let mut parsed = parse_url(url)?;
    let mut values = decode_query(&parsed);
    values.remove(key);
    encode_query(&mut parsed, &values);
    Ok(parsed.to_string())
}

/// Decode the query into a key-ordered multimap.
fn decode_query(url: &Url) -> BTreeMap<String, Vec<String>> {
    let mut values: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (key, value) in url.query_pairs() {
        values
            .entry(key.into_owned())
            .or_default()
            .push(value.into_owned());
    }
    values
}

/// Write `values` back as the query string, dropping the query when empty.
fn encode_query(url: &mut Url, values: &BTreeMap<String, Vec<String>>) {
    if values.is_empty() {
        url.set_query(None);
        return;
    }

    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, list) in values {
        for value in list {
            serializer.append_pair(key, value);
        }
    }
    url.set_query(Some(&serializer.finish()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_query_param_decodes() {
        let value = get_query_param("https://example.com/?q=rust+lang&x=%26", "q").unwrap();
        assert_eq!(value, "rust lang");

        let escaped = get_query_param("https://example.com/?q=rust+lang&x=%26", "x").unwrap();
        assert_eq!(escaped, "&");
    }

    #[test]
    fn test_get_query_param_first_value() {
        let value = get_query_param("https://example.com/?a=1&a=2", "a").unwrap();
        assert_eq!(value, "1");
    }

    #[test]
    fn test_set_query_param_sorts_and_encodes() {
        let url = set_query_param("https://example.com/?b=2&a=1", "c", "x y").unwrap();
        assert_eq!(url, "https://example.com/?a=1&b=2&c=x+y");
    }

    #[test]
    fn test_set_query_param_replaces_all_bindings() {
        let url = set_query_param("https://example.com/?a=1&a=2&b=3", "a", "9").unwrap();
        assert_eq!(url, "https://example.com/?a=9&b=3");
    }

    #[test]
    fn test_set_query_param_keeps_fragment() {
        let url = set_query_param("https://example.com/page#top", "k", "v").unwrap();
        assert_eq!(url, "https://example.com/page?k=v#top");
    }

    #[test]
    fn test_del_query_param_keeps_other_values() {
        let url = del_query_param("https://example.com/?a=1&b=2&a=3", "b").unwrap();
        assert_eq!(url, "https://example.com/?a=1&a=3");
    }

    #[test]
    fn test_query_params_reject_bad_url() {
        assert!(get_query_param("::not-a-url", "a").is_err());
        assert!(set_query_param("", "a", "1").is_err());
        assert!(del_query_param("example.com/?a=1", "a").is_err());
    }
}
