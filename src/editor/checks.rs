//! Validity checks and derived values.

use crate::core::parse_url;
use crate::error::UrlEditError;

/// Check if a string parses as a URL with both a scheme and a host.
///
/// Parse failures count as invalid; this never returns an error.
///
/// # Examples
///
/// ```
/// use urledit::check_valid;
///
/// assert!(check_valid("ftp://files.example.com/pub"));
/// assert!(!check_valid("mailto:someone@example.com"));
/// assert!(!check_valid("example.com"));
/// ```
pub fn check_valid(url: &str) -> bool {
    match parse_url(url) {
        Ok(parsed) => {
            !parsed.scheme().is_empty() && parsed.host_str().is_some_and(|host| !host.is_empty())
        }
        Err(_) => false,
    }
}

/// Check if a URL is valid and uses the `http` or `https` scheme.
///
/// # Examples
///
/// ```
/// use urledit::check_valid_http_url;
///
/// assert!(check_valid_http_url("https://example.com/"));
/// assert!(!check_valid_http_url("ftp://files.example.com/"));
/// ```
pub fn check_valid_http_url(url: &str) -> bool {
    match parse_url(url) {
        Ok(parsed) => {
            matches!(parsed.scheme(), "http" | "https")
                && parsed.host_str().is_some_and(|host| !host.is_empty())
        }
        Err(_) => false,
    }
}

/// File extension of the last path segment, without the dot.
///
/// Returns an empty string when the last segment has no `.`. The
/// extension is taken from the percent-encoded path, so `t%20x` stays
/// encoded.
///
/// # Examples
///
/// ```
/// use urledit::get_url_file_type;
///
/// assert_eq!(get_url_file_type("https://example.com/a/b/c.png").unwrap(), "png");
/// assert_eq!(get_url_file_type("https://example.com/a.d/b").unwrap(), "");
/// ```
pub fn get_url_file_type(url: &str) -> Result<String, UrlEditError> {
    let parsed = parse_url(url)?;
    let path = parsed.path();
    let segment = path.rsplit('/').next().unwrap_or(path);
    Ok(segment
        .rfind('.')
        .map(|dot| segment[dot + 1..].to_string())
        .unwrap_or_default())
}

/// Scheme, authority and path of a URL, with query and fragment removed.
///
/// # Examples
///
/// ```
/// use urledit::get_base_url;
///
/// let base = get_base_url("https://example.com/path?x=1#y").unwrap();
/// assert_eq!(base, "https://example.com/path");
/// ```
pub fn get_base_url(url: &str) -> Result<String, UrlEditError> {
    let mut parsed = parse_url(url)?;
    parsed.set_query(None);
    parsed.set_fragment(None);
    Ok(parsed.to_string())
}
