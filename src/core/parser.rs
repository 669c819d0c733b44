//! URL parsing entry point and authority helpers.

use tracing::debug;
use url::Url;

use crate::error::UrlEditError;

/// Parse a URL string, logging the reason when it is rejected.
///
/// Every editing operation goes through here, so a string that fails to
/// parse is reported the same way everywhere.
///
/// # Examples
///
/// ```
/// use urledit::parse_url;
///
/// let url = parse_url("https://example.com/a?b=1#c").unwrap();
/// assert_eq!(url.fragment(), Some("c"));
///
/// assert!(parse_url("example.com").is_err());
/// ```
pub fn parse_url(url: &str) -> Result<Url, UrlEditError> {
    Url::parse(url).map_err(|err| {
        debug!(url, error = %err, "failed to parse URL");
        UrlEditError::from(err)
    })
}

/// Host and port of a parsed URL as a single `host[:port]` string.
///
/// Returns an empty string when the URL has no host. Ports the parser
/// considers default for the scheme are not reported.
pub fn host_with_port(url: &Url) -> String {
    match (url.host_str(), url.port()) {
        (Some(host), Some(port)) => format!("{}:{}", host, port),
        (Some(host), None) => host.to_string(),
        (None, _) => String::new(),
    }
}

/// Split a `host[:port]` string into hostname and optional port text.
///
/// The split happens on the first `:`, except that a bracketed IPv6
/// literal is kept whole.
///
/// # Examples
///
/// ```
/// use urledit::core::split_host_port;
///
/// assert_eq!(split_host_port("example.com:8080"), ("example.com", Some("8080")));
/// assert_eq!(split_host_port("example.com"), ("example.com", None));
/// assert_eq!(split_host_port("[::1]:3000"), ("[::1]", Some("3000")));
/// ```
pub fn split_host_port(host: &str) -> (&str, Option<&str>) {
    if host.starts_with('[') {
        if let Some(end) = host.find(']') {
            let (hostname, rest) = host.split_at(end + 1);
            return (hostname, rest.strip_prefix(':'));
        }
    }

    match host.split_once(':') {
        Some((hostname, port)) => (hostname, Some(port)),
        None => (host, None),
    }
}
