//! Path, host, hostname and protocol accessors.

use tracing::debug;
use url::Url;

use crate::core::{host_with_port, parse_url, split_host_port};
use crate::error::UrlEditError;
use crate::types::UrlComponent;

/// Path component of a URL, as serialized by the parser.
///
/// The path is returned percent-encoded (`/a%20b`), not decoded.
///
/// # Examples
///
/// ```
/// use urledit::get_path;
///
/// let path = get_path("http://example.com/path/to/resource").unwrap();
/// assert_eq!(path, "/path/to/resource");
/// ```
pub fn get_path(url: &str) -> Result<String, UrlEditError> {
    let parsed = parse_url(url)?;
    Ok(parsed.path().to_string())
}

/// Replace the path, keeping the query and fragment.
///
/// # Examples
///
/// ```
/// use urledit::set_path;
///
/// let url = set_path("http://example.com/path/to/resource?x=1", "/new/path").unwrap();
/// assert_eq!(url, "http://example.com/new/path?x=1");
/// ```
pub fn set_path(url: &str, path: &str) -> Result<String, UrlEditError> {
    let mut parsed = parse_url(url)?;
    parsed.set_path(path);
    Ok(parsed.to_string())
}

/// Host and port of a URL (`example.com:8080`).
///
/// # Examples
///
/// ```
/// use urledit::get_host;
///
/// let host = get_host("http://example.com:8080/path/to/resource").unwrap();
/// assert_eq!(host, "example.com:8080");
/// ```
pub fn get_host(url: &str) -> Result<String, UrlEditError> {
    let parsed = parse_url(url)?;
    Ok(host_with_port(&parsed))
}

/// Replace host and port together.
///
/// A replacement without a port removes the existing one.
///
/// # Examples
///
/// ```
/// use urledit::set_host;
///
/// let url = set_host("http://example.com:8080/path", "newhost.com:9090").unwrap();
/// assert_eq!(url, "http://newhost.com:9090/path");
///
/// let no_port = set_host("http://example.com:8080/path", "newhost.com").unwrap();
/// assert_eq!(no_port, "http://newhost.com/path");
/// ```
pub fn set_host(url: &str, host: &str) -> Result<String, UrlEditError> {
    let mut parsed = parse_url(url)?;
    ensure_authority(&parsed, UrlComponent::Host)?;

    let (hostname, port) = split_host_port(host);
    let port = match port {
        Some(text) => Some(
            text.parse::<u16>()
                .map_err(|_| UrlEditError::InvalidPort(text.to_string()))?,
        ),
        None => None,
    };

    parsed.set_host(Some(hostname))?;
    if port.is_some() || parsed.port().is_some() {
        parsed.set_port(port).map_err(|_| {
            debug!(url, host, "parser refused port");
            UrlEditError::InvalidPort(port.map(|p| p.to_string()).unwrap_or_default())
        })?;
    }
    Ok(parsed.to_string())
}

/// Hostname of a URL, without the port.
///
/// # Examples
///
/// ```
/// use urledit::get_hostname;
///
/// let hostname = get_hostname("http://subdomain.example.com:8080/path").unwrap();
/// assert_eq!(hostname, "subdomain.example.com");
/// ```
pub fn get_hostname(url: &str) -> Result<String, UrlEditError> {
    let parsed = parse_url(url)?;
    let host = host_with_port(&parsed);
    let (hostname, _) = split_host_port(&host);
    Ok(hostname.to_string())
}

/// Replace the hostname, keeping any port already present.
///
/// A replacement that carries its own `:port` is rejected with
/// [`UrlEditError::PortInHostname`]; use [`set_host`] to change both.
///
/// # Examples
///
/// ```
/// use urledit::set_hostname;
///
/// let url = set_hostname("http://sub.example.com:8080/path", "new.example.com").unwrap();
/// assert_eq!(url, "http://new.example.com:8080/path");
/// ```
pub fn set_hostname(url: &str, hostname: &str) -> Result<String, UrlEditError> {
    let mut parsed = parse_url(url)?;
    ensure_authority(&parsed, UrlComponent::Hostname)?;
    if let (_, Some(_)) = split_host_port(hostname) {
        return Err(UrlEditError::PortInHostname(hostname.to_string()));
    }

    // The parser keeps the current port when only the host changes.
    parsed.set_host(Some(hostname))?;
    Ok(parsed.to_string())
}

/// Scheme of a URL, without the trailing `:`.
///
/// # Examples
///
/// ```
/// use urledit::get_protocol;
///
/// assert_eq!(get_protocol("https://example.com/").unwrap(), "https");
/// ```
pub fn get_protocol(url: &str) -> Result<String, UrlEditError> {
    let parsed = parse_url(url)?;
    let scheme = parsed.scheme();
    Ok(scheme.split(':').next().unwrap_or(scheme).to_string())
}

/// Replace the scheme.
///
/// The parser refuses some transitions, such as moving between `http` and a
/// scheme it does not treat as special; those return
/// [`UrlEditError::SchemeChange`].
///
/// # Examples
///
/// ```
/// use urledit::set_protocol;
///
/// let url = set_protocol("http://example.com/path", "https").unwrap();
/// assert_eq!(url, "https://example.com/path");
///
/// assert!(set_protocol("http://example.com/path", "custom").is_err());
/// ```
pub fn set_protocol(url: &str, protocol: &str) -> Result<String, UrlEditError> {
    let mut parsed = parse_url(url)?;
    let from = parsed.scheme().to_string();
    parsed.set_scheme(protocol).map_err(|_| {
        debug!(url, protocol, "parser refused scheme change");
        UrlEditError::SchemeChange {
            from,
            to: protocol.to_string(),
        }
    })?;
    Ok(parsed.to_string())
}

/// Read a component by name.
pub fn get_component(url: &str, component: UrlComponent) -> Result<String, UrlEditError> {
    match component {
        UrlComponent::Path => get_path(url),
        UrlComponent::Host => get_host(url),
        UrlComponent::Hostname => get_hostname(url),
        UrlComponent::Protocol => get_protocol(url),
    }
}

/// Replace a component by name.
pub fn set_component(
    url: &str,
    component: UrlComponent,
    value: &str,
) -> Result<String, UrlEditError> {
    match component {
        UrlComponent::Path => set_path(url, value),
        UrlComponent::Host => set_host(url, value),
        UrlComponent::Hostname => set_hostname(url, value),
        UrlComponent::Protocol => set_protocol(url, value),
    }
}

fn ensure_authority(url: &Url, component: UrlComponent) -> Result<(), UrlEditError> {
    if url.cannot_be_a_base() {
        return Err(UrlEditError::CannotBeABase(component.to_string()));
    }
    Ok(())
}
