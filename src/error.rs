//! Error types for URL editing operations.

use thiserror::Error;

/// Errors that can occur while reading or editing a URL.
///
/// A missing value (query parameter, hash parameter, file extension) is never
/// an error; those lookups return an empty string instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UrlEditError {
    /// The input string could not be parsed as a URL.
    #[error("URL parsing error: {0}")]
    Parse(url::ParseError),

    /// The port in a replacement host is not a valid port number,
    /// or the URL cannot carry a port at all.
    #[error("Invalid port: {0}")]
    InvalidPort(String),

    /// A replacement hostname carried a `:port` suffix.
    #[error("Hostname must not include a port: {0}")]
    PortInHostname(String),

    /// The parser refused to switch the URL to the requested scheme.
    #[error("Cannot change scheme from '{from}' to '{to}'")]
    SchemeChange { from: String, to: String },

    /// The URL has no authority, so the named component cannot be replaced.
    #[error("URL cannot be a base, {0} cannot be set")]
    CannotBeABase(String),
}

impl From<url::ParseError> for UrlEditError {
    fn from(err: url::ParseError) -> Self {
        UrlEditError::Parse(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            UrlEditError::InvalidPort("abc".to_string()).to_string(),
            "Invalid port: abc"
        );

        assert_eq!(
            UrlEditError::SchemeChange {
                from: "http".to_string(),
                to: "foo".to_string(),
            }
            .to_string(),
            "Cannot change scheme from 'http' to 'foo'"
        );

        assert_eq!(
            UrlEditError::PortInHostname("b.com:9".to_string()).to_string(),
            "Hostname must not include a port: b.com:9"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(
            UrlEditError::CannotBeABase("host".to_string()),
            UrlEditError::CannotBeABase("host".to_string())
        );
        assert_ne!(
            UrlEditError::CannotBeABase("host".to_string()),
            UrlEditError::InvalidPort("host".to_string())
        );
    }

    #[test]
    fn test_url_parse_error_conversion() {
        let url_error = url::ParseError::RelativeUrlWithoutBase;
        let edit_error: UrlEditError = url_error.into();

        match edit_error {
            UrlEditError::Parse(url::ParseError::RelativeUrlWithoutBase) => (),
            _ => panic!("Expected Parse variant"),
        }
        assert_eq!(
            edit_error.to_string(),
            "URL parsing error: relative URL without a base"
        );
    }
}
