//! Tests for path, host, hostname and protocol accessors, checks and derived values.

use urledit::*;

#[test]
fn test_path() {
    assert_eq!(get_path("http://example.com/path/to/resource").unwrap(), "/path/to/resource");

    let result = set_path("http://example.com/path/to/resource", "/new/path").unwrap();
    assert_eq!(result, "http://example.com/new/path");
}

#[test]
fn test_host() {
    assert_eq!(get_host("http://example.com/path/to/resource").unwrap(), "example.com");
    assert_eq!(get_host("http://example.com:8080/path/to/resource").unwrap(), "example.com:8080");

    let test_cases = vec![
        ("http://example.com/path/to/resource", "newhost.com", "http://newhost.com/path/to/resource"),
        (
            "http://example.com:8080/path/to/resource",
            "newhost.com:9090",
            "http://newhost.com:9090/path/to/resource",
        ),
        ("http://example.com:8080/a?b=1#c", "newhost.com", "http://newhost.com/a?b=1#c"),
    ];

    for (url, host, expected) in test_cases {
        let result = set_host(url, host).unwrap();
        assert_eq!(result, expected, "set_host failed for: {} / {}", url, host);
    }
}

#[test]
fn test_hostname() {
    assert_eq!(
        get_hostname("http://subdomain.example.com/path/to/resource").unwrap(),
        "subdomain.example.com"
    );
    assert_eq!(
        get_hostname("http://subdomain.example.com:8080/path/to/resource").unwrap(),
        "subdomain.example.com"
    );

    let test_cases = vec![
        (
            "http://subdomain.example.com/path/to/resource",
            "newsubdomain.example.com",
            "http://newsubdomain.example.com/path/to/resource",
        ),
        (
            "http://subdomain.example.com:8080/path/to/resource",
            "newsubdomain.example.com",
            "http://newsubdomain.example.com:8080/path/to/resource",
        ),
    ];

    for (url, hostname, expected) in test_cases {
        let result = set_hostname(url, hostname).unwrap();
        assert_eq!(result, expected, "set_hostname failed for: {} / {}", url, hostname);
    }
}

#[test]
fn test_protocol() {
    assert_eq!(get_protocol("http://example.com/path/to/resource").unwrap(), "http");
    assert_eq!(get_protocol("HTTPS://example.com/").unwrap(), "https");
    assert_eq!(get_protocol("mailto:someone@example.com").unwrap(), "mailto");

    let result = set_protocol("http://example.com/path/to/resource", "https").unwrap();
    assert_eq!(result, "https://example.com/path/to/resource");

    let result = set_protocol("https://example.com:8443/", "wss").unwrap();
    assert_eq!(result, "wss://example.com:8443/");
}

#[test]
fn test_setters_reject_unsupported_values() {
    assert!(matches!(
        set_protocol("http://example.com/", "custom"),
        Err(UrlEditError::SchemeChange { .. })
    ));
    assert!(matches!(
        set_host("http://example.com/", "example.org:99999"),
        Err(UrlEditError::InvalidPort(_))
    ));
    assert!(matches!(
        set_hostname("data:text/plain,hello", "example.org"),
        Err(UrlEditError::CannotBeABase(_))
    ));
    assert_eq!(
        set_hostname("http://a.com:8080/", "b.com:9"),
        Err(UrlEditError::PortInHostname("b.com:9".to_string()))
    );
}

#[test]
fn test_check_valid() {
    let valid = vec![
        "http://example.com/path/to/resource",
        "https://example.com",
        "ftp://files.example.com/pub/file.txt",
        "ws://localhost:9000/socket",
    ];
    for url in valid {
        assert!(check_valid(url), "Should be valid: {}", url);
    }

    let invalid = vec![
        "",
        "example.com",
        "/just/a/path",
        "mailto:someone@example.com",
        "http://",
        "http://exa mple.com",
    ];
    for url in invalid {
        assert!(!check_valid(url), "Should be invalid: {}", url);
    }
}

#[test]
fn test_check_valid_http_url() {
    let valid = vec!["http://example.com/path/to/resource", "https://example.com/?a=1#b"];
    for url in valid {
        assert!(check_valid_http_url(url), "Should be valid HTTP URL: {}", url);
    }

    let invalid = vec![
        "ftp://files.example.com/",
        "ws://example.com/",
        "mailto:someone@example.com",
        "http://",
        "example.com",
    ];
    for url in invalid {
        assert!(!check_valid_http_url(url), "Should not be valid HTTP URL: {}", url);
    }
}

#[test]
fn test_get_url_file_type() {
    let test_cases = vec![
        ("https://example.com/a/b/c.png", "png"),
        ("https://example.com/a/b/c.PNG?size=2", "PNG"),
        ("https://example.com/a/b/c", ""),
        ("https://example.com/a.b/c", ""),
        ("https://example.com", ""),
    ];

    for (url, expected) in test_cases {
        assert_eq!(get_url_file_type(url).unwrap(), expected, "File type failed for: {}", url);
    }
}

#[test]
fn test_get_base_url() {
    let test_cases = vec![
        ("https://example.com/path?x=1#y", "https://example.com/path"),
        ("https://example.com/path/to/resource?param=value#fragment", "https://example.com/path/to/resource"),
        ("http://example.com:8080/a/b/", "http://example.com:8080/a/b/"),
        ("https://example.com/#?t1=1", "https://example.com/"),
    ];

    for (url, expected) in test_cases {
        assert_eq!(get_base_url(url).unwrap(), expected, "Base URL failed for: {}", url);
    }
}

#[test]
fn test_accessors_reject_bad_url() {
    let bad = "not a url";
    assert!(get_path(bad).is_err());
    assert!(set_path(bad, "/a").is_err());
    assert!(get_host(bad).is_err());
    assert!(set_host(bad, "example.com").is_err());
    assert!(get_hostname(bad).is_err());
    assert!(set_hostname(bad, "example.com").is_err());
    assert!(get_protocol(bad).is_err());
    assert!(set_protocol(bad, "https").is_err());
    assert!(get_url_file_type(bad).is_err());
    assert!(get_base_url(bad).is_err());
}
