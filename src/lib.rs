//! urledit - Read and edit the components of a URL string
//!
//! This crate provides small, stateless functions that take a URL string,
//! change one part of it and hand back the new string.
//!
//! # Features
//!
//! - **Query parameters**: get, set and delete with standard form encoding
//! - **Hash parameters**: get, set and delete `key=value` pairs kept in the
//!   fragment as `#<path>?key=value&...`
//! - **Components**: read or replace path, host, hostname and protocol
//! - **Checks**: general validity and HTTP(S) validity
//! - **Derived values**: file extension and base URL
//!
//! # Quick Start
//!
//! ```
//! use urledit::{get_hash_param, set_hash_param, set_query_param, get_base_url, check_valid};
//!
//! // Edit the query string
//! let url = set_query_param("https://example.com/list?page=1", "page", "2")?;
//! assert_eq!(url, "https://example.com/list?page=2");
//!
//! // Edit state kept in the fragment
//! let url = set_hash_param(&url, "tab", "open")?;
//! assert_eq!(url, "https://example.com/list?page=2#?tab=open");
//! assert_eq!(get_hash_param(&url, "tab")?, "open");
//!
//! // Strip query and fragment
//! assert_eq!(get_base_url(&url)?, "https://example.com/list");
//! assert!(check_valid(&url));
//! # Ok::<(), urledit::UrlEditError>(())
//! ```
//!
//! # Hash Parameters
//!
//! The fragment is split on its first `?` into a fragment path and a
//! fragment query. Pairs in the fragment query keep their order; setting a
//! key rewrites it where it stands and appends it otherwise.
//!
//! | URL                              | Operation              | Result                              |
//! |----------------------------------|------------------------|-------------------------------------|
//! | `http://e.com/#?a=1&b=2`         | `get_hash_param(a)`    | `1`                                 |
//! | `http://e.com/#?a=1&b=2`         | `set_hash_param(a, 3)` | `http://e.com/#?a=3&b=2`            |
//! | `http://e.com/?a=1`              | `set_hash_param(a, 3)` | `http://e.com/?a=1#?a=3`            |
//! | `http://e.com/#view?a=1`         | `del_hash_param(a)`    | `http://e.com/#view`                |
//!
//! # Error Handling
//!
//! Functions that return a value return `Result<T, UrlEditError>`. A string
//! that does not parse as an absolute URL gives [`UrlEditError::Parse`].
//! Lookups of missing values return an empty string rather than an error,
//! so "absent" and "present but empty" look the same.
//!
//! `check_valid` and `check_valid_http_url` never fail; unparsable input is
//! simply invalid.

// Re-export editing operations
pub use editor::{
    check_valid, check_valid_http_url, del_hash_param, del_query_param, get_base_url,
    get_component, get_hash_param, get_hash_params, get_host, get_hostname, get_path,
    get_protocol, get_query_param, get_query_params, get_url_file_type, set_component,
    set_hash_param, set_host, set_hostname, set_path, set_protocol, set_query_param,
};

// Re-export public types
pub use crate::core::{parse_url, split_fragment};
pub use error::UrlEditError;
pub use types::{HashPair, HashQuery, UrlComponent};

// Module declarations
pub mod core;
pub mod editor;
pub mod error;
pub mod logging;
pub mod types;
