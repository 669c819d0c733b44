//! URL editing operations.
//!
//! Every function here takes a URL string, parses it fresh, and returns a
//! new string (or a boolean for the checks). Nothing is cached between calls.
//! - Query string parameters
//! - Hash parameters kept in the fragment
//! - Path, host, hostname and protocol
//! - Validity checks and derived values

pub mod checks;
pub mod hash;
pub mod parts;
pub mod query;

// Re-export main functionality
pub use checks::{check_valid, check_valid_http_url, get_base_url, get_url_file_type};
pub use hash::{del_hash_param, get_hash_param, get_hash_params, set_hash_param};
pub use parts::{
    get_component, get_host, get_hostname, get_path, get_protocol, set_component, set_host,
    set_hostname, set_path, set_protocol,
};
pub use query::{del_query_param, get_query_param, get_query_params, set_query_param};
