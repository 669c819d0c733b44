//! Core parsing functionality.
//!
//! This module contains the pieces every editing operation builds on:
//! - Parsing URL strings and splitting host/port authorities
//! - Reading and reassembling the hash query kept inside a fragment

pub mod fragment;
pub mod parser;

// Re-export main functionality
pub use fragment::{decode_fragment, encode_fragment, split_fragment};
pub use parser::{host_with_port, parse_url, split_host_port};
