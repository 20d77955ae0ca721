//! Shared fixtures for the integration tests.

pub use std_util::prelude::*;

use chrono::{DateTime, FixedOffset};
use rowmap::nullable;

/// Parses an RFC 3339 timestamp.
pub fn ts(src: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(src).unwrap()
}

pub fn timestamptz(src: &str) -> nullable::Timestamptz {
    nullable::Timestamptz::new(ts(src))
}

pub fn text(src: &str) -> nullable::Text {
    nullable::Text::new(src.to_string())
}

/// A valid UUID column holding `id`.
pub fn uuid(id: &str) -> nullable::Uuid {
    nullable::Uuid::new(*uuid::Uuid::parse_str(id).unwrap().as_bytes())
}
