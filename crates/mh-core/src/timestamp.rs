//! Migration timestamps (`yyyyMMddHHmmssfff`).

use crate::error::{CoreError, CoreResult};
use chrono::NaiveDateTime;
use std::fmt;
use std::str::FromStr;

/// chrono format producing 17 digits with millisecond precision.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S%3f";

/// Number of ASCII digits in a timestamp.
pub const TIMESTAMP_LEN: usize = 17;

/// A 17-digit, millisecond-precision migration timestamp.
///
/// Lexical order equals chronological order, so directories prefixed with a
/// timestamp sort in creation order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Timestamp(String);

impl Timestamp {
    /// Format a local wall-clock instant.
    pub fn from_naive(instant: &NaiveDateTime) -> Self {
        Self(instant.format(TIMESTAMP_FORMAT).to_string())
    }

    /// Accept an existing 17-digit timestamp string, e.g. from a directory name.
    pub fn parse(s: &str) -> CoreResult<Self> {
        if s.len() != TIMESTAMP_LEN || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CoreError::invalid_input(format!(
                "invalid timestamp '{s}': expected {TIMESTAMP_LEN} digits (yyyyMMddHHmmssfff)"
            )));
        }
        Ok(Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Timestamp {
    type Err = CoreError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Timestamp {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
