//! Strongly-typed migration name wrapper.

use crate::error::{CoreError, CoreResult};
use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;

/// Characters rejected by at least one common filesystem.
const FORBIDDEN_CHARS: &[char] = &['/', '\\', '<', '>', ':', '"', '|', '?', '*'];

/// Strongly-typed wrapper for the user-supplied migration identifier.
///
/// The name ends up as the suffix of a directory name
/// (`{timestamp}_{name}`), so it is trimmed and must be a single, safe path
/// segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MigrationName(String);

impl MigrationName {
    /// Trim `raw` and validate it as a migration name.
    pub fn parse(raw: &str) -> CoreResult<Self> {
        let name = raw.trim();

        if name.is_empty() {
            return Err(CoreError::invalid_input("migration name cannot be empty"));
        }

        if name.contains("..") || name.starts_with('.') || name.starts_with('-') {
            return Err(CoreError::invalid_input(format!(
                "invalid migration name '{name}': must not contain '..' or start with '.' or '-'"
            )));
        }

        if let Some(c) = name
            .chars()
            .find(|c| FORBIDDEN_CHARS.contains(c) || c.is_control())
        {
            return Err(CoreError::invalid_input(format!(
                "invalid migration name '{name}': character {c:?} is not allowed in a directory name"
            )));
        }

        Ok(Self(name.to_string()))
    }

    /// Return the underlying name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the inner `String`.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for MigrationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for MigrationName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Deref for MigrationName {
    type Target = str;
    fn deref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for MigrationName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for MigrationName {
    type Error = CoreError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl TryFrom<String> for MigrationName {
    type Error = CoreError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl PartialEq<str> for MigrationName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for MigrationName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl PartialEq<String> for MigrationName {
    fn eq(&self, other: &String) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
#[path = "migration_name_test.rs"]
mod tests;
