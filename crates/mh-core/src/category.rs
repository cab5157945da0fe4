//! Migration categories

use std::fmt;

/// Which kind of migration a request scaffolds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MigrationCategory {
    /// Schema changes, placed under the DDL folder
    Ddl,
    /// Data changes, placed under the DML folder
    Dml,
    /// No category selected; scaffold directly in the working directory
    Current,
}

impl MigrationCategory {
    /// Upper-case label used in messages and as the default folder name.
    pub fn as_str(&self) -> &'static str {
        match self {
            MigrationCategory::Ddl => "DDL",
            MigrationCategory::Dml => "DML",
            MigrationCategory::Current => "CURRENT",
        }
    }

    /// Whether requests of this category nest into a category folder.
    pub fn is_nested(&self) -> bool {
        !matches!(self, MigrationCategory::Current)
    }
}

impl fmt::Display for MigrationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
