//! Boilerplate content seeded into every `up.sql` / `down.sql`.

use crate::category::MigrationCategory;

const DDL_TEMPLATE: &str = r#"-- Terminate every DDL statement with ";" and add a line containing only "/" below each statement
-- Remember to remove all comments before submitting
-- This file is encoded in ISO-8859-1 (Latin-1) and must be submitted in that charset"#;

const DML_TEMPLATE: &str = r#"BEGIN
  -- insert your DML statements here
  -- Remember to remove all comments before submitting
  -- This file is encoded in ISO-8859-1 (Latin-1) and must be submitted in that charset



  COMMIT;
EXCEPTION WHEN OTHERS THEN
  DBMS_OUTPUT.PUT_LINE(SQLERRM);
  DBMS_OUTPUT.PUT_LINE(SQLCODE);
  ROLLBACK;
END;"#;

/// The two fixed migration templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    /// Statement/delimiter instructions, used for DDL and CURRENT migrations
    Ddl,
    /// Transaction skeleton, used for DML migrations
    Dml,
}

impl Template {
    /// Template seeded for a category.
    pub fn for_category(category: MigrationCategory) -> Self {
        match category {
            MigrationCategory::Dml => Template::Dml,
            MigrationCategory::Ddl | MigrationCategory::Current => Template::Ddl,
        }
    }

    /// Raw template text with `\n` line breaks.
    pub fn text(&self) -> &'static str {
        match self {
            Template::Ddl => DDL_TEMPLATE,
            Template::Dml => DML_TEMPLATE,
        }
    }

    /// Template text with line breaks converted to `ending`.
    pub fn render(&self, ending: LineEnding) -> String {
        ending.normalize(self.text())
    }
}

/// Line break convention written to generated files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    /// `\n`
    Lf,
    /// `\r\n`
    CrLf,
}

impl LineEnding {
    /// The host platform's convention.
    pub fn native() -> Self {
        if cfg!(windows) {
            LineEnding::CrLf
        } else {
            LineEnding::Lf
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }

    /// Rewrite every line break in fully assembled `text` to this ending.
    ///
    /// Existing `\r\n` pairs collapse to `\n` first, so the result never
    /// contains `\r\r\n`.
    pub fn normalize(&self, text: &str) -> String {
        let unified = text.replace("\r\n", "\n");
        match self {
            LineEnding::Lf => unified,
            LineEnding::CrLf => unified.replace('\n', "\r\n"),
        }
    }
}

#[cfg(test)]
#[path = "template_test.rs"]
mod tests;
