//! Resolution of user intent into an ordered list of migration requests.
//!
//! Precedence, first match wins:
//! 1. `want_all` produces a DDL request then a DML request.
//! 2. `want_ddl` / `want_dml` produce the selected categories, DDL first.
//! 3. Nothing selected produces a single CURRENT request. In interactive
//!    mode this is governed by [`EmptySelection`].

use crate::category::MigrationCategory;
use crate::config::EmptySelection;
use crate::error::{CoreError, CoreResult};
use crate::migration_name::MigrationName;
use crate::request::MigrationRequest;
use std::path::Path;

/// Raw flags collected once at the command-line boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Intent {
    pub want_all: bool,
    pub want_ddl: bool,
    pub want_dml: bool,
    /// Sub-directory below the category folder; empty for none
    pub sub_directory: String,
    /// Positional migration name; `None` switches to interactive mode
    pub name: Option<String>,
}

/// Answers gathered by an interactive session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answers {
    pub name: String,
    pub sub_directory: String,
    pub ddl: bool,
    pub dml: bool,
}

/// Source of interactive answers.
///
/// Only consulted when the intent carries no migration name.
pub trait AnswerProvider {
    fn answers(&mut self) -> CoreResult<Answers>;
}

impl<F> AnswerProvider for F
where
    F: FnMut() -> CoreResult<Answers>,
{
    fn answers(&mut self) -> CoreResult<Answers> {
        self()
    }
}

/// Normalised selection after mode handling.
struct Selection {
    name: String,
    sub_directory: String,
    want_all: bool,
    want_ddl: bool,
    want_dml: bool,
    interactive: bool,
}

/// Resolve `intent` into migration requests, in materialization order.
///
/// Validation runs before anything touches the filesystem, so an invalid
/// name or sub-directory leaves no partial output behind.
pub fn resolve(
    intent: Intent,
    provider: &mut dyn AnswerProvider,
    empty_selection: EmptySelection,
) -> CoreResult<Vec<MigrationRequest>> {
    let selection = match intent.name {
        Some(name) => Selection {
            name,
            sub_directory: intent.sub_directory,
            want_all: intent.want_all,
            want_ddl: intent.want_ddl,
            want_dml: intent.want_dml,
            interactive: false,
        },
        None => {
            let answers = provider.answers()?;
            Selection {
                name: answers.name,
                sub_directory: answers.sub_directory,
                want_all: false,
                want_ddl: answers.ddl,
                want_dml: answers.dml,
                interactive: true,
            }
        }
    };

    let name = MigrationName::parse(&selection.name)?;

    let categories: Vec<MigrationCategory> = if selection.want_all {
        vec![MigrationCategory::Ddl, MigrationCategory::Dml]
    } else {
        let mut selected = Vec::with_capacity(2);
        if selection.want_ddl {
            selected.push(MigrationCategory::Ddl);
        }
        if selection.want_dml {
            selected.push(MigrationCategory::Dml);
        }
        selected
    };

    let categories = if !categories.is_empty() {
        categories
    } else if !selection.interactive || empty_selection == EmptySelection::Current {
        vec![MigrationCategory::Current]
    } else {
        return Err(CoreError::invalid_input(
            "no migration category was selected (answer 'y' to DDL or DML)",
        ));
    };

    // CURRENT never nests, so its sub-directory is dropped unchecked
    let sub_directory = if categories.iter().any(|c| c.is_nested()) {
        validate_sub_directory(selection.sub_directory)?
    } else {
        None
    };

    log::debug!(
        "Resolved {} migration(s) for '{}' ({} mode): {:?}",
        categories.len(),
        name,
        if selection.interactive {
            "interactive"
        } else {
            "flag"
        },
        categories
    );

    Ok(categories
        .into_iter()
        .map(|category| MigrationRequest::new(category, name.clone(), sub_directory.clone()))
        .collect())
}

/// Empty means none. Anything else is kept verbatim unless it would escape
/// the category folder.
fn validate_sub_directory(raw: String) -> CoreResult<Option<String>> {
    if raw.is_empty() {
        return Ok(None);
    }

    let has_parent = raw.split(|c: char| c == '/' || c == '\\').any(|seg| seg == "..");
    let is_absolute =
        raw.starts_with('/') || raw.starts_with('\\') || Path::new(&raw).is_absolute();
    if has_parent || is_absolute {
        return Err(CoreError::invalid_input(format!(
            "invalid sub-directory '{raw}': must be a relative path without '..'"
        )));
    }

    Ok(Some(raw))
}

#[cfg(test)]
#[path = "resolver_test.rs"]
mod tests;
