//! Configuration types and parsing for migrate.yml

use crate::error::{CoreError, CoreResult};
use crate::materializer::Layout;
use crate::template::LineEnding;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file names looked up in the working directory, in order.
pub const CONFIG_FILE_NAMES: &[&str] = &["migrate.yml", "migrate.yaml"];

/// Optional project configuration from migrate.yml
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Folder that receives DDL migrations
    #[serde(default = "default_ddl_dir")]
    pub ddl_dir: String,

    /// Folder that receives DML migrations
    #[serde(default = "default_dml_dir")]
    pub dml_dir: String,

    /// Line endings written to generated files
    #[serde(default)]
    pub line_ending: LineEndingSetting,

    /// What an interactive session with no category selected produces
    #[serde(default)]
    pub empty_selection: EmptySelection,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ddl_dir: default_ddl_dir(),
            dml_dir: default_dml_dir(),
            line_ending: LineEndingSetting::default(),
            empty_selection: EmptySelection::default(),
        }
    }
}

fn default_ddl_dir() -> String {
    "DDL".to_string()
}

fn default_dml_dir() -> String {
    "DML".to_string()
}

/// Line ending selection in the config file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LineEndingSetting {
    /// Host platform convention (default)
    #[default]
    Native,
    /// Always `\n`
    Lf,
    /// Always `\r\n`
    Crlf,
}

impl LineEndingSetting {
    pub fn resolve(&self) -> LineEnding {
        match self {
            LineEndingSetting::Native => LineEnding::native(),
            LineEndingSetting::Lf => LineEnding::Lf,
            LineEndingSetting::Crlf => LineEnding::CrLf,
        }
    }
}

/// Outcome when the interactive answers select neither DDL nor DML
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EmptySelection {
    /// Scaffold a single migration in the working directory (default)
    #[default]
    Current,
    /// Fail with an invalid input error
    Error,
}

impl std::fmt::Display for EmptySelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmptySelection::Current => write!(f, "current"),
            EmptySelection::Error => write!(f, "error"),
        }
    }
}

impl Config {
    /// Load configuration from an explicit file path
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.is_file() {
            return Err(CoreError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let content =
            std::fs::read_to_string(path).map_err(|e| CoreError::filesystem(path, e))?;
        let config: Config = if content.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(&content)?
        };
        config.validate()?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load migrate.yml or migrate.yaml from `dir`, falling back to defaults
    /// when neither exists
    pub fn load_or_default(dir: &Path) -> CoreResult<Self> {
        match CONFIG_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
        {
            Some(path) => Self::load(&path),
            None => {
                log::debug!("No config file in {}, using defaults", dir.display());
                Ok(Self::default())
            }
        }
    }

    /// Validate the configuration
    fn validate(&self) -> CoreResult<()> {
        for (field, value) in [("ddl_dir", &self.ddl_dir), ("dml_dir", &self.dml_dir)] {
            if !is_single_segment(value) {
                return Err(CoreError::ConfigInvalid {
                    message: format!(
                        "'{field}' must be a single, non-empty folder name, got '{value}'"
                    ),
                });
            }
        }

        if self.ddl_dir == self.dml_dir {
            return Err(CoreError::ConfigInvalid {
                message: format!(
                    "'ddl_dir' and 'dml_dir' must differ, both are '{}'",
                    self.ddl_dir
                ),
            });
        }

        Ok(())
    }

    /// Category folder layout for the materializer
    pub fn layout(&self) -> Layout {
        Layout {
            ddl_dir: self.ddl_dir.clone(),
            dml_dir: self.dml_dir.clone(),
        }
    }

    /// Concrete line ending for generated files
    pub fn line_ending(&self) -> LineEnding {
        self.line_ending.resolve()
    }
}

fn is_single_segment(value: &str) -> bool {
    !value.trim().is_empty()
        && value != "."
        && value != ".."
        && !value.contains(&['/', '\\'][..])
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
