//! Turns stamped requests into directories and template files.

use crate::category::MigrationCategory;
use crate::encoding::encode_latin1;
use crate::error::{CoreError, CoreResult};
use crate::fs::Filesystem;
use crate::request::MigrationRequest;
use crate::template::{LineEnding, Template};
use std::path::{Path, PathBuf};

/// File name of the forward migration.
pub const UP_FILE: &str = "up.sql";

/// File name of the rollback migration.
pub const DOWN_FILE: &str = "down.sql";

/// Folder names for the nested categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub ddl_dir: String,
    pub dml_dir: String,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            ddl_dir: MigrationCategory::Ddl.as_str().to_string(),
            dml_dir: MigrationCategory::Dml.as_str().to_string(),
        }
    }
}

impl Layout {
    /// Folder for `category`, or `None` for CURRENT.
    pub fn category_dir(&self, category: MigrationCategory) -> Option<&str> {
        match category {
            MigrationCategory::Ddl => Some(&self.ddl_dir),
            MigrationCategory::Dml => Some(&self.dml_dir),
            MigrationCategory::Current => None,
        }
    }
}

/// Paths created for one request, relative to the working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationResult {
    directory: PathBuf,
    up_path: PathBuf,
    down_path: PathBuf,
}

impl MigrationResult {
    fn new(directory: PathBuf) -> Self {
        Self {
            up_path: directory.join(UP_FILE),
            down_path: directory.join(DOWN_FILE),
            directory,
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn up_path(&self) -> &Path {
        &self.up_path
    }

    pub fn down_path(&self) -> &Path {
        &self.down_path
    }

    /// Up then down path, with `/` separators on every platform.
    pub fn display_paths(&self) -> [String; 2] {
        [to_slash(&self.up_path), to_slash(&self.down_path)]
    }
}

/// Join path components with `/` regardless of the host separator.
pub fn to_slash(path: &Path) -> String {
    path.iter()
        .map(|part| part.to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Writes migration directories below `root`.
pub struct Materializer<'a, F: Filesystem + ?Sized> {
    fs: &'a F,
    root: PathBuf,
    layout: Layout,
    line_ending: LineEnding,
}

impl<'a, F: Filesystem + ?Sized> Materializer<'a, F> {
    /// Materializer with the default layout and native line endings.
    pub fn new(fs: &'a F, root: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            root: root.into(),
            layout: Layout::default(),
            line_ending: LineEnding::native(),
        }
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    /// Compute the paths for `request` without touching the filesystem.
    pub fn plan(&self, request: &MigrationRequest) -> CoreResult<MigrationResult> {
        let leaf = request.directory_name().ok_or_else(|| {
            CoreError::invalid_input(format!(
                "migration '{}' has no timestamp assigned",
                request.name()
            ))
        })?;

        let mut directory = PathBuf::new();
        if let Some(category_dir) = self.layout.category_dir(request.category()) {
            directory.push(category_dir);
            if let Some(sub) = request.sub_directory() {
                directory.push(sub);
            }
        }
        directory.push(leaf);

        Ok(MigrationResult::new(directory))
    }

    /// Create the directory for `request` and write `up.sql` and `down.sql`.
    ///
    /// The template is encoded before anything is created, so an encoding
    /// failure leaves the filesystem untouched.
    pub fn materialize(&self, request: &MigrationRequest) -> CoreResult<MigrationResult> {
        let result = self.plan(request)?;
        let template = Template::for_category(request.category());
        let contents = encode_latin1(&template.render(self.line_ending))?;

        let directory = self.root.join(result.directory());
        if self.fs.is_dir(&directory) {
            log::info!("Reusing existing directory {}", directory.display());
        }
        self.fs
            .create_dir_all(&directory)
            .map_err(|e| CoreError::filesystem(&directory, e))?;
        log::debug!("Created directory {}", directory.display());

        for file in [result.up_path(), result.down_path()] {
            let path = self.root.join(file);
            self.fs
                .write(&path, &contents)
                .map_err(|e| CoreError::filesystem(&path, e))?;
            log::debug!("Wrote {} ({} bytes)", path.display(), contents.len());
        }

        Ok(result)
    }

    /// Materialize `requests` one after another, stopping at the first error.
    ///
    /// Work already done for earlier requests is not rolled back.
    pub fn materialize_all(
        &self,
        requests: &[MigrationRequest],
    ) -> CoreResult<Vec<MigrationResult>> {
        requests.iter().map(|r| self.materialize(r)).collect()
    }

    /// Plan every request; nothing is written.
    pub fn plan_all(&self, requests: &[MigrationRequest]) -> CoreResult<Vec<MigrationResult>> {
        requests.iter().map(|r| self.plan(r)).collect()
    }
}

#[cfg(test)]
#[path = "materializer_test.rs"]
mod tests;
