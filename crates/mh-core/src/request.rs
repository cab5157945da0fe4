//! A single unit of scaffolding work.

use crate::category::MigrationCategory;
use crate::error::{CoreError, CoreResult};
use crate::migration_name::MigrationName;
use crate::timestamp::Timestamp;

/// One migration to materialize.
///
/// Created by the resolver without a timestamp, stamped exactly once by the
/// allocator and consumed by the materializer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationRequest {
    category: MigrationCategory,
    name: MigrationName,
    sub_directory: Option<String>,
    timestamp: Option<Timestamp>,
}

impl MigrationRequest {
    /// Create an unstamped request.
    ///
    /// An empty `sub_directory` is treated as none, and `Current` requests
    /// never carry one.
    pub fn new(
        category: MigrationCategory,
        name: MigrationName,
        sub_directory: Option<String>,
    ) -> Self {
        let sub_directory = sub_directory
            .filter(|s| !s.is_empty())
            .filter(|_| category.is_nested());
        Self {
            category,
            name,
            sub_directory,
            timestamp: None,
        }
    }

    /// Assign the timestamp. Fails if the request was already stamped.
    pub fn stamp(mut self, timestamp: Timestamp) -> CoreResult<Self> {
        if let Some(existing) = &self.timestamp {
            return Err(CoreError::invalid_input(format!(
                "migration '{}' already has timestamp {}",
                self.name, existing
            )));
        }
        self.timestamp = Some(timestamp);
        Ok(self)
    }

    pub fn category(&self) -> MigrationCategory {
        self.category
    }

    pub fn name(&self) -> &MigrationName {
        &self.name
    }

    pub fn sub_directory(&self) -> Option<&str> {
        self.sub_directory.as_deref()
    }

    pub fn timestamp(&self) -> Option<&Timestamp> {
        self.timestamp.as_ref()
    }

    /// `{timestamp}_{name}`, or `None` while unstamped.
    pub fn directory_name(&self) -> Option<String> {
        self.timestamp
            .as_ref()
            .map(|ts| format!("{}_{}", ts, self.name))
    }
}
