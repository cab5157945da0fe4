//! mh-core - Core library for migrate-helper
//!
//! This crate turns a user's intent (flags or interactive answers) into
//! migration requests, stamps them with unique timestamps and materializes
//! the `up.sql`/`down.sql` pairs on disk using Latin-1 encoded templates.

pub mod allocator;
pub mod category;
pub mod config;
pub mod encoding;
pub mod error;
pub mod fs;
pub mod materializer;
pub mod migration_name;
pub mod request;
pub mod resolver;
pub mod template;
pub mod timestamp;

pub use allocator::{allocate, allocate_from, stamp_all};
pub use category::MigrationCategory;
pub use config::{Config, EmptySelection, LineEndingSetting};
pub use encoding::encode_latin1;
pub use error::{CoreError, CoreResult};
pub use fs::{Filesystem, OsFilesystem};
pub use materializer::{Layout, Materializer, MigrationResult};
pub use migration_name::MigrationName;
pub use request::MigrationRequest;
pub use resolver::{resolve, AnswerProvider, Answers, Intent};
pub use template::{LineEnding, Template};
pub use timestamp::Timestamp;
