//! CLI command implementations

pub(crate) mod create;
