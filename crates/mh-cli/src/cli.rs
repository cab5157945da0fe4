//! CLI argument definitions using clap derive API

use clap::{Args, Parser};
use mh_core::Intent;
use std::path::PathBuf;

/// migrate - scaffold timestamped up/down SQL migrations
///
/// Without NAME the command asks for the name, sub-directory and categories
/// interactively.
#[derive(Parser, Debug)]
#[command(name = "migrate")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Migration options
    #[command(flatten)]
    pub create: CreateArgs,
}

/// Options that shape where and how the command runs
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Directory to create migrations in
    #[arg(short = 'C', long = "dir", default_value = ".")]
    pub dir: PathBuf,

    /// Config file (default: migrate.yml in --dir, if present)
    #[arg(short, long, env = "MIGRATE_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Arguments describing the migration to create
#[derive(Args, Debug, Clone, Default)]
pub struct CreateArgs {
    /// Migration name (omit to answer prompts instead)
    pub name: Option<String>,

    /// Create scripts in the DDL folder
    #[arg(long)]
    pub ddl: bool,

    /// Create scripts in the DML folder
    #[arg(long)]
    pub dml: bool,

    /// Create scripts in both the DDL and DML folders
    #[arg(long)]
    pub all: bool,

    /// Sub-directory inside the DDL/DML folder
    #[arg(long, value_name = "DIR")]
    pub sub: Option<String>,

    /// Print the paths that would be created without writing anything
    #[arg(long)]
    pub dry_run: bool,
}

impl From<&CreateArgs> for Intent {
    fn from(args: &CreateArgs) -> Self {
        Intent {
            want_all: args.all,
            want_ddl: args.ddl,
            want_dml: args.dml,
            sub_directory: args.sub.clone().unwrap_or_default(),
            name: args.name.clone(),
        }
    }
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
