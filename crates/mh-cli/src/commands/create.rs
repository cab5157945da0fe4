//! Create command implementation - scaffolds the migration directories

use anyhow::{Context, Result};
use chrono::Local;
use mh_core::materializer::to_slash;
use mh_core::{
    resolve, stamp_all, AnswerProvider, Config, Intent, Materializer, MigrationResult,
    OsFilesystem,
};
use std::io::{self, Write};

use crate::cli::{CreateArgs, GlobalArgs};
use crate::prompt::Prompter;

/// Execute the create command against the real terminal
pub(crate) fn execute(args: &CreateArgs, global: &GlobalArgs) -> Result<()> {
    let mut prompter = Prompter::new(io::stdin().lock(), io::stdout());
    let mut out = io::stdout().lock();
    run(args, global, &mut prompter, &mut out)?;
    Ok(())
}

/// Resolve, stamp and materialize, then list the created files on `out`
pub(crate) fn run(
    args: &CreateArgs,
    global: &GlobalArgs,
    provider: &mut dyn AnswerProvider,
    out: &mut dyn Write,
) -> Result<Vec<MigrationResult>> {
    let root = global.dir.as_path();
    if !root.is_dir() {
        anyhow::bail!("Directory '{}' does not exist", to_slash(root));
    }

    let config = match &global.config {
        Some(path) => Config::load(path),
        None => Config::load_or_default(root),
    }
    .context("Failed to load configuration")?;

    let requests = resolve(Intent::from(args), provider, config.empty_selection)?;
    let requests = stamp_all(requests, Local::now().naive_local())?;

    let materializer = Materializer::new(&OsFilesystem, root)
        .with_layout(config.layout())
        .with_line_ending(config.line_ending());

    let results = if args.dry_run {
        materializer.plan_all(&requests)?
    } else {
        materializer
            .materialize_all(&requests)
            .context("Failed to create migration files")?
    };

    print_results(out, &results, args.dry_run).context("Failed to write output")?;
    Ok(results)
}

/// One header line, then every file path with `/` separators
fn print_results(out: &mut dyn Write, results: &[MigrationResult], dry_run: bool) -> io::Result<()> {
    if dry_run {
        writeln!(out, "Would create:")?;
    } else {
        writeln!(out, "Created files:")?;
    }
    for result in results {
        for path in result.display_paths() {
            writeln!(out, "  - {}", path)?;
        }
    }
    out.flush()
}

#[cfg(test)]
#[path = "create_test.rs"]
mod tests;
