//! Logger setup

use env_logger::{Builder, Env, Target};

/// Install the stderr logger.
///
/// `RUST_LOG` wins when set; otherwise only warnings are shown, or debug
/// output from this tool with `--verbose`.
pub(crate) fn init(verbose: bool) {
    let default_filter = if verbose {
        "warn,mh_core=debug,migrate=debug"
    } else {
        "warn"
    };

    // A logger may already be installed (e.g. by a test harness).
    let _ = Builder::from_env(Env::default().default_filter_or(default_filter))
        .target(Target::Stderr)
        .format_timestamp(None)
        .try_init();
}
