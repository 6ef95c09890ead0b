//! Structured logging setup
//!
//! Console output goes to stderr and shows only warnings and errors unless
//! verbose mode is on. An optional log file always receives debug detail.
//! `BINDIGO_LOG` (or `RUST_LOG`) overrides the console filter.
//!
//! The global subscriber is installed once the configuration is known, so
//! warnings raised while loading it go through `with_bootstrap_logging`.

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::error::BindigoResult;

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "BINDIGO_LOG";

/// Console filter directive for the given verbosity.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "bindigo=debug,warn"
    } else {
        "warn"
    }
}

fn console_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)))
}

/// Run `f` with a temporary stderr subscriber showing warnings and errors.
pub fn with_bootstrap_logging<T>(ansi: bool, f: impl FnOnce() -> T) -> T {
    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .without_time()
            .with_ansi(ansi)
            .with_filter(LevelFilter::WARN),
    );
    tracing::subscriber::with_default(subscriber, f)
}

/// Install the global subscriber. `ansi` controls escape codes on the
/// console layer only; the log file is always plain. Safe to call more than
/// once; later calls are ignored.
pub fn init_logging(verbose: bool, ansi: bool, log_file: Option<&Path>) -> BindigoResult<()> {
    let console = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .with_ansi(ansi)
        .with_filter(console_filter(verbose));

    let file = match log_file {
        Some(path) => {
            let handle = File::create(path)?;
            Some(
                fmt::layer()
                    .with_writer(Arc::new(handle))
                    .with_ansi(false)
                    .with_filter(LevelFilter::DEBUG),
            )
        }
        None => None,
    };

    let _ = tracing_subscriber::registry()
        .with(console)
        .with(file)
        .try_init();

    tracing::debug!(version = crate::version::VERSION, "logging initialised");
    Ok(())
}
