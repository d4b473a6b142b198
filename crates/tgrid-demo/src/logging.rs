#![forbid(unsafe_code)]

//! Optional tracing output.
//!
//! The grid owns the terminal, so tracing never writes to stdout or
//! stderr. Set `TGRID_LOG_FILE` to send it to a file instead; `TGRID_LOG`
//! takes `EnvFilter` directives and defaults to `info`.

use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

pub const LOG_FILE_ENV: &str = "TGRID_LOG_FILE";
pub const LOG_FILTER_ENV: &str = "TGRID_LOG";

fn filter_from_env() -> EnvFilter {
    EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install a file subscriber at `path`.
///
/// Returns `Ok(false)` if a global subscriber was already installed.
pub fn init_file(path: &Path) -> io::Result<bool> {
    let file = File::create(path)?;
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter_from_env())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .is_ok();
    Ok(installed)
}

/// Install a file subscriber if `TGRID_LOG_FILE` is set.
pub fn init_from_env() -> io::Result<bool> {
    match std::env::var_os(LOG_FILE_ENV) {
        Some(path) if !path.is_empty() => init_file(Path::new(&path)),
        _ => Ok(false),
    }
}
