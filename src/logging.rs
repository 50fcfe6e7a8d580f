//! File-backed tracing setup.
//!
//! The terminal belongs to the UI, so log lines only go to a file, and only
//! when one is requested. `RUST_LOG` overrides the default `info` filter.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Install the global subscriber appending to `path`.
///
/// Fails if a global subscriber is already installed; the first one stays.
pub fn init(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| io::Error::other(format!("tracing subscriber already installed: {e}")))
}
