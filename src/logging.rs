//! Diagnostic logging.
//!
//! The TUI owns the screen, so logs only ever go to a file. Nothing is
//! installed unless `--log-file` is given or `FOLIO_LOG` is set.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;

/// Filter directives, e.g. `FOLIO_LOG=debug`.
pub const LOG_ENV: &str = "FOLIO_LOG";

const LOG_FILE: &str = "folio.log";

/// Where logs should go, if anywhere.
///
/// An explicit path wins; otherwise a set `FOLIO_LOG` logs next to the
/// config file.
pub fn log_path(flag: Option<&Path>, env_filter: Option<&str>) -> Result<Option<PathBuf>> {
    match (flag, env_filter) {
        (Some(path), _) => Ok(Some(path.to_path_buf())),
        (None, Some(_)) => Ok(Some(Config::config_dir()?.join(LOG_FILE))),
        (None, None) => Ok(None),
    }
}

/// Install the file subscriber. Returns the log path when one was set up.
pub fn init_logging(flag: Option<&Path>) -> Result<Option<PathBuf>> {
    let directives = std::env::var(LOG_ENV).ok();
    let Some(path) = log_path(flag, directives.as_deref())? else {
        return Ok(None);
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file));
    let filter_layer = directives
        .as_deref()
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()
        .context("Logging was already initialized")?;

    Ok(Some(path))
}
