//! Logging utilities
//!
//! Everything goes to a log file; the terminal belongs to the UI.

use std::{fs::File, path::PathBuf};

use color_eyre::eyre::{Result, WrapErr};
use lazy_static::lazy_static;
use tracing_error::ErrorLayer;
use tracing_subscriber::{
    self, filter::EnvFilter, prelude::__tracing_subscriber_SubscriberExt,
    util::SubscriberInitExt, Layer,
};

use super::paths::{get_data_dir, LOG_ENV, LOG_FILE};

lazy_static! {
    pub static ref PROJECT_NAME: String = env!("CARGO_CRATE_NAME").to_uppercase();
}

fn default_directive() -> String {
    format!("{}=info", env!("CARGO_CRATE_NAME"))
}

/// Pick the filter directive: `RUST_LOG`, then `PODCATALOG_LOGLEVEL`, then
/// `podcatalog=info`.
pub fn log_directive(rust_log: Option<String>, project_level: Option<String>) -> String {
    rust_log
        .or(project_level)
        .filter(|directive| !directive.trim().is_empty())
        .unwrap_or_else(default_directive)
}

pub fn log_path() -> PathBuf {
    get_data_dir().join(LOG_FILE.as_str())
}

/// Send `tracing` and `log` records to `<data dir>/podcatalog.log`.
pub fn initialize_logging() -> Result<()> {
    let path = log_path();
    if let Some(directory) = path.parent() {
        std::fs::create_dir_all(directory)
            .wrap_err_with(|| format!("Unable to create {}", directory.display()))?;
    }
    let log_file =
        File::create(&path).wrap_err_with(|| format!("Unable to create {}", path.display()))?;

    let directive = log_directive(
        std::env::var("RUST_LOG").ok(),
        std::env::var(LOG_ENV.as_str()).ok(),
    );
    let file_subscriber = tracing_subscriber::fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .with_writer(log_file)
        .with_target(false)
        .with_ansi(false)
        .with_filter(EnvFilter::new(directive));
    tracing_subscriber::registry()
        .with(file_subscriber)
        .with(ErrorLayer::default())
        .try_init()
        .wrap_err("Unable to install the log subscriber")?;
    Ok(())
}

/// Similar to the `std::dbg!` macro, but generates `tracing` events rather
/// than printing to stdout.
///
/// By default, the verbosity level for the generated events is `DEBUG`, but
/// this can be customized.
#[macro_export]
macro_rules! trace_dbg {
    (target: $target:expr, level: $level:expr, $ex:expr) => {{
        match $ex {
            value => {
                tracing::event!(target: $target, $level, ?value, stringify!($ex));
                value
            }
        }
    }};
    (level: $level:expr, $ex:expr) => {
        trace_dbg!(target: module_path!(), level: $level, $ex)
    };
    (target: $target:expr, $ex:expr) => {
        trace_dbg!(target: $target, level: tracing::Level::DEBUG, $ex)
    };
    ($ex:expr) => {
        trace_dbg!(level: tracing::Level::DEBUG, $ex)
    };
}
