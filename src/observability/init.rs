//! Tracing initialization and subscriber setup.
//!
//! Configures the tracing subscriber to write formatted diagnostics to a log
//! file in the data directory. The UI owns stdout, so nothing is ever logged
//! to the terminal.

use std::fs::OpenOptions;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::infrastructure;
use crate::Config;

/// File name of the diagnostic log inside the data directory.
const LOG_FILE_NAME: &str = "carlog.log";

/// Initializes the tracing subscriber with file-based output.
///
/// Sets up a pipeline that filters events by the configured trace level
/// (overridable via `RUST_LOG`) and appends them to
/// `<data_dir>/carlog.log`.
///
/// # Trace Level Resolution
///
/// 1. The `RUST_LOG` environment variable, if set
/// 2. `config.trace_level`, if set
/// 3. Default: `info`
///
/// # Initialization Behavior
///
/// - Creates the data directory if it doesn't exist
/// - Silently does nothing if the log file cannot be opened (observability
///   is optional)
/// - Idempotent: safe to call multiple times, only the first call takes
///   effect
pub fn init_tracing(config: &Config) {
    let data_dir = config
        .data_dir
        .clone()
        .unwrap_or_else(infrastructure::data_dir);

    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let Ok(file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(data_dir.join(LOG_FILE_NAME))
    else {
        return;
    };

    let default_level = config.trace_level.as_deref().unwrap_or("info");
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .with_target(true);

    // try_init rather than init: a second call (e.g. from tests) is a no-op.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
