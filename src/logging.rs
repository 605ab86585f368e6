//! Tracing subscriber initialisation.
//!
//! The terminal is in raw alternate-screen mode while the app runs, so
//! events go to a daily rolling file under the data directory instead of
//! stderr. `RUST_LOG` overrides the configured filter.
//!
//! Field values typed by the user are never logged; events carry field
//! names and counts only.

use crate::config::RegistrationConfig;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// File name prefix for the rolling log
const LOG_FILE_PREFIX: &str = "registration-tui.log";

/// Initialise the global tracing subscriber.
///
/// The returned guard flushes buffered events when dropped and must be held
/// for the life of the program. `None` means no log directory was available
/// and logging is disabled.
pub fn init_logging(config: &RegistrationConfig) -> anyhow::Result<Option<WorkerGuard>> {
    let Some(dir) = config.log_dir() else {
        return Ok(None);
    };
    std::fs::create_dir_all(&dir)?;

    let appender = tracing_appender::rolling::daily(&dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(writer);

    tracing_subscriber::registry()
        .with(build_filter(config))
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))?;

    tracing::info!(dir = %dir.display(), "logging initialised");
    Ok(Some(guard))
}

fn build_filter(config: &RegistrationConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::try_new(config.log_filter())
            .unwrap_or_else(|_| EnvFilter::new(crate::config::DEFAULT_LOG_FILTER))
    })
}
