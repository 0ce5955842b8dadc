//! File logging for the CLI. User-facing output stays on stdout/stderr.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use super::utils::ensure_dir;

pub const LOG_ENV: &str = "PROMPT_SHELF_LOG";

/// Flushes buffered log lines when dropped; keep it alive until exit.
pub struct LoggingGuard {
    _guard: WorkerGuard,
}

/// Installs a daily rolling file subscriber in `log_dir`.
///
/// Returns `None` when the directory cannot be created or a subscriber is
/// already installed; the program then runs without logs.
pub fn init(log_dir: &Path, default_filter: &str) -> Option<LoggingGuard> {
    ensure_dir(log_dir).ok()?;

    let file_appender = tracing_appender::rolling::daily(log_dir, "prompt-shelf.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("prompt_shelf=info"));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_target(true)
            .with_file(true)
            .with_line_number(true),
    );

    if subscriber.try_init().is_err() {
        return None;
    }

    install_panic_hook();

    tracing::info!(log_dir = %log_dir.display(), "tracing initialized");

    Some(LoggingGuard { _guard: guard })
}

/// Logs panics, then hands them to the previous hook so stderr still shows them.
fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        tracing::error!(panic = %panic_info, "panic");
        previous(panic_info);
    }));
}
