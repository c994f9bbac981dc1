//! Tracing initialization: console output plus a daily-rolling file log.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the global subscriber.
///
/// The returned guard must be held for the lifetime of the process so
/// buffered file output is flushed on shutdown.
pub fn init() -> WorkerGuard {
    let file_appender = rolling::daily("logs", "homewarden.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    #[cfg(debug_assertions)]
    let console_layer = fmt::layer()
        .pretty()
        .with_file(true)
        .with_line_number(true);
    #[cfg(not(debug_assertions))]
    let console_layer = fmt::layer().with_file(false).with_line_number(false);

    let file_layer = fmt::layer().with_writer(non_blocking).with_ansi(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .init();

    guard
}
