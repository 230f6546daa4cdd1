use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const LOG_DIR: &str = "logs";
const LOG_FILE: &str = "roster.log";

/// `info` everywhere, `debug` for every `roster_*` crate (targets match by prefix).
const DEFAULT_FILTER: &str = "info,roster=debug";

/// Installs the global subscriber: stdout plus a daily rotating file under
/// `logs/`. `RUST_LOG` overrides [`DEFAULT_FILTER`].
///
/// Buffered file lines are flushed when the returned guard is dropped.
pub fn setup_logging() -> WorkerGuard {
    let (file_writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::daily(LOG_DIR, LOG_FILE));

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_writer)
                .with_ansi(false)
                .with_thread_ids(true),
        )
        .with(fmt::layer().with_writer(std::io::stdout).with_thread_ids(true))
        .init();

    guard
}
