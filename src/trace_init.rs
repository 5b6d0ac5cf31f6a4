//! JSON trace log for host builds with the `trace` feature.
//!
//! Spans from the matcher and the editing session are written to
//! `<log_dir>/translit-trace.jsonl`. `RUST_LOG` overrides the default filter.

/// Default directives when `RUST_LOG` is unset.
#[cfg_attr(not(feature = "trace"), allow(dead_code))]
const DEFAULT_FILTER: &str = "translit_engine=debug,translit_core=debug,translit_session=debug";

#[cfg(feature = "trace")]
mod enabled {
    use std::path::Path;
    use std::sync::OnceLock;

    use tracing_appender::non_blocking::WorkerGuard;
    use tracing_subscriber::fmt::format::FmtSpan;
    use tracing_subscriber::EnvFilter;

    const LOG_FILE: &str = "translit-trace.jsonl";

    /// Keeps the writer thread flushing for the life of the host process.
    static GUARD: OnceLock<WorkerGuard> = OnceLock::new();

    pub fn init_tracing(log_dir: &Path) {
        GUARD.get_or_init(|| {
            let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE);
            let (writer, guard) = tracing_appender::non_blocking(file_appender);

            let filter = EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(super::DEFAULT_FILTER));

            // Another subscriber may already be installed by the host.
            let _ = tracing_subscriber::fmt()
                .json()
                .with_writer(writer)
                .with_target(true)
                .with_span_events(FmtSpan::CLOSE)
                .with_env_filter(filter)
                .try_init();
            guard
        });
    }
}

#[cfg(feature = "trace")]
pub use enabled::init_tracing;

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: &std::path::Path) {}
