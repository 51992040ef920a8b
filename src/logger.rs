pub use tracing::{debug, error, info, instrument, trace, warn};
use tracing_subscriber::prelude::*;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, fmt::{self, format::FmtSpan}};

const DEFAULT_FILTER: &str = "info";

fn build_filter() -> (EnvFilter, bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // Span close events carry per-stage busy/idle times.
    let is_debug = env_filter.to_string().contains("debug")
        || env_filter.to_string().contains("trace");

    (env_filter, is_debug)
}

/// Installs the global subscriber, failing if one is already set.
pub fn try_init() -> Result<(), TryInitError> {
    let (env_filter, is_debug) = build_filter();

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_timer(fmt::time::uptime())
        .with_span_events(if is_debug {
            FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
}

pub fn init() {
    if let Err(e) = try_init() {
        eprintln!("logger already initialized: {e}");
    }
}
