use crate::config::LoggingConfig;
use tracing::Level;
use tracing_subscriber::{fmt, EnvFilter};

// -------- level helpers --------
fn parse_tracing_level(s: &str) -> Option<Level> {
    match s.to_ascii_lowercase().as_str() {
        "trace" => Some(Level::TRACE),
        "debug" => Some(Level::DEBUG),
        "info" => Some(Level::INFO),
        "warn" => Some(Level::WARN),
        "error" => Some(Level::ERROR),
        "off" | "none" => None,
        _ => Some(Level::INFO),
    }
}

/// Filter directive for the configured console level; `RUST_LOG` wins when set.
fn build_filter(cfg: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let directive = match parse_tracing_level(&cfg.console_level) {
            Some(level) => level.to_string().to_ascii_lowercase(),
            None => "off".to_string(),
        };
        EnvFilter::new(directive)
    })
}

// -------- public init --------

/// Install the global console subscriber. Later calls are no-ops.
pub fn init_logging(cfg: &LoggingConfig) {
    // Bridge `log` → `tracing` *before* installing the subscriber
    let _ = tracing_log::LogTracer::init();

    let builder = fmt()
        .with_env_filter(build_filter(cfg))
        .with_target(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    let _ = if cfg.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}
