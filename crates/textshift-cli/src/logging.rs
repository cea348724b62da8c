//! Tracing subscriber setup.
//!
//! Library crates log through `log`; the fmt subscriber picks those records up
//! through tracing-subscriber's `tracing-log` bridge.

use tracing_subscriber::EnvFilter;

/// Filter used when nothing else is configured.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Pick the filter directive: `RUST_LOG`, then `--verbose`, then the config.
pub fn filter_directive(rust_log: Option<&str>, verbose: bool, configured: Option<&str>) -> String {
    match (rust_log, verbose, configured) {
        (Some(env), _, _) if !env.trim().is_empty() => env.to_string(),
        (_, true, _) => "debug".to_string(),
        (_, _, Some(level)) if !level.trim().is_empty() => level.to_string(),
        _ => DEFAULT_LOG_LEVEL.to_string(),
    }
}

/// Install the global stderr subscriber. Later calls are no-ops.
pub fn init(verbose: bool, configured: Option<&str>) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let directive = filter_directive(rust_log.as_deref(), verbose, configured);

    let (filter, rejected) = match EnvFilter::try_new(&directive) {
        Ok(filter) => (filter, None),
        Err(e) => (EnvFilter::new(DEFAULT_LOG_LEVEL), Some(e)),
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    if let Some(e) = rejected {
        tracing::warn!("Ignoring invalid log filter '{directive}': {e}");
    }
}

// ============================================================================
// Tests
// ============================================================================
