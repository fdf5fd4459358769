//! Logging setup for applications embedding triage
//!
//! Installs a `tracing-subscriber` registry with an `EnvFilter` and a fmt
//! layer in either text or JSON form.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use triage_config::{LogConfig, LogFormat};

/// Initialize the global subscriber
///
/// The filter comes from `config` when present, otherwise `default_filter`.
/// An unparsable directive falls back to `info`.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed
pub fn init(config: Option<&LogConfig>, default_filter: &str) -> anyhow::Result<()> {
    let directive = config.map_or(default_filter, |c| c.filter.as_str());
    let filter = build_filter(directive);
    let format = config.map(|c| c.format).unwrap_or_default();

    let registry = tracing_subscriber::registry().with(filter);

    let result = match format {
        LogFormat::Text => {
            let fmt_layer = tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false);

            registry.with(fmt_layer).try_init()
        }
        LogFormat::Json => {
            let fmt_layer = tracing_subscriber::fmt::layer()
                .json()
                .with_target(true)
                .with_current_span(false);

            registry.with(fmt_layer).try_init()
        }
    };

    result.map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))?;

    tracing::debug!(filter = directive, ?format, "logging initialized");

    Ok(())
}

fn build_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("info"))
}
