//! Logging for Imago
//!
//! Installs a `tracing-subscriber` registry with an `EnvFilter` and a `fmt`
//! layer in the configured format

use imago_config::{LogFormat, TelemetryConfig};
use tracing_subscriber::{EnvFilter, Layer, Registry, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when neither the caller nor the configuration sets one
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Initialize logging from configuration
///
/// `override_filter` (usually from the command line) takes precedence over the
/// configured `log_filter`. Invalid directives fall back to
/// [`DEFAULT_LOG_FILTER`].
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed
pub fn init(config: Option<&TelemetryConfig>, override_filter: Option<&str>) -> anyhow::Result<()> {
    let directives = filter_directives(config, override_filter);
    let filter = EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let format = config.map(|c| c.format).unwrap_or_default();

    tracing_subscriber::registry()
        .with(fmt_layer(format))
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))?;

    tracing::debug!(filter = directives, ?format, "logging initialized");

    Ok(())
}

/// Pick the filter directives to use, most specific source first
fn filter_directives<'a>(config: Option<&'a TelemetryConfig>, override_filter: Option<&'a str>) -> &'a str {
    override_filter
        .or_else(|| config.and_then(|c| c.log_filter.as_deref()))
        .unwrap_or(DEFAULT_LOG_FILTER)
}

fn fmt_layer(format: LogFormat) -> Box<dyn Layer<Registry> + Send + Sync> {
    let layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    match format {
        LogFormat::Pretty => layer.pretty().boxed(),
        LogFormat::Compact => layer.compact().boxed(),
        LogFormat::Json => layer.json().boxed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_filter(filter: &str) -> TelemetryConfig {
        TelemetryConfig {
            log_filter: Some(filter.to_owned()),
            format: LogFormat::Compact,
        }
    }

    #[test]
    fn falls_back_to_default_filter() {
        assert_eq!(filter_directives(None, None), DEFAULT_LOG_FILTER);
        assert_eq!(filter_directives(Some(&TelemetryConfig::default()), None), DEFAULT_LOG_FILTER);
    }

    #[test]
    fn configured_filter_is_used() {
        let config = config_with_filter("imago_server=debug");
        assert_eq!(filter_directives(Some(&config), None), "imago_server=debug");
    }

    #[test]
    fn subscriber_installs_only_once() {
        let config = config_with_filter("debug");

        assert!(init(Some(&config), None).is_ok());
        assert!(init(Some(&config), None).is_err());
    }

    #[test]
    fn override_beats_configuration() {
        let config = config_with_filter("warn");
        assert_eq!(filter_directives(Some(&config), Some("trace")), "trace");
    }
}
