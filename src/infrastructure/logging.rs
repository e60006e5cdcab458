//! Tracing subscriber setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::infrastructure::configuration::{LogFormat, DEFAULT_LOG_FILTER};

/// Pick the log filter. Priority: CLI > `RUST_LOG` > default.
pub fn resolve_log_filter(cli: Option<String>, env: Option<String>) -> String {
    cli.or(env)
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

/// Install the global subscriber. Must be called once, before any logging.
pub fn init_tracing(log_filter: &str, format: LogFormat) {
    let registry = tracing_subscriber::registry().with(EnvFilter::new(log_filter));
    match format {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_filter_wins_over_env() {
        let filter = resolve_log_filter(
            Some("hex_blueprint=debug".to_string()),
            Some("warn".to_string()),
        );
        assert_eq!(filter, "hex_blueprint=debug");
    }

    #[test]
    fn env_filter_used_without_cli() {
        assert_eq!(resolve_log_filter(None, Some("warn".to_string())), "warn");
    }

    #[test]
    fn default_filter_when_nothing_is_set() {
        assert_eq!(resolve_log_filter(None, None), DEFAULT_LOG_FILTER);
        assert_eq!(DEFAULT_LOG_FILTER, "hex_blueprint=info");
    }

    #[test]
    fn resolved_filters_parse() {
        for filter in [resolve_log_filter(None, None), "hex_blueprint=debug,tower_http=info".to_string()] {
            assert!(EnvFilter::try_new(&filter).is_ok(), "{filter}");
        }
    }
}
