//! Diagnostic logging via `tracing-subscriber`.
//!
//! Diagnostics go to stderr so they never interleave with results on stdout.
//! `COUNTRYBROWSER_LOG` takes a full filter directive and overrides the
//! configured level.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::config::LogConfig;
use crate::style::color_enabled;

pub const LOG_ENV_VAR: &str = "COUNTRYBROWSER_LOG";

/// HTTP stack crates that are chatty below `warn`.
const NOISY: &[(&str, &str)] = &[
    ("hyper", "warn"),
    ("hyper_util", "warn"),
    ("reqwest", "warn"),
    ("rustls", "warn"),
    ("h2", "warn"),
];

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("invalid log filter {filter:?}: {source}")]
    Filter {
        filter: String,
        source: tracing_subscriber::filter::ParseError,
    },
    #[error("logging already initialized: {0}")]
    Init(#[from] tracing_subscriber::util::TryInitError),
}

/// Build the filter directive string from the configured level and an
/// optional environment override.
pub fn filter_directives(level: &str, env_override: Option<&str>) -> String {
    if let Some(directive) = env_override.map(str::trim).filter(|d| !d.is_empty()) {
        return directive.to_string();
    }

    let mut directives = vec![level.to_string()];
    for (target, lvl) in NOISY {
        directives.push(format!("{target}={lvl}"));
    }
    directives.join(",")
}

fn build_env_filter(directives: &str) -> Result<EnvFilter, LoggingError> {
    EnvFilter::try_new(directives).map_err(|source| LoggingError::Filter {
        filter: directives.to_string(),
        source,
    })
}

/// Install the global subscriber. Call once, before the dataset is fetched.
pub fn init(config: &LogConfig) -> Result<(), LoggingError> {
    let env_override = std::env::var(LOG_ENV_VAR).ok();
    let directives = filter_directives(&config.level, env_override.as_deref());
    let filter = build_env_filter(&directives)?;

    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(color_enabled())
        .with_target(true)
        .compact()
        .with_filter(filter);

    tracing_subscriber::registry().with(console_layer).try_init()?;

    tracing::trace!(%directives, "logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directives_from_level() {
        let d = filter_directives("info", None);
        assert!(d.starts_with("info,"));
        assert!(d.contains("hyper=warn"));
        assert!(d.contains("reqwest=warn"));
    }

    #[test]
    fn env_override_wins() {
        assert_eq!(
            filter_directives("warn", Some("cb_backend=debug")),
            "cb_backend=debug"
        );
    }

    #[test]
    fn blank_env_override_ignored() {
        let d = filter_directives("error", Some("  "));
        assert!(d.starts_with("error,"));
    }

    #[test]
    fn default_directives_parse() {
        let d = filter_directives(&LogConfig::default().level, None);
        assert!(build_env_filter(&d).is_ok());
    }

    #[test]
    fn bad_directive_is_filter_error() {
        let err = build_env_filter("cb_core=loud").unwrap_err();
        assert!(matches!(err, LoggingError::Filter { .. }));
    }
}
