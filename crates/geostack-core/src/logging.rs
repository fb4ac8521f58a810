//! Tracing subscriber bootstrap.

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use crate::{CoreError, CoreResult};

/// Initialize the global tracing subscriber, writing to stdout.
///
/// Uses `RUST_LOG` if set, otherwise falls back to `log_level`. Calling this
/// more than once returns an error from the second call on; library code
/// should never call it, only binaries and test harnesses.
///
/// # Errors
/// Returns an error if the filter cannot be parsed or a global subscriber is
/// already installed.
pub fn init_tracing(log_level: &str) -> CoreResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(log_level)?)
        .with_target(true)
        .try_init()
        .map_err(|e| CoreError::Config(format!("tracing already initialized: {e}")))
}

/// Like [`init_tracing`], but output goes through the test harness capture.
///
/// # Errors
/// Same as [`init_tracing`].
pub fn init_test_tracing(log_level: &str) -> CoreResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(log_level)?)
        .with_test_writer()
        .try_init()
        .map_err(|e| CoreError::Config(format!("tracing already initialized: {e}")))
}

fn env_filter(log_level: &str) -> CoreResult<EnvFilter> {
    let rust_log = std::env::var("RUST_LOG").ok();
    let directives = filter_directives(rust_log.as_deref(), log_level);
    let filter = EnvFilter::try_new(directives)
        .with_context(|| format!("invalid log filter: {directives}"))?;
    Ok(filter)
}

/// `RUST_LOG` wins over the configured level unless it is blank.
fn filter_directives<'a>(rust_log: Option<&'a str>, log_level: &'a str) -> &'a str {
    match rust_log.map(str::trim) {
        Some(directives) if !directives.is_empty() => directives,
        _ => log_level,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_prefer_rust_log_over_log_level() {
        assert_eq!(
            filter_directives(Some("geostack_location_http=debug"), "info"),
            "geostack_location_http=debug"
        );
    }

    #[test]
    fn test_should_fall_back_on_log_level() {
        assert_eq!(filter_directives(None, "warn"), "warn");
        assert_eq!(filter_directives(Some("  "), "debug"), "debug");
    }

    #[test]
    fn test_should_reject_invalid_log_level() {
        let err = EnvFilter::try_new(filter_directives(None, "geostack=loud"));
        assert!(err.is_err());
    }
}
