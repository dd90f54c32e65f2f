#![forbid(unsafe_code)]

//! Logging targets and subscriber setup.
//!
//! Library code only emits `tracing` events under the targets below; it never
//! installs a subscriber. Applications (and the test harness) opt into
//! [`init_logging`] through the `logging` feature.
//!
//! The filter is read from `DRAGSORT_LOG` (same syntax as `RUST_LOG`) and
//! falls back to the caller's default directive.

/// Gesture lifecycle transitions (press, drag start, commit, cancel).
pub const TARGET_GESTURE: &str = "dragsort.gesture";
/// Auto-scroll start/stop and clamped steps.
pub const TARGET_AUTOSCROLL: &str = "dragsort.autoscroll";
/// Pointer-capture acquire/release bookkeeping.
pub const TARGET_CAPTURE: &str = "dragsort.capture";
/// Configuration loading and validation.
pub const TARGET_CONFIG: &str = "dragsort.config";

/// Environment variable holding the filter directive.
pub const LOG_ENV_VAR: &str = "DRAGSORT_LOG";

/// Output format for [`init_logging`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable single-line output.
    #[default]
    Pretty,
    /// One JSON object per event, for production log shipping.
    Json,
}

/// Error installing the global subscriber.
#[cfg(feature = "logging")]
#[derive(Debug)]
pub struct LoggingInitError(Box<dyn std::error::Error + Send + Sync + 'static>);

#[cfg(feature = "logging")]
impl std::fmt::Display for LoggingInitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "failed to install tracing subscriber: {}", self.0)
    }
}

#[cfg(feature = "logging")]
impl std::error::Error for LoggingInitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.0.as_ref())
    }
}

/// Install a global `fmt` subscriber filtered by `DRAGSORT_LOG`.
///
/// Fails if a global subscriber is already installed.
#[cfg(feature = "logging")]
pub fn init_logging(format: LogFormat, default_directive: &str) -> Result<(), LoggingInitError> {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_new(default_directive))
        .map_err(|e| LoggingInitError(Box::new(e)))?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    }
    .map_err(LoggingInitError)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn targets_share_crate_prefix() {
        for target in [TARGET_GESTURE, TARGET_AUTOSCROLL, TARGET_CAPTURE, TARGET_CONFIG] {
            assert!(target.starts_with("dragsort."));
        }
    }

    #[test]
    fn default_format_is_pretty() {
        assert_eq!(LogFormat::default(), LogFormat::Pretty);
    }
}
