//! Structured logging setup for embedding applications.
//!
//! The handler writes to two targets: `steamapps::requests` gets one `debug`
//! event per outbound message and `steamapps::dispatch` gets one `warn`
//! event per response dropped under the recoverable policy. The default
//! filter from [`steamapps_config`] names both.

use std::io::{self, IsTerminal};

use once_cell::sync::OnceCell;
use tracing::{Subscriber, subscriber::SetGlobalDefaultError};
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::EnvFilter;

use steamapps_config::{Config, LogFormat};

static INSTALLED_FORMAT: OnceCell<LogFormat> = OnceCell::new();

pub(crate) type BoxedSubscriber = Box<dyn Subscriber + Send + Sync>;

/// Proof that the global subscriber is installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TelemetryHandle {
    format: LogFormat,
}

impl TelemetryHandle {
    /// Format of the subscriber that won installation.
    #[must_use]
    pub const fn format(&self) -> LogFormat {
        self.format
    }
}

/// Errors encountered while configuring telemetry.
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// The configured filter expression does not parse.
    #[error("invalid log filter '{expression}': {message}")]
    Filter {
        /// Expression as configured.
        expression: String,
        /// Parser complaint.
        message: String,
    },
    /// Another subscriber is already installed.
    #[error("failed to install telemetry subscriber: {0}")]
    Subscriber(#[source] SetGlobalDefaultError),
}

/// Installs the global `tracing` subscriber described by `config`.
///
/// Only the first successful call installs anything; later calls return the
/// handle of that installation, even if `config` differs.
///
/// # Errors
///
/// Returns [`TelemetryError::Filter`] for an unparsable filter and
/// [`TelemetryError::Subscriber`] when a subscriber was installed by other
/// code first.
///
/// # Examples
///
/// ```rust
/// use steamapps::telemetry;
/// use steamapps_config::Config;
///
/// # fn main() -> Result<(), steamapps::TelemetryError> {
/// let config = Config::default();
/// let first = telemetry::initialise(&config)?;
/// let second = telemetry::initialise(&config)?;
/// assert_eq!(first, second);
/// # Ok(())
/// # }
/// ```
pub fn initialise(config: &Config) -> Result<TelemetryHandle, TelemetryError> {
    INSTALLED_FORMAT
        .get_or_try_init(|| {
            let subscriber = build_subscriber(config, io::stderr, io::stderr().is_terminal())?;
            tracing::subscriber::set_global_default(subscriber)
                .map_err(TelemetryError::Subscriber)?;
            Ok(config.log_format())
        })
        .map(|format| TelemetryHandle { format: *format })
}

/// Builds the subscriber for `config` writing through `writer`.
pub(crate) fn build_subscriber<W>(
    config: &Config,
    writer: W,
    ansi: bool,
) -> Result<BoxedSubscriber, TelemetryError>
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let filter = EnvFilter::try_new(config.log_filter()).map_err(|error| {
        TelemetryError::Filter {
            expression: config.log_filter().to_owned(),
            message: error.to_string(),
        }
    })?;

    let builder = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(writer)
        .with_ansi(ansi && !config.log_format().is_structured())
        .with_timer(fmt::time::UtcTime::rfc_3339());

    Ok(match config.log_format() {
        LogFormat::Json => Box::new(builder.json().flatten_event(true).finish()),
        LogFormat::Compact => Box::new(builder.compact().finish()),
    })
}

#[cfg(test)]
mod tests {
    use steamapps_config::{DISPATCH_LOG_TARGET, REQUESTS_LOG_TARGET};

    use super::*;
    use crate::dispatch::DISPATCH_TARGET;
    use crate::requests::REQUESTS_TARGET;

    #[test]
    fn rejects_malformed_filter() {
        let config = Config {
            log_filter: "steamapps::dispatch=verbose".to_owned(),
            ..Config::default()
        };
        let Err(error) = build_subscriber(&config, io::sink, false) else {
            panic!("filter should not parse");
        };
        assert!(matches!(
            error,
            TelemetryError::Filter { ref expression, .. } if expression == "steamapps::dispatch=verbose"
        ));
    }

    #[test]
    fn default_filter_builds() {
        assert!(build_subscriber(&Config::default(), io::sink, false).is_ok());
    }

    #[test]
    fn emitting_targets_match_configured_names() {
        assert_eq!(DISPATCH_TARGET, DISPATCH_LOG_TARGET);
        assert_eq!(REQUESTS_TARGET, REQUESTS_LOG_TARGET);
    }
}
