//! Configuration shared by clients embedding the application-service handler.
//!
//! [`Config`] is loaded through `ortho_config`, so values layer in the
//! usual order, lowest precedence first: built-in defaults, a TOML file
//! (named with `--config-path` or `STEAMAPPS_CONFIG_PATH`), `STEAMAPPS_*`
//! environment variables, and command-line flags such as `--log-filter`.
//!
//! ```rust,ignore
//! let config = steamapps_config::Config::load()?;
//! println!("filter: {}", config.log_filter());
//! ```

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

mod defaults;
mod logging;

pub use defaults::{
    DEFAULT_LOG_FILTER, DISPATCH_LOG_TARGET, ENV_CLIENT_ID, ENV_CONFIG_PATH, ENV_LOG_FILTER,
    ENV_LOG_FORMAT, REQUESTS_LOG_TARGET, default_log_filter, default_log_filter_string,
    default_log_format,
};
pub use logging::{LogFormat, LogFormatParseError};

/// Resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, OrthoConfig)]
#[ortho_config(prefix = "STEAMAPPS")]
pub struct Config {
    /// `tracing` filter expression, e.g. `info` or `steamapps::dispatch=debug`.
    #[ortho_config(default = default_log_filter_string())]
    pub log_filter: String,
    /// Output format for the log subscriber.
    #[ortho_config(default = default_log_format())]
    pub log_format: LogFormat,
    /// Identifier of the owning client, attached to every posted callback
    /// when present.
    pub client_id: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter_string(),
            log_format: default_log_format(),
            client_id: None,
        }
    }
}

impl Config {
    /// Returns the configured log filter expression.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        self.log_filter.as_str()
    }

    /// Returns the configured log format.
    #[must_use]
    pub const fn log_format(&self) -> LogFormat {
        self.log_format
    }

    /// Returns the client identifier attached to callbacks, if any.
    #[must_use]
    pub const fn client_id(&self) -> Option<u64> {
        self.client_id
    }
}
