use crate::logging::LogFormat;

/// Target carrying one `debug` event per outbound request.
pub const REQUESTS_LOG_TARGET: &str = "steamapps::requests";

/// Target carrying one `warn` event per dropped inbound response.
pub const DISPATCH_LOG_TARGET: &str = "steamapps::dispatch";

/// Default filter: warnings everywhere, with both handler targets named so
/// dropped responses stay visible when the global level is tightened.
pub const DEFAULT_LOG_FILTER: &str = "warn,steamapps::dispatch=warn,steamapps::requests=info";

/// Environment variable naming a TOML configuration file.
pub const ENV_CONFIG_PATH: &str = "STEAMAPPS_CONFIG_PATH";

/// Environment variable overriding the log filter.
pub const ENV_LOG_FILTER: &str = "STEAMAPPS_LOG_FILTER";

/// Environment variable overriding the log format.
pub const ENV_LOG_FORMAT: &str = "STEAMAPPS_LOG_FORMAT";

/// Environment variable naming the client attached to posted callbacks.
pub const ENV_CLIENT_ID: &str = "STEAMAPPS_CLIENT_ID";

/// Default log filter expression.
#[must_use]
pub const fn default_log_filter() -> &'static str {
    DEFAULT_LOG_FILTER
}

/// Owned filter for the configuration derive's default hook.
#[must_use]
pub fn default_log_filter_string() -> String {
    DEFAULT_LOG_FILTER.to_owned()
}

/// Default logging format.
#[must_use]
pub const fn default_log_format() -> LogFormat {
    LogFormat::Json
}
