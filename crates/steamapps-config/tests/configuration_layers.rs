//! Precedence and fail-fast behaviour of configuration layering.

use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};

use once_cell::sync::Lazy;
use ortho_config::OrthoConfig;
use rstest::{fixture, rstest};
use tempfile::TempDir;

use steamapps_config::{
    Config, ENV_CLIENT_ID, ENV_CONFIG_PATH, ENV_LOG_FILTER, ENV_LOG_FORMAT, LogFormat,
    default_log_filter, default_log_format,
};

static ENV_MUTEX: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

/// Owns the process environment for one test and restores it on drop.
struct Layers {
    temp_dir: TempDir,
    args: Vec<OsString>,
    overrides: Vec<(&'static str, Option<OsString>)>,
    _guard: MutexGuard<'static, ()>,
}

impl Layers {
    fn new() -> Self {
        let guard = ENV_MUTEX
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let mut layers = Self {
            temp_dir: TempDir::new().expect("create temp dir"),
            args: vec![OsString::from("steamapps")],
            overrides: Vec::new(),
            _guard: guard,
        };
        for key in [ENV_CONFIG_PATH, ENV_LOG_FILTER, ENV_LOG_FORMAT, ENV_CLIENT_ID] {
            layers.unset(key);
        }
        layers
    }

    fn file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        fs::write(&path, contents).expect("write config file");
        path
    }

    fn config_flag(&mut self, contents: &str) {
        let path = self.file("steamapps.toml", contents);
        self.arg("--config-path");
        self.arg(path);
    }

    fn arg(&mut self, value: impl Into<OsString>) {
        self.args.push(value.into());
    }

    fn env(&mut self, key: &'static str, value: impl AsRef<OsStr>) {
        self.overrides.push((key, std::env::var_os(key)));
        // Environment mutation is `unsafe` on the 2024 edition; the mutex
        // serialises every test in this binary and `Drop` restores values.
        unsafe { std::env::set_var(key, value) };
    }

    fn unset(&mut self, key: &'static str) {
        self.overrides.push((key, std::env::var_os(key)));
        unsafe { std::env::remove_var(key) };
    }

    fn load(&self) -> Config {
        Config::load_from_iter(self.args.clone())
            .unwrap_or_else(|error| panic!("configuration failed to load: {error}"))
    }
}

impl Drop for Layers {
    fn drop(&mut self) {
        while let Some((key, previous)) = self.overrides.pop() {
            match previous {
                Some(value) => unsafe { std::env::set_var(key, value) },
                None => unsafe { std::env::remove_var(key) },
            }
        }
    }
}

#[fixture]
fn layers() -> Layers {
    Layers::new()
}

#[rstest]
fn defaults_apply_without_any_layer(layers: Layers) {
    let config = layers.load();
    assert_eq!(config.log_filter(), default_log_filter());
    assert_eq!(config.log_format(), default_log_format());
    assert_eq!(config.client_id(), None);
    assert_eq!(config, Config::default());
}

#[rstest]
fn file_fills_missing_keys_with_defaults(mut layers: Layers) {
    layers.config_flag("log_format = \"compact\"\n");

    let config = layers.load();
    assert_eq!(config.log_format(), LogFormat::Compact);
    assert_eq!(config.log_filter(), default_log_filter());
}

#[rstest]
fn file_can_be_named_by_environment(mut layers: Layers) {
    let path = layers.file("env.toml", "client_id = 7\n");
    layers.env(ENV_CONFIG_PATH, path.as_os_str());

    assert_eq!(layers.load().client_id(), Some(7));
}

#[rstest]
fn environment_overrides_file(mut layers: Layers) {
    layers.config_flag("log_filter = \"warn\"\nclient_id = 7\n");
    layers.env(ENV_LOG_FILTER, "steamapps::dispatch=debug");
    layers.env(ENV_CLIENT_ID, "42");

    let config = layers.load();
    assert_eq!(config.log_filter(), "steamapps::dispatch=debug");
    assert_eq!(config.client_id(), Some(42));
    assert_eq!(config.log_format(), LogFormat::Json);
}

#[rstest]
fn flags_override_environment(mut layers: Layers) {
    layers.env(ENV_LOG_FORMAT, "json");
    layers.env(ENV_CLIENT_ID, "42");
    layers.arg("--log-format");
    layers.arg("compact");
    layers.arg("--client-id");
    layers.arg("9");

    let config = layers.load();
    assert_eq!(config.log_format(), LogFormat::Compact);
    assert_eq!(config.client_id(), Some(9));
}

#[rstest]
fn absent_overrides_keep_lower_layers(mut layers: Layers) {
    layers.config_flag("client_id = 7\n");
    layers.env(ENV_LOG_FILTER, "debug");

    let config = layers.load();
    assert_eq!(config.client_id(), Some(7));
    assert_eq!(config.log_filter(), "debug");
}

#[rstest]
#[case::malformed_file(Some("client_id = = 3\n"), None)]
#[case::unknown_format(None, Some((ENV_LOG_FORMAT, "xml")))]
#[case::non_numeric_client(None, Some((ENV_CLIENT_ID, "alice")))]
fn bad_values_fail_loading(
    mut layers: Layers,
    #[case] file: Option<&str>,
    #[case] env: Option<(&'static str, &str)>,
) {
    if let Some(contents) = file {
        layers.config_flag(contents);
    }
    if let Some((key, value)) = env {
        layers.env(key, value);
    }

    let outcome = Config::load_from_iter(layers.args.clone());
    assert!(outcome.is_err(), "expected failure, got {outcome:?}");
}
