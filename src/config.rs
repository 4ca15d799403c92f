use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Default downstream API root
pub const DEFAULT_SPLITWISE_BASE: &str = "https://secure.splitwise.com/api/v3.0";

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub splitwise: SplitwiseSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8000 }

/// Downstream API settings; the key is not checked at startup
#[derive(Debug, Clone, Deserialize)]
pub struct SplitwiseSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub api_key: String,
}

impl Default for SplitwiseSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: String::new(),
        }
    }
}

fn default_base_url() -> String { DEFAULT_SPLITWISE_BASE.to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with GATEWAY__)
    /// 5. `API_KEY` / `SPLITWISE_BASE_URL`
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., GATEWAY__SERVER__PORT -> server.port
            .add_source(gateway_env())
            .build()?;

        apply_legacy_env(settings)?.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(gateway_env())
            .build()?;

        apply_legacy_env(settings)?.try_deserialize()
    }
}

fn gateway_env() -> Environment {
    Environment::with_prefix("GATEWAY")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

/// Let the unprefixed variables used by existing deployments win
fn apply_legacy_env(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let mut builder = Config::builder().add_source(settings);

    if let Ok(api_key) = env::var("API_KEY") {
        builder = builder.set_override("splitwise.api_key", api_key)?;
    }
    if let Ok(base_url) = env::var("SPLITWISE_BASE_URL") {
        builder = builder.set_override("splitwise.base_url", base_url)?;
    }

    builder.build()
}
