use config::{Config, ConfigError, Environment, File};
use roster_core::CapacityPolicy;
use serde::Deserialize;

/// Server settings, layered from defaults, an optional config file and
/// `ROSTER_*` environment variables.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Directory served under `/static`.
    pub static_dir: String,
    /// Optional JSON seed file; the built-in catalog is used when
    /// unset.
    pub seed_file: Option<String>,
    /// Refuse signups once an activity is full. Off by default:
    /// capacities are advisory, as this service has always behaved.
    pub enforce_capacity: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            static_dir: "static".to_string(),
            seed_file: None,
            enforce_capacity: false,
        }
    }
}

impl ServerConfig {
    /// Loads settings. An explicit `config_file` must exist; otherwise
    /// `roster.toml` in the working directory is picked up when
    /// present.
    pub fn load(config_file: Option<&str>) -> Result<Self, ConfigError> {
        let file_source = match config_file {
            Some(path) => File::with_name(path),
            None => File::with_name("roster").required(false),
        };

        let settings = Config::builder()
            .add_source(file_source)
            .add_source(Environment::with_prefix("ROSTER"))
            .build()?;

        settings.try_deserialize()
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn capacity_policy(&self) -> CapacityPolicy {
        if self.enforce_capacity {
            CapacityPolicy::Enforced
        } else {
            CapacityPolicy::Advisory
        }
    }
}
