//! Configuration for kennel-backend

use serde::{Deserialize, Serialize};
use std::net::{Ipv4Addr, SocketAddr};

/// Port the registry listens on unless told otherwise
pub const DEFAULT_PORT: u16 = 1066;

/// Main service configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KennelConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listen address
    #[serde(default = "default_listen_addr")]
    pub listen_addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level, used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub level: String,

    /// JSON format
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_listen_addr() -> SocketAddr {
    SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT))
}

fn default_log_level() -> String {
    "info".to_string()
}

impl KennelConfig {
    /// Load configuration from defaults, an optional file, then `KENNEL_*`
    /// environment variables
    pub fn load(path: Option<&str>) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();

        builder = builder.add_source(config::Config::try_from(&KennelConfig::default())?);

        if let Some(path) = path {
            builder = builder.add_source(config::File::with_name(path).required(false));
        }

        // Nested keys use a double underscore: KENNEL_SERVER__LISTEN_ADDR
        builder = builder.add_source(
            config::Environment::with_prefix("KENNEL")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }
}
