//! Server configuration: command-line arguments layered over a TOML file.

use clap::Parser;
use serde::Deserialize;
use std::net::{Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default configuration file name.
pub const DEFAULT_CONFIG_PATH: &str = "taskboard.toml";

/// Command-line arguments of the server binary.
#[derive(Debug, Clone, Parser)]
#[command(name = "taskboard", about = "Collaborative task board server")]
pub struct Args {
    /// Path to the configuration file
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Address to listen on, overriding `[server] bind`
    #[arg(long)]
    pub bind: Option<SocketAddr>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log to file instead of stdout
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file exists but could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        /// Configuration file path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for this schema.
    #[error("failed to parse {path}: {source}")]
    Parse {
        /// Configuration file path.
        path: PathBuf,
        /// Underlying TOML error.
        #[source]
        source: toml::de::Error,
    },

    /// The postgres backend was selected without a database URL.
    #[error("[store] backend = \"postgres\" requires database_url")]
    MissingDatabaseUrl,

    /// The connection pool was configured with no connections.
    #[error("[store] pool_size must be at least 1")]
    InvalidPoolSize,

    /// No identity provider key set was configured.
    #[error("[identity] requires project_id and jwks_path")]
    MissingIdentityProvider,
}

/// Storage backend selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreBackend {
    /// Process-local maps; state is lost on restart.
    #[default]
    Memory,
    /// `PostgreSQL` through a connection pool.
    Postgres,
}

/// `[server]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Listen address.
    pub bind: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from((Ipv4Addr::LOCALHOST, 8080)),
        }
    }
}

/// `[store]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Selected backend.
    pub backend: StoreBackend,
    /// `PostgreSQL` connection URL.
    pub database_url: Option<String>,
    /// Maximum pooled connections.
    pub pool_size: u32,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::Memory,
            database_url: None,
            pool_size: 8,
        }
    }
}

/// `[identity]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct IdentityConfig {
    /// Identity provider project; the expected token audience.
    pub project_id: String,
    /// JWK set document holding the provider's signing keys.
    pub jwks_path: Option<PathBuf>,
}

/// `[logging]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directives.
    pub level: String,
    /// Optional log file.
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            file: None,
        }
    }
}

/// Complete server configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Listener settings.
    pub server: ServerConfig,
    /// Storage settings.
    pub store: StoreConfig,
    /// Identity provider settings.
    pub identity: IdentityConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

impl Config {
    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the text does not match the schema.
    pub fn from_toml(raw: &str, origin: &Path) -> Result<Self, ConfigError> {
        toml::from_str(raw).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Loads configuration from `path`; a missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] or [`ConfigError::Parse`] when an
    /// existing file cannot be used.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(raw) => Self::from_toml(&raw, path),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Loads the file named by `args` and applies the command-line
    /// overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn resolve(args: &Args) -> Result<Self, ConfigError> {
        let mut config = Self::load(&args.config)?;
        config.apply_overrides(args);
        config.validate()?;
        Ok(config)
    }

    /// Applies command-line overrides.
    pub fn apply_overrides(&mut self, args: &Args) {
        if let Some(bind) = args.bind {
            self.server.bind = bind;
        }
        if let Some(level) = &args.log_level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &args.log_file {
            self.logging.file = Some(file.clone());
        }
    }

    /// Checks cross-field requirements.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingDatabaseUrl`],
    /// [`ConfigError::InvalidPoolSize`], or
    /// [`ConfigError::MissingIdentityProvider`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.store.backend == StoreBackend::Postgres && self.store.database_url.is_none() {
            return Err(ConfigError::MissingDatabaseUrl);
        }
        if self.store.pool_size == 0 {
            return Err(ConfigError::InvalidPoolSize);
        }
        if self.identity.project_id.trim().is_empty() || self.identity.jwks_path.is_none() {
            return Err(ConfigError::MissingIdentityProvider);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Args, Config, ConfigError, StoreBackend};
    use clap::Parser;
    use rstest::rstest;
    use std::path::Path;

    const FULL: &str = r#"
        [server]
        bind = "0.0.0.0:9000"

        [store]
        backend = "postgres"
        database_url = "postgres://localhost/taskboard"
        pool_size = 4

        [identity]
        project_id = "taskboard-dev"
        jwks_path = "keys.json"

        [logging]
        level = "debug"
    "#;

    #[rstest]
    fn full_file_parses() {
        let config = Config::from_toml(FULL, Path::new("taskboard.toml")).expect("valid config");
        assert_eq!(config.server.bind.port(), 9000);
        assert_eq!(config.store.backend, StoreBackend::Postgres);
        assert_eq!(config.store.pool_size, 4);
        assert_eq!(config.identity.project_id, "taskboard-dev");
        assert_eq!(config.logging.level, "debug");
        assert!(config.validate().is_ok());
    }

    #[rstest]
    fn empty_file_uses_defaults() {
        let config = Config::from_toml("", Path::new("taskboard.toml")).expect("valid config");
        assert_eq!(config, Config::default());
        assert_eq!(config.store.backend, StoreBackend::Memory);
        assert_eq!(config.server.bind.port(), 8080);
    }

    #[rstest]
    fn unknown_backend_is_rejected() {
        let err = Config::from_toml("[store]\nbackend = \"redis\"", Path::new("bad.toml"))
            .expect_err("unknown backend");
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[rstest]
    fn postgres_requires_url() {
        let mut config = Config::from_toml(FULL, Path::new("taskboard.toml")).expect("valid");
        config.store.database_url = None;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MissingDatabaseUrl)
        ));
    }

    #[rstest]
    fn empty_pool_is_rejected() {
        let raw = FULL.replace("pool_size = 4", "pool_size = 0");
        let config = Config::from_toml(&raw, Path::new("taskboard.toml")).expect("valid toml");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidPoolSize)
        ));
    }

    #[rstest]
    fn identity_provider_is_required() {
        assert!(matches!(
            Config::default().validate(),
            Err(ConfigError::MissingIdentityProvider)
        ));
    }

    #[rstest]
    fn flags_override_file() {
        let args = Args::try_parse_from([
            "taskboard",
            "--bind",
            "127.0.0.1:3000",
            "--log-level",
            "warn",
            "--log-file",
            "taskboard.log",
        ])
        .expect("valid arguments");
        let mut config = Config::from_toml(FULL, Path::new("taskboard.toml")).expect("valid");
        config.apply_overrides(&args);

        assert_eq!(args.config, Path::new("taskboard.toml"));
        assert_eq!(config.server.bind.port(), 3000);
        assert_eq!(config.logging.level, "warn");
        assert_eq!(
            config.logging.file.as_deref(),
            Some(Path::new("taskboard.log"))
        );
    }
}
