//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod app;
pub mod database;
pub mod logging;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::database::DatabaseConfig;
pub use self::logging::LoggingConfig;

use crate::error::AppError;

/// Prefix for environment variable overrides, e.g. `ROSTER__SERVER__PORT`.
pub const ENV_PREFIX: &str = "ROSTER";

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (default.toml + environment overlay).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Employee store settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a single TOML file plus environment variables.
    ///
    /// A missing file is not an error; every field has a default.
    pub fn load(config_path: &str) -> Result<Self, AppError> {
        Self::build(config_path, None, None)
    }

    /// Load the base file, then the `{env}` overlay that sits next to it
    /// (`config/default.toml` pairs with `config/{env}.toml`), then
    /// environment variables prefixed with `ROSTER__`.
    pub fn load_layered(config_path: &str, env: &str) -> Result<Self, AppError> {
        Self::build(config_path, Some(env), None)
    }

    /// Build from the given layers. `vars` replaces the process environment
    /// when set.
    fn build(
        config_path: &str,
        env: Option<&str>,
        vars: Option<config::Map<String, String>>,
    ) -> Result<Self, AppError> {
        let mut builder = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false));

        if let Some(env) = env {
            let overlay = Path::new(config_path).with_file_name(env);
            builder = builder.add_source(config::File::from(overlay).required(false));
        }

        let config = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true)
                    .source(vars),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}
