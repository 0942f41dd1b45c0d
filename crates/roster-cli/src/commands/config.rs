//! Configuration management CLI commands.

use clap::{Args, Subcommand};

use crate::output::{self, OutputFormat};
use roster_core::config::AppConfig;
use roster_core::error::AppError;

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,
    /// Validate configuration file
    Validate,
}

/// Execute config commands
pub async fn execute(
    args: &ConfigArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show => {
            let mut config = super::load_config(config_path)?;
            config.database.url = config.database.redacted_url();
            output::print_item(&config, format);
        }
        ConfigCommand::Validate => match super::load_config(config_path).and_then(check_provider) {
            Ok(config) => {
                output::print_success(&format!("Configuration '{}' is valid", config_path));
                output::print_kv(
                    "Server",
                    &format!("{}:{}", config.server.host, config.server.port),
                );
                output::print_kv("Store", &config.database.provider);
                output::print_kv("Database", &config.database.redacted_url());
                output::print_kv("Log level", &config.logging.level);
            }
            Err(e) => {
                output::print_error(&format!("Configuration invalid: {}", e));
                return Err(e);
            }
        },
    }

    Ok(())
}

/// Reject store providers the server cannot start with.
fn check_provider(config: AppConfig) -> Result<AppConfig, AppError> {
    match config.database.provider.as_str() {
        "postgres" | "memory" => Ok(config),
        other => Err(AppError::configuration(format!(
            "Unknown database provider: '{other}'. Supported: postgres, memory"
        ))),
    }
}
