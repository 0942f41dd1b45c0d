//! Database migration management commands.

use clap::{Args, Subcommand};

use crate::output;
use roster_core::error::AppError;
use roster_database::EmployeeStore;

/// Arguments for the migrate command
#[derive(Debug, Args)]
pub struct MigrateArgs {
    /// Migration subcommand
    #[command(subcommand)]
    pub command: MigrateCommand,
}

/// Migration subcommands
#[derive(Debug, Subcommand)]
pub enum MigrateCommand {
    /// Run all pending migrations
    Run,
}

/// Execute migration commands
pub async fn execute(args: &MigrateArgs, config_path: &str) -> Result<(), AppError> {
    let mut config = super::load_config(config_path)?;
    // Migrations run explicitly below, not as a side effect of connecting.
    config.database.auto_migrate = false;

    match &args.command {
        MigrateCommand::Run => {
            let store = EmployeeStore::connect(&config.database).await?;
            println!("Running database migrations...");
            let result = store.migrate().await;
            store.close().await;
            result?;
            output::print_success("All migrations applied successfully.");
        }
    }

    Ok(())
}
