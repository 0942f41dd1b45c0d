//! Start the Roster server.

use clap::Args;

use roster_core::error::AppError;

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Override the server port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Override the server host
    #[arg(long)]
    pub host: Option<String>,

    /// Apply pending migrations on startup (postgres provider only)
    #[arg(long)]
    pub auto_migrate: bool,
}

/// Execute the serve command
pub async fn execute(args: &ServeArgs, config_path: &str) -> Result<(), AppError> {
    let mut config = super::load_config(config_path)?;

    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(ref host) = args.host {
        config.server.host = host.clone();
    }
    if args.auto_migrate {
        config.database.auto_migrate = true;
    }

    println!("Starting Roster server...");
    println!("  Host:  {}", config.server.host);
    println!("  Port:  {}", config.server.port);
    println!("  Store: {}", config.database.provider);

    roster_api::run_server(config).await
}
