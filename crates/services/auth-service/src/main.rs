//! Auth Service - HTTP server issuing login tokens.

use clap::{Parser, Subcommand};

use auth_service_lib::BoxError;
use common::{ServiceConfig, ServiceKind};

#[derive(Parser)]
#[command(name = "auth-service")]
#[command(about = "Authentication microservice")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Bind host (overrides HOST)
        #[arg(long)]
        host: Option<String>,
        /// Bind port (overrides PORT)
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    common::init_tracing("info,tower_http=debug");

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { host, port } => {
            let config = ServiceConfig::from_env(ServiceKind::Auth).with_bind(host, port);
            auth_service_lib::run_embedded(config).await?;
        }
    }

    Ok(())
}
