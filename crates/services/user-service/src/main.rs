//! User Service - HTTP server for the in-memory user registry.

use clap::{Parser, Subcommand};

use common::{ServiceConfig, ServiceKind};
use user_service_lib::BoxError;

#[derive(Parser)]
#[command(name = "user-service")]
#[command(about = "User registry microservice")]
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
        /// Downstream base URL (overrides AUTH_SERVICE_URL / HELLO_WORLD_SERVICE_URL)
        #[arg(long)]
        downstream_url: Option<String>,
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
        Commands::Serve {
            host,
            port,
            downstream_url,
        } => {
            let mut config = ServiceConfig::from_env(ServiceKind::User).with_bind(host, port);
            if let Some(url) = downstream_url {
                config = config.with_downstream_url(url);
            }
            user_service_lib::run_embedded(config).await?;
        }
    }

    Ok(())
}
