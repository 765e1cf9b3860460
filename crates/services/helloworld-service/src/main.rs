//! Hello World Service - reports host and request metadata.

use clap::{Parser, Subcommand};

use common::{ServiceConfig, ServiceKind};
use helloworld_service_lib::BoxError;

#[derive(Parser)]
#[command(name = "helloworld-service")]
#[command(about = "Greeting microservice")]
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
    dotenvy::dotenv().ok();

    common::init_tracing("info,tower_http=debug");

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { host, port } => {
            let config = ServiceConfig::from_env(ServiceKind::HelloWorld).with_bind(host, port);
            helloworld_service_lib::run_embedded(config).await?;
        }
    }

    Ok(())
}
