//! Combined binary for development - runs all services in one process.

use clap::{Parser, Subcommand};
use tracing::{error, info};

use common::{LoginDelegation, ServiceConfig, ServiceKind};

#[derive(Parser)]
#[command(name = "rust-services")]
#[command(about = "Combined microservices binary for development")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run all services in a single process (development mode)
    Serve {
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        #[arg(long, default_value = "8080")]
        user_port: u16,
        #[arg(long, default_value = "8081")]
        auth_port: u16,
        #[arg(long, default_value = "8888")]
        hello_port: u16,
        /// How the user service answers /login: auth or helloworld
        #[arg(long)]
        login_delegate: Option<LoginDelegation>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    common::init_tracing("info,tower_http=debug");

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            host,
            user_port,
            auth_port,
            hello_port,
            login_delegate,
        } => {
            let auth_url = format!("http://{}:{}", host, auth_port);
            let hello_url = format!("http://{}:{}", host, hello_port);
            let user_url = format!("http://{}:{}", host, user_port);

            let hello_config = ServiceConfig::from_env(ServiceKind::HelloWorld)
                .with_bind(Some(host.clone()), Some(hello_port));
            let auth_config = ServiceConfig::from_env(ServiceKind::Auth)
                .with_bind(Some(host.clone()), Some(auth_port))
                .with_downstream_url(user_url.clone());

            let mut user_config = ServiceConfig::from_env(ServiceKind::User)
                .with_bind(Some(host.clone()), Some(user_port));
            if let Some(delegation) = login_delegate {
                user_config.login_delegation = Some(delegation);
            }
            let user_config = match user_config.login_delegation.unwrap_or_default() {
                LoginDelegation::Auth => user_config.with_downstream_url(auth_url.clone()),
                LoginDelegation::HelloWorld => user_config.with_downstream_url(hello_url.clone()),
            };

            info!("Starting combined services in development mode");
            info!("  User service:       {}", user_url);
            info!("  Auth service:       {}", auth_url);
            info!("  Helloworld service: {}", hello_url);

            let hello_handle = tokio::spawn(async move {
                if let Err(e) = helloworld_service_lib::run_embedded(hello_config).await {
                    error!("Helloworld service failed: {}", e);
                }
            });

            let auth_handle = tokio::spawn(async move {
                if let Err(e) = auth_service_lib::run_embedded(auth_config).await {
                    error!("Auth service failed: {}", e);
                }
            });

            let user_handle = tokio::spawn(async move {
                if let Err(e) = user_service_lib::run_embedded(user_config).await {
                    error!("User service failed: {}", e);
                }
            });

            // Wait for any service to exit (which would indicate an error)
            tokio::select! {
                _ = user_handle => {
                    error!("User service exited unexpectedly");
                }
                _ = auth_handle => {
                    error!("Auth service exited unexpectedly");
                }
                _ = hello_handle => {
                    error!("Helloworld service exited unexpectedly");
                }
            }
        }
    }

    Ok(())
}
