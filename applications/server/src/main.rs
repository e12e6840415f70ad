/// User API Server - demonstration user-management HTTP API
use anyhow::bail;
use clap::{Parser, Subcommand};
use std::{path::PathBuf, time::Duration};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use user_api_client::{ClientConfig, UserApiClient};
use user_api_server::{config::Environment, create_router, smoke, AppState, ServerConfig};

#[derive(Parser)]
#[command(name = "user-api-server")]
#[command(about = "In-memory user management demo API", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Deployment environment
        #[arg(short, long, env = "ENVIRONMENT", value_enum)]
        environment: Option<Environment>,
        /// Address to bind
        #[arg(long)]
        host: Option<String>,
        /// Port to bind
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Run smoke checks against a running server
    Smoke {
        /// Server base URL
        #[arg(long, env = "API_BASE_URL", default_value = "http://localhost:5000")]
        base_url: String,
        /// Request timeout in seconds
        #[arg(long, env = "REQUEST_TIMEOUT", default_value_t = 10)]
        timeout: u64,
        /// Reset the server store before checking
        #[arg(long)]
        reset: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "user_api_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            config,
            environment,
            host,
            port,
        } => {
            let mut server_config = ServerConfig::load(config.as_deref())?;
            if let Some(environment) = environment {
                server_config.environment = environment;
            }
            if let Some(host) = host {
                server_config.server.host = host;
            }
            if let Some(port) = port {
                server_config.server.port = port;
            }
            serve(server_config).await?;
        }
        Commands::Smoke {
            base_url,
            timeout,
            reset,
        } => {
            run_smoke(&base_url, Duration::from_secs(timeout), reset).await?;
        }
    }

    Ok(())
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    config.validate()?;

    let addr = config.socket_addr()?;
    let reset_enabled = config.reset_enabled();

    tracing::info!("Starting User API server");
    tracing::info!("Environment: {}", config.environment.as_str());
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);
    if reset_enabled {
        tracing::warn!("Test-only reset endpoint enabled");
    }

    let app = create_router(AppState::in_memory(), reset_enabled);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

async fn run_smoke(base_url: &str, timeout: Duration, reset: bool) -> anyhow::Result<()> {
    let client = UserApiClient::new(ClientConfig::new(base_url).with_timeout(timeout))?;
    tracing::info!("Running smoke checks against {}", client.base_url());

    let report = smoke::run(&client, reset).await;

    for check in &report.checks {
        let status = if check.passed { "PASS" } else { "FAIL" };
        match &check.detail {
            Some(detail) => println!("{status} {} - {detail}", check.name),
            None => println!("{status} {}", check.name),
        }
    }

    let failed = report.failures().count();
    if failed > 0 {
        bail!("{} of {} smoke checks failed", failed, report.checks.len());
    }

    println!("All {} smoke checks passed", report.checks.len());
    Ok(())
}
