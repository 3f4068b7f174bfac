mod config;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::Router;
use axum::http::HeaderName;
use clap::{Parser, Subcommand};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use config::{AppConfig, DatabaseConfig, ServerConfig};
use contacts::Service;
use contacts::infra::storage::SeaOrmContactsRepository;
use contacts::infra::storage::migrations::Migrator;

/// Contacts Server - contact management CRUD service
#[derive(Parser)]
#[command(name = "contacts-server")]
#[command(about = "Contacts Server - contact management CRUD service")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port override for HTTP server (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Print effective configuration and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Use an in-memory SQLite database
    #[arg(long)]
    mock: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server
    Run,
    /// Validate configuration and exit
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(ref path) = cli.config {
        if !path.is_file() {
            anyhow::bail!("config file does not exist: {}", path.display());
        }
    }

    // Layered config:
    // 1) defaults -> 2) YAML (if provided) -> 3) env (APP__*) -> 4) CLI overrides
    let mut config = AppConfig::load_or_default(cli.config.as_deref())?;
    config.apply_cli_overrides(cli.port, cli.mock);

    init_logging(&config.logging.level, cli.verbose);

    tracing::info!("Contacts Server starting");

    if cli.print_config {
        println!(
            "Effective configuration:\n{}",
            serde_json::to_string_pretty(&config)?
        );
        return Ok(());
    }

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_server(config).await,
        Commands::Check => check_config(&config),
    }
}

fn init_logging(level: &str, verbose: u8) {
    let level = match verbose {
        0 => level,
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn check_config(config: &AppConfig) -> Result<()> {
    tracing::info!("Checking configuration...");
    println!("Configuration is valid");
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}

async fn connect_database(config: &DatabaseConfig) -> Result<DatabaseConnection> {
    let mut opts = ConnectOptions::new(config.dsn.clone());
    // An in-memory SQLite database exists per connection; a larger pool would
    // hand out fresh empty databases.
    let max_connections = if config.dsn.contains(":memory:") {
        1
    } else {
        config.max_connections
    };
    opts.max_connections(max_connections).sqlx_logging(false);

    let db = Database::connect(opts)
        .await
        .with_context(|| format!("failed to connect to database at '{}'", config.dsn))?;

    tracing::info!("Database connected, applying migrations");
    Migrator::up(&db, None)
        .await
        .context("failed to apply migrations")?;

    Ok(db)
}

/// Middleware stack, outermost first: request-id assignment and propagation,
/// tracing, timeout, body limit, CORS.
fn apply_middleware_stack(router: Router, config: &ServerConfig) -> Router {
    let x_request_id = HeaderName::from_static("x-request-id");

    router
        .layer(CorsLayer::permissive())
        .layer(RequestBodyLimitLayer::new(config.body_limit_bytes))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.request_timeout_secs,
        )))
        .layer(
            TraceLayer::new_for_http().make_span_with(
                |req: &axum::http::Request<axum::body::Body>| {
                    let request_id = req
                        .headers()
                        .get("x-request-id")
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or("n/a");

                    tracing::info_span!(
                        "http_request",
                        method = %req.method(),
                        uri = %req.uri().path(),
                        request_id = %request_id,
                    )
                },
            ),
        )
        .layer(PropagateRequestIdLayer::new(x_request_id.clone()))
        .layer(SetRequestIdLayer::new(x_request_id, MakeRequestUuid))
}

async fn run_server(config: AppConfig) -> Result<()> {
    let db = connect_database(&config.database).await?;

    let repo = Arc::new(SeaOrmContactsRepository::new(db));
    let service = Arc::new(Service::new(repo, config.contacts.clone()));

    let router = apply_middleware_stack(contacts::api::rest::router(service), &config.server);

    let addr: SocketAddr = config
        .server
        .bind_addr
        .parse()
        .with_context(|| format!("Invalid bind address '{}'", config.server.bind_addr))?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("HTTP server bound on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(Into::into)
}

/// Wait for termination signals (Ctrl+C, SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(%e, "Error handling Ctrl+C signal");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut handler) => {
                handler.recv().await;
            }
            Err(e) => {
                tracing::error!(%e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, initiating graceful shutdown");
}
