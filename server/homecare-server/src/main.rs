use clap::Parser;
use colored::*;
use std::{net::SocketAddr, path::PathBuf};
use tracing::{info, warn, Level};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use database_layer::{DatabaseConfig, DatabasePool};
use error_common::{log_error, HomecareError, Result};
use homecare_server::{create_app, Environment, HomecareServer, ServerConfig};
use symptom_engine::KeywordModel;

/// HomeCare+ symptom prediction server
#[derive(Parser, Debug)]
#[command(name = "homecare-server")]
#[command(about = "Symptom prediction and disease reference HTTP API")]
struct Args {
    /// Server bind address
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: String,

    /// Server port
    #[arg(short, long, env = "PORT", default_value = "8080")]
    port: u16,

    /// Keyword model file (YAML, or JSON when the extension is .json)
    #[arg(long, env = "KEYWORD_MODEL")]
    keyword_model: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Serve from the seeded in-memory catalog instead of PostgreSQL
    #[arg(long)]
    in_memory: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional
    let _ = dotenvy::dotenv();

    let args = Args::parse();
    let config = ServerConfig::from_env()?;

    init_tracing(args.verbose, config.environment);

    let result = run(args, config).await;
    if let Err(e) = &result {
        log_error("homecare-server", e).await;
    }
    result
}

async fn run(args: Args, config: ServerConfig) -> Result<()> {
    info!("🏥 {}", "Starting HomeCare+ Engine HTTP Server".bright_cyan());
    info!("📋 Version: {}", env!("CARGO_PKG_VERSION").bright_white());

    let model = match &args.keyword_model {
        Some(path) => {
            info!(path = %path.display(), "Loading keyword model");
            KeywordModel::load(path).map_err(|e| HomecareError::ModelError(e.to_string()))?
        }
        None => KeywordModel::builtin(),
    };

    let mut pool = None;
    let server = if args.in_memory {
        warn!("{}", "Running with the in-memory catalog; history is not persisted".bright_yellow());
        HomecareServer::new_in_memory(config, model)
    } else {
        let db_config = DatabaseConfig::from_env().map_err(|e| HomecareError::ConfigError(e.to_string()))?;
        let db = DatabasePool::new(&db_config)
            .await
            .map_err(|e| HomecareError::DatabaseError(e.to_string()))?;
        let server = HomecareServer::new_with_pool(config, model, &db).await?;
        pool = Some(db);
        server
    };

    let app = create_app(server);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .map_err(|e| HomecareError::ConfigError(format!("Invalid bind address: {e}")))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| HomecareError::NetworkError(format!("Failed to bind to {addr}: {e}")))?;

    info!("🚀 {}", format!("HomeCare+ server running on http://{addr}").bright_green());
    info!("📋 {}", format!("Health check available at: http://{addr}/health").bright_blue());
    info!("🩺 {}", format!("Prediction endpoint: http://{addr}/api/v1/diseases/predict").bright_blue());

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| HomecareError::ServerError(format!("HTTP server error: {e}")));

    if let Some(db) = pool {
        db.close().await;
    }

    served
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

fn init_tracing(verbose: bool, environment: Environment) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("homecare_server={level},symptom_engine={level},database_layer={level},tower_http=info,sqlx=warn").into()
    });

    if environment == Environment::Development {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_target(true).with_line_number(verbose))
            .init();

        print_startup_banner();
    } else {
        // Structured JSON logging for production
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_target(false).with_ansi(false).json())
            .init();
    }
}

fn print_startup_banner() {
    println!("{}", "╔══════════════════════════════════════════════════════════════╗".bright_cyan());
    println!("{}", "║                       🏥 HOMECARE+ ENGINE                    ║".bright_cyan());
    println!("{}", "║              Symptom Matching & Disease Reference            ║".bright_cyan());
    println!("{}", "╚══════════════════════════════════════════════════════════════╝".bright_cyan());
    println!();
}
