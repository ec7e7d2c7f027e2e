//! ForTheGiving backend entry point
//!
//! Usage:
//!   forthegiving-server                      # 127.0.0.1:5000, info logs
//!   forthegiving-server --port 8080 --debug  # debug logging to console
//!   RUST_LOG=forthegiving_server=debug ...   # fine-grained log control
//!
//! Database settings come from the environment (see forthegiving-core);
//! a .env file in the working directory is loaded first.

use std::net::SocketAddr;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use forthegiving_core::DatabaseConfig;
use forthegiving_server::db::create_pool;
use forthegiving_server::{run_server, ServerConfig};

#[derive(Parser, Debug)]
#[command(name = "forthegiving-server", version, about = "ForTheGiving HTTP backend")]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "5000")]
    port: u16,

    /// Bind address
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: String,

    /// Allow requests from any origin
    #[arg(long)]
    cors_permissive: bool,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

fn init_tracing(debug: bool) -> Result<()> {
    let filter = if debug {
        // Debug mode: set debug level unless RUST_LOG is explicitly set
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(debug) // Show targets in debug mode
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before anything reads the environment
    dotenvy::dotenv().ok();

    let args = Args::parse();
    init_tracing(args.debug)?;

    let db_config = DatabaseConfig::from_env().context("invalid database configuration")?;
    tracing::info!(?db_config, "database configuration loaded");

    let pool = create_pool(&db_config.connect_url()).context("invalid database URL")?;

    // The pool is lazy; probe once so operators see the state at startup.
    // Liveness endpoints stay up either way.
    match sqlx::query("SELECT 1").execute(&pool).await {
        Ok(_) => tracing::info!("database reachable"),
        Err(err) => tracing::warn!(
            error = %err,
            "database unreachable at startup, connections will be retried on demand"
        ),
    }

    let bind_addr: SocketAddr = format!("{}:{}", args.bind, args.port)
        .parse()
        .with_context(|| format!("invalid bind address {}:{}", args.bind, args.port))?;

    let config = ServerConfig {
        bind_addr,
        cors_permissive: args.cors_permissive,
    };

    run_server(pool, config).await?;
    Ok(())
}
