//! HTTP server command
//!
//! Connects to PostgreSQL (or an in-process store with `--ephemeral`),
//! applies migrations and serves the blogly pages.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use blogly_server::db::{create_pool_with_options, run_migrations, DEFAULT_MAX_CONNECTIONS};
use blogly_server::{run_server, AppState, MemoryStore, PgStore, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "BLOGLY_BIND", default_value = "127.0.0.1:3030")]
    pub bind: SocketAddr,

    /// Database URL
    #[arg(long, env = "DATABASE_URL", required_unless_present = "ephemeral")]
    pub database_url: Option<String>,

    /// Maximum pooled database connections
    #[arg(long, env = "BLOGLY_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Request timeout in seconds
    #[arg(long, env = "BLOGLY_TIMEOUT", default_value = "30")]
    pub timeout: u64,

    /// Skip applying migrations on startup
    #[arg(long)]
    pub no_migrate: bool,

    /// Keep records in memory instead of PostgreSQL (lost on exit)
    #[arg(long)]
    pub ephemeral: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let state = match args.database_url.as_deref() {
        Some(database_url) if !args.ephemeral => {
            let pool = create_pool_with_options(database_url, args.max_connections)
                .await
                .context("Failed to create database pool")?;

            if args.no_migrate {
                tracing::info!("Skipping migrations");
            } else {
                run_migrations(&pool)
                    .await
                    .context("Failed to run migrations")?;
            }

            AppState::new(PgStore::new(pool))
        }
        _ => {
            tracing::warn!("Using in-memory store - records are lost on exit");
            AppState::new(MemoryStore::new())
        }
    };
    let state = state.context("Failed to compile templates")?;

    let config = ServerConfig {
        bind_addr: args.bind,
        request_timeout: Duration::from_secs(args.timeout),
    };

    tracing::info!("Starting blogly server on {}", config.bind_addr);

    // Run server (blocks until shutdown)
    run_server(state, config).await.context("Server error")?;

    Ok(())
}
