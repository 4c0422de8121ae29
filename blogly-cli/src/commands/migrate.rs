//! Apply schema migrations and exit

use anyhow::{Context, Result};
use clap::Parser;

use blogly_server::db::{create_pool, run_migrations};

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// Database URL
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: String,
}

pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let pool = create_pool(&args.database_url)
        .await
        .context("Failed to connect to database")?;

    run_migrations(&pool)
        .await
        .context("Failed to run migrations")?;

    pool.close().await;
    Ok(())
}
