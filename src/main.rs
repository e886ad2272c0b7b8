use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use todo_backend::{api, exec_sql_file, DbConfig, PgConnectionProvider};

#[derive(Debug, Parser)]
#[command(name = "todo-backend", about = "Minimal todo-list HTTP backend")]
struct Args {
    /// Path to the TOML connection configuration
    #[arg(long, default_value = "config/db.toml")]
    config: PathBuf,

    /// SQL seed script executed once before the listener starts
    #[arg(long, default_value = "data.sql")]
    seed: PathBuf,

    /// Port to listen on
    #[arg(long, default_value_t = 3000)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let config = DbConfig::from_file(&args.config)?;
    let provider = PgConnectionProvider::new(config);

    // Seed failure aborts startup; serving with an unloaded schema is worse
    // than not serving.
    tracing::info!(seed = %args.seed.display(), "loading database");
    let executed = exec_sql_file(&provider, &args.seed, true).await?;
    tracing::info!(executed, "database loaded");

    let addr = format!("127.0.0.1:{}", args.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("listening on {addr}");
    axum::serve(listener, api::app()).await?;
    Ok(())
}
