use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use famhub_server::repository::{self, SqliteTaskStore};
use famhub_server::{routes, AppState};

/// HTTP backend for the famhub week planner.
#[derive(Debug, Parser)]
#[command(name = "famhub-server", version, about)]
struct Args {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:7878")]
    listen: SocketAddr,

    /// SQLite database file, created on first start
    #[arg(long, default_value = "famhub.db")]
    database: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let conn = repository::open(&args.database)?;
    info!("task store ready at {}", args.database.display());

    let state = AppState {
        tasks: SqliteTaskStore::new(conn),
    };
    let app = routes::router(state);

    let listener = tokio::net::TcpListener::bind(args.listen).await?;
    info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
