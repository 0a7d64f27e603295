use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use todo_server::api;
use todo_server::config::{ServerConfig, DEFAULT_HOST, DEFAULT_PORT};
use todo_server::store::{IdPolicy, TodoStore};

#[derive(Parser)]
#[command(name = "todod")]
#[command(about = "In-memory todo list over HTTP")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Interface to bind
        #[arg(long, default_value = DEFAULT_HOST)]
        host: String,

        /// Port for HTTP API
        #[arg(short, long, default_value_t = DEFAULT_PORT)]
        port: u16,

        /// Id assignment: `rewind` (reuses ids after deletes) or `monotonic`
        #[arg(long, default_value_t = IdPolicy::Rewind)]
        id_policy: IdPolicy,
    },
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "todo_server=debug,tower_http=debug".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let addr = config.bind_addr();
    tracing::info!(
        "Starting todo server on {} (id policy: {})",
        addr,
        config.id_policy
    );

    let store = TodoStore::new(config.id_policy);
    let app = api::create_router(store);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Todo server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = match cli.command {
        Some(Commands::Serve {
            host,
            port,
            id_policy,
        }) => ServerConfig {
            host,
            port,
            id_policy,
        },
        None => ServerConfig::default(),
    };

    serve(config).await
}
