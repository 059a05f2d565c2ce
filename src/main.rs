use axum::{
    Router,
    extract::Extension,
    routing::{get, post},
};
use hash_storage::storage::config::StoreConfig;
use hash_storage::storage::engine::StorageEngine;
use hash_storage::storage::handlers::*;
use hash_storage::storage::protocol::*;
use std::net::SocketAddr;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        // .with_max_level(tracing::Level::DEBUG)
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        eprintln!(
            "Usage: {} [--bind <addr:port>] [--config <file.json>] [--nodes <n>] [--capacity <c>]",
            args[0]
        );
        eprintln!("Example: {} --bind 127.0.0.1:3001 --nodes 11 --capacity 4", args[0]);
        std::process::exit(0);
    }

    let mut bind_addr: SocketAddr = "127.0.0.1:3001".parse()?;
    let mut config_path: Option<String> = None;
    let mut node_count: Option<usize> = None;
    let mut capacity: Option<usize> = None;

    let mut i = 1;
    while i < args.len() {
        let value = args.get(i + 1);
        match (args[i].as_str(), value) {
            ("--bind", Some(v)) => {
                bind_addr = v.parse()?;
                i += 2;
            }
            ("--config", Some(v)) => {
                config_path = Some(v.clone());
                i += 2;
            }
            ("--nodes", Some(v)) => {
                node_count = Some(v.parse()?);
                i += 2;
            }
            ("--capacity", Some(v)) => {
                capacity = Some(v.parse()?);
                i += 2;
            }
            (other, _) => {
                tracing::warn!("Ignoring argument {}", other);
                i += 1;
            }
        }
    }

    // 1. Configuration:
    let config = StoreConfig::from_args(config_path.as_deref(), node_count, capacity)?;
    tracing::info!("Nodes: {:?}", config.names);

    // 2. Storage engine:
    let engine = StorageEngine::new(&config)?;

    // 3. HTTP Router:
    let app = Router::new()
        .route(ENDPOINT_HASH, post(handle_hash))
        .route(ENDPOINT_STORAGE_NODES, get(handle_list_nodes))
        .route(ENDPOINT_STORAGE_NODE, get(handle_get_node))
        .route(ENDPOINT_RESET, post(handle_reset))
        .route(ENDPOINT_STATS, get(handle_stats))
        .layer(Extension(engine));

    // 4. Start HTTP server:
    tracing::info!("HTTP server listening on {}", bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
