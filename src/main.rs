//! Todos server
//!
//! # Environment Variables
//!
//! - `TODOS_CONFIG`: Optional YAML configuration file
//! - `TODOS_HOST`: Server host address (default: `127.0.0.1`)
//! - `TODOS_PORT`: Server port (default: `4567`)
//! - `TODOS_DATA_FILE`: JSON file holding the todos (default: `data/todos.json`)
//! - `RUST_LOG`: Logging level (e.g., `debug`, `todos=debug`)

use anyhow::Result;
use todos::config::{ENV_CONFIG, ServerConfig};
use todos::server::ServerBuilder;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("todos=info,tower_http=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match std::env::var(ENV_CONFIG) {
        Ok(path) => ServerConfig::from_yaml_file(&path)?,
        Err(_) => ServerConfig::default(),
    }
    .apply_env()?;

    tracing::info!(data_file = %config.data_file, "loading todos");

    ServerBuilder::new()
        .with_config(config)
        .load_store()?
        .serve()
        .await
}
