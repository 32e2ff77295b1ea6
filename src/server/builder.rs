//! ServerBuilder for fluent API to build HTTP servers

use super::exposure::RestExposure;
use super::host::ServerHost;
use crate::config::ServerConfig;
use crate::core::TodoService;
use crate::storage::InMemoryTodoStore;
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Builder for creating the todos HTTP server
///
/// The store must be fully loaded before the router is built; requests are
/// only served from a complete snapshot.
///
/// # Example
///
/// ```ignore
/// ServerBuilder::new()
///     .with_config(ServerConfig::default())
///     .load_store()?
///     .serve()
///     .await?;
/// ```
pub struct ServerBuilder {
    config: ServerConfig,
    service: Option<Arc<dyn TodoService>>,
    custom_routes: Vec<Router>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder with the default configuration
    pub fn new() -> Self {
        Self {
            config: ServerConfig::default(),
            service: None,
            custom_routes: Vec::new(),
        }
    }

    /// Replace the configuration
    pub fn with_config(mut self, config: ServerConfig) -> Self {
        self.config = config;
        self
    }

    /// Serve todos from an already-loaded store
    pub fn with_store(self, store: InMemoryTodoStore) -> Self {
        self.with_service(store)
    }

    /// Serve todos from any service implementation
    pub fn with_service(mut self, service: impl TodoService + 'static) -> Self {
        self.service = Some(Arc::new(service));
        self
    }

    /// Load the store from the configured data file
    ///
    /// Fails without producing a store if the file is unreadable, malformed,
    /// or contains duplicate identifiers.
    pub fn load_store(self) -> Result<Self> {
        let store = InMemoryTodoStore::from_file(&self.config.data_file)?;
        Ok(self.with_store(store))
    }

    /// Add custom routes to the server
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Build the transport-agnostic host
    pub fn build_host(mut self) -> Result<ServerHost> {
        let service = self.service.take().ok_or_else(|| {
            anyhow::anyhow!("A todo store is required. Call .with_store() or .load_store()")
        })?;

        ServerHost::from_builder_components(service, self.config.clone())
    }

    /// Build the final REST router
    pub fn build(mut self) -> Result<Router> {
        let custom_routes = std::mem::take(&mut self.custom_routes);
        let host = Arc::new(self.build_host()?);
        RestExposure::build_router(host, custom_routes)
    }

    /// Serve the application with graceful shutdown
    ///
    /// Binds to the configured address and handles SIGTERM and SIGINT
    /// (Ctrl+C) for graceful shutdown.
    pub async fn serve(self) -> Result<()> {
        let addr = self.config.bind_address();
        let app = self.build()?;
        let listener = TcpListener::bind(&addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Todo;
    use std::io::Write;

    fn store() -> InMemoryTodoStore {
        InMemoryTodoStore::from_todos(vec![Todo::new("a", "Fry", true, "x", "homework")]).unwrap()
    }

    #[test]
    fn test_build_without_store_fails() {
        let result = ServerBuilder::new().build();
        assert!(result.is_err());
    }

    #[test]
    fn test_build_with_store() {
        let result = ServerBuilder::new().with_store(store()).build();
        assert!(result.is_ok());
    }

    #[test]
    fn test_build_host_keeps_config() {
        let config = ServerConfig {
            port: 9999,
            ..Default::default()
        };
        let host = ServerBuilder::new()
            .with_config(config)
            .with_store(store())
            .build_host()
            .unwrap();
        assert_eq!(host.config.port, 9999);
        assert_eq!(host.todo_count(), 1);
    }

    #[test]
    fn test_load_store_from_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            br#"[{"_id": "x", "owner": "Dawn", "status": false, "body": "b", "category": "c"}]"#,
        )
        .unwrap();

        let config = ServerConfig {
            data_file: file.path().display().to_string(),
            ..Default::default()
        };
        let host = ServerBuilder::new()
            .with_config(config)
            .load_store()
            .unwrap()
            .build_host()
            .unwrap();
        assert_eq!(host.todo_count(), 1);
    }

    #[test]
    fn test_load_store_missing_file_fails() {
        let config = ServerConfig {
            data_file: "/nonexistent/todos.json".to_string(),
            ..Default::default()
        };
        assert!(ServerBuilder::new().with_config(config).load_store().is_err());
    }

    #[test]
    fn test_fluent_chaining_full_pipeline() {
        let result = ServerBuilder::new()
            .with_config(ServerConfig::default())
            .with_custom_routes(Router::new())
            .with_store(store())
            .build();
        assert!(result.is_ok(), "full fluent pipeline should succeed");
    }
}
