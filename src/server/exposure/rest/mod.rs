//! REST API exposure
//!
//! Consumes a `ServerHost` and produces an Axum `Router` with the health
//! routes, the todo routes under the configured prefix, and any custom
//! routes, wrapped in request tracing and CORS layers.

use super::super::host::ServerHost;
use crate::api::AppState;
use crate::server::router::{build_todo_routes, mount};
use anyhow::Result;
use axum::{Json, Router, extract::State, routing::get};
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// REST API exposure implementation
pub struct RestExposure;

impl RestExposure {
    /// Build the REST router from a host
    ///
    /// # Arguments
    ///
    /// * `host` - The server host containing all service state
    /// * `custom_routes` - Additional custom routes to merge
    pub fn build_router(host: Arc<ServerHost>, custom_routes: Vec<Router>) -> Result<Router> {
        let state = AppState {
            service: host.service.clone(),
        };

        let health_routes = Self::health_routes(host.clone());
        let todo_routes = build_todo_routes(state);

        let mut app = mount(health_routes, &host.config.api_prefix, todo_routes);

        for custom_router in custom_routes {
            app = app.merge(custom_router);
        }

        Ok(app.layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        ))
    }

    fn health_routes(host: Arc<ServerHost>) -> Router {
        Router::new()
            .route("/health", get(Self::health_check))
            .route("/healthz", get(Self::health_check))
            .with_state(host)
    }

    async fn health_check(State(host): State<Arc<ServerHost>>) -> Json<Value> {
        Json(json!({
            "status": "ok",
            "service": "todos",
            "todos": host.todo_count()
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;
    use crate::core::Todo;
    use crate::storage::InMemoryTodoStore;
    use axum_test::TestServer;

    fn host(prefix: &str) -> Arc<ServerHost> {
        let store = InMemoryTodoStore::from_todos(vec![
            Todo::new("a", "Fry", true, "Lorem", "homework"),
            Todo::new("b", "Dawn", false, "Ipsum", "groceries"),
        ])
        .unwrap();
        let config = ServerConfig {
            api_prefix: prefix.to_string(),
            ..Default::default()
        };
        Arc::new(ServerHost::from_builder_components(Arc::new(store), config).unwrap())
    }

    #[tokio::test]
    async fn test_health_reports_count() {
        let app = RestExposure::build_router(host("/api"), vec![]).unwrap();
        let server = TestServer::new(app);

        let response = server.get("/health").await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["todos"], 2);
    }

    #[tokio::test]
    async fn test_routes_follow_prefix() {
        let app = RestExposure::build_router(host("/v1"), vec![]).unwrap();
        let server = TestServer::new(app);

        server.get("/v1/todos").await.assert_status_ok();
        server
            .get("/api/todos")
            .await
            .assert_status(axum::http::StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_root_prefix() {
        let app = RestExposure::build_router(host("/"), vec![]).unwrap();
        let server = TestServer::new(app);

        let response = server.get("/todos/b").await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["owner"], "Dawn");
    }
}
