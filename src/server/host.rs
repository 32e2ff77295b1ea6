//! Server host for transport-agnostic API exposure
//!
//! `ServerHost` holds the state every exposure needs: the configuration and
//! the todo service. It is built once, before the listener binds, and shared
//! read-only afterwards.

use crate::config::ServerConfig;
use crate::core::TodoService;
use anyhow::Result;
use std::sync::Arc;

/// Host context containing all service state
pub struct ServerHost {
    /// Validated server configuration
    pub config: Arc<ServerConfig>,

    /// Todo service answering list and get requests
    pub service: Arc<dyn TodoService>,
}

impl ServerHost {
    /// Build the host from builder components
    ///
    /// Fails if the configuration does not validate.
    pub fn from_builder_components(
        service: Arc<dyn TodoService>,
        config: ServerConfig,
    ) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            config: Arc::new(config),
            service,
        })
    }

    /// Number of todos being served
    pub fn todo_count(&self) -> usize {
        self.service.count()
    }
}
