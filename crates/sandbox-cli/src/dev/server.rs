//! Development server.
//!
//! Layout of the axum app:
//!
//! - the sandbox router middleware runs first and may answer on its own;
//! - forwarded requests reach a file router that serves the examples root
//!   under its mount path and the project root for everything else.
//!
//! The file router is nested as the fallback of an outer router so that URI
//! rewrites made by the middleware are visible to its routing.

use crate::dev::router::{route_sandbox, SandboxRouter};
use crate::dev::transform::{HtmlTransform, TagInjector};
use crate::dev::DevConfig;
use crate::error::{CliError, Result};
use axum::{
    http::{header, HeaderValue},
    middleware, Router,
};
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer, services::ServeDir, set_header::SetResponseHeaderLayer, trace::TraceLayer,
};

/// Development server.
pub struct DevServer {
    /// Server configuration
    config: DevConfig,
    /// Hook applied to synthesized pages
    transform: Arc<dyn HtmlTransform>,
}

impl DevServer {
    /// Create a new development server using the configured tag injector.
    pub fn new(config: DevConfig) -> Self {
        let transform = Arc::new(TagInjector::from_config(&config.base.inject));
        Self { config, transform }
    }

    /// Replace the HTML transform hook.
    pub fn with_transform(mut self, transform: Arc<dyn HtmlTransform>) -> Self {
        self.transform = transform;
        self
    }

    /// Start the development server and serve until the task is dropped.
    ///
    /// # Errors
    ///
    /// Returns error if server cannot bind to configured address
    pub async fn start(self) -> Result<()> {
        let addr = self.config.addr;
        let server_url = self.config.server_url();

        let app = self.build_app();

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| CliError::Server(format!("Failed to bind to {}: {}", addr, e)))?;

        crate::ui::success(&format!("Development server running at {}", server_url));

        axum::serve(listener, app)
            .await
            .map_err(|e| CliError::Server(format!("Server error: {}", e)))?;

        Ok(())
    }

    /// Build the axum app with all routes and layers.
    pub fn build_app(&self) -> Router {
        let base = &self.config.base;
        let examples_root = base.examples_root();
        let mount = base.examples_mount();

        let router = SandboxRouter::new(
            examples_root.clone(),
            mount.clone(),
            base.html.lang.clone(),
            self.transform.clone(),
        );

        let files = Router::new()
            .nest_service(&mount, ServeDir::new(&examples_root))
            .fallback_service(ServeDir::new(base.project_root()))
            .layer(SetResponseHeaderLayer::overriding(
                header::CACHE_CONTROL,
                HeaderValue::from_static("no-cache"),
            ));

        Router::new()
            .fallback_service(files)
            .layer(middleware::from_fn_with_state(router, route_sandbox))
            .layer(TraceLayer::new_for_http())
            // Dev server: allow every origin
            .layer(CorsLayer::permissive())
    }
}
